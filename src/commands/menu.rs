//! `wayfind menu` command - interactive strategy picker
//!
//! Reads one choice per line. `0` or end of input ends the session; a
//! failing search is reported and the loop continues.

use std::io::{self, BufRead, Write};

use wayfind_core::error::Result;
use wayfind_core::problem::Problem;
use wayfind_core::search::{search, Strategy};

use crate::cli::OutputFormat;
use crate::commands::search::{write_report, SearchReport};

const SEPARATOR_WIDTH: usize = 40;
const PROMPT: &str = "Enter the number of your choice: ";

/// What an interactive session searches
pub struct MenuSession<'a> {
    pub problem: &'a Problem,
    pub start: &'a str,
    pub goal: &'a str,
    pub show_trace: bool,
}

enum Choice {
    Exit,
    Run(Strategy),
}

/// Execute the menu command on stdin/stdout
pub fn execute(session: &MenuSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(stdin.lock(), &mut out, session)
}

pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    session: &MenuSession,
) -> Result<()> {
    writeln!(out, "Welcome to wayfind!")?;
    writeln!(
        out,
        "Find a path from {} to {}, one strategy at a time.",
        session.start, session.goal
    )?;
    writeln!(out, "Choose a strategy to explore:")?;

    loop {
        write_menu(out)?;

        let choice = match read_choice(&mut input, out)? {
            Some(choice) => choice,
            None => {
                tracing::debug!("menu_input_closed");
                writeln!(out)?;
                return Ok(());
            }
        };

        let strategy = match choice {
            Choice::Exit => {
                writeln!(out, "GoodBye...")?;
                return Ok(());
            }
            Choice::Run(strategy) => strategy,
        };

        writeln!(out)?;
        writeln!(out, "You chose: {}", strategy.display_name())?;
        writeln!(out)?;

        if let Err(e) = run_choice(out, session, strategy) {
            tracing::debug!(strategy = strategy.short_name(), error = %e, "menu_choice_failed");
            writeln!(out, "An error occurred: {}", e)?;
        }
    }
}

fn write_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for strategy in Strategy::ALL {
        writeln!(out, "{}. {}", strategy.index(), strategy.display_name())?;
    }
    writeln!(out, "0. Exit")?;
    Ok(())
}

/// Prompt until a valid choice is read. `None` on end of input.
fn read_choice(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Choice>> {
    let max = Strategy::ALL.len();
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<i64>() {
            Ok(0) => return Ok(Some(Choice::Exit)),
            Ok(number) => match usize::try_from(number).ok().and_then(Strategy::from_index) {
                Some(strategy) => return Ok(Some(Choice::Run(strategy))),
                None => writeln!(
                    out,
                    "Invalid choice. Please enter a number between 0 and {}.",
                    max
                )?,
            },
            Err(_) if is_integer(line.trim()) => writeln!(
                out,
                "Invalid choice. Please enter a number between 0 and {}.",
                max
            )?,
            Err(_) => writeln!(out, "Invalid input. Please enter a valid number.")?,
        }
    }
}

/// Optional sign followed by ASCII digits
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn run_choice(out: &mut impl Write, session: &MenuSession, strategy: Strategy) -> Result<()> {
    let problem = session.problem;
    let outcome = search(
        strategy,
        &problem.graph,
        session.start,
        session.goal,
        problem.heuristics.as_ref(),
    )?;
    let report = SearchReport::build(
        problem,
        strategy,
        session.start,
        session.goal,
        &outcome,
        session.show_trace,
    )?;
    write_report(out, OutputFormat::Human, &report, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wayfind_core::demo;

    fn session_output(problem: &Problem, input: &str) -> String {
        let session = MenuSession {
            problem,
            start: "S",
            goal: "R",
            show_trace: false,
        };
        let mut out = Vec::new();
        run_session(Cursor::new(input.as_bytes()), &mut out, &session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_lists_strategies_and_exit() {
        let text = session_output(&demo::problem(), "0\n");
        assert!(text.contains(&"-".repeat(40)));
        assert!(text.contains("1. Depth-First Search (DFS)\n"));
        assert!(text.contains("3. Uniform Cost Search\n"));
        assert!(text.contains("0. Exit\n"));
        assert!(text.ends_with("GoodBye...\n"));
    }

    #[test]
    fn test_choice_runs_strategy_then_menu_again() {
        let text = session_output(&demo::problem(), "3\n0\n");
        assert!(text.contains("You chose: Uniform Cost Search"));
        assert!(text.contains("Path: S -> D -> R"));
        assert!(text.contains("Cost: 25"));
        assert_eq!(text.matches("0. Exit").count(), 2);
    }

    #[test]
    fn test_invalid_entries_reprompt() {
        let text = session_output(&demo::problem(), "9\nabc\n-1\n0\n");
        assert_eq!(
            text.matches("Invalid choice. Please enter a number between 0 and 5.")
                .count(),
            2
        );
        assert!(text.contains("Invalid input. Please enter a valid number."));
        assert_eq!(text.matches(PROMPT).count(), 4);
        assert!(text.contains("GoodBye..."));
    }

    #[test]
    fn test_overlong_number_is_an_invalid_choice() {
        let text = session_output(&demo::problem(), "99999999999999999999\n1x\n0\n");
        assert_eq!(
            text.matches("Invalid choice. Please enter a number between 0 and 5.")
                .count(),
            1
        );
        assert_eq!(
            text.matches("Invalid input. Please enter a valid number.")
                .count(),
            1
        );
    }

    #[test]
    fn test_error_is_reported_and_loop_continues() {
        let problem = Problem {
            heuristics: None,
            ..demo::problem()
        };
        let text = session_output(&problem, "4\n1\n0\n");
        assert!(text.contains("An error occurred: A* Search requires a heuristic table"));
        assert!(text.contains("Path: S -> E -> R"));
        assert!(text.contains("GoodBye..."));
    }

    #[test]
    fn test_end_of_input_closes_session() {
        let text = session_output(&demo::problem(), "2\n");
        assert!(text.contains("Path: S -> A -> R"));
        assert!(!text.contains("GoodBye..."));
    }
}
