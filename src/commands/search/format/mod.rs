//! Output formatting for the search command

mod human;
mod json;
mod records;

pub use human::output_human;
pub use json::output_json;
pub use records::output_records;

#[cfg(test)]
pub(crate) mod fixtures {
    use wayfind_core::demo;
    use wayfind_core::problem::Problem;
    use wayfind_core::search::{search, SearchOutcome, Strategy};

    pub fn demo_outcome(strategy: Strategy) -> (Problem, SearchOutcome) {
        let problem = demo::problem();
        let outcome = search(
            strategy,
            &problem.graph,
            demo::START,
            demo::GOAL,
            problem.heuristics.as_ref(),
        )
        .unwrap();
        (problem, outcome)
    }
}
