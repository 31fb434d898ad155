//! Built-in demonstration problem: a career path from graduation (S) to
//! retirement (R), with edge weights in years.

use crate::graph::{Graph, Heuristics};
use crate::journey::Journey;
use crate::problem::Problem;

pub const START: &str = "S";
pub const GOAL: &str = "R";

pub fn graph() -> Graph {
    Graph::from_adjacency([
        ("A", vec![("B", 2.0), ("R", 30.0)]),
        ("B", vec![("A", 1.0), ("C", 12.0), ("D", 3.0), ("E", 3.0)]),
        ("C", vec![("D", 6.0), ("E", 2.0)]),
        ("D", vec![("E", 5.0), ("R", 21.0)]),
        ("E", vec![("R", 40.0)]),
        ("S", vec![("A", 5.0), ("B", 8.0), ("D", 4.0), ("E", 1.0)]),
        ("R", vec![]),
    ])
}

pub fn heuristics() -> Heuristics {
    [
        ("A", 40.0),
        ("B", 30.0),
        ("C", 30.0),
        ("D", 35.0),
        ("E", 2.0),
        ("S", 25.0),
        ("R", 0.0),
    ]
    .into_iter()
    .collect()
}

pub fn journey() -> Journey {
    let descriptions = [
        ("S", "Starting your journey in Sultan Qaboos University, then"),
        ("A", "you'll find yourself in Industry, more years later"),
        ("B", "you'll advance to Grad School, then"),
        ("C", "dedication leads you to becoming a Professor, after that"),
        ("D", "you'll reach Government service. Then,"),
        ("E", "more years of hard work, you'll embrace entrepreneurship."),
        (
            "R",
            "Finally, Retirement awaits you, with years of relaxation and joy ahead... Enjoy the journey :)",
        ),
    ];
    let labels = [
        ("A", "Industry"),
        ("B", "Grad School"),
        ("C", "Professor Job"),
        ("D", "Government"),
        ("E", "Entrepreneur"),
        ("R", "Retirement"),
        ("S", "SQU"),
    ];

    Journey {
        descriptions: descriptions
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        labels: labels
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// The complete demonstration problem
pub fn problem() -> Problem {
    Problem {
        graph: graph(),
        heuristics: Some(heuristics()),
        start: Some(START.to_string()),
        goal: Some(GOAL.to_string()),
        journey: journey(),
    }
}
