//! Text rendering helpers shared by the human and records outputs

use crate::search::Snapshot;

/// Render a weight without a trailing `.0` when it is integral
pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() && weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// `S -> D -> R`
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" -> ")
}

/// `[[S], [S, A]]`
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let paths: Vec<String> = snapshot
        .paths()
        .iter()
        .map(|path| format!("[{}]", path.join(", ")))
        .collect();
    format!("[{}]", paths.join(", "))
}
