use crate::engine::SortOutcome;
use crate::error::Result;
use crate::validator::Reasons;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    algorithm: &'static str,
    sorted: &'a [u32],
    elapsed_seconds: f64,
}

/// `[v1, v2, ..., vn]`
pub fn format_list(values: &[u32]) -> String {
    let body = values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

/// `<whole seconds>.<nanoseconds, nine digits> seconds`
pub fn format_duration(elapsed: Duration) -> String {
    format!(
        "{}.{:09} seconds",
        elapsed.as_secs(),
        elapsed.subsec_nanos()
    )
}

pub fn format_outcome(outcome: &SortOutcome) -> String {
    format!(
        "{}: {}",
        outcome.algorithm.label(),
        format_list(&outcome.sorted)
    )
}

pub fn format_initial(values: &[u32]) -> String {
    format!("Initial values:{}", format_list(values))
}

/// `Error:` followed by one clause per reason, in reason order.
pub fn format_validation_error(reasons: &Reasons) -> String {
    reasons
        .iter()
        .fold(String::from("Error:"), |mut line, reason| {
            line.push(' ');
            line.push_str(reason.clause());
            line
        })
}

pub fn format_outcome_json(outcome: &SortOutcome) -> Result<String> {
    let json = JsonOutcome {
        algorithm: outcome.algorithm.label(),
        sorted: &outcome.sorted,
        elapsed_seconds: outcome.elapsed.as_secs_f64(),
    };
    Ok(serde_json::to_string(&json)?)
}
