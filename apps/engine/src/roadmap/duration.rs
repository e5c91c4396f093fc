//! Checkpoint time-estimate parsing and total-duration formatting.

use std::sync::OnceLock;

use regex::Regex;

const DEFAULT_WEEKS: u32 = 4;
const WEEKS_PER_MONTH: u32 = 4;
const MONTHS_PER_YEAR: u32 = 12;

fn digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static digit pattern"))
}

/// The first integer in a time-estimate string, taken as the base week count.
/// "4-6 weeks" parses as 4; strings without digits default to 4.
pub fn parse_weeks(estimate: &str) -> u32 {
    digits()
        .find(estimate)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_WEEKS)
}

/// Formats a total week count for display: plain weeks up to 12, months up
/// to a year, then years with a remainder-months clause.
pub fn format_duration(total_weeks: u32) -> String {
    if total_weeks <= 12 {
        return format!("{total_weeks} weeks");
    }
    let months = total_weeks / WEEKS_PER_MONTH;
    if total_weeks <= 52 {
        return format!("{months} months");
    }
    let years = months / MONTHS_PER_YEAR;
    let remaining = months % MONTHS_PER_YEAR;
    let year_part = format!("{years} year{}", if years > 1 { "s" } else { "" });
    if remaining == 0 {
        year_part
    } else {
        format!(
            "{year_part} {remaining} month{}",
            if remaining > 1 { "s" } else { "" }
        )
    }
}
