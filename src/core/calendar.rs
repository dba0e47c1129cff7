//! Month calendar rendering for `cal`.

use chrono::{Datelike, NaiveDate};

/// Width of a rendered week row: seven two-column days plus separators.
const ROW_WIDTH: usize = 20;

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Render one month in the classic `cal` layout, weeks starting on Monday.
///
/// Returns `None` for an invalid year/month pair.
///
/// ```text
///    November 2024
/// Mo Tu We Th Fr Sa Su
///              1  2  3
///  4  5  6  7  8  9 10
/// ```
pub fn render_month(year: i32, month: u32) -> Option<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days = next.signed_duration_since(first).num_days();

    let title = format!("{} {}", first.format("%B"), year);
    let mut lines = vec![
        format!("{:^width$}", title, width = ROW_WIDTH)
            .trim_end()
            .to_string(),
        WEEKDAY_HEADER.to_string(),
    ];

    let offset = first.weekday().num_days_from_monday() as usize;
    let cells: Vec<String> = std::iter::repeat_n(String::from("  "), offset)
        .chain((1..=days).map(|day| format!("{:>2}", day)))
        .collect();

    for week in cells.chunks(7) {
        lines.push(week.join(" ").trim_end().to_string());
    }

    Some(lines.join("\n"))
}
