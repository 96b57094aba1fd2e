use anyhow::Context;
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

pub const PROJECTION_MONTHS: usize = 12;

/// Accepts `YYYY-MM-DD` or `YYYY-MM` (first of the month).
///
/// The whole projection window starting at the anchor must fit in the calendar.
pub fn parse_anchor(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    let anchor = match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").with_context(|| {
            format!("invalid projection anchor {s:?} (expected YYYY-MM or YYYY-MM-DD)")
        })?,
    };
    anyhow::ensure!(
        projection_months(anchor, PROJECTION_MONTHS).is_some(),
        "projection anchor {anchor} is too late: {PROJECTION_MONTHS} months from it run past the calendar"
    );
    Ok(anchor)
}

pub fn resolve_anchor(
    anchor_arg: Option<&str>,
    now_utc: DateTime<Utc>,
) -> anyhow::Result<NaiveDate> {
    if let Some(s) = anchor_arg {
        return parse_anchor(s);
    }
    Ok(now_utc.date_naive())
}

/// First day of each of `count` consecutive months starting at the anchor's month.
///
/// `None` if any of those months is outside chrono's date range.
pub fn projection_months(anchor: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    // Step from the 1st so short months never push the label forward (Jan 31 + 1 month).
    let first = anchor.with_day(1)?;
    (0..count)
        .map(|i| {
            let step = u32::try_from(i).ok()?;
            first.checked_add_months(Months::new(step))
        })
        .collect()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
