use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Month, Months, NaiveDate};

use super::model::{Dataset, DatedSample};

// ---------------------------------------------------------------------------
// Month ranges and month names
// ---------------------------------------------------------------------------

/// First-of-month dates from `start` to `end`, both inclusive.
/// Day components are ignored. Empty when `end` precedes `start`.
pub fn month_starts(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let (Some(mut current), Some(last)) = (start.with_day(1), end.with_day(1)) else {
        return Vec::new();
    };
    let mut dates = Vec::new();
    while current <= last {
        dates.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Full English name of the month of `date`, e.g. `"March"`.
pub fn month_name(date: NaiveDate) -> &'static str {
    Month::try_from(date.month() as u8)
        .map(|m| m.name())
        .unwrap_or("")
}

/// First-of-month date for a `(year, month name)` pair.
pub fn date_for(year: i32, month: &str) -> Result<NaiveDate> {
    let parsed: Month = month
        .trim()
        .parse()
        .map_err(|_| anyhow!("unrecognised month name '{month}'"))?;
    NaiveDate::from_ymd_opt(year, parsed.number_from_month(), 1)
        .with_context(|| format!("no calendar date for {month} {year}"))
}

/// Attach a calendar date to every sample. The first unparseable month
/// aborts the whole conversion.
pub fn with_dates(dataset: &Dataset) -> Result<Vec<DatedSample>> {
    dataset
        .samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let date = date_for(s.year, &s.month)
                .with_context(|| format!("deriving date for row {i}"))?;
            Ok(DatedSample {
                date,
                sample: s.clone(),
            })
        })
        .collect()
}
