//! Date calculators: calendar difference, ISO week lookup, business-day
//! counting, and calendar-aware date shifting.
//!
//! Every function takes ISO `YYYY-MM-DD` strings so results stay
//! deterministic; the host page passes "today" explicitly where a tool
//! needs it.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar distance between two dates, plus flat totals for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u64,
    pub total_weeks: u64,
    pub remaining_days: u32,
}

/// ISO-8601 week position of a date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IsoWeekInfo {
    pub iso_year: i32,
    pub week: u32,
    pub weekday: String,
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {}", input.trim()))
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Calendar-aware difference between two dates.
///
/// Endpoints are swapped when given in reverse order, so the components are
/// always non-negative. The month component borrows against real month
/// lengths: the span is first reduced to whole calendar months (one fewer
/// when the end day-of-month has not yet been reached), and the day
/// remainder is measured from that clamped anchor.
pub fn date_difference(start: &str, end: &str) -> Result<DateDiff, String> {
    let (start, end) = ordered(parse_date(start)?, parse_date(end)?);

    let mut whole_months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        whole_months -= 1;
    }
    // start <= end guarantees the adjusted span is non-negative.
    let whole_months = whole_months.max(0) as u32;

    let anchor = start
        .checked_add_months(Months::new(whole_months))
        .ok_or_else(|| "date out of range".to_string())?;
    let days = (end - anchor).num_days() as u32;

    let total_days = (end - start).num_days() as u64;
    Ok(DateDiff {
        years: whole_months / 12,
        months: whole_months % 12,
        days,
        total_days,
        total_weeks: total_days / 7,
        remaining_days: (total_days % 7) as u32,
    })
}

/// ISO week number, ISO week-based year, and weekday name for a date.
pub fn iso_week(date: &str) -> Result<IsoWeekInfo, String> {
    let date = parse_date(date)?;
    let week = date.iso_week();
    Ok(IsoWeekInfo {
        iso_year: week.year(),
        week: week.week(),
        weekday: date.format("%A").to_string(),
    })
}

/// Counts Monday–Friday dates in the inclusive `[start, end]` range.
/// Reversed endpoints are swapped.
pub fn business_days(start: &str, end: &str) -> Result<u32, String> {
    let (start, end) = ordered(parse_date(start)?, parse_date(end)?);
    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(count as u32)
}

/// Shifts a date by calendar years/months/days. Month arithmetic clamps to
/// the end of the target month (Jan 31 + 1 month = Feb 28/29); negative
/// offsets subtract.
pub fn add_to_date(date: &str, years: i32, months: i32, days: i32) -> Result<String, String> {
    let date = parse_date(date)?;
    let out_of_range = || "resulting date is out of range".to_string();

    // A year/month combination can overflow u32 months; reject it instead of
    // letting the magnitude wrap into a nearby valid date.
    let month_offset = years as i64 * 12 + months as i64;
    let month_magnitude =
        u32::try_from(month_offset.unsigned_abs()).map_err(|_| out_of_range())?;
    let shifted = if month_offset >= 0 {
        date.checked_add_months(Months::new(month_magnitude))
    } else {
        date.checked_sub_months(Months::new(month_magnitude))
    };

    let day_magnitude = Days::new(u64::from(days.unsigned_abs()));
    let shifted = if days >= 0 {
        shifted.and_then(|d| d.checked_add_days(day_magnitude))
    } else {
        shifted.and_then(|d| d.checked_sub_days(day_magnitude))
    };

    shifted
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(out_of_range)
}

/// 1-based ordinal day within the year.
pub fn day_of_year(date: &str) -> Result<u32, String> {
    Ok(parse_date(date)?.ordinal())
}
