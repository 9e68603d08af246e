//! Date arithmetic for experience periods.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// End of a period: a fixed date or "present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodEnd {
    Present,
    Date(NaiveDate),
}

impl PeriodEnd {
    /// Resolves the end date, using `today` for an open-ended period.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            PeriodEnd::Present => today,
            PeriodEnd::Date(date) => date,
        }
    }
}

impl FromStr for PeriodEnd {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("present") {
            return Ok(PeriodEnd::Present);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(PeriodEnd::Date)
            .with_context(|| format!("Invalid period end '{s}' (expected YYYY-MM-DD or 'present')"))
    }
}

impl TryFrom<String> for PeriodEnd {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PeriodEnd> for String {
    fn from(value: PeriodEnd) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PeriodEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodEnd::Present => f.write_str("present"),
            PeriodEnd::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Whole calendar months from `from` to `to`, floored at zero.
///
/// A month only counts once the day of month has been reached again, so
/// Feb 15 → Mar 14 is 0 months and Feb 15 → Mar 15 is 1.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Formats the span between `from` and `to` as "X yrs Y mos".
///
/// `today` stands in for an open-ended period so callers stay deterministic.
/// Zero parts are omitted; an empty span reads "0 mos".
pub fn format_duration(from: NaiveDate, to: PeriodEnd, today: NaiveDate) -> String {
    let months = months_between(from, to.resolve(today));
    let years = months / 12;
    let rem_months = months % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{years} yr{}", plural(years)));
    }
    if rem_months > 0 {
        parts.push(format!("{rem_months} mo{}", plural(rem_months)));
    }
    if parts.is_empty() {
        parts.push("0 mos".to_string());
    }
    parts.join(" ")
}

/// Formats a period as "Feb 2022 – Jul 2024" (or "– Present").
pub fn format_period(from: NaiveDate, to: PeriodEnd) -> String {
    let end = match to {
        PeriodEnd::Present => "Present".to_string(),
        PeriodEnd::Date(date) => date.format("%b %Y").to_string(),
    };
    format!("{} – {end}", from.format("%b %Y"))
}

fn plural(n: u32) -> &'static str {
    if n > 1 { "s" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_and_months() {
        let today = date(2030, 1, 1);
        assert_eq!(
            format_duration(date(2022, 2, 1), PeriodEnd::Date(date(2024, 7, 1)), today),
            "2 yrs 5 mos"
        );
    }

    #[test]
    fn test_same_day_is_zero_months() {
        let d = date(2024, 7, 1);
        assert_eq!(format_duration(d, PeriodEnd::Date(d), d), "0 mos");
    }

    #[test]
    fn test_end_before_start_floors_at_zero() {
        let today = date(2030, 1, 1);
        assert_eq!(
            format_duration(date(2024, 7, 1), PeriodEnd::Date(date(2023, 1, 1)), today),
            "0 mos"
        );
    }

    #[test]
    fn test_singular_forms() {
        let today = date(2030, 1, 1);
        assert_eq!(
            format_duration(date(2020, 1, 1), PeriodEnd::Date(date(2021, 2, 1)), today),
            "1 yr 1 mo"
        );
        assert_eq!(
            format_duration(date(2020, 1, 1), PeriodEnd::Date(date(2022, 1, 1)), today),
            "2 yrs"
        );
    }

    #[test]
    fn test_present_uses_supplied_today() {
        let from = date(2024, 7, 1);
        assert_eq!(
            format_duration(from, PeriodEnd::Present, date(2024, 8, 1)),
            "1 mo"
        );
        assert_eq!(
            format_duration(from, PeriodEnd::Present, date(2026, 10, 19)),
            "2 yrs 3 mos"
        );
    }

    #[test]
    fn test_partial_month_does_not_count() {
        assert_eq!(months_between(date(2024, 2, 15), date(2024, 3, 14)), 0);
        assert_eq!(months_between(date(2024, 2, 15), date(2024, 3, 15)), 1);
    }

    #[test]
    fn test_period_end_parsing() {
        assert_eq!("present".parse::<PeriodEnd>().unwrap(), PeriodEnd::Present);
        assert_eq!("Present".parse::<PeriodEnd>().unwrap(), PeriodEnd::Present);
        assert_eq!(
            "2024-07-01".parse::<PeriodEnd>().unwrap(),
            PeriodEnd::Date(date(2024, 7, 1))
        );
        assert!("July 2024".parse::<PeriodEnd>().is_err());
    }

    #[test]
    fn test_format_period() {
        assert_eq!(
            format_period(date(2022, 2, 1), PeriodEnd::Date(date(2024, 7, 1))),
            "Feb 2022 – Jul 2024"
        );
        assert_eq!(
            format_period(date(2024, 7, 1), PeriodEnd::Present),
            "Jul 2024 – Present"
        );
    }
}
