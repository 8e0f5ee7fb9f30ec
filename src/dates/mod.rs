//! Calendar arithmetic without I/O operations.
//!
//! This module parses and formats ISO calendar dates, computes ISO 8601 weeks
//! (Monday start, week 1 contains January 4th) and resolves the date range a
//! digest should cover. Nothing here touches the filesystem or the clock; the
//! current date is always passed in by the caller.

use crate::constants;
use crate::errors::DateError;
use chrono::{Datelike, Duration, NaiveDate};

/// An ISO 8601 week, derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoWeek {
    /// The ISO week-numbering year, which can differ from the calendar year
    /// near January 1st.
    pub year: i32,
    /// Week number within `year`.
    pub week: u32,
    /// First day of the week.
    pub monday: NaiveDate,
    /// Last day of the week.
    pub sunday: NaiveDate,
}

impl IsoWeek {
    /// The `YYYY-Www` label for this week.
    pub fn label(&self) -> String {
        format_iso_week(self.year, self.week)
    }
}

/// Parses a date in strict `YYYY-MM-DD` form.
///
/// The shape is checked first (four digit year, two digit month and day), then
/// the date is validated against the calendar, so `2023-02-30` is rejected.
///
/// # Examples
///
/// ```
/// use curate::dates::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// assert!(parse_date("2023-2-1").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let invalid = || DateError::InvalidDate(input.to_string());

    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }

    let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = input[8..10].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(constants::DATE_FORMAT_ISO).to_string()
}

/// Formats an ISO week as `YYYY-Www`.
pub fn format_iso_week(year: i32, week: u32) -> String {
    format!("{:04}-W{:02}", year, week)
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday of week 1 of `iso_year`: the Monday on or before January 4th.
fn week_one_monday(iso_year: i32) -> NaiveDate {
    let jan4 = NaiveDate::from_ymd_opt(iso_year, 1, 4).unwrap_or(NaiveDate::MIN);
    monday_of(jan4)
}

/// Computes the ISO week containing `date`.
///
/// The ISO year is the calendar year of the Thursday in the same week, so
/// December 29th to 31st can belong to week 1 of the following year and
/// January 1st to 3rd to week 52 or 53 of the previous one.
///
/// # Examples
///
/// ```
/// use curate::dates::{iso_week_of, parse_date};
///
/// let week = iso_week_of(parse_date("2023-01-01").unwrap());
/// assert_eq!((week.year, week.week), (2022, 52));
/// ```
pub fn iso_week_of(date: NaiveDate) -> IsoWeek {
    let monday = monday_of(date);
    let thursday = monday + Duration::days(3);
    let iso_year = thursday.year();
    let offset_days = (monday - week_one_monday(iso_year)).num_days();
    let week = (1 + offset_days / constants::DAYS_PER_WEEK) as u32;

    IsoWeek {
        year: iso_year,
        week,
        monday,
        sunday: monday + Duration::days(6),
    }
}

/// Computes the Monday and Sunday of week `week` in ISO year `iso_year`.
///
/// Week numbers are not clamped to the number of weeks the year actually has:
/// week 53 of a 52-week year yields the first week of the following ISO year,
/// exactly as the arithmetic dictates.
///
/// # Examples
///
/// ```
/// use curate::dates::{week_bounds, parse_date};
///
/// let week = week_bounds(2024, 1);
/// assert_eq!(week.monday, parse_date("2024-01-01").unwrap());
/// assert_eq!(week.sunday, parse_date("2024-01-07").unwrap());
/// ```
pub fn week_bounds(iso_year: i32, week: u32) -> IsoWeek {
    let offset = constants::DAYS_PER_WEEK * (i64::from(week) - 1);
    let monday = week_one_monday(iso_year) + Duration::days(offset);

    IsoWeek {
        year: iso_year,
        week,
        monday,
        sunday: monday + Duration::days(6),
    }
}

/// Parses an ISO week in strict `YYYY-Www` form, week in `1..=53`.
pub fn parse_iso_week(input: &str) -> Result<(i32, u32), DateError> {
    let invalid = || DateError::InvalidWeek(input.to_string());

    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 8
        && bytes[4] == b'-'
        && bytes[5] == b'W'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[6..].iter().all(u8::is_ascii_digit);
    if !shape_ok {
        return Err(invalid());
    }

    let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
    let week: u32 = input[6..8].parse().map_err(|_| invalid())?;
    if !(constants::MIN_ISO_WEEK..=constants::MAX_ISO_WEEK).contains(&week) {
        return Err(invalid());
    }

    Ok((year, week))
}

/// An inclusive span of days with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
    /// `YYYY-Www` for week ranges, `START to END` for explicit ones.
    pub label: String,
}

/// The ways a digest range can be requested.
///
/// # Examples
///
/// ```
/// use curate::dates::{RangeSpecifier, parse_date};
///
/// let today = parse_date("2024-01-10").unwrap();
/// let range = RangeSpecifier::CurrentWeek.resolve(today).unwrap();
/// assert_eq!(range.label, "2024-W02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpecifier {
    /// The ISO week containing the reference date.
    CurrentWeek,
    /// An explicit ISO week.
    Week {
        /// ISO year
        year: i32,
        /// Week number
        week: u32,
    },
    /// An explicit inclusive date span.
    Explicit {
        /// First day
        start: NaiveDate,
        /// Last day
        end: NaiveDate,
    },
}

impl RangeSpecifier {
    /// Builds a specifier from raw command-line values.
    ///
    /// An explicit start/end pair takes precedence over a week; with neither,
    /// the current week is used.
    ///
    /// # Errors
    ///
    /// Returns a `DateError` when any supplied value is malformed.
    pub fn from_cli_args(
        week: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, DateError> {
        if let (Some(start), Some(end)) = (start, end) {
            return Ok(RangeSpecifier::Explicit {
                start: parse_date(start)?,
                end: parse_date(end)?,
            });
        }

        match week {
            Some(week) => {
                let (year, week) = parse_iso_week(week)?;
                Ok(RangeSpecifier::Week { year, week })
            }
            None => Ok(RangeSpecifier::CurrentWeek),
        }
    }

    /// Resolves this specifier against `today`.
    ///
    /// # Errors
    ///
    /// Returns `DateError::EmptyRange` for an explicit range whose start is
    /// after its end.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, DateError> {
        match *self {
            RangeSpecifier::CurrentWeek => {
                let week = iso_week_of(today);
                Ok(DateRange {
                    start: week.monday,
                    end: week.sunday,
                    label: week.label(),
                })
            }
            RangeSpecifier::Week { year, week } => {
                let week = week_bounds(year, week);
                Ok(DateRange {
                    start: week.monday,
                    end: week.sunday,
                    label: week.label(),
                })
            }
            RangeSpecifier::Explicit { start, end } => {
                if start > end {
                    return Err(DateError::EmptyRange { start, end });
                }
                Ok(DateRange {
                    start,
                    end,
                    label: format!("{} to {}", format_date(start), format_date(end)),
                })
            }
        }
    }
}
