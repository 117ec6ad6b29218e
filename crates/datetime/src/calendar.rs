use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::input::ToDateValue;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Whole days between `date` and `now` in either direction, rounded up.
pub fn days_left(date: impl ToDateValue, now: NaiveDateTime) -> Option<u64> {
	let date = date.to_date_value().valid()?;
	let diff = (date - now).num_milliseconds().unsigned_abs();
	Some(diff.div_ceil(DAY_MS as u64))
}

/// Days from `start` to `end`, rounded down, plus one when `inclusive`.
///
/// `0` when either end is missing or invalid.
pub fn total_days_in_range(start: impl ToDateValue, end: impl ToDateValue, inclusive: bool) -> i64 {
	let (Some(start), Some(end)) = (start.to_date_value().valid(), end.to_date_value().valid()) else {
		return 0;
	};
	let days = (end - start).num_milliseconds().div_euclid(DAY_MS);
	if inclusive { days + 1 } else { days }
}

/// Week of the year counting from January 1st in blocks of seven days
/// (`2023-09-01` is week 35).
pub fn week_number(date: impl ToDateValue) -> Option<u32> {
	let date = date.to_date_value().valid()?;
	Some(week_of(date))
}

fn week_of(date: NaiveDateTime) -> u32 {
	let elapsed = date.ordinal0() as u64;
	(elapsed + 1).div_ceil(7) as u32
}

/// Sunday starting the [`week_number`] week of `date`.
pub fn first_date_of_week(date: impl ToDateValue) -> Option<NaiveDate> {
	let date = date.to_date_value().valid()?;
	let january_first = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
	let week_start = january_first + Duration::days(i64::from(week_of(date).saturating_sub(1)) * 7);
	let since_sunday = week_start.weekday().num_days_from_sunday();
	Some(week_start - Duration::days(i64::from(since_sunday)))
}

/// Where `now` falls relative to a start/end range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeStatus {
	/// One end of the range is not set.
	Draft,
	Current,
	Upcoming,
	Completed,
}

impl DateRangeStatus {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Draft => "draft",
			Self::Current => "current",
			Self::Upcoming => "upcoming",
			Self::Completed => "completed",
		}
	}
}

pub fn date_range_status(start: impl ToDateValue, end: impl ToDateValue, now: NaiveDateTime) -> DateRangeStatus {
	let (Some(start), Some(end)) = (start.to_date_value().valid(), end.to_date_value().valid()) else {
		return DateRangeStatus::Draft;
	};
	if start <= now && end >= now {
		DateRangeStatus::Current
	} else if start > now {
		DateRangeStatus::Upcoming
	} else {
		DateRangeStatus::Completed
	}
}

/// True when both dates parse and `start` is strictly before `end`.
pub fn is_date_range_valid(start: impl ToDateValue, end: impl ToDateValue) -> bool {
	matches!(
		(start.to_date_value().valid(), end.to_date_value().valid()),
		(Some(start), Some(end)) if start < end
	)
}

/// True when `date` parses and lies strictly after `now`.
pub fn is_date_after(date: impl ToDateValue, now: NaiveDateTime) -> bool {
	date.to_date_value().valid().is_some_and(|date| date > now)
}

/// Half-hour clock slots offered by time pickers.
pub const HALF_HOUR_INTERVALS: [&str; 24] = [
	"12:00", "12:30", "01:00", "01:30", "02:00", "02:30", "03:00", "03:30", "04:00", "04:30", "05:00", "05:30", "06:00", "06:30", "07:00",
	"07:30", "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
];

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn at(date: &str) -> NaiveDateTime {
		crate::parse_date_input(date).unwrap()
	}

	#[test]
	fn days_left_rounds_up_both_directions() {
		let now = at("2024-01-10T12:00");
		assert_eq!(days_left("2024-01-12", now), Some(2));
		assert_eq!(days_left("2024-01-08T13:00", now), Some(2));
		assert_eq!(days_left("2024-01-10T12:00", now), Some(0));
		assert_eq!(days_left("", now), None);
	}

	#[rstest]
	#[case("2021-01-01", "2021-01-08", true, 8)]
	#[case("2021-01-01", "2021-01-08", false, 7)]
	#[case("2021-01-08", "2021-01-01", false, -7)]
	#[case("2021-01-01T00:00", "2021-01-01T23:00", false, 0)]
	#[case("", "2021-01-08", true, 0)]
	fn range_days(#[case] start: &str, #[case] end: &str, #[case] inclusive: bool, #[case] expected: i64) {
		assert_eq!(total_days_in_range(start, end, inclusive), expected);
	}

	#[rstest]
	#[case("2023-01-01", 1)]
	#[case("2023-01-07", 1)]
	#[case("2023-01-08", 2)]
	#[case("2023-09-01", 35)]
	#[case("2023-12-31", 53)]
	fn week_numbers(#[case] date: &str, #[case] expected: u32) {
		assert_eq!(week_number(date), Some(expected));
	}

	#[test]
	fn first_day_of_week_is_sunday() {
		assert_eq!(first_date_of_week("2023-09-01"), NaiveDate::from_ymd_opt(2023, 8, 27));
		// 2024-01-01 is a Monday; the week block starts on the Sunday before.
		assert_eq!(first_date_of_week("2024-01-03"), NaiveDate::from_ymd_opt(2023, 12, 31));
		assert_eq!(first_date_of_week("bad"), None);
	}

	#[test]
	fn range_status() {
		let now = at("2024-03-10");
		assert_eq!(date_range_status(None::<&str>, Some("2024-03-20"), now), DateRangeStatus::Draft);
		assert_eq!(date_range_status("2024-03-01", "2024-03-20", now), DateRangeStatus::Current);
		assert_eq!(date_range_status("2024-03-10", "2024-03-10", now), DateRangeStatus::Current);
		assert_eq!(date_range_status("2024-03-11", "2024-03-20", now), DateRangeStatus::Upcoming);
		assert_eq!(date_range_status("2024-02-01", "2024-03-09", now).as_str(), "completed");
	}

	#[test]
	fn comparisons() {
		assert!(is_date_range_valid("2024-01-01", "2024-01-02"));
		assert!(!is_date_range_valid("2024-01-02", "2024-01-02"));
		assert!(!is_date_range_valid("2024-01-01", "soon"));
		let now = at("2024-01-01T08:00");
		assert!(is_date_after("2024-01-02", now));
		assert!(!is_date_after("2024-01-01", now));
	}

	#[test]
	fn half_hour_slots() {
		assert_eq!(HALF_HOUR_INTERVALS.first(), Some(&"12:00"));
		assert_eq!(HALF_HOUR_INTERVALS.last(), Some(&"11:30"));
	}
}
