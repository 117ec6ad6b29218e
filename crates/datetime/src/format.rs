use chrono::Timelike;

use crate::input::{DateValue, ToDateValue};

/// Placeholder rendered for missing or unparseable dates.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders `YYYY-MM-DD`, or `DD-MM-YYYY` when `day_first` is set.
///
/// Returns [`NOT_AVAILABLE`] for missing or invalid input.
pub fn render_date(date: impl ToDateValue, day_first: bool) -> String {
	let Some(at) = date.to_date_value().valid() else {
		return NOT_AVAILABLE.to_owned();
	};
	if day_first {
		at.format("%d-%m-%Y").to_string()
	} else {
		at.format("%Y-%m-%d").to_string()
	}
}

/// Renders `YYYY-MM-DD` for request payloads; `None` when there is no usable date.
pub fn render_payload_date(date: impl ToDateValue) -> Option<String> {
	date.to_date_value().valid().map(|at| at.format("%Y-%m-%d").to_string())
}

/// Renders `"5 Jan"`.
///
/// `None` for a missing date; `placeholder` (default [`NOT_AVAILABLE`]) for an
/// invalid one.
pub fn render_short_date(date: impl ToDateValue, placeholder: Option<&str>) -> Option<String> {
	render_with(date, placeholder, "%-d %b")
}

/// Renders `"Jan 2023"`, with the same fallbacks as [`render_short_date`].
pub fn render_short_month_date(date: impl ToDateValue, placeholder: Option<&str>) -> Option<String> {
	render_with(date, placeholder, "%b %Y")
}

fn render_with(date: impl ToDateValue, placeholder: Option<&str>, pattern: &str) -> Option<String> {
	match date.to_date_value() {
		DateValue::Missing => None,
		DateValue::Invalid => Some(placeholder.unwrap_or(NOT_AVAILABLE).to_owned()),
		DateValue::Valid(at) => Some(at.format(pattern).to_string()),
	}
}

/// Renders `"Jan 01, 2023"`; empty for missing or invalid input.
pub fn render_formatted_date(date: impl ToDateValue) -> String {
	date.to_date_value()
		.valid()
		.map(|at| at.format("%b %d, %Y").to_string())
		.unwrap_or_default()
}

/// Renders a 12-hour clock time such as `"1:05 PM"` or `"12:30 AM"`.
///
/// Empty for missing or invalid input.
pub fn render_12_hour_time(date: impl ToDateValue) -> String {
	let Some(at) = date.to_date_value().valid() else {
		return String::new();
	};
	let (pm, hour) = at.hour12();
	let period = if pm { "PM" } else { "AM" };
	format!("{hour}:{:02} {period}", at.minute())
}

/// Renders a 24-hour clock time such as `"13:05"` or `"9:00"`.
///
/// Empty for missing or invalid input.
pub fn render_24_hour_time(date: impl ToDateValue) -> String {
	let Some(at) = date.to_date_value().valid() else {
		return String::new();
	};
	format!("{}:{:02}", at.hour(), at.minute())
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use rstest::rstest;

	use super::*;

	#[test]
	fn date_forms() {
		assert_eq!(render_date("2023-01-01", false), "2023-01-01");
		assert_eq!(render_date("2023-01-01", true), "01-01-2023");
		assert_eq!(render_date(None::<&str>, false), "N/A");
		assert_eq!(render_date("not a date", true), "N/A");
		assert_eq!(render_date(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(), true), "09-02-2024");
	}

	#[test]
	fn payload_date() {
		assert_eq!(render_payload_date("2023-01-01T23:59:00").as_deref(), Some("2023-01-01"));
		assert_eq!(render_payload_date(""), None);
		assert_eq!(render_payload_date("nope"), None);
	}

	#[test]
	fn short_dates() {
		assert_eq!(render_short_date("2023-01-05", None).as_deref(), Some("5 Jan"));
		assert_eq!(render_short_date("2023-11-25", None).as_deref(), Some("25 Nov"));
		assert_eq!(render_short_date("", None), None);
		assert_eq!(render_short_date("bad", None).as_deref(), Some("N/A"));
		assert_eq!(render_short_date("bad", Some("-")).as_deref(), Some("-"));
		assert_eq!(render_short_month_date("2023-01-05", None).as_deref(), Some("Jan 2023"));
		assert_eq!(render_short_month_date(None::<String>, Some("-")), None);
	}

	#[test]
	fn formatted_date() {
		assert_eq!(render_formatted_date("2023-01-01"), "Jan 01, 2023");
		assert_eq!(render_formatted_date(""), "");
	}

	#[rstest]
	#[case("2023-01-01T00:05", "12:05 AM", "0:05")]
	#[case("2023-01-01T09:00", "9:00 AM", "9:00")]
	#[case("2023-01-01T12:30", "12:30 PM", "12:30")]
	#[case("2023-01-01T13:05", "1:05 PM", "13:05")]
	#[case("2023-01-01T23:59", "11:59 PM", "23:59")]
	fn clock_times(#[case] input: &str, #[case] twelve: &str, #[case] twenty_four: &str) {
		assert_eq!(render_12_hour_time(input), twelve);
		assert_eq!(render_24_hour_time(input), twenty_four);
	}

	#[test]
	fn clock_times_fallback() {
		assert_eq!(render_12_hour_time(""), "");
		assert_eq!(render_24_hour_time("garbage"), "");
	}
}
