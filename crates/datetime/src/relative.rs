use chrono::NaiveDateTime;

use crate::format::{NOT_AVAILABLE, render_payload_date};
use crate::input::{DateValue, ToDateValue};

enum Phrase {
	/// `"{n} {unit} ago"` with `n = floor(seconds / divisor)`.
	Count { unit: &'static str, divisor: f64 },
	Fixed { past: &'static str, future: &'static str },
}

/// Upper bound in seconds (exclusive) and the phrasing used below it.
const TIME_AGO_STEPS: [(f64, Phrase); 15] = [
	(60.0, Phrase::Count { unit: "seconds", divisor: 1.0 }),
	(120.0, Phrase::Fixed { past: "1 minute ago", future: "1 minute from now" }),
	(3_600.0, Phrase::Count { unit: "minutes", divisor: 60.0 }),
	(7_200.0, Phrase::Fixed { past: "1 hour ago", future: "1 hour from now" }),
	(86_400.0, Phrase::Count { unit: "hours", divisor: 3_600.0 }),
	(172_800.0, Phrase::Fixed { past: "Yesterday", future: "Tomorrow" }),
	(604_800.0, Phrase::Count { unit: "days", divisor: 86_400.0 }),
	(1_209_600.0, Phrase::Fixed { past: "Last week", future: "Next week" }),
	(2_419_200.0, Phrase::Count { unit: "weeks", divisor: 604_800.0 }),
	(4_838_400.0, Phrase::Fixed { past: "Last month", future: "Next month" }),
	(29_030_400.0, Phrase::Count { unit: "months", divisor: 2_419_200.0 }),
	(58_060_800.0, Phrase::Fixed { past: "Last year", future: "Next year" }),
	(2_903_040_000.0, Phrase::Count { unit: "years", divisor: 29_030_400.0 }),
	(5_806_080_000.0, Phrase::Fixed { past: "Last century", future: "Next century" }),
	(58_060_800_000.0, Phrase::Count { unit: "centuries", divisor: 2_903_040_000.0 }),
];

/// Relative phrasing of `then` as seen from `now`, e.g. `"5 minutes ago"`,
/// `"Yesterday"`, `"3 days from now"`.
///
/// A missing date reads as `now` (`"Just now"`); an invalid one renders
/// [`NOT_AVAILABLE`]. Distances past the last step fall back to the
/// `YYYY-MM-DD` date.
pub fn time_ago(then: impl ToDateValue, now: NaiveDateTime) -> String {
	let then = match then.to_date_value() {
		DateValue::Missing => now,
		DateValue::Invalid => return NOT_AVAILABLE.to_owned(),
		DateValue::Valid(at) => at,
	};

	let mut seconds = (now - then).num_milliseconds() as f64 / 1000.0;
	if seconds == 0.0 {
		return "Just now".to_owned();
	}
	let future = seconds < 0.0;
	if future {
		seconds = seconds.abs();
	}
	let token = if future { "from now" } else { "ago" };

	for (limit, phrase) in &TIME_AGO_STEPS {
		if seconds < *limit {
			return match phrase {
				Phrase::Count { unit, divisor } => format!("{} {unit} {token}", (seconds / divisor).floor() as u64),
				Phrase::Fixed { past, future: ahead } => (if future { *ahead } else { *past }).to_owned(),
			};
		}
	}
	render_payload_date(then).unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Compact distance between `then` and `now` in either direction:
/// `"Just now"`, `"12m"`, `"3h"`, `"4d"`, `"2w"`, `"5m"` (months), `"1y"`.
///
/// Every unit rounds down, so anything under a minute is `"Just now"`.
/// Missing or invalid input renders [`NOT_AVAILABLE`].
pub fn format_date_distance(then: impl ToDateValue, now: NaiveDateTime) -> String {
	let Some(then) = then.to_date_value().valid() else {
		return NOT_AVAILABLE.to_owned();
	};
	let diff = (then - now).num_milliseconds().unsigned_abs();
	let days = diff / DAY_MS;

	if days < 1 {
		let hours = diff / HOUR_MS;
		if hours < 1 {
			let minutes = diff / MINUTE_MS;
			if minutes < 1 { "Just now".to_owned() } else { format!("{minutes}m") }
		} else {
			format!("{hours}h")
		}
	} else if days < 7 {
		format!("{days}d")
	} else if days < 30 {
		format!("{}w", days / 7)
	} else if days < 365 {
		format!("{}m", days / 30)
	} else {
		format!("{}y", days / 365)
	}
}
