//! Date helpers for issue board views.
//!
//! Every function is pure: the same inputs always produce the same string.
//! Functions that compare against "now" take it as an explicit argument.
//! Missing or unparseable dates never panic; each function documents the
//! fallback it returns instead.
//!
//! Inputs are anything implementing [`ToDateValue`]: string slices in
//! `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339 form, chrono values, and
//! `Option`s of those (`None` is a missing date).

mod calendar;
mod format;
mod input;
mod relative;

pub use calendar::{
	DateRangeStatus, HALF_HOUR_INTERVALS, date_range_status, days_left, first_date_of_week, is_date_after, is_date_range_valid,
	total_days_in_range, week_number,
};
pub use format::{
	NOT_AVAILABLE, render_12_hour_time, render_24_hour_time, render_date, render_formatted_date, render_payload_date,
	render_short_date, render_short_month_date,
};
pub use input::{DateValue, ToDateValue, parse_date_input};
pub use relative::{format_date_distance, time_ago};
