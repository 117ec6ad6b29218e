use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A date argument after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
	/// No date was supplied (`None` or an empty string).
	Missing,
	/// Something was supplied but it is not a date.
	Invalid,
	Valid(NaiveDateTime),
}

impl DateValue {
	pub fn valid(self) -> Option<NaiveDateTime> {
		match self {
			Self::Valid(at) => Some(at),
			Self::Missing | Self::Invalid => None,
		}
	}
}

/// Conversion into a [`DateValue`].
pub trait ToDateValue {
	fn to_date_value(&self) -> DateValue;
}

impl ToDateValue for str {
	fn to_date_value(&self) -> DateValue {
		if self.trim().is_empty() {
			return DateValue::Missing;
		}
		parse_date_input(self).map_or(DateValue::Invalid, DateValue::Valid)
	}
}

impl ToDateValue for String {
	fn to_date_value(&self) -> DateValue {
		self.as_str().to_date_value()
	}
}

impl ToDateValue for NaiveDateTime {
	fn to_date_value(&self) -> DateValue {
		DateValue::Valid(*self)
	}
}

impl ToDateValue for NaiveDate {
	fn to_date_value(&self) -> DateValue {
		DateValue::Valid(self.and_time(chrono::NaiveTime::MIN))
	}
}

impl<Tz: TimeZone> ToDateValue for DateTime<Tz> {
	fn to_date_value(&self) -> DateValue {
		DateValue::Valid(self.naive_local())
	}
}

impl<T: ToDateValue + ?Sized> ToDateValue for &T {
	fn to_date_value(&self) -> DateValue {
		(**self).to_date_value()
	}
}

impl<T: ToDateValue> ToDateValue for Option<T> {
	fn to_date_value(&self) -> DateValue {
		self.as_ref().map_or(DateValue::Missing, ToDateValue::to_date_value)
	}
}

const DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a date string.
///
/// RFC 3339 timestamps keep their wall-clock time in their own offset.
pub fn parse_date_input(input: &str) -> Option<NaiveDateTime> {
	let input = input.trim();
	if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
		return Some(date.and_time(chrono::NaiveTime::MIN));
	}
	if let Ok(at) = DateTime::parse_from_rfc3339(input) {
		return Some(at.naive_local());
	}
	DATETIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}
