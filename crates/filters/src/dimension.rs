use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};
use vesta_primitives::{Priority, StateGroup};

/// One filterable issue attribute, named by its query-parameter key.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilterDimension {
	Priority,
	StateGroup,
	State,
	Assignees,
	CreatedBy,
	Labels,
	StartDate,
	TargetDate,
}

impl FilterDimension {
	/// All dimensions in panel order.
	pub fn all() -> impl Iterator<Item = Self> {
		Self::iter()
	}

	/// Candidate count when it does not depend on fetched data.
	///
	/// Date dimensions offer every [`DatePreset`] plus a custom range.
	pub fn fixed_total(self) -> Option<usize> {
		match self {
			Self::Priority => Some(Priority::COUNT),
			Self::StateGroup => Some(StateGroup::COUNT),
			Self::StartDate | Self::TargetDate => Some(DatePreset::COUNT + 1),
			Self::State | Self::Assignees | Self::CreatedBy | Self::Labels => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

/// Relative date filter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum DatePreset {
	OneWeekFromNow,
	TwoWeeksFromNow,
	OneMonthFromNow,
	TwoMonthsFromNow,
}

impl DatePreset {
	pub fn all() -> impl Iterator<Item = Self> {
		Self::iter()
	}

	pub const fn label(self) -> &'static str {
		match self {
			Self::OneWeekFromNow => "1 week from now",
			Self::TwoWeeksFromNow => "2 weeks from now",
			Self::OneMonthFromNow => "1 month from now",
			Self::TwoMonthsFromNow => "2 months from now",
		}
	}

	/// Value sent in the filter query string.
	pub const fn value(self) -> &'static str {
		match self {
			Self::OneWeekFromNow => "1_weeks;after;fromnow",
			Self::TwoWeeksFromNow => "2_weeks;after;fromnow",
			Self::OneMonthFromNow => "1_months;after;fromnow",
			Self::TwoMonthsFromNow => "2_months;after;fromnow",
		}
	}
}
