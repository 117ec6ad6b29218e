use std::collections::BTreeMap;

use vesta_primitives::FetchParams;

use crate::dimension::FilterDimension;

/// Values the user has selected per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilters {
	selected: BTreeMap<FilterDimension, Vec<String>>,
}

impl AppliedFilters {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `value` if absent, removes it otherwise. Returns whether it is
	/// selected afterwards.
	pub fn toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) -> bool {
		let value = value.into();
		let values = self.selected.entry(dimension).or_default();
		if let Some(index) = values.iter().position(|selected| *selected == value) {
			values.remove(index);
			if values.is_empty() {
				self.selected.remove(&dimension);
			}
			false
		} else {
			values.push(value);
			true
		}
	}

	/// Replaces the selection of `dimension`; an empty list clears it.
	pub fn set<I, V>(&mut self, dimension: FilterDimension, values: I)
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		let mut deduped: Vec<String> = Vec::new();
		for value in values {
			let value = value.into();
			if !deduped.contains(&value) {
				deduped.push(value);
			}
		}
		if deduped.is_empty() {
			self.selected.remove(&dimension);
		} else {
			self.selected.insert(dimension, deduped);
		}
	}

	pub fn clear(&mut self, dimension: FilterDimension) {
		self.selected.remove(&dimension);
	}

	pub fn values(&self, dimension: FilterDimension) -> &[String] {
		self.selected.get(&dimension).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
		self.values(dimension).iter().any(|selected| selected == value)
	}

	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	/// Number of selected values across all dimensions.
	pub fn count(&self) -> usize {
		self.selected.values().map(Vec::len).sum()
	}

	/// One comma-joined parameter per dimension with a selection.
	pub fn to_fetch_params(&self) -> FetchParams {
		self.selected
			.iter()
			.map(|(dimension, values)| (dimension.as_str(), values.join(",")))
			.collect()
	}
}
