use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;

/// Disclosure sizing shared by every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisclosureConfig {
	/// Candidates revealed initially and after a collapse.
	pub baseline: usize,
	/// Candidates added per expand.
	pub step: usize,
}

impl Default for DisclosureConfig {
	fn default() -> Self {
		Self { baseline: 5, step: 5 }
	}
}

impl DisclosureConfig {
	/// Raises a zero baseline or step to one so every expand makes progress.
	pub fn clamped(self) -> Self {
		Self {
			baseline: self.baseline.max(1),
			step: self.step.max(1),
		}
	}
}

/// How many of a dimension's candidates are revealed, out of how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureState {
	pub revealed: usize,
	pub total: usize,
}

/// Sizes of the fetched reference collections that bound data-driven
/// dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceSizes {
	pub states: usize,
	pub labels: usize,
	pub members: usize,
}

/// Per-dimension "view more / view less" state for the filter panel.
#[derive(Debug, Clone)]
pub struct DisclosureController {
	config: DisclosureConfig,
	dimensions: BTreeMap<FilterDimension, DisclosureState>,
}

impl DisclosureController {
	/// Controller over exactly `dimensions`, each at the baseline with a zero
	/// total. Zero sizes in `config` are raised to one.
	pub fn new(config: DisclosureConfig, dimensions: impl IntoIterator<Item = FilterDimension>) -> Self {
		let config = config.clamped();
		let initial = DisclosureState {
			revealed: config.baseline,
			total: 0,
		};
		Self {
			config,
			dimensions: dimensions.into_iter().map(|dimension| (dimension, initial)).collect(),
		}
	}

	/// Like [`Self::new`], with totals seeded for dimensions whose candidate
	/// set is fixed (priority, state group, date presets).
	pub fn with_default_totals(config: DisclosureConfig, dimensions: impl IntoIterator<Item = FilterDimension>) -> Self {
		let mut controller = Self::new(config, dimensions);
		for (dimension, state) in &mut controller.dimensions {
			if let Some(total) = dimension.fixed_total() {
				state.total = total;
			}
		}
		controller
	}

	pub fn config(&self) -> DisclosureConfig {
		self.config
	}

	/// Enabled dimensions in panel order.
	pub fn dimensions(&self) -> impl Iterator<Item = FilterDimension> + '_ {
		self.dimensions.keys().copied()
	}

	pub fn contains(&self, dimension: FilterDimension) -> bool {
		self.dimensions.contains_key(&dimension)
	}

	pub fn state(&self, dimension: FilterDimension) -> Option<DisclosureState> {
		self.dimensions.get(&dimension).copied()
	}

	/// Revealed count; `0` for a dimension that is not enabled.
	pub fn revealed(&self, dimension: FilterDimension) -> usize {
		self.state(dimension).map_or(0, |state| state.revealed)
	}

	pub fn total(&self, dimension: FilterDimension) -> usize {
		self.state(dimension).map_or(0, |state| state.total)
	}

	/// Reveals one more step, clamped to the total. Returns whether anything
	/// changed.
	pub fn expand(&mut self, dimension: FilterDimension) -> bool {
		let step = self.config.step;
		let Some(state) = self.dimensions.get_mut(&dimension) else {
			return false;
		};
		if state.revealed >= state.total {
			return false;
		}
		let before = state.revealed;
		state.revealed = state.revealed.saturating_add(step).min(state.total);
		state.revealed != before
	}

	/// Resets to the baseline. Returns whether anything changed.
	pub fn collapse(&mut self, dimension: FilterDimension) -> bool {
		let baseline = self.config.baseline;
		let Some(state) = self.dimensions.get_mut(&dimension) else {
			return false;
		};
		let changed = state.revealed != baseline;
		state.revealed = baseline;
		changed
	}

	pub fn can_expand(&self, dimension: FilterDimension) -> bool {
		self.state(dimension).is_some_and(|state| state.revealed < state.total)
	}

	pub fn can_collapse(&self, dimension: FilterDimension) -> bool {
		self.state(dimension).is_some_and(|state| state.revealed > self.config.baseline)
	}

	/// Updates the candidate count of `dimension`; `revealed` is untouched.
	pub fn set_total(&mut self, dimension: FilterDimension, total: usize) {
		if let Some(state) = self.dimensions.get_mut(&dimension) {
			state.total = total;
		}
	}

	/// Refreshes data-driven totals after the reference collections change.
	pub fn sync_totals(&mut self, sizes: ReferenceSizes) {
		self.set_total(FilterDimension::State, sizes.states);
		self.set_total(FilterDimension::Labels, sizes.labels);
		self.set_total(FilterDimension::Assignees, sizes.members);
		self.set_total(FilterDimension::CreatedBy, sizes.members);
	}

	/// [`Self::expand`] by wire name; unknown names are a no-op.
	pub fn expand_named(&mut self, name: &str) -> bool {
		name.parse().is_ok_and(|dimension| self.expand(dimension))
	}

	/// [`Self::collapse`] by wire name; unknown names are a no-op.
	pub fn collapse_named(&mut self, name: &str) -> bool {
		name.parse().is_ok_and(|dimension| self.collapse(dimension))
	}

	pub fn can_expand_named(&self, name: &str) -> bool {
		name.parse().is_ok_and(|dimension| self.can_expand(dimension))
	}

	pub fn can_collapse_named(&self, name: &str) -> bool {
		name.parse().is_ok_and(|dimension| self.can_collapse(dimension))
	}
}
