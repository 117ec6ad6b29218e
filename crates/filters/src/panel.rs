use crate::applied::AppliedFilters;
use crate::dimension::FilterDimension;
use crate::disclosure::{DisclosureConfig, DisclosureController, ReferenceSizes};
use crate::query::SearchQuery;

/// State behind one mounted filter panel.
#[derive(Debug, Clone)]
pub struct FilterPanel {
	pub disclosure: DisclosureController,
	pub query: SearchQuery,
	pub applied: AppliedFilters,
}

impl FilterPanel {
	/// Panel showing `enabled` dimensions, with fixed totals seeded.
	pub fn new(config: DisclosureConfig, enabled: impl IntoIterator<Item = FilterDimension>) -> Self {
		Self {
			disclosure: DisclosureController::with_default_totals(config, enabled),
			query: SearchQuery::default(),
			applied: AppliedFilters::default(),
		}
	}

	pub fn is_enabled(&self, dimension: FilterDimension) -> bool {
		self.disclosure.contains(dimension)
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query.set(query);
	}

	pub fn sync_totals(&mut self, sizes: ReferenceSizes) {
		self.disclosure.sync_totals(sizes);
	}

	/// Candidates of `dimension` to render: query matches first, then the
	/// revealed prefix of those. Empty for a disabled dimension.
	pub fn visible<T, F>(&self, dimension: FilterDimension, candidates: impl IntoIterator<Item = T>, label: F) -> Vec<T>
	where
		F: Fn(&T) -> &str,
	{
		let revealed = self.disclosure.revealed(dimension);
		candidates
			.into_iter()
			.filter(|candidate| self.query.matches(label(candidate)))
			.take(revealed)
			.collect()
	}
}
