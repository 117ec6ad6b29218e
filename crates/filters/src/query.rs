/// Free-text query narrowing filter candidates by display label.
///
/// Matching is a case-insensitive substring test; the empty query matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
	raw: String,
	folded: String,
}

impl SearchQuery {
	pub fn new(query: impl Into<String>) -> Self {
		let raw = query.into();
		let folded = raw.to_lowercase();
		Self { raw, folded }
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	pub fn is_empty(&self) -> bool {
		self.raw.is_empty()
	}

	pub fn set(&mut self, query: impl Into<String>) {
		*self = Self::new(query);
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn matches(&self, label: &str) -> bool {
		self.folded.is_empty() || label.to_lowercase().contains(&self.folded)
	}

	/// Candidates whose label matches, in input order.
	pub fn filter<'a, T, F>(&'a self, candidates: impl IntoIterator<Item = T> + 'a, label: F) -> impl Iterator<Item = T> + 'a
	where
		F: Fn(&T) -> &str + 'a,
	{
		candidates.into_iter().filter(move |candidate| self.matches(label(candidate)))
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("", "Anything", true)]
	#[case("bug", "Bug", true)]
	#[case("BUG", "needs-bugfix", true)]
	#[case("ug F", "Bug fix", true)]
	#[case("feat", "Bug", false)]
	fn matches_case_insensitively(#[case] query: &str, #[case] label: &str, #[case] expected: bool) {
		assert_eq!(SearchQuery::new(query).matches(label), expected);
	}

	#[test]
	fn filter_keeps_order() {
		let query = SearchQuery::new("o");
		let labels = ["Todo", "In Progress", "Done", "Backlog", "Cancelled"];
		let kept: Vec<_> = query.filter(labels, |label| *label).collect();
		assert_eq!(kept, vec!["Todo", "In Progress", "Done", "Backlog"]);
	}

	#[test]
	fn set_and_clear() {
		let mut query = SearchQuery::new("x");
		query.set("Urgent");
		assert_eq!(query.as_str(), "Urgent");
		assert!(query.matches("urgent"));
		query.clear();
		assert!(query.is_empty());
		assert!(query.matches("anything"));
	}
}
