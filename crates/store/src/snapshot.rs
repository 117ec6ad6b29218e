use std::collections::{BTreeSet, HashMap};

use vesta_primitives::{ActorId, Issue, IssueLabel, IssueState, Priority, StateId};

use crate::service::PublicIssues;

/// Issues plus the state and label collections from one successful fetch.
///
/// Immutable; the store swaps whole snapshots. Every query is a fresh O(n)
/// scan and tolerates the empty snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
	issues: Vec<Issue>,
	states: Vec<IssueState>,
	labels: Vec<IssueLabel>,
}

impl Snapshot {
	pub fn new(issues: Vec<Issue>, states: Vec<IssueState>, labels: Vec<IssueLabel>) -> Self {
		Self { issues, states, labels }
	}

	pub fn issues(&self) -> &[Issue] {
		&self.issues
	}

	pub fn states(&self) -> &[IssueState] {
		&self.states
	}

	pub fn labels(&self) -> &[IssueLabel] {
		&self.labels
	}

	pub fn is_empty(&self) -> bool {
		self.issues.is_empty() && self.states.is_empty() && self.labels.is_empty()
	}

	/// Number of issues in state `state_id`.
	pub fn count_by_state(&self, state_id: &str) -> usize {
		self.issues.iter().filter(|issue| issue.state == state_id).count()
	}

	/// Issues in state `state_id`, in snapshot order.
	pub fn issues_by_state(&self, state_id: &str) -> Vec<Issue> {
		self.issues.iter().filter(|issue| issue.state == state_id).cloned().collect()
	}

	/// Count for every state id referenced by an issue, including ids missing
	/// from [`Self::states`].
	pub fn counts_by_state(&self) -> HashMap<StateId, usize> {
		let mut counts = HashMap::new();
		for issue in &self.issues {
			*counts.entry(issue.state.clone()).or_insert(0) += 1;
		}
		counts
	}

	pub fn issues_by_label(&self, label_id: &str) -> Vec<Issue> {
		self.issues.iter().filter(|issue| issue.has_label(label_id)).cloned().collect()
	}

	pub fn issues_by_priority(&self, priority: Priority) -> Vec<Issue> {
		self.issues.iter().filter(|issue| issue.priority == priority).cloned().collect()
	}

	pub fn state(&self, state_id: &str) -> Option<&IssueState> {
		self.states.iter().find(|state| state.id == state_id)
	}

	pub fn label(&self, label_id: &str) -> Option<&IssueLabel> {
		self.labels.iter().find(|label| label.id == label_id)
	}

	/// Distinct actors that are assigned to or created an issue.
	pub fn members(&self) -> BTreeSet<ActorId> {
		self.issues
			.iter()
			.flat_map(|issue| issue.assignees.iter().chain(issue.created_by.as_ref()))
			.cloned()
			.collect()
	}
}

impl From<PublicIssues> for Snapshot {
	fn from(payload: PublicIssues) -> Self {
		Self::new(payload.issues, payload.states, payload.labels)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use vesta_primitives::{IssueId, StateGroup};

	use super::*;

	fn board() -> Snapshot {
		Snapshot::new(
			vec![
				Issue::new("i1", "A").with_labels(["bug"]).with_priority(Priority::High),
				Issue::new("i2", "A"),
				Issue::new("i3", "B").with_labels(["bug", "ui"]),
			],
			vec![
				IssueState::new("A", "Todo", StateGroup::Unstarted),
				IssueState::new("B", "Done", StateGroup::Completed),
			],
			vec![IssueLabel::new("bug", "Bug"), IssueLabel::new("ui", "UI")],
		)
	}

	#[test]
	fn counts_and_filters_by_state() {
		let snapshot = board();
		assert_eq!(snapshot.count_by_state("A"), 2);
		assert_eq!(snapshot.count_by_state("C"), 0);
		let in_b = snapshot.issues_by_state("B");
		assert_eq!(in_b.len(), 1);
		assert_eq!(in_b[0].id, "i3");
	}

	#[test]
	fn filter_preserves_snapshot_order() {
		let ids: Vec<_> = board().issues_by_state("A").into_iter().map(|issue| issue.id).collect();
		assert_eq!(ids, vec![IssueId::from("i1"), IssueId::from("i2")]);
	}

	#[test]
	fn empty_snapshot_answers_with_empty_results() {
		let snapshot = Snapshot::default();
		assert!(snapshot.is_empty());
		assert_eq!(snapshot.count_by_state("A"), 0);
		assert!(snapshot.issues_by_state("A").is_empty());
		assert!(snapshot.counts_by_state().is_empty());
		assert!(snapshot.members().is_empty());
	}

	#[test]
	fn secondary_queries() {
		let snapshot = board();
		assert_eq!(snapshot.issues_by_label("bug").len(), 2);
		assert_eq!(snapshot.issues_by_label("docs").len(), 0);
		assert_eq!(snapshot.issues_by_priority(Priority::High).len(), 1);
		assert_eq!(snapshot.state("B").map(|state| state.name.as_str()), Some("Done"));
		assert_eq!(snapshot.label("ui").map(|label| label.name.as_str()), Some("UI"));
		assert!(snapshot.state("Z").is_none());

		let counts = snapshot.counts_by_state();
		assert_eq!(counts.get("A"), Some(&2));
		assert_eq!(counts.get("B"), Some(&1));
	}

	#[test]
	fn dangling_state_ids_are_counted() {
		let snapshot = Snapshot::new(vec![Issue::new("i1", "ghost")], Vec::new(), Vec::new());
		assert_eq!(snapshot.count_by_state("ghost"), 1);
		assert!(snapshot.state("ghost").is_none());
	}

	#[test]
	fn members_are_distinct() {
		let mut first = Issue::new("i1", "A");
		first.assignees = vec!["u1".into(), "u2".into()];
		first.created_by = Some("u1".into());
		let mut second = Issue::new("i2", "A");
		second.created_by = Some("u3".into());
		let snapshot = Snapshot::new(vec![first, second], Vec::new(), Vec::new());
		let members: Vec<_> = snapshot.members().into_iter().map(|id| id.to_string()).collect();
		assert_eq!(members, vec!["u1", "u2", "u3"]);
	}

	proptest! {
		#[test]
		fn count_matches_filter_length(states in prop::collection::vec(0u8..4, 0..30), probe in 0u8..5) {
			let issues = states
				.iter()
				.enumerate()
				.map(|(i, state)| Issue::new(format!("i{i}"), format!("s{state}")))
				.collect();
			let snapshot = Snapshot::new(issues, Vec::new(), Vec::new());
			let probe = format!("s{probe}");
			let filtered = snapshot.issues_by_state(&probe);
			prop_assert_eq!(snapshot.count_by_state(&probe), filtered.len());
			prop_assert!(filtered.iter().all(|issue| issue.state == probe.as_str()));
			let total: usize = snapshot.counts_by_state().values().sum();
			prop_assert_eq!(total, snapshot.issues().len());
		}
	}
}
