use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::ids::{ActorId, IssueId, LabelId, StateId};

/// Issue priority, in board display order.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
	Urgent,
	High,
	Medium,
	Low,
	#[default]
	None,
}

/// Coarse lifecycle bucket every [`IssueState`] belongs to.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StateGroup {
	#[default]
	Backlog,
	Unstarted,
	Started,
	Completed,
	Cancelled,
}

/// One issue as served by the public board endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
	pub id: IssueId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub sequence_id: u64,
	/// Lifecycle state. May reference a state absent from the loaded set.
	pub state: StateId,
	#[serde(default)]
	pub labels: Vec<LabelId>,
	#[serde(default, deserialize_with = "priority_or_none")]
	pub priority: Priority,
	#[serde(default)]
	pub assignees: Vec<ActorId>,
	#[serde(default)]
	pub created_by: Option<ActorId>,
	#[serde(default)]
	pub start_date: Option<String>,
	#[serde(default)]
	pub target_date: Option<String>,
}

impl Issue {
	/// Minimal issue in `state`, used by fixtures and tests.
	pub fn new(id: impl Into<IssueId>, state: impl Into<StateId>) -> Self {
		Self {
			id: id.into(),
			name: String::new(),
			sequence_id: 0,
			state: state.into(),
			labels: Vec::new(),
			priority: Priority::default(),
			assignees: Vec::new(),
			created_by: None,
			start_date: None,
			target_date: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_labels<I, L>(mut self, labels: I) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<LabelId>,
	{
		self.labels = labels.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_priority(mut self, priority: Priority) -> Self {
		self.priority = priority;
		self
	}

	pub fn has_label(&self, label: &str) -> bool {
		self.labels.iter().any(|id| id == label)
	}
}

// The endpoint sends `null` for issues that never had a priority set.
fn priority_or_none<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<Priority>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lifecycle state reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueState {
	pub id: StateId,
	pub name: String,
	#[serde(default)]
	pub color: String,
	#[serde(default)]
	pub group: StateGroup,
}

impl IssueState {
	pub fn new(id: impl Into<StateId>, name: impl Into<String>, group: StateGroup) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			color: String::new(),
			group,
		}
	}
}

/// Label reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLabel {
	pub id: LabelId,
	pub name: String,
	#[serde(default)]
	pub color: String,
}

impl IssueLabel {
	pub fn new(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			color: String::new(),
		}
	}
}
