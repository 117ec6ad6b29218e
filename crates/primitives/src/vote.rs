use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, IssueId};

/// Direction of a vote. Serialized as `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum VoteValue {
	Up,
	Down,
}

impl From<VoteValue> for i8 {
	fn from(value: VoteValue) -> Self {
		match value {
			VoteValue::Up => 1,
			VoteValue::Down => -1,
		}
	}
}

impl TryFrom<i8> for VoteValue {
	type Error = String;

	fn try_from(value: i8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Self::Up),
			-1 => Ok(Self::Down),
			other => Err(format!("vote must be 1 or -1, got {other}")),
		}
	}
}

/// Signed-in user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
	pub id: ActorId,
	#[serde(default)]
	pub display_name: String,
}

impl Actor {
	pub fn new(id: impl Into<ActorId>, display_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			display_name: display_name.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActorDetail {
	#[serde(default)]
	pub display_name: String,
}

/// One actor's vote on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
	pub issue: IssueId,
	pub actor: ActorId,
	#[serde(default)]
	pub actor_detail: ActorDetail,
	#[serde(rename = "vote")]
	pub value: VoteValue,
}

impl Vote {
	pub fn new(issue: impl Into<IssueId>, actor: &Actor, value: VoteValue) -> Self {
		Self {
			issue: issue.into(),
			actor: actor.id.clone(),
			actor_detail: ActorDetail {
				display_name: actor.display_name.clone(),
			},
			value,
		}
	}

	pub fn display_name(&self) -> &str {
		&self.actor_detail.display_name
	}
}
