//! Collaborator contracts the store talks to. Transport lives elsewhere.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vesta_primitives::{Actor, FetchParams, Issue, IssueId, IssueLabel, IssueState, Scope, VoteValue};

/// Failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
	#[error("request failed: {0}")]
	Transport(String),
	#[error("server responded with {status}: {message}")]
	Status { status: u16, message: String },
	#[error("malformed response: {0}")]
	Decode(String),
	#[error("not authorized")]
	Unauthorized,
}

/// Payload of the public issues endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIssues {
	#[serde(default)]
	pub issues: Vec<Issue>,
	#[serde(default)]
	pub states: Vec<IssueState>,
	#[serde(default)]
	pub labels: Vec<IssueLabel>,
}

/// Fetches the public issue board of a scope.
#[async_trait]
pub trait IssueService: Send + Sync {
	/// `params` must be forwarded unchanged.
	async fn fetch_public_issues(&self, scope: &Scope, params: &FetchParams) -> Result<PublicIssues, ServiceError>;
}

/// Casts and retracts the current actor's vote on an issue.
#[async_trait]
pub trait VoteService: Send + Sync {
	async fn add_vote(&self, scope: &Scope, issue: &IssueId, value: VoteValue) -> Result<(), ServiceError>;

	async fn remove_vote(&self, scope: &Scope, issue: &IssueId) -> Result<(), ServiceError>;
}

/// Resolves the signed-in actor. `Ok(None)` means nobody is signed in.
#[async_trait]
pub trait ActorProvider: Send + Sync {
	async fn current_actor(&self) -> Result<Option<Actor>, ServiceError>;
}
