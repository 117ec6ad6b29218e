//! Core types for the issue board: identifiers, issues and their reference
//! collections, votes, and the scope a collection is fetched for.

/// Identifier newtypes.
pub mod ids;
/// Issues, lifecycle states and labels.
pub mod issue;
/// Fetch scope and opaque fetch parameters.
pub mod scope;
/// Votes and actors.
pub mod vote;

pub use ids::{ActorId, IssueId, LabelId, StateId};
pub use issue::{Issue, IssueLabel, IssueState, Priority, StateGroup};
pub use scope::{FetchParams, Scope, ScopeError};
pub use vote::{Actor, ActorDetail, Vote, VoteValue};
