//! Client-side state of a public issue board.
//!
//! [`IssueStore`] caches the issues, states and labels of one [`vesta_primitives::Scope`]
//! and answers the derived board queries. [`votes`] and [`session`] cover
//! the per-issue vote toggle and the signed-in actor.

mod service;
pub mod session;
mod snapshot;
mod status;
mod store;
pub mod votes;

pub use service::{ActorProvider, IssueService, PublicIssues, ServiceError, VoteService};
pub use session::ActorSession;
pub use snapshot::Snapshot;
pub use status::{CacheStatus, RefreshOutcome, StoreEvent};
pub use store::IssueStore;
pub use votes::{BoardQuery, Redirect, VOTES_DISPLAY_LIMIT, VoteController, VoteError, VoteOutcome, VoteSummary, login_redirect};
