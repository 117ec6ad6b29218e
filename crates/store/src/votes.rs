//! Vote bookkeeping for one issue: summaries, tooltip text and the toggle
//! decision between add, remove and login.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use url::form_urlencoded;
use vesta_primitives::{Actor, ActorId, IssueId, Scope, Vote, VoteValue};

use crate::service::{ServiceError, VoteService};

/// Names listed in a tooltip before the rest collapse into "and N more".
pub const VOTES_DISPLAY_LIMIT: usize = 1000;

/// Votes of one issue split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteSummary {
	upvotes: Vec<Vote>,
	downvotes: Vec<Vote>,
}

impl VoteSummary {
	pub fn new(votes: &[Vote]) -> Self {
		let (upvotes, downvotes): (Vec<Vote>, Vec<Vote>) = votes.iter().cloned().partition(|vote| vote.value == VoteValue::Up);
		Self { upvotes, downvotes }
	}

	pub fn upvotes(&self) -> &[Vote] {
		&self.upvotes
	}

	pub fn downvotes(&self) -> &[Vote] {
		&self.downvotes
	}

	pub fn upvote_count(&self) -> usize {
		self.upvotes.len()
	}

	pub fn downvote_count(&self) -> usize {
		self.downvotes.len()
	}

	pub fn is_upvoted_by(&self, actor: &ActorId) -> bool {
		self.upvotes.iter().any(|vote| &vote.actor == actor)
	}

	pub fn is_downvoted_by(&self, actor: &ActorId) -> bool {
		self.downvotes.iter().any(|vote| &vote.actor == actor)
	}

	/// Direction `actor` voted in, if any.
	pub fn vote_of(&self, actor: &ActorId) -> Option<VoteValue> {
		if self.is_upvoted_by(actor) {
			Some(VoteValue::Up)
		} else if self.is_downvoted_by(actor) {
			Some(VoteValue::Down)
		} else {
			None
		}
	}

	/// Display names of the voters in direction `kind`.
	///
	/// At most `limit` names are listed; the remainder is summarized as
	/// `" and N more"`.
	pub fn tooltip(&self, kind: VoteValue, limit: usize) -> String {
		let (votes, empty) = match kind {
			VoteValue::Up => (&self.upvotes, "No upvotes yet"),
			VoteValue::Down => (&self.downvotes, "No downvotes yet"),
		};
		if votes.is_empty() {
			return empty.to_owned();
		}

		let mut text = votes.iter().take(limit).map(Vote::display_name).collect::<Vec<_>>().join(", ");
		if votes.len() > limit {
			text.push_str(&format!(" and {} more", votes.len() - limit));
		}
		text
	}
}

/// Board view parameters carried through a login redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
	pub peek_id: Option<String>,
	pub board: Option<String>,
	pub state: Option<String>,
	pub priority: Option<String>,
	pub labels: Option<String>,
}

impl BoardQuery {
	/// URL-encoded query of the present keys, in a fixed order.
	pub fn query_param_string(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		let pairs = [
			("peekId", &self.peek_id),
			("board", &self.board),
			("state", &self.state),
			("priority", &self.priority),
			("labels", &self.labels),
		];
		for (key, value) in pairs {
			if let Some(value) = value {
				serializer.append_pair(key, value);
			}
		}
		serializer.finish()
	}
}

/// Path an anonymous voter is sent to so they return to the same view.
pub fn login_redirect(path: &str, query: &BoardQuery) -> String {
	let query = query.query_param_string();
	if query.is_empty() {
		format!("/?next_path={path}")
	} else {
		format!("/?next_path={path}?{query}")
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
	/// Nobody is signed in; nothing was sent.
	LoginRequired { next_path: String },
	Added(VoteValue),
	Removed,
	/// Another toggle of this controller is still in flight.
	Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
	#[error(transparent)]
	Service(#[from] ServiceError),
}

pub type Result<T> = std::result::Result<T, VoteError>;

/// Where an anonymous toggle should send the user.
#[derive(Debug, Clone, Copy)]
pub struct Redirect<'a> {
	pub path: &'a str,
	pub query: &'a BoardQuery,
}

/// Serializes vote toggles of one issue view.
pub struct VoteController {
	service: Arc<dyn VoteService>,
	submitting: AtomicBool,
}

struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

impl VoteController {
	pub fn new(service: Arc<dyn VoteService>) -> Self {
		Self {
			service,
			submitting: AtomicBool::new(false),
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting.load(Ordering::Acquire)
	}

	/// Casts `value` for `actor`, or retracts it when `actor` already cast it.
	///
	/// A vote in the opposite direction is replaced by the service.
	pub async fn toggle(
		&self,
		actor: Option<&Actor>,
		scope: &Scope,
		issue: &IssueId,
		votes: &[Vote],
		value: VoteValue,
		redirect: Redirect<'_>,
	) -> Result<VoteOutcome> {
		let Some(actor) = actor else {
			return Ok(VoteOutcome::LoginRequired {
				next_path: login_redirect(redirect.path, redirect.query),
			});
		};

		if self.submitting.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
			return Ok(VoteOutcome::Busy);
		}
		let _guard = SubmitGuard(&self.submitting);

		let current = VoteSummary::new(votes).vote_of(&actor.id);
		if current == Some(value) {
			self.service.remove_vote(scope, issue).await?;
			tracing::debug!(%issue, actor = %actor.id, "vote removed");
			Ok(VoteOutcome::Removed)
		} else {
			self.service.add_vote(scope, issue, value).await?;
			tracing::debug!(%issue, actor = %actor.id, vote = i8::from(value), "vote added");
			Ok(VoteOutcome::Added(value))
		}
	}
}

impl std::fmt::Debug for VoteController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("VoteController").field("submitting", &self.is_submitting()).finish()
	}
}

#[cfg(test)]
mod tests {
	use parking_lot::Mutex;
	use pretty_assertions::assert_eq;
	use tokio::sync::Notify;

	use super::*;

	#[derive(Default)]
	struct RecordingVotes {
		calls: Mutex<Vec<String>>,
		fail: bool,
		hold: Option<Arc<Notify>>,
	}

	#[async_trait::async_trait]
	impl VoteService for RecordingVotes {
		async fn add_vote(&self, _scope: &Scope, issue: &IssueId, value: VoteValue) -> std::result::Result<(), ServiceError> {
			if let Some(hold) = &self.hold {
				hold.notified().await;
			}
			self.calls.lock().push(format!("add {issue} {}", i8::from(value)));
			if self.fail {
				return Err(ServiceError::Unauthorized);
			}
			Ok(())
		}

		async fn remove_vote(&self, _scope: &Scope, issue: &IssueId) -> std::result::Result<(), ServiceError> {
			self.calls.lock().push(format!("remove {issue}"));
			Ok(())
		}
	}

	fn ada() -> Actor {
		Actor::new("u1", "ada")
	}

	fn scope() -> Scope {
		Scope::new("acme", "web").unwrap()
	}

	fn no_redirect() -> BoardQuery {
		BoardQuery::default()
	}

	#[test]
	fn summary_splits_votes_by_direction() {
		let votes = vec![
			Vote::new("i1", &ada(), VoteValue::Up),
			Vote::new("i1", &Actor::new("u2", "bob"), VoteValue::Down),
			Vote::new("i1", &Actor::new("u3", "cy"), VoteValue::Up),
		];
		let summary = VoteSummary::new(&votes);
		assert_eq!(summary.upvote_count(), 2);
		assert_eq!(summary.downvote_count(), 1);
		assert!(summary.is_upvoted_by(&ActorId::from("u1")));
		assert!(summary.is_downvoted_by(&ActorId::from("u2")));
		assert_eq!(summary.vote_of(&ActorId::from("u9")), None);
		assert_eq!(summary.tooltip(VoteValue::Up, VOTES_DISPLAY_LIMIT), "ada, cy");
	}

	#[test]
	fn tooltip_placeholder_and_overflow() {
		let summary = VoteSummary::default();
		assert_eq!(summary.tooltip(VoteValue::Up, VOTES_DISPLAY_LIMIT), "No upvotes yet");
		assert_eq!(summary.tooltip(VoteValue::Down, VOTES_DISPLAY_LIMIT), "No downvotes yet");

		let votes: Vec<_> = (0..5).map(|i| Vote::new("i1", &Actor::new(format!("u{i}"), format!("n{i}")), VoteValue::Down)).collect();
		assert_eq!(VoteSummary::new(&votes).tooltip(VoteValue::Down, 2), "n0, n1 and 3 more");
	}

	#[test]
	fn query_keeps_present_keys_in_order() {
		let query = BoardQuery {
			labels: Some("bug,ui".into()),
			board: Some("kanban".into()),
			peek_id: Some("i1".into()),
			..BoardQuery::default()
		};
		assert_eq!(query.query_param_string(), "peekId=i1&board=kanban&labels=bug%2Cui");
		assert_eq!(login_redirect("/acme/web", &query), "/?next_path=/acme/web?peekId=i1&board=kanban&labels=bug%2Cui");
		assert_eq!(login_redirect("/acme/web", &no_redirect()), "/?next_path=/acme/web");
	}

	#[tokio::test]
	async fn anonymous_toggle_requires_login_without_calling_service() {
		let service = Arc::new(RecordingVotes::default());
		let controller = VoteController::new(service.clone());
		let query = no_redirect();
		let outcome = controller
			.toggle(None, &scope(), &IssueId::from("i1"), &[], VoteValue::Up, Redirect { path: "/acme/web", query: &query })
			.await
			.unwrap();
		assert_eq!(
			outcome,
			VoteOutcome::LoginRequired {
				next_path: "/?next_path=/acme/web".into()
			}
		);
		assert!(service.calls.lock().is_empty());
	}

	#[tokio::test]
	async fn toggle_adds_replaces_and_removes() {
		let service = Arc::new(RecordingVotes::default());
		let controller = VoteController::new(service.clone());
		let actor = ada();
		let issue = IssueId::from("i1");
		let query = no_redirect();
		let redirect = Redirect { path: "/", query: &query };

		let added = controller.toggle(Some(&actor), &scope(), &issue, &[], VoteValue::Up, redirect).await.unwrap();
		assert_eq!(added, VoteOutcome::Added(VoteValue::Up));

		let existing = [Vote::new("i1", &actor, VoteValue::Up)];
		let removed = controller.toggle(Some(&actor), &scope(), &issue, &existing, VoteValue::Up, redirect).await.unwrap();
		assert_eq!(removed, VoteOutcome::Removed);

		let flipped = controller.toggle(Some(&actor), &scope(), &issue, &existing, VoteValue::Down, redirect).await.unwrap();
		assert_eq!(flipped, VoteOutcome::Added(VoteValue::Down));

		assert_eq!(*service.calls.lock(), vec!["add i1 1", "remove i1", "add i1 -1"]);
		assert!(!controller.is_submitting());
	}

	#[tokio::test]
	async fn service_error_surfaces_and_releases_submit_flag() {
		let service = Arc::new(RecordingVotes {
			fail: true,
			..RecordingVotes::default()
		});
		let controller = VoteController::new(service);
		let query = no_redirect();
		let err = controller
			.toggle(Some(&ada()), &scope(), &IssueId::from("i1"), &[], VoteValue::Up, Redirect { path: "/", query: &query })
			.await
			.unwrap_err();
		assert_eq!(err, VoteError::Service(ServiceError::Unauthorized));
		assert!(!controller.is_submitting());
	}

	#[tokio::test]
	async fn concurrent_toggle_is_busy() {
		let hold = Arc::new(Notify::new());
		let service = Arc::new(RecordingVotes {
			hold: Some(hold.clone()),
			..RecordingVotes::default()
		});
		let controller = VoteController::new(service.clone());
		let actor = ada();
		let scope = scope();
		let issue = IssueId::from("i1");
		let query = no_redirect();
		let redirect = Redirect { path: "/", query: &query };

		let (first, second) = tokio::join!(controller.toggle(Some(&actor), &scope, &issue, &[], VoteValue::Up, redirect), async {
			let outcome = controller.toggle(Some(&actor), &scope, &issue, &[], VoteValue::Up, redirect).await;
			hold.notify_one();
			outcome
		});

		assert_eq!(first.unwrap(), VoteOutcome::Added(VoteValue::Up));
		assert_eq!(second.unwrap(), VoteOutcome::Busy);
		assert_eq!(service.calls.lock().len(), 1);
	}
}
