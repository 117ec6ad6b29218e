use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use vesta_primitives::Actor;
use vesta_worker::TaskClass;

use crate::service::ActorProvider;

/// Lazily resolved signed-in actor of one view.
///
/// "Nobody signed in" is a normal state. Provider failures are logged and
/// read as no actor; the next [`ActorSession::ensure`] asks again.
pub struct ActorSession {
	provider: Arc<dyn ActorProvider>,
	actor: RwLock<Option<Actor>>,
	fetch: Mutex<()>,
}

impl ActorSession {
	pub fn new(provider: Arc<dyn ActorProvider>) -> Self {
		Self {
			provider,
			actor: RwLock::new(None),
			fetch: Mutex::new(()),
		}
	}

	/// Cached actor, without asking the provider.
	pub fn current(&self) -> Option<Actor> {
		self.actor.read().clone()
	}

	/// Returns the cached actor, fetching it first when absent.
	///
	/// Concurrent callers share one provider call.
	pub async fn ensure(&self) -> Option<Actor> {
		if let Some(actor) = self.current() {
			return Some(actor);
		}

		let _fetching = self.fetch.lock().await;
		if let Some(actor) = self.current() {
			return Some(actor);
		}

		match self.provider.current_actor().await {
			Ok(actor) => {
				tracing::debug!(signed_in = actor.is_some(), "actor session resolved");
				self.actor.write().clone_from(&actor);
				actor
			}
			Err(error) => {
				tracing::warn!(error = %error, "actor lookup failed");
				None
			}
		}
	}

	/// Starts [`Self::ensure`] on a detached task, e.g. when a board view
	/// mounts before the user interacts with votes.
	pub fn prefetch(self: &Arc<Self>) -> JoinHandle<Option<Actor>> {
		let session = Arc::clone(self);
		vesta_worker::spawn(TaskClass::Session, async move { session.ensure().await })
	}

	pub fn set(&self, actor: Actor) {
		*self.actor.write() = Some(actor);
	}

	/// Forgets the cached actor, e.g. after sign-out.
	pub fn clear(&self) {
		*self.actor.write() = None;
	}
}

impl std::fmt::Debug for ActorSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActorSession").field("actor", &*self.actor.read()).finish()
	}
}
