use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use vesta_primitives::{FetchParams, Issue, Scope};
use vesta_worker::{Generation, GenerationGate, TaskClass};

use crate::service::{IssueService, PublicIssues, ServiceError};
use crate::snapshot::Snapshot;
use crate::status::{CacheStatus, RefreshOutcome, StoreEvent};

const EVENT_BUFFER: usize = 64;

#[derive(Debug, Default)]
struct StoreState {
	status: CacheStatus,
	snapshot: Arc<Snapshot>,
	scope: Option<Scope>,
	applied: Generation,
}

pub struct IssueStore {
	service: Arc<dyn IssueService>,
	gate: GenerationGate,
	state: RwLock<StoreState>,
	changed: AtomicBool,
	events: broadcast::Sender<StoreEvent>,
}

impl IssueStore {
	pub fn new(service: Arc<dyn IssueService>) -> Self {
		let (events, _) = broadcast::channel(EVENT_BUFFER);
		Self {
			service,
			gate: GenerationGate::new(),
			state: RwLock::new(StoreState::default()),
			changed: AtomicBool::new(false),
			events,
		}
	}

	/// Refreshes the snapshot for `scope`.
	///
	/// The store is `Loading` as soon as this returns, before the future is
	/// polled. `params` reach the service unchanged. Failures are reported
	/// through [`Self::status`] and the returned outcome, never as `Err`.
	pub fn refresh<'a>(&'a self, scope: &'a Scope, params: &'a FetchParams) -> impl Future<Output = RefreshOutcome> + Send + 'a {
		let generation = self.begin(scope);
		async move {
			let result = self.service.fetch_public_issues(scope, params).await;
			self.settle(generation, result)
		}
	}

	/// [`Self::refresh`] on a detached task.
	pub fn spawn_refresh(self: &Arc<Self>, scope: Scope, params: FetchParams) -> JoinHandle<RefreshOutcome> {
		let generation = self.begin(&scope);
		let store = Arc::clone(self);
		vesta_worker::spawn(TaskClass::Fetch, async move {
			let result = store.service.fetch_public_issues(&scope, &params).await;
			store.settle(generation, result)
		})
	}

	// Events are sent while the write lock is held so subscribers observe
	// them in generation order.
	fn begin(&self, scope: &Scope) -> Generation {
		let mut state = self.state.write();
		let generation = self.gate.issue();
		state.status = CacheStatus::Loading;
		state.scope = Some(scope.clone());
		tracing::debug!(%generation, %scope, "issue store refresh started");
		self.notify(StoreEvent::StatusChanged {
			generation,
			status: CacheStatus::Loading,
		});
		generation
	}

	fn settle(&self, generation: Generation, result: Result<PublicIssues, ServiceError>) -> RefreshOutcome {
		let mut state = self.state.write();
		let latest = self.gate.latest();
		if latest != generation {
			tracing::trace!(%generation, %latest, "issue store dropped superseded response");
			return RefreshOutcome::Superseded { generation, latest };
		}

		match result {
			Ok(payload) => {
				let snapshot = Snapshot::from(payload);
				let issues = snapshot.issues().len();
				state.snapshot = Arc::new(snapshot);
				state.status = CacheStatus::Idle;
				state.applied = generation;
				tracing::debug!(%generation, issues, states = state.snapshot.states().len(), labels = state.snapshot.labels().len(), "issue store snapshot replaced");
				self.notify(StoreEvent::SnapshotReplaced { generation, issues });
				self.notify(StoreEvent::StatusChanged {
					generation,
					status: CacheStatus::Idle,
				});
				RefreshOutcome::Applied { generation, issues }
			}
			Err(error) => {
				tracing::warn!(%generation, error = %error, "issue store refresh failed");
				state.status = CacheStatus::Error(error.clone());
				self.notify(StoreEvent::StatusChanged {
					generation,
					status: state.status.clone(),
				});
				RefreshOutcome::Failed { generation, error }
			}
		}
	}

	fn notify(&self, event: StoreEvent) {
		self.changed.store(true, AtomicOrdering::Release);
		let _ = self.events.send(event);
	}

	/// Subscribes to change notifications issued after this call.
	pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
		self.events.subscribe()
	}

	/// Returns and clears the changed flag set by every notification.
	pub fn take_changed(&self) -> bool {
		self.changed.swap(false, AtomicOrdering::AcqRel)
	}

	pub fn status(&self) -> CacheStatus {
		self.state.read().status.clone()
	}

	pub fn is_loading(&self) -> bool {
		self.state.read().status.is_loading()
	}

	pub fn error(&self) -> Option<ServiceError> {
		self.state.read().status.error().cloned()
	}

	/// Current snapshot. Stays consistent however long it is held.
	pub fn snapshot(&self) -> Arc<Snapshot> {
		Arc::clone(&self.state.read().snapshot)
	}

	/// Scope of the latest issued refresh.
	pub fn scope(&self) -> Option<Scope> {
		self.state.read().scope.clone()
	}

	/// Latest issued generation.
	pub fn generation(&self) -> Generation {
		self.gate.latest()
	}

	/// Generation whose response produced the current snapshot.
	pub fn applied_generation(&self) -> Generation {
		self.state.read().applied
	}

	pub fn count_by_state(&self, state_id: &str) -> usize {
		self.snapshot().count_by_state(state_id)
	}

	pub fn issues_by_state(&self, state_id: &str) -> Vec<Issue> {
		self.snapshot().issues_by_state(state_id)
	}
}

impl std::fmt::Debug for IssueStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.read();
		f.debug_struct("IssueStore")
			.field("status", &state.status)
			.field("generation", &self.gate.latest())
			.field("applied", &state.applied)
			.field("issues", &state.snapshot.issues().len())
			.finish()
	}
}
