use vesta_worker::Generation;

use crate::service::ServiceError;

/// Load state of an [`crate::IssueStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CacheStatus {
	#[default]
	Idle,
	Loading,
	/// Last applied refresh failed; the previous snapshot is still served.
	Error(ServiceError),
}

impl CacheStatus {
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	pub fn error(&self) -> Option<&ServiceError> {
		match self {
			Self::Error(error) => Some(error),
			Self::Idle | Self::Loading => None,
		}
	}
}

/// Change notification published by an [`crate::IssueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
	StatusChanged { generation: Generation, status: CacheStatus },
	SnapshotReplaced { generation: Generation, issues: usize },
}

/// How one refresh settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
	/// Snapshot replaced, status back to idle.
	Applied { generation: Generation, issues: usize },
	/// Fetch failed; snapshot kept, status set to error.
	Failed { generation: Generation, error: ServiceError },
	/// A newer refresh was issued while this one was in flight; its response
	/// was dropped.
	Superseded { generation: Generation, latest: Generation },
}

impl RefreshOutcome {
	pub fn generation(&self) -> Generation {
		match self {
			Self::Applied { generation, .. } | Self::Failed { generation, .. } | Self::Superseded { generation, .. } => *generation,
		}
	}

	pub fn is_applied(&self) -> bool {
		matches!(self, Self::Applied { .. })
	}
}
