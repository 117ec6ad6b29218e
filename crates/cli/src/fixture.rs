//! [`IssueService`] backed by a JSON file in the public issues wire format.

use std::path::PathBuf;

use async_trait::async_trait;
use vesta_primitives::{FetchParams, Issue, Scope};
use vesta_store::{IssueService, PublicIssues, ServiceError};

/// Serves a board from disk, applying the filter parameters the way the
/// public endpoint does.
#[derive(Debug, Clone)]
pub struct FileIssueService {
	path: PathBuf,
}

impl FileIssueService {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

#[async_trait]
impl IssueService for FileIssueService {
	async fn fetch_public_issues(&self, scope: &Scope, params: &FetchParams) -> Result<PublicIssues, ServiceError> {
		let raw = tokio::fs::read_to_string(&self.path)
			.await
			.map_err(|e| ServiceError::Transport(format!("{}: {e}", self.path.display())))?;
		let mut payload: PublicIssues = serde_json::from_str(&raw).map_err(|e| ServiceError::Decode(e.to_string()))?;

		let before = payload.issues.len();
		let states = &payload.states;
		payload.issues.retain(|issue| {
			matches_params(issue, params, |state_id| {
				states.iter().find(|state| state.id == state_id).map(|state| -> &'static str { state.group.into() })
			})
		});
		tracing::debug!(%scope, path = %self.path.display(), before, after = payload.issues.len(), "fixture board loaded");
		Ok(payload)
	}
}

fn selected<'a>(params: &'a FetchParams, key: &str) -> Option<Vec<&'a str>> {
	params.get(key).map(|value| value.split(',').filter(|part| !part.is_empty()).collect())
}

/// True when `issue` satisfies every recognized parameter. Unknown keys are
/// ignored.
fn matches_params(issue: &Issue, params: &FetchParams, group_of: impl Fn(&str) -> Option<&'static str>) -> bool {
	let priority: &'static str = issue.priority.into();
	let checks = [
		selected(params, "priority").is_none_or(|wanted| wanted.contains(&priority)),
		selected(params, "state").is_none_or(|wanted| wanted.contains(&issue.state.as_str())),
		selected(params, "state_group").is_none_or(|wanted| group_of(issue.state.as_str()).is_some_and(|group| wanted.contains(&group))),
		selected(params, "labels").is_none_or(|wanted| issue.labels.iter().any(|label| wanted.contains(&label.as_str()))),
		selected(params, "assignees").is_none_or(|wanted| issue.assignees.iter().any(|actor| wanted.contains(&actor.as_str()))),
		selected(params, "created_by").is_none_or(|wanted| issue.created_by.as_ref().is_some_and(|actor| wanted.contains(&actor.as_str()))),
	];
	checks.into_iter().all(|ok| ok)
}
