use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected [`Scope`] construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
	#[error("workspace slug must not be empty")]
	EmptyWorkspace,
	#[error("project id must not be empty")]
	EmptyProject,
}

/// Workspace + project pair identifying one issue collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
	workspace: String,
	project: String,
}

impl Scope {
	/// Builds a scope; both parts must be non-empty after trimming.
	pub fn new(workspace: impl Into<String>, project: impl Into<String>) -> Result<Self, ScopeError> {
		let workspace = workspace.into();
		let project = project.into();
		if workspace.trim().is_empty() {
			return Err(ScopeError::EmptyWorkspace);
		}
		if project.trim().is_empty() {
			return Err(ScopeError::EmptyProject);
		}
		Ok(Self { workspace, project })
	}

	pub fn workspace(&self) -> &str {
		&self.workspace
	}

	pub fn project(&self) -> &str {
		&self.project
	}
}

impl fmt::Display for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.workspace, self.project)
	}
}

/// Opaque key/value bag forwarded verbatim to the fetch collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchParams(BTreeMap<String, String>);

impl FetchParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FetchParams {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
