use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);

		impl $name {
			pub fn new(id: impl Into<String>) -> Self {
				Self(id.into())
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<&str> for $name {
			fn from(id: &str) -> Self {
				Self(id.to_owned())
			}
		}

		impl From<String> for $name {
			fn from(id: String) -> Self {
				Self(id)
			}
		}

		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}

		impl PartialEq<str> for $name {
			fn eq(&self, other: &str) -> bool {
				self.0 == other
			}
		}

		impl PartialEq<&str> for $name {
			fn eq(&self, other: &&str) -> bool {
				self.0 == *other
			}
		}
	};
}

define_id!(
	/// Unique issue identifier.
	IssueId
);
define_id!(
	/// Lifecycle state identifier. Issues point at one.
	StateId
);
define_id!(
	/// Label identifier.
	LabelId
);
define_id!(
	/// User/actor identifier.
	ActorId
);

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn ids_compare_with_str() {
		let id = StateId::new("backlog");
		assert_eq!(id, "backlog");
		assert_eq!(id.as_str(), "backlog");
		assert_eq!(id.to_string(), "backlog");
	}

	#[test]
	fn ids_serialize_transparently() {
		let id = IssueId::from("a1");
		assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1\"");
		let back: IssueId = serde_json::from_str("\"a1\"").unwrap();
		assert_eq!(back, id);
	}

	#[test]
	fn map_lookup_by_str() {
		let mut counts = HashMap::new();
		counts.insert(StateId::new("s1"), 3usize);
		assert_eq!(counts.get("s1"), Some(&3));
	}
}
