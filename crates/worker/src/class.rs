/// Label attached to spawned work in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Read-through fetch repopulating a store snapshot.
	Fetch,
	/// Current-actor lookup.
	Session,
}

impl TaskClass {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Fetch => "fetch",
			Self::Session => "session",
		}
	}
}
