use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag of one issued request. Larger values were issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
	/// Generation of a store that has not issued anything yet.
	pub const ZERO: Self = Self(0);

	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for Generation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Monotonic generation clock.
#[derive(Debug, Default, Clone)]
pub struct GenerationClock {
	next: Arc<AtomicU64>,
}

impl GenerationClock {
	/// Creates a new generation clock starting at generation 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the next generation.
	pub fn next(&self) -> Generation {
		Generation(self.next.fetch_add(1, Ordering::AcqRel).wrapping_add(1))
	}

	/// Returns the most recently issued generation, or [`Generation::ZERO`].
	pub fn current(&self) -> Generation {
		Generation(self.next.load(Ordering::Acquire))
	}
}

/// Latest-issued-wins gate over a [`GenerationClock`].
///
/// Every request takes a generation from [`GenerationGate::issue`]; when its
/// response settles it may only be applied while [`GenerationGate::is_current`]
/// still holds for that generation.
#[derive(Debug, Default, Clone)]
pub struct GenerationGate {
	clock: GenerationClock,
}

impl GenerationGate {
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a new generation, superseding every earlier one.
	pub fn issue(&self) -> Generation {
		self.clock.next()
	}

	/// Latest issued generation.
	pub fn latest(&self) -> Generation {
		self.clock.current()
	}

	/// True when no newer generation has been issued since `generation`.
	pub fn is_current(&self, generation: Generation) -> bool {
		self.clock.current() == generation
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clock_starts_at_one() {
		let clock = GenerationClock::new();
		assert_eq!(clock.current(), Generation::ZERO);
		assert_eq!(clock.next().get(), 1);
		assert_eq!(clock.next().get(), 2);
		assert_eq!(clock.current().get(), 2);
	}

	#[test]
	fn clones_share_one_sequence() {
		let clock = GenerationClock::new();
		let other = clock.clone();
		let a = clock.next();
		let b = other.next();
		assert!(b > a);
	}

	#[test]
	fn gate_tracks_latest_issue() {
		let gate = GenerationGate::new();
		let first = gate.issue();
		assert!(gate.is_current(first));

		let second = gate.issue();
		assert!(!gate.is_current(first));
		assert!(gate.is_current(second));
		assert_eq!(gate.latest(), second);
	}
}
