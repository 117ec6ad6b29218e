//! Read-through cache of a scope's public issue board.
//!
//! # Purpose
//!
//! * Holds the last applied [`crate::Snapshot`] (issues, states, labels) and
//!   the load status of the board.
//! * Exposes one refresh operation backed by an [`crate::IssueService`].
//! * Publishes explicit change notifications instead of ambient mutation.
//!
//! # Mental model
//!
//! * [`IssueStore`] is owned by the view/session that mounts it; there is no
//!   process-wide instance.
//! * Every refresh takes a generation from a `GenerationGate`:
//!   * the latest-issued generation is the only one allowed to publish.
//!   * responses of older generations are dropped when they settle.
//! * Readers get an `Arc<Snapshot>`; the triple is swapped as one value.
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`IssueStore`] | Handle + snapshot cache | Only `refresh` writes snapshot/status | this module |
//! | `StoreState` | Lock-guarded status, snapshot, scope | Must be swapped whole under one write lock | `core.rs` |
//! | [`crate::CacheStatus`] | `Idle`/`Loading`/`Error` | `Loading` before any fetch is polled | `begin` / `settle` |
//! | [`crate::StoreEvent`] | Push notification | Emitted after the state write that caused it | `begin` / `settle` |
//! | [`crate::RefreshOutcome`] | How a refresh settled | Never an `Err` | `settle` |
//!
//! # Invariants
//!
//! * Must set `Loading` synchronously when `refresh`/`spawn_refresh` is called.
//! * Must replace issues, states and labels together or not at all.
//! * Must keep the previous snapshot when a fetch fails.
//! * Must ignore responses whose generation is no longer the latest issued.
//! * Must not hold the state lock across an `.await`.
//!
//! # Concurrency & ordering
//!
//! * Overlapping refreshes are not cancelled; each fetch runs to completion.
//! * Latest issued wins regardless of settle order. An older response that
//!   settles after a newer one is dropped, as is an older response settling
//!   first while the newer one is still loading (status stays `Loading`).
//! * Events are broadcast under the state write lock, so subscribers see
//!   `StatusChanged { Loading }` events in generation order even when
//!   refreshes are issued from several threads.
//!
//! # Failure modes & recovery
//!
//! * Fetch error: status becomes `Error(reason)`, snapshot untouched. No
//!   automatic retry; the caller issues another refresh.
//! * Dropping a `refresh` future before it settles leaves `Loading` in place
//!   until the next refresh is issued.
//! * No subscribers: events are dropped; `take_changed` still reports changes.

mod core;

pub use core::IssueStore;
