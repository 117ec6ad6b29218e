//! Filter panel state for the issue board.
//!
//! # Mental model
//!
//! * The panel shows one section per enabled [`FilterDimension`].
//! * Each section lists candidate values (priorities, states, labels, members,
//!   date presets). A single [`SearchQuery`] narrows every section's candidates
//!   by display label first.
//! * [`DisclosureController`] then decides how many of the remaining
//!   candidates are revealed: a baseline of five, grown in steps of five by
//!   "view more", reset by "view less".
//! * [`AppliedFilters`] is the selection the user builds from the revealed
//!   candidates; it turns into fetch parameters for the store.
//!
//! # Invariants
//!
//! * `revealed` never grows past `total` through `expand`.
//! * `collapse` always lands on the baseline.
//! * Changing the query never touches disclosure state.
//! * Operations on a dimension the controller was not built with are no-ops.

mod applied;
mod dimension;
mod disclosure;
mod panel;
mod query;

pub use applied::AppliedFilters;
pub use dimension::{DatePreset, FilterDimension};
pub use disclosure::{DisclosureConfig, DisclosureController, DisclosureState, ReferenceSizes};
pub use panel::FilterPanel;
pub use query::SearchQuery;
