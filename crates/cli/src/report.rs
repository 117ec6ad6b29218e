//! Plain-text board summary printed by the `vesta` binary.

use chrono::NaiveDateTime;
use strum::IntoEnumIterator;
use vesta_datetime::{render_formatted_date, time_ago};
use vesta_filters::{DatePreset, FilterDimension, FilterPanel};
use vesta_primitives::{Priority, Scope, StateGroup};
use vesta_store::Snapshot;

/// Candidate labels of `dimension`, in panel order.
fn candidates(dimension: FilterDimension, snapshot: &Snapshot) -> Vec<String> {
	match dimension {
		FilterDimension::Priority => Priority::iter().map(|priority| priority.to_string()).collect(),
		FilterDimension::StateGroup => StateGroup::iter().map(|group| group.to_string()).collect(),
		FilterDimension::State => snapshot.states().iter().map(|state| state.name.clone()).collect(),
		FilterDimension::Labels => snapshot.labels().iter().map(|label| label.name.clone()).collect(),
		FilterDimension::Assignees | FilterDimension::CreatedBy => snapshot.members().into_iter().map(|actor| actor.to_string()).collect(),
		FilterDimension::StartDate | FilterDimension::TargetDate => DatePreset::all()
			.map(|preset| preset.label().to_owned())
			.chain(std::iter::once("Custom".to_owned()))
			.collect(),
	}
}

fn state_lines(snapshot: &Snapshot) -> Vec<String> {
	let mut lines: Vec<String> = snapshot
		.states()
		.iter()
		.map(|state| format!("  {:<24} {:>4}", format!("{} ({})", state.name, state.group), snapshot.count_by_state(state.id.as_str())))
		.collect();

	let mut dangling: Vec<_> = snapshot
		.counts_by_state()
		.into_iter()
		.filter(|(state_id, _)| snapshot.state(state_id.as_str()).is_none())
		.collect();
	dangling.sort();
	lines.extend(dangling.into_iter().map(|(state_id, count)| format!("  {:<24} {count:>4}", format!("<unknown {state_id}>"))));
	lines
}

fn filter_lines(snapshot: &Snapshot, panel: &FilterPanel) -> Vec<String> {
	let mut lines = Vec::new();
	for dimension in panel.disclosure.dimensions() {
		let all = candidates(dimension, snapshot);
		let matching = all.iter().filter(|candidate| panel.query.matches(candidate)).count();
		let shown = panel.visible(dimension, all.iter(), |candidate| candidate.as_str());
		if shown.is_empty() {
			continue;
		}

		let mut line = format!(
			"  {}: {}",
			dimension,
			shown.iter().map(|candidate| candidate.as_str()).collect::<Vec<_>>().join(", ")
		);
		let hidden = matching.saturating_sub(shown.len());
		if hidden > 0 && panel.disclosure.can_expand(dimension) {
			line.push_str(&format!(" (+{hidden} more)"));
		}
		lines.push(line);
	}
	lines
}

fn due_lines(snapshot: &Snapshot, now: NaiveDateTime) -> Vec<String> {
	snapshot
		.issues()
		.iter()
		.filter_map(|issue| {
			let target = issue.target_date.as_deref()?;
			let name = if issue.name.is_empty() { issue.id.as_str() } else { issue.name.as_str() };
			Some(format!("  {name}: {} ({})", render_formatted_date(target), time_ago(target, now)))
		})
		.collect()
}

/// Renders counts per state, the revealed filter candidates and due dates.
pub fn render_board(scope: &Scope, snapshot: &Snapshot, panel: &FilterPanel, now: NaiveDateTime) -> String {
	let mut lines = vec![format!("{scope}: {} issues", snapshot.issues().len())];
	if !panel.applied.is_empty() {
		let applied: Vec<_> = panel.applied.to_fetch_params().iter().map(|(key, value)| format!("{key}={value}")).collect();
		lines.push(format!("applied: {}", applied.join(" ")));
	}

	let states = state_lines(snapshot);
	if !states.is_empty() {
		lines.push("states".to_owned());
		lines.extend(states);
	}

	let filters = filter_lines(snapshot, panel);
	if !filters.is_empty() {
		lines.push("filters".to_owned());
		lines.extend(filters);
	}

	let due = due_lines(snapshot, now);
	if !due.is_empty() {
		lines.push("due".to_owned());
		lines.extend(due);
	}

	let mut out = lines.join("\n");
	out.push('\n');
	out
}
