//! Dashboard list queries: assignee filter and the two sort orders.

use crate::model::chore::Chore;

/// Chores sorted by scheduled instant ascending, unscheduled last.
///
/// The sort is stable, so equally scheduled chores keep insertion order.
pub fn sort_soonest(chores: &[Chore]) -> Vec<&Chore> {
    let mut sorted: Vec<&Chore> = chores.iter().collect();
    sorted.sort_by_key(|chore| match chore.scheduled {
        Some(instant) => (0u8, instant.timestamp_millis()),
        None => (1u8, 0),
    });
    sorted
}

/// Chores sorted high, medium, low; stable within each bucket.
pub fn sort_by_priority(chores: &[Chore]) -> Vec<&Chore> {
    let mut sorted: Vec<&Chore> = chores.iter().collect();
    sorted.sort_by_key(|chore| chore.priority.sort_rank());
    sorted
}

/// Chores whose assignee exactly matches `assignee`.
pub fn filter_by_assignee<'a>(chores: &'a [Chore], assignee: &str) -> Vec<&'a Chore> {
    chores
        .iter()
        .filter(|chore| chore.assignee == assignee)
        .collect()
}

/// Distinct non-empty assignee names appearing on chores, sorted.
///
/// Drives the dashboard's filter dropdown, which offers only names that
/// actually occur (not the full assignee set).
pub fn assignee_filter_options(chores: &[Chore]) -> Vec<String> {
    let mut names: Vec<String> = chores
        .iter()
        .filter(|chore| !chore.assignee.is_empty())
        .map(|chore| chore.assignee.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}
