//! Calendar grouping and weekly completion progress.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::model::chore::{Chore, ChoreStatus};

/// Completion progress over the chores scheduled in one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total` as a rounded integer percent; 0 when `total` is 0.
    pub percent: u8,
}

/// Scheduled chores grouped by calendar day (UTC), each day sorted by time.
///
/// Unscheduled chores do not appear on the calendar at all.
pub fn chores_by_date(chores: &[Chore]) -> BTreeMap<NaiveDate, Vec<&Chore>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Chore>> = BTreeMap::new();
    for chore in chores {
        if let Some(instant) = chore.scheduled {
            grouped.entry(instant.date_naive()).or_default().push(chore);
        }
    }
    for day in grouped.values_mut() {
        day.sort_by_key(|chore| chore.scheduled);
    }
    grouped
}

/// Completion progress for the Monday-start week containing `now`.
///
/// Only chores scheduled within that week count; `now` is a parameter so
/// callers own the time-zone decision and tests stay deterministic.
pub fn weekly_completion(chores: &[Chore], now: DateTime<Utc>) -> WeekProgress {
    let today = now.date_naive();
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Duration::days(7);

    let mut completed = 0usize;
    let mut total = 0usize;
    for chore in chores {
        let Some(instant) = chore.scheduled else {
            continue;
        };
        let day = instant.date_naive();
        if day < week_start || day >= week_end {
            continue;
        }
        total += 1;
        if chore.status == ChoreStatus::Completed {
            completed += 1;
        }
    }

    let percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };
    WeekProgress {
        completed,
        total,
        percent,
    }
}
