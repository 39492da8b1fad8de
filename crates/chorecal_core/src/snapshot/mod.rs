//! Snapshot codec for the persisted store state.
//!
//! # Responsibility
//! - Convert between the single persisted JSON blob and `StoreState`.
//! - Repair or discard malformed persisted data instead of failing loads.
//!
//! # Invariants
//! - `decode` never panics and never returns an error: an unusable blob is
//!   `None`, everything else is a fully sanitized state.
//! - `encode` writes exactly `{chores, assignees}`; unknown keys read from
//!   older blobs are dropped on the next write.
//! - An assignee list that is empty after filtering is never accepted; the
//!   built-in defaults take its place.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::model::chore::{clamp_to_millis, Chore, ChoreStatus, Priority};

/// Key under which the whole snapshot is stored.
pub const STORAGE_KEY: &str = "chore-calendar-data";

/// Assignees seeded when no usable persisted set exists.
pub const DEFAULT_ASSIGNEES: [&str; 5] = ["Alex", "Sam", "Jordan", "Taylor", "Morgan"];

/// Complete in-memory state of the chore store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub chores: Vec<Chore>,
    pub assignees: Vec<String>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            chores: Vec::new(),
            assignees: default_assignees(),
        }
    }
}

/// Returns a fresh copy of the five default assignees.
pub fn default_assignees() -> Vec<String> {
    DEFAULT_ASSIGNEES.iter().map(|name| name.to_string()).collect()
}

/// Decodes a persisted blob into store state.
///
/// Returns `None` ("no usable snapshot") when `raw` is absent, empty, not
/// valid JSON, or not a JSON object; the caller then starts from defaults.
/// Otherwise every surviving chore is sanitized field-by-field and the
/// assignee list falls back to the defaults when nothing valid remains.
pub fn decode(raw: Option<&str>) -> Option<StoreState> {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return None,
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=snapshot_discarded module=snapshot status=error reason=parse error={err}");
            return None;
        }
    };
    let Value::Object(root) = value else {
        warn!("event=snapshot_discarded module=snapshot status=error reason=non_object_root");
        return None;
    };

    let mut chores = Vec::new();
    let mut dropped = 0usize;
    if let Some(Value::Array(entries)) = root.get("chores") {
        for entry in entries {
            match sanitize_chore(entry) {
                Some(chore) => chores.push(chore),
                None => dropped += 1,
            }
        }
    }
    if dropped > 0 {
        debug!("event=snapshot_entries_dropped module=snapshot status=ok dropped={dropped}");
    }

    let assignees = match root.get("assignees") {
        Some(Value::Array(entries)) => {
            let kept: Vec<String> = entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .collect();
            if kept.is_empty() {
                default_assignees()
            } else {
                kept
            }
        }
        _ => default_assignees(),
    };

    Some(StoreState { chores, assignees })
}

/// Serializes store state to the persisted wire shape.
pub fn encode(state: &StoreState) -> Result<String, serde_json::Error> {
    let wire = WireSnapshot {
        chores: state.chores.iter().map(WireChore::from).collect(),
        assignees: &state.assignees,
    };
    serde_json::to_string(&wire)
}

/// A chore entry survives only as an object with a string `title` and with
/// `scheduled` absent, null, or a string. Everything else about the entry is
/// repairable and coerced per field.
fn sanitize_chore(entry: &Value) -> Option<Chore> {
    let object = entry.as_object()?;
    let title = object.get("title")?.as_str()?;
    let scheduled_raw = match object.get("scheduled") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.as_str()),
        Some(_) => return None,
    };

    let id = match object.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    };

    Some(Chore {
        id,
        title: title.to_string(),
        description: string_field(object.get("description")),
        assignee: string_field(object.get("assignee")),
        scheduled: scheduled_raw.and_then(parse_scheduled),
        priority: object
            .get("priority")
            .and_then(Value::as_str)
            .map(Priority::parse_lenient)
            .unwrap_or_default(),
        status: object
            .get("status")
            .and_then(Value::as_str)
            .map(ChoreStatus::parse_lenient)
            .unwrap_or_default(),
    })
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn parse_scheduled(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| clamp_to_millis(dt.with_timezone(&Utc)))
}

#[derive(Serialize)]
struct WireSnapshot<'a> {
    chores: Vec<WireChore<'a>>,
    assignees: &'a [String],
}

#[derive(Serialize)]
struct WireChore<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    assignee: &'a str,
    scheduled: String,
    priority: &'static str,
    status: &'static str,
}

impl<'a> From<&'a Chore> for WireChore<'a> {
    fn from(chore: &'a Chore) -> Self {
        Self {
            id: &chore.id,
            title: &chore.title,
            description: &chore.description,
            assignee: &chore.assignee,
            scheduled: chore
                .scheduled
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
            priority: chore.priority.as_str(),
            status: chore.status.as_str(),
        }
    }
}
