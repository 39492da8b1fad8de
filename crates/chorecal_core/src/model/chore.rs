//! Chore domain model.
//!
//! # Responsibility
//! - Define the canonical chore record shared by the store, codec and views.
//! - Provide the status cycle used by the dashboard's one-tap toggle.
//!
//! # Invariants
//! - `id` is stable and never reused for another chore.
//! - Unknown persisted `priority`/`status` text coerces to the default
//!   variant instead of failing the whole record.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Clamps an instant to the millisecond precision the snapshot format keeps.
///
/// Applied at every ingestion point (codec decode, draft/patch application),
/// so a persisted schedule never shifts on reload.
pub fn clamp_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(instant.timestamp_millis())
        .single()
        .unwrap_or(instant)
}

/// Stable opaque identifier for a chore.
///
/// Generated values are UUIDv4 strings, but any string loaded from a
/// persisted snapshot is kept verbatim. A type alias keeps semantic intent
/// explicit in signatures.
pub type ChoreId = String;

/// Urgency bucket shown on the dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parses persisted text, coercing unknown values to `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Dashboard sort position: high before medium before low.
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Chore lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ChoreStatus {
    /// Parses persisted text, coercing unknown values to `Pending`.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Next state in the cycle `pending -> in_progress -> completed -> pending`.
    pub fn advanced(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// Canonical chore record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Stable opaque ID used for updates, deletes and card identity.
    pub id: ChoreId,
    pub title: String,
    pub description: String,
    /// Assignee name. Not required to exist in the store's assignee set.
    pub assignee: String,
    /// Scheduled instant; unscheduled chores sort last in the dashboard.
    pub scheduled: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub status: ChoreStatus,
}

impl Chore {
    /// Creates a chore with a freshly generated ID and default fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title)
    }

    /// Creates a chore with a caller-provided ID.
    ///
    /// Used by the snapshot codec, where identity already exists in the
    /// persisted data.
    pub fn with_id(id: ChoreId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            assignee: String::new(),
            scheduled: None,
            priority: Priority::default(),
            status: ChoreStatus::default(),
        }
    }
}

/// Chore-shaped payload without an ID, accepted by `ChoreStore::add`.
///
/// The store assigns the ID; everything else is taken as given (field
/// validation such as a non-empty title is the caller's job).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoreDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub scheduled: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub status: ChoreStatus,
}

impl ChoreDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_chore(self, id: ChoreId) -> Chore {
        Chore {
            id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            scheduled: self.scheduled.map(clamp_to_millis),
            priority: self.priority,
            status: self.status,
        }
    }
}

/// Partial update applied by `ChoreStore::update`.
///
/// Each `Some` field replaces the chore's field wholesale; `None` fields are
/// left untouched. `scheduled` is doubly optional so a patch can distinguish
/// "leave as is" from "clear the schedule".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChorePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub scheduled: Option<Option<DateTime<Utc>>>,
    pub priority: Option<Priority>,
    pub status: Option<ChoreStatus>,
}

impl ChorePatch {
    pub(crate) fn apply(self, chore: &mut Chore) {
        if let Some(title) = self.title {
            chore.title = title;
        }
        if let Some(description) = self.description {
            chore.description = description;
        }
        if let Some(assignee) = self.assignee {
            chore.assignee = assignee;
        }
        if let Some(scheduled) = self.scheduled {
            chore.scheduled = scheduled.map(clamp_to_millis);
        }
        if let Some(priority) = self.priority {
            chore.priority = priority;
        }
        if let Some(status) = self.status {
            chore.status = status;
        }
    }
}
