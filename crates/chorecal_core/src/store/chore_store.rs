//! Chore store over a pluggable storage backend.
//!
//! # Responsibility
//! - Expose the mutation operations the view layer calls.
//! - Load once at startup, save after every successful mutation.
//!
//! # Invariants
//! - `update`/`delete`/`add_assignee` on a miss are silent no-ops and skip
//!   the persistence write (state is unchanged).
//! - A failed persistence write never propagates to the mutation caller;
//!   the next successful mutation retries with the then-current state.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};
use uuid::Uuid;

use crate::model::chore::{Chore, ChoreDraft, ChoreId, ChorePatch};
use crate::snapshot::{self, StoreState, STORAGE_KEY};
use crate::storage::{Storage, StorageError};

/// Failure of one fire-and-forget persistence attempt.
///
/// Observed through the log only; mutation callers never see it.
#[derive(Debug)]
pub enum PersistError {
    Encode(serde_json::Error),
    Storage(StorageError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

/// In-process authoritative holder of chores and assignees.
///
/// Constructed once at startup and injected into consumers; tests build
/// isolated instances over `MemoryStorage`.
pub struct ChoreStore<S: Storage> {
    state: StoreState,
    storage: S,
}

impl<S: Storage> ChoreStore<S> {
    /// Opens a store over `storage`, loading the persisted snapshot.
    ///
    /// A missing or corrupt snapshot falls back to the built-in defaults;
    /// opening never fails.
    pub fn open(storage: S) -> Self {
        let state = match snapshot::decode(storage.get(STORAGE_KEY).as_deref()) {
            Some(state) => {
                info!(
                    "event=snapshot_load module=store status=ok chores={} assignees={}",
                    state.chores.len(),
                    state.assignees.len()
                );
                state
            }
            None => {
                info!("event=snapshot_load module=store status=ok source=defaults");
                StoreState::default()
            }
        };
        Self { state, storage }
    }

    /// Read-only access to the backing storage.
    ///
    /// Lets callers (and tests) inspect the last persisted snapshot without
    /// going through a second store instance.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn chores(&self) -> &[Chore] {
        &self.state.chores
    }

    pub fn assignees(&self) -> &[String] {
        &self.state.assignees
    }

    pub fn get(&self, id: &str) -> Option<&Chore> {
        self.state.chores.iter().find(|chore| chore.id == id)
    }

    /// Adds a chore, assigning a fresh unique ID.
    ///
    /// Appends at the end: insertion order is preserved and duplicate
    /// titles are allowed.
    pub fn add(&mut self, draft: ChoreDraft) -> ChoreId {
        let id = Uuid::new_v4().to_string();
        self.state.chores.push(draft.into_chore(id.clone()));
        self.persist();
        id
    }

    /// Merges `patch` into the chore with `id`, field by replacement.
    ///
    /// Unknown IDs are a silent no-op; this masks caller bugs by design,
    /// so the contract is pinned by tests.
    pub fn update(&mut self, id: &str, patch: ChorePatch) {
        let Some(chore) = self.state.chores.iter_mut().find(|chore| chore.id == id) else {
            return;
        };
        patch.apply(chore);
        self.persist();
    }

    /// Advances the chore's status one step along the cycle
    /// `pending -> in_progress -> completed -> pending`.
    pub fn advance_status(&mut self, id: &str) {
        let next = match self.get(id) {
            Some(chore) => chore.status.advanced(),
            None => return,
        };
        self.update(
            id,
            ChorePatch {
                status: Some(next),
                ..ChorePatch::default()
            },
        );
    }

    /// Removes the chore with `id`; no-op when absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.state.chores.len();
        self.state.chores.retain(|chore| chore.id != id);
        if self.state.chores.len() != before {
            self.persist();
        }
    }

    /// Appends `name` to the assignee set unless already present
    /// (case-sensitive exact match). Never touches any chore's assignee.
    pub fn add_assignee(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.state.assignees.iter().any(|existing| *existing == name) {
            return;
        }
        self.state.assignees.push(name);
        self.persist();
    }

    /// Replaces the entire state wholesale. Startup path; does not persist
    /// what was just loaded.
    pub fn load(&mut self, state: StoreState) {
        self.state = state;
    }

    fn persist(&mut self) {
        if let Err(err) = self.try_persist() {
            warn!("event=snapshot_save module=store status=error error={err}");
        }
    }

    fn try_persist(&mut self) -> Result<(), PersistError> {
        let blob = snapshot::encode(&self.state).map_err(PersistError::Encode)?;
        self.storage
            .set(STORAGE_KEY, &blob)
            .map_err(PersistError::Storage)
    }
}
