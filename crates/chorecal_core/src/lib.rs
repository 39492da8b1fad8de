//! Core domain logic for the chore calendar.
//! This crate is the single source of truth for chore state and persistence.

pub mod logging;
pub mod model;
pub mod query;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chore::{
    clamp_to_millis, Chore, ChoreDraft, ChoreId, ChorePatch, ChoreStatus, Priority,
};
pub use query::calendar::{chores_by_date, weekly_completion, WeekProgress};
pub use query::dashboard::{
    assignee_filter_options, filter_by_assignee, sort_by_priority, sort_soonest,
};
pub use snapshot::{decode, default_assignees, encode, StoreState, DEFAULT_ASSIGNEES, STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::chore_store::{ChoreStore, PersistError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
