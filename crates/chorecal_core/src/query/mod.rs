//! Read-only queries over the chore list.
//!
//! # Responsibility
//! - Provide the sorting, filtering and grouping the presentation layer
//!   needs, as pure functions over borrowed chores.
//!
//! # Invariants
//! - Queries never mutate store state; callers pass the store's read-only
//!   chore slice.

pub mod calendar;
pub mod dashboard;
