//! Domain model for household chores.
//!
//! # Responsibility
//! - Define the canonical chore record and its enumerated fields.
//! - Provide the draft/patch request shapes used by store mutations.
//!
//! # Invariants
//! - Every chore is identified by a stable `ChoreId`, unique in the store.
//! - `ChoreStatus` only ever holds one of its three variants; the advance
//!   operation cycles through them in a fixed order.

pub mod chore;
