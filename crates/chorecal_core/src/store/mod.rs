//! Authoritative chore store.
//!
//! # Responsibility
//! - Hold the single in-process copy of chores and assignees.
//! - Persist every successful mutation through the snapshot codec.
//!
//! # Invariants
//! - Mutations never fail: persistence errors are logged and swallowed,
//!   and the in-memory state stays correct regardless.
//! - Chore IDs stay unique for the lifetime of the store.

pub mod chore_store;
