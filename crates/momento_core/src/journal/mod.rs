//! In-memory journal state owned by a session.
//!
//! # Responsibility
//! - Keep the per-day mood ledger and the append-only entry store.
//! - Stay storage-agnostic; persistence lives in `repo`.
//!
//! # See also
//! - `service::session` for the owner that loads and flushes this state.

pub mod journal_store;
pub mod mood_ledger;
