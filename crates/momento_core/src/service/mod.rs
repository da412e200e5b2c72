//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate ledger, store, repositories and collaborators into
//!   use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod session;
