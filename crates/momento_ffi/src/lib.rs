//! Flutter bridge crate for Momento core.

pub mod api;
