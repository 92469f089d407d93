//! Launchdeck server library
//!
//! HTTP surface over the [`launchdeck_core`] store: the `/api/links`
//! read/replace endpoint plus single-file static serving for the front end.
//! The binary in `main.rs` wires this up to configuration and logging.

pub mod api;
pub mod router;
