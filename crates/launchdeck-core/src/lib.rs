//! Launchdeck Core Library
//!
//! This crate provides the core functionality for Launchdeck, a personal
//! launcher backend that keeps a collection of link tiles in a single JSON
//! file on disk.
//!
//! # Architecture
//!
//! The whole collection is one ordered JSON array. Reads and writes go
//! through [`LinkStore`], which serializes all file access behind a single
//! lock and replaces the file atomically on every save.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let store = LinkStore::open(&config)?;
//!
//! // Read the collection
//! let links = store.load().await?;
//!
//! // Replace it wholesale
//! store.save(&links).await?;
//! ```
//!
//! # Modules
//!
//! - `config`: Application configuration (paths, bind address)
//! - `models`: The `Link` record
//! - `store`: File-backed collection storage

pub mod config;
pub mod models;
pub mod store;

pub use config::Config;
pub use models::Link;
pub use store::{LinkStore, StoreError, StoreResult};
