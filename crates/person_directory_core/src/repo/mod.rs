//! Persistence layer for the person collection.
//!
//! # Responsibility
//! - Define the storage contract used by the directory.
//! - Keep SQL and serialization details out of service code.

pub mod record_store;
