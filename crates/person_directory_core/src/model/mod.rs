//! Domain model for directory records and form input.
//!
//! # Responsibility
//! - Define the canonical person record persisted by the directory.
//! - Define raw form input and the field-level validation rules applied to it.
//!
//! # Invariants
//! - Records carry no identity; they compare by field equality or position.
//! - A record is built from a draft only after validation succeeds.

pub mod person;
pub mod validation;
