//! Directory use-case services.
//!
//! # Responsibility
//! - Hold the record collection and derive what is visible from it.
//! - Keep presenter/UI layers decoupled from storage details.

pub mod directory;
pub mod session;
pub mod view_state;
