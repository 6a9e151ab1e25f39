//! Core logic for the person directory.
//! This crate is the single source of truth for record and view invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod service;

pub use config::{DirectoryConfig, DEFAULT_STORAGE_KEY, PAGE_SIZE};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::person::{Field, Person, PersonDraft};
pub use model::validation::{validate, validate_at, FieldError, ValidationReport};
pub use presenter::{card_lines, Presenter};
pub use repo::record_store::{RecordStore, SqliteRecordStore, StoreError, StoreResult};
pub use service::directory::{Directory, SortOrder};
pub use service::session::{DirectorySession, SessionError, SessionResult};
pub use service::view_state::{PageControls, View, ViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
