//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `person_directory_core` linkage with deterministic output.
//! - Optionally print the first page of a directory database.
//!
//! Usage: `person_directory_cli [DB_PATH]`
//!
//! Logs go to `$PERSON_DIRECTORY_LOG_DIR` (absolute path) or to
//! `<temp dir>/person_directory_logs`.

use person_directory_core::db::open_db;
use person_directory_core::{
    card_lines, default_log_level, flush_logging, init_logging, DirectoryConfig, DirectorySession,
    Field, Person, Presenter, SqliteRecordStore,
};
use std::path::PathBuf;

const LOG_DIR_ENV: &str = "PERSON_DIRECTORY_LOG_DIR";

/// Presenter writing record cards to stdout.
#[derive(Default)]
struct StdoutPresenter {
    next_enabled: bool,
    prev_enabled: bool,
}

impl Presenter for StdoutPresenter {
    fn render(&mut self, records: &[Person]) {
        if records.is_empty() {
            println!("(no records)");
        }
        for person in records {
            for line in card_lines(person) {
                println!("{line}");
            }
            println!();
        }
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    fn set_prev_enabled(&mut self, enabled: bool) {
        self.prev_enabled = enabled;
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        eprintln!("{field}: {message}");
    }

    fn clear_all_field_errors(&mut self) {}
}

fn main() {
    println!("person_directory_core ping={}", person_directory_core::ping());
    println!(
        "person_directory_core version={}",
        person_directory_core::core_version()
    );

    let Some(db_path) = std::env::args().nth(1) else {
        return;
    };

    let log_dir = resolve_log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("failed to initialize logging in `{}`: {err}", log_dir.display());
        std::process::exit(1);
    }

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            flush_logging();
            std::process::exit(1);
        }
    };

    let config = DirectoryConfig::default();
    let store = SqliteRecordStore::new(&conn, config.storage_key.as_str());
    let session = DirectorySession::open(store, StdoutPresenter::default(), &config);
    let presenter = session.presenter();
    println!(
        "records={} next_enabled={} prev_enabled={}",
        session.directory().len(),
        presenter.next_enabled,
        presenter.prev_enabled
    );
    flush_logging();
}

fn resolve_log_dir() -> PathBuf {
    std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::env::temp_dir().join("person_directory_logs"))
}
