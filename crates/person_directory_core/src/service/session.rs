//! Event-handling context for one directory session.
//!
//! # Responsibility
//! - Own the directory, its view state and the presenter.
//! - Translate UI events (submit, sort, search, page moves) into core calls
//!   and publish the resulting view.
//!
//! # Invariants
//! - All mutable session state lives in this object; there are no globals.
//! - Every event runs to completion before the next one (`&mut self`).
//! - Invalid input never reaches the directory.

use crate::config::DirectoryConfig;
use crate::model::person::PersonDraft;
use crate::model::validation::{validate_at, ValidationReport};
use crate::presenter::Presenter;
use crate::repo::record_store::{RecordStore, StoreError};
use crate::service::directory::{Directory, SortOrder};
use crate::service::view_state::{View, ViewState};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure of a form submission.
#[derive(Debug)]
pub enum SessionError {
    /// At least one field failed validation; nothing was added.
    Validation(ValidationReport),
    /// The record was added in memory but could not be persisted.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(report) => write!(f, "{report}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(report) => Some(report),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationReport> for SessionError {
    fn from(value: ValidationReport) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Directory, view state and presenter wired together.
pub struct DirectorySession<S: RecordStore, P: Presenter> {
    directory: Directory<S>,
    view: ViewState,
    presenter: P,
}

impl<S: RecordStore, P: Presenter> DirectorySession<S, P> {
    /// Loads the directory from `store` and publishes the initial view.
    pub fn open(store: S, presenter: P, config: &DirectoryConfig) -> Self {
        let directory = Directory::load(store);
        let mut session = Self {
            directory,
            view: ViewState::new(config.page_size),
            presenter,
        };
        let initial = session.view.initial(session.directory.all());
        session.publish(&initial);
        info!(
            "event=session_open module=session status=ok count={} page_size={}",
            session.directory.len(),
            config.page_size
        );
        session
    }

    /// Handles a form submission using the local current date for age checks.
    pub fn submit(&mut self, draft: PersonDraft) -> SessionResult<()> {
        self.submit_at(draft, Local::now().date_naive())
    }

    /// Handles a form submission with an explicit reference date.
    ///
    /// On validation failure every violated field is reported through the
    /// presenter and the directory is left unchanged.
    pub fn submit_at(&mut self, draft: PersonDraft, today: NaiveDate) -> SessionResult<()> {
        self.presenter.clear_all_field_errors();

        let report = validate_at(&draft, today);
        if !report.is_valid() {
            for (field, error) in report.errors() {
                self.presenter
                    .show_field_error(field, &error.message(field));
            }
            warn!(
                "event=person_submit module=session status=rejected invalid_fields={}",
                report.len()
            );
            return Err(report.into());
        }

        let saved = self.directory.add(draft.into_person());
        let view = self.view.after_add(self.directory.all());
        self.publish(&view);
        saved?;
        Ok(())
    }

    /// Handles a sort selection.
    pub fn sort(&mut self, order: SortOrder) {
        if let Some(view) = self.view.apply_sort(&mut self.directory, order) {
            self.publish(&view);
        }
    }

    /// Handles a search input change.
    pub fn search(&mut self, term: &str) {
        let view = self.view.apply_search(self.directory.all(), term);
        self.publish(&view);
    }

    /// Handles the "next" page control. Ignored while the control is disabled.
    pub fn next_page(&mut self) {
        if let Some(view) = self.view.next(self.directory.all()) {
            self.publish(&view);
        }
    }

    /// Handles the "previous" page control. Ignored while the control is disabled.
    pub fn prev_page(&mut self) {
        if let Some(view) = self.view.prev(self.directory.all()) {
            self.publish(&view);
        }
    }

    pub fn directory(&self) -> &Directory<S> {
        &self.directory
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn publish(&mut self, view: &View) {
        self.presenter.render(&view.records);
        self.presenter.set_next_enabled(view.controls.next_enabled);
        self.presenter.set_prev_enabled(view.controls.prev_enabled);
    }
}
