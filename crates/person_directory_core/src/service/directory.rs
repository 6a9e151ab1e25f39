//! In-memory person collection mirrored to durable storage.
//!
//! # Responsibility
//! - Own the canonical ordered record collection for one session.
//! - Persist the full collection after every append.
//! - Reorder records by date of birth on request.
//!
//! # Invariants
//! - Records keep insertion order until explicitly sorted.
//! - Sorting is stable and is never persisted.
//! - Records are never removed.

use crate::model::person::Person;
use crate::repo::record_store::{RecordStore, StoreResult};
use log::{error, info};
use std::cmp::Ordering;

/// Requested record ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the current order.
    #[default]
    None,
    /// Earliest date of birth first.
    Ascending,
    /// Latest date of birth first.
    Descending,
}

impl SortOrder {
    /// Parses a sort control value (`asc`, `desc`, anything else is `None`).
    pub fn from_control_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Self::Ascending,
            "desc" | "descending" => Self::Descending,
            _ => Self::None,
        }
    }
}

/// Ordered person collection backed by a [`RecordStore`].
pub struct Directory<S: RecordStore> {
    store: S,
    records: Vec<Person>,
}

impl<S: RecordStore> Directory<S> {
    /// Builds the directory from whatever `store` currently holds.
    pub fn load(store: S) -> Self {
        let records = store.load();
        info!(
            "event=directory_load module=directory status=ok count={}",
            records.len()
        );
        Self { store, records }
    }

    /// Appends `person` and persists the full collection.
    ///
    /// The record stays in memory even when the write fails.
    pub fn add(&mut self, person: Person) -> StoreResult<()> {
        self.records.push(person);
        if let Err(err) = self.store.save(&self.records) {
            error!(
                "event=person_add module=directory status=error error_code=save_failed count={} error={}",
                self.records.len(),
                err
            );
            return Err(err);
        }
        info!(
            "event=person_add module=directory status=ok count={}",
            self.records.len()
        );
        Ok(())
    }

    /// Reorders records in place by date of birth.
    ///
    /// Equal dates keep their relative order. Unparseable dates go last in
    /// both directions.
    pub fn sort_by(&mut self, order: SortOrder) {
        match order {
            SortOrder::None => return,
            SortOrder::Ascending => self
                .records
                .sort_by(|a, b| compare_birth_dates(a, b, Ordering::Less)),
            SortOrder::Descending => self
                .records
                .sort_by(|a, b| compare_birth_dates(a, b, Ordering::Greater)),
        }
        info!(
            "event=directory_sort module=directory status=ok order={:?} count={}",
            order,
            self.records.len()
        );
    }

    /// Read-only view of the records in current order.
    pub fn all(&self) -> &[Person] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// `earlier` is the ordering returned when `a` was born before `b`.
fn compare_birth_dates(a: &Person, b: &Person, earlier: Ordering) -> Ordering {
    match (a.birth_date(), b.birth_date()) {
        (Some(left), Some(right)) => match left.cmp(&right) {
            Ordering::Less => earlier,
            Ordering::Greater => earlier.reverse(),
            Ordering::Equal => Ordering::Equal,
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
