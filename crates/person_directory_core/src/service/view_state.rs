//! Visible-record derivation for search, sort and pagination controls.
//!
//! # Responsibility
//! - Track the active search term, sort order and page offset.
//! - Compute the record slice to render and the pagination control state.
//!
//! # Invariants
//! - `page_end` is always a positive multiple of the page size.
//! - Pages are cut from the full, unfiltered collection in its current order.
//! - Search results are never paginated and never move the page offset.
//! - Sorting renders the first page without touching the stored offset.
//! - Out-of-range pages produce short or empty slices, never errors.

use crate::model::person::Person;
use crate::repo::record_store::RecordStore;
use crate::service::directory::{Directory, SortOrder};
use log::debug;
use std::num::NonZeroUsize;

/// Enablement of the previous/next page controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageControls {
    pub next_enabled: bool,
    pub prev_enabled: bool,
}

/// Records to render together with the control state to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub records: Vec<Person>,
    pub controls: PageControls,
}

/// Search, sort and page parameters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    sort_order: SortOrder,
    page_size: usize,
    page_end: usize,
    controls: PageControls,
}

impl ViewState {
    /// Creates state positioned on the first page with no search or sort.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_term: String::new(),
            sort_order: SortOrder::None,
            page_size: page_size.get(),
            page_end: page_size.get(),
            controls: PageControls::default(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Exclusive end offset of the current page.
    pub fn page_end(&self) -> usize {
        self.page_end
    }

    pub fn controls(&self) -> PageControls {
        self.controls
    }

    /// Computes the view shown right after loading.
    ///
    /// An empty collection disables both controls; otherwise only "previous"
    /// starts disabled.
    pub fn initial(&mut self, records: &[Person]) -> View {
        self.page_end = self.page_size;
        self.reset_controls(records.len());
        self.view(self.first_page(records))
    }

    /// Filters by case-insensitive substring of first or last name.
    ///
    /// Returns every match in current order; the page offset is untouched.
    pub fn apply_search(&mut self, records: &[Person], term: &str) -> View {
        self.search_term = term.to_string();
        let needle = term.to_lowercase();
        let matches = records
            .iter()
            .filter(|person| person.name_contains(&needle))
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            "event=view_search module=view status=ok term_chars={} matches={}",
            term.chars().count(),
            matches.len()
        );
        self.view(matches)
    }

    /// Sorts the directory and shows the first page of the sorted collection.
    ///
    /// Returns `None` for [`SortOrder::None`], which re-renders nothing.
    pub fn apply_sort<S: RecordStore>(
        &mut self,
        directory: &mut Directory<S>,
        order: SortOrder,
    ) -> Option<View> {
        self.sort_order = order;
        if order == SortOrder::None {
            return None;
        }
        directory.sort_by(order);
        Some(self.view(self.first_page(directory.all())))
    }

    /// Advances one page.
    ///
    /// Returns `None` without changing state when "next" is disabled.
    pub fn next(&mut self, records: &[Person]) -> Option<View> {
        if !self.controls.next_enabled {
            return None;
        }
        self.page_end += self.page_size;
        if self.page_end >= records.len() {
            self.controls.next_enabled = false;
        }
        self.controls.prev_enabled = true;
        debug!(
            "event=view_page module=view status=ok direction=next page_end={} total={}",
            self.page_end,
            records.len()
        );
        Some(self.view(self.current_page(records)))
    }

    /// Steps back one page.
    ///
    /// Returns `None` without changing state when "previous" is disabled or
    /// the first page is already shown.
    pub fn prev(&mut self, records: &[Person]) -> Option<View> {
        if !self.controls.prev_enabled || self.page_end <= self.page_size {
            return None;
        }
        self.page_end -= self.page_size;
        if self.page_end <= self.page_size {
            self.controls.prev_enabled = false;
        }
        self.controls.next_enabled = true;
        debug!(
            "event=view_page module=view status=ok direction=prev page_end={} total={}",
            self.page_end,
            records.len()
        );
        Some(self.view(self.current_page(records)))
    }

    /// Computes the view after a record was appended.
    ///
    /// Shows the first page. Offset and control state stay as they were
    /// until the next explicit page move, even when the directory was empty
    /// at load time.
    pub fn after_add(&self, records: &[Person]) -> View {
        self.view(self.first_page(records))
    }

    /// Records on the page ending at the stored offset.
    pub fn current_page(&self, records: &[Person]) -> Vec<Person> {
        page_slice(records, self.page_end, self.page_size).to_vec()
    }

    fn first_page(&self, records: &[Person]) -> Vec<Person> {
        page_slice(records, self.page_size, self.page_size).to_vec()
    }

    fn reset_controls(&mut self, total: usize) {
        self.controls = PageControls {
            next_enabled: total > 0,
            prev_enabled: false,
        };
    }

    fn view(&self, records: Vec<Person>) -> View {
        View {
            records,
            controls: self.controls,
        }
    }
}

/// Returns `records[end - size .. end]`, clamped to the collection bounds.
pub fn page_slice(records: &[Person], end: usize, size: usize) -> &[Person] {
    let stop = end.min(records.len());
    let start = end.saturating_sub(size).min(stop);
    &records[start..stop]
}
