#![allow(dead_code)]

use chrono::NaiveDate;
use person_directory_core::{Field, Person, PersonDraft, Presenter};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn person(first_name: &str, last_name: &str, dob: &str) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        dob: dob.to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        mobile: "9876543210".to_string(),
        city: "Pune".to_string(),
        zipcode: "411001".to_string(),
    }
}

/// `count` records named `P0..P{count-1}` with distinct birth years.
pub fn numbered_people(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| person(&format!("P{i}"), "Doe", &format!("{}-01-01", 1960 + i)))
        .collect()
}

pub fn valid_draft(first_name: &str) -> PersonDraft {
    PersonDraft {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        dob: "1990-05-20".to_string(),
        email: "someone@example.com".to_string(),
        mobile: "+91 9876543210".to_string(),
        city: "Pune".to_string(),
        zipcode: "411001".to_string(),
    }
}

pub fn first_names(records: &[Person]) -> Vec<String> {
    records
        .iter()
        .map(|person| person.first_name.clone())
        .collect()
}

/// Presenter that remembers every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub rendered: Vec<Vec<Person>>,
    pub next_enabled: Option<bool>,
    pub prev_enabled: Option<bool>,
    pub field_errors: Vec<(Field, String)>,
    pub clear_calls: usize,
}

impl RecordingPresenter {
    pub fn last_render(&self) -> &[Person] {
        self.rendered.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_names(&self) -> Vec<String> {
        first_names(self.last_render())
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, records: &[Person]) {
        self.rendered.push(records.to_vec());
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = Some(enabled);
    }

    fn set_prev_enabled(&mut self, enabled: bool) {
        self.prev_enabled = Some(enabled);
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        self.field_errors.push((field, message.to_string()));
    }

    fn clear_all_field_errors(&mut self) {
        self.field_errors.clear();
        self.clear_calls += 1;
    }
}
