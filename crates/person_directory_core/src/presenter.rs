//! Presentation callback surface consumed by the directory session.
//!
//! Implementations turn record sequences and control state into UI output;
//! the core never renders anything itself.

use crate::model::person::{Field, Person};

/// UI sink driven by [`crate::DirectorySession`].
pub trait Presenter {
    /// Replaces the displayed list with `records`, one card each, in order.
    fn render(&mut self, records: &[Person]);
    fn set_next_enabled(&mut self, enabled: bool);
    fn set_prev_enabled(&mut self, enabled: bool);
    /// Shows `message` next to the input identified by `field`.
    fn show_field_error(&mut self, field: Field, message: &str);
    fn clear_all_field_errors(&mut self);
}

/// Text lines of one record card: name, dob, email, mobile, city, zipcode.
pub fn card_lines(person: &Person) -> [String; 6] {
    [
        person.full_name(),
        format!("DOB: {}", person.dob),
        format!("Email: {}", person.email),
        format!("Mobile: {}", person.mobile),
        format!("City: {}", person.city),
        format!("Zipcode: {}", person.zipcode),
    ]
}
