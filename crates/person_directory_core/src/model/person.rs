//! Person record model.
//!
//! # Responsibility
//! - Define the stored record shape and its JSON wire names.
//! - Convert raw form input into a normalized record.
//!
//! # Invariants
//! - Text fields are stored trimmed; `dob` is stored exactly as entered.
//! - Stored records are not re-validated on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Date format used by `dob` values (`YYYY-MM-DD`).
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// One directory entry.
///
/// Serialized with camelCase keys so stored arrays keep the external
/// `firstName`/`lastName` naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// ISO calendar date string (`YYYY-MM-DD`).
    pub dob: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub zipcode: String,
}

impl Person {
    /// Returns `"<first> <last>"` as shown on record cards.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Parses `dob` into a calendar date.
    ///
    /// Returns `None` when the stored value is not a valid `YYYY-MM-DD` date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_dob(&self.dob)
    }

    /// Returns whether first or last name contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercase.
    pub(crate) fn name_contains(&self, needle_lower: &str) -> bool {
        self.first_name.to_lowercase().contains(needle_lower)
            || self.last_name.to_lowercase().contains(needle_lower)
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub zipcode: String,
}

impl PersonDraft {
    /// Builds the record stored for this draft.
    ///
    /// Does not validate; callers run [`crate::validate`] first.
    pub fn into_person(self) -> Person {
        Person {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            dob: self.dob,
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            city: self.city.trim().to_string(),
            zipcode: self.zipcode.trim().to_string(),
        }
    }
}

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Dob,
    Email,
    Mobile,
    City,
    Zipcode,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Dob,
        Field::Email,
        Field::Mobile,
        Field::City,
        Field::Zipcode,
    ];

    /// Stable input element identifier used by presenters.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Dob => "dob",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::City => "city",
            Self::Zipcode => "zipcode",
        }
    }

    /// Human label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Dob => "Date of birth",
            Self::Email => "Email",
            Self::Mobile => "Mobile number",
            Self::City => "City",
            Self::Zipcode => "Pincode/Zipcode",
        }
    }

    /// Returns the raw draft value for this field.
    pub fn value_of(self, draft: &PersonDraft) -> &str {
        match self {
            Self::FirstName => &draft.first_name,
            Self::LastName => &draft.last_name,
            Self::Dob => &draft.dob,
            Self::Email => &draft.email,
            Self::Mobile => &draft.mobile,
            Self::City => &draft.city,
            Self::Zipcode => &draft.zipcode,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

pub(crate) fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DOB_FORMAT).ok()
}
