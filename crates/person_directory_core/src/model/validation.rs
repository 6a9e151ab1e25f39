//! Field validation rules for person form input.
//!
//! # Responsibility
//! - Check every field of a [`PersonDraft`] independently.
//! - Report all violations together, one per field.
//!
//! # Invariants
//! - Validation is pure apart from reading the current date in [`validate`].
//! - Age is the difference of calendar years only; month and day are ignored.

use crate::model::person::{parse_dob, Field, PersonDraft};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum age in whole calendar years.
pub const MIN_AGE_YEARS: i32 = 18;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{10}$|^(\+[0-9]{1,3}[- ]?)?[0-9]{10}$").expect("valid mobile regex")
});

/// Single rule violation for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Value is empty after trimming.
    Required,
    /// Value is present but has the wrong shape.
    InvalidFormat,
    /// Birth year is fewer than [`MIN_AGE_YEARS`] before the current year.
    Underage,
}

impl FieldError {
    /// English message shown next to `field`.
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (Self::Required, field) => format!("{} is required", field.label()),
            (Self::InvalidFormat, Field::Dob) => "Date of birth must be a valid date".to_string(),
            (Self::InvalidFormat, Field::Mobile) => "Invalid mobile number format".to_string(),
            (Self::InvalidFormat, field) => {
                format!("Invalid {} format", field.label().to_lowercase())
            }
            (Self::Underage, _) => format!("Age must be at least {MIN_AGE_YEARS} years"),
        }
    }
}

/// Outcome of validating one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    /// Returns `true` when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the violation recorded for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Iterates violations in field display order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn reject(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .errors
            .keys()
            .map(|field| field.element_id())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "invalid person input: {fields}")
    }
}

impl Error for ValidationReport {}

/// Validates `draft` against the local current date.
pub fn validate(draft: &PersonDraft) -> ValidationReport {
    validate_at(draft, Local::now().date_naive())
}

/// Validates `draft` using `today` as the reference date for age checks.
pub fn validate_at(draft: &PersonDraft, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in [Field::FirstName, Field::LastName, Field::City, Field::Zipcode] {
        if field.value_of(draft).trim().is_empty() {
            report.reject(field, FieldError::Required);
        }
    }

    if let Some(error) = check_dob(&draft.dob, today) {
        report.reject(Field::Dob, error);
    }

    // Emptiness ignores surrounding whitespace; the format check does not.
    if draft.email.trim().is_empty() {
        report.reject(Field::Email, FieldError::Required);
    } else if !is_valid_email(&draft.email) {
        report.reject(Field::Email, FieldError::InvalidFormat);
    }

    if draft.mobile.trim().is_empty() {
        report.reject(Field::Mobile, FieldError::Required);
    } else if !is_valid_mobile(&draft.mobile) {
        report.reject(Field::Mobile, FieldError::InvalidFormat);
    }

    report
}

/// Returns whether `email` has a basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns whether `mobile` is 10 digits with an optional `+CCC` prefix.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

fn check_dob(value: &str, today: NaiveDate) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    let Some(birth) = parse_dob(value) else {
        return Some(FieldError::InvalidFormat);
    };
    if today.year() - birth.year() < MIN_AGE_YEARS {
        return Some(FieldError::Underage);
    }
    None
}
