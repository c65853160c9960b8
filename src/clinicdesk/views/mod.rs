//! # View Layer
//!
//! Pure projections of the entity store for display. Each view lives in its
//! own submodule and borrows a [`DataStore`](crate::store::DataStore); none of
//! them mutate anything.
//!
//! ## What Views Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **Fail on dangling references**: A foreign key that doesn't resolve is
//!   rendered with a placeholder label ([`UNKNOWN`] / [`NOT_AVAILABLE`])
//! - **Text search**: That runs over rendered rows, in the UI
//!
//! ## Empty Collections
//!
//! Listings return [`Listing::NoData`] when the underlying collection is empty,
//! so the UI can show a hint instead of an empty table. A filter that matches
//! nothing in a non-empty collection is `Listing::Rows(vec![])`.
//!
//! ## View Modules
//!
//! - [`dashboard`]: Headline counters
//! - [`appointments`]: Filtered, sorted, joined appointment rows
//! - [`patients`]: Patient rows
//! - [`lookup`]: Label joins, dropdown options and detail views

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub mod appointments;
pub mod dashboard;
pub mod lookup;
pub mod patients;

/// Placeholder for an unresolved patient or provider.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder for a missing optional value or an unresolved clinic.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    NoData,
    Rows(Vec<T>),
}

impl<T> Listing<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            Listing::NoData => &[],
            Listing::Rows(rows) => rows,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Listing::NoData)
    }
}

/// `Sat, Jun 1, 2024, 09:00 AM`
pub fn format_start(start: &NaiveDateTime) -> String {
    start.format("%a, %b %-d, %Y, %I:%M %p").to_string()
}

/// `Mar 14, 1990`, or `N/A` when absent.
pub fn format_dob(dob: Option<&NaiveDate>) -> String {
    dob.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Empty and absent optional text both render as `N/A`.
pub fn or_not_available(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
