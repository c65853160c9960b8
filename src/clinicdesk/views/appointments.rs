use super::lookup::{clinic_label, patient_label, provider_label};
use super::{format_start, Listing};
use crate::error::{ClinicError, Result};
use crate::model::{AppointmentId, AppointmentStatus};
use crate::store::DataStore;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    fn matches(&self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentFilter {
    pub status: StatusFilter,
    /// Restrict to appointments starting on this day.
    pub day: Option<NaiveDate>,
}

impl AppointmentFilter {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn on_day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    pub appointment_id: AppointmentId,
    pub start_date_time: NaiveDateTime,
    pub patient_label: String,
    pub provider_label: String,
    pub clinic_label: String,
    pub status: AppointmentStatus,
}

impl AppointmentRow {
    pub fn formatted_start(&self) -> String {
        format_start(&self.start_date_time)
    }
}

/// Filters, then sorts newest first. The sort is stable, so appointments with
/// the same start keep their insertion order.
pub fn run<S: DataStore>(store: &S, filter: AppointmentFilter) -> Listing<AppointmentRow> {
    let appointments = store.appointments();
    if appointments.is_empty() {
        return Listing::NoData;
    }

    let mut selected: Vec<_> = appointments
        .iter()
        .filter(|a| filter.status.matches(a.status))
        .filter(|a| filter.day.map_or(true, |day| a.starts_on(day)))
        .collect();
    selected.sort_by(|a, b| b.start_date_time.cmp(&a.start_date_time));

    let rows = selected
        .into_iter()
        .map(|a| AppointmentRow {
            appointment_id: a.appointment_id,
            start_date_time: a.start_date_time,
            patient_label: patient_label(store, a.patient_id),
            provider_label: provider_label(store, a.provider_id),
            clinic_label: clinic_label(store, a.clinic_id),
            status: a.status,
        })
        .collect();

    Listing::Rows(rows)
}
