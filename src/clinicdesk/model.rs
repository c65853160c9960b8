//! # Domain Model
//!
//! The four entities of the clinic desk ([`Patient`], [`Provider`], [`Clinic`],
//! [`Appointment`]) plus the payloads used to create them.
//!
//! Records serialize with the field names the clinic's API speaks
//! (`PatientID`, `FirstName`, `StartDateTime`, ...), so seed files and `--json`
//! output line up with what a real backend would send.
//!
//! Foreign keys on [`Appointment`] are plain identifiers. Nothing here checks
//! that they resolve; joins happen at view time (see [`crate::views::lookup`]).

use crate::error::{ClinicError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PatientId = u32;
pub type ProviderId = u32;
pub type ClinicId = u32;
pub type AppointmentId = u32;

/// The four entity categories addressed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Patients,
    Providers,
    Clinics,
    Appointments,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Patients => "patients",
            ResourceKind::Providers => "providers",
            ResourceKind::Clinics => "clinics",
            ResourceKind::Appointments => "appointments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(ClinicError::InvalidInput(format!(
                "Invalid status: '{}'. Must be one of: scheduled, cancelled, completed",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    #[serde(rename = "PatientID")]
    pub patient_id: PatientId,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "DOB", default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Patient {
    pub fn from_new(patient_id: PatientId, new: NewPatient) -> Self {
        Self {
            patient_id,
            first_name: new.first_name,
            last_name: new.last_name,
            dob: new.dob,
            phone: new.phone,
            email: new.email,
        }
    }

    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Provider {
    #[serde(rename = "ProviderID")]
    pub provider_id: ProviderId,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl Provider {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Clinic {
    #[serde(rename = "ClinicID")]
    pub clinic_id: ClinicId,
    pub clinic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Appointment {
    #[serde(rename = "AppointmentID")]
    pub appointment_id: AppointmentId,
    pub start_date_time: NaiveDateTime,
    #[serde(rename = "PatientID")]
    pub patient_id: PatientId,
    #[serde(rename = "ProviderID")]
    pub provider_id: ProviderId,
    #[serde(rename = "ClinicID")]
    pub clinic_id: ClinicId,
    pub reason: String,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn from_new(appointment_id: AppointmentId, new: NewAppointment) -> Self {
        Self {
            appointment_id,
            start_date_time: new.start_date_time,
            patient_id: new.patient_id,
            provider_id: new.provider_id,
            clinic_id: new.clinic_id,
            reason: new.reason,
            status: new.status.unwrap_or_default(),
        }
    }

    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start_date_time.date() == day
    }
}

/// Caller-supplied fields for a new patient. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "DOB", default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewPatient {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Splits a free-form name: the first word is the first name, the rest the last name.
    pub fn from_full_name(name: &str) -> Self {
        let mut words = name.split_whitespace();
        let first = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();
        Self::new(first, rest.join(" "))
    }

    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Caller-supplied fields for a new appointment. `status` of `None` means scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewAppointment {
    pub start_date_time: NaiveDateTime,
    #[serde(rename = "PatientID")]
    pub patient_id: PatientId,
    #[serde(rename = "ProviderID")]
    pub provider_id: ProviderId,
    #[serde(rename = "ClinicID")]
    pub clinic_id: ClinicId,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

impl NewAppointment {
    pub fn new(
        start_date_time: NaiveDateTime,
        patient_id: PatientId,
        provider_id: ProviderId,
        clinic_id: ClinicId,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            start_date_time,
            patient_id,
            provider_id,
            clinic_id,
            reason: reason.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Raw scheduling form input, as typed by a user.
///
/// Every field is required. [`AppointmentForm::validate`] must succeed before
/// anything reaches the gateway.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub patient: Option<String>,
    pub provider: Option<String>,
    pub clinic: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

impl AppointmentForm {
    pub fn validate(&self) -> Result<NewAppointment> {
        let fields = [
            &self.patient,
            &self.provider,
            &self.clinic,
            &self.date,
            &self.time,
            &self.reason,
        ];
        let filled: Vec<&str> = fields
            .iter()
            .filter_map(|f| f.as_deref().map(str::trim))
            .filter(|f| !f.is_empty())
            .collect();
        if filled.len() != fields.len() {
            return Err(ClinicError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let (patient, provider, clinic, date, time, reason) = (
            filled[0], filled[1], filled[2], filled[3], filled[4], filled[5],
        );

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ClinicError::InvalidInput(format!("Invalid date: {}", date)))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| ClinicError::InvalidInput(format!("Invalid time: {}", time)))?;

        Ok(NewAppointment::new(
            date.and_time(time),
            parse_id("patient", patient)?,
            parse_id("provider", provider)?,
            parse_id("clinic", clinic)?,
            reason,
        ))
    }
}

fn parse_id(field: &str, raw: &str) -> Result<u32> {
    raw.parse()
        .map_err(|_| ClinicError::InvalidInput(format!("Invalid {} id: {}", field, raw)))
}

fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last).trim().to_string()
}
