//! Foreign-key joins and single-record views.
//!
//! Every lookup here is a linear scan through [`Collection::find_by_id`]; a
//! miss is never an error, it becomes a placeholder or `None`.
//!
//! [`Collection::find_by_id`]: crate::store::Collection::find_by_id

use super::{format_dob, or_not_available, NOT_AVAILABLE, UNKNOWN};
use crate::model::{AppointmentId, AppointmentStatus, ClinicId, PatientId, ProviderId};
use crate::store::DataStore;
use serde::Serialize;

pub fn patient_label<S: DataStore>(store: &S, id: PatientId) -> String {
    store
        .patients()
        .find_by_id(id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn provider_label<S: DataStore>(store: &S, id: ProviderId) -> String {
    store
        .providers()
        .find_by_id(id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn clinic_label<S: DataStore>(store: &S, id: ClinicId) -> String {
    store
        .clinics()
        .find_by_id(id)
        .map(|c| c.clinic_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// A selectable entry for a scheduling form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: u32,
    pub label: String,
}

/// `Jane Doe (ID: 1)`
pub fn patient_options<S: DataStore>(store: &S) -> Vec<SelectOption> {
    store
        .patients()
        .iter()
        .map(|p| SelectOption {
            value: p.patient_id,
            label: format!("{} {} (ID: {})", p.first_name, p.last_name, p.patient_id),
        })
        .collect()
}

/// `Gregory House - Diagnostics`
pub fn provider_options<S: DataStore>(store: &S) -> Vec<SelectOption> {
    store
        .providers()
        .iter()
        .map(|p| SelectOption {
            value: p.provider_id,
            label: format!("{} {} - {}", p.first_name, p.last_name, p.specialty),
        })
        .collect()
}

pub fn clinic_options<S: DataStore>(store: &S) -> Vec<SelectOption> {
    store
        .clinics()
        .iter()
        .map(|c| SelectOption {
            value: c.clinic_id,
            label: c.clinic_name.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentDetail {
    pub appointment_id: AppointmentId,
    pub reason: String,
    pub status: AppointmentStatus,
}

pub fn appointment_detail<S: DataStore>(store: &S, id: AppointmentId) -> Option<AppointmentDetail> {
    store
        .appointments()
        .find_by_id(id)
        .map(|a| AppointmentDetail {
            appointment_id: a.appointment_id,
            reason: a.reason.clone(),
            status: a.status,
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientDetail {
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
}

pub fn patient_detail<S: DataStore>(store: &S, id: PatientId) -> Option<PatientDetail> {
    store.patients().find_by_id(id).map(|p| PatientDetail {
        name: p.full_name(),
        dob: format_dob(p.dob.as_ref()),
        phone: or_not_available(p.phone.as_deref()),
        email: or_not_available(p.email.as_deref()),
    })
}
