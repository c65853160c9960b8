//! # Mock Data Gateway
//!
//! The gateway stands in for the clinic's REST API. It is the single entry
//! point for reading and writing clinic data, regardless of the UI being used.
//!
//! ## Contract
//!
//! - `invoke(kind, operation)` is asynchronous. Every call suspends for the
//!   configured latency before touching the store, modelling a network round
//!   trip. The mock never fails and never times out.
//! - Answers come back as an [`Envelope`]. An unsupported combination of
//!   resource and operation is a `Failure` envelope, not an `Err`.
//! - Identifiers are assigned here, inside the store, never by the caller.
//!
//! ## Ownership
//!
//! `MockGateway<S: DataStore>` owns its store behind a [`tokio::sync::RwLock`].
//! Identifier allocation and append happen under one write guard, so two
//! creates issued back to back (or joined) never share an identifier. Views
//! borrow the store through [`MockGateway::store`]; nothing outside the
//! gateway can mutate it.
//!
//! | Resource | read | create |
//! |----------|------|--------|
//! | patients | yes | yes |
//! | providers | yes | no |
//! | clinics | yes | no |
//! | appointments | yes | yes |

use crate::config::ClinicConfig;
use crate::envelope::Envelope;
use crate::error::{ClinicError, Result};
use crate::model::{
    Appointment, AppointmentId, AppointmentStatus, Clinic, NewAppointment, NewPatient, Patient,
    Provider, ResourceKind,
};
use crate::store::memory::InMemoryStore;
use crate::store::{DataStore, Snapshot};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::{RwLock, RwLockReadGuard};

pub const IDS_EXHAUSTED_MESSAGE: &str = "No identifiers left for";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create(Payload),
}

impl Operation {
    pub fn method(&self) -> &'static str {
        match self {
            Operation::Read => "GET",
            Operation::Create(_) => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Patient(NewPatient),
    Appointment(NewAppointment),
}

/// Data carried by a successful envelope. Serializes as the bare collection or record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Patients(Vec<Patient>),
    Providers(Vec<Provider>),
    Clinics(Vec<Clinic>),
    Appointments(Vec<Appointment>),
    Patient(Patient),
    Appointment(Appointment),
}

pub struct MockGateway<S: DataStore = InMemoryStore> {
    store: RwLock<S>,
    config: ClinicConfig,
    latency: Duration,
}

impl MockGateway<InMemoryStore> {
    /// An empty in-memory gateway with default configuration.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new(), ClinicConfig::default())
    }
}

impl<S: DataStore> MockGateway<S> {
    pub fn new(store: S, config: ClinicConfig) -> Self {
        let latency = config.latency();
        Self {
            store: RwLock::new(store),
            config,
            latency,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Read-only access to the current store, for view derivation.
    pub async fn store(&self) -> RwLockReadGuard<'_, S> {
        self.store.read().await
    }

    pub async fn invoke(&self, kind: ResourceKind, operation: Operation) -> Result<Envelope<Resource>> {
        let method = operation.method();
        let url = self.config.endpoint_url(kind);
        tracing::debug!(method, url = %url, "API call");

        if !self.config.use_mock_data {
            return Err(ClinicError::Api(
                "API not configured. Set use_mock_data to true or connect a real backend.".into(),
            ));
        }

        tokio::time::sleep(self.latency).await;

        let envelope = match operation {
            Operation::Read => {
                let store = self.store.read().await;
                Envelope::success(read(&*store, kind))
            }
            Operation::Create(payload) => {
                let mut store = self.store.write().await;
                create(&mut *store, kind, payload)
            }
        };

        if let Some(message) = envelope.message() {
            tracing::warn!(method, resource = %kind, message, "Mock endpoint refused call");
        }
        Ok(envelope)
    }

    pub async fn get_patients(&self) -> Result<Vec<Patient>> {
        match self.read_ok(ResourceKind::Patients).await? {
            Resource::Patients(records) => Ok(records),
            other => Err(unexpected(ResourceKind::Patients, &other)),
        }
    }

    pub async fn get_providers(&self) -> Result<Vec<Provider>> {
        match self.read_ok(ResourceKind::Providers).await? {
            Resource::Providers(records) => Ok(records),
            other => Err(unexpected(ResourceKind::Providers, &other)),
        }
    }

    pub async fn get_clinics(&self) -> Result<Vec<Clinic>> {
        match self.read_ok(ResourceKind::Clinics).await? {
            Resource::Clinics(records) => Ok(records),
            other => Err(unexpected(ResourceKind::Clinics, &other)),
        }
    }

    pub async fn get_appointments(&self) -> Result<Vec<Appointment>> {
        match self.read_ok(ResourceKind::Appointments).await? {
            Resource::Appointments(records) => Ok(records),
            other => Err(unexpected(ResourceKind::Appointments, &other)),
        }
    }

    pub async fn create_patient(&self, new: NewPatient) -> Result<Envelope<Patient>> {
        let envelope = self
            .invoke(
                ResourceKind::Patients,
                Operation::Create(Payload::Patient(new)),
            )
            .await?;
        match envelope {
            Envelope::Success {
                data: Resource::Patient(patient),
            } => Ok(Envelope::success(patient)),
            Envelope::Success { data } => Err(unexpected(ResourceKind::Patients, &data)),
            Envelope::Failure { message } => Ok(Envelope::Failure { message }),
        }
    }

    pub async fn create_appointment(&self, new: NewAppointment) -> Result<Envelope<Appointment>> {
        let envelope = self
            .invoke(
                ResourceKind::Appointments,
                Operation::Create(Payload::Appointment(new)),
            )
            .await?;
        match envelope {
            Envelope::Success {
                data: Resource::Appointment(appointment),
            } => Ok(Envelope::success(appointment)),
            Envelope::Success { data } => Err(unexpected(ResourceKind::Appointments, &data)),
            Envelope::Failure { message } => Ok(Envelope::Failure { message }),
        }
    }

    /// Marks an appointment cancelled. Cancelling twice is harmless; an unknown
    /// id is a no-op and yields `None`.
    pub async fn cancel_appointment(&self, id: AppointmentId) -> Option<Appointment> {
        let mut store = self.store.write().await;
        match store.appointments_mut().find_by_id_mut(id) {
            Some(appointment) => {
                appointment.status = AppointmentStatus::Cancelled;
                tracing::info!(appointment_id = id, "Cancelled appointment");
                Some(appointment.clone())
            }
            None => {
                tracing::debug!(appointment_id = id, "Cancel ignored, no such appointment");
                None
            }
        }
    }

    /// Bulk load: every collection is replaced by the snapshot's contents.
    pub async fn load(&self, snapshot: Snapshot) {
        let mut store = self.store.write().await;
        tracing::info!(
            patients = snapshot.patients.len(),
            providers = snapshot.providers.len(),
            clinics = snapshot.clinics.len(),
            appointments = snapshot.appointments.len(),
            "Loading clinic data"
        );
        store.load(snapshot);
    }

    async fn read_ok(&self, kind: ResourceKind) -> Result<Resource> {
        self.invoke(kind, Operation::Read)
            .await?
            .into_result()
            .map_err(ClinicError::Api)
    }
}

fn read<S: DataStore>(store: &S, kind: ResourceKind) -> Resource {
    match kind {
        ResourceKind::Patients => Resource::Patients(store.patients().records().to_vec()),
        ResourceKind::Providers => Resource::Providers(store.providers().records().to_vec()),
        ResourceKind::Clinics => Resource::Clinics(store.clinics().records().to_vec()),
        ResourceKind::Appointments => {
            Resource::Appointments(store.appointments().records().to_vec())
        }
    }
}

fn create<S: DataStore>(store: &mut S, kind: ResourceKind, payload: Payload) -> Envelope<Resource> {
    match (kind, payload) {
        (ResourceKind::Patients, Payload::Patient(new)) => {
            let patients = store.patients_mut();
            let Some(id) = patients.allocate_id() else {
                return Envelope::failure(format!("{} {}", IDS_EXHAUSTED_MESSAGE, kind));
            };
            let patient = Patient::from_new(id, new);
            patients.append(patient.clone());
            tracing::info!(patient_id = patient.patient_id, "Created patient");
            Envelope::success(Resource::Patient(patient))
        }
        (ResourceKind::Appointments, Payload::Appointment(new)) => {
            let appointments = store.appointments_mut();
            let Some(id) = appointments.allocate_id() else {
                return Envelope::failure(format!("{} {}", IDS_EXHAUSTED_MESSAGE, kind));
            };
            let appointment = Appointment::from_new(id, new);
            appointments.append(appointment.clone());
            tracing::info!(
                appointment_id = appointment.appointment_id,
                status = %appointment.status,
                "Created appointment"
            );
            Envelope::success(Resource::Appointment(appointment))
        }
        _ => Envelope::not_implemented(),
    }
}

fn unexpected(kind: ResourceKind, data: &Resource) -> ClinicError {
    ClinicError::Api(format!("Unexpected response from {}: {:?}", kind, data))
}
