//! # Storage Layer
//!
//! The entity store holds the four clinic collections. The [`DataStore`] trait
//! lets the gateway and the views work against any backend; today there is only
//! [`memory::InMemoryStore`].
//!
//! ## Collections
//!
//! Each entity lives in a [`Collection`]: an insertion-ordered `Vec` addressed
//! by identifier through a linear scan. Clinic-sized data never makes the scan
//! worth indexing.
//!
//! ## Identifiers
//!
//! A collection owns a counter that hands out identifiers starting at 1.
//! With no deletions this matches "length + 1", but the counter never goes
//! backwards, so an identifier is never handed out twice. After
//! [`Collection::replace_all`] the counter resumes after the highest loaded id.
//! Once `u32::MAX` is taken the counter is exhausted and
//! [`Collection::allocate_id`] returns `None`.
//!
//! ## Ownership
//!
//! Stores are owned by [`crate::gateway::MockGateway`], which is the only code
//! path that mutates them. Views get a shared borrow.
//!
//! ## Seed Files
//!
//! Providers and clinics only arrive through a bulk load. A [`Snapshot`] is the
//! JSON shape of that load:
//!
//! ```text
//! {
//!   "patients":     [ { "PatientID": 1, "FirstName": "Jane", ... } ],
//!   "providers":    [ { "ProviderID": 1, "Specialty": "Cardiology", ... } ],
//!   "clinics":      [ { "ClinicID": 1, "ClinicName": "Downtown" } ],
//!   "appointments": [ { "AppointmentID": 1, "StartDateTime": "2024-06-01T09:00:00", ... } ]
//! }
//! ```

use crate::error::Result;
use crate::model::{Appointment, Clinic, Patient, Provider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod memory;

/// A stored entity with an integer identifier.
pub trait Record: Clone {
    fn id(&self) -> u32;
}

impl Record for Patient {
    fn id(&self) -> u32 {
        self.patient_id
    }
}

impl Record for Provider {
    fn id(&self) -> u32 {
        self.provider_id
    }
}

impl Record for Clinic {
    fn id(&self) -> u32 {
        self.clinic_id
    }
}

impl Record for Appointment {
    fn id(&self) -> u32 {
        self.appointment_id
    }
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    /// `None` once `u32::MAX` has been handed out or loaded.
    next_id: Option<u32>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(1),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Appends without checking for identifier collisions.
    pub fn append(&mut self, record: T) {
        self.advance_past(record.id());
        self.records.push(record);
    }

    pub fn replace_all(&mut self, records: Vec<T>) {
        self.next_id = Some(1);
        for record in &records {
            self.advance_past(record.id());
        }
        self.records = records;
    }

    /// The next unused identifier, or `None` when the identifier space is exhausted.
    pub fn allocate_id(&mut self) -> Option<u32> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    fn advance_past(&mut self, id: u32) {
        if let Some(next) = self.next_id {
            if id >= next {
                self.next_id = id.checked_add(1);
            }
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Abstract interface for the four entity collections.
pub trait DataStore {
    fn patients(&self) -> &Collection<Patient>;
    fn providers(&self) -> &Collection<Provider>;
    fn clinics(&self) -> &Collection<Clinic>;
    fn appointments(&self) -> &Collection<Appointment>;

    fn patients_mut(&mut self) -> &mut Collection<Patient>;
    fn providers_mut(&mut self) -> &mut Collection<Provider>;
    fn clinics_mut(&mut self) -> &mut Collection<Clinic>;
    fn appointments_mut(&mut self) -> &mut Collection<Appointment>;

    /// Bulk load: every collection is replaced, nothing is merged.
    fn load(&mut self, snapshot: Snapshot) {
        self.patients_mut().replace_all(snapshot.patients);
        self.providers_mut().replace_all(snapshot.providers);
        self.clinics_mut().replace_all(snapshot.clinics);
        self.appointments_mut().replace_all(snapshot.appointments);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            patients: self.patients().records().to_vec(),
            providers: self.providers().records().to_vec(),
            clinics: self.clinics().records().to_vec(),
            appointments: self.appointments().records().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub clinics: Vec<Clinic>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Snapshot {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            patients = snapshot.patients.len(),
            providers = snapshot.providers.len(),
            clinics = snapshot.clinics.len(),
            appointments = snapshot.appointments.len(),
            "Read seed file"
        );
        Ok(snapshot)
    }
}
