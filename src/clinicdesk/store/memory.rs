use super::{Collection, DataStore};
use crate::model::{Appointment, Clinic, Patient, Provider};

/// In-memory storage. Does NOT persist data; everything is gone when the
/// process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    patients: Collection<Patient>,
    providers: Collection<Provider>,
    clinics: Collection<Clinic>,
    appointments: Collection<Appointment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    fn providers(&self) -> &Collection<Provider> {
        &self.providers
    }

    fn clinics(&self) -> &Collection<Clinic> {
        &self.clinics
    }

    fn appointments(&self) -> &Collection<Appointment> {
        &self.appointments
    }

    fn patients_mut(&mut self) -> &mut Collection<Patient> {
        &mut self.patients
    }

    fn providers_mut(&mut self) -> &mut Collection<Provider> {
        &mut self.providers
    }

    fn clinics_mut(&mut self) -> &mut Collection<Clinic> {
        &mut self.clinics
    }

    fn appointments_mut(&mut self) -> &mut Collection<Appointment> {
        &mut self.appointments
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AppointmentStatus, NewAppointment, NewPatient};
    use chrono::NaiveDateTime;

    pub fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_patient(mut self, first: &str, last: &str) -> Self {
            let id = self.store.patients.allocate_id().unwrap();
            self.store
                .patients
                .append(Patient::from_new(id, NewPatient::new(first, last)));
            self
        }

        pub fn with_provider(mut self, first: &str, last: &str, specialty: &str) -> Self {
            let id = self.store.providers.allocate_id().unwrap();
            self.store.providers.append(Provider {
                provider_id: id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                specialty: specialty.to_string(),
            });
            self
        }

        pub fn with_clinic(mut self, name: &str) -> Self {
            let id = self.store.clinics.allocate_id().unwrap();
            self.store.clinics.append(Clinic {
                clinic_id: id,
                clinic_name: name.to_string(),
            });
            self
        }

        /// Appointment for patient/provider/clinic 1, starting at `start` (`YYYY-MM-DDTHH:MM:SS`).
        pub fn with_appointment(self, start: &str, reason: &str) -> Self {
            self.with_appointment_for(start, reason, 1, 1, 1, AppointmentStatus::Scheduled)
        }

        pub fn with_appointment_for(
            mut self,
            start: &str,
            reason: &str,
            patient_id: u32,
            provider_id: u32,
            clinic_id: u32,
            status: AppointmentStatus,
        ) -> Self {
            let id = self.store.appointments.allocate_id().unwrap();
            let new = NewAppointment::new(at(start), patient_id, provider_id, clinic_id, reason)
                .with_status(status);
            self.store.appointments.append(Appointment::from_new(id, new));
            self
        }
    }
}
