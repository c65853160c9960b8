use crate::model::AppointmentStatus;
use crate::store::DataStore;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub total_patients: usize,
    pub total_providers: usize,
    /// Appointments starting on `today`, whatever their status.
    pub todays_appointments: usize,
    /// Appointments still `scheduled`.
    pub pending_appointments: usize,
}

pub fn run<S: DataStore>(store: &S, today: NaiveDate) -> DashboardCounts {
    let appointments = store.appointments();
    DashboardCounts {
        total_patients: store.patients().len(),
        total_providers: store.providers().len(),
        todays_appointments: appointments.iter().filter(|a| a.starts_on(today)).count(),
        pending_appointments: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count(),
    }
}
