use super::{format_dob, or_not_available, Listing};
use crate::model::PatientId;
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRow {
    pub patient_id: PatientId,
    pub full_name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
}

/// All patients in store order. No filtering happens here.
pub fn run<S: DataStore>(store: &S) -> Listing<PatientRow> {
    let patients = store.patients();
    if patients.is_empty() {
        return Listing::NoData;
    }

    Listing::Rows(
        patients
            .iter()
            .map(|p| PatientRow {
                patient_id: p.patient_id,
                full_name: p.full_name(),
                dob: format_dob(p.dob.as_ref()),
                phone: or_not_available(p.phone.as_deref()),
                email: or_not_available(p.email.as_deref()),
            })
            .collect(),
    )
}
