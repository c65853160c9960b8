use chrono::{NaiveDate, NaiveDateTime};
use clinicdesk::config::ClinicConfig;
use clinicdesk::gateway::MockGateway;
use clinicdesk::model::{
    AppointmentForm, AppointmentStatus, Clinic, NewAppointment, NewPatient, Provider,
};
use clinicdesk::store::memory::InMemoryStore;
use clinicdesk::store::{DataStore, Snapshot};
use clinicdesk::views::appointments::{AppointmentFilter, StatusFilter};
use clinicdesk::views::{appointments, dashboard, lookup, patients};
use std::time::Duration;

fn gateway() -> MockGateway {
    MockGateway::in_memory().with_latency(Duration::ZERO)
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn reference_data() -> Snapshot {
    Snapshot {
        providers: vec![Provider {
            provider_id: 1,
            first_name: "Gregory".into(),
            last_name: "House".into(),
            specialty: "Diagnostics".into(),
        }],
        clinics: vec![Clinic {
            clinic_id: 1,
            clinic_name: "Downtown".into(),
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn front_desk_day() {
    let gw = gateway();
    gw.load(reference_data()).await;

    let jane = gw
        .create_patient(NewPatient::new("Jane", "Doe"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(jane.patient_id, 1);

    let form = AppointmentForm {
        patient: Some(jane.patient_id.to_string()),
        provider: Some("1".into()),
        clinic: Some("1".into()),
        date: Some("2024-06-01".into()),
        time: Some("14:00".into()),
        reason: Some("Checkup".into()),
    };
    let appt = gw
        .create_appointment(form.validate().unwrap())
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(appt.appointment_id, 1);
    assert_eq!(appt.status, AppointmentStatus::Scheduled);

    {
        let store = gw.store().await;
        let counts = dashboard::run(&*store, june(1));
        assert_eq!(counts.total_patients, 1);
        assert_eq!(counts.total_providers, 1);
        assert_eq!(counts.todays_appointments, 1);
        assert_eq!(counts.pending_appointments, 1);

        let listing = appointments::run(&*store, AppointmentFilter::default());
        let row = &listing.rows()[0];
        assert_eq!(row.patient_label, "Jane Doe");
        assert_eq!(row.provider_label, "Gregory House");
        assert_eq!(row.clinic_label, "Downtown");
        assert_eq!(row.formatted_start(), "Sat, Jun 1, 2024, 02:00 PM");
    }

    gw.cancel_appointment(appt.appointment_id).await.unwrap();

    let store = gw.store().await;
    let counts = dashboard::run(&*store, june(1));
    assert_eq!(counts.todays_appointments, 1);
    assert_eq!(counts.pending_appointments, 0);

    let scheduled = appointments::run(
        &*store,
        AppointmentFilter::default().with_status(StatusFilter::Only(AppointmentStatus::Scheduled)),
    );
    assert!(scheduled.rows().is_empty());
    assert!(!scheduled.is_no_data());
}

#[tokio::test]
async fn appointment_for_unknown_patient_is_stored_and_shown_as_unknown() {
    let gw = gateway();
    gw.load(reference_data()).await;

    let appt = gw
        .create_appointment(NewAppointment::new(at("2024-06-03T09:30:00"), 42, 1, 1, "Walk-in"))
        .await
        .unwrap();
    assert!(appt.is_success());

    let store = gw.store().await;
    let listing = appointments::run(&*store, AppointmentFilter::default());
    assert_eq!(listing.rows()[0].patient_label, "Unknown");
    assert!(lookup::patient_detail(&*store, 42).is_none());
}

#[tokio::test]
async fn seeded_ids_continue_after_the_highest_loaded() {
    let gw = gateway();
    let snapshot: Snapshot = serde_json::from_str(
        r#"{
            "patients": [
                { "PatientID": 3, "FirstName": "Ann", "LastName": "Lee" },
                { "PatientID": 7, "FirstName": "Bo", "LastName": "Chen" }
            ]
        }"#,
    )
    .unwrap();
    gw.load(snapshot).await;

    let created = gw
        .create_patient(NewPatient::from_full_name("Cy Twombly"))
        .await
        .unwrap();
    assert_eq!(created.data().map(|p| p.patient_id), Some(8));

    let store = gw.store().await;
    let ids: Vec<_> = patients::run(&*store)
        .rows()
        .iter()
        .map(|r| r.patient_id)
        .collect();
    assert_eq!(ids, vec![3, 7, 8]);
}

#[tokio::test]
async fn reads_come_back_in_success_envelopes() {
    let gw = gateway();
    gw.load(reference_data()).await;

    assert!(gw.get_patients().await.unwrap().is_empty());
    assert_eq!(gw.get_providers().await.unwrap().len(), 1);
    assert_eq!(gw.get_clinics().await.unwrap()[0].clinic_name, "Downtown");
    assert!(gw.get_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn disabled_mock_rejects_every_call() {
    let config = ClinicConfig {
        use_mock_data: false,
        ..ClinicConfig::default()
    };
    let gw = MockGateway::new(InMemoryStore::new(), config);

    assert!(gw.get_patients().await.is_err());
    assert!(gw
        .create_patient(NewPatient::new("Jane", "Doe"))
        .await
        .is_err());
    assert!(gw.store().await.patients().is_empty());
}
