#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SEED: &str = r#"{
  "patients": [
    { "PatientID": 1, "FirstName": "Jane", "LastName": "Doe", "DOB": "1990-03-14", "Phone": "555-0100" }
  ],
  "providers": [
    { "ProviderID": 1, "FirstName": "Gregory", "LastName": "House", "Specialty": "Diagnostics" }
  ],
  "clinics": [
    { "ClinicID": 1, "ClinicName": "Downtown" }
  ],
  "appointments": [
    { "AppointmentID": 1, "StartDateTime": "2024-06-01T09:00:00", "PatientID": 1, "ProviderID": 1, "ClinicID": 1, "Reason": "Checkup", "Status": "scheduled" },
    { "AppointmentID": 2, "StartDateTime": "2024-06-02T10:00:00", "PatientID": 1, "ProviderID": 1, "ClinicID": 1, "Reason": "Follow-up", "Status": "cancelled" },
    { "AppointmentID": 3, "StartDateTime": "2024-05-30T08:00:00", "PatientID": 9, "ProviderID": 1, "ClinicID": 1, "Reason": "Walk-in", "Status": "scheduled" }
  ]
}"#;

/// A command isolated from the user's config, with no simulated latency.
fn clinicdesk_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("clinicdesk"));
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("CLINICDESK_LATENCY_MS", "0")
        .env("NO_COLOR", "1")
        .env_remove("CLINICDESK_SEED_FILE")
        .env_remove("CLINICDESK_USE_MOCK_DATA");
    cmd
}

fn write_seed(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("seed.json");
    fs::write(&path, SEED).unwrap();
    path
}

#[test]
fn test_dashboard_counts_seeded_data() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Total patients\s+1").unwrap())
        .stdout(predicate::str::is_match(r"Total providers\s+1").unwrap())
        .stdout(predicate::str::is_match(r"Today's appointments\s+1").unwrap())
        .stdout(predicate::str::is_match(r"Pending appointments\s+2").unwrap());
}

#[test]
fn test_dashboard_json() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    let output = clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["--today", "2024-06-02", "--json", "dashboard"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let counts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(counts["total_patients"], 1);
    assert_eq!(counts["todays_appointments"], 1);
    assert_eq!(counts["pending_appointments"], 2);
}

#[test]
fn test_appointments_newest_first_with_placeholders() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    let output = clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .arg("appointments")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let follow_up = stdout.find("Sun, Jun 2, 2024").unwrap();
    let checkup = stdout.find("Sat, Jun 1, 2024").unwrap();
    let walk_in = stdout.find("Thu, May 30, 2024").unwrap();
    assert!(follow_up < checkup && checkup < walk_in);
    assert!(stdout.contains("Unknown"));
    assert!(stdout.contains("Gregory House"));
}

#[test]
fn test_appointments_status_filter() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["appointments", "--status", "cancelled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jun 2, 2024"))
        .stdout(predicate::str::contains("Jun 1, 2024").not());

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["appointments", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments match"));

    clinicdesk_cmd(&temp)
        .args(["appointments", "--status", "pending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_empty_store_shows_hints() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .arg("appointments")
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments found"));

    clinicdesk_cmd(&temp)
        .arg("patients")
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients found"));

    clinicdesk_cmd(&temp)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers loaded"));
}

#[test]
fn test_add_patient_gets_next_id() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .args(["add-patient", "Jane", "Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patient Jane Doe added successfully! (ID: 1)",
        ));

    let seed = write_seed(&temp);
    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["--json", "add-patient", "Mary", "Ann", "Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": true"#))
        .stdout(predicate::str::contains(r#""PatientID": 2"#))
        .stdout(predicate::str::contains(r#""LastName": "Ann Smith""#));
}

#[test]
fn test_patients_search() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["patients", "--search", "555-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Mar 14, 1990"));

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["patients", "--search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients match"));
}

#[test]
fn test_schedule_requires_every_field() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .args([
            "schedule",
            "--patient",
            "1",
            "--provider",
            "1",
            "--date",
            "2024-06-03",
            "--time",
            "09:30",
            "--reason",
            "Checkup",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all fields"));
}

#[test]
fn test_disabled_mock_fails_writes() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .env("CLINICDESK_USE_MOCK_DATA", "false")
        .args(["add-patient", "Jane", "Doe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API not configured"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_file_points_at_seed() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);
    let config = temp.path().join("clinicdesk.toml");
    fs::write(
        &config,
        format!("seed_file = {:?}\nlatency_ms = 0\n", seed.to_str().unwrap()),
    )
    .unwrap();

    clinicdesk_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("clinics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown"));
}

#[test]
fn test_shell_session_keeps_state() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    let script = r#"
# a comment
add-patient Ada Lovelace --phone 555-0199
schedule --patient 42 --provider 1 --clinic 1 --date 2024-06-03 --time 09:30 --reason "Annual checkup"
appointments --status scheduled
cancel 4
show-appointment 4
show-patient 2
cancel 99
exit
dashboard
"#;

    let output = clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .arg("shell")
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Patient Ada Lovelace added successfully! (ID: 2)"));
    assert!(stdout.contains("Appointment scheduled successfully! (ID: 4)"));
    assert!(stdout.contains("Mon, Jun 3, 2024, 09:30 AM"));
    assert!(stdout.contains("Appointment cancelled."));
    assert!(stdout.contains("Reason: Annual checkup"));
    assert!(stdout.contains("Status: cancelled"));
    assert!(stdout.contains("Name: Ada Lovelace"));
    assert!(stdout.contains("Email: N/A"));
    assert!(stdout.contains("Appointment not found."));
    // Nothing after `exit` runs.
    assert!(!stdout.contains("Total patients"));
}

#[test]
fn test_shell_reports_bad_lines_and_continues() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .arg("shell")
        .write_stdin("frobnicate\nadd-patient \"Jane\nshell\nadd-patient Jane Doe\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unterminated quote"))
        .stderr(predicate::str::contains("Already running a shell"))
        .stdout(predicate::str::contains("(ID: 1)"));
}

#[test]
fn test_shell_survives_undecodable_input() {
    let temp = TempDir::new().unwrap();

    clinicdesk_cmd(&temp)
        .arg("shell")
        .write_stdin(b"\xff\nadd-patient Jane Doe\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patient Jane Doe added successfully! (ID: 1)",
        ));
}

#[test]
fn test_shell_keeps_escaped_quotes() {
    let temp = TempDir::new().unwrap();
    let seed = write_seed(&temp);

    let script = r#"schedule --patient 1 --provider 1 --clinic 1 --date 2024-06-03 --time 09:30 --reason "say \"hi\""
show-appointment 4
"#;

    clinicdesk_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Reason: say "hi""#));
}
