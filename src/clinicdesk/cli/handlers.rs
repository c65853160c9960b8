use super::print::{self, Message};
use super::ViewOptions;
use crate::args::Commands;
use chrono::NaiveDate;
use clinicdesk::envelope::Envelope;
use clinicdesk::error::{ClinicError, Result};
use clinicdesk::gateway::MockGateway;
use clinicdesk::model::{AppointmentForm, AppointmentId, NewPatient, PatientId};
use clinicdesk::store::DataStore;
use clinicdesk::views::appointments::{AppointmentFilter, StatusFilter};
use clinicdesk::views::{appointments, dashboard, lookup, patients, Listing};

pub async fn dispatch<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    command: Option<Commands>,
) -> Result<()> {
    match command {
        None | Some(Commands::Dashboard) => handle_dashboard(gateway, opts).await,
        Some(Commands::Appointments { status, today_only }) => {
            handle_appointments(gateway, opts, &status, today_only).await
        }
        Some(Commands::Patients { search }) => handle_patients(gateway, opts, search).await,
        Some(Commands::Providers) => handle_providers(gateway, opts).await,
        Some(Commands::Clinics) => handle_clinics(gateway, opts).await,
        Some(Commands::AddPatient {
            name,
            dob,
            phone,
            email,
        }) => handle_add_patient(gateway, opts, name.join(" "), dob, phone, email).await,
        Some(Commands::Schedule {
            patient,
            provider,
            clinic,
            date,
            time,
            reason,
        }) => {
            let form = AppointmentForm {
                patient,
                provider,
                clinic,
                date,
                time,
                reason,
            };
            handle_schedule(gateway, opts, form).await
        }
        Some(Commands::Cancel { id }) => handle_cancel(gateway, opts, id).await,
        Some(Commands::ShowAppointment { id }) => handle_show_appointment(gateway, opts, id).await,
        Some(Commands::ShowPatient { id }) => handle_show_patient(gateway, opts, id).await,
        Some(Commands::Shell) => Err(ClinicError::InvalidInput(
            "Already running a shell".to_string(),
        )),
    }
}

async fn handle_dashboard<S: DataStore>(gateway: &MockGateway<S>, opts: &ViewOptions) -> Result<()> {
    let store = gateway.store().await;
    let counts = dashboard::run(&*store, opts.today);
    if opts.json {
        return print::print_json(&counts);
    }
    print::print_dashboard(&counts);
    Ok(())
}

async fn handle_appointments<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    status: &str,
    today_only: bool,
) -> Result<()> {
    let mut filter = AppointmentFilter::default().with_status(status.parse::<StatusFilter>()?);
    if today_only {
        filter = filter.on_day(opts.today);
    }

    let store = gateway.store().await;
    let listing = appointments::run(&*store, filter);
    if opts.json {
        return print::print_json(listing.rows());
    }

    match listing {
        Listing::NoData => print::print_messages(&[Message::info(
            "No appointments found. Schedule one with `clinicdesk schedule`.",
        )]),
        Listing::Rows(rows) if rows.is_empty() => {
            print::print_messages(&[Message::info("No appointments match this filter.")])
        }
        Listing::Rows(rows) => print::print_appointments(&rows),
    }
    Ok(())
}

async fn handle_patients<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    search: Option<String>,
) -> Result<()> {
    let store = gateway.store().await;
    let rows = match patients::run(&*store) {
        Listing::NoData if !opts.json => {
            print::print_messages(&[Message::info(
                "No patients found. Add one with `clinicdesk add-patient`.",
            )]);
            return Ok(());
        }
        listing => listing.rows().to_vec(),
    };

    let rows = match search {
        Some(term) => {
            let term = term.to_lowercase();
            rows.into_iter()
                .filter(|row| print::patient_row_text(row).to_lowercase().contains(&term))
                .collect()
        }
        None => rows,
    };

    if opts.json {
        return print::print_json(&rows);
    }
    if rows.is_empty() {
        print::print_messages(&[Message::info("No patients match this search.")]);
    } else {
        print::print_patients(&rows);
    }
    Ok(())
}

async fn handle_providers<S: DataStore>(gateway: &MockGateway<S>, opts: &ViewOptions) -> Result<()> {
    let store = gateway.store().await;
    let options = lookup::provider_options(&*store);
    print_option_list(opts, &options, "No providers loaded.")
}

async fn handle_clinics<S: DataStore>(gateway: &MockGateway<S>, opts: &ViewOptions) -> Result<()> {
    let store = gateway.store().await;
    let options = lookup::clinic_options(&*store);
    print_option_list(opts, &options, "No clinics loaded.")
}

fn print_option_list(
    opts: &ViewOptions,
    options: &[lookup::SelectOption],
    empty_message: &str,
) -> Result<()> {
    if opts.json {
        return print::print_json(options);
    }
    if options.is_empty() {
        print::print_messages(&[Message::info(empty_message)]);
    } else {
        print::print_options(options);
    }
    Ok(())
}

async fn handle_add_patient<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    name: String,
    dob: Option<NaiveDate>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let mut new = NewPatient::from_full_name(&name);
    new.dob = dob;
    new.phone = phone;
    new.email = email;

    let result = gateway.create_patient(new).await?;
    if opts.json {
        return print::print_json(&result);
    }

    let message = match &result {
        Envelope::Success { data } => Message::success(format!(
            "Patient {} added successfully! (ID: {})",
            data.full_name(),
            data.patient_id
        )),
        Envelope::Failure { message } => {
            Message::error(format!("Failed to add patient: {}", message))
        }
    };
    print::print_messages(&[message]);
    Ok(())
}

async fn handle_schedule<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    form: AppointmentForm,
) -> Result<()> {
    let new = form.validate()?;

    let result = gateway.create_appointment(new).await?;
    if opts.json {
        return print::print_json(&result);
    }

    let message = match &result {
        Envelope::Success { data } => Message::success(format!(
            "Appointment scheduled successfully! (ID: {})",
            data.appointment_id
        )),
        Envelope::Failure { .. } => {
            Message::error("Failed to schedule appointment. Please try again.")
        }
    };
    print::print_messages(&[message]);
    Ok(())
}

async fn handle_cancel<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    id: AppointmentId,
) -> Result<()> {
    let cancelled = gateway.cancel_appointment(id).await;
    if opts.json {
        return print::print_json(&cancelled);
    }

    let message = match cancelled {
        Some(_) => Message::success("Appointment cancelled."),
        None => Message::warning("Appointment not found."),
    };
    print::print_messages(&[message]);
    Ok(())
}

async fn handle_show_appointment<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    id: AppointmentId,
) -> Result<()> {
    let store = gateway.store().await;
    let detail = lookup::appointment_detail(&*store, id);
    if opts.json {
        return print::print_json(&detail);
    }
    match detail {
        Some(detail) => print::print_appointment_detail(&detail),
        None => print::print_messages(&[Message::warning("Appointment not found.")]),
    }
    Ok(())
}

async fn handle_show_patient<S: DataStore>(
    gateway: &MockGateway<S>,
    opts: &ViewOptions,
    id: PatientId,
) -> Result<()> {
    let store = gateway.store().await;
    let detail = lookup::patient_detail(&*store, id);
    if opts.json {
        return print::print_json(&detail);
    }
    match detail {
        Some(detail) => print::print_patient_detail(&detail),
        None => print::print_messages(&[Message::warning("Patient not found.")]),
    }
    Ok(())
}
