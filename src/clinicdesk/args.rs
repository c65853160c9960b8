use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clinicdesk::model::{AppointmentId, PatientId};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clinicdesk", version)]
#[command(about = "Clinic scheduling desk: patients, providers and appointments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON snapshot to bulk-load before running the command
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard counters (default)
    #[command(alias = "d")]
    Dashboard,

    /// List appointments, newest first
    #[command(alias = "ls")]
    Appointments {
        /// Status filter: all, scheduled, cancelled, completed
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Only appointments starting today
        #[arg(long)]
        today_only: bool,
    },

    /// List patients
    #[command(alias = "p")]
    Patients {
        /// Only rows containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List providers
    Providers,

    /// List clinics
    Clinics,

    /// Add a patient by full name (first word is the first name)
    #[command(alias = "n")]
    AddPatient {
        /// Full name of the patient
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<NaiveDate>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Schedule an appointment (every field is required)
    #[command(alias = "s")]
    Schedule {
        /// Patient id
        #[arg(long)]
        patient: Option<String>,

        /// Provider id
        #[arg(long)]
        provider: Option<String>,

        /// Clinic id
        #[arg(long)]
        clinic: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Reason for the visit
        #[arg(long)]
        reason: Option<String>,
    },

    /// Cancel an appointment
    Cancel { id: AppointmentId },

    /// Show one appointment
    ShowAppointment { id: AppointmentId },

    /// Show one patient
    ShowPatient { id: PatientId },

    /// Read commands from stdin against a single in-memory session
    Shell,
}
