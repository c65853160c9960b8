use clinicdesk::error::Result;
use clinicdesk::model::AppointmentStatus;
use clinicdesk::views::appointments::AppointmentRow;
use clinicdesk::views::dashboard::DashboardCounts;
use clinicdesk::views::lookup::{AppointmentDetail, PatientDetail, SelectOption};
use clinicdesk::views::patients::PatientRow;
use colored::*;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_dashboard(counts: &DashboardCounts) {
    let lines = [
        ("Total patients", counts.total_patients),
        ("Total providers", counts.total_providers),
        ("Today's appointments", counts.todays_appointments),
        ("Pending appointments", counts.pending_appointments),
    ];
    for (label, value) in lines {
        println!("{} {}", cell(label, LABEL_WIDTH).bold(), value);
    }
}

const LABEL_WIDTH: usize = 22;
const DATE_WIDTH: usize = 28;
const NAME_WIDTH: usize = 22;
const CLINIC_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 10;
const ID_WIDTH: usize = 5;

pub fn print_appointments(rows: &[AppointmentRow]) {
    println!(
        "{}",
        format!(
            "{}{}{}{}{}{}",
            cell("ID", ID_WIDTH),
            cell("Date & Time", DATE_WIDTH),
            cell("Patient", NAME_WIDTH),
            cell("Provider", NAME_WIDTH),
            cell("Clinic", CLINIC_WIDTH),
            "Status"
        )
        .bold()
    );
    for row in rows {
        let status = cell(row.status.as_str(), STATUS_WIDTH);
        let status = match row.status {
            AppointmentStatus::Scheduled => status.green(),
            AppointmentStatus::Cancelled => status.red(),
            AppointmentStatus::Completed => status.dimmed(),
        };
        println!(
            "{}{}{}{}{}{}",
            cell(&row.appointment_id.to_string(), ID_WIDTH).yellow(),
            cell(&row.formatted_start(), DATE_WIDTH),
            cell(&row.patient_label, NAME_WIDTH),
            cell(&row.provider_label, NAME_WIDTH),
            cell(&row.clinic_label, CLINIC_WIDTH),
            status
        );
    }
}

pub fn print_patients(rows: &[PatientRow]) {
    println!(
        "{}",
        format!(
            "{}{}{}{}{}",
            cell("ID", ID_WIDTH),
            cell("Name", NAME_WIDTH),
            cell("DOB", 14),
            cell("Phone", 16),
            "Email"
        )
        .bold()
    );
    for row in rows {
        println!(
            "{}{}{}{}{}",
            cell(&row.patient_id.to_string(), ID_WIDTH).yellow(),
            cell(&row.full_name, NAME_WIDTH),
            cell(&row.dob, 14),
            cell(&row.phone, 16),
            row.email
        );
    }
}

/// The text a user sees for a patient row; patient search matches against it.
pub fn patient_row_text(row: &PatientRow) -> String {
    format!(
        "{} {} {} {} {}",
        row.patient_id, row.full_name, row.dob, row.phone, row.email
    )
}

pub fn print_options(options: &[SelectOption]) {
    for option in options {
        println!(
            "{}{}",
            cell(&option.value.to_string(), ID_WIDTH).yellow(),
            option.label
        );
    }
}

pub fn print_appointment_detail(detail: &AppointmentDetail) {
    println!("{}", "Appointment Details:".bold());
    println!("ID: {}", detail.appointment_id);
    println!("Reason: {}", detail.reason);
    println!("Status: {}", detail.status);
}

pub fn print_patient_detail(detail: &PatientDetail) {
    println!("{}", "Patient Details:".bold());
    println!("Name: {}", detail.name);
    println!("DOB: {}", detail.dob);
    println!("Phone: {}", detail.phone);
    println!("Email: {}", detail.email);
}

/// Truncates to `width - 1` columns (marking the cut with `…`) and pads to `width`.
fn cell(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
