//! The `{success, data | message}` wrapper every gateway call answers with.
//!
//! A failed envelope is a soft failure: the operation was understood but not
//! served (e.g. an unsupported endpoint). Faults that should stop the caller
//! travel as `Err(ClinicError)` instead.

use serde::ser::{Serialize, SerializeStruct, Serializer};

pub const NOT_IMPLEMENTED_MESSAGE: &str = "Mock endpoint not implemented";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    Success { data: T },
    Failure { message: String },
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Envelope::Failure {
            message: message.into(),
        }
    }

    pub fn not_implemented() -> Self {
        Self::failure(NOT_IMPLEMENTED_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success { data } => Some(data),
            Envelope::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Failure { message } => Some(message),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Envelope::Success { data } => Ok(data),
            Envelope::Failure { message } => Err(message),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Envelope::Failure { message } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("message", message)?;
            }
        }
        state.end()
    }
}
