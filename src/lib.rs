#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod escalation;
pub mod menu;
pub mod wheel;

use serde::{Deserialize, Serialize};

pub use app::{App, Event, Model, ViewModel};
pub use capabilities::{Capabilities, Effect};
pub use crux_core::App as CruxApp;

/// How long the shell should take to animate a spin, in milliseconds.
pub const SPIN_DURATION_MS: u64 = 4000;

/// Wheel rotation per spin, in full turns: uniform in `[MIN, MAX)`.
pub const WHEEL_MIN_TURNS: f64 = 4.0;
pub const WHEEL_MAX_TURNS: f64 = 7.0;

pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Longest label that still fits legibly on a wheel segment.
pub const MAX_LABEL_LENGTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Storage,
    Serialization,
    Deserialization,
    Validation,
    InvalidState,
    Internal,
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Storage => "STORAGE_ERROR",
            Self::Serialization => "SERIALIZATION_ERROR",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::InvalidState => "INVALID_STATE",
            Self::Internal => "INTERNAL_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Storage => ErrorSeverity::Transient,
            Self::Serialization | Self::Deserialization | Self::InvalidState | Self::Internal => {
                ErrorSeverity::Fatal
            }
            Self::Validation | Self::Unknown => ErrorSeverity::Permanent,
        }
    }

    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Storage)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    pub internal_message: Option<String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            internal_message: None,
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable() && !matches!(self.severity, ErrorSeverity::Fatal)
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Storage => {
                "Unable to save your lists right now. Please try again.".into()
            }
            ErrorKind::Serialization | ErrorKind::Deserialization => {
                "A data error occurred. Please contact support if this persists.".into()
            }
            ErrorKind::Validation => self.message.clone(),
            ErrorKind::InvalidState => {
                "The app is in an invalid state. Please restart the app.".into()
            }
            ErrorKind::Internal | ErrorKind::Unknown => {
                "An unexpected error occurred. Please try again.".into()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(internal) = &self.internal_message {
            write!(f, " (internal: {internal})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<crux_kv::error::KeyValueError> for AppError {
    fn from(e: crux_kv::error::KeyValueError) -> Self {
        Self::new(ErrorKind::Storage, "Storage operation failed").with_internal(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        let kind = if e.is_data() || e.is_eof() {
            ErrorKind::Deserialization
        } else {
            ErrorKind::Serialization
        };
        Self::new(kind, "Stored list could not be decoded").with_internal(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: kind.default_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ErrorKind::Storage.code(), "STORAGE_ERROR");
        assert_eq!(ErrorKind::Validation.code(), "VALIDATION_ERROR");
        assert_eq!(ErrorKind::InvalidState.code(), "INVALID_STATE");
    }

    #[test]
    fn storage_errors_are_retryable() {
        assert!(ErrorKind::Storage.is_retryable());
        assert!(!ErrorKind::Validation.is_retryable());
        assert!(!ErrorKind::Internal.is_retryable());
    }

    #[test]
    fn fatal_severity_blocks_retry() {
        let error = AppError::new(ErrorKind::Storage, "disk unhappy")
            .with_severity(ErrorSeverity::Fatal);
        assert!(!error.is_retryable());
    }

    #[test]
    fn validation_errors_surface_their_own_message() {
        let error = AppError::new(ErrorKind::Validation, "Please enter a valid item name");
        assert_eq!(error.user_facing_message(), "Please enter a valid item name");
    }

    #[test]
    fn display_includes_code_and_internal_detail() {
        let error = AppError::new(ErrorKind::Storage, "write failed").with_internal("io: EIO");
        let rendered = error.to_string();
        assert!(rendered.contains("STORAGE_ERROR"));
        assert!(rendered.contains("EIO"));
    }

    #[test]
    fn toast_durations_scale_with_urgency() {
        assert!(ToastKind::Error.default_duration_ms() > ToastKind::Success.default_duration_ms());
        assert_eq!(ToastMessage::new("hi", ToastKind::Info).duration_ms, 3000);
    }
}
