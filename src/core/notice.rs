//! User-facing failure notices and the mapping from backend errors to them.

use crate::api::BackendError;
use crate::core::constants::{
    INVALID_API_KEY_MESSAGE, LANGUAGES_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE,
    QUOTA_EXCEEDED_MESSAGE, TRANSLATION_FAILED_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Which operation raised a notice. Both share the single notice slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSource {
    Languages,
    Translation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub source: NoticeSource,
}

impl Notice {
    pub fn languages_failed() -> Self {
        Self {
            message: LANGUAGES_FAILED_MESSAGE.to_string(),
            severity: Severity::Error,
            source: NoticeSource::Languages,
        }
    }

    pub fn from_translation_error(error: &BackendError) -> Self {
        let (message, severity) = match error {
            BackendError::Status { status: 429, .. } => {
                (QUOTA_EXCEEDED_MESSAGE.to_string(), Severity::Warning)
            }
            BackendError::Status { status: 401, .. } => {
                (INVALID_API_KEY_MESSAGE.to_string(), Severity::Error)
            }
            BackendError::Status {
                detail: Some(detail),
                ..
            } => (detail.clone(), Severity::Error),
            BackendError::Status { detail: None, .. } | BackendError::Decode { .. } => {
                (TRANSLATION_FAILED_MESSAGE.to_string(), Severity::Error)
            }
            BackendError::Transport { .. } => {
                (NETWORK_ERROR_MESSAGE.to_string(), Severity::Error)
            }
        };

        Self {
            message,
            severity,
            source: NoticeSource::Translation,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
