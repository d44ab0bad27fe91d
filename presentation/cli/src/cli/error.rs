use std::process::ExitCode;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Exit status reported for each error family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Internal = 1,
    Validation = 2,
    Infeasible = 3,
    NotFound = 4,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

pub trait IntoCliError {
    fn into_cli_error(self) -> (ExitStatus, ErrorResponse);
}

pub(crate) fn error_response(name: &str, message: &str) -> ErrorResponse {
    ErrorResponse {
        name: name.to_string(),
        message: message.to_string(),
        details: None,
    }
}
