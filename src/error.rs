use serde_json::json;
use thiserror::Error;
use worker::Response;

/// Failure talking to a notification provider.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{provider} rejected the request ({status}): {message}")]
    Rejected {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Village and disaster type are required.")]
    MissingFields,

    #[error("Invalid officer selected.")]
    InvalidOfficer,

    #[error("Village query parameter is required.")]
    MissingVillage,

    #[error("Malformed request body.")]
    MalformedPayload,

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Mail(#[from] NotifyError),
}

impl AppError {
    pub fn status(&self) -> u16 {
        match self {
            AppError::MissingFields
            | AppError::InvalidOfficer
            | AppError::MissingVillage
            | AppError::MalformedPayload => 400,
            AppError::Config(_) | AppError::Mail(_) => 500,
        }
    }

    /// Client errors carry their own message; server errors use the
    /// endpoint's failure message and expose the cause in `error`.
    pub fn body(&self, failure_message: &str) -> serde_json::Value {
        if self.status() < 500 {
            json!({ "message": self.to_string() })
        } else {
            json!({ "message": failure_message, "error": self.to_string() })
        }
    }

    pub fn into_response(self, failure_message: &str) -> worker::Result<Response> {
        let status = self.status();
        Ok(Response::from_json(&self.body(failure_message))?.with_status(status))
    }
}
