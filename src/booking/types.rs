use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::records::officer_email;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub officer: Option<String>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl BookingRequest {
    /// Returns the selected officer's name and email address.
    pub fn officer(&self) -> Result<(&str, &'static str), AppError> {
        let name = self.officer.as_deref().unwrap_or_default();
        officer_email(name)
            .map(|email| (name, email))
            .ok_or(AppError::InvalidOfficer)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub message: String,
    pub officer_email: String,
}
