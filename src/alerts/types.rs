use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::is_blank;

const UNSPECIFIED_SEVERITY: &str = "Unspecified";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRequest {
    pub village: Option<String>,
    pub disaster_type: Option<String>,
    pub severity: Option<String>,
}

impl EmergencyRequest {
    /// Returns `(village, disaster_type)`, both present and non-blank.
    pub fn required_fields(&self) -> Result<(&str, &str), AppError> {
        if is_blank(&self.village) || is_blank(&self.disaster_type) {
            return Err(AppError::MissingFields);
        }
        match (&self.village, &self.disaster_type) {
            (Some(village), Some(disaster_type)) => Ok((village.as_str(), disaster_type.as_str())),
            _ => Err(AppError::MissingFields),
        }
    }

    pub fn severity(&self) -> &str {
        self.severity
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNSPECIFIED_SEVERITY)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// Result of one SMS to one recipient.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SmsDelivery {
    pub role: &'static str,
    pub to: String,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyOutcome {
    pub message: String,
    /// Every recipient address, comma separated.
    pub recipients: String,
    pub recipient_count: usize,
    pub farmer_count: usize,
    pub alert_ref: String,
    pub sms_deliveries: Vec<SmsDelivery>,
}

impl EmergencyOutcome {
    pub fn failed_sms(&self) -> usize {
        self.sms_deliveries
            .iter()
            .filter(|d| d.status == DeliveryStatus::Failed)
            .count()
    }
}
