use serde::Deserialize;

pub struct GmailConfig {
    /// Account the messages are sent from.
    pub sender: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub id: String,
    pub thread_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleErrorEnvelope {
    pub error: GoogleError,
}

/// Google returns `{"error": {...}}` from the Gmail API and
/// `{"error": "...", "error_description": "..."}` from the token endpoint.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum GoogleError {
    Api { message: String },
    OAuth(String),
}

#[derive(Deserialize, Debug)]
pub struct OAuthErrorDescription {
    pub error_description: Option<String>,
}
