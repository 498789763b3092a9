use serde::Deserialize;

pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number, already in E.164 form.
    pub from_number: String,
}

#[derive(Deserialize, Debug)]
pub struct MessageResponse {
    pub sid: String,
    pub status: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TwilioErrorResponse {
    pub code: Option<u32>,
    pub message: String,
}
