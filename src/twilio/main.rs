use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use reqwest::{header::AUTHORIZATION, Client};
use url::Url;

use crate::error::NotifyError;
use crate::notify::SmsSender;
use crate::twilio::types::{MessageResponse, TwilioConfig, TwilioErrorResponse};

const TWILIO_API_URL: &str = "https://api.twilio.com/2010-04-01/";

pub struct TwilioSms {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSms {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> Result<Url, NotifyError> {
        let path = format!("Accounts/{}/Messages.json", self.config.account_sid);
        Url::parse(TWILIO_API_URL)
            .and_then(|base| base.join(&path))
            .map_err(|e| NotifyError::Encoding(format!("Invalid Twilio URL: {}", e)))
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.config.account_sid, self.config.auth_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

impl SmsSender for TwilioSms {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, NotifyError> {
        let response = self
            .client
            .post(self.messages_url()?)
            .header(AUTHORIZATION, self.basic_auth())
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = match serde_json::from_str::<TwilioErrorResponse>(&text) {
                Ok(err) => match err.code {
                    Some(code) => format!("{} (code {})", err.message, code),
                    None => err.message,
                },
                Err(_) => text,
            };
            return Err(NotifyError::Rejected {
                provider: "Twilio",
                status: status.as_u16(),
                message,
            });
        }

        let message: MessageResponse = response.json().await?;
        debug!(
            "Twilio accepted {} with status {}",
            message.sid,
            message.status.as_deref().unwrap_or("unknown")
        );
        Ok(message.sid)
    }
}

/// Formats a local number as E.164 under `country_code` (e.g. `+91`).
/// Numbers that already carry a `+` are left alone apart from separators.
pub fn format_e164(country_code: &str, phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if phone.trim_start().starts_with('+') {
        return format!("+{}", digits);
    }

    let prefix: String = country_code.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("+{}{}", prefix, digits)
}
