use log::{debug, info};
use reqwest::{Client, Response};
use serde_json::json;

use crate::error::NotifyError;
use crate::gmail::{
    mime::render_message,
    types::{GmailConfig, GoogleError, GoogleErrorEnvelope, OAuthErrorDescription, SendResponse, TokenResponse},
};
use crate::notify::{Mailer, OutgoingMail};

const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GMAIL_PROVIDER: &str = "Gmail";
const OAUTH_PROVIDER: &str = "Google OAuth";
const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

pub struct GmailMailer {
    client: Client,
    config: GmailConfig,
}

impl GmailMailer {
    pub fn new(config: GmailConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Mailer for GmailMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, NotifyError> {
        let token = exchange_refresh_token(&self.client, &self.config).await?;
        let raw = render_message(mail, &self.config.sender);

        let response = self
            .client
            .post(GMAIL_SEND_URL)
            .bearer_auth(&token.access_token)
            .json(&json!({ "raw": raw }))
            .send()
            .await?;

        let response = ensure_success(response, GMAIL_PROVIDER).await?;
        let sent: SendResponse = response.json().await?;

        info!("Message sent: {} ({} recipients)", sent.id, mail.to.len());
        Ok(sent.id)
    }
}

/// Trades the long-lived refresh token for a short-lived access token.
pub async fn exchange_refresh_token(
    client: &Client,
    config: &GmailConfig,
) -> Result<TokenResponse, NotifyError> {
    let response = client
        .post(GOOGLE_TOKEN_URL)
        .form(&[
            ("grant_type", "refresh_token"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("refresh_token", config.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let response = ensure_success(response, OAUTH_PROVIDER).await?;
    let token: TokenResponse = response.json().await?;

    debug!(
        "Gmail access token issued, expires in {}s",
        token.expires_in.unwrap_or_default()
    );
    Ok(token)
}

async fn ensure_success(
    response: Response,
    provider: &'static str,
) -> Result<Response, NotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    Err(rejection(provider, status.as_u16(), &text))
}

fn rejection(provider: &'static str, status: u16, body: &str) -> NotifyError {
    NotifyError::Rejected {
        provider,
        status,
        message: google_error_message(body),
    }
}

fn google_error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) {
        return match envelope.error {
            GoogleError::Api { message } => message,
            GoogleError::OAuth(code) => serde_json::from_str::<OAuthErrorDescription>(body)
                .ok()
                .and_then(|d| d.error_description)
                .map(|d| format!("{code}: {d}"))
                .unwrap_or(code),
        };
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message() {
        let body = r#"{"error": {"code": 403, "message": "Insufficient Permission", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(google_error_message(body), "Insufficient Permission");
    }

    #[test]
    fn oauth_error_message() {
        let body = r#"{"error": "invalid_grant", "error_description": "Token has been expired or revoked."}"#;
        assert_eq!(
            google_error_message(body),
            "invalid_grant: Token has been expired or revoked."
        );
        assert_eq!(
            google_error_message(r#"{"error": "invalid_client"}"#),
            "invalid_client"
        );
    }

    #[test]
    fn failures_name_the_rejecting_endpoint() {
        let token = rejection(OAUTH_PROVIDER, 400, r#"{"error": "invalid_grant"}"#);
        assert_eq!(
            token.to_string(),
            "Google OAuth rejected the request (400): invalid_grant"
        );

        let send = rejection(
            GMAIL_PROVIDER,
            403,
            r#"{"error": {"code": 403, "message": "Insufficient Permission"}}"#,
        );
        assert_eq!(
            send.to_string(),
            "Gmail rejected the request (403): Insufficient Permission"
        );
    }

    #[test]
    fn unparsable_error_body_is_kept() {
        assert_eq!(google_error_message("Bad Gateway"), "Bad Gateway");
    }
}
