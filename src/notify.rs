//! Provider seam shared by the booking and alert flows.
//!
//! Worker futures are not `Send`, so these traits use plain `async fn` and
//! are consumed through generics rather than trait objects.
#![allow(async_fn_in_trait)]

use crate::error::NotifyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Display name shown next to the sender address.
    pub from_name: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

pub trait Mailer {
    /// Sends one message and returns the provider's message id.
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, NotifyError>;
}

pub trait SmsSender {
    /// Sends `body` to an E.164 number and returns the provider's message id.
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, NotifyError>;
}
