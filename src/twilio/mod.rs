pub mod main;
pub mod types;

pub use main::{format_e164, TwilioSms};
pub use types::{MessageResponse, TwilioConfig, TwilioErrorResponse};
