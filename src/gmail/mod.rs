pub mod main;
pub mod mime;
pub mod types;

pub use main::{exchange_refresh_token, GmailMailer};
pub use mime::{encode_header_word, render_message};
pub use types::{GmailConfig, SendResponse, TokenResponse};
