use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine,
};

use crate::notify::OutgoingMail;

const LINE_WIDTH: usize = 76;

/// Encodes a header value as an RFC 2047 word when it is not plain ASCII.
/// Control characters become spaces so a value can never start a new header.
pub fn encode_header_word(value: &str) -> String {
    let value: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if value.is_ascii() {
        value
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(value))
    }
}

/// Renders `mail` as an RFC 5322 message and returns it base64url encoded,
/// which is what the Gmail `messages.send` endpoint takes as `raw`.
pub fn render_message(mail: &OutgoingMail, sender: &str) -> String {
    let body = STANDARD.encode(mail.html.as_bytes());
    let wrapped = body
        .as_bytes()
        .chunks(LINE_WIDTH)
        // base64 output is ASCII
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\r\n");

    let message = format!(
        "From: {} <{}>\r\n\
         To: {}\r\n\
         Subject: {}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/html; charset=UTF-8\r\n\
         Content-Transfer-Encoding: base64\r\n\
         \r\n\
         {}\r\n",
        encode_header_word(&mail.from_name),
        sender,
        mail.to.join(", "),
        encode_header_word(&mail.subject),
        wrapped,
    );

    URL_SAFE.encode(message)
}
