use log::{error, info};

use crate::booking::types::{BookingConfirmation, BookingRequest};
use crate::error::AppError;
use crate::notify::{Mailer, OutgoingMail};
use crate::utils::escape_html;

const SENDER_NAME: &str = "Soil Test Booking System";

pub async fn book_appointment<M: Mailer>(
    request: &BookingRequest,
    mailer: &M,
) -> Result<BookingConfirmation, AppError> {
    let (officer, email) = request.officer()?;

    let mail = OutgoingMail {
        from_name: SENDER_NAME.to_string(),
        to: vec![email.to_string()],
        subject: format!(
            "[ACTION REQUIRED] New Soil Test Appointment: {}",
            field(&request.name)
        ),
        html: appointment_html(officer, request),
    };

    let message_id = mailer.send_mail(&mail).await.map_err(|e| {
        error!("Error sending booking email to {}: {}", officer, e);
        e
    })?;
    info!("Booking for {} sent to {}: {}", officer, email, message_id);

    Ok(BookingConfirmation {
        message: "Appointment booked and email notification sent successfully!".to_string(),
        officer_email: email.to_string(),
    })
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

pub fn appointment_html(officer: &str, request: &BookingRequest) -> String {
    let e = |value: &Option<String>| escape_html(field(value));

    format!(
        r#"<h3>New Appointment Details for {officer}:</h3>
<p>A new soil testing appointment has been booked. Please follow up with the farmer.</p>
<hr>
<p><strong>Farmer Name:</strong> {name}</p>
<p><strong>Date &amp; Time:</strong> {date} at {time}</p>
<p><strong>Farmer Phone:</strong> {phone}</p>
<p><strong>Farmer Email:</strong> {email}</p>
<p><strong>Location:</strong> {address}, {city} - {pincode}</p>
<hr>
<p style="color: grey; font-size: 0.8em;">This email was sent automatically by the booking system.</p>
"#,
        officer = escape_html(officer),
        name = e(&request.name),
        date = e(&request.date),
        time = e(&request.time),
        phone = e(&request.phone),
        email = e(&request.email),
        address = e(&request.address_line1),
        city = e(&request.city),
        pincode = e(&request.pincode),
    )
}
