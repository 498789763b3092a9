pub mod main;
pub mod types;

pub use main::{appointment_html, book_appointment};
pub use types::{BookingConfirmation, BookingRequest};
