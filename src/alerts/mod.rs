pub mod fanout;
pub mod report;
pub mod types;

pub use fanout::trigger_emergency;
pub use report::{alert_reference, farmer_table_html, report_html, report_subject, sms_text};
pub use types::{DeliveryStatus, EmergencyOutcome, EmergencyRequest, SmsDelivery};
