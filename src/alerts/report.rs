use sha3::{Digest, Sha3_256};

use crate::records::Farmer;
use crate::utils::escape_html;

pub const NO_FARMERS_PLACEHOLDER: &str =
    "<p>No registered farmer data found for this village in the database.</p>";

const REFERENCE_LEN: usize = 12;

/// Short id that ties the email, the SMS and the HTTP response of one
/// trigger together. Not an idempotency key: a resubmission gets a new one.
pub fn alert_reference(village: &str, disaster_type: &str, severity: &str, issued_at_ms: u64) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(village.as_bytes());
    hasher.update([0]);
    hasher.update(disaster_type.as_bytes());
    hasher.update([0]);
    hasher.update(severity.as_bytes());
    hasher.update(issued_at_ms.to_be_bytes());
    let mut reference = hex::encode(hasher.finalize());
    reference.truncate(REFERENCE_LEN);
    reference
}

pub fn farmer_table_html(farmers: &[&Farmer]) -> String {
    if farmers.is_empty() {
        return NO_FARMERS_PLACEHOLDER.to_string();
    }

    let mut table = String::from(
        r#"<table border="1" cellpadding="8" cellspacing="0" style="width: 100%; border-collapse: collapse; font-size: 14px;">
    <tr style="background-color: #f2f2f2;">
        <th>ID</th>
        <th>Name</th>
        <th>Phone</th>
        <th>Bank A/C</th>
        <th>Financial Status</th>
    </tr>
"#,
    );

    for farmer in farmers {
        table.push_str(&format!(
            "    <tr>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n    </tr>\n",
            escape_html(farmer.id),
            escape_html(farmer.name),
            escape_html(farmer.phone),
            escape_html(farmer.bank_account),
            escape_html(farmer.financial_status),
        ));
    }

    table.push_str("</table>");
    table
}

pub fn report_subject(village: &str, disaster_type: &str) -> String {
    format!(
        "🚨 URGENT: Disaster Relief Triggered for {} ({})",
        village,
        disaster_type.to_uppercase()
    )
}

pub fn report_html(
    village: &str,
    disaster_type: &str,
    severity: &str,
    farmers: &[&Farmer],
    alert_ref: &str,
) -> String {
    let count = farmers.len();
    format!(
        r#"<h3 style="color: #CC0000; font-size: 1.5em;">Disaster Report: {disaster} in {village} (Severity: {severity})</h3>
<p>Immediate action is required. {count} registered farmer records are attached below for urgent assistance and verification.</p>
<hr>
{table}
<hr>
<p style="color: #0056b3; font-size: 0.9em;">Total Registered Farmers in Affected Village: {count}.</p>
<p style="color: grey; font-size: 0.8em;">Alert reference: {alert_ref}</p>
"#,
        disaster = escape_html(disaster_type),
        village = escape_html(village),
        severity = escape_html(severity),
        table = farmer_table_html(farmers),
    )
}

pub fn sms_text(
    village: &str,
    disaster_type: &str,
    severity: &str,
    farmer_count: usize,
    alert_ref: &str,
) -> String {
    format!(
        "🚨 URGENT ALERT: Disaster ({}, Severity: {}) triggered for Village: {}. {} farmer records shared via official email. Action required. Ref: {}",
        disaster_type, severity, village, farmer_count, alert_ref
    )
}
