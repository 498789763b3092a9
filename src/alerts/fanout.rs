use futures::future::join_all;
use log::{error, info, warn};

use crate::alerts::report::{alert_reference, report_html, report_subject, sms_text};
use crate::alerts::types::{DeliveryStatus, EmergencyOutcome, EmergencyRequest, SmsDelivery};
use crate::error::AppError;
use crate::notify::{Mailer, OutgoingMail, SmsSender};
use crate::records::{farmers_in_village, Recipient};
use crate::twilio::format_e164;

const SENDER_NAME: &str = "Disaster Relief System";

/// Emails the village report to every recipient, then texts each of them
/// concurrently. Nothing is sent when the request is incomplete, and no SMS
/// goes out when the email fails. SMS failures are reported per recipient.
pub async fn trigger_emergency<M: Mailer, S: SmsSender>(
    request: &EmergencyRequest,
    recipients: &[Recipient],
    mailer: &M,
    sms: &S,
    country_code: &str,
    issued_at_ms: u64,
) -> Result<EmergencyOutcome, AppError> {
    let (village, disaster_type) = request.required_fields()?;
    let severity = request.severity();

    let farmers = farmers_in_village(village);
    let alert_ref = alert_reference(village, disaster_type, severity, issued_at_ms);
    let emails: Vec<String> = recipients.iter().map(|r| r.email.to_string()).collect();

    let report = OutgoingMail {
        from_name: SENDER_NAME.to_string(),
        to: emails.clone(),
        subject: report_subject(village, disaster_type),
        html: report_html(village, disaster_type, severity, &farmers, &alert_ref),
    };

    mailer.send_mail(&report).await.map_err(|e| {
        error!("Emergency report for {} failed: {}", village, e);
        e
    })?;
    info!("Detailed email report {} sent for {} to all officials", alert_ref, village);

    let text = sms_text(village, disaster_type, severity, farmers.len(), &alert_ref);
    let sms_deliveries =
        join_all(recipients.iter().map(|recipient| send_alert(sms, recipient, &text, country_code)))
            .await;

    let outcome = EmergencyOutcome {
        message: format!(
            "Emergency trigger successful. {} farmer records shared via Email and Mobile Alert.",
            farmers.len()
        ),
        recipients: emails.join(", "),
        recipient_count: emails.len(),
        farmer_count: farmers.len(),
        alert_ref,
        sms_deliveries,
    };

    let failed = outcome.failed_sms();
    if failed > 0 {
        warn!(
            "Alert {}: {} of {} SMS failed",
            outcome.alert_ref,
            failed,
            outcome.sms_deliveries.len()
        );
    }

    Ok(outcome)
}

async fn send_alert<S: SmsSender>(
    sms: &S,
    recipient: &Recipient,
    text: &str,
    country_code: &str,
) -> SmsDelivery {
    let to = format_e164(country_code, recipient.phone);

    match sms.send_sms(&to, text).await {
        Ok(sid) => {
            info!("SMS sent to {} ({}). SID: {}", recipient.role, to, sid);
            SmsDelivery {
                role: recipient.role,
                to,
                status: DeliveryStatus::Sent,
                sid: Some(sid),
                error: None,
            }
        }
        Err(e) => {
            error!("Failed to send SMS to {} ({}): {}", recipient.role, to, e);
            SmsDelivery {
                role: recipient.role,
                to,
                status: DeliveryStatus::Failed,
                sid: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::error::NotifyError;
    use crate::records::GOVT_RECIPIENTS;

    #[derive(Default)]
    struct FakeMailer {
        sent: RefCell<Vec<OutgoingMail>>,
        fail: bool,
    }

    impl Mailer for FakeMailer {
        async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, NotifyError> {
            if self.fail {
                return Err(NotifyError::Rejected {
                    provider: "Gmail",
                    status: 401,
                    message: "Invalid Credentials".to_string(),
                });
            }
            self.sent.borrow_mut().push(mail.clone());
            Ok(format!("msg-{}", self.sent.borrow().len()))
        }
    }

    #[derive(Default)]
    struct FakeSms {
        sent: RefCell<Vec<(String, String)>>,
        reject: Option<&'static str>,
    }

    impl SmsSender for FakeSms {
        async fn send_sms(&self, to: &str, body: &str) -> Result<String, NotifyError> {
            if self.reject == Some(to) {
                return Err(NotifyError::Rejected {
                    provider: "Twilio",
                    status: 400,
                    message: "The 'To' number is not a valid phone number.".to_string(),
                });
            }
            self.sent.borrow_mut().push((to.to_string(), body.to_string()));
            Ok(format!("SM{}", self.sent.borrow().len()))
        }
    }

    fn request(village: Option<&str>, disaster: Option<&str>, severity: Option<&str>) -> EmergencyRequest {
        EmergencyRequest {
            village: village.map(str::to_string),
            disaster_type: disaster.map(str::to_string),
            severity: severity.map(str::to_string),
        }
    }

    fn run(
        req: &EmergencyRequest,
        mailer: &FakeMailer,
        sms: &FakeSms,
    ) -> Result<EmergencyOutcome, AppError> {
        block_on(trigger_emergency(req, GOVT_RECIPIENTS, mailer, sms, "+91", 1_700_000_000_000))
    }

    #[test]
    fn kumtha_flood_reaches_all_officials() {
        let (mailer, sms) = (FakeMailer::default(), FakeSms::default());
        let outcome = run(&request(Some("Kumtha"), Some("Flood"), Some("High")), &mailer, &sms).unwrap();

        assert_eq!(outcome.farmer_count, 1);
        assert_eq!(outcome.recipient_count, 4);
        assert_eq!(outcome.recipients.split(", ").count(), 4);
        assert_eq!(outcome.failed_sms(), 0);

        let sent = mailer.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to.len(), 4);
        assert!(sent[0].html.contains("<td>FARM104</td>"));
        assert_eq!(sent[0].html.matches("<td>FARM").count(), 1);
        assert!(sent[0].html.contains(&outcome.alert_ref));

        let texts = sms.sent.borrow();
        let numbers: Vec<&str> = texts.iter().map(|(to, _)| to.as_str()).collect();
        assert_eq!(
            numbers,
            vec!["+919518916651", "+919689902706", "+919689722003", "+917709802706"]
        );
        assert!(texts.iter().all(|(_, body)| body.contains("Village: Kumtha")));
    }

    #[test]
    fn unknown_village_sends_placeholder() {
        let (mailer, sms) = (FakeMailer::default(), FakeSms::default());
        let outcome = run(&request(Some("Atlantis"), Some("Drought"), Some("Low")), &mailer, &sms).unwrap();

        assert_eq!(outcome.farmer_count, 0);
        assert!(mailer.sent.borrow()[0]
            .html
            .contains("No registered farmer data found for this village in the database."));
    }

    #[test]
    fn village_case_does_not_change_result() {
        let (mailer, sms) = (FakeMailer::default(), FakeSms::default());
        let lower = run(&request(Some("shendurjane"), Some("Hail"), None), &mailer, &sms).unwrap();
        let proper = run(&request(Some("Shendurjane"), Some("Hail"), None), &mailer, &sms).unwrap();
        assert_eq!(lower.farmer_count, 2);
        assert_eq!(lower.farmer_count, proper.farmer_count);
    }

    #[test]
    fn missing_fields_send_nothing() {
        for req in [
            request(None, Some("Flood"), Some("High")),
            request(Some("Kumtha"), None, Some("High")),
            request(Some(""), Some("Flood"), None),
            request(Some("Kumtha"), Some("  "), None),
        ] {
            let (mailer, sms) = (FakeMailer::default(), FakeSms::default());
            assert!(matches!(run(&req, &mailer, &sms), Err(AppError::MissingFields)));
            assert!(mailer.sent.borrow().is_empty());
            assert!(sms.sent.borrow().is_empty());
        }
    }

    #[test]
    fn email_failure_stops_sms() {
        let mailer = FakeMailer {
            fail: true,
            ..Default::default()
        };
        let sms = FakeSms::default();
        let result = run(&request(Some("Kumtha"), Some("Flood"), Some("High")), &mailer, &sms);

        let err = result.unwrap_err();
        assert_eq!(err.status(), 500);
        assert!(sms.sent.borrow().is_empty());
    }

    #[test]
    fn failed_sms_is_reported_not_fatal() {
        let mailer = FakeMailer::default();
        let sms = FakeSms {
            reject: Some("+919689722003"),
            ..Default::default()
        };
        let outcome = run(&request(Some("Kumtha"), Some("Flood"), Some("High")), &mailer, &sms).unwrap();

        assert_eq!(outcome.failed_sms(), 1);
        assert_eq!(sms.sent.borrow().len(), 3);

        let failed = &outcome.sms_deliveries[2];
        assert_eq!(failed.role, "Police Patil");
        assert_eq!(failed.status, DeliveryStatus::Failed);
        assert!(failed.sid.is_none());
        assert!(failed.error.as_deref().unwrap().contains("not a valid phone number"));
        assert_eq!(outcome.sms_deliveries[0].sid.as_deref(), Some("SM1"));
    }

    #[test]
    fn absent_severity_is_unspecified() {
        let (mailer, sms) = (FakeMailer::default(), FakeSms::default());
        run(&request(Some("Kumtha"), Some("Flood"), None), &mailer, &sms).unwrap();
        assert!(sms.sent.borrow()[0].1.contains("Severity: Unspecified"));
    }
}
