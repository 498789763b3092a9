use log::{info, warn};
use serde_json::json;
use worker::*;

pub mod alerts;
pub mod booking;
pub mod config;
pub mod error;
pub mod gmail;
pub mod logging;
pub mod notify;
pub mod records;
pub mod twilio;
mod utils;

use alerts::{trigger_emergency, EmergencyOutcome, EmergencyRequest};
use booking::{book_appointment, BookingConfirmation, BookingRequest};
use error::AppError;
use gmail::GmailMailer;
use records::{farmer_listing, officer_names, GOVT_RECIPIENTS};
use twilio::TwilioSms;

const BOOKING_FAILED: &str = "Booking failed. Internal server or email error.";
const EMERGENCY_FAILED: &str =
    "Emergency trigger failed. Internal server, email, or Twilio error. Check the Worker configuration and the Twilio console!";

fn add_cors_headers(mut response: Response) -> Result<Response> {
    response
        .headers_mut()
        .set("Access-Control-Allow-Origin", "*")?;
    response
        .headers_mut()
        .set("Access-Control-Allow-Methods", "GET, POST, OPTIONS")?;
    response
        .headers_mut()
        .set("Access-Control-Allow-Headers", "Content-Type")?;
    Ok(response)
}

// Fetch Event Handler
#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    utils::set_panic_hook();
    logging::init(config::log_level(&env));

    info!("{:?} {}", req.method(), req.path());

    if req.method() == Method::Options {
        return add_cors_headers(Response::empty()?);
    }

    let response = Router::new()
        .get("/api/officers", |_, _| list_officers())
        .get("/api/farmers", |req, _| list_farmers(&req))
        .post_async("/api/book-appointment", |req, ctx| async move {
            handle_book_appointment(req, ctx).await
        })
        .post_async("/api/emergency-trigger", |req, ctx| async move {
            handle_emergency_trigger(req, ctx).await
        })
        .run(req, env)
        .await?;

    add_cors_headers(response)
}

fn list_officers() -> Result<Response> {
    Response::from_json(&json!({ "officers": officer_names() }))
}

fn list_farmers(req: &Request) -> Result<Response> {
    let url = req.url()?;
    match farmer_listing(url.query().unwrap_or_default()) {
        Ok(listing) => Response::from_json(&listing),
        Err(e) => e.into_response(""),
    }
}

async fn handle_book_appointment(mut req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let request: BookingRequest = match req.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Malformed booking body: {}", e);
            return AppError::MalformedPayload.into_response(BOOKING_FAILED);
        }
    };

    match run_booking(&request, &ctx.env).await {
        Ok(confirmation) => Response::from_json(&confirmation),
        Err(e) => e.into_response(BOOKING_FAILED),
    }
}

async fn run_booking(
    request: &BookingRequest,
    env: &Env,
) -> std::result::Result<BookingConfirmation, AppError> {
    request.officer()?;

    let mailer = GmailMailer::new(config::gmail_config(env)?);
    book_appointment(request, &mailer).await
}

async fn handle_emergency_trigger(mut req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let request: EmergencyRequest = match req.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Malformed emergency body: {}", e);
            return AppError::MalformedPayload.into_response(EMERGENCY_FAILED);
        }
    };

    match run_emergency_trigger(&request, &ctx.env).await {
        Ok(outcome) => Response::from_json(&outcome),
        Err(e) => e.into_response(EMERGENCY_FAILED),
    }
}

async fn run_emergency_trigger(
    request: &EmergencyRequest,
    env: &Env,
) -> std::result::Result<EmergencyOutcome, AppError> {
    request.required_fields()?;

    let mailer = GmailMailer::new(config::gmail_config(env)?);
    let sms = TwilioSms::new(config::twilio_config(env)?);
    let country_code = config::sms_country_code(env);

    trigger_emergency(
        request,
        GOVT_RECIPIENTS,
        &mailer,
        &sms,
        &country_code,
        Date::now().as_millis(),
    )
    .await
}
