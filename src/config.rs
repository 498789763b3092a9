use log::LevelFilter;
use worker::Env;

use crate::error::AppError;
use crate::gmail::GmailConfig;
use crate::twilio::TwilioConfig;

const DEFAULT_COUNTRY_CODE: &str = "+91";

fn var(env: &Env, key: &str) -> Result<String, AppError> {
    env.var(key)
        .map(|v| v.to_string())
        .map_err(|_| AppError::Config(key.to_string()))
}

fn secret(env: &Env, key: &str) -> Result<String, AppError> {
    env.secret(key)
        .map(|v| v.to_string())
        .map_err(|_| AppError::Config(key.to_string()))
}

fn optional_var(env: &Env, key: &str) -> Option<String> {
    env.var(key)
        .ok()
        .map(|v| v.to_string())
        .filter(|v| !v.trim().is_empty())
}

pub fn gmail_config(env: &Env) -> Result<GmailConfig, AppError> {
    Ok(GmailConfig {
        sender: var(env, "EMAIL_USER")?,
        client_id: var(env, "GMAIL_CLIENT_ID")?,
        client_secret: secret(env, "GMAIL_CLIENT_SECRET")?,
        refresh_token: secret(env, "GMAIL_REFRESH_TOKEN")?,
    })
}

pub fn twilio_config(env: &Env) -> Result<TwilioConfig, AppError> {
    Ok(TwilioConfig {
        account_sid: var(env, "TWILIO_ACCOUNT_SID")?,
        auth_token: secret(env, "TWILIO_AUTH_TOKEN")?,
        from_number: var(env, "TWILIO_PHONE_NUMBER")?,
    })
}

pub fn sms_country_code(env: &Env) -> String {
    optional_var(env, "SMS_COUNTRY_CODE").unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string())
}

pub fn log_level(env: &Env) -> LevelFilter {
    parse_log_level(optional_var(env, "LOG_LEVEL").as_deref())
}

fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
