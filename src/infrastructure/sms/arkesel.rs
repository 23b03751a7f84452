//! Arkesel SMS OTP client.
//!
//! Arkesel answers every request with a JSON body carrying a `code`. Codes
//! `1000` (generate) and `1100` (verify) are success; everything else is
//! translated through [`describe_code`].

use crate::core::errors::PollenHiveError;
use crate::infrastructure::sms::{OtpOutcome, OtpProvider, normalize_phone};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const GENERATE_SUCCESS: &str = "1000";
const VERIFY_SUCCESS: &str = "1100";

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to process OTP request.";

/// Human-readable meaning of a non-success Arkesel response code.
pub fn describe_code(code: &str) -> &'static str {
    match code {
        "1001" => "Validation error: required OTP fields are missing.",
        "1002" => "Message must contain the %otp_code% placeholder.",
        "1003" => "Insufficient SMS balance.",
        "1004" => "OTP length is invalid.",
        "1005" => "Invalid phone number.",
        "1006" => "OTP expiry time is invalid.",
        "1007" => "Sender ID is invalid or not approved.",
        "1008" => "Unable to send OTP at this time.",
        "1101" => "Validation error: phone number and code are required.",
        "1102" => "Invalid phone number.",
        "1103" => "No pending verification for this phone number.",
        "1104" => "Invalid verification code.",
        "1105" => "Verification code has expired.",
        "1106" => "Unable to verify OTP at this time.",
        _ => DEFAULT_FAILURE_MESSAGE,
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    expiry: u32,
    length: u32,
    medium: &'static str,
    message: &'a str,
    number: &'a str,
    sender_id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    code: &'a str,
    number: &'a str,
}

#[derive(Deserialize)]
struct ArkeselResponse {
    #[serde(default)]
    code: serde_json::Value,
}

impl ArkeselResponse {
    // Arkesel sends the code as a string, but some endpoints return a number.
    fn code(&self) -> String {
        match &self.code {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }

    fn into_outcome(self, success_code: &str) -> OtpOutcome {
        let code = self.code();
        if code == success_code {
            OtpOutcome::ok()
        } else {
            OtpOutcome::failed(describe_code(&code))
        }
    }
}

pub struct ArkeselClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    sender_id: String,
}

impl ArkeselClient {
    pub fn new(api_key: String, sender_id: String, base_url: String) -> Result<Self, PollenHiveError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PollenHiveError::OtpProviderError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(ArkeselClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            sender_id,
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ArkeselResponse, PollenHiveError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| PollenHiveError::OtpProviderError(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        response.json::<ArkeselResponse>().await.map_err(|e| {
            PollenHiveError::OtpProviderError(format!("Unreadable response from {} (HTTP {}): {}", path, status, e))
        })
    }
}

#[async_trait]
impl OtpProvider for ArkeselClient {
    async fn send_otp(
        &self,
        phone: &str,
        message: &str,
        expiry_minutes: u32,
        length: u32,
    ) -> Result<OtpOutcome, PollenHiveError> {
        let number = normalize_phone(phone);
        let body = GenerateRequest {
            expiry: expiry_minutes,
            length,
            medium: "sms",
            message,
            number: &number,
            sender_id: &self.sender_id,
            kind: "numeric",
        };
        let outcome = self.post("/api/otp/generate", &body).await?.into_outcome(GENERATE_SUCCESS);
        if !outcome.success {
            tracing::warn!(number = %number, error = ?outcome.error, "Arkesel rejected OTP generation");
        }
        Ok(outcome)
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<OtpOutcome, PollenHiveError> {
        let number = normalize_phone(phone);
        let body = VerifyRequest { code, number: &number };
        let outcome = self.post("/api/otp/verify", &body).await?.into_outcome(VERIFY_SUCCESS);
        if !outcome.success {
            tracing::warn!(number = %number, error = ?outcome.error, "Arkesel rejected OTP verification");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: serde_json::Value) -> ArkeselResponse {
        ArkeselResponse { code }
    }

    #[test]
    fn success_codes_map_to_success() {
        assert_eq!(response("1000".into()).into_outcome(GENERATE_SUCCESS), OtpOutcome::ok());
        assert_eq!(response("1100".into()).into_outcome(VERIFY_SUCCESS), OtpOutcome::ok());
        assert_eq!(response(1100.into()).into_outcome(VERIFY_SUCCESS), OtpOutcome::ok());
    }

    #[test]
    fn success_codes_are_endpoint_specific() {
        let outcome = response("1100".into()).into_outcome(GENERATE_SUCCESS);
        assert!(!outcome.success);
        let outcome = response("1000".into()).into_outcome(VERIFY_SUCCESS);
        assert!(!outcome.success);
    }

    #[test]
    fn known_failure_codes_are_described() {
        let outcome = response("1104".into()).into_outcome(VERIFY_SUCCESS);
        assert_eq!(outcome, OtpOutcome::failed("Invalid verification code."));

        let outcome = response("1003".into()).into_outcome(GENERATE_SUCCESS);
        assert_eq!(outcome.error.as_deref(), Some("Insufficient SMS balance."));
    }

    #[test]
    fn unknown_or_missing_codes_fall_back_to_generic_message() {
        assert_eq!(describe_code("9999"), DEFAULT_FAILURE_MESSAGE);
        let outcome = response(serde_json::Value::Null).into_outcome(VERIFY_SUCCESS);
        assert_eq!(outcome.error.as_deref(), Some(DEFAULT_FAILURE_MESSAGE));
    }

    #[test]
    fn generate_request_uses_arkesel_field_names() {
        let body = GenerateRequest {
            expiry: 5,
            length: 6,
            medium: "sms",
            message: "Code: %otp_code%",
            number: "233241234567",
            sender_id: "PollenHive",
            kind: "numeric",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "numeric");
        assert_eq!(value["number"], "233241234567");
        assert_eq!(value["expiry"], 5);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ArkeselClient::new("key".into(), "Sender".into(), "https://sms.example.com/".into()).unwrap();
        assert_eq!(client.base_url, "https://sms.example.com");
    }
}
