pub mod arkesel;
pub mod in_memory;

use crate::core::errors::PollenHiveError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a send or verify call as reported by the provider.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct OtpOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OtpOutcome {
    pub fn ok() -> Self {
        OtpOutcome { success: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        OtpOutcome {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Delivers and checks one-time passcodes by phone number.
///
/// `Err` means the provider could not be reached or answered garbage; a
/// provider-side rejection is an `Ok` outcome with `success == false`.
#[async_trait]
pub trait OtpProvider: Send + Sync {
    async fn send_otp(
        &self,
        phone: &str,
        message: &str,
        expiry_minutes: u32,
        length: u32,
    ) -> Result<OtpOutcome, PollenHiveError>;
    async fn verify_otp(&self, phone: &str, code: &str) -> Result<OtpOutcome, PollenHiveError>;
}

/// Strips spaces, dashes and a leading `+` from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.trim().chars().filter(|c| *c != ' ' && *c != '-').collect();
    match digits.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => digits,
    }
}
