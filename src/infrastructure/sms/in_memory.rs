use crate::core::errors::PollenHiveError;
use crate::infrastructure::sms::arkesel::describe_code;
use crate::infrastructure::sms::{OtpOutcome, OtpProvider, normalize_phone};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct SentOtp {
    pub number: String,
    pub message: String,
    pub code: String,
}

/// Local stand-in for the SMS provider: codes are kept in memory instead of
/// being texted, and `%otp_code%` in the message is filled in.
#[derive(Clone, Default)]
pub struct InMemoryOtpProvider {
    pending: Arc<RwLock<HashMap<String, String>>>,
    sent: Arc<RwLock<Vec<SentOtp>>>,
}

impl InMemoryOtpProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outstanding code for a phone number, if one was sent and not yet used.
    pub async fn pending_code(&self, phone: &str) -> Option<String> {
        self.pending.read().await.get(&normalize_phone(phone)).cloned()
    }

    pub async fn sent_messages(&self) -> Vec<SentOtp> {
        self.sent.read().await.clone()
    }

    fn generate_code(length: u32) -> String {
        let digits: String = Uuid::new_v4()
            .as_u128()
            .to_string()
            .chars()
            .take(length as usize)
            .collect();
        format!("{:0>width$}", digits, width = length as usize)
    }
}

#[async_trait]
impl OtpProvider for InMemoryOtpProvider {
    async fn send_otp(
        &self,
        phone: &str,
        message: &str,
        expiry_minutes: u32,
        length: u32,
    ) -> Result<OtpOutcome, PollenHiveError> {
        let number = normalize_phone(phone);
        if number.is_empty() {
            return Ok(OtpOutcome::failed(describe_code("1005")));
        }
        if !message.contains("%otp_code%") {
            return Ok(OtpOutcome::failed(describe_code("1002")));
        }

        let code = Self::generate_code(length);
        let rendered = message
            .replace("%otp_code%", &code)
            .replace("%expiry%", &expiry_minutes.to_string());

        self.pending.write().await.insert(number.clone(), code.clone());
        self.sent.write().await.push(SentOtp {
            number,
            message: rendered,
            code,
        });
        Ok(OtpOutcome::ok())
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<OtpOutcome, PollenHiveError> {
        let number = normalize_phone(phone);
        let mut pending = self.pending.write().await;
        match pending.get(&number) {
            None => Ok(OtpOutcome::failed(describe_code("1103"))),
            Some(expected) if expected == code => {
                pending.remove(&number);
                Ok(OtpOutcome::ok())
            }
            Some(_) => Ok(OtpOutcome::failed(describe_code("1104"))),
        }
    }
}
