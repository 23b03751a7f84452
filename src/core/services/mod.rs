mod accounts;
mod contributions;
mod expenses;
mod funds;
mod members;
mod otp;

use crate::auth::jwt::{Claims, JwtService};
use crate::config::OtpSettings;
use crate::core::errors::PollenHiveError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;

pub struct PollenHiveService<L: LoggingService, S: Storage, O: OtpProvider> {
    storage: S,
    logging: L,
    otp: O,
    otp_settings: OtpSettings,
    jwt_service: JwtService,
}

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    pub fn new(storage: S, logging: L, otp: O, otp_settings: OtpSettings, jwt_secret: String) -> Self {
        PollenHiveService {
            storage,
            logging,
            otp,
            otp_settings,
            jwt_service: JwtService::new(jwt_secret),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, PollenHiveError> {
        self.jwt_service.validate_token(token)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, PollenHiveError> {
        self.logging.get_logs().await
    }

    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), PollenHiveError> {
        self.logging.log_action(action, details, user_id).await
    }
}

/// Trimmed value of an optional text field; blank counts as absent.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn valid_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|a| a.is_finite() && *a > 0.0)
}
