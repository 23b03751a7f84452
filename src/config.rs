use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// Development-only fallback. Tokens signed with it can be forged by anyone.
pub const DEFAULT_JWT_SECRET: &str = "secret";

pub const DEFAULT_OTP_MESSAGE: &str = "Your PollenHive verification code is %otp_code%. It expires in %expiry% minutes.";

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub jwt_secret: String,
    pub arkesel_api_key: String,
    pub arkesel_sender_id: String,
    pub arkesel_base_url: String,
    pub otp_expiry_minutes: u32,
    pub otp_length: u32,
    pub otp_message_template: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("jwt_secret", &"<redacted>")
            .field("arkesel_api_key", &"<redacted>")
            .field("arkesel_sender_id", &self.arkesel_sender_id)
            .field("arkesel_base_url", &self.arkesel_base_url)
            .field("otp_expiry_minutes", &self.otp_expiry_minutes)
            .field("otp_length", &self.otp_length)
            .finish()
    }
}

/// OTP delivery settings handed to the service.
#[derive(Debug, Clone)]
pub struct OtpSettings {
    pub message_template: String,
    pub expiry_minutes: u32,
    pub length: u32,
}

impl Default for OtpSettings {
    fn default() -> Self {
        OtpSettings {
            message_template: DEFAULT_OTP_MESSAGE.to_string(),
            expiry_minutes: 5,
            length: 6,
        }
    }
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: parsed_or("PORT", 3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            request_timeout_secs: parsed_or("REQUEST_TIMEOUT_SECS", 30),
            jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            arkesel_api_key: env::var("ARKESEL_API_KEY").unwrap_or_default(),
            arkesel_sender_id: env::var("ARKESEL_SENDER_ID").unwrap_or_else(|_| "PollenHive".to_string()),
            arkesel_base_url: env::var("ARKESEL_BASE_URL").unwrap_or_else(|_| "https://sms.arkesel.com".to_string()),
            otp_expiry_minutes: parsed_or("OTP_EXPIRY_MINUTES", 5),
            otp_length: parsed_or("OTP_LENGTH", 6),
            otp_message_template: env::var("OTP_MESSAGE_TEMPLATE").unwrap_or_else(|_| DEFAULT_OTP_MESSAGE.to_string()),
        }
    }

    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    pub fn otp_settings(&self) -> OtpSettings {
        OtpSettings {
            message_template: self.otp_message_template.clone(),
            expiry_minutes: self.otp_expiry_minutes,
            length: self.otp_length,
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
