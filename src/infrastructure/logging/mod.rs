pub mod in_memory;

use crate::core::errors::PollenHiveError;
use crate::core::models::audit::AppLog;
use async_trait::async_trait;

/// Append-only record of business actions, separate from `tracing` output.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), PollenHiveError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, PollenHiveError>;
}
