use super::{PollenHiveService, present};
use crate::core::constants::ACCOUNT_CREATED;
use crate::core::errors::PollenHiveError;
use crate::core::models::account::Account;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    pub async fn create_account(
        &self,
        name: Option<String>,
        slug: Option<String>,
        acting_user_id: Option<&str>,
    ) -> Result<Account, PollenHiveError> {
        let name = present(&name).ok_or(PollenHiveError::AccountNameRequired)?;
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name,
            slug: present(&slug).map(|s| s.to_lowercase()),
            created_at: Utc::now(),
        };
        let stored = self.storage.save_account(account).await?;

        tracing::info!(account_id = %stored.id, "Account created");
        self.log_action(
            ACCOUNT_CREATED,
            json!({ "account_id": stored.id, "name": stored.name }),
            acting_user_id,
        )
        .await?;
        Ok(stored)
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Account, PollenHiveError> {
        self.storage
            .get_account(account_id)
            .await?
            .ok_or(PollenHiveError::AccountNotFound)
    }
}
