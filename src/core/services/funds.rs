use super::{PollenHiveService, present};
use crate::core::constants::{FUND_CREATED, FUND_DELETED, FUND_UPDATED};
use crate::core::errors::PollenHiveError;
use crate::core::models::fund::{Fund, FundUpdate, NewFund};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

fn check_default_amount(default_amount: Option<f64>) -> Result<(), PollenHiveError> {
    match default_amount {
        Some(amount) if !amount.is_finite() || amount <= 0.0 => Err(PollenHiveError::InvalidDefaultAmount),
        _ => Ok(()),
    }
}

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    pub async fn create_fund(&self, input: NewFund, acting_user_id: Option<&str>) -> Result<Fund, PollenHiveError> {
        let account_id = present(&input.account_id).ok_or(PollenHiveError::AccountIdRequired)?;
        let name = present(&input.name).ok_or(PollenHiveError::FundNameRequired)?;
        check_default_amount(input.default_amount)?;

        let now = Utc::now();
        let fund = Fund {
            id: Uuid::new_v4().to_string(),
            account_id,
            name,
            description: present(&input.description),
            default_amount: input.default_amount,
            is_active: input.is_active.unwrap_or(true),
            is_public: input.is_public.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        let stored = self.storage.save_fund(fund).await?;

        tracing::info!(fund_id = %stored.id, account_id = %stored.account_id, "Fund created");
        self.log_action(
            FUND_CREATED,
            json!({ "fund_id": stored.id, "account_id": stored.account_id, "name": stored.name }),
            acting_user_id,
        )
        .await?;
        Ok(stored)
    }

    pub async fn get_fund(&self, fund_id: &str) -> Result<Fund, PollenHiveError> {
        self.storage.get_fund(fund_id).await?.ok_or(PollenHiveError::FundNotFound)
    }

    pub async fn list_funds(&self, account_id: &str) -> Result<Vec<Fund>, PollenHiveError> {
        if account_id.trim().is_empty() {
            return Err(PollenHiveError::AccountIdRequired);
        }
        self.storage.list_funds(account_id).await
    }

    /// Funds shown on the account's public page.
    pub async fn list_public_funds(&self, account_id: &str) -> Result<Vec<Fund>, PollenHiveError> {
        let funds = self.list_funds(account_id).await?;
        Ok(funds.into_iter().filter(|f| f.is_public && f.is_active).collect())
    }

    pub async fn update_fund(
        &self,
        fund_id: &str,
        changes: FundUpdate,
        acting_user_id: Option<&str>,
    ) -> Result<Fund, PollenHiveError> {
        let mut fund = self.get_fund(fund_id).await?;
        if changes.name.is_some() {
            fund.name = present(&changes.name).ok_or(PollenHiveError::FundNameRequired)?;
        }
        if changes.description.is_some() {
            fund.description = present(&changes.description);
        }
        if let Some(default_amount) = changes.default_amount {
            check_default_amount(default_amount)?;
            fund.default_amount = default_amount;
        }
        if let Some(is_active) = changes.is_active {
            fund.is_active = is_active;
        }
        if let Some(is_public) = changes.is_public {
            fund.is_public = is_public;
        }
        fund.updated_at = Utc::now();
        let updated = self.storage.save_fund(fund).await?;

        self.log_action(
            FUND_UPDATED,
            json!({ "fund_id": fund_id, "is_active": updated.is_active, "is_public": updated.is_public }),
            acting_user_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn delete_fund(&self, fund_id: &str, acting_user_id: Option<&str>) -> Result<(), PollenHiveError> {
        let fund = self.get_fund(fund_id).await?;
        self.storage.delete_fund(fund_id).await?;

        tracing::info!(fund_id, "Fund deleted");
        self.log_action(FUND_DELETED, json!({ "fund_id": fund_id, "name": fund.name }), acting_user_id)
            .await?;
        Ok(())
    }
}
