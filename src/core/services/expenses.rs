use super::{PollenHiveService, present, valid_amount};
use crate::core::constants::{EXPENSE_DELETED, EXPENSE_RECORDED, EXPENSE_UPDATED};
use crate::core::errors::PollenHiveError;
use crate::core::models::expense::{Expense, ExpenseUpdate, NewExpense};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    pub async fn create_expense(
        &self,
        input: NewExpense,
        acting_user_id: Option<&str>,
    ) -> Result<Expense, PollenHiveError> {
        let account_id = present(&input.account_id).ok_or(PollenHiveError::AccountIdRequired)?;
        let name = present(&input.name).ok_or(PollenHiveError::ExpenseNameRequired)?;
        let category = present(&input.category).ok_or(PollenHiveError::CategoryRequired)?;
        let amount = valid_amount(input.amount).ok_or(PollenHiveError::InvalidAmount)?;
        let created_by = present(&input.created_by)
            .or_else(|| present(&acting_user_id.map(String::from)))
            .ok_or(PollenHiveError::CreatedByRequired)?;

        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            account_id,
            name,
            category,
            date: input.date.unwrap_or_else(|| now.date_naive()),
            amount,
            created_by,
            notes: present(&input.notes),
            visible_to_members: input.visible_to_members.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        let stored = self.storage.save_expense(expense).await?;

        tracing::info!(expense_id = %stored.id, account_id = %stored.account_id, amount = stored.amount, "Expense recorded");
        self.log_action(
            EXPENSE_RECORDED,
            json!({ "expense_id": stored.id, "account_id": stored.account_id, "amount": stored.amount, "category": stored.category }),
            acting_user_id,
        )
        .await?;
        Ok(stored)
    }

    pub async fn get_expense(&self, expense_id: &str) -> Result<Expense, PollenHiveError> {
        self.storage.get_expense(expense_id).await?.ok_or(PollenHiveError::ExpenseNotFound)
    }

    /// Expenses of an account, newest first. `member_visible_only` restricts
    /// the list to what members may see.
    pub async fn list_expenses(&self, account_id: &str, member_visible_only: bool) -> Result<Vec<Expense>, PollenHiveError> {
        if account_id.trim().is_empty() {
            return Err(PollenHiveError::AccountIdRequired);
        }
        let expenses = self.storage.list_expenses(account_id).await?;
        Ok(expenses
            .into_iter()
            .filter(|e| !member_visible_only || e.visible_to_members)
            .collect())
    }

    pub async fn update_expense(
        &self,
        expense_id: &str,
        changes: ExpenseUpdate,
        acting_user_id: Option<&str>,
    ) -> Result<Expense, PollenHiveError> {
        let mut expense = self.get_expense(expense_id).await?;
        if changes.name.is_some() {
            expense.name = present(&changes.name).ok_or(PollenHiveError::ExpenseNameRequired)?;
        }
        if changes.category.is_some() {
            expense.category = present(&changes.category).ok_or(PollenHiveError::CategoryRequired)?;
        }
        if changes.amount.is_some() {
            expense.amount = valid_amount(changes.amount).ok_or(PollenHiveError::InvalidAmount)?;
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }
        if changes.notes.is_some() {
            expense.notes = present(&changes.notes);
        }
        if let Some(visible) = changes.visible_to_members {
            expense.visible_to_members = visible;
        }
        expense.updated_at = Utc::now();
        let updated = self.storage.save_expense(expense).await?;

        self.log_action(
            EXPENSE_UPDATED,
            json!({ "expense_id": expense_id, "amount": updated.amount }),
            acting_user_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn delete_expense(&self, expense_id: &str, acting_user_id: Option<&str>) -> Result<(), PollenHiveError> {
        let expense = self.get_expense(expense_id).await?;
        self.storage.delete_expense(expense_id).await?;

        self.log_action(
            EXPENSE_DELETED,
            json!({ "expense_id": expense_id, "amount": expense.amount }),
            acting_user_id,
        )
        .await?;
        Ok(())
    }
}
