use crate::core::errors::PollenHiveError;
use crate::core::models::{
    account::Account,
    contribution::{Contribution, ContributionFilter},
    expense::Expense,
    fund::Fund,
    member::Member,
};
use async_trait::async_trait;

/// Table-scoped persistence. Lookups by id return `Ok(None)` when the row is
/// absent; `Err` is reserved for failures of the store itself.
///
/// Member uniqueness (phone, email, membership number per account) is the
/// store's responsibility: `insert_member` and `update_member` must reject
/// duplicates atomically with `DuplicatePhone`, `DuplicateEmail` or
/// `DuplicateMembershipNumber`. Phone numbers are matched in normalized form
/// (see `normalize_phone`).
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_account(&self, account: Account) -> Result<Account, PollenHiveError>;
    async fn get_account(&self, account_id: &str) -> Result<Option<Account>, PollenHiveError>;

    async fn save_fund(&self, fund: Fund) -> Result<Fund, PollenHiveError>;
    async fn get_fund(&self, fund_id: &str) -> Result<Option<Fund>, PollenHiveError>;
    async fn list_funds(&self, account_id: &str) -> Result<Vec<Fund>, PollenHiveError>;
    async fn delete_fund(&self, fund_id: &str) -> Result<(), PollenHiveError>;

    async fn insert_member(&self, member: Member) -> Result<Member, PollenHiveError>;
    async fn update_member(&self, member: Member) -> Result<Member, PollenHiveError>;
    async fn get_member(&self, member_id: &str) -> Result<Option<Member>, PollenHiveError>;
    async fn get_member_by_phone(&self, account_id: &str, phone: &str) -> Result<Option<Member>, PollenHiveError>;
    async fn list_members(&self, account_id: &str) -> Result<Vec<Member>, PollenHiveError>;
    async fn delete_member(&self, member_id: &str) -> Result<(), PollenHiveError>;

    async fn save_contribution(&self, contribution: Contribution) -> Result<Contribution, PollenHiveError>;
    async fn get_contribution(&self, contribution_id: &str) -> Result<Option<Contribution>, PollenHiveError>;
    async fn list_contributions(&self, filter: &ContributionFilter) -> Result<Vec<Contribution>, PollenHiveError>;
    async fn delete_contribution(&self, contribution_id: &str) -> Result<(), PollenHiveError>;

    async fn save_expense(&self, expense: Expense) -> Result<Expense, PollenHiveError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, PollenHiveError>;
    async fn list_expenses(&self, account_id: &str) -> Result<Vec<Expense>, PollenHiveError>;
    async fn delete_expense(&self, expense_id: &str) -> Result<(), PollenHiveError>;
}

pub mod in_memory;
