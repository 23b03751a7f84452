use crate::core::errors::PollenHiveError;
use crate::core::models::{
    account::Account,
    contribution::{Contribution, ContributionFilter},
    expense::Expense,
    fund::Fund,
    member::Member,
};
use crate::infrastructure::sms::normalize_phone;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    funds: Arc<RwLock<HashMap<String, Fund>>>,
    members: Arc<RwLock<HashMap<String, Member>>>,
    contributions: Arc<RwLock<HashMap<String, Contribution>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rejects `candidate` if another member of the same account already holds
/// its phone, email or membership number. Callers hold the write guard.
/// Phones are compared in normalized form.
fn check_member_unique(members: &HashMap<String, Member>, candidate: &Member) -> Result<(), PollenHiveError> {
    let phone = normalize_phone(&candidate.phone);
    let same_account = members
        .values()
        .filter(|m| m.account_id == candidate.account_id && m.id != candidate.id);

    for existing in same_account {
        if normalize_phone(&existing.phone) == phone {
            return Err(PollenHiveError::DuplicatePhone);
        }
        if candidate.email.is_some() && existing.email == candidate.email {
            return Err(PollenHiveError::DuplicateEmail);
        }
        if candidate.membership_number.is_some() && existing.membership_number == candidate.membership_number {
            return Err(PollenHiveError::DuplicateMembershipNumber);
        }
    }
    Ok(())
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_account(&self, account: Account) -> Result<Account, PollenHiveError> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn get_account(&self, account_id: &str) -> Result<Option<Account>, PollenHiveError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_id).cloned())
    }

    async fn save_fund(&self, fund: Fund) -> Result<Fund, PollenHiveError> {
        let mut funds = self.funds.write().await;
        funds.insert(fund.id.clone(), fund.clone());
        Ok(fund)
    }

    async fn get_fund(&self, fund_id: &str) -> Result<Option<Fund>, PollenHiveError> {
        let funds = self.funds.read().await;
        Ok(funds.get(fund_id).cloned())
    }

    async fn list_funds(&self, account_id: &str) -> Result<Vec<Fund>, PollenHiveError> {
        let funds = self.funds.read().await;
        let mut listed: Vec<Fund> = funds.values().filter(|f| f.account_id == account_id).cloned().collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    async fn delete_fund(&self, fund_id: &str) -> Result<(), PollenHiveError> {
        self.funds.write().await.remove(fund_id);
        Ok(())
    }

    async fn insert_member(&self, member: Member) -> Result<Member, PollenHiveError> {
        let mut members = self.members.write().await;
        if members.contains_key(&member.id) {
            return Err(PollenHiveError::StorageError(format!("Member {} already stored", member.id)));
        }
        check_member_unique(&members, &member)?;
        members.insert(member.id.clone(), member.clone());
        Ok(member)
    }

    async fn update_member(&self, member: Member) -> Result<Member, PollenHiveError> {
        let mut members = self.members.write().await;
        if !members.contains_key(&member.id) {
            return Err(PollenHiveError::MemberNotFound);
        }
        check_member_unique(&members, &member)?;
        members.insert(member.id.clone(), member.clone());
        Ok(member)
    }

    async fn get_member(&self, member_id: &str) -> Result<Option<Member>, PollenHiveError> {
        let members = self.members.read().await;
        Ok(members.get(member_id).cloned())
    }

    async fn get_member_by_phone(&self, account_id: &str, phone: &str) -> Result<Option<Member>, PollenHiveError> {
        let members = self.members.read().await;
        Ok(members
            .values()
            .find(|m| m.account_id == account_id && normalize_phone(&m.phone) == normalize_phone(phone))
            .cloned())
    }

    async fn list_members(&self, account_id: &str) -> Result<Vec<Member>, PollenHiveError> {
        let members = self.members.read().await;
        let mut listed: Vec<Member> = members.values().filter(|m| m.account_id == account_id).cloned().collect();
        listed.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(listed)
    }

    async fn delete_member(&self, member_id: &str) -> Result<(), PollenHiveError> {
        self.members.write().await.remove(member_id);
        Ok(())
    }

    async fn save_contribution(&self, contribution: Contribution) -> Result<Contribution, PollenHiveError> {
        let mut contributions = self.contributions.write().await;
        contributions.insert(contribution.id.clone(), contribution.clone());
        Ok(contribution)
    }

    async fn get_contribution(&self, contribution_id: &str) -> Result<Option<Contribution>, PollenHiveError> {
        let contributions = self.contributions.read().await;
        Ok(contributions.get(contribution_id).cloned())
    }

    async fn list_contributions(&self, filter: &ContributionFilter) -> Result<Vec<Contribution>, PollenHiveError> {
        let contributions = self.contributions.read().await;
        let mut listed: Vec<Contribution> = contributions.values().filter(|c| filter.matches(c)).cloned().collect();
        listed.sort_by(|a, b| b.date_received.cmp(&a.date_received));
        Ok(listed)
    }

    async fn delete_contribution(&self, contribution_id: &str) -> Result<(), PollenHiveError> {
        self.contributions.write().await.remove(contribution_id);
        Ok(())
    }

    async fn save_expense(&self, expense: Expense) -> Result<Expense, PollenHiveError> {
        let mut expenses = self.expenses.write().await;
        expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, PollenHiveError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.get(expense_id).cloned())
    }

    async fn list_expenses(&self, account_id: &str) -> Result<Vec<Expense>, PollenHiveError> {
        let expenses = self.expenses.read().await;
        let mut listed: Vec<Expense> = expenses.values().filter(|e| e.account_id == account_id).cloned().collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(listed)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), PollenHiveError> {
        self.expenses.write().await.remove(expense_id);
        Ok(())
    }
}
