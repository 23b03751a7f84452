use super::{PollenHiveService, present, valid_amount};
use crate::core::constants::{
    CONTRIBUTION_CONFIRMED, CONTRIBUTION_DELETED, CONTRIBUTION_RECORDED, CONTRIBUTION_REJECTED, CONTRIBUTION_UPDATED,
};
use crate::core::errors::PollenHiveError;
use crate::core::models::contribution::{
    Channel, Contribution, ContributionFilter, ContributionStatus, ContributionUpdate, FundStats, MemberTotal,
    NewContribution, PendingTotals,
};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

/// Who recorded the contribution: the explicit value wins, the acting user
/// only stands in for offline contributions.
fn resolve_received_by(channel: Channel, explicit: Option<String>, acting_user_id: Option<&str>) -> Option<String> {
    explicit.or_else(|| match channel {
        Channel::Offline => acting_user_id.map(str::trim).filter(|id| !id.is_empty()).map(String::from),
        Channel::Online => None,
    })
}

/// Statuses a caller may set directly. `reversed` is never written.
fn settable_status(status: ContributionStatus) -> Result<ContributionStatus, PollenHiveError> {
    match status {
        ContributionStatus::Reversed => Err(PollenHiveError::StatusNotAllowed(status.to_string())),
        other => Ok(other),
    }
}

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    /// The member must exist and belong to the contribution's account.
    async fn check_member_account(&self, member_id: &str, account_id: &str) -> Result<(), PollenHiveError> {
        let member = self
            .storage
            .get_member(member_id)
            .await?
            .ok_or(PollenHiveError::MemberNotFound)?;
        if member.account_id != account_id {
            return Err(PollenHiveError::MemberAccountMismatch);
        }
        Ok(())
    }

    /// Validates and stores a new contribution.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// required ids and amount, the member (when given), the fund, its
    /// activity and minimum amount, and finally the receiver for offline
    /// contributions. Online contributions without a payment reference are
    /// accepted and stay pending until the payment webhook confirms them.
    pub async fn create_contribution(
        &self,
        input: NewContribution,
        acting_user_id: Option<&str>,
    ) -> Result<Contribution, PollenHiveError> {
        let fund_id = present(&input.fund_id).ok_or(PollenHiveError::FundIdRequired)?;
        let account_id = present(&input.account_id).ok_or(PollenHiveError::AccountIdRequired)?;
        let amount = valid_amount(input.amount).ok_or(PollenHiveError::InvalidAmount)?;

        let member_id = present(&input.member_id);
        if let Some(member_id) = &member_id {
            self.check_member_account(member_id, &account_id).await?;
        }

        let fund = self
            .storage
            .get_fund(&fund_id)
            .await?
            .ok_or(PollenHiveError::FundNotFound)?;
        if fund.account_id != account_id {
            return Err(PollenHiveError::FundAccountMismatch);
        }
        if !fund.is_active {
            return Err(PollenHiveError::FundInactive(fund.name));
        }
        if let Some(minimum) = fund.default_amount.filter(|m| *m > 0.0) {
            if amount < minimum {
                return Err(PollenHiveError::BelowMinimumContribution {
                    fund_name: fund.name,
                    minimum,
                });
            }
        }

        let channel = input.channel.unwrap_or_default();
        let received_by_user_id = resolve_received_by(channel, present(&input.received_by_user_id), acting_user_id);
        let payment_reference = present(&input.payment_reference);
        match channel {
            Channel::Offline if received_by_user_id.is_none() => {
                return Err(PollenHiveError::ReceivedByRequired);
            }
            Channel::Online if payment_reference.is_none() => {
                tracing::debug!(fund_id = %fund_id, "Online contribution without reference, awaiting webhook");
            }
            _ => {}
        }
        let status = settable_status(input.status.unwrap_or_default())?;

        let now = Utc::now();
        let contribution = Contribution {
            id: Uuid::new_v4().to_string(),
            account_id,
            fund_id,
            member_id,
            amount,
            channel,
            payment_method: present(&input.payment_method),
            status,
            date_received: input.date_received.unwrap_or(now),
            comment: present(&input.comment),
            payment_reference,
            received_by_user_id,
            created_at: now,
            updated_at: now,
        };

        let stored = self.storage.save_contribution(contribution).await?;
        tracing::info!(
            contribution_id = %stored.id,
            account_id = %stored.account_id,
            fund_id = %stored.fund_id,
            amount = stored.amount,
            channel = %stored.channel,
            "Contribution recorded"
        );

        self.log_action(
            CONTRIBUTION_RECORDED,
            json!({
                "contribution_id": stored.id,
                "account_id": stored.account_id,
                "fund_id": stored.fund_id,
                "member_id": stored.member_id,
                "amount": stored.amount,
                "channel": stored.channel.to_string(),
            }),
            acting_user_id,
        )
        .await?;

        Ok(stored)
    }

    pub async fn get_contribution(&self, contribution_id: &str) -> Result<Contribution, PollenHiveError> {
        self.storage
            .get_contribution(contribution_id)
            .await?
            .ok_or(PollenHiveError::ContributionNotFound)
    }

    pub async fn list_contributions(&self, filter: &ContributionFilter) -> Result<Vec<Contribution>, PollenHiveError> {
        if filter.account_id.trim().is_empty() {
            return Err(PollenHiveError::AccountIdRequired);
        }
        self.storage.list_contributions(filter).await
    }

    /// Marks a contribution confirmed. Confirming twice is allowed and leaves
    /// it confirmed. Totals are derived from confirmed rows at read time, so
    /// nothing else is touched here.
    pub async fn confirm_contribution(
        &self,
        contribution_id: &str,
        acting_user_id: Option<&str>,
    ) -> Result<Contribution, PollenHiveError> {
        self.set_status(
            contribution_id,
            ContributionStatus::Confirmed,
            CONTRIBUTION_CONFIRMED,
            acting_user_id,
        )
        .await
    }

    /// Rejects a contribution. The stored status is `failed`.
    pub async fn reject_contribution(
        &self,
        contribution_id: &str,
        acting_user_id: Option<&str>,
    ) -> Result<Contribution, PollenHiveError> {
        self.set_status(contribution_id, ContributionStatus::Failed, CONTRIBUTION_REJECTED, acting_user_id)
            .await
    }

    async fn set_status(
        &self,
        contribution_id: &str,
        status: ContributionStatus,
        action: &str,
        acting_user_id: Option<&str>,
    ) -> Result<Contribution, PollenHiveError> {
        let mut contribution = self.get_contribution(contribution_id).await?;
        let previous = contribution.status;
        contribution.status = status;
        contribution.updated_at = Utc::now();
        let updated = self.storage.save_contribution(contribution).await?;

        tracing::info!(contribution_id, from = %previous, to = %status, "Contribution status changed");
        self.log_action(
            action,
            json!({ "contribution_id": contribution_id, "from": previous.to_string(), "to": status.to_string() }),
            acting_user_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn update_contribution(
        &self,
        contribution_id: &str,
        mut changes: ContributionUpdate,
        acting_user_id: Option<&str>,
    ) -> Result<Contribution, PollenHiveError> {
        let mut contribution = self.get_contribution(contribution_id).await?;
        if changes.amount.is_some() {
            changes.amount = Some(valid_amount(changes.amount).ok_or(PollenHiveError::InvalidAmount)?);
        }
        changes.member_id = present(&changes.member_id);
        if let Some(member_id) = &changes.member_id {
            self.check_member_account(member_id, &contribution.account_id).await?;
        }
        if let Some(status) = changes.status {
            settable_status(status)?;
        }
        changes.apply(&mut contribution);
        contribution.updated_at = Utc::now();
        let updated = self.storage.save_contribution(contribution).await?;

        self.log_action(
            CONTRIBUTION_UPDATED,
            json!({ "contribution_id": contribution_id, "status": updated.status.to_string(), "amount": updated.amount }),
            acting_user_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn delete_contribution(
        &self,
        contribution_id: &str,
        acting_user_id: Option<&str>,
    ) -> Result<(), PollenHiveError> {
        let contribution = self.get_contribution(contribution_id).await?;
        self.storage.delete_contribution(contribution_id).await?;

        tracing::info!(contribution_id, "Contribution deleted");
        self.log_action(
            CONTRIBUTION_DELETED,
            json!({ "contribution_id": contribution_id, "fund_id": contribution.fund_id, "amount": contribution.amount }),
            acting_user_id,
        )
        .await?;
        Ok(())
    }

    pub async fn pending_totals(&self, account_id: &str) -> Result<PendingTotals, PollenHiveError> {
        let pending = self
            .list_contributions(&ContributionFilter {
                account_id: account_id.to_string(),
                status: Some(ContributionStatus::Pending),
                ..Default::default()
            })
            .await?;
        Ok(PendingTotals {
            count: pending.len(),
            total: pending.iter().map(|c| c.amount).sum(),
        })
    }

    /// Confirmed total and number of distinct identified contributors.
    /// Anonymous contributions count toward the total only.
    pub async fn fund_stats(&self, fund_id: &str) -> Result<FundStats, PollenHiveError> {
        let fund = self.get_fund(fund_id).await?;
        let confirmed = self
            .storage
            .list_contributions(&ContributionFilter {
                account_id: fund.account_id,
                fund_id: Some(fund.id.clone()),
                status: Some(ContributionStatus::Confirmed),
                ..Default::default()
            })
            .await?;

        let contributors: HashSet<&str> = confirmed.iter().filter_map(|c| c.member_id.as_deref()).collect();
        Ok(FundStats {
            fund_id: fund.id,
            total_confirmed: confirmed.iter().map(|c| c.amount).sum(),
            contributor_count: contributors.len(),
        })
    }

    pub async fn account_fund_stats(&self, account_id: &str) -> Result<Vec<FundStats>, PollenHiveError> {
        let funds = self.list_funds(account_id).await?;
        futures::future::try_join_all(funds.iter().map(|fund| self.fund_stats(&fund.id))).await
    }

    pub async fn member_total(&self, member_id: &str) -> Result<MemberTotal, PollenHiveError> {
        let member = self.get_member(member_id).await?;
        let confirmed = self
            .storage
            .list_contributions(&ContributionFilter {
                account_id: member.account_id,
                member_id: Some(member.id.clone()),
                status: Some(ContributionStatus::Confirmed),
                ..Default::default()
            })
            .await?;
        Ok(MemberTotal {
            member_id: member.id,
            total_confirmed: confirmed.iter().map(|c| c.amount).sum(),
            contribution_count: confirmed.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_receiver_wins() {
        let resolved = resolve_received_by(Channel::Offline, Some("clerk".into()), Some("admin"));
        assert_eq!(resolved.as_deref(), Some("clerk"));
        let resolved = resolve_received_by(Channel::Online, Some("clerk".into()), Some("admin"));
        assert_eq!(resolved.as_deref(), Some("clerk"));
    }

    #[test]
    fn acting_user_only_fills_offline() {
        assert_eq!(
            resolve_received_by(Channel::Offline, None, Some("admin")).as_deref(),
            Some("admin")
        );
        assert_eq!(resolve_received_by(Channel::Online, None, Some("admin")), None);
        assert_eq!(resolve_received_by(Channel::Offline, None, Some("  ")), None);
    }
}
