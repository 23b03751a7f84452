use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Offline,
    Online,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Channel::Offline => "offline",
            Channel::Online => "online",
        };
        write!(f, "{}", s)
    }
}

/// Stored status of a contribution.
///
/// Rejecting a contribution stores `Failed`. `Reversed` is a valid value for
/// records written by other systems but nothing here transitions into it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    #[default]
    Pending,
    Confirmed,
    Failed,
    Reversed,
}

impl std::fmt::Display for ContributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContributionStatus::Pending => "pending",
            ContributionStatus::Confirmed => "confirmed",
            ContributionStatus::Failed => "failed",
            ContributionStatus::Reversed => "reversed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Contribution {
    pub id: String,
    pub account_id: String,
    pub fund_id: String,
    pub member_id: Option<String>,
    pub amount: f64,
    pub channel: Channel,
    pub payment_method: Option<String>,
    pub status: ContributionStatus,
    pub date_received: DateTime<Utc>,
    pub comment: Option<String>,
    pub payment_reference: Option<String>,
    pub received_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate record submitted for intake. Every field is optional so that
/// missing values surface as validation errors rather than decode failures.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewContribution {
    pub account_id: Option<String>,
    pub fund_id: Option<String>,
    pub member_id: Option<String>,
    pub amount: Option<f64>,
    pub channel: Option<Channel>,
    pub payment_method: Option<String>,
    pub status: Option<ContributionStatus>,
    pub date_received: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub payment_reference: Option<String>,
    pub received_by_user_id: Option<String>,
}

/// Partial edit applied by `update_contribution`. Absent fields are left alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ContributionUpdate {
    pub member_id: Option<String>,
    pub amount: Option<f64>,
    pub channel: Option<Channel>,
    pub payment_method: Option<String>,
    pub status: Option<ContributionStatus>,
    pub date_received: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub payment_reference: Option<String>,
}

impl ContributionUpdate {
    pub fn apply(self, contribution: &mut Contribution) {
        if let Some(member_id) = self.member_id {
            contribution.member_id = Some(member_id);
        }
        if let Some(amount) = self.amount {
            contribution.amount = amount;
        }
        if let Some(channel) = self.channel {
            contribution.channel = channel;
        }
        if let Some(payment_method) = self.payment_method {
            contribution.payment_method = Some(payment_method);
        }
        if let Some(status) = self.status {
            contribution.status = status;
        }
        if let Some(date_received) = self.date_received {
            contribution.date_received = date_received;
        }
        if let Some(comment) = self.comment {
            contribution.comment = Some(comment);
        }
        if let Some(payment_reference) = self.payment_reference {
            contribution.payment_reference = Some(payment_reference);
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContributionFilter {
    pub account_id: String,
    pub fund_id: Option<String>,
    pub member_id: Option<String>,
    pub status: Option<ContributionStatus>,
}

impl ContributionFilter {
    pub fn matches(&self, contribution: &Contribution) -> bool {
        contribution.account_id == self.account_id
            && self.fund_id.as_ref().is_none_or(|f| *f == contribution.fund_id)
            && self
                .member_id
                .as_ref()
                .is_none_or(|m| contribution.member_id.as_ref() == Some(m))
            && self.status.is_none_or(|s| s == contribution.status)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PendingTotals {
    pub count: usize,
    pub total: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FundStats {
    pub fund_id: String,
    pub total_confirmed: f64,
    pub contributor_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MemberTotal {
    pub member_id: String,
    pub total_confirmed: f64,
    pub contribution_count: usize,
}
