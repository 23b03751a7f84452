use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: String,
    pub account_id: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: String,
    pub phone_verified: bool,
    pub email: Option<String>,
    pub email_verified: bool,
    pub membership_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// A member counts as active once any contact channel is verified.
    pub fn is_active(&self) -> bool {
        self.phone_verified || self.email_verified
    }
}

/// API view of a member carrying the derived `is_active` flag.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MemberView {
    #[serde(flatten)]
    pub member: Member,
    pub is_active: bool,
}

impl From<Member> for MemberView {
    fn from(member: Member) -> Self {
        let is_active = member.is_active();
        MemberView { member, is_active }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewMember {
    pub account_id: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub membership_number: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MemberUpdate {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub membership_number: Option<String>,
    pub phone_verified: Option<bool>,
    pub email_verified: Option<bool>,
}
