use super::{PollenHiveService, present};
use crate::core::constants::{MEMBER_ADDED, MEMBER_REMOVED, MEMBER_UPDATED};
use crate::core::errors::PollenHiveError;
use crate::core::models::member::{Member, MemberUpdate, NewMember};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::OtpProvider;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    /// Adds a member to an account.
    ///
    /// Name and phone are required after trimming. Duplicate phone, email or
    /// membership number within the account is reported by the store as a
    /// conflict.
    pub async fn create_member(&self, input: NewMember, acting_user_id: Option<&str>) -> Result<Member, PollenHiveError> {
        let account_id = present(&input.account_id).ok_or(PollenHiveError::AccountIdRequired)?;
        let full_name = present(&input.full_name).ok_or(PollenHiveError::FullNameRequired)?;
        let phone = present(&input.phone).ok_or(PollenHiveError::PhoneRequired)?;

        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4().to_string(),
            account_id,
            full_name,
            date_of_birth: input.date_of_birth,
            phone,
            phone_verified: false,
            email: present(&input.email),
            email_verified: false,
            membership_number: present(&input.membership_number),
            created_at: now,
            updated_at: now,
        };

        let stored = self.storage.insert_member(member).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Member insert rejected");
        })?;

        tracing::info!(member_id = %stored.id, account_id = %stored.account_id, "Member added");
        self.log_action(
            MEMBER_ADDED,
            json!({ "member_id": stored.id, "account_id": stored.account_id, "full_name": stored.full_name }),
            acting_user_id,
        )
        .await?;
        Ok(stored)
    }

    pub async fn get_member(&self, member_id: &str) -> Result<Member, PollenHiveError> {
        self.storage.get_member(member_id).await?.ok_or(PollenHiveError::MemberNotFound)
    }

    pub async fn list_members(&self, account_id: &str) -> Result<Vec<Member>, PollenHiveError> {
        if account_id.trim().is_empty() {
            return Err(PollenHiveError::AccountIdRequired);
        }
        self.storage.list_members(account_id).await
    }

    pub async fn update_member(
        &self,
        member_id: &str,
        changes: MemberUpdate,
        acting_user_id: Option<&str>,
    ) -> Result<Member, PollenHiveError> {
        let mut member = self.get_member(member_id).await?;
        if changes.full_name.is_some() {
            member.full_name = present(&changes.full_name).ok_or(PollenHiveError::FullNameRequired)?;
        }
        if changes.phone.is_some() {
            let phone = present(&changes.phone).ok_or(PollenHiveError::PhoneRequired)?;
            if phone != member.phone {
                member.phone_verified = false;
            }
            member.phone = phone;
        }
        if changes.email.is_some() {
            let email = present(&changes.email);
            if email != member.email {
                member.email_verified = false;
            }
            member.email = email;
        }
        if changes.membership_number.is_some() {
            member.membership_number = present(&changes.membership_number);
        }
        if changes.date_of_birth.is_some() {
            member.date_of_birth = changes.date_of_birth;
        }
        if let Some(phone_verified) = changes.phone_verified {
            member.phone_verified = phone_verified;
        }
        if let Some(email_verified) = changes.email_verified {
            member.email_verified = email_verified;
        }
        member.updated_at = Utc::now();

        let updated = self.storage.update_member(member).await?;
        self.log_action(
            MEMBER_UPDATED,
            json!({ "member_id": member_id, "is_active": updated.is_active() }),
            acting_user_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn delete_member(&self, member_id: &str, acting_user_id: Option<&str>) -> Result<(), PollenHiveError> {
        let member = self.get_member(member_id).await?;
        self.storage.delete_member(member_id).await?;

        tracing::info!(member_id, "Member removed");
        self.log_action(
            MEMBER_REMOVED,
            json!({ "member_id": member_id, "account_id": member.account_id }),
            acting_user_id,
        )
        .await?;
        Ok(())
    }
}
