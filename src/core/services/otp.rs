use super::PollenHiveService;
use crate::core::constants::{PHONE_VERIFICATION_REQUESTED, PHONE_VERIFIED};
use crate::core::errors::PollenHiveError;
use crate::core::models::member::Member;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::sms::{OtpOutcome, OtpProvider, normalize_phone};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;

impl<L: LoggingService, S: Storage, O: OtpProvider> PollenHiveService<L, S, O> {
    async fn member_by_phone(&self, account_id: &str, phone: &str) -> Result<Member, PollenHiveError> {
        if account_id.trim().is_empty() {
            return Err(PollenHiveError::AccountIdRequired);
        }
        let number = normalize_phone(phone);
        if number.is_empty() {
            return Err(PollenHiveError::PhoneRequired);
        }
        self.storage
            .get_member_by_phone(account_id, &number)
            .await?
            .ok_or(PollenHiveError::MemberNotFound)
    }

    /// Texts a verification code to a member's phone.
    pub async fn request_phone_verification(&self, account_id: &str, phone: &str) -> Result<OtpOutcome, PollenHiveError> {
        let member = self.member_by_phone(account_id, phone).await?;
        let settings = &self.otp_settings;
        let outcome = self
            .otp
            .send_otp(
                &member.phone,
                &settings.message_template,
                settings.expiry_minutes,
                settings.length,
            )
            .await?;

        self.log_action(
            PHONE_VERIFICATION_REQUESTED,
            json!({ "member_id": member.id, "success": outcome.success }),
            None,
        )
        .await?;
        Ok(outcome)
    }

    /// Checks a code with the provider and marks the phone verified on success.
    pub async fn confirm_phone_verification(
        &self,
        account_id: &str,
        phone: &str,
        code: &str,
    ) -> Result<OtpOutcome, PollenHiveError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(PollenHiveError::VerificationCodeRequired);
        }
        let mut member = self.member_by_phone(account_id, phone).await?;
        let outcome = self.otp.verify_otp(&member.phone, code).await?;
        if !outcome.success {
            return Ok(outcome);
        }

        member.phone_verified = true;
        member.updated_at = Utc::now();
        let member = self.storage.update_member(member).await?;

        tracing::info!(member_id = %member.id, "Member phone verified");
        self.log_action(PHONE_VERIFIED, json!({ "member_id": member.id }), None).await?;
        Ok(outcome)
    }
}
