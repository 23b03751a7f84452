mod contribution_tests;
mod fund_tests;

use crate::config::OtpSettings;
use crate::core::models::{
    contribution::{Channel, NewContribution},
    fund::{Fund, NewFund},
    member::{Member, NewMember},
};
use crate::core::services::PollenHiveService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::sms::in_memory::InMemoryOtpProvider;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub type TestService = PollenHiveService<InMemoryLogging, InMemoryStorage, InMemoryOtpProvider>;

pub const ADMIN: &str = "admin-user";

pub fn create_test_service() -> TestService {
    create_test_service_with_otp().0
}

/// Service plus a handle on the OTP provider so tests can read issued codes.
pub fn create_test_service_with_otp() -> (TestService, InMemoryOtpProvider) {
    let otp = InMemoryOtpProvider::new();
    let service = PollenHiveService::new(
        InMemoryStorage::new(),
        InMemoryLogging::new(),
        otp.clone(),
        OtpSettings::default(),
        "test-secret".to_string(),
    );
    (service, otp)
}

pub async fn seed_fund(service: &TestService, account_id: &str, name: &str, default_amount: Option<f64>) -> Fund {
    service
        .create_fund(
            NewFund {
                account_id: Some(account_id.to_string()),
                name: Some(name.to_string()),
                default_amount,
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap()
}

pub async fn seed_member(service: &TestService, account_id: &str, name: &str, phone: &str) -> Member {
    service
        .create_member(
            NewMember {
                account_id: Some(account_id.to_string()),
                full_name: Some(name.to_string()),
                phone: Some(phone.to_string()),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap()
}

pub fn offline_contribution(account_id: &str, fund_id: &str, amount: f64) -> NewContribution {
    NewContribution {
        account_id: Some(account_id.to_string()),
        fund_id: Some(fund_id.to_string()),
        amount: Some(amount),
        channel: Some(Channel::Offline),
        ..Default::default()
    }
}
