use serde::Serialize;
use thiserror::Error;

/// Coarse classification used by the API layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Internal,
}

#[derive(Error, Debug, Serialize)]
pub enum PollenHiveError {
    // Contribution intake
    #[error("Fund ID is required.")]
    FundIdRequired,
    #[error("Account ID is required.")]
    AccountIdRequired,
    #[error("Valid amount is required.")]
    InvalidAmount,
    #[error("Member does not belong to this account.")]
    MemberAccountMismatch,
    #[error("Fund does not belong to this account.")]
    FundAccountMismatch,
    #[error("Fund \"{0}\" is inactive and cannot accept contributions.")]
    FundInactive(String),
    #[error("Minimum contribution for {fund_name} is ${minimum}.")]
    BelowMinimumContribution { fund_name: String, minimum: f64 },
    #[error("Received by user ID is required for offline contributions.")]
    ReceivedByRequired,
    #[error("Status \"{0}\" cannot be set on a contribution.")]
    StatusNotAllowed(String),

    // Member intake
    #[error("Full name is required.")]
    FullNameRequired,
    #[error("Phone number is required.")]
    PhoneRequired,
    #[error("A member with this phone number already exists.")]
    DuplicatePhone,
    #[error("A member with this email already exists.")]
    DuplicateEmail,
    #[error("A member with this membership number already exists.")]
    DuplicateMembershipNumber,

    // Funds, expenses, accounts
    #[error("Fund name is required.")]
    FundNameRequired,
    #[error("Default amount must be greater than zero.")]
    InvalidDefaultAmount,
    #[error("Expense name is required.")]
    ExpenseNameRequired,
    #[error("Category is required.")]
    CategoryRequired,
    #[error("Created by user ID is required.")]
    CreatedByRequired,
    #[error("Account name is required.")]
    AccountNameRequired,

    // OTP
    #[error("Verification code is required.")]
    VerificationCodeRequired,

    // Lookups
    #[error("Contribution not found.")]
    ContributionNotFound,
    #[error("Member not found.")]
    MemberNotFound,
    #[error("Fund not found.")]
    FundNotFound,
    #[error("Expense not found.")]
    ExpenseNotFound,
    #[error("Account not found.")]
    AccountNotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("OTP provider error: {0}")]
    OtpProviderError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl PollenHiveError {
    pub fn kind(&self) -> ErrorKind {
        use PollenHiveError::*;
        match self {
            FundIdRequired
            | AccountIdRequired
            | InvalidAmount
            | MemberAccountMismatch
            | FundAccountMismatch
            | FundInactive(_)
            | BelowMinimumContribution { .. }
            | ReceivedByRequired
            | StatusNotAllowed(_)
            | FullNameRequired
            | PhoneRequired
            | FundNameRequired
            | InvalidDefaultAmount
            | ExpenseNameRequired
            | CategoryRequired
            | CreatedByRequired
            | AccountNameRequired
            | VerificationCodeRequired => ErrorKind::Validation,
            ContributionNotFound | MemberNotFound | FundNotFound | ExpenseNotFound | AccountNotFound => {
                ErrorKind::NotFound
            }
            DuplicatePhone | DuplicateEmail | DuplicateMembershipNumber => ErrorKind::Conflict,
            Unauthorized(_) => ErrorKind::Unauthorized,
            StorageError(_) | LoggingError(_) | OtpProviderError(_) | InternalServerError(_) => ErrorKind::Internal,
        }
    }
}
