// Activity log action names.
pub const ACCOUNT_CREATED: &str = "ACCOUNT_CREATED";

pub const FUND_CREATED: &str = "FUND_CREATED";
pub const FUND_UPDATED: &str = "FUND_UPDATED";
pub const FUND_DELETED: &str = "FUND_DELETED";

pub const MEMBER_ADDED: &str = "MEMBER_ADDED";
pub const MEMBER_UPDATED: &str = "MEMBER_UPDATED";
pub const MEMBER_REMOVED: &str = "MEMBER_REMOVED";
pub const PHONE_VERIFICATION_REQUESTED: &str = "PHONE_VERIFICATION_REQUESTED";
pub const PHONE_VERIFIED: &str = "PHONE_VERIFIED";

pub const CONTRIBUTION_RECORDED: &str = "CONTRIBUTION_RECORDED";
pub const CONTRIBUTION_CONFIRMED: &str = "CONTRIBUTION_CONFIRMED";
pub const CONTRIBUTION_REJECTED: &str = "CONTRIBUTION_REJECTED";
pub const CONTRIBUTION_UPDATED: &str = "CONTRIBUTION_UPDATED";
pub const CONTRIBUTION_DELETED: &str = "CONTRIBUTION_DELETED";

pub const EXPENSE_RECORDED: &str = "EXPENSE_RECORDED";
pub const EXPENSE_UPDATED: &str = "EXPENSE_UPDATED";
pub const EXPENSE_DELETED: &str = "EXPENSE_DELETED";
