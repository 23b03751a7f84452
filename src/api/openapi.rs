use utoipa::OpenApi;

use crate::{
    api::models::{CreateAccountRequest, ErrorResponse, SendOtpRequest, VerifyOtpRequest},
    core::models::{
        account::Account,
        audit::AppLog,
        contribution::{
            Channel, Contribution, ContributionStatus, ContributionUpdate, FundStats, MemberTotal, NewContribution,
            PendingTotals,
        },
        expense::{Expense, ExpenseUpdate, NewExpense},
        fund::{Fund, FundUpdate, NewFund},
        member::{Member, MemberUpdate, MemberView, NewMember},
    },
    infrastructure::sms::OtpOutcome,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_account,
        super::handlers::get_account,
        super::handlers::list_public_funds,
        super::handlers::send_otp,
        super::handlers::verify_otp,
        super::handlers::list_funds,
        super::handlers::create_fund,
        super::handlers::get_fund,
        super::handlers::update_fund,
        super::handlers::delete_fund,
        super::handlers::get_fund_stats,
        super::handlers::list_members,
        super::handlers::create_member,
        super::handlers::get_member,
        super::handlers::update_member,
        super::handlers::delete_member,
        super::handlers::get_member_total,
        super::handlers::list_contributions,
        super::handlers::create_contribution,
        super::handlers::get_pending_totals,
        super::handlers::get_contribution,
        super::handlers::update_contribution,
        super::handlers::delete_contribution,
        super::handlers::confirm_contribution,
        super::handlers::reject_contribution,
        super::handlers::list_expenses,
        super::handlers::create_expense,
        super::handlers::get_expense,
        super::handlers::update_expense,
        super::handlers::delete_expense,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateAccountRequest,
        SendOtpRequest,
        VerifyOtpRequest,
        ErrorResponse,
        Account,
        AppLog,
        Channel,
        ContributionStatus,
        Contribution,
        NewContribution,
        ContributionUpdate,
        PendingTotals,
        FundStats,
        MemberTotal,
        Expense,
        NewExpense,
        ExpenseUpdate,
        Fund,
        NewFund,
        FundUpdate,
        Member,
        MemberView,
        NewMember,
        MemberUpdate,
        OtpOutcome
    )),
    info(
        title = "PollenHive API",
        description = "Contributions, funds, members and expenses for community groups. \
                       Successful responses are wrapped in `{success, data, message}`.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
