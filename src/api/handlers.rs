use crate::{
    api::models::*,
    auth::jwt::Claims,
    core::{
        errors::PollenHiveError,
        models::{
            account::Account,
            audit::AppLog,
            contribution::{Contribution, ContributionUpdate, FundStats, MemberTotal, NewContribution, PendingTotals},
            expense::{Expense, ExpenseUpdate, NewExpense},
            fund::{Fund, FundUpdate, NewFund},
            member::{MemberUpdate, MemberView, NewMember},
        },
        services::PollenHiveService,
    },
    infrastructure::{
        logging::in_memory::InMemoryLogging,
        sms::{OtpOutcome, arkesel::ArkeselClient},
        storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use std::sync::Arc;

pub type AppService = PollenHiveService<InMemoryLogging, InMemoryStorage, ArkeselClient>;

/// Validates the bearer token and exposes its claims to handlers.
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| PollenHiveError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| PollenHiveError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let protected_routes = Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/{account_id}", get(get_account))
        .route("/funds", get(list_funds).post(create_fund))
        .route("/funds/{fund_id}", get(get_fund).put(update_fund).delete(delete_fund))
        .route("/funds/{fund_id}/stats", get(get_fund_stats))
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{member_id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/{member_id}/total", get(get_member_total))
        .route("/contributions", get(list_contributions).post(create_contribution))
        .route("/contributions/pending-totals", get(get_pending_totals))
        .route(
            "/contributions/{contribution_id}",
            get(get_contribution).put(update_contribution).delete(delete_contribution),
        )
        .route("/contributions/{contribution_id}/confirm", post(confirm_contribution))
        .route("/contributions/{contribution_id}/reject", post(reject_contribution))
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{expense_id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .route("/logs", get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/public/accounts/{account_id}/funds", get(list_public_funds)) // Unprotected
        .route("/otp/send", post(send_otp))
        .route("/otp/verify", post(verify_otp))
        .merge(protected_routes)
        .with_state(service)
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Missing name", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_account(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Account>>), ApiError> {
    let account = service.create_account(req.name, req.slug, Some(&claims.sub)).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(account)))
}

#[utoipa::path(
    get,
    path = "/api/accounts/{account_id}",
    params(("account_id" = String, Path, description = "ID of the account")),
    responses(
        (status = 200, description = "Account retrieved", body = Account),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_account(
    State(service): State<Arc<AppService>>,
    Path(account_id): Path<String>,
) -> Result<Json<ApiResponse<Account>>, ApiError> {
    Ok(ApiResponse::data(service.get_account(&account_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/public/accounts/{account_id}/funds",
    params(("account_id" = String, Path, description = "ID of the account")),
    responses((status = 200, description = "Public, active funds of the account", body = Vec<Fund>))
)]
async fn list_public_funds(
    State(service): State<Arc<AppService>>,
    Path(account_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Fund>>>, ApiError> {
    Ok(ApiResponse::data(service.list_public_funds(&account_id).await?))
}

// ---------------------------------------------------------------------------
// OTP
// ---------------------------------------------------------------------------

fn otp_response(outcome: OtpOutcome, message: &str) -> Json<ApiResponse<()>> {
    Json(ApiResponse {
        success: outcome.success,
        data: None,
        message: outcome.success.then(|| message.to_string()),
        error: outcome.error,
    })
}

#[utoipa::path(
    post,
    path = "/api/otp/send",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Provider outcome", body = OtpOutcome),
        (status = 404, description = "No member with this phone", body = ErrorResponse)
    )
)]
async fn send_otp(
    State(service): State<Arc<AppService>>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let outcome = service.request_phone_verification(&req.account_id, &req.phone).await?;
    Ok(otp_response(outcome, "Verification code sent."))
}

#[utoipa::path(
    post,
    path = "/api/otp/verify",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Provider outcome", body = OtpOutcome),
        (status = 400, description = "Missing code", body = ErrorResponse),
        (status = 404, description = "No member with this phone", body = ErrorResponse)
    )
)]
async fn verify_otp(
    State(service): State<Arc<AppService>>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let outcome = service
        .confirm_phone_verification(&req.account_id, &req.phone, &req.code)
        .await?;
    Ok(otp_response(outcome, "Phone number verified."))
}

// ---------------------------------------------------------------------------
// Funds
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/funds",
    params(AccountQuery),
    responses(
        (status = 200, description = "Funds of the account", body = Vec<Fund>),
        (status = 400, description = "Missing account", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_funds(
    State(service): State<Arc<AppService>>,
    Query(query): Query<AccountQuery>,
) -> Result<Json<ApiResponse<Vec<Fund>>>, ApiError> {
    let account_id = query.account_id()?;
    Ok(ApiResponse::data(service.list_funds(&account_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/funds",
    request_body = NewFund,
    responses(
        (status = 201, description = "Fund created", body = Fund),
        (status = 400, description = "Invalid fund", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_fund(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NewFund>,
) -> Result<(StatusCode, Json<ApiResponse<Fund>>), ApiError> {
    let fund = service.create_fund(req, Some(&claims.sub)).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(fund, "Fund created.")))
}

#[utoipa::path(
    get,
    path = "/api/funds/{fund_id}",
    params(("fund_id" = String, Path, description = "ID of the fund")),
    responses(
        (status = 200, description = "Fund retrieved", body = Fund),
        (status = 404, description = "Fund not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_fund(
    State(service): State<Arc<AppService>>,
    Path(fund_id): Path<String>,
) -> Result<Json<ApiResponse<Fund>>, ApiError> {
    Ok(ApiResponse::data(service.get_fund(&fund_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/funds/{fund_id}",
    params(("fund_id" = String, Path, description = "ID of the fund")),
    request_body = FundUpdate,
    responses(
        (status = 200, description = "Fund updated", body = Fund),
        (status = 400, description = "Invalid change", body = ErrorResponse),
        (status = 404, description = "Fund not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn update_fund(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(fund_id): Path<String>,
    Json(req): Json<FundUpdate>,
) -> Result<Json<ApiResponse<Fund>>, ApiError> {
    let fund = service.update_fund(&fund_id, req, Some(&claims.sub)).await?;
    Ok(ApiResponse::with_message(fund, "Fund updated."))
}

#[utoipa::path(
    delete,
    path = "/api/funds/{fund_id}",
    params(("fund_id" = String, Path, description = "ID of the fund")),
    responses(
        (status = 200, description = "Fund deleted"),
        (status = 404, description = "Fund not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn delete_fund(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(fund_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    service.delete_fund(&fund_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::message("Fund deleted."))
}

#[utoipa::path(
    get,
    path = "/api/funds/{fund_id}/stats",
    params(("fund_id" = String, Path, description = "ID of the fund")),
    responses(
        (status = 200, description = "Confirmed total and contributor count", body = FundStats),
        (status = 404, description = "Fund not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_fund_stats(
    State(service): State<Arc<AppService>>,
    Path(fund_id): Path<String>,
) -> Result<Json<ApiResponse<FundStats>>, ApiError> {
    Ok(ApiResponse::data(service.fund_stats(&fund_id).await?))
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/members",
    params(AccountQuery),
    responses(
        (status = 200, description = "Members of the account", body = Vec<MemberView>),
        (status = 400, description = "Missing account", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_members(
    State(service): State<Arc<AppService>>,
    Query(query): Query<AccountQuery>,
) -> Result<Json<ApiResponse<Vec<MemberView>>>, ApiError> {
    let account_id = query.account_id()?;
    let members = service.list_members(&account_id).await?;
    Ok(ApiResponse::data(members.into_iter().map(MemberView::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = NewMember,
    responses(
        (status = 201, description = "Member added", body = MemberView),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Duplicate phone, email or membership number", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_member(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NewMember>,
) -> Result<(StatusCode, Json<ApiResponse<MemberView>>), ApiError> {
    let member = service.create_member(req, Some(&claims.sub)).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(member.into(), "Member added.")))
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "ID of the member")),
    responses(
        (status = 200, description = "Member retrieved", body = MemberView),
        (status = 404, description = "Member not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_member(
    State(service): State<Arc<AppService>>,
    Path(member_id): Path<String>,
) -> Result<Json<ApiResponse<MemberView>>, ApiError> {
    Ok(ApiResponse::data(service.get_member(&member_id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "ID of the member")),
    request_body = MemberUpdate,
    responses(
        (status = 200, description = "Member updated", body = MemberView),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 409, description = "Duplicate phone, email or membership number", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn update_member(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(member_id): Path<String>,
    Json(req): Json<MemberUpdate>,
) -> Result<Json<ApiResponse<MemberView>>, ApiError> {
    let member = service.update_member(&member_id, req, Some(&claims.sub)).await?;
    Ok(ApiResponse::with_message(member.into(), "Member updated."))
}

#[utoipa::path(
    delete,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "ID of the member")),
    responses(
        (status = 200, description = "Member removed"),
        (status = 404, description = "Member not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn delete_member(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(member_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    service.delete_member(&member_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::message("Member removed."))
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}/total",
    params(("member_id" = String, Path, description = "ID of the member")),
    responses(
        (status = 200, description = "Confirmed contributions of the member", body = MemberTotal),
        (status = 404, description = "Member not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_member_total(
    State(service): State<Arc<AppService>>,
    Path(member_id): Path<String>,
) -> Result<Json<ApiResponse<MemberTotal>>, ApiError> {
    Ok(ApiResponse::data(service.member_total(&member_id).await?))
}

// ---------------------------------------------------------------------------
// Contributions
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/contributions",
    params(ContributionQuery),
    responses(
        (status = 200, description = "Contributions, newest first", body = Vec<Contribution>),
        (status = 400, description = "Missing account", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_contributions(
    State(service): State<Arc<AppService>>,
    Query(query): Query<ContributionQuery>,
) -> Result<Json<ApiResponse<Vec<Contribution>>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(ApiResponse::data(service.list_contributions(&filter).await?))
}

#[utoipa::path(
    post,
    path = "/api/contributions",
    request_body = NewContribution,
    responses(
        (status = 201, description = "Contribution recorded", body = Contribution),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Fund or member not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_contribution(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NewContribution>,
) -> Result<(StatusCode, Json<ApiResponse<Contribution>>), ApiError> {
    let contribution = service.create_contribution(req, Some(&claims.sub)).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(contribution, "Contribution recorded."),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contributions/pending-totals",
    params(AccountQuery),
    responses(
        (status = 200, description = "Count and sum of pending contributions", body = PendingTotals),
        (status = 400, description = "Missing account", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_pending_totals(
    State(service): State<Arc<AppService>>,
    Query(query): Query<AccountQuery>,
) -> Result<Json<ApiResponse<PendingTotals>>, ApiError> {
    let account_id = query.account_id()?;
    Ok(ApiResponse::data(service.pending_totals(&account_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/contributions/{contribution_id}",
    params(("contribution_id" = String, Path, description = "ID of the contribution")),
    responses(
        (status = 200, description = "Contribution retrieved", body = Contribution),
        (status = 404, description = "Contribution not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_contribution(
    State(service): State<Arc<AppService>>,
    Path(contribution_id): Path<String>,
) -> Result<Json<ApiResponse<Contribution>>, ApiError> {
    Ok(ApiResponse::data(service.get_contribution(&contribution_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/contributions/{contribution_id}",
    params(("contribution_id" = String, Path, description = "ID of the contribution")),
    request_body = ContributionUpdate,
    responses(
        (status = 200, description = "Contribution updated", body = Contribution),
        (status = 404, description = "Contribution not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn update_contribution(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(contribution_id): Path<String>,
    Json(req): Json<ContributionUpdate>,
) -> Result<Json<ApiResponse<Contribution>>, ApiError> {
    let contribution = service
        .update_contribution(&contribution_id, req, Some(&claims.sub))
        .await?;
    Ok(ApiResponse::with_message(contribution, "Contribution updated."))
}

#[utoipa::path(
    delete,
    path = "/api/contributions/{contribution_id}",
    params(("contribution_id" = String, Path, description = "ID of the contribution")),
    responses(
        (status = 200, description = "Contribution deleted"),
        (status = 404, description = "Contribution not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn delete_contribution(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(contribution_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    service.delete_contribution(&contribution_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::message("Contribution deleted."))
}

#[utoipa::path(
    post,
    path = "/api/contributions/{contribution_id}/confirm",
    params(("contribution_id" = String, Path, description = "ID of the contribution")),
    responses(
        (status = 200, description = "Contribution confirmed", body = Contribution),
        (status = 404, description = "Contribution not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn confirm_contribution(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(contribution_id): Path<String>,
) -> Result<Json<ApiResponse<Contribution>>, ApiError> {
    let contribution = service.confirm_contribution(&contribution_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::with_message(contribution, "Contribution confirmed."))
}

#[utoipa::path(
    post,
    path = "/api/contributions/{contribution_id}/reject",
    params(("contribution_id" = String, Path, description = "ID of the contribution")),
    responses(
        (status = 200, description = "Contribution rejected (stored as failed)", body = Contribution),
        (status = 404, description = "Contribution not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn reject_contribution(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(contribution_id): Path<String>,
) -> Result<Json<ApiResponse<Contribution>>, ApiError> {
    let contribution = service.reject_contribution(&contribution_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::with_message(contribution, "Contribution rejected."))
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/expenses",
    params(ExpenseQuery),
    responses(
        (status = 200, description = "Expenses, newest first", body = Vec<Expense>),
        (status = 400, description = "Missing account", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_expenses(
    State(service): State<Arc<AppService>>,
    Query(query): Query<ExpenseQuery>,
) -> Result<Json<ApiResponse<Vec<Expense>>>, ApiError> {
    let member_visible_only = query.member_visible_only.unwrap_or(false);
    let account_id = AccountQuery {
        account_id: query.account_id,
    }
    .account_id()?;
    Ok(ApiResponse::data(
        service.list_expenses(&account_id, member_visible_only).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = NewExpense,
    responses(
        (status = 201, description = "Expense recorded", body = Expense),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_expense(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NewExpense>,
) -> Result<(StatusCode, Json<ApiResponse<Expense>>), ApiError> {
    let expense = service.create_expense(req, Some(&claims.sub)).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(expense, "Expense recorded.")))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{expense_id}",
    params(("expense_id" = String, Path, description = "ID of the expense")),
    responses(
        (status = 200, description = "Expense retrieved", body = Expense),
        (status = 404, description = "Expense not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_expense(
    State(service): State<Arc<AppService>>,
    Path(expense_id): Path<String>,
) -> Result<Json<ApiResponse<Expense>>, ApiError> {
    Ok(ApiResponse::data(service.get_expense(&expense_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{expense_id}",
    params(("expense_id" = String, Path, description = "ID of the expense")),
    request_body = ExpenseUpdate,
    responses(
        (status = 200, description = "Expense updated", body = Expense),
        (status = 400, description = "Invalid change", body = ErrorResponse),
        (status = 404, description = "Expense not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn update_expense(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(expense_id): Path<String>,
    Json(req): Json<ExpenseUpdate>,
) -> Result<Json<ApiResponse<Expense>>, ApiError> {
    let expense = service.update_expense(&expense_id, req, Some(&claims.sub)).await?;
    Ok(ApiResponse::with_message(expense, "Expense updated."))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(("expense_id" = String, Path, description = "ID of the expense")),
    responses(
        (status = 200, description = "Expense deleted"),
        (status = 404, description = "Expense not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn delete_expense(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(expense_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    service.delete_expense(&expense_id, Some(&claims.sub)).await?;
    Ok(ApiResponse::message("Expense deleted."))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Activity log", body = Vec<AppLog>)
    ),
    security(("Bearer" = []))
)]
async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<ApiResponse<Vec<AppLog>>>, ApiError> {
    Ok(ApiResponse::data(service.get_app_logs().await?))
}
