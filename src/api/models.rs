use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::{ErrorKind, PollenHiveError};
use crate::core::models::contribution::{ContributionFilter, ContributionStatus};

/// Uniform JSON envelope for every response.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        })
    }

    pub fn with_message(data: T, message: &str) -> Json<Self> {
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.to_string()),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Json<Self> {
        Json(ApiResponse {
            success: true,
            data: None,
            error: None,
            message: Some(message.to_string()),
        })
    }
}

/// Shape of every failed response, for the API docs.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SendOtpRequest {
    pub account_id: String,
    pub phone: String,
}

#[derive(Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    pub account_id: String,
    pub phone: String,
    pub code: String,
}

#[derive(Deserialize, IntoParams)]
pub struct AccountQuery {
    pub account_id: Option<String>,
}

impl AccountQuery {
    pub fn account_id(self) -> Result<String, PollenHiveError> {
        self.account_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(PollenHiveError::AccountIdRequired)
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ContributionQuery {
    pub account_id: Option<String>,
    pub fund_id: Option<String>,
    pub member_id: Option<String>,
    pub status: Option<ContributionStatus>,
}

impl ContributionQuery {
    pub fn into_filter(self) -> Result<ContributionFilter, PollenHiveError> {
        let account_id = AccountQuery {
            account_id: self.account_id,
        }
        .account_id()?;
        Ok(ContributionFilter {
            account_id,
            fund_id: self.fund_id,
            member_id: self.member_id,
            status: self.status,
        })
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ExpenseQuery {
    pub account_id: Option<String>,
    pub member_visible_only: Option<bool>,
}

// Newtype wrapper for PollenHiveError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub PollenHiveError);

impl From<PollenHiveError> for ApiError {
    fn from(err: PollenHiveError) -> Self {
        ApiError(err)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let kind = self.0.kind();
        if kind == ErrorKind::Internal {
            tracing::error!(error = %self.0, "Request failed");
        }
        let body = ErrorResponse {
            success: false,
            error: self.0.to_string(),
        };
        (status_for(kind), Json(body)).into_response()
    }
}
