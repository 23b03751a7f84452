use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tenant boundary. Every other record carries an `account_id`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
}
