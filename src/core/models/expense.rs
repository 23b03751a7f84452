use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub category: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub created_by: String,
    pub notes: Option<String>,
    pub visible_to_members: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewExpense {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub created_by: Option<String>,
    pub notes: Option<String>,
    pub visible_to_members: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub notes: Option<String>,
    pub visible_to_members: Option<bool>,
}
