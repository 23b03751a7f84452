use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A named bucket contributions are recorded against.
///
/// When `default_amount` is set it acts as the minimum accepted
/// contribution, not a suggestion.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Fund {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub description: Option<String>,
    pub default_amount: Option<f64>,
    pub is_active: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewFund {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub default_amount: Option<f64>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct FundUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Absent leaves the minimum alone, `null` removes it.
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<f64>)]
    pub default_amount: Option<Option<f64>>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

// Keeps an explicit `null` distinct from a missing field.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
