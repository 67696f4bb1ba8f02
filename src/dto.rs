use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Cs,
    Operational,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cs => "cs",
            Role::Operational => "operational",
        }
    }
}

/// Staff account. Passwords are stored and compared as plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Processing,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Completed,
        PaymentStatus::Processing,
        PaymentStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: String,
    pub merchant_name: String,
    pub date: DateTime<Utc>,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_amount_2dp"
    )]
    pub amount: Decimal,
    pub status: PaymentStatus,
    #[serde(default)]
    pub reviewed: bool,
}

fn deserialize_amount_2dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer)
        .map(|dec| dec.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
}

impl SortKey {
    /// Anything other than `"amount"` sorts by date.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "amount" => SortKey::Amount,
            _ => SortKey::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `"asc"` is descending.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Parameters of a payment listing. Empty `status`/`search` disable that filter;
/// non-positive `page`/`size` fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub page: i64,
    pub size: i64,
    pub status: String,
    pub search: String,
    pub sort_by: SortKey,
    pub order_by: SortOrder,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListResult {
    pub total: usize,
    pub size: usize,
    pub page: usize,
    pub total_pages: usize,
    pub data: Vec<Payment>,
}

/// Status counts over the whole ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub completed: usize,
    pub processing: usize,
    pub failed: usize,
}
