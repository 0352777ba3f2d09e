use crate::error::PayoutError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Paid,
    Pending,
    Failed,
    InTransit,
    Canceled,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMethod {
    #[default]
    Standard,
    Instant,
}

/// Destination kind, exposed on the wire as both `type` and `source_type`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PayoutKind {
    BankAccount,
    Card,
}

/// An amount in the currency's minor unit (cents for USD).
///
/// Monetary arithmetic stays in integer minor units everywhere; conversion
/// to major units happens once, at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MinorUnits(i64);

impl MinorUnits {
    pub fn new(value: i64) -> Result<Self, PayoutError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(PayoutError::Validation(
                "Amount must be non-negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for MinorUnits {
    type Error = PayoutError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u32> for MinorUnits {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

/// ISO 4217 currency code, case-insensitive on input and canonicalized to
/// uppercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().to_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            _ => None,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// A single disbursement from the merchant balance to an external account.
///
/// Deliberately not `Serialize`: the raw `destination` must never reach a
/// response body. The HTTP view layer owns the wire shape and masks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    pub id: String,
    /// Creation time, seconds since epoch.
    pub created: i64,
    /// Expected arrival, seconds since epoch. Absent until scheduled.
    pub arrival_date: Option<i64>,
    pub status: PayoutStatus,
    /// Raw account/card identifier as received from the source.
    pub destination: String,
    pub amount: MinorUnits,
    pub currency: Currency,
    pub method: PayoutMethod,
    pub source_type: PayoutKind,
    pub r#type: PayoutKind,
    pub description: Option<String>,
    pub statement_descriptor: Option<String>,
}

/// Request to create a payout. Amount is in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayout {
    pub amount: MinorUnits,
    pub currency: Currency,
    pub method: PayoutMethod,
    pub description: Option<String>,
    pub statement_descriptor: Option<String>,
}
