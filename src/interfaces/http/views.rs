use crate::application::engine::PayoutPage;
use crate::domain::balance::{BalanceSnapshot, FundsSlice};
use crate::domain::display::{format_short_date, mask_destination, next_business_day};
use crate::domain::payout::{Currency, Payout, PayoutKind, PayoutMethod, PayoutStatus};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Failure envelope: `{ "success": false, "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wire shape of a payout row. The only place the destination is masked and
/// the amount leaves minor units.
#[derive(Debug, Serialize)]
pub struct PayoutView {
    pub id: String,
    pub date: String,
    pub status: PayoutStatus,
    pub destination: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub method: PayoutMethod,
    pub source_type: PayoutKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    pub r#type: PayoutKind,
}

impl From<&Payout> for PayoutView {
    fn from(payout: &Payout) -> Self {
        Self {
            id: payout.id.clone(),
            date: format_short_date(payout.created),
            status: payout.status,
            destination: mask_destination(&payout.destination),
            amount: Decimal::new(payout.amount.value(), 2),
            currency: payout.currency.clone(),
            arrival_date: payout.arrival_date,
            description: payout.description.clone(),
            method: payout.method,
            source_type: payout.source_type,
            statement_descriptor: payout.statement_descriptor.clone(),
            r#type: payout.r#type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayoutListView {
    pub payouts: Vec<PayoutView>,
    pub has_more: bool,
    pub total_count: usize,
}

impl From<&PayoutPage> for PayoutListView {
    fn from(page: &PayoutPage) -> Self {
        Self {
            payouts: page.payouts.iter().map(PayoutView::from).collect(),
            has_more: page.has_more,
            total_count: page.total_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BalanceView {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::float")]
    pub pending: Decimal,
    #[serde(rename = "expectedArrival")]
    pub expected_arrival: String,
    pub available: Vec<FundsSlice>,
    pub livemode: bool,
    pub pending_payouts: Vec<FundsSlice>,
}

impl From<&BalanceSnapshot> for BalanceView {
    fn from(balance: &BalanceSnapshot) -> Self {
        Self {
            total: Decimal::new(balance.total.value(), 2),
            currency: balance.currency.clone(),
            pending: Decimal::new(balance.pending.value(), 2),
            expected_arrival: next_business_day(Utc::now().date_naive()),
            available: balance.available.clone(),
            livemode: balance.livemode,
            pending_payouts: balance.pending_payouts.clone(),
        }
    }
}

/// POST /payouts body. Fields stay optional so the handler can answer with
/// the contract's 400 message instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct CreatePayoutBody {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub method: Option<PayoutMethod>,
    pub description: Option<String>,
    pub statement_descriptor: Option<String>,
}
