use super::payout::{Currency, MinorUnits};
use serde::Serialize;

/// One per-currency bucket of funds as reported by the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundsSlice {
    pub amount: MinorUnits,
    pub currency: Currency,
}

/// Point-in-time account balance.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSnapshot {
    pub total: MinorUnits,
    pub pending: MinorUnits,
    pub currency: Currency,
    pub available: Vec<FundsSlice>,
    pub pending_payouts: Vec<FundsSlice>,
    pub livemode: bool,
}
