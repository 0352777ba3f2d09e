use crate::domain::balance::{BalanceSnapshot, FundsSlice};
use crate::domain::payout::{Currency, NewPayout, Payout, PayoutKind, PayoutMethod, PayoutStatus};
use crate::domain::ports::PayoutSource;
use crate::domain::query::PayoutQuery;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{Days, Utc};

const FIXTURE_DESTINATION: &str = "ba_mock00001234";

/// Fixture-backed payout source serving the demo data set.
///
/// Stands in for the live processor API; the engine cannot tell the
/// difference. Created payouts are returned but not retained (there is no
/// persistence layer behind the demo).
pub struct FixturePayoutSource {
    payouts: Vec<Payout>,
    balance: BalanceSnapshot,
}

impl FixturePayoutSource {
    /// Seeds the demo data set: ten paid payouts and the account balance.
    pub fn new() -> Self {
        let seed: [(&str, i64, u32); 10] = [
            ("1", 1_649_203_200, 1050),
            ("2", 1_661_817_600, 6050),
            ("3", 1_675_209_600, 5743),
            ("4", 1_660_089_600, 3391),
            ("5", 1_655_942_400, 950),
            ("6", 1_651_363_200, 51039),
            ("7", 1_672_099_200, 4950),
            ("8", 1_680_048_000, 2150),
            ("9", 1_655_769_600, 6050),
            ("10", 1_663_545_600, 1234),
        ];
        let payouts = seed
            .into_iter()
            .map(|(id, created, amount)| Payout {
                id: id.to_string(),
                created,
                arrival_date: Some(created),
                status: PayoutStatus::Paid,
                destination: FIXTURE_DESTINATION.to_string(),
                amount: amount.into(),
                currency: Currency::new("usd"),
                method: PayoutMethod::Standard,
                source_type: PayoutKind::Card,
                r#type: PayoutKind::BankAccount,
                description: None,
                statement_descriptor: None,
            })
            .collect();

        Self {
            payouts,
            balance: demo_balance(),
        }
    }

    /// Fixture over an arbitrary candidate set, for tests.
    pub fn with_payouts(payouts: Vec<Payout>) -> Self {
        Self {
            payouts,
            balance: demo_balance(),
        }
    }
}

impl Default for FixturePayoutSource {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_balance() -> BalanceSnapshot {
    BalanceSnapshot {
        total: 1_273_845u32.into(),
        pending: 80_000u32.into(),
        currency: Currency::new("usd"),
        available: vec![FundsSlice {
            amount: 1_273_845u32.into(),
            currency: Currency::new("usd"),
        }],
        pending_payouts: vec![FundsSlice {
            amount: 80_000u32.into(),
            currency: Currency::new("usd"),
        }],
        livemode: false,
    }
}

#[async_trait]
impl PayoutSource for FixturePayoutSource {
    async fn fetch_candidates(&self, _query: &PayoutQuery) -> Result<Vec<Payout>> {
        // The engine filters and pages; the fixture hands over everything.
        Ok(self.payouts.clone())
    }

    async fn fetch_payout(&self, id: &str) -> Result<Option<Payout>> {
        Ok(self.payouts.iter().find(|payout| payout.id == id).cloned())
    }

    async fn fetch_balance(&self) -> Result<BalanceSnapshot> {
        Ok(self.balance.clone())
    }

    async fn create_payout(&self, new: NewPayout) -> Result<Payout> {
        let now = Utc::now();
        let arrival = now + Days::new(2);
        Ok(Payout {
            id: format!("po_mock_{}", now.timestamp_millis()),
            created: now.timestamp(),
            arrival_date: Some(arrival.timestamp()),
            status: PayoutStatus::Pending,
            destination: FIXTURE_DESTINATION.to_string(),
            amount: new.amount,
            currency: new.currency,
            method: new.method,
            source_type: PayoutKind::Card,
            r#type: PayoutKind::BankAccount,
            description: new.description,
            statement_descriptor: new.statement_descriptor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payout::MinorUnits;

    #[tokio::test]
    async fn test_fixture_seeds_ten_paid_payouts_in_order() {
        let source = FixturePayoutSource::new();
        let payouts = source
            .fetch_candidates(&PayoutQuery::default())
            .await
            .unwrap();

        assert_eq!(payouts.len(), 10);
        assert_eq!(payouts[0].id, "1");
        assert_eq!(payouts[9].id, "10");
        assert!(
            payouts
                .iter()
                .all(|payout| payout.status == PayoutStatus::Paid)
        );
        assert_eq!(payouts[0].amount, MinorUnits::new(1050).unwrap());
        assert_eq!(payouts[5].amount, MinorUnits::new(51039).unwrap());
    }

    #[tokio::test]
    async fn test_fetch_payout_by_id() {
        let source = FixturePayoutSource::new();
        let payout = source.fetch_payout("3").await.unwrap().unwrap();
        assert_eq!(payout.id, "3");
        assert_eq!(payout.amount, MinorUnits::new(5743).unwrap());

        assert!(source.fetch_payout("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_balance_totals_stay_in_minor_units() {
        let source = FixturePayoutSource::new();
        let balance = source.fetch_balance().await.unwrap();
        assert_eq!(balance.total.value(), 1_273_845);
        assert_eq!(balance.pending.value(), 80_000);
        assert_eq!(balance.currency, Currency::new("USD"));
        assert!(!balance.livemode);
    }

    #[tokio::test]
    async fn test_created_payout_is_pending_and_not_retained() {
        let source = FixturePayoutSource::new();
        let new = NewPayout {
            amount: 2500u32.into(),
            currency: Currency::new("usd"),
            method: PayoutMethod::Standard,
            description: Some("demo".to_string()),
            statement_descriptor: None,
        };

        let created = source.create_payout(new).await.unwrap();
        assert!(created.id.starts_with("po_mock_"));
        assert_eq!(created.status, PayoutStatus::Pending);
        assert_eq!(created.amount.value(), 2500);
        assert_eq!(created.currency, Currency::new("USD"));
        let arrival = created.arrival_date.unwrap();
        assert_eq!(arrival - created.created, 2 * 24 * 60 * 60);

        let candidates = source
            .fetch_candidates(&PayoutQuery::default())
            .await
            .unwrap();
        assert_eq!(candidates.len(), 10);
    }
}
