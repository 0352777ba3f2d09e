use crate::domain::balance::BalanceSnapshot;
use crate::domain::payout::{NewPayout, Payout};
use crate::domain::ports::PayoutSourceBox;
use crate::domain::query::PayoutQuery;
use crate::error::{PayoutError, Result};

/// A page of payouts plus the metadata the dashboard needs to paginate.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutPage {
    pub payouts: Vec<Payout>,
    pub has_more: bool,
    /// Count of the filtered candidate set, not of the returned page.
    pub total_count: usize,
}

/// Applies the status filter and cursor pagination to an ordered candidate
/// set. Pure: identical inputs always yield the identical page.
///
/// An unmatched `starting_after` cursor restarts from the beginning of the
/// filtered sequence rather than failing: clients paging past a record that
/// was dropped upstream land on the first page again.
pub fn paginate(all: &[Payout], query: &PayoutQuery) -> Result<PayoutPage> {
    let limit = query.effective_limit() as usize;
    if limit == 0 {
        return Err(PayoutError::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }

    let filtered: Vec<&Payout> = all
        .iter()
        .filter(|payout| query.status.is_none_or(|status| payout.status == status))
        .collect();

    let start = match &query.starting_after {
        Some(cursor) => filtered
            .iter()
            .position(|payout| payout.id == *cursor)
            .map_or(0, |idx| idx + 1),
        None => 0,
    };

    let payouts: Vec<Payout> = filtered
        .iter()
        .skip(start)
        .take(limit)
        .map(|payout| (*payout).clone())
        .collect();

    Ok(PayoutPage {
        payouts,
        has_more: start + limit < filtered.len(),
        total_count: filtered.len(),
    })
}

/// The application service behind every payout endpoint.
///
/// Owns the source it was constructed with; swapping a live processor-backed
/// source for a fixture changes nothing about listing behavior.
pub struct PayoutQueryEngine {
    source: PayoutSourceBox,
}

impl PayoutQueryEngine {
    pub fn new(source: PayoutSourceBox) -> Self {
        Self { source }
    }

    /// Lists payouts: fetches the candidate set, then filters and pages it.
    pub async fn list_payouts(&self, query: &PayoutQuery) -> Result<PayoutPage> {
        let candidates = self.source.fetch_candidates(query).await?;
        paginate(&candidates, query)
    }

    pub async fn get_payout(&self, id: &str) -> Result<Option<Payout>> {
        self.source.fetch_payout(id).await
    }

    pub async fn balance(&self) -> Result<BalanceSnapshot> {
        self.source.fetch_balance().await
    }

    pub async fn create_payout(&self, new: NewPayout) -> Result<Payout> {
        self.source.create_payout(new).await
    }
}
