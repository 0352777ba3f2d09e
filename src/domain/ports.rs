use super::balance::BalanceSnapshot;
use super::payout::{NewPayout, Payout};
use super::query::PayoutQuery;
use crate::error::Result;
use async_trait::async_trait;

/// Supplies payout and balance data to the query engine.
///
/// Implementations may sit on a live processor API or a static fixture; the
/// engine applies the same filtering and pagination contract either way.
#[async_trait]
pub trait PayoutSource: Send + Sync {
    /// Returns the ordered candidate set for a listing. Order is trusted as
    /// received (newest first); the engine never re-sorts.
    async fn fetch_candidates(&self, query: &PayoutQuery) -> Result<Vec<Payout>>;

    async fn fetch_payout(&self, id: &str) -> Result<Option<Payout>>;

    async fn fetch_balance(&self) -> Result<BalanceSnapshot>;

    /// Submits a payout for creation. The created record is returned but the
    /// source is free not to retain it.
    async fn create_payout(&self, new: NewPayout) -> Result<Payout>;
}

pub type PayoutSourceBox = Box<dyn PayoutSource>;
