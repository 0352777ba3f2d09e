use super::payout::PayoutStatus;
use serde::Deserialize;

/// Page size used when the caller does not supply a limit.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Filter and pagination parameters for a payout listing.
///
/// Built fresh from the query string on every call and discarded with the
/// response. The cursor is always client-supplied; no paging state lives on
/// the server.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PayoutQuery {
    pub status: Option<PayoutStatus>,
    pub limit: Option<u32>,
    /// Cursor: the page begins immediately after the payout with this id.
    pub starting_after: Option<String>,
    /// Accepted for wire compatibility; the listing path does not apply it.
    pub ending_before: Option<String>,
}

impl PayoutQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT)
    }
}
