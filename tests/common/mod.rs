use paydash::domain::payout::{Currency, Payout, PayoutKind, PayoutMethod, PayoutStatus};

/// Builds a payout with the given id and status; the remaining fields are
/// boilerplate the pagination contract does not depend on.
pub fn payout(id: &str, status: PayoutStatus) -> Payout {
    Payout {
        id: id.to_string(),
        created: 1_700_000_000,
        arrival_date: Some(1_700_172_800),
        status,
        destination: format!("ba_fixture{id}"),
        amount: 1050u32.into(),
        currency: Currency::new("usd"),
        method: PayoutMethod::Standard,
        source_type: PayoutKind::Card,
        r#type: PayoutKind::BankAccount,
        description: None,
        statement_descriptor: None,
    }
}

pub fn paid_payouts(n: usize) -> Vec<Payout> {
    (1..=n)
        .map(|i| payout(&i.to_string(), PayoutStatus::Paid))
        .collect()
}
