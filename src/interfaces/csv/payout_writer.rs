use crate::domain::money::Money;
use crate::domain::payout::{Payout, PayoutStatus};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PayoutRecord<'a> {
    id: &'a str,
    currency: &'a str,
    transactions: usize,
    total: Money,
    status: PayoutStatus,
    processed_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Payout> for PayoutRecord<'a> {
    fn from(payout: &'a Payout) -> Self {
        Self {
            id: payout.id(),
            currency: payout.currency(),
            transactions: payout.transaction_count(),
            total: payout.total_amount(),
            status: payout.status(),
            processed_at: payout.processed_at(),
        }
    }
}

/// Writes payout summaries as CSV with the header
/// `id,currency,transactions,total,status,processed_at`.
pub struct PayoutWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayoutWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_payout(&mut self, payout: &Payout) -> Result<()> {
        self.writer.serialize(PayoutRecord::from(payout))?;
        self.writer.flush()?;
        Ok(())
    }
}
