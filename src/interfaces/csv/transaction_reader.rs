use super::reader_builder;
use crate::domain::money::Money;
use crate::domain::transaction::Transaction;
use crate::error::{PricingError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    id: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        Transaction {
            id: record.id,
            amount: Money::new(record.amount),
            currency: record.currency,
            created_at: record.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Reads transactions from a CSV source.
///
/// The header is `id, amount, currency` with an optional RFC 3339
/// `created_at` column; rows without a timestamp are stamped at read time.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_builder().from_reader(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes transactions.
    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction>> {
        self.reader.into_deserialize::<TransactionRecord>().map(|result| {
            result
                .map(Transaction::from)
                .map_err(PricingError::from)
        })
    }
}
