use super::money::Money;
use super::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// Lifecycle of a payout. `Processed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutStatus {
    Pending,
    Processed { at: DateTime<Utc> },
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Processed { .. } => "processed",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PayoutStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoutError {
    #[error("invalid currency: payout is in {expected}, transaction is in {found}")]
    InvalidCurrency { expected: String, found: String },
    #[error("invalid status: payout is already {0}")]
    InvalidStatus(PayoutStatus),
}

/// A batch of same-currency transactions paid out together.
///
/// `total_amount` is kept equal to the sum of the transaction amounts; the only
/// way in is [`Payout::add_transaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    id: String,
    transactions: Vec<Transaction>,
    total_amount: Money,
    currency: String,
    status: PayoutStatus,
    created_at: DateTime<Utc>,
}

impl Payout {
    pub fn new(id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::new_at(id, currency, Utc::now())
    }

    pub fn new_at(
        id: impl Into<String>,
        currency: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            transactions: Vec::new(),
            total_amount: Money::ZERO,
            currency: currency.into(),
            status: PayoutStatus::Pending,
            created_at,
        }
    }

    /// Appends a transaction and adds its amount to the total.
    ///
    /// Rejects transactions in another currency, leaving the payout untouched.
    /// Processed payouts still accept transactions.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), PayoutError> {
        if transaction.currency != self.currency {
            return Err(PayoutError::InvalidCurrency {
                expected: self.currency.clone(),
                found: transaction.currency,
            });
        }

        if let PayoutStatus::Processed { .. } = self.status {
            warn!(
                payout = %self.id,
                transaction = %transaction.id,
                "adding transaction to a processed payout"
            );
        }

        self.total_amount += transaction.amount;
        self.transactions.push(transaction);
        Ok(())
    }

    /// Marks the payout processed now.
    pub fn process(&mut self) -> Result<(), PayoutError> {
        self.process_at(Utc::now())
    }

    /// Marks the payout processed at `at`. Only a pending payout can be processed.
    pub fn process_at(&mut self, at: DateTime<Utc>) -> Result<(), PayoutError> {
        if self.status != PayoutStatus::Pending {
            return Err(PayoutError::InvalidStatus(self.status));
        }

        self.status = PayoutStatus::Processed { at };
        info!(
            payout = %self.id,
            total = %self.total_amount,
            currency = %self.currency,
            "payout processed"
        );
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn status(&self) -> PayoutStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            PayoutStatus::Pending => None,
            PayoutStatus::Processed { at } => Some(at),
        }
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
