use crate::domain::payout::{Payout, PayoutError};
use crate::domain::transaction::Transaction;
use tracing::warn;

/// Feeds transactions into a single payout.
///
/// `PayoutEngine` owns the payout while transactions stream in. Rejected
/// transactions are logged and counted, and the error is handed back so the
/// caller can decide whether to carry on.
pub struct PayoutEngine {
    payout: Payout,
    rejected: usize,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct Settlement {
    pub payout: Payout,
    pub rejected: usize,
}

impl PayoutEngine {
    /// Creates a new `PayoutEngine` around a payout, usually a fresh one.
    pub fn new(payout: Payout) -> Self {
        Self {
            payout,
            rejected: 0,
        }
    }

    /// Adds one transaction to the payout.
    pub fn process_transaction(&mut self, tx: Transaction) -> Result<(), PayoutError> {
        let tx_id = tx.id.clone();
        self.payout.add_transaction(tx).inspect_err(|e| {
            self.rejected += 1;
            warn!(
                payout = %self.payout.id(),
                transaction = %tx_id,
                "Error processing transaction: {e}"
            );
        })
    }

    pub fn payout(&self) -> &Payout {
        &self.payout
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Consumes the engine, processing the payout first when `settle` is set.
    pub fn finish(mut self, settle: bool) -> Result<Settlement, PayoutError> {
        if settle {
            self.payout.process()?;
        }
        Ok(Settlement {
            payout: self.payout,
            rejected: self.rejected,
        })
    }
}
