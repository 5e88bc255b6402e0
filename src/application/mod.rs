//! Application layer orchestrating the domain model.
//!
//! `PayoutEngine` feeds a stream of transactions into a payout and keeps track
//! of the ones it had to turn away.

pub mod engine;
