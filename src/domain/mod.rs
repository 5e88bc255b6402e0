//! Domain model: cart pricing and payout aggregation.
//!
//! Everything here is synchronous and free of I/O. The two halves don't share
//! state; `money` is the only common ground.

pub mod cart;
pub mod discount;
pub mod money;
pub mod payout;
pub mod product;
pub mod quote;
pub mod region;
pub mod transaction;
