use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax and shipping terms of a delivery region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    /// Fraction of the taxable amount, e.g. `0.20` for 20%.
    pub tax_rate: Decimal,
    /// Cost per unit of weight.
    pub shipping_rate: Money,
}

impl Region {
    pub fn new(code: impl Into<String>, tax_rate: Decimal, shipping_rate: Money) -> Self {
        Self {
            code: code.into(),
            tax_rate,
            shipping_rate,
        }
    }
}
