use super::reader_builder;
use crate::domain::discount::{Discount, DiscountKind};
use crate::domain::money::Money;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Deserialize)]
struct DiscountRecord {
    kind: DiscountType,
    #[serde(with = "rust_decimal::serde::str")]
    value: Decimal,
    category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    min_amount: Option<Decimal>,
}

impl From<DiscountRecord> for Discount {
    fn from(record: DiscountRecord) -> Self {
        let kind = match record.kind {
            DiscountType::Percentage => DiscountKind::Percentage(record.value),
            DiscountType::Fixed => DiscountKind::Fixed(Money::new(record.value)),
        };
        Discount::new(
            kind,
            record.category,
            Money::new(record.min_amount.unwrap_or_default()),
        )
    }
}

/// Reads discount rules from CSV with the header
/// `kind, value, category, min_amount`.
///
/// `kind` is `percentage` or `fixed`. An empty category makes the rule
/// cart-wide and an empty minimum means zero.
pub struct DiscountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DiscountReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_builder().from_reader(source),
        }
    }

    pub fn discounts(self) -> impl Iterator<Item = Result<Discount>> {
        self.reader.into_deserialize::<DiscountRecord>().map(|result| {
            result
                .map(Discount::from)
                .map_err(PricingError::from)
        })
    }
}
