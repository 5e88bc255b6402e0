use super::reader_builder;
use crate::domain::money::Money;
use crate::domain::product::Product;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    weight: Decimal,
    category: String,
    quantity: i64,
}

impl ItemRecord {
    fn into_line(self) -> (Product, i64) {
        let product = Product::new(
            self.id,
            self.name,
            Money::new(self.price),
            self.weight,
            self.category,
        );
        (product, self.quantity)
    }
}

/// Reads cart lines from CSV with the header
/// `id, name, price, weight, category, quantity`.
pub struct ItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ItemReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_builder().from_reader(source),
        }
    }

    /// Lazily yields `(product, quantity)` pairs, one per row.
    pub fn items(self) -> impl Iterator<Item = Result<(Product, i64)>> {
        self.reader.into_deserialize::<ItemRecord>().map(|result| {
            result
                .map(ItemRecord::into_line)
                .map_err(PricingError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, name, price, weight, category, quantity\n\
                    laptop-1, MacBook Pro, 150000, 2.0, electronics, 1\n\
                    phone-1, iPhone 15, 90000, 0.5, electronics, 2";
        let reader = ItemReader::new(data.as_bytes());
        let results: Vec<Result<(Product, i64)>> = reader.items().collect();

        assert_eq!(results.len(), 2);
        let (phone, quantity) = results[1].as_ref().unwrap();
        assert_eq!(phone.id(), "phone-1");
        assert_eq!(phone.name(), "iPhone 15");
        assert_eq!(phone.price(), Money::new(dec!(90000)));
        assert_eq!(phone.weight(), dec!(0.5));
        assert_eq!(phone.category(), "electronics");
        assert_eq!(*quantity, 2);
    }

    #[test]
    fn test_reader_integers_beyond_u64() {
        let data = "id, name, price, weight, category, quantity\n\
                    a, A, 100000000000000000000, 1, c, 10000000000\n\
                    b, B, 100000000000000000000.0, 1, c, 1";
        let reader = ItemReader::new(data.as_bytes());
        let results: Vec<Result<(Product, i64)>> = reader.items().collect();

        let (a, quantity) = results[0].as_ref().unwrap();
        assert_eq!(a.price(), Money::new(dec!(100000000000000000000)));
        assert_eq!(*quantity, 10_000_000_000);
        let (b, _) = results[1].as_ref().unwrap();
        assert_eq!(b.price(), a.price());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id, name, price, weight, category, quantity\n\
                    pen, Pen, cheap, 0.01, office, 1\n\
                    pen, Pen, 2.5, 0.01, office, -3";
        let reader = ItemReader::new(data.as_bytes());
        let results: Vec<Result<(Product, i64)>> = reader.items().collect();

        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().1, -3);
    }
}
