use crate::domain::quote::Quote;
use std::fmt;

/// Plain-text rendering of a [`Quote`], one labelled amount per line.
pub struct QuoteReport<'a> {
    quote: &'a Quote,
    currency: &'a str,
}

impl<'a> QuoteReport<'a> {
    pub fn new(quote: &'a Quote, currency: &'a str) -> Self {
        Self { quote, currency }
    }
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = [
            ("Subtotal", self.quote.subtotal),
            ("Discounts", self.quote.discounts),
            ("Shipping", self.quote.shipping),
            ("Tax", self.quote.tax),
            ("Total", self.quote.total),
        ];
        writeln!(f, "Order details:")?;
        for (label, amount) in lines {
            writeln!(f, "{label}: {amount} {}", self.currency)?;
        }
        Ok(())
    }
}
