use super::money::Money;
use rust_decimal::Decimal;

/// How a discount computes its amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountKind {
    /// Per cent of the cart subtotal, or of the category subtotal when the
    /// discount is restricted to a category.
    Percentage(Decimal),
    /// A flat amount. Category restrictions don't apply.
    Fixed(Money),
}

/// A discount rule attached to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub kind: DiscountKind,
    /// `None` applies cart-wide.
    pub category: Option<String>,
    /// The cart subtotal must reach this amount for the discount to apply.
    pub min_amount: Money,
}

impl Discount {
    pub fn new(kind: DiscountKind, category: Option<String>, min_amount: Money) -> Self {
        Self {
            kind,
            category: category.filter(|c| !c.is_empty()),
            min_amount,
        }
    }

    pub fn percentage(percent: Decimal) -> Self {
        Self::new(DiscountKind::Percentage(percent), None, Money::ZERO)
    }

    pub fn fixed(amount: Money) -> Self {
        Self::new(DiscountKind::Fixed(amount), None, Money::ZERO)
    }

    pub fn for_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    pub fn with_min_amount(mut self, min_amount: Money) -> Self {
        self.min_amount = min_amount;
        self
    }

    /// Whether a cart with this pre-discount subtotal qualifies.
    pub fn applies_to(&self, subtotal: Money) -> bool {
        subtotal >= self.min_amount
    }
}
