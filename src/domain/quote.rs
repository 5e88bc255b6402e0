use super::money::Money;

/// The figures of one pricing run over a cart, see [`Cart::quote`].
///
/// [`Cart::quote`]: super::cart::Cart::quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub subtotal: Money,
    pub discounts: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl Quote {
    pub fn after_discounts(&self) -> Money {
        self.subtotal - self.discounts
    }
}
