use super::money::Money;
use rust_decimal::Decimal;

/// A catalogue product as it enters a cart.
///
/// Fields are private so a product can't change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
    weight: Decimal,
    category: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        weight: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            weight,
            category: category.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Unit weight, in the same unit the region's shipping rate is quoted in.
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A product line in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// `price × quantity`
    pub fn line_total(&self) -> Money {
        self.product.price() * Decimal::from(self.quantity)
    }

    /// `weight × quantity`, saturating like [`Money`].
    pub fn line_weight(&self) -> Decimal {
        self.product.weight().saturating_mul(Decimal::from(self.quantity))
    }
}
