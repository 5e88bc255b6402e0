use super::discount::{Discount, DiscountKind};
use super::money::Money;
use super::product::{CartItem, Product};
use super::quote::Quote;
use super::region::Region;
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// A shopping cart priced against a single region.
///
/// Items keep insertion order and are unique per product id. Discounts keep
/// insertion order and are all evaluated. None of the calculations validate
/// their inputs: negative prices, quantities or rates are priced as given, and
/// amounts beyond the `Decimal` range saturate rather than panic.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    discounts: Vec<Discount>,
    region: Region,
}

impl Cart {
    pub fn new(region: Region) -> Self {
        Self {
            items: Vec::new(),
            discounts: Vec::new(),
            region,
        }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// A product already in the cart (matched by id) has its quantity increased;
    /// the stored product data is the one from the first addition.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id() == product.id())
        {
            item.quantity = item.quantity.saturating_add(quantity);
            trace!(product = product.id(), quantity = item.quantity, "merged cart item");
            return;
        }

        self.items.push(CartItem::new(product, quantity));
    }

    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id() == product_id)
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Sum of `price × quantity` over all items.
    pub fn calculate_subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of `price × quantity` over the items of one category.
    pub fn category_subtotal(&self, category: &str) -> Money {
        self.items
            .iter()
            .filter(|item| item.product.category() == category)
            .map(CartItem::line_total)
            .sum()
    }

    /// Total discount for a cart whose pre-discount subtotal is `subtotal`.
    ///
    /// Every discount is gated on `subtotal` alone, never on a running total
    /// or a category subtotal. Contributions are added up as-is and may exceed
    /// the subtotal.
    pub fn calculate_discounts(&self, subtotal: Money) -> Money {
        let mut total = Money::ZERO;

        for discount in &self.discounts {
            if !discount.applies_to(subtotal) {
                debug!(
                    min_amount = %discount.min_amount,
                    %subtotal,
                    "discount skipped, subtotal below minimum"
                );
                continue;
            }

            total += match (discount.kind, discount.category.as_deref()) {
                (DiscountKind::Percentage(percent), None) => subtotal.percent(percent),
                (DiscountKind::Percentage(percent), Some(category)) => {
                    self.category_subtotal(category).percent(percent)
                }
                (DiscountKind::Fixed(amount), _) => amount,
            };
        }

        total
    }

    /// Sum of `weight × quantity` over all items.
    pub fn total_weight(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::line_weight)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Total weight priced at the region's shipping rate. Discounts don't
    /// affect shipping.
    pub fn calculate_shipping(&self) -> Money {
        self.region.shipping_rate * self.total_weight()
    }

    /// Tax on `amount` at the region's rate. The caller picks the base.
    pub fn calculate_tax(&self, amount: Money) -> Money {
        amount * self.region.tax_rate
    }

    /// Runs the whole pipeline: subtotal, discounts gated on that subtotal,
    /// shipping, then tax on the discounted subtotal plus shipping.
    pub fn quote(&self) -> Quote {
        let subtotal = self.calculate_subtotal();
        let discounts = self.calculate_discounts(subtotal);
        let after_discounts = subtotal - discounts;
        let shipping = self.calculate_shipping();
        let tax = self.calculate_tax(after_discounts + shipping);

        Quote {
            subtotal,
            discounts,
            shipping,
            tax,
            total: after_discounts + shipping + tax,
        }
    }

    /// Grand total: discounted subtotal plus shipping, with tax levied on both.
    pub fn calculate_total(&self) -> Money {
        self.quote().total
    }
}
