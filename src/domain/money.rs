use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary amount in a single, implied currency.
///
/// Wraps `rust_decimal::Decimal` so prices, discounts and taxes never go through
/// binary floating point. The value is unconstrained: negative amounts are legal
/// and flow through every calculation unchanged. Arithmetic saturates at
/// `Decimal::MAX`/`Decimal::MIN` instead of panicking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Takes `percent` per cent of this amount, e.g. `10` yields a tenth.
    pub fn percent(self, percent: Decimal) -> Self {
        Self(self.0.saturating_mul(percent) / Decimal::ONE_HUNDRED)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Fixed-point rendering with two fractional digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

/// Scaling by a plain factor: quantities, weights, rates.
impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let m1 = Money::new(dec!(10.0));
        let m2 = Money::new(dec!(5.0));
        assert_eq!(m1 + m2, Money::new(dec!(15.0)));
        assert_eq!(m1 - m2, Money::new(dec!(5.0)));
        assert_eq!(m2 - m1, Money::new(dec!(-5.0)));
        assert_eq!(m1 * dec!(3), Money::new(dec!(30)));
    }

    #[test]
    fn test_money_percent() {
        assert_eq!(Money::new(dec!(330000)).percent(dec!(10)), Money::new(dec!(33000)));
        assert_eq!(Money::new(dec!(50)).percent(dec!(0)), Money::ZERO);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(dec!(1.5)), Money::new(dec!(2.25)), Money::new(dec!(-0.75))];
        assert_eq!(amounts.iter().sum::<Money>(), Money::new(dec!(3.0)));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let max = Money::new(Decimal::MAX);
        let min = Money::new(Decimal::MIN);
        assert_eq!(max + Money::new(dec!(1)), max);
        assert_eq!(min - Money::new(dec!(1)), min);
        assert_eq!(max * dec!(2), max);
        assert_eq!(max * dec!(-2), min);
        assert_eq!([max, max, min].iter().sum::<Money>(), max + min);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
        assert_eq!(max.percent(dec!(1000)), Money::new(Decimal::MAX / Decimal::ONE_HUNDRED));
    }

    #[test]
    fn test_money_display_is_fixed_point() {
        assert_eq!(Money::new(dec!(351480)).to_string(), "351480.00");
        assert_eq!(Money::new(dec!(0.5)).to_string(), "0.50");
        assert_eq!(Money::new(dec!(1.005)).to_string(), "1.00");
        assert_eq!(Money::new(dec!(-12.345)).to_string(), "-12.34");
    }
}
