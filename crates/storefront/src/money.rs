//! Rupee amounts stored as integer paise.
//!
//! Two display styles mirror what the storefront prints: [`Money::price`] for
//! unit prices (`Rs.250.00`) and the `Display` impl for line totals and sums
//! (`Rs.30,100`), which groups thousands and drops a zero fractional part.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

const PAISE_PER_RUPEE: u64 = 100;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_rupees(rupees: u64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    pub const fn from_paise(paise: u64) -> Self {
        Money(paise)
    }

    pub const fn whole_rupees(self) -> u64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Unit-price style: always two decimals, no grouping.
    pub fn price(self) -> String {
        format!(
            "Rs.{}.{:02}",
            self.whole_rupees(),
            self.0 % PAISE_PER_RUPEE
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paise = self.0 % PAISE_PER_RUPEE;
        write!(f, "Rs.{}", group_thousands(self.whole_rupees()))?;
        if paise == 0 {
            Ok(())
        } else if paise % 10 == 0 {
            write!(f, ".{}", paise / 10)
        } else {
            write!(f, ".{paise:02}")
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * u64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_style_has_two_decimals() {
        assert_eq!(Money::from_rupees(250).price(), "Rs.250.00");
        assert_eq!(Money::from_paise(12_345).price(), "Rs.123.45");
    }

    #[test]
    fn test_total_style_groups_thousands() {
        assert_eq!(Money::from_rupees(30_100).to_string(), "Rs.30,100");
        assert_eq!(Money::from_rupees(100).to_string(), "Rs.100");
        assert_eq!(Money::from_rupees(1_234_567).to_string(), "Rs.1,234,567");
        assert_eq!(Money::ZERO.to_string(), "Rs.0");
    }

    #[test]
    fn test_total_style_trims_fraction() {
        assert_eq!(Money::from_paise(150).to_string(), "Rs.1.5");
        assert_eq!(Money::from_paise(105).to_string(), "Rs.1.05");
    }

    #[test]
    fn test_arithmetic() {
        let line = Money::from_rupees(250) * 3;
        assert_eq!(line, Money::from_rupees(750));
        let sum: Money = [line, Money::from_rupees(100)].into_iter().sum();
        assert_eq!(sum.whole_rupees(), 850);
    }
}
