//! Quote price estimator.
//!
//! Pure calculation used by the public quote page before a request is
//! submitted: a product tier fixes the unit price, the quantity picks a
//! discount bracket, and the total is the discounted base price.
//!
//! Brackets by quantity: 0-100 no discount, 101-500 5%, 501-1000 10%,
//! 1001-5000 15%, above 5000 20%. The brackets are contiguous, so every
//! non-negative quantity lands in exactly one.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Error returned when a tier string does not match any known tier.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown product tier: {0:?}")]
pub struct ParseTierError(String);

/// Product tier offered on the quote page, each with a fixed unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTier {
    /// Plain corrugated box.
    Standard,
    /// Corrugated box with a protective liner.
    Lined,
    /// Made-to-measure specialized box.
    Specialized,
}

impl ProductTier {
    /// Unit price in base currency units.
    #[must_use]
    pub const fn unit_price(self) -> u32 {
        match self {
            Self::Standard => 2500,
            Self::Lined => 3500,
            Self::Specialized => 5000,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Lined => "lined",
            Self::Specialized => "specialized",
        }
    }
}

impl std::fmt::Display for ProductTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "lined" => Ok(Self::Lined),
            "specialized" => Ok(Self::Specialized),
            _ => Err(ParseTierError(s.to_owned())),
        }
    }
}

/// Result of a price estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Unit price times quantity, before any discount.
    pub base_price: Decimal,
    /// Amount subtracted from the base price.
    pub discount: Decimal,
    /// Base price minus discount, rounded to whole currency units.
    pub total: Decimal,
    /// Discount rate applied, as a whole percentage.
    pub discount_percent: u32,
}

/// Discount rate for a quantity, as a whole percentage.
#[must_use]
pub const fn discount_percent(quantity: u32) -> u32 {
    match quantity {
        0..=100 => 0,
        101..=500 => 5,
        501..=1000 => 10,
        1001..=5000 => 15,
        _ => 20,
    }
}

/// Estimate the price of `quantity` boxes of the given tier.
///
/// Stateless and deterministic: the same inputs always produce the same
/// breakdown. Quantity 0 is accepted (0 falls in the no-discount bracket);
/// callers that treat 0 as nonsensical clamp before calling.
#[must_use]
pub fn estimate(tier: ProductTier, quantity: u32) -> PriceBreakdown {
    let percent = discount_percent(quantity);
    let rate = Decimal::new(i64::from(percent), 2);

    let base_price = Decimal::from(tier.unit_price()) * Decimal::from(quantity);
    let discount = (base_price * rate).normalize();
    let total = (base_price - discount)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    PriceBreakdown {
        base_price,
        discount,
        total,
        discount_percent: percent,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_100_no_discount() {
        let quote = estimate(ProductTier::Standard, 100);
        assert_eq!(quote.base_price, Decimal::from(250_000));
        assert_eq!(quote.discount, Decimal::ZERO);
        assert_eq!(quote.total, Decimal::from(250_000));
        assert_eq!(quote.discount_percent, 0);
    }

    #[test]
    fn test_standard_501_ten_percent() {
        let quote = estimate(ProductTier::Standard, 501);
        assert_eq!(quote.base_price, Decimal::from(1_252_500));
        assert_eq!(quote.discount, Decimal::from(125_250));
        assert_eq!(quote.total, Decimal::from(1_127_250));
        assert_eq!(quote.discount_percent, 10);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        for tier in [
            ProductTier::Standard,
            ProductTier::Lined,
            ProductTier::Specialized,
        ] {
            for quantity in [1, 100, 101, 500, 501, 1000, 1001, 5000, 5001, 80_000] {
                assert_eq!(estimate(tier, quantity), estimate(tier, quantity));
            }
        }
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(discount_percent(0), 0);
        assert_eq!(discount_percent(100), 0);
        assert_eq!(discount_percent(101), 5);
        assert_eq!(discount_percent(500), 5);
        assert_eq!(discount_percent(501), 10);
        assert_eq!(discount_percent(1000), 10);
        assert_eq!(discount_percent(1001), 15);
        assert_eq!(discount_percent(5000), 15);
        assert_eq!(discount_percent(5001), 20);
        assert_eq!(discount_percent(u32::MAX), 20);
    }

    #[test]
    fn test_rate_never_decreases_with_quantity() {
        let mut previous = discount_percent(0);
        for quantity in 1..=6000 {
            let rate = discount_percent(quantity);
            assert!(rate >= previous, "rate dropped at quantity {quantity}");
            previous = rate;
        }
    }

    #[test]
    fn test_total_increases_within_each_bracket() {
        let brackets = [(1, 100), (101, 500), (501, 1000), (1001, 5000), (5001, 5500)];
        for (low, high) in brackets {
            let mut previous = estimate(ProductTier::Lined, low).total;
            for quantity in (low + 1)..=high {
                let total = estimate(ProductTier::Lined, quantity).total;
                assert!(total > previous, "total did not grow at quantity {quantity}");
                previous = total;
            }
        }
    }

    #[test]
    fn test_tier_unit_prices() {
        assert_eq!(ProductTier::Standard.unit_price(), 2500);
        assert_eq!(ProductTier::Lined.unit_price(), 3500);
        assert_eq!(ProductTier::Specialized.unit_price(), 5000);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("lined".parse::<ProductTier>().unwrap(), ProductTier::Lined);
        assert!("premium".parse::<ProductTier>().is_err());
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let quote = estimate(ProductTier::Standard, 501);
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json["base_price"], "1252500");
        assert_eq!(json["discount"], "125250");
        assert_eq!(json["total"], "1127250");
        assert_eq!(json["discount_percent"], 10);
    }
}
