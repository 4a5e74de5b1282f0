//! Pricing variants and monetary validation.
//!
//! Amounts are [`Decimal`] values normalized to two decimal places. Invalid
//! values (negative amounts, a minimum headcount below one) are refused by
//! the constructors; nothing downstream has to re-check a committed variant.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Commercial model attached to a proposal.
///
/// Switching variants replaces the whole value; fields of the previous
/// variant are discarded, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Pricing {
    /// No pricing stated in the proposal.
    #[default]
    None,
    /// One fixed engagement price.
    Fixed { amount: Decimal },
    /// Price per employee with a contractual minimum headcount.
    PerHead {
        price_per_head: Decimal,
        minimum_employees: u32,
    },
}

impl Pricing {
    /// Build a fixed-price variant, normalized to two decimal places.
    pub fn fixed(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::NegativeAmount(amount));
        }
        Ok(Self::Fixed {
            amount: normalize(amount),
        })
    }

    /// Build a per-head variant, normalized to two decimal places.
    pub fn per_head(price_per_head: Decimal, minimum_employees: u32) -> Result<Self, ValidationError> {
        if price_per_head.is_sign_negative() && !price_per_head.is_zero() {
            return Err(ValidationError::NegativeAmount(price_per_head));
        }
        if minimum_employees < 1 {
            return Err(ValidationError::MinimumEmployeesTooLow(minimum_employees));
        }
        Ok(Self::PerHead {
            price_per_head: normalize(price_per_head),
            minimum_employees,
        })
    }

    /// Re-check an externally constructed value (e.g. deserialized input).
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::None => Ok(()),
            Self::Fixed { amount } => {
                if amount.is_sign_negative() && !amount.is_zero() {
                    Err(ValidationError::NegativeAmount(*amount))
                } else {
                    Ok(())
                }
            }
            Self::PerHead {
                price_per_head,
                minimum_employees,
            } => {
                if price_per_head.is_sign_negative() && !price_per_head.is_zero() {
                    Err(ValidationError::NegativeAmount(*price_per_head))
                } else if *minimum_employees < 1 {
                    Err(ValidationError::MinimumEmployeesTooLow(*minimum_employees))
                } else {
                    Ok(())
                }
            }
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Pricing {
    /// Human-readable summary used on the configuration summary section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Not specified"),
            Self::Fixed { amount } => write!(f, "${}", format_amount(*amount)),
            Self::PerHead {
                price_per_head,
                minimum_employees,
            } => write!(
                f,
                "${} per employee (minimum {minimum_employees} employees)",
                format_amount(*price_per_head)
            ),
        }
    }
}

fn normalize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with two decimals and thousands separators: `1234.5` -> `1,234.50`.
fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", normalize(amount));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn fixed_rejects_negative_amount() {
        let err = Pricing::fixed(d("-5")).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAmount(d("-5")));
    }

    #[test]
    fn fixed_normalizes_to_two_decimals() {
        let pricing = Pricing::fixed(d("10.005")).unwrap();
        assert_eq!(
            pricing,
            Pricing::Fixed {
                amount: d("10.01")
            }
        );
    }

    #[test]
    fn per_head_requires_minimum_of_one() {
        let err = Pricing::per_head(d("25"), 0).unwrap_err();
        assert_eq!(err, ValidationError::MinimumEmployeesTooLow(0));
        assert!(Pricing::per_head(d("25"), 1).is_ok());
    }

    #[test]
    fn per_head_rejects_negative_price() {
        assert!(matches!(
            Pricing::per_head(d("-0.01"), 10),
            Err(ValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn display_formats_thousands_and_cents() {
        let fixed = Pricing::fixed(d("1234.5")).unwrap();
        assert_eq!(fixed.to_string(), "$1,234.50");

        let per_head = Pricing::per_head(d("25"), 100).unwrap();
        assert_eq!(
            per_head.to_string(),
            "$25.00 per employee (minimum 100 employees)"
        );

        assert_eq!(Pricing::None.to_string(), "Not specified");
    }

    #[test]
    fn serializes_with_original_wire_casing() {
        let per_head = Pricing::per_head(d("25"), 100).unwrap();
        let json = serde_json::to_value(&per_head).unwrap();
        assert_eq!(json["type"], "per-head");
        assert!(json.get("pricePerHead").is_some());
        assert!(json.get("minimumEmployees").is_some());
    }

    #[test]
    fn validate_matches_constructors() {
        let bad = Pricing::Fixed { amount: d("-1") };
        assert!(bad.validate().is_err());
        let good = Pricing::PerHead {
            price_per_head: d("3.00"),
            minimum_employees: 5,
        };
        assert!(good.validate().is_ok());
    }
}
