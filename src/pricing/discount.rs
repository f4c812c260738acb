//! Discount code resolution.
//!
//! Raw codes are parsed once into a closed [`DiscountCode`] set and the rule
//! table is a single exhaustive match over it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BLACK_FRIDAY_SPECIAL: &str = "BlackFridaySpecial";
const CURRYS_PREFIX: &str = "Currys";
const CAMPAIGN_3D: &str = "Campaign3D";

/// A discount code as recognized by checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountCode {
    /// No code, or an empty one.
    None,
    BlackFridaySpecial,
    /// Any code starting with `Currys`; keeps the full code as entered.
    Currys(String),
    Campaign3D,
    Unrecognized(String),
}

/// What a discount code grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTerms {
    pub rate: Decimal,
    pub shipping_override: Option<Decimal>,
}

/// How checkout treats a non-empty code it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCodePolicy {
    /// Store the code and grant nothing.
    #[default]
    Ignore,
    /// Fail the request and leave the order untouched.
    Reject,
}

impl DiscountCode {
    /// Parses a raw code. Matching is case-sensitive and first match wins,
    /// in the order: empty, `BlackFridaySpecial`, `Currys*`, `Campaign3D`.
    pub fn parse(code: Option<&str>) -> Self {
        match code {
            None | Some("") => Self::None,
            Some(BLACK_FRIDAY_SPECIAL) => Self::BlackFridaySpecial,
            Some(code) if code.starts_with(CURRYS_PREFIX) => Self::Currys(code.to_string()),
            Some(CAMPAIGN_3D) => Self::Campaign3D,
            Some(code) => Self::Unrecognized(code.to_string()),
        }
    }

    pub fn terms(&self) -> DiscountTerms {
        let (rate, shipping_override) = match self {
            Self::None | Self::Unrecognized(_) => (Decimal::ZERO, None),
            Self::BlackFridaySpecial => (dec!(0.10), Some(Decimal::ZERO)),
            Self::Currys(_) => (dec!(0.05), None),
            Self::Campaign3D => (dec!(0.12), Some(dec!(5.00))),
        };
        DiscountTerms { rate, shipping_override }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

/// Resolves a raw code straight to its terms.
pub fn resolve_discount(code: Option<&str>) -> DiscountTerms {
    DiscountCode::parse(code).terms()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing_codes_grant_nothing() {
        for code in [None, Some("")] {
            assert_eq!(DiscountCode::parse(code), DiscountCode::None);
            assert_eq!(
                resolve_discount(code),
                DiscountTerms { rate: Decimal::ZERO, shipping_override: None }
            );
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(
            resolve_discount(Some("BlackFridaySpecial")),
            DiscountTerms { rate: dec!(0.10), shipping_override: Some(dec!(0)) }
        );
        assert_eq!(
            resolve_discount(Some("Campaign3D")),
            DiscountTerms { rate: dec!(0.12), shipping_override: Some(dec!(5)) }
        );
        assert_eq!(
            resolve_discount(Some("Currys")),
            DiscountTerms { rate: dec!(0.05), shipping_override: None }
        );
    }

    #[test]
    fn test_currys_matches_on_prefix() {
        assert_eq!(
            DiscountCode::parse(Some("CurrysSummer2024")),
            DiscountCode::Currys("CurrysSummer2024".to_string())
        );
        assert!(DiscountCode::parse(Some("XCurrys")).is_unrecognized());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(DiscountCode::parse(Some("blackfridayspecial")).is_unrecognized());
        assert!(DiscountCode::parse(Some("campaign3d")).is_unrecognized());
        assert!(DiscountCode::parse(Some("currys10")).is_unrecognized());
    }

    #[test]
    fn test_exact_codes_do_not_match_with_suffix() {
        let code = DiscountCode::parse(Some("BlackFridaySpecial2"));
        assert!(code.is_unrecognized());
        assert_eq!(code.terms().rate, Decimal::ZERO);
        assert_eq!(code.terms().shipping_override, None);
    }
}
