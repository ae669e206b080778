use crate::package::{CatalogError, PackageTier};

/// Tier multipliers applied on top of a package's standard price.
#[derive(Debug, Clone)]
pub struct TierPricing {
    pub deluxe_multiplier: f64,
    pub premium_multiplier: f64,
    /// Quotes are rounded to the nearest multiple of this amount (in rupees)
    pub rounding_rupees: i64,
}

impl Default for TierPricing {
    fn default() -> Self {
        Self {
            deluxe_multiplier: 1.35,
            premium_multiplier: 1.8,
            rounding_rupees: 100,
        }
    }
}

impl TierPricing {
    pub fn new(deluxe_multiplier: f64, premium_multiplier: f64, rounding_rupees: i64) -> Self {
        Self {
            deluxe_multiplier,
            premium_multiplier,
            rounding_rupees,
        }
    }

    /// Quote a tier price from the standard base amount in rupees.
    pub fn quote(&self, base_rupees: i64, tier: PackageTier) -> i64 {
        let multiplier = match tier {
            PackageTier::Standard => 1.0,
            PackageTier::Deluxe => self.deluxe_multiplier,
            PackageTier::Premium => self.premium_multiplier,
        };

        let raw = (base_rupees as f64 * multiplier) as i64;

        if self.rounding_rupees <= 1 {
            return raw;
        }

        // Round to the nearest rounding step
        let remainder = raw % self.rounding_rupees;
        if remainder >= self.rounding_rupees / 2 {
            raw + (self.rounding_rupees - remainder)
        } else {
            raw - remainder
        }
    }

    /// Quote from a display price ("₹25,000") back to a display price.
    pub fn quote_display(&self, price: &str, tier: PackageTier) -> Result<String, CatalogError> {
        let base = parse_price(price)?;
        Ok(format_price(self.quote(base, tier)))
    }
}

/// Parse a display price such as "₹25,000" into whole rupees.
pub fn parse_price(display: &str) -> Result<i64, CatalogError> {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(CatalogError::UnreadablePrice(display.to_string()));
    }
    digits
        .parse::<i64>()
        .map_err(|_| CatalogError::UnreadablePrice(display.to_string()))
}

/// Format whole rupees using Indian digit grouping: ₹25,000 and ₹1,25,000.
pub fn format_price(rupees: i64) -> String {
    let digits = rupees.abs().to_string();
    let mut grouped = String::new();

    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Head groups in pairs, right to left
        let head_bytes = head.as_bytes();
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head_bytes.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        grouped.push_str(&parts.join(","));
        grouped.push(',');
        grouped.push_str(tail);
    }

    if rupees < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_prices() {
        assert_eq!(parse_price("₹25,000").unwrap(), 25000);
        assert_eq!(parse_price("₹1,25,000").unwrap(), 125000);
        assert!(parse_price("call us").is_err());
    }

    #[test]
    fn formats_with_indian_grouping() {
        assert_eq!(format_price(900), "₹900");
        assert_eq!(format_price(25000), "₹25,000");
        assert_eq!(format_price(125000), "₹1,25,000");
        assert_eq!(format_price(12500000), "₹1,25,00,000");
    }

    #[test]
    fn standard_quote_is_the_base_price() {
        let pricing = TierPricing::default();
        assert_eq!(pricing.quote(25000, PackageTier::Standard), 25000);
    }

    #[test]
    fn tier_quotes_apply_multiplier_and_rounding() {
        let pricing = TierPricing::default();
        // 25000 * 1.35 = 33750, rounds up to 33800
        assert_eq!(pricing.quote(25000, PackageTier::Deluxe), 33800);
        // 25000 * 1.8 = 45000, already on the step
        assert_eq!(pricing.quote(25000, PackageTier::Premium), 45000);
    }

    #[test]
    fn display_quote_round_trips() {
        let pricing = TierPricing::default();
        let quoted = pricing.quote_display("₹25,000", PackageTier::Premium).unwrap();
        assert_eq!(quoted, "₹45,000");
    }
}
