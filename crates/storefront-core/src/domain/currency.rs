//! Currency Display
//!
//! Prices are kept in the catalog's source currency and converted only
//! when rendered.

use serde::{Deserialize, Serialize};

/// Display conversion from the source currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Prefix written before the amount, no space
    pub symbol: String,
    /// Display units per source unit
    pub rate: f64,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            rate: 16_000.0,
        }
    }
}

impl CurrencyFormat {
    /// Convert and render with `.` grouping and `,` decimals (id-ID)
    ///
    /// At most three fraction digits are shown, trailing zeros dropped.
    pub fn format(&self, amount: f64) -> String {
        let value = amount * self.rate;
        let thousandths = (value.abs() * 1000.0).round() as u64;
        let whole = thousandths / 1000;
        let fraction = thousandths % 1000;

        let mut out = self.symbol.clone();
        if value < 0.0 && thousandths > 0 {
            out.push('-');
        }
        out.push_str(&group_thousands(whole));
        if fraction > 0 {
            let digits = format!("{:03}", fraction);
            out.push(',');
            out.push_str(digits.trim_end_matches('0'));
        }
        out
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        let idr = CurrencyFormat::default();
        assert_eq!(idr.format(109.95), "Rp1.759.200");
        assert_eq!(idr.format(22.3), "Rp356.800");
        assert_eq!(idr.format(0.0), "Rp0");
        assert_eq!(idr.format(40.0), "Rp640.000");
    }

    #[test]
    fn test_format_keeps_up_to_three_decimals() {
        let plain = CurrencyFormat {
            symbol: "$".to_string(),
            rate: 1.0,
        };
        assert_eq!(plain.format(1234.5), "$1.234,5");
        assert_eq!(plain.format(0.1234), "$0,123");
        assert_eq!(plain.format(999.0), "$999");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }
}
