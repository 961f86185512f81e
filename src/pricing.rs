//! Promo codes and price arithmetic
//!
//! All amounts are whole rupiah.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Promo {
    /// 30% off the base price
    First30,
    /// Flat Rp 50.000 off
    Diskon50k,
}

impl Promo {
    pub const ALL: [Promo; 2] = [Promo::First30, Promo::Diskon50k];

    pub fn code(&self) -> &'static str {
        match self {
            Promo::First30 => "FIRST30",
            Promo::Diskon50k => "DISKON50K",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Promo::First30 => "Diskon 30%",
            Promo::Diskon50k => "Potongan 50rb",
        }
    }

    /// Match a user-entered code; surrounding whitespace and case are ignored
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn discount(&self, base: u64) -> u64 {
        match self {
            Promo::First30 => base * 3 / 10,
            Promo::Diskon50k => 50_000,
        }
    }
}

/// Discount a code grants on `base`; unknown codes grant nothing
pub fn discount_for(code: &str, base: u64) -> u64 {
    Promo::parse(code).map_or(0, |p| p.discount(base))
}

pub fn base_price(price: u64, duration: u32) -> u64 {
    price * u64::from(duration)
}

/// `price × duration − discount`, floored at zero
pub fn total(price: u64, duration: u32, discount: u64) -> u64 {
    base_price(price, duration).saturating_sub(discount)
}

/// Price breakdown shown on the review screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub base: u64,
    pub promo: Option<Promo>,
    pub discount: u64,
    pub total: u64,
}

impl Quote {
    pub fn new(price: u64, duration: u32, promo_code: Option<&str>) -> Self {
        let base = base_price(price, duration);
        let promo = promo_code.and_then(Promo::parse);
        let discount = promo.map_or(0, |p| p.discount(base)).min(base);
        Quote {
            base,
            promo,
            discount,
            total: base - discount,
        }
    }
}

/// Indonesian-style rupiah, e.g. `Rp 150.000`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first30_is_thirty_percent_of_base() {
        let quote = Quote::new(100_000, 2, Some("FIRST30"));
        assert_eq!(quote.base, 200_000);
        assert_eq!(quote.discount, 60_000);
        assert_eq!(quote.total, 140_000);
        assert_eq!(quote.promo, Some(Promo::First30));
    }

    #[test]
    fn test_diskon50k_is_flat() {
        assert_eq!(discount_for("DISKON50K", 120_000), 50_000);
        assert_eq!(discount_for("DISKON50K", 540_000), 50_000);
        assert_eq!(Quote::new(120_000, 1, Some("DISKON50K")).total, 70_000);
    }

    #[test]
    fn test_unknown_code_gives_no_discount() {
        assert_eq!(discount_for("GRATIS", 150_000), 0);
        assert_eq!(discount_for("", 150_000), 0);
        let quote = Quote::new(150_000, 2, Some("FIRST300"));
        assert_eq!(quote.promo, None);
        assert_eq!(quote.discount, 0);
        assert_eq!(quote.total, 300_000);
    }

    #[test]
    fn test_codes_ignore_case_and_whitespace() {
        assert_eq!(Promo::parse(" first30 "), Some(Promo::First30));
        assert_eq!(Promo::parse("Diskon50k"), Some(Promo::Diskon50k));
    }

    #[test]
    fn test_total_never_negative() {
        assert_eq!(total(30_000, 1, 50_000), 0);
        assert_eq!(Quote::new(30_000, 1, Some("DISKON50K")).total, 0);
        assert_eq!(total(100_000, 2, 30_000), 170_000);
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(50_000), "Rp 50.000");
        assert_eq!(format_rupiah(150_000), "Rp 150.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
    }
}
