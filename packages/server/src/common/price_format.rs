//! PKR price display formatting (Crore / Lac / K).

/// Format a PKR amount into the local convention: 10M+ as Crore,
/// 100K+ as Lac, 1K+ as K, otherwise the raw number.
pub fn format_price(price: i64) -> String {
    if price >= 10_000_000 {
        format!("{:.2} Crore", price as f64 / 10_000_000.0)
    } else if price >= 100_000 {
        format!("{:.2} Lac", price as f64 / 100_000.0)
    } else if price >= 1_000 {
        format!("{:.1}K", price as f64 / 1_000.0)
    } else {
        price.to_string()
    }
}

/// Format a price together with its pricing unit (monthly rent, per marla, ...).
pub fn format_price_with_unit(price: i64, unit: &str) -> String {
    let formatted = format_price(price);
    match unit {
        "monthly" => format!("PKR {}/month", formatted),
        "yearly" => format!("PKR {}/year", formatted),
        "per_marla" => format!("PKR {}/marla", formatted),
        "per_kanal" => format!("PKR {}/kanal", formatted),
        _ => format!("PKR {}", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_crore() {
        assert_eq!(format_price(50_000_000), "5.00 Crore");
        assert_eq!(format_price(12_500_000), "1.25 Crore");
    }

    #[test]
    fn test_format_price_lac() {
        assert_eq!(format_price(2_500_000), "25.00 Lac");
        assert_eq!(format_price(100_000), "1.00 Lac");
    }

    #[test]
    fn test_format_price_small() {
        assert_eq!(format_price(45_000), "45.0K");
        assert_eq!(format_price(500), "500");
    }

    #[test]
    fn test_format_price_with_unit() {
        assert_eq!(format_price_with_unit(50_000, "monthly"), "PKR 50.0K/month");
        assert_eq!(
            format_price_with_unit(50_000_000, "total"),
            "PKR 5.00 Crore"
        );
        assert_eq!(
            format_price_with_unit(1_500_000, "per_marla"),
            "PKR 15.00 Lac/marla"
        );
    }
}
