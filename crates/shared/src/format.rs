//! Display formatting helpers shared by the CLI and desktop front ends.

/// Compact currency rendering: `$1.9M`, `$255K`, `$850`. Whole-number
/// renderings round half away from zero.
pub fn format_currency(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${}K", (amount / 1_000.0).round() as i64)
    } else {
        format!("${}", amount.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn formats_amounts_across_magnitude_boundaries() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(850.4), "$850");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1K");
        assert_eq!(format_currency(42_500.0), "$43K");
        assert_eq!(format_currency(255_000.0), "$255K");
        assert_eq!(format_currency(999_999.0), "$1000K");
        assert_eq!(format_currency(1_000_000.0), "$1.0M");
        assert_eq!(format_currency(1_912_500.0), "$1.9M");
    }
}
