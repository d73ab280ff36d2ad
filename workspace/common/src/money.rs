//! GBP display formatting. Amounts arrive as raw floats and are scaled to
//! millions or billions for the tables and total lines.

/// Formats with automatic scale selection: billions at or above 1e9,
/// millions below, one decimal place either way.
pub fn format_gbp_auto(amount: f64) -> String {
    if amount >= 1e9 {
        format!("£{:.1}B", amount / 1e9)
    } else {
        format!("£{:.1}M", amount / 1e6)
    }
}

/// Formats in millions regardless of magnitude. The commitment breakdown
/// always reports in millions, so a value above a billion renders as
/// e.g. "£2500.0M".
pub fn format_gbp_millions(amount: f64) -> String {
    format!("£{:.1}M", amount / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scaling_uses_millions_below_a_billion() {
        assert_eq!(format_gbp_auto(950_000_000.0), "£950.0M");
        assert_eq!(format_gbp_auto(5_000_000.0), "£5.0M");
        assert_eq!(format_gbp_auto(0.0), "£0.0M");
    }

    #[test]
    fn test_auto_scaling_switches_to_billions_at_1e9() {
        assert_eq!(format_gbp_auto(1_000_000_000.0), "£1.0B");
        assert_eq!(format_gbp_auto(1_200_000_000.0), "£1.2B");
        assert_eq!(format_gbp_auto(2_500_000_000.0), "£2.5B");
    }

    #[test]
    fn test_fixed_millions_never_switches_scale() {
        assert_eq!(format_gbp_millions(5_000_000.0), "£5.0M");
        assert_eq!(format_gbp_millions(950_000_000.0), "£950.0M");
        assert_eq!(format_gbp_millions(2_500_000_000.0), "£2500.0M");
        assert_eq!(format_gbp_millions(0.0), "£0.0M");
    }
}
