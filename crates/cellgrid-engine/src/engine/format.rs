/// Format a computed value for display.
///
/// Whole numbers print without a decimal point; everything else keeps two
/// decimal places. Non-finite values never reach this function, since
/// evaluation rejects them.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        format!("{:.2}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_whole_numbers_drop_the_point() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_fractions_keep_two_places() {
        assert_eq!(format_number(0.5), "0.50");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_large_magnitudes_stay_numeric() {
        assert_eq!(format_number(1e12), "1000000000000.00");
    }
}
