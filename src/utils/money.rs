/// Signed dollar amount with two decimals: `+$2.50`, `-$12.00`.
pub fn format_amount(value: f64) -> String {
    // -0.004 would otherwise print as "-$0.00"
    let rounded = (value * 100.0).round() / 100.0;
    let sign = if rounded >= 0.0 { '+' } else { '-' };
    format!("{}${:.2}", sign, rounded.abs())
}

/// Axis labels skip the `+` so the zero line reads `$0`.
pub fn format_axis_amount(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.0}", value.abs())
    } else {
        format!("${:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_carry_an_explicit_sign() {
        assert_eq!(format_amount(2.5), "+$2.50");
        assert_eq!(format_amount(0.0), "+$0.00");
        assert_eq!(format_amount(-12.0), "-$12.00");
        assert_eq!(format_amount(-0.004), "+$0.00");
    }

    #[test]
    fn axis_amounts_are_whole_dollars() {
        assert_eq!(format_axis_amount(0.0), "$0");
        assert_eq!(format_axis_amount(-25.0), "-$25");
        assert_eq!(format_axis_amount(1250.4), "$1250");
    }
}
