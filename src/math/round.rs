/// Rounds `x` to `digits` decimals, resolving exact ties to the even neighbour.
pub fn round(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(digits as i32);
    let y = x * scale;
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    z / scale
}

/// Fixed-point rendering of `round(x, digits)`. Negative zero prints as zero.
pub fn format_fixed(x: f64, digits: u32) -> String {
    let r = round(x, digits);
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{:.*}", digits as usize, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round(0.125, 2), 0.12);
        assert_eq!(round(0.375, 2), 0.38);
        assert_eq!(round(2.5, 0), 2.0);
        assert_eq!(round(-1.96, 2), -1.96);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(0.949_958, 4), "0.9500");
        assert_eq!(format_fixed(-0.000_01, 4), "0.0000");
        assert_eq!(format_fixed(-1.96, 2), "-1.96");
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
    }
}
