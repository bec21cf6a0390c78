//! Number formatting shared by the metric and recommendation sections.

/// Group digits in threes with commas: `150000` → `"150,000"`.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal percentage, or `N/A` when the rate is undefined.
#[must_use]
pub fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{rate:.2}%"),
        None => "N/A".to_string(),
    }
}

#[must_use]
pub fn score(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(150_000), "150,000");
        assert_eq!(thousands(12_345_678), "12,345,678");
        assert_eq!(thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(Some(10.33)), "10.33%");
        assert_eq!(percent(Some(250.0)), "250.00%");
        assert_eq!(percent(None), "N/A");
    }

    #[test]
    fn score_has_two_decimals() {
        assert_eq!(score(0.92), "0.92");
        assert_eq!(score(1.4), "1.40");
    }
}
