/// Formats an amount as whole dollars with thousands separators: `$12,500`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(3050.0), "$3,050");
        assert_eq!(format_currency(20_000.0), "$20,000");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_symbol() {
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }
}
