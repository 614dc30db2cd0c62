use crate::calendar::parse_calendar_date;

pub const INVALID_DATE: &str = "Invalid Date";

/// Formats an amount as en-US dollars, e.g. `$5,000.00`. Negative amounts,
/// including ones that round to zero, keep their sign.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    // rounds from the exact binary value, so 1.115 (stored just below) is 1.11
    let text = format!("{:.2}", amount.abs());
    let (digits, cents) = text.split_at(text.len() - 3);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}{}", sign, grouped, cents)
}

/// Formats a stored campaign date as `Jan 1, 2024`.
pub fn format_display_date(text: &str) -> String {
    match parse_calendar_date(text) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
