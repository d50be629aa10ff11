//! Russian-locale display formatting for money and dates.

use chrono::NaiveDate;

/// Format whole rubles with non-breaking thousands separators and the
/// currency sign, e.g. `45 000 000 ₽`.
pub fn format_rub(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out.push('\u{a0}');
    out.push('₽');
    out
}

/// Format a date the way Russian documents print it, `ДД.ММ.ГГГГ`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
