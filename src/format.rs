//! Number formatting for response texts (en-US digit grouping)

/// `1234567` → `"1,234,567"`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Grouped amount with up to three fraction digits, trailing zeros dropped.
pub fn amount(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = (scaled / 1000) as i64;
    let fraction = scaled % 1000;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if fraction != 0 {
        let fraction = format!("{:03}", fraction);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}
