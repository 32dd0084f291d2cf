//! Number formatting shared by the dashboard and the console summary.

/// Groups digits in threes with commas: `1234567` becomes `1,234,567`.
///
/// Negative values keep their sign in front of the grouped digits.
pub fn group_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Unsigned counterpart of [`group_thousands`].
pub fn group_thousands_u64(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
