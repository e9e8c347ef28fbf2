//! Number and name formatting helpers shared by the voucher reports

use bigdecimal::{BigDecimal, RoundingMode};

use crate::types::{VoucherError, VoucherResult};

/// Insert comma separators into the integer part of a rendered number.
/// The fractional part, if any, is left untouched.
pub fn group_thousands(value: &str) -> String {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (pos, ch) in digits.chars().enumerate() {
        if pos > 0 && (digits.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Parse a display-formatted number like `"1,234,567.89"`.
///
/// Ledger search columns render zero amounts as an empty string, so
/// blank input parses as zero. Anything else that is not a number is a
/// hard `InvalidInput`, not silently coerced.
pub fn parse_formatted_number(value: &str) -> VoucherResult<BigDecimal> {
    let stripped: String = value.chars().filter(|c| *c != ',').collect();
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        return Ok(BigDecimal::from(0));
    }

    trimmed
        .parse()
        .map_err(|_| VoucherError::InvalidInput(format!("not a numeric amount: '{}'", value)))
}

/// Format an amount for display: two decimal places, comma separators
pub fn format_amount(amount: &BigDecimal) -> String {
    group_thousands(&amount.with_scale_round(2, RoundingMode::HalfUp).to_string())
}

/// Strip the leading employee-number prefix from a system-note name
/// like `"1042 Dela Cruz, Juan"`
pub fn clean_signatory_name(name: &str) -> String {
    name.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
        .trim()
        .to_string()
}

/// Last segment of a hierarchical classification path like
/// `"Administration : Maintenance"`
pub fn leaf_segment(path: &str) -> &str {
    path.rsplit(':').next().unwrap_or(path).trim()
}
