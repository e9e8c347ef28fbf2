//! Amount-in-words conversion for check printing

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

use crate::types::{VoucherError, VoucherResult};

/// Short-scale group names; 15 integer digits reach up to Trillion
const SCALES: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Largest supported integer part: 15 digits, i.e. up to 999 Trillion
const MAX_WHOLE: u64 = 1_000_000_000_000_000;

/// Convert a monetary amount to the words string printed on a check.
///
/// The amount is split into an integer part and cents (fractional part
/// rounded half-up to hundredths). The integer part renders in English
/// short-scale words; cents append as `"and NN/100"`. The currency
/// label is treated as opaque text supplied by the caller.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use voucher_core::words::amount_in_words;
///
/// let amount: BigDecimal = "1250.75".parse().unwrap();
/// assert_eq!(
///     amount_in_words(&amount, "Pesos").unwrap(),
///     "One Thousand Two Hundred Fifty Pesos and 75/100 only"
/// );
/// ```
///
/// Fails with `InvalidInput` for negative amounts and `OutOfRange` for
/// integer parts beyond 15 digits (past the Trillion scale).
pub fn amount_in_words(amount: &BigDecimal, currency_label: &str) -> VoucherResult<String> {
    if amount < &BigDecimal::from(0) {
        return Err(VoucherError::InvalidInput(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }

    let whole_part = amount.with_scale_round(0, RoundingMode::Down);
    let cents_part =
        ((amount - &whole_part) * BigDecimal::from(100)).with_scale_round(0, RoundingMode::HalfUp);

    let mut whole = whole_part.to_u64().ok_or_else(|| {
        VoucherError::OutOfRange(format!("integer part of {} exceeds 15 digits", amount))
    })?;
    let mut cents = cents_part.to_u64().unwrap_or(0);

    // More than 2 fractional digits can round up into the next unit
    if cents >= 100 {
        whole += cents / 100;
        cents %= 100;
    }

    if whole >= MAX_WHOLE {
        return Err(VoucherError::OutOfRange(format!(
            "integer part of {} exceeds 15 digits",
            amount
        )));
    }

    let words = whole_number_words(whole);
    if cents > 0 {
        Ok(format!("{} {} and {}/100 only", words, currency_label, cents))
    } else {
        Ok(format!("{} {} only", words, currency_label))
    }
}

/// Render a whole number in English words using short-scale grouping
fn whole_number_words(mut num: u64) -> String {
    if num == 0 {
        return "Zero".to_string();
    }

    let mut words = String::new();
    let mut scale = 0;

    while num > 0 {
        let group = (num % 1000) as u16;
        if group != 0 {
            // All-zero groups contribute nothing, no "Zero Thousand"
            words = format!("{} {} {}", group_words(group), SCALES[scale], words);
        }
        num /= 1000;
        scale += 1;
    }

    // Empty scale names and dropped groups leave double spaces behind
    words.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words for one 3-digit group, trailing space possible
fn group_words(group: u16) -> String {
    let mut result = String::new();
    let mut n = group as usize;

    if n >= 100 {
        result.push_str(ONES[n / 100]);
        result.push_str(" Hundred ");
        n %= 100;
    }

    if n >= 20 {
        result.push_str(TENS[n / 10]);
        result.push(' ');
        n %= 10;
    } else if n >= 10 {
        result.push_str(TEENS[n - 10]);
        return result;
    }

    if n > 0 {
        result.push_str(ONES[n]);
    }

    result
}
