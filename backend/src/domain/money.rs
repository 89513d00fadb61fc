//! Money handling for the finance tracker.
//!
//! Amounts typed by users arrive as locale-formatted strings ("1 234,56").
//! They are parsed into exact `Decimal` values here and never pass through
//! binary floating point. Persisted amounts are integer hundredths.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Stored amounts keep two fractional digits
pub const MONEY_SCALE: u32 = 2;

/// Stored amounts keep at most twelve integer digits
pub const MAX_INTEGER_DIGITS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
    #[error("Amount {0} is out of range")]
    OutOfRange(Decimal),
}

/// Parse a user-supplied number into an exact decimal.
///
/// Whitespace (including non-breaking spaces used as thousands separators)
/// is removed and a comma is accepted as the decimal separator.
pub fn parse_decimal(raw: Option<&str>) -> Result<Decimal, MoneyParseError> {
    let raw = raw.ok_or(MoneyParseError::Empty)?;

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    Decimal::from_str_exact(&cleaned).map_err(|_| MoneyParseError::Invalid(raw.to_string()))
}

/// Round to the stored precision and check the stored range.
pub fn normalize_amount(value: Decimal) -> Result<Decimal, MoneyParseError> {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.abs() >= max_magnitude() {
        return Err(MoneyParseError::OutOfRange(value));
    }
    rounded.rescale(MONEY_SCALE);
    Ok(rounded)
}

/// Convert a normalized amount into integer hundredths for storage.
pub fn to_minor_units(value: Decimal) -> Result<i64, MoneyParseError> {
    let normalized = normalize_amount(value)?;
    (normalized * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or(MoneyParseError::OutOfRange(value))
}

/// Convert stored integer hundredths back into a decimal with two fractional digits.
pub fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, MONEY_SCALE)
}

/// Render an amount for display: `1234.56` becomes `"1 234,56 ₽"`.
pub fn format_currency(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(MONEY_SCALE);

    let text = rounded.to_string();
    let (integer_part, fraction_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{} ₽", sign, grouped, fraction_part)
}

fn max_magnitude() -> Decimal {
    Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS))
}
