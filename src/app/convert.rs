use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ConvertError;
use crate::models::RateSnapshot;

/// Parses the raw amount input. Anything that is not a positive decimal
/// number is rejected before any rate is looked up.
pub fn parse_amount(input: &str) -> Result<Decimal, ConvertError> {
    let amount: Decimal = input
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount)?;

    if amount <= Decimal::ZERO {
        return Err(ConvertError::InvalidAmount);
    }

    Ok(amount)
}

/// Converts a CLP amount into the selected currency at its current rate,
/// rounded to 2 decimal places.
pub fn convert(amount: Decimal, code: &str, snapshot: &RateSnapshot) -> Result<Decimal, ConvertError> {
    let indicator = snapshot
        .get(code)
        .ok_or_else(|| ConvertError::CurrencyUnavailable(code.to_string()))?;

    let rate = *indicator.value();
    if rate.is_zero() {
        return Err(ConvertError::RateMissing(code.to_string()));
    }

    Ok((amount / rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
