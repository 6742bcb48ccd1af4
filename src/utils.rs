use alloy::primitives::U256;
use bigdecimal::{BigDecimal, ToPrimitive};
use std::str::FromStr;

/// Number of base units in one whole platform token.
const UNITS_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Converts a token amount to base units as a `U256`.
/// Accepts a `BigDecimal` token value and returns the equivalent amount in
/// base units, ready for prices and stakes in contract calls.
/// Returns an error if the value is too large to fit in a `u128`.
pub fn tokens_to_units(tokens: BigDecimal) -> anyhow::Result<U256> {
    let units = (tokens * BigDecimal::from(UNITS_PER_TOKEN))
        .to_u128()
        .ok_or_else(|| anyhow::anyhow!("Value too large"))?;
    Ok(U256::from(units))
}

/// Converts a base-unit amount (`U256`) to whole tokens as a `BigDecimal`.
/// Useful for displaying human-readable amounts from earnings and expense
/// queries, such as for UI or logs.
/// Panics if the `U256` value cannot be parsed as a string (should not happen for valid values).
pub fn units_to_tokens(units: U256) -> BigDecimal {
    BigDecimal::from_str(&units.to_string()).unwrap() / BigDecimal::from(UNITS_PER_TOKEN)
}
