//! Decimal scaling helpers for USDC and other fixed-point amounts

use crate::{
    error::{LighterError, Result},
    types::USDC_TICKER_SCALE,
};
use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Convert a whole-unit amount into integer base units of `scale`
///
/// # Arguments
/// * `amount` - Amount in whole units (must be non-negative)
/// * `scale` - Base units per whole unit
///
/// # Returns
/// * `Ok(units)` - The amount in base units
/// * `Err(LighterError)` - If the amount is negative, finer than one base unit, or overflows i64
pub fn scale_amount(amount: Decimal, scale: i64) -> Result<i64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LighterError::invalid_parameter("Amount cannot be negative"));
    }

    let scaled = amount
        .checked_mul(Decimal::from(scale))
        .ok_or_else(|| LighterError::invalid_parameter("Amount is too large"))?;

    if scaled.fract() != Decimal::ZERO {
        return Err(LighterError::invalid_parameter(format!(
            "Amount {} has more precision than 1/{}",
            amount, scale
        )));
    }

    scaled
        .to_i64()
        .ok_or_else(|| LighterError::invalid_parameter("Amount is too large"))
}

/// Convert a USDC amount (e.g. `12.5`) into USDC base units
pub fn usdc_to_units(amount: Decimal) -> Result<i64> {
    scale_amount(amount, USDC_TICKER_SCALE)
}

/// Convert USDC base units back into a USDC amount
pub fn units_to_usdc(units: i64) -> Decimal {
    Decimal::from(units) / Decimal::from(USDC_TICKER_SCALE)
}
