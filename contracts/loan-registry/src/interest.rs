//! Flat interest on the principal.
//!
//! `interest = floor(principal / 100) * rate_percent`, charged once regardless
//! of how long the loan runs.

use crate::error::LoanError;

/// Smallest principal whose hundredth is a whole base unit.
pub const MIN_PRINCIPAL: i128 = 100;

pub fn interest(principal: i128, rate_percent: u32) -> Result<i128, LoanError> {
    if principal < MIN_PRINCIPAL {
        return Err(LoanError::InvalidInput);
    }

    (principal / 100)
        .checked_mul(rate_percent as i128)
        .ok_or(LoanError::MathOverflow)
}

/// Principal plus interest, fixed at request time.
pub fn amount_to_be_repaid(principal: i128, rate_percent: u32) -> Result<i128, LoanError> {
    principal
        .checked_add(interest(principal, rate_percent)?)
        .ok_or(LoanError::MathOverflow)
}
