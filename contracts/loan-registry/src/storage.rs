use soroban_sdk::Env;

use crate::error::LoanError;
use crate::types::{DataKey, Loan, LoanStatus, RegistryConfig};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const LOAN_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LEDGER_CLOSE_SECONDS: u64 = 5;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn config(env: &Env) -> Result<RegistryConfig, LoanError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LoanError::NotInitialized)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Identifiers start at 1.
pub fn next_id(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::NextId).unwrap_or(1)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

/// Reads a loan and keeps its record alive for another bump period.
pub fn loan(env: &Env, loan_id: u64) -> Result<Loan, LoanError> {
    let loan: Loan = env
        .storage()
        .persistent()
        .get(&DataKey::Loan(loan_id))
        .ok_or(LoanError::NotFound)?;
    extend_loan(env, &loan);
    Ok(loan)
}

pub fn save_loan(env: &Env, loan: &Loan) {
    env.storage().persistent().set(&DataKey::Loan(loan.id), loan);
    extend_loan(env, loan);
}

/// Active loans live at least until a bump period past their deadline, so the
/// record is still there when the lender comes to seize.
fn extend_loan(env: &Env, loan: &Loan) {
    let mut extend_to = LOAN_BUMP_AMOUNT;
    if loan.status == LoanStatus::Active {
        let remaining_secs = loan
            .loan_duration_end_timestamp
            .saturating_sub(env.ledger().timestamp());
        let remaining_ledgers =
            u32::try_from(remaining_secs / LEDGER_CLOSE_SECONDS).unwrap_or(u32::MAX);
        extend_to = extend_to.saturating_add(remaining_ledgers);
    }
    let extend_to = extend_to.min(env.storage().max_ttl());
    let threshold = extend_to.saturating_sub(DAY_IN_LEDGERS);

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Loan(loan.id), threshold, extend_to);
}

/// Stores a loan built with `next_id` and advances the counter past it.
pub fn insert_loan(env: &Env, loan: &Loan) -> Result<(), LoanError> {
    let next = loan.id.checked_add(1).ok_or(LoanError::MathOverflow)?;
    save_loan(env, loan);
    env.storage().instance().set(&DataKey::NextId, &next);
    Ok(())
}
