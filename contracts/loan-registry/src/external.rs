//! Calls out to the collateral NFT contract and the payment token.
//!
//! Both are invoked with `try_invoke_contract` so that a refusal surfaces as
//! a `LoanError` instead of trapping the registry.

use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, InvokeError, Val, Vec};

use crate::error::LoanError;

/// Moves NFT `asset_id` from `from` to `to` on the collateral contract.
pub fn transfer_asset(
    env: &Env,
    asset_address: &Address,
    from: &Address,
    to: &Address,
    asset_id: u32,
) -> Result<(), LoanError> {
    let args: Vec<Val> = vec![
        env,
        from.clone().into_val(env),
        to.clone().into_val(env),
        asset_id.into_val(env),
    ];
    let res = env.try_invoke_contract::<(), InvokeError>(
        asset_address,
        &symbol_short!("transfer"),
        args,
    );
    match res {
        Ok(Ok(())) => Ok(()),
        _ => Err(LoanError::CustodyTransferFailed),
    }
}

/// Pays `amount` of the payment token from `from` to `to`.
pub fn pay(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LoanError> {
    let args: Vec<Val> = vec![
        env,
        from.clone().into_val(env),
        to.clone().into_val(env),
        amount.into_val(env),
    ];
    let res = env.try_invoke_contract::<(), InvokeError>(token, &symbol_short!("transfer"), args);
    match res {
        Ok(Ok(())) => Ok(()),
        _ => Err(LoanError::PaymentFailed),
    }
}
