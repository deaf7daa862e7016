//! Reentrancy lock held for the whole of every state-changing call.
//!
//! Custody and payment go through contracts the registry does not control, so
//! a nested call back into the registry must not observe or act on a loan
//! whose update is still in flight.

use soroban_sdk::Env;

use crate::error::LoanError;
use crate::types::DataKey;

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Locked).unwrap_or(false)
}

/// Runs `body` with the lock held. The lock is released on both the `Ok`
/// and the `Err` path.
pub fn non_reentrant<T, F>(env: &Env, body: F) -> Result<T, LoanError>
where
    F: FnOnce() -> Result<T, LoanError>,
{
    if is_locked(env) {
        return Err(LoanError::Reentrant);
    }
    env.storage().instance().set(&DataKey::Locked, &true);

    let result = body();

    env.storage().instance().remove(&DataKey::Locked);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NftLoanRegistry;

    #[test]
    fn test_lock_released_after_success_and_failure() {
        let env = Env::default();
        let contract_id = env.register(NftLoanRegistry, ());

        env.as_contract(&contract_id, || {
            let ok = non_reentrant(&env, || {
                assert!(is_locked(&env));
                Ok(7u32)
            });
            assert_eq!(ok, Ok(7));
            assert!(!is_locked(&env));

            let err: Result<(), LoanError> =
                non_reentrant(&env, || Err(LoanError::PaymentFailed));
            assert_eq!(err, Err(LoanError::PaymentFailed));
            assert!(!is_locked(&env));
        });
    }

    #[test]
    fn test_nested_call_rejected() {
        let env = Env::default();
        let contract_id = env.register(NftLoanRegistry, ());

        env.as_contract(&contract_id, || {
            let outer = non_reentrant(&env, || {
                let inner = non_reentrant(&env, || Ok(()));
                assert_eq!(inner, Err(LoanError::Reentrant));
                // the failed inner attempt must not release the outer lock
                assert!(is_locked(&env));
                Ok(())
            });
            assert_eq!(outer, Ok(()));
            assert!(!is_locked(&env));
        });
    }
}
