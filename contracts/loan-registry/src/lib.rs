//! NFT Loan Registry Contract
//!
//! Peer-to-peer loans collateralized by a single NFT. A borrower escrows the
//! NFT with the registry and names a principal, a flat interest percentage and
//! a duration. Any other account may fund the request; the borrower then has
//! until the deadline to repay principal plus interest and get the NFT back,
//! after which the lender may seize it instead.
//!
//! ```text
//! Open --fund_loan--> Active --repay_loan--> Closed
//! Open --cancel_request--> Closed
//! Active --seize_collateral--> Closed
//! ```

#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env};

mod error;
mod events;
mod external;
mod guard;
pub mod interest;
mod storage;
mod types;

pub use error::LoanError;
pub use types::{DataKey, Loan, LoanStatus, RegistryConfig};

const SECONDS_PER_MINUTE: u64 = 60;

#[contract]
pub struct NftLoanRegistry;

#[contractimpl]
impl NftLoanRegistry {
    /// Initialize the registry with its admin and the token every loan is
    /// denominated in.
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), LoanError> {
        if storage::has_config(&env) {
            return Err(LoanError::AlreadyInitialized);
        }

        storage::set_config(
            &env,
            &RegistryConfig {
                admin: admin.clone(),
                payment_token: payment_token.clone(),
            },
        );
        storage::extend_instance(&env);

        events::registry_initialized(&env, &admin, &payment_token);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, LoanError> {
        storage::config(&env)
    }

    /// Block new requests and fundings. Cancel, repay and seize stay open so
    /// a pause can never strand collateral or prevent repayment.
    pub fn pause(env: Env, admin: Address) -> Result<(), LoanError> {
        Self::require_admin(&env, &admin)?;
        storage::set_paused(&env, true);
        storage::extend_instance(&env);
        events::paused(&env, &admin);
        Ok(())
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), LoanError> {
        Self::require_admin(&env, &admin)?;
        storage::set_paused(&env, false);
        storage::extend_instance(&env);
        events::unpaused(&env, &admin);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Escrow an NFT and open a loan request against it.
    ///
    /// # Arguments
    /// * `borrower` - Current owner of the NFT (must authorize)
    /// * `asset_id` - Token id on the collateral contract
    /// * `asset_address` - Collateral NFT contract
    /// * `principal` - Amount requested, at least `interest::MIN_PRINCIPAL`
    /// * `duration_minutes` - Time the borrower gets to repay once funded
    /// * `interest_rate_percent` - Flat percentage charged on the principal
    ///
    /// # Returns
    /// The new loan id
    pub fn request_loan(
        env: Env,
        borrower: Address,
        asset_id: u32,
        asset_address: Address,
        principal: i128,
        duration_minutes: u64,
        interest_rate_percent: u32,
    ) -> Result<u64, LoanError> {
        borrower.require_auth();

        guard::non_reentrant(&env, || {
            let config = storage::config(&env)?;
            if storage::is_paused(&env) {
                return Err(LoanError::Paused);
            }

            if duration_minutes == 0 {
                return Err(LoanError::InvalidInput);
            }
            // the deadline is computed at funding; reject durations that
            // could not be represented from the current time on
            duration_minutes
                .checked_mul(SECONDS_PER_MINUTE)
                .and_then(|secs| env.ledger().timestamp().checked_add(secs))
                .ok_or(LoanError::InvalidInput)?;

            let registry = env.current_contract_address();
            if asset_address == registry || asset_address == config.payment_token {
                return Err(LoanError::InvalidInput);
            }

            let amount_to_be_repaid =
                interest::amount_to_be_repaid(principal, interest_rate_percent)?;

            let loan = Loan {
                id: storage::next_id(&env),
                loan_amount: principal,
                interest_rate_percent,
                amount_to_be_repaid,
                asset_id,
                asset_address: asset_address.clone(),
                loan_duration_minutes: duration_minutes,
                loan_duration_end_timestamp: 0,
                borrower: borrower.clone(),
                lender: None,
                status: LoanStatus::Open,
            };

            external::transfer_asset(&env, &asset_address, &borrower, &registry, asset_id)?;

            storage::insert_loan(&env, &loan)?;
            storage::extend_instance(&env);

            events::loan_requested(&env, &borrower, loan.id);
            log!(&env, "loan {} requested by {}", loan.id, borrower);

            Ok(loan.id)
        })
    }

    /// Fund an open request. `amount` must equal the requested principal; it
    /// is paid straight to the borrower and the repayment clock starts.
    pub fn fund_loan(
        env: Env,
        lender: Address,
        loan_id: u64,
        amount: i128,
    ) -> Result<(), LoanError> {
        lender.require_auth();

        guard::non_reentrant(&env, || {
            let config = storage::config(&env)?;
            if storage::is_paused(&env) {
                return Err(LoanError::Paused);
            }

            let mut loan = storage::loan(&env, loan_id)?;
            if loan.status != LoanStatus::Open {
                return Err(LoanError::WrongState);
            }
            if lender == loan.borrower {
                return Err(LoanError::Unauthorized);
            }
            if amount != loan.loan_amount {
                return Err(LoanError::AmountMismatch);
            }

            let duration_secs = loan
                .loan_duration_minutes
                .checked_mul(SECONDS_PER_MINUTE)
                .ok_or(LoanError::MathOverflow)?;
            let deadline = env
                .ledger()
                .timestamp()
                .checked_add(duration_secs)
                .ok_or(LoanError::MathOverflow)?;

            loan.loan_duration_end_timestamp = deadline;
            loan.lender = Some(lender.clone());
            loan.status = LoanStatus::Active;

            external::pay(
                &env,
                &config.payment_token,
                &lender,
                &loan.borrower,
                loan.loan_amount,
            )?;

            storage::save_loan(&env, &loan);
            storage::extend_instance(&env);

            events::loan_funded(&env, &loan.borrower, &lender, loan_id, loan.loan_amount);
            log!(&env, "loan {} funded by {}, due at {}", loan_id, lender, deadline);

            Ok(())
        })
    }

    /// Withdraw an unfunded request and take the NFT back.
    pub fn cancel_request(env: Env, borrower: Address, loan_id: u64) -> Result<(), LoanError> {
        borrower.require_auth();

        guard::non_reentrant(&env, || {
            let mut loan = storage::loan(&env, loan_id)?;
            if loan.status != LoanStatus::Open {
                return Err(LoanError::WrongState);
            }
            if borrower != loan.borrower {
                return Err(LoanError::Unauthorized);
            }

            loan.status = LoanStatus::Closed;

            external::transfer_asset(
                &env,
                &loan.asset_address,
                &env.current_contract_address(),
                &borrower,
                loan.asset_id,
            )?;

            storage::save_loan(&env, &loan);
            storage::extend_instance(&env);

            events::request_closed(&env, &borrower, loan_id);
            log!(&env, "loan {} request cancelled", loan_id);

            Ok(())
        })
    }

    /// Repay principal plus interest before the deadline and recover the NFT.
    ///
    /// Repayment is accepted only while `now < loan_duration_end_timestamp`
    /// and only for exactly `amount_to_be_repaid`.
    pub fn repay_loan(
        env: Env,
        borrower: Address,
        loan_id: u64,
        amount: i128,
    ) -> Result<(), LoanError> {
        borrower.require_auth();

        guard::non_reentrant(&env, || {
            let config = storage::config(&env)?;

            let mut loan = storage::loan(&env, loan_id)?;
            if loan.status != LoanStatus::Active {
                return Err(LoanError::WrongState);
            }
            if borrower != loan.borrower {
                return Err(LoanError::Unauthorized);
            }
            if env.ledger().timestamp() >= loan.loan_duration_end_timestamp {
                return Err(LoanError::DeadlinePassed);
            }
            if amount != loan.amount_to_be_repaid {
                return Err(LoanError::AmountMismatch);
            }
            let lender = Self::funded_by(&loan)?;

            loan.status = LoanStatus::Closed;

            external::pay(
                &env,
                &config.payment_token,
                &borrower,
                &lender,
                loan.amount_to_be_repaid,
            )?;
            external::transfer_asset(
                &env,
                &loan.asset_address,
                &env.current_contract_address(),
                &borrower,
                loan.asset_id,
            )?;

            storage::save_loan(&env, &loan);
            storage::extend_instance(&env);

            events::loan_repaid(&env, &borrower, &lender, loan_id, loan.loan_amount);
            log!(
                &env,
                "loan {} repaid, {} to {}",
                loan_id,
                loan.amount_to_be_repaid,
                lender
            );

            Ok(())
        })
    }

    /// Take the NFT of a loan the borrower failed to repay.
    ///
    /// Only the lender may seize, and only once `now > loan_duration_end_timestamp`.
    /// At exactly the deadline neither repay nor seize is accepted.
    pub fn seize_collateral(env: Env, lender: Address, loan_id: u64) -> Result<(), LoanError> {
        lender.require_auth();

        guard::non_reentrant(&env, || {
            let mut loan = storage::loan(&env, loan_id)?;
            if loan.status != LoanStatus::Active {
                return Err(LoanError::WrongState);
            }
            if lender != Self::funded_by(&loan)? {
                return Err(LoanError::Unauthorized);
            }
            if env.ledger().timestamp() <= loan.loan_duration_end_timestamp {
                return Err(LoanError::DeadlineNotReached);
            }

            loan.status = LoanStatus::Closed;

            external::transfer_asset(
                &env,
                &loan.asset_address,
                &env.current_contract_address(),
                &lender,
                loan.asset_id,
            )?;

            storage::save_loan(&env, &loan);
            storage::extend_instance(&env);

            events::collateral_seized(&env, &loan.borrower, &lender, loan_id);
            log!(&env, "loan {} defaulted, collateral seized by {}", loan_id, lender);

            Ok(())
        })
    }

    /// Get loan details.
    pub fn get_details(env: Env, loan_id: u64) -> Result<Loan, LoanError> {
        storage::loan(&env, loan_id)
    }

    /// The id the next `request_loan` will assign.
    pub fn next_id(env: Env) -> u64 {
        storage::next_id(&env)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), LoanError> {
        let config = storage::config(env)?;
        if *caller != config.admin {
            return Err(LoanError::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    fn funded_by(loan: &Loan) -> Result<Address, LoanError> {
        loan.lender.clone().ok_or(LoanError::WrongState)
    }
}
