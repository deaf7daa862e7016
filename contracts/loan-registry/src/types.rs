use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    /// Collateral escrowed, waiting for a lender.
    Open = 0,
    /// Funded; the borrower owes `amount_to_be_repaid` before the deadline.
    Active = 1,
    /// Terminal. Collateral went back to the borrower or over to the lender.
    Closed = 2,
}

/// A single loan request and everything that happened to it.
///
/// Records are never deleted; `Closed` loans stay queryable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub id: u64,
    pub loan_amount: i128,
    pub interest_rate_percent: u32,
    pub amount_to_be_repaid: i128,
    pub asset_id: u32,
    pub asset_address: Address,
    pub loan_duration_minutes: u64,
    /// Ledger timestamp (seconds). Zero until the loan is funded.
    pub loan_duration_end_timestamp: u64,
    pub borrower: Address,
    pub lender: Option<Address>,
    pub status: LoanStatus,
}

/// Registry-wide settings written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    /// Token used for both the principal and the repayment.
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    NextId,
    Paused,
    Locked,
    Loan(u64),
}
