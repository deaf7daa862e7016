use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LoanError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Lookup and lifecycle
    NotFound = 3,
    WrongState = 4,
    Unauthorized = 5,

    // Request validation
    InvalidInput = 6,
    AmountMismatch = 7,

    // External collaborators
    CustodyTransferFailed = 8,
    PaymentFailed = 9,

    // Deadline
    DeadlinePassed = 10,
    DeadlineNotReached = 11,

    Reentrant = 12,
    MathOverflow = 13,
    Paused = 14,
}
