use soroban_sdk::{symbol_short, Address, Env};

pub fn registry_initialized(env: &Env, admin: &Address, payment_token: &Address) {
    env.events().publish(
        (symbol_short!("reg_init"),),
        (admin.clone(), payment_token.clone()),
    );
}

pub fn loan_requested(env: &Env, borrower: &Address, loan_id: u64) {
    env.events()
        .publish((symbol_short!("loan_req"),), (borrower.clone(), loan_id));
}

pub fn loan_funded(env: &Env, borrower: &Address, lender: &Address, loan_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("loan_fund"),),
        (borrower.clone(), lender.clone(), loan_id, amount),
    );
}

pub fn request_closed(env: &Env, borrower: &Address, loan_id: u64) {
    env.events()
        .publish((symbol_short!("req_close"),), (borrower.clone(), loan_id));
}

pub fn loan_repaid(env: &Env, borrower: &Address, lender: &Address, loan_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("loan_rpd"),),
        (borrower.clone(), lender.clone(), loan_id, amount),
    );
}

pub fn collateral_seized(env: &Env, borrower: &Address, lender: &Address, loan_id: u64) {
    env.events().publish(
        (symbol_short!("nft_seize"),),
        (borrower.clone(), lender.clone(), loan_id),
    );
}

pub fn paused(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("paused"),), (admin.clone(),));
}

pub fn unpaused(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("unpaused"),), (admin.clone(),));
}
