use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum LedgerDataKey {
    Owner,            //Address
    TotalSupply,      //i128
    Balance(Address), //i128
}

pub fn is_ledger_initialized(e: &Env) -> bool {
    e.storage().instance().has(&LedgerDataKey::Owner)
}

pub fn write_owner_unchecked(e: &Env, owner: &Address) {
    e.storage().instance().set(&LedgerDataKey::Owner, owner);
}

pub fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&LedgerDataKey::Owner)
        .unwrap_or_else(|| panic!("Ledger not initialized"))
}

pub fn write_total_supply_unchecked(e: &Env, total_supply: i128) {
    e.storage()
        .instance()
        .set(&LedgerDataKey::TotalSupply, &total_supply);
}

pub fn read_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&LedgerDataKey::TotalSupply)
        .unwrap_or(0)
}

// balances live in persistent storage, one entry per account
pub fn write_balance_unchecked(e: &Env, account: &Address, balance: i128) {
    e.storage()
        .persistent()
        .set(&LedgerDataKey::Balance(account.clone()), &balance);
}

pub fn read_balance(e: &Env, account: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&LedgerDataKey::Balance(account.clone()))
        .unwrap_or(0)
}
