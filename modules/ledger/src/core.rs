use soroban_sdk::{contracterror, log, Address, Env};

use crate::events::emit_transfer;
use crate::storage::{
    is_ledger_initialized, read_balance, read_owner, read_total_supply, write_balance_unchecked,
    write_owner_unchecked, write_total_supply_unchecked,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientBalance = 1,
    NegativeAmount = 2,
    AlreadyInitialized = 3,
    BalanceOverflow = 4,
}

/// Ledger trait.
///
/// The public surface of a fixed supply ledger. Contracts implement it by
/// forwarding to the free functions of this module.
///
pub trait LedgerTrait {
    fn owner(e: Env) -> Address;
    fn total_supply(e: Env) -> i128;
    fn balance_of(e: Env, account: Address) -> i128;
    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;
}

/// Creates the ledger, crediting the whole supply to `owner`.
///
/// Every other account is left absent and reads as 0.
///
/// ### Errors
/// - `AlreadyInitialized` if the ledger was already created in this instance.
/// - `NegativeAmount` if `total_supply` is negative.
pub fn initialize(e: &Env, owner: Address, total_supply: i128) -> Result<(), Error> {
    if is_ledger_initialized(e) {
        return Err(Error::AlreadyInitialized);
    }

    if total_supply < 0 {
        return Err(Error::NegativeAmount);
    }

    write_owner_unchecked(e, &owner);
    write_total_supply_unchecked(e, total_supply);
    write_balance_unchecked(e, &owner, total_supply);

    log!(e, "ledger initialized", owner, total_supply);

    Ok(())
}

/// Returns the account that created the ledger.
///
/// ### Panics
/// - Panics if the ledger was never initialized.
pub fn owner(e: &Env) -> Address {
    read_owner(e)
}

pub fn total_supply(e: &Env) -> i128 {
    read_total_supply(e)
}

/// Returns the balance of `account`, or 0 if it never held tokens.
pub fn balance_of(e: &Env, account: &Address) -> i128 {
    read_balance(e, account)
}

/// Moves `amount` from `from` to `to`.
///
/// The call must be authorized by `from`. Both balances are computed before
/// either one is written, and nothing is written when `from == to` or
/// `amount == 0`. The transfer event is published after the balances are
/// stored, on every successful call.
///
/// ### Errors
/// - `NegativeAmount` if `amount` is negative.
/// - `InsufficientBalance` if `from` holds less than `amount`.
/// - `BalanceOverflow` if crediting `to` would overflow.
pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
    from.require_auth();

    if amount < 0 {
        return Err(Error::NegativeAmount);
    }

    let from_balance = read_balance(e, &from);
    if from_balance < amount {
        log!(e, "transfer rejected", from, amount, from_balance);
        return Err(Error::InsufficientBalance);
    }

    if from != to && amount > 0 {
        let to_balance = read_balance(e, &to);
        let new_to_balance = to_balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow)?;

        write_balance_unchecked(e, &from, from_balance - amount);
        write_balance_unchecked(e, &to, new_to_balance);
    }

    log!(e, "transfer", from, to, amount);

    emit_transfer(e, from, to, amount);

    Ok(())
}
