use ledger::core::{
    balance_of as _balance_of, initialize as _initialize, owner as _owner,
    total_supply as _total_supply, transfer as _transfer, Error, LedgerTrait,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata_unchecked};

pub const TOKEN_NAME: &str = "My Hardhat Token";
pub const TOKEN_SYMBOL: &str = "HT";
pub const TOKEN_DECIMALS: u32 = 0;
pub const TOTAL_SUPPLY: i128 = 100_000;

#[contract]
pub struct TokenContract;

pub trait TokenTrait {
    fn __constructor(e: Env, owner: Address);

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn decimals(e: Env) -> u32;
}

#[contractimpl]
impl TokenTrait for TokenContract {
    /// Creates the token and credits the whole supply to `owner`.
    ///
    /// `owner` must authorize the deployment, which makes it the deploying account.
    fn __constructor(e: Env, owner: Address) {
        owner.require_auth();

        write_metadata_unchecked(
            &e,
            TOKEN_DECIMALS,
            String::from_str(&e, TOKEN_NAME),
            String::from_str(&e, TOKEN_SYMBOL),
        );

        _initialize(&e, owner, TOTAL_SUPPLY).unwrap_or_else(|err| panic_with_error!(&e, err));
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }
}

#[contractimpl]
impl LedgerTrait for TokenContract {
    fn owner(e: Env) -> Address {
        _owner(&e)
    }

    fn total_supply(e: Env) -> i128 {
        _total_supply(&e)
    }

    fn balance_of(e: Env, account: Address) -> i128 {
        _balance_of(&e, &account)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        _transfer(&e, from, to, amount)
    }
}
