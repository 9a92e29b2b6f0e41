#![cfg(test)]
use soroban_sdk::{testutils::Address as TestAddress, Address, Env, String};

use crate::contract::{
    TokenContract, TokenContractArgs, TokenContractClient, TOKEN_DECIMALS, TOKEN_NAME,
    TOKEN_SYMBOL, TOTAL_SUPPLY,
};

/// Deploys a token instance owned by a freshly generated account.
///
/// The constructor requires the owner's authorization, so auths are mocked
/// for the whole environment.
pub fn create_token<'a>(e: &Env) -> (Address, TokenContractClient<'a>) {
    e.mock_all_auths();

    let owner = <soroban_sdk::Address as TestAddress>::generate(&e);

    let contract_address = e.register(TokenContract, TokenContractArgs::__constructor(&owner));

    let contract_client = TokenContractClient::new(&e, &contract_address);

    (owner, contract_client)
}

/// Post deployment check: the instance exposes the expected metadata and
/// the owner holds the whole supply.
pub fn verify_deployment(e: &Env, token: &TokenContractClient, owner: &Address) {
    assert_eq!(token.name(), String::from_str(&e, TOKEN_NAME));
    assert_eq!(token.symbol(), String::from_str(&e, TOKEN_SYMBOL));
    assert_eq!(token.decimals(), TOKEN_DECIMALS);
    assert_eq!(&token.owner(), owner);
    assert_eq!(token.total_supply(), TOTAL_SUPPLY);
    assert_eq!(
        token.balance_of(owner),
        TOTAL_SUPPLY,
        "Expected owner to hold the total supply after deployment"
    );
}
