use soroban_sdk::{Address, Env};
use soroban_token_sdk::TokenUtils;

/// Publishes the transfer notification.
///
/// Uses the standard token event shape: topics `("transfer", from, to)`
/// and the transferred amount as data, so wallets and indexers that follow
/// token contracts pick it up without a custom decoder.
pub fn emit_transfer(e: &Env, from: Address, to: Address, amount: i128) {
    TokenUtils::new(e).events().transfer(from, to, amount);
}
