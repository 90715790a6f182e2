//! Token plumbing shared by the sale and stake facets.
//! Allowance and balance checks run before any transfer so failures surface
//! with a descriptive reason instead of a token-contract error.

use resort_errors::{fail, ContractError};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// @notice Checks that `owner` lets the diamond spend at least `amount` of `token`.
pub fn require_allowance(e: &Env, token: &Address, owner: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    let allowance = TokenClient::new(e, token).allowance(owner, &contract);
    if allowance < amount {
        fail(ContractError::InsufficientAllowance);
    }
}

/// @notice Checks that `owner` holds at least `amount` of `token`.
pub fn require_balance(e: &Env, token: &Address, owner: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    if TokenClient::new(e, token).balance(owner) < amount {
        fail(ContractError::InsufficientBalance);
    }
}

/// @notice Pulls `amount` of `token` from `owner` into the diamond.
/// @dev Requires prior approval for the diamond as spender.
pub fn transfer_into_contract(e: &Env, token: &Address, owner: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    require_allowance(e, token, owner, amount);
    require_balance(e, token, owner, amount);
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
}

/// @notice Sends `amount` of `token` held by the diamond to `recipient`.
pub fn transfer_from_contract(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, recipient, &amount);
}

/// @notice Moves `amount` of `token` from `payer` straight to `recipient`
/// using the diamond's allowance.
pub fn collect_payment(
    e: &Env,
    token: &Address,
    payer: &Address,
    recipient: &Address,
    amount: i128,
) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, payer, recipient, &amount);
}

/// @notice Mints `amount` of `token` to `to`. The diamond must be the token admin.
pub fn mint(e: &Env, token: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    StellarAssetClient::new(e, token).mint(to, &amount);
}
