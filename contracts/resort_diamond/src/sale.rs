//! Dynamic sale: governance tokens minted against quote tokens along the
//! bonding curve in `curve.rs`.

use crate::access_control;
use crate::curve;
use crate::events;
use crate::math;
use crate::pausable;
use crate::storage;
use crate::token_integration;
use crate::types::{Role, SaleConfig, SaleCurve};
use resort_errors::{fail, ContractError};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum SaleKey {
    SaleToken,
    SaleConfig,
    Curve,
    Sold,
    SaleLock,
}

pub fn init(e: &Env, token: &Address) {
    e.storage().instance().set(&SaleKey::SaleToken, token);
    e.storage().instance().set(&SaleKey::Sold, &0_i128);
    e.storage()
        .instance()
        .set(&SaleKey::Curve, &curve::default_curve());
}

pub fn governance_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&SaleKey::SaleToken)
        .unwrap_or_else(|| fail(ContractError::NotInitialized))
}

pub fn get_config(e: &Env) -> Option<SaleConfig> {
    e.storage().instance().get(&SaleKey::SaleConfig)
}

fn require_config(e: &Env) -> SaleConfig {
    get_config(e).unwrap_or_else(|| fail(ContractError::SaleNotConfigured))
}

/// Curve quotes are taken from; the default curve until one is configured.
pub fn active_curve(e: &Env) -> SaleCurve {
    e.storage()
        .instance()
        .get(&SaleKey::Curve)
        .unwrap_or_else(curve::default_curve)
}

pub fn tokens_sold(e: &Env) -> i128 {
    e.storage().instance().get(&SaleKey::Sold).unwrap_or(0)
}

/// Sets the quote token, treasury and curve. The curve may only change
/// while nothing has been sold.
pub fn configure(
    e: &Env,
    caller: &Address,
    quote_token: &Address,
    treasury: &Address,
    curve: &SaleCurve,
) {
    access_control::require_role(e, caller, Role::SaleManager);
    curve::validate(e, curve);
    if tokens_sold(e) > 0 && active_curve(e) != *curve {
        fail(ContractError::CurveLocked);
    }

    let config = SaleConfig {
        quote_token: quote_token.clone(),
        treasury: treasury.clone(),
        curve: curve.clone(),
    };
    e.storage().instance().set(&SaleKey::SaleConfig, &config);
    e.storage().instance().set(&SaleKey::Curve, curve);
    storage::bump_instance(e);
    events::emit_sale_configured(e, caller, quote_token, treasury);
}

pub fn calculate_price(e: &Env, amount: i128) -> i128 {
    curve::quote(e, &active_curve(e), tokens_sold(e), amount)
}

pub fn current_price(e: &Env) -> i128 {
    curve::unit_price(e, &active_curve(e), tokens_sold(e))
}

fn check_lock(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&SaleKey::SaleLock)
        .unwrap_or(false)
}

fn with_reentrancy_guard<T, F: FnOnce() -> T>(e: &Env, f: F) -> T {
    if check_lock(e) {
        fail(ContractError::ReentrancyDetected);
    }
    e.storage().instance().set(&SaleKey::SaleLock, &true);
    let result = f();
    e.storage().instance().set(&SaleKey::SaleLock, &false);
    result
}

/// Sells `amount` governance tokens to `buyer` and returns the quote cost.
///
/// `sold` advances before any token call. Payment goes from the buyer to the
/// treasury through the diamond's allowance, then the tokens are minted.
pub fn buy(e: &Env, buyer: &Address, amount: i128) -> i128 {
    pausable::require_not_paused(e);
    buyer.require_auth();
    if amount <= 0 {
        fail(ContractError::InvalidAmount);
    }

    with_reentrancy_guard(e, || {
        let config = require_config(e);
        let token = governance_token(e);
        let sold = tokens_sold(e);
        let cost = curve::quote(e, &config.curve, sold, amount);
        // a quote that rounds to nothing would mint for free
        if cost <= 0 {
            fail(ContractError::InvalidAmount);
        }

        token_integration::require_allowance(e, &config.quote_token, buyer, cost);
        token_integration::require_balance(e, &config.quote_token, buyer, cost);

        e.storage()
            .instance()
            .set(&SaleKey::Sold, &math::add_i128(sold, amount));
        storage::bump_instance(e);

        token_integration::collect_payment(e, &config.quote_token, buyer, &config.treasury, cost);
        token_integration::mint(e, &token, buyer, amount);

        events::emit_success_buy(e, buyer, amount, cost);
        cost
    })
}
