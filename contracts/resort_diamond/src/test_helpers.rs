//! Shared fixtures for the diamond's unit tests.
//! Registers the diamond with a governance token it administers and a quote
//! token administered by the test admin, then configures the default sale.

#![cfg(test)]

use crate::curve;
use crate::types::{BookingDate, Year};
use crate::{ResortDiamond, ResortDiamondClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, FromVal, Symbol, Val, Vec};

/// Seconds a stake tranche stays locked in tests (30 days).
pub const LOCK_DURATION: u64 = 30 * 86_400;
/// 2025-03-01T00:00:00Z, which is day 60 of 2025.
pub const NOW: u64 = 1_740_787_200;
pub const TODAY_2025: u32 = 60;
pub const DAY: u64 = 86_400;
pub const UNIT: i128 = curve::TOKEN_UNIT;

pub struct Setup<'a> {
    pub client: ResortDiamondClient<'a>,
    pub contract_id: Address,
    pub admin: Address,
    pub user: Address,
    pub treasury: Address,
    pub token: Address,
    pub quote: Address,
}

pub fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();
    set_time(e, NOW);

    let contract_id = e.register(ResortDiamond, ());
    let client = ResortDiamondClient::new(e, &contract_id);
    let admin = Address::generate(e);
    let user = Address::generate(e);
    let treasury = Address::generate(e);

    let token = e
        .register_stellar_asset_contract_v2(contract_id.clone())
        .address();
    let quote = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    client.initialize(&admin, &token, &LOCK_DURATION);
    client.configure_sale(&admin, &quote, &treasury, &curve::default_curve());

    Setup {
        client,
        contract_id,
        admin,
        user,
        treasury,
        token,
        quote,
    }
}

/// Setup plus enabled Gregorian years 2025 and 2026.
pub fn setup_with_years(e: &Env) -> Setup<'_> {
    let s = setup(e);
    s.client
        .add_accommodation_year(&s.admin, &Year::gregorian(2025, true));
    s.client
        .add_accommodation_year(&s.admin, &Year::gregorian(2026, true));
    s
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn advance(e: &Env, seconds: u64) {
    let now = e.ledger().timestamp();
    set_time(e, now + seconds);
}

pub fn dates(e: &Env, days: &[(u32, u32)]) -> Vec<BookingDate> {
    let mut out = Vec::new(e);
    for (year, day) in days {
        out.push_back(BookingDate {
            year: *year,
            day: *day,
        });
    }
    out
}

pub fn approve(e: &Env, token: &Address, owner: &Address, spender: &Address, amount: i128) {
    let expiration = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(owner, spender, &amount, &expiration);
}

/// Mints quote tokens to `who` and approves the diamond for `allowance`.
pub fn fund_quote(e: &Env, s: &Setup, who: &Address, amount: i128, allowance: i128) {
    StellarAssetClient::new(e, &s.quote).mint(who, &amount);
    approve(e, &s.quote, who, &s.contract_id, allowance);
}

/// Mints governance tokens to `who` and approves the diamond for all of them.
pub fn fund_governance(e: &Env, s: &Setup, who: &Address, amount: i128) {
    StellarAssetClient::new(e, &s.token).mint(who, &amount);
    approve(e, &s.token, who, &s.contract_id, amount);
}

pub fn balance(e: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(e, token).balance(who)
}

/// Most recent event emitted by the diamond under `name`, as (topics, data).
pub fn last_event(e: &Env, contract_id: &Address, name: &str) -> Option<(Vec<Val>, Val)> {
    let wanted = Symbol::new(e, name);
    e.events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| {
            ev.0 == *contract_id
                && ev
                    .1
                    .get(0)
                    .map(|t| Symbol::from_val(e, &t) == wanted)
                    .unwrap_or(false)
        })
        .map(|ev| (ev.1, ev.2))
}
