#![no_std]

//! Resort membership diamond.
//!
//! One contract address exposes every facet: the accommodation calendar, the
//! per-owner booking ledger, the bonding-curve sale of governance tokens and
//! the stake/lock ledger. Facets keep their state under disjoint storage-key
//! enums and share the role and pause gate in `access_control`/`pausable`.

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

mod access_control;
mod booking;
mod calendar;
pub mod curve;
mod events;
mod loupe;
mod math;
mod pausable;
mod sale;
mod stake;
mod storage;
mod token_integration;
pub mod types;

pub use calendar::{days_from_civil, is_leap_year};
pub use types::{Booking, BookingDate, Facet, Role, SaleConfig, SaleCurve, StakeDeposit, Year};

#[contract]
pub struct ResortDiamond;

#[contractimpl]
impl ResortDiamond {
    /// Initialize the diamond.
    ///
    /// # Arguments
    /// * `admin` - Receives every role
    /// * `governance_token` - Token sold by the sale and locked by the stake facet
    /// * `stake_lock_duration` - Seconds each stake tranche stays locked
    pub fn initialize(e: Env, admin: Address, governance_token: Address, stake_lock_duration: u64) {
        access_control::init(&e, &admin);
        sale::init(&e, &governance_token);
        stake::init(&e, &governance_token, stake_lock_duration);
    }

    pub fn grant_role(e: Env, caller: Address, role: Role, account: Address) {
        access_control::grant_role(&e, &caller, role, &account)
    }

    pub fn revoke_role(e: Env, caller: Address, role: Role, account: Address) {
        access_control::revoke_role(&e, &caller, role, &account)
    }

    pub fn has_role(e: Env, role: Role, account: Address) -> bool {
        access_control::has_role(&e, role, &account)
    }

    /// Facets and the functions each one serves.
    pub fn facets(e: Env) -> Vec<Facet> {
        loupe::facets(&e)
    }

    pub fn facet_of(e: Env, function: Symbol) -> Option<Symbol> {
        loupe::facet_of(&e, &function)
    }
}

// Pause gate
#[contractimpl]
impl ResortDiamond {
    pub fn is_paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }

    pub fn pause(e: Env, caller: Address) {
        pausable::pause(&e, &caller)
    }

    pub fn unpause(e: Env, caller: Address) {
        pausable::unpause(&e, &caller)
    }
}

// Calendar facet
#[contractimpl]
impl ResortDiamond {
    pub fn add_accommodation_year(e: Env, caller: Address, year: Year) {
        calendar::add_year(&e, &caller, &year)
    }

    pub fn remove_accommodation_year(e: Env, caller: Address, number: u32) {
        calendar::remove_year(&e, &caller, number)
    }

    pub fn enable_accommodation_year(e: Env, caller: Address, number: u32, enable: bool) {
        calendar::enable_year(&e, &caller, number, enable)
    }

    pub fn update_accommodation_year(e: Env, caller: Address, year: Year) {
        calendar::update_year(&e, &caller, &year)
    }

    pub fn get_accommodation_years(e: Env) -> Vec<Year> {
        calendar::get_years(&e)
    }

    pub fn get_accommodation_year(e: Env, number: u32) -> Option<Year> {
        calendar::get_year(&e, number)
    }
}

// Booking facet
#[contractimpl]
impl ResortDiamond {
    /// Book every listed night for `owner`, or none of them.
    pub fn book_accommodation(e: Env, owner: Address, dates: Vec<BookingDate>) {
        booking::book(&e, &owner, &dates)
    }

    pub fn cancel_accommodation(e: Env, owner: Address, dates: Vec<BookingDate>) {
        booking::cancel(&e, &owner, &dates)
    }

    pub fn get_accommodation_bookings(e: Env, owner: Address, year: u32) -> Vec<Booking> {
        booking::get_bookings(&e, &owner, year)
    }

    pub fn get_accommodation_booking(
        e: Env,
        owner: Address,
        year: u32,
        day: u32,
    ) -> Option<Booking> {
        booking::get_booking(&e, &owner, year, day)
    }
}

// Sale facet
#[contractimpl]
impl ResortDiamond {
    pub fn configure_sale(
        e: Env,
        caller: Address,
        quote_token: Address,
        treasury: Address,
        curve: SaleCurve,
    ) {
        sale::configure(&e, &caller, &quote_token, &treasury, &curve)
    }

    /// Quote cost of `amount` governance tokens at the current supply.
    pub fn calculate_price(e: Env, amount: i128) -> i128 {
        sale::calculate_price(&e, amount)
    }

    /// Buy `amount` governance tokens. Returns the quote amount paid.
    pub fn buy(e: Env, buyer: Address, amount: i128) -> i128 {
        sale::buy(&e, &buyer, amount)
    }

    pub fn get_sale_config(e: Env) -> Option<SaleConfig> {
        sale::get_config(&e)
    }

    pub fn tokens_sold(e: Env) -> i128 {
        sale::tokens_sold(&e)
    }

    pub fn current_price(e: Env) -> i128 {
        sale::current_price(&e)
    }
}

// Stake facet
#[contractimpl]
impl ResortDiamond {
    pub fn deposit_stake(e: Env, owner: Address, amount: i128) {
        stake::deposit(&e, &owner, amount)
    }

    pub fn withdraw_max_stake(e: Env, owner: Address) -> i128 {
        stake::withdraw_max(&e, &owner)
    }

    pub fn withdraw_stake(e: Env, owner: Address, amount: i128) {
        stake::withdraw(&e, &owner, amount)
    }

    pub fn restake(e: Env, owner: Address, amount: i128) {
        stake::restake(&e, &owner, amount)
    }

    pub fn restake_max(e: Env, owner: Address) -> i128 {
        stake::restake_max(&e, &owner)
    }

    pub fn staked_balance_of(e: Env, owner: Address) -> i128 {
        stake::staked_balance_of(&e, &owner)
    }

    pub fn unlocked_stake_of(e: Env, owner: Address) -> i128 {
        stake::unlocked_of(&e, &owner)
    }

    pub fn locked_stake_of(e: Env, owner: Address) -> i128 {
        stake::locked_of(&e, &owner)
    }

    pub fn stake_deposits_of(e: Env, owner: Address) -> Vec<StakeDeposit> {
        stake::deposits_of(&e, &owner)
    }

    pub fn total_staked(e: Env) -> i128 {
        stake::total_staked(&e)
    }

    pub fn stake_lock_duration(e: Env) -> u64 {
        stake::lock_duration(&e)
    }

    pub fn set_stake_lock_duration(e: Env, caller: Address, seconds: u64) {
        stake::set_lock_duration(&e, &caller, seconds)
    }
}

#[cfg(test)]
mod test_helpers;







#[cfg(test)]
mod test_pausable;


#[cfg(test)]
mod test_stake;
