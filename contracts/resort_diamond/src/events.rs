//! Event emitters, one per observable state change.
//!
//! Topics are always `(Symbol, Address)`; the payload goes in the data slot.

use crate::types::{BookingDate, Role, Year};
use soroban_sdk::{Address, Env, Symbol, Vec};

/// Emitted when an owner books one or more nights.
///
/// # Topics
/// * `Symbol` - "NewBookings"
/// * `Address` - The booking owner
///
/// # Data
/// * `Vec<BookingDate>` - The nights booked, in request order
pub fn emit_new_bookings(e: &Env, owner: &Address, dates: &Vec<BookingDate>) {
    let topics = (Symbol::new(e, "NewBookings"), owner.clone());
    e.events().publish(topics, dates.clone());
}

/// Emitted when an owner cancels one or more nights.
///
/// # Topics
/// * `Symbol` - "CanceledBookings"
/// * `Address` - The booking owner
///
/// # Data
/// * `Vec<BookingDate>` - The nights released
pub fn emit_canceled_bookings(e: &Env, owner: &Address, dates: &Vec<BookingDate>) {
    let topics = (Symbol::new(e, "CanceledBookings"), owner.clone());
    e.events().publish(topics, dates.clone());
}

/// # Data
/// * `Year` - The registered year
pub fn emit_year_added(e: &Env, caller: &Address, year: &Year) {
    let topics = (Symbol::new(e, "YearAdded"), caller.clone());
    e.events().publish(topics, year.clone());
}

/// # Data
/// * `u32` - The removed year number
pub fn emit_year_removed(e: &Env, caller: &Address, number: u32) {
    let topics = (Symbol::new(e, "YearRemoved"), caller.clone());
    e.events().publish(topics, number);
}

/// # Data
/// * `Year` - The year as stored after the change
pub fn emit_year_updated(e: &Env, caller: &Address, year: &Year) {
    let topics = (Symbol::new(e, "YearUpdated"), caller.clone());
    e.events().publish(topics, year.clone());
}

/// Emitted after a purchase settles.
///
/// # Topics
/// * `Symbol` - "SuccessBuy"
/// * `Address` - The buyer
///
/// # Data
/// * `i128` - Governance tokens minted
/// * `i128` - Quote tokens paid to the treasury
pub fn emit_success_buy(e: &Env, buyer: &Address, amount: i128, cost: i128) {
    let topics = (Symbol::new(e, "SuccessBuy"), buyer.clone());
    e.events().publish(topics, (amount, cost));
}

/// # Data
/// * `Address` - Quote token
/// * `Address` - Treasury receiving payments
pub fn emit_sale_configured(e: &Env, caller: &Address, quote_token: &Address, treasury: &Address) {
    let topics = (Symbol::new(e, "SaleConfigured"), caller.clone());
    e.events()
        .publish(topics, (quote_token.clone(), treasury.clone()));
}

/// # Data
/// * `i128` - Amount locked in the new tranche
pub fn emit_deposited_tokens(e: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(e, "DepositedTokens"), owner.clone());
    e.events().publish(topics, amount);
}

/// # Data
/// * `i128` - Amount released to the owner
pub fn emit_withdrawn_tokens(e: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(e, "WithdrawnTokens"), owner.clone());
    e.events().publish(topics, amount);
}

/// # Data
/// * `u64` - New lock window in seconds
pub fn emit_lock_duration_set(e: &Env, caller: &Address, seconds: u64) {
    let topics = (Symbol::new(e, "LockDurationSet"), caller.clone());
    e.events().publish(topics, seconds);
}

pub fn emit_paused(e: &Env, caller: &Address) {
    let topics = (Symbol::new(e, "Paused"), caller.clone());
    e.events().publish(topics, ());
}

pub fn emit_unpaused(e: &Env, caller: &Address) {
    let topics = (Symbol::new(e, "Unpaused"), caller.clone());
    e.events().publish(topics, ());
}

/// # Topics
/// * `Symbol` - "RoleGranted"
/// * `Address` - The account receiving the role
///
/// # Data
/// * `Role` - The role granted
/// * `Address` - The admin who granted it
pub fn emit_role_granted(e: &Env, account: &Address, role: Role, sender: &Address) {
    let topics = (Symbol::new(e, "RoleGranted"), account.clone());
    e.events().publish(topics, (role, sender.clone()));
}

pub fn emit_role_revoked(e: &Env, account: &Address, role: Role, sender: &Address) {
    let topics = (Symbol::new(e, "RoleRevoked"), account.clone());
    e.events().publish(topics, (role, sender.clone()));
}
