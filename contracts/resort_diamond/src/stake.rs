//! Stake/lock ledger.
//!
//! Each owner holds an ordered list of tranches. A tranche unlocks on its own
//! once `deposited_at + lock_duration <= now`; since tranches are appended in
//! time order the unlocked ones always form a prefix of the list, and
//! withdraw/restake consume that prefix oldest first.

use crate::access_control;
use crate::events;
use crate::math;
use crate::pausable;
use crate::storage;
use crate::token_integration;
use crate::types::{Role, StakeDeposit};
use resort_errors::{fail, ContractError};
use soroban_sdk::{contracttype, log, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum StakeKey {
    StakeToken,
    LockDuration,
    TotalStaked,
    Deposits(Address),
}

pub fn init(e: &Env, token: &Address, lock_duration: u64) {
    e.storage().instance().set(&StakeKey::StakeToken, token);
    e.storage()
        .instance()
        .set(&StakeKey::LockDuration, &lock_duration);
    e.storage().instance().set(&StakeKey::TotalStaked, &0_i128);
}

fn token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&StakeKey::StakeToken)
        .unwrap_or_else(|| fail(ContractError::NotInitialized))
}

pub fn lock_duration(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&StakeKey::LockDuration)
        .unwrap_or(0)
}

pub fn set_lock_duration(e: &Env, caller: &Address, seconds: u64) {
    access_control::require_role(e, caller, Role::StakeManager);
    e.storage().instance().set(&StakeKey::LockDuration, &seconds);
    storage::bump_instance(e);
    events::emit_lock_duration_set(e, caller, seconds);
}

pub fn total_staked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&StakeKey::TotalStaked)
        .unwrap_or(0)
}

fn set_total_staked(e: &Env, total: i128) {
    e.storage().instance().set(&StakeKey::TotalStaked, &total);
    storage::bump_instance(e);
}

pub fn deposits_of(e: &Env, owner: &Address) -> Vec<StakeDeposit> {
    e.storage()
        .persistent()
        .get(&StakeKey::Deposits(owner.clone()))
        .unwrap_or(Vec::new(e))
}

fn save_deposits(e: &Env, owner: &Address, deposits: &Vec<StakeDeposit>) {
    let key = StakeKey::Deposits(owner.clone());
    if deposits.is_empty() {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, deposits);
        storage::bump_persistent(e, &key);
    }
}

fn is_unlocked(deposit: &StakeDeposit, now: u64, window: u64) -> bool {
    math::saturating_deadline(deposit.deposited_at, window) <= now
}

fn sum_unlocked(deposits: &Vec<StakeDeposit>, now: u64, window: u64) -> i128 {
    let mut total = 0_i128;
    for d in deposits.iter() {
        if is_unlocked(&d, now, window) {
            total = math::add_i128(total, d.amount);
        }
    }
    total
}

/// Removes `amount` from the unlocked tranches, oldest first. Callers check
/// `amount` against the unlockable balance beforehand.
fn consume_unlocked(
    e: &Env,
    deposits: &Vec<StakeDeposit>,
    amount: i128,
    now: u64,
    window: u64,
) -> Vec<StakeDeposit> {
    let mut remaining = amount;
    let mut kept = Vec::new(e);
    for d in deposits.iter() {
        if remaining > 0 && is_unlocked(&d, now, window) {
            if d.amount <= remaining {
                remaining -= d.amount;
                continue;
            }
            kept.push_back(StakeDeposit {
                amount: d.amount - remaining,
                deposited_at: d.deposited_at,
            });
            remaining = 0;
        } else {
            kept.push_back(d);
        }
    }
    kept
}

/// Appends a tranche stamped `now`, folding it into the newest tranche when
/// that one carries the same stamp. Tranches stay ordered by `deposited_at`.
fn push_tranche(deposits: &mut Vec<StakeDeposit>, amount: i128, now: u64) {
    if let Some(last) = deposits.last() {
        if last.deposited_at == now {
            deposits.set(
                deposits.len() - 1,
                StakeDeposit {
                    amount: math::add_i128(last.amount, amount),
                    deposited_at: now,
                },
            );
            return;
        }
    }
    deposits.push_back(StakeDeposit {
        amount,
        deposited_at: now,
    });
}

pub fn staked_balance_of(e: &Env, owner: &Address) -> i128 {
    let mut total = 0_i128;
    for d in deposits_of(e, owner).iter() {
        total = math::add_i128(total, d.amount);
    }
    total
}

pub fn unlocked_of(e: &Env, owner: &Address) -> i128 {
    sum_unlocked(&deposits_of(e, owner), e.ledger().timestamp(), lock_duration(e))
}

pub fn locked_of(e: &Env, owner: &Address) -> i128 {
    math::sub_i128(staked_balance_of(e, owner), unlocked_of(e, owner))
}

/// Locks `amount` governance tokens under a new tranche stamped now.
pub fn deposit(e: &Env, owner: &Address, amount: i128) {
    pausable::require_not_paused(e);
    owner.require_auth();
    if amount <= 0 {
        fail(ContractError::InvalidAmount);
    }
    let token = token(e);
    token_integration::require_allowance(e, &token, owner, amount);
    token_integration::require_balance(e, &token, owner, amount);

    let mut deposits = deposits_of(e, owner);
    push_tranche(&mut deposits, amount, e.ledger().timestamp());
    save_deposits(e, owner, &deposits);
    set_total_staked(e, math::add_i128(total_staked(e), amount));

    token_integration::transfer_into_contract(e, &token, owner, amount);
    events::emit_deposited_tokens(e, owner, amount);
}

fn release(e: &Env, owner: &Address, deposits: &Vec<StakeDeposit>, amount: i128) {
    let now = e.ledger().timestamp();
    let rest = consume_unlocked(e, deposits, amount, now, lock_duration(e));
    save_deposits(e, owner, &rest);
    set_total_staked(e, math::sub_i128(total_staked(e), amount));

    token_integration::transfer_from_contract(e, &token(e), owner, amount);
    events::emit_withdrawn_tokens(e, owner, amount);
}

pub fn withdraw(e: &Env, owner: &Address, amount: i128) {
    owner.require_auth();
    if amount <= 0 {
        fail(ContractError::InvalidAmount);
    }
    let deposits = deposits_of(e, owner);
    let unlocked = sum_unlocked(&deposits, e.ledger().timestamp(), lock_duration(e));
    if amount > unlocked {
        fail(ContractError::InsufficientUnlockableBalance);
    }
    release(e, owner, &deposits, amount);
}

/// Withdraws everything unlockable. Returns the amount released, zero being
/// a valid outcome.
pub fn withdraw_max(e: &Env, owner: &Address) -> i128 {
    owner.require_auth();
    let deposits = deposits_of(e, owner);
    let unlocked = sum_unlocked(&deposits, e.ledger().timestamp(), lock_duration(e));
    if unlocked == 0 {
        log!(e, "withdraw_max: nothing unlockable", owner);
        return 0;
    }
    release(e, owner, &deposits, unlocked);
    unlocked
}

fn relock(e: &Env, owner: &Address, deposits: &Vec<StakeDeposit>, amount: i128) {
    let now = e.ledger().timestamp();
    let mut rest = consume_unlocked(e, deposits, amount, now, lock_duration(e));
    push_tranche(&mut rest, amount, now);
    save_deposits(e, owner, &rest);
}

/// Moves `amount` of unlocked stake into a fresh tranche.
pub fn restake(e: &Env, owner: &Address, amount: i128) {
    owner.require_auth();
    if amount <= 0 {
        fail(ContractError::InvalidAmount);
    }
    let deposits = deposits_of(e, owner);
    let unlocked = sum_unlocked(&deposits, e.ledger().timestamp(), lock_duration(e));
    if amount > unlocked {
        fail(ContractError::InsufficientUnlockableBalance);
    }
    relock(e, owner, &deposits, amount);
}

pub fn restake_max(e: &Env, owner: &Address) -> i128 {
    owner.require_auth();
    let deposits = deposits_of(e, owner);
    let unlocked = sum_unlocked(&deposits, e.ledger().timestamp(), lock_duration(e));
    if unlocked == 0 {
        log!(e, "restake_max: nothing unlockable", owner);
        return 0;
    }
    relock(e, owner, &deposits, unlocked);
    unlocked
}
