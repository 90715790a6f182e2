#![cfg(test)]

use crate::test_helpers::{
    advance, balance, fund_governance, last_event, set_time, setup, DAY, LOCK_DURATION, NOW, UNIT,
};
use crate::types::{Role, StakeDeposit};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, FromVal};

#[test]
fn test_deposit_locks_tokens() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);

    s.client.deposit_stake(&s.user, &(40 * UNIT));

    assert_eq!(balance(&e, &s.token, &s.user), 60 * UNIT);
    assert_eq!(balance(&e, &s.token, &s.contract_id), 40 * UNIT);
    assert_eq!(s.client.staked_balance_of(&s.user), 40 * UNIT);
    assert_eq!(s.client.locked_stake_of(&s.user), 40 * UNIT);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 0);
    assert_eq!(s.client.total_staked(), 40 * UNIT);
    assert_eq!(
        s.client.stake_deposits_of(&s.user),
        vec![
            &e,
            StakeDeposit {
                amount: 40 * UNIT,
                deposited_at: NOW
            }
        ]
    );
}

#[test]
fn test_deposits_in_one_ledger_share_a_tranche() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);

    for _ in 0..5 {
        s.client.deposit_stake(&s.user, &(2 * UNIT));
    }
    advance(&e, LOCK_DURATION);
    s.client.restake(&s.user, &(4 * UNIT));
    s.client.deposit_stake(&s.user, &UNIT);

    assert_eq!(
        s.client.stake_deposits_of(&s.user),
        vec![
            &e,
            StakeDeposit {
                amount: 6 * UNIT,
                deposited_at: NOW
            },
            StakeDeposit {
                amount: 5 * UNIT,
                deposited_at: NOW + LOCK_DURATION
            }
        ]
    );
    assert_eq!(s.client.staked_balance_of(&s.user), 11 * UNIT);
}

#[test]
fn test_tranche_unlocks_exactly_at_window_end() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));

    set_time(&e, NOW + LOCK_DURATION - 1);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 0);

    set_time(&e, NOW + LOCK_DURATION);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 10 * UNIT);
    assert_eq!(s.client.locked_stake_of(&s.user), 0);
}

#[test]
fn test_tranches_unlock_independently() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);

    s.client.deposit_stake(&s.user, &(10 * UNIT));
    advance(&e, 10 * DAY);
    s.client.deposit_stake(&s.user, &(20 * UNIT));

    set_time(&e, NOW + LOCK_DURATION);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 10 * UNIT);
    assert_eq!(s.client.locked_stake_of(&s.user), 20 * UNIT);

    advance(&e, 10 * DAY);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 30 * UNIT);
}

#[test]
fn test_withdraw_unlocked_amount() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(50 * UNIT));
    advance(&e, LOCK_DURATION);

    s.client.withdraw_stake(&s.user, &(20 * UNIT));

    assert_eq!(balance(&e, &s.token, &s.user), 70 * UNIT);
    assert_eq!(s.client.staked_balance_of(&s.user), 30 * UNIT);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 30 * UNIT);
    assert_eq!(s.client.total_staked(), 30 * UNIT);

    let (topics, data) = last_event(&e, &s.contract_id, "WithdrawnTokens").unwrap();
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), s.user);
    assert_eq!(i128::from_val(&e, &data), 20 * UNIT);
}

#[test]
#[should_panic(expected = "not enough unlockable balance")]
fn test_withdraw_above_unlockable_fails_even_if_total_covers() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));
    advance(&e, LOCK_DURATION);
    s.client.deposit_stake(&s.user, &(50 * UNIT));

    // 60 staked, only 10 unlocked
    s.client.withdraw_stake(&s.user, &(11 * UNIT));
}

#[test]
#[should_panic(expected = "not enough unlockable balance")]
fn test_withdraw_while_locked_fails() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));
    s.client.withdraw_stake(&s.user, &UNIT);
}

#[test]
fn test_withdraw_consumes_oldest_first() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));
    advance(&e, DAY);
    s.client.deposit_stake(&s.user, &(20 * UNIT));
    advance(&e, LOCK_DURATION);

    s.client.withdraw_stake(&s.user, &(15 * UNIT));

    assert_eq!(
        s.client.stake_deposits_of(&s.user),
        vec![
            &e,
            StakeDeposit {
                amount: 15 * UNIT,
                deposited_at: NOW + DAY
            }
        ]
    );
}

#[test]
fn test_withdraw_max_releases_everything_unlocked() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));
    advance(&e, LOCK_DURATION);
    s.client.deposit_stake(&s.user, &(5 * UNIT));

    assert_eq!(s.client.withdraw_max_stake(&s.user), 10 * UNIT);
    assert_eq!(s.client.staked_balance_of(&s.user), 5 * UNIT);
    assert_eq!(balance(&e, &s.token, &s.user), 95 * UNIT);
}

#[test]
fn test_withdraw_max_with_nothing_unlocked_is_silent() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));

    assert_eq!(s.client.withdraw_max_stake(&s.user), 0);

    assert!(last_event(&e, &s.contract_id, "WithdrawnTokens").is_none());
    assert_eq!(s.client.staked_balance_of(&s.user), 10 * UNIT);
    assert_eq!(balance(&e, &s.token, &s.user), 90 * UNIT);
}

#[test]
fn test_withdraw_max_without_stake() {
    let e = Env::default();
    let s = setup(&e);
    let nobody = Address::generate(&e);
    assert_eq!(s.client.withdraw_max_stake(&nobody), 0);
    assert_eq!(s.client.restake_max(&nobody), 0);
}

#[test]
fn test_restake_relocks_unlocked_stake() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(30 * UNIT));
    advance(&e, LOCK_DURATION);
    let relocked_at = e.ledger().timestamp();

    s.client.restake(&s.user, &(10 * UNIT));

    assert_eq!(s.client.staked_balance_of(&s.user), 30 * UNIT);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 20 * UNIT);
    assert_eq!(s.client.locked_stake_of(&s.user), 10 * UNIT);
    assert_eq!(s.client.total_staked(), 30 * UNIT);
    assert_eq!(balance(&e, &s.token, &s.contract_id), 30 * UNIT);
    assert_eq!(
        s.client.stake_deposits_of(&s.user),
        vec![
            &e,
            StakeDeposit {
                amount: 20 * UNIT,
                deposited_at: NOW
            },
            StakeDeposit {
                amount: 10 * UNIT,
                deposited_at: relocked_at
            }
        ]
    );
}

#[test]
#[should_panic(expected = "not enough unlockable balance")]
fn test_restake_above_unlockable_fails() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(30 * UNIT));
    s.client.restake(&s.user, &UNIT);
}

#[test]
fn test_restake_max() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(30 * UNIT));
    assert_eq!(s.client.restake_max(&s.user), 0);

    advance(&e, LOCK_DURATION);
    assert_eq!(s.client.restake_max(&s.user), 30 * UNIT);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 0);

    advance(&e, LOCK_DURATION);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 30 * UNIT);
}

#[test]
#[should_panic(expected = "amount must be positive")]
fn test_deposit_zero_fails() {
    let e = Env::default();
    let s = setup(&e);
    s.client.deposit_stake(&s.user, &0);
}

#[test]
#[should_panic(expected = "insufficient token allowance")]
fn test_deposit_without_allowance_fails() {
    let e = Env::default();
    let s = setup(&e);
    s.client.deposit_stake(&s.user, &UNIT);
}

#[test]
#[should_panic(expected = "Pausable: paused")]
fn test_deposit_while_paused_fails() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.pause(&s.admin);
    s.client.deposit_stake(&s.user, &UNIT);
}

#[test]
fn test_withdraw_allowed_while_paused() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));
    advance(&e, LOCK_DURATION);
    s.client.pause(&s.admin);

    s.client.withdraw_stake(&s.user, &(10 * UNIT));
    assert_eq!(balance(&e, &s.token, &s.user), 100 * UNIT);
}

#[test]
fn test_lock_duration_change_applies_to_existing_tranches() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(10 * UNIT));

    s.client.set_stake_lock_duration(&s.admin, &DAY);
    assert_eq!(s.client.stake_lock_duration(), DAY);
    advance(&e, DAY);
    assert_eq!(s.client.unlocked_stake_of(&s.user), 10 * UNIT);
}

#[test]
#[should_panic(expected = "AccessControl: missing role")]
fn test_set_lock_duration_requires_stake_manager() {
    let e = Env::default();
    let s = setup(&e);
    s.client.set_stake_lock_duration(&s.user, &DAY);
}

#[test]
fn test_stake_manager_can_set_lock_duration() {
    let e = Env::default();
    let s = setup(&e);
    let manager = Address::generate(&e);
    s.client.grant_role(&s.admin, &Role::StakeManager, &manager);
    s.client.set_stake_lock_duration(&manager, &(2 * DAY));
    assert_eq!(s.client.stake_lock_duration(), 2 * DAY);
}

#[test]
fn test_deposit_event() {
    let e = Env::default();
    let s = setup(&e);
    fund_governance(&e, &s, &s.user, 100 * UNIT);
    s.client.deposit_stake(&s.user, &(7 * UNIT));

    let (topics, data) = last_event(&e, &s.contract_id, "DepositedTokens").unwrap();
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), s.user);
    assert_eq!(i128::from_val(&e, &data), 7 * UNIT);
}
