#![cfg(test)]

use crate::test_helpers::{dates, fund_governance, last_event, setup_with_years, UNIT};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_pause_blocks_state_changes_but_allows_reads() {
    let e = Env::default();
    let s = setup_with_years(&e);
    s.client
        .book_accommodation(&s.user, &dates(&e, &[(2025, 100)]));

    assert!(!s.client.is_paused());
    s.client.pause(&s.admin);
    assert!(s.client.is_paused());

    // reads still work
    assert_eq!(s.client.get_accommodation_bookings(&s.user, &2025).len(), 1);
    assert_eq!(s.client.get_accommodation_years().len(), 2);
    assert!(s.client.calculate_price(&UNIT) > 0);

    assert!(s
        .client
        .try_book_accommodation(&s.user, &dates(&e, &[(2025, 101)]))
        .is_err());
    assert!(s
        .client
        .try_cancel_accommodation(&s.user, &dates(&e, &[(2025, 100)]))
        .is_err());
    assert!(s.client.try_buy(&s.user, &UNIT).is_err());
    assert!(s.client.try_deposit_stake(&s.user, &UNIT).is_err());

    s.client.unpause(&s.admin);
    assert!(!s.client.is_paused());

    s.client
        .book_accommodation(&s.user, &dates(&e, &[(2025, 101)]));
    s.client
        .cancel_accommodation(&s.user, &dates(&e, &[(2025, 100)]));
    fund_governance(&e, &s, &s.user, UNIT);
    s.client.deposit_stake(&s.user, &UNIT);
}

#[test]
#[should_panic(expected = "Pausable: paused")]
fn test_book_while_paused_fails() {
    let e = Env::default();
    let s = setup_with_years(&e);
    s.client.pause(&s.admin);
    s.client
        .book_accommodation(&s.user, &dates(&e, &[(2025, 100)]));
}

#[test]
#[should_panic(expected = "Pausable: paused")]
fn test_pause_twice_fails() {
    let e = Env::default();
    let s = setup_with_years(&e);
    s.client.pause(&s.admin);
    s.client.pause(&s.admin);
}

#[test]
#[should_panic(expected = "Pausable: not paused")]
fn test_unpause_when_open_fails() {
    let e = Env::default();
    let s = setup_with_years(&e);
    s.client.unpause(&s.admin);
}

#[test]
#[should_panic(expected = "AccessControl: missing role")]
fn test_pause_requires_admin_role() {
    let e = Env::default();
    let s = setup_with_years(&e);
    let stranger = Address::generate(&e);
    s.client.pause(&stranger);
}

#[test]
fn test_year_management_not_gated_by_pause() {
    let e = Env::default();
    let s = setup_with_years(&e);
    s.client.pause(&s.admin);
    s.client.enable_accommodation_year(&s.admin, &2026, &false);
    assert!(!s.client.get_accommodation_year(&2026).unwrap().enabled);
}

#[test]
fn test_pause_events() {
    let e = Env::default();
    let s = setup_with_years(&e);

    s.client.pause(&s.admin);
    assert!(last_event(&e, &s.contract_id, "Paused").is_some());

    s.client.unpause(&s.admin);
    assert!(last_event(&e, &s.contract_id, "Unpaused").is_some());
}
