//! Per-owner booking ledger.
//!
//! Bookings live in one persistent map per `(owner, year)` keyed by day of
//! year. Batches are staged in memory and validated in full before any write,
//! so a failing date leaves the ledger untouched.

use crate::calendar;
use crate::events;
use crate::math;
use crate::pausable;
use crate::storage;
use crate::types::{Booking, BookingDate, Year};
use resort_errors::{fail, ContractError};
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

#[contracttype]
#[derive(Clone)]
pub enum BookingKey {
    /// Day of year -> booking, for one owner and year.
    Bookings(Address, u32),
    /// Active bookings across all owners for one year.
    YearBookings(u32),
}

fn load_days(e: &Env, owner: &Address, year: u32) -> Map<u32, Booking> {
    e.storage()
        .persistent()
        .get(&BookingKey::Bookings(owner.clone(), year))
        .unwrap_or(Map::new(e))
}

fn save_days(e: &Env, owner: &Address, year: u32, days: &Map<u32, Booking>) {
    let key = BookingKey::Bookings(owner.clone(), year);
    if days.is_empty() {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, days);
        storage::bump_persistent(e, &key);
    }
}

/// Number of live bookings referencing `year`.
pub fn year_booking_count(e: &Env, year: u32) -> u32 {
    e.storage()
        .persistent()
        .get(&BookingKey::YearBookings(year))
        .unwrap_or(0)
}

/// Drops the live counter of a removed year. Booking records are kept.
pub fn release_year(e: &Env, year: u32) {
    e.storage()
        .persistent()
        .remove(&BookingKey::YearBookings(year));
}

fn set_year_booking_count(e: &Env, year: u32, count: u32) {
    let key = BookingKey::YearBookings(year);
    if count == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &count);
        storage::bump_persistent(e, &key);
    }
}

fn staged_days(
    e: &Env,
    staged: &Map<u32, Map<u32, Booking>>,
    owner: &Address,
    year: u32,
) -> Map<u32, Booking> {
    staged
        .get(year)
        .unwrap_or_else(|| load_days(e, owner, year))
}

fn bump_count(deltas: &mut Map<u32, u32>, year: u32) {
    let n = deltas.get(year).unwrap_or(0);
    deltas.set(year, math::add_u32(n, 1));
}

pub fn book(e: &Env, owner: &Address, dates: &Vec<BookingDate>) {
    pausable::require_not_paused(e);
    owner.require_auth();
    if dates.is_empty() {
        fail(ContractError::EmptyBatch);
    }

    let today = calendar::today(e);
    let booked_at = e.ledger().timestamp();
    let mut staged: Map<u32, Map<u32, Booking>> = Map::new(e);
    let mut added: Map<u32, u32> = Map::new(e);

    for date in dates.iter() {
        let year = calendar::get_year(e, date.year)
            .unwrap_or_else(|| fail(ContractError::YearDisabled));
        calendar::validate_day(&year, date.day);
        if year.is_past(date.day, today) {
            fail(ContractError::PastDate);
        }
        if !year.enabled {
            fail(ContractError::YearDisabled);
        }

        let mut days = staged_days(e, &staged, owner, date.year);
        if days.contains_key(date.day) {
            fail(ContractError::BookingAlreadyExists);
        }
        days.set(
            date.day,
            Booking {
                owner: owner.clone(),
                year: date.year,
                day_of_year: date.day,
                booked_at,
            },
        );
        staged.set(date.year, days);
        bump_count(&mut added, date.year);
    }

    for (year, days) in staged.iter() {
        save_days(e, owner, year, &days);
    }
    for (year, n) in added.iter() {
        let count = math::add_u32(year_booking_count(e, year), n);
        set_year_booking_count(e, year, count);
    }

    events::emit_new_bookings(e, owner, dates);
}

pub fn cancel(e: &Env, owner: &Address, dates: &Vec<BookingDate>) {
    pausable::require_not_paused(e);
    owner.require_auth();
    if dates.is_empty() {
        fail(ContractError::EmptyBatch);
    }

    let today = calendar::today(e);
    let mut staged: Map<u32, Map<u32, Booking>> = Map::new(e);
    let mut removed: Map<u32, u32> = Map::new(e);
    let mut years: Map<u32, Year> = Map::new(e);

    for date in dates.iter() {
        let mut days = staged_days(e, &staged, owner, date.year);
        if days.remove(date.day).is_none() {
            fail(ContractError::BookingNotFound);
        }

        let year = match years.get(date.year) {
            Some(y) => y,
            None => {
                let y = calendar::get_year(e, date.year)
                    .unwrap_or_else(|| fail(ContractError::YearNotFound));
                years.set(date.year, y.clone());
                y
            }
        };
        if year.is_past(date.day, today) {
            fail(ContractError::PastDate);
        }

        staged.set(date.year, days);
        bump_count(&mut removed, date.year);
    }

    for (year, days) in staged.iter() {
        save_days(e, owner, year, &days);
    }
    for (year, n) in removed.iter() {
        let count = math::sub_u32(year_booking_count(e, year), n);
        set_year_booking_count(e, year, count);
    }

    events::emit_canceled_bookings(e, owner, dates);
}

/// Bookings of `owner` in `year`, ordered by day.
pub fn get_bookings(e: &Env, owner: &Address, year: u32) -> Vec<Booking> {
    load_days(e, owner, year).values()
}

pub fn get_booking(e: &Env, owner: &Address, year: u32, day: u32) -> Option<Booking> {
    load_days(e, owner, year).get(day)
}
