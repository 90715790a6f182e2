//! Accommodation calendar: registered years and day-of-year addressing.
//!
//! A day is addressed as `(year number, day of year)` with day 1 being the
//! first day of the year. Its absolute day number is `year.start + day - 1`,
//! and a day counts as past once that number is at or before today.

use crate::access_control;
use crate::booking;
use crate::events;
use crate::storage;
use crate::types::{Role, Year};
use resort_errors::{fail, ContractError};
use soroban_sdk::{contracttype, Address, Env, Vec};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_IN_YEAR: u32 = 365;
pub const DAYS_IN_LEAP_YEAR: u32 = 366;
/// First year whose start is representable as a day count since 1970-01-01.
pub const EPOCH_YEAR: u32 = 1970;

#[contracttype]
#[derive(Clone)]
pub enum CalendarKey {
    Year(u32),
    YearList,
}

/// Gregorian leap rule.
pub fn is_leap_year(number: u32) -> bool {
    (number % 4 == 0 && number % 100 != 0) || number % 400 == 0
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Month is 1-based, day is 1-based; negative results are dates before the
/// epoch.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Current day number derived from the ledger clock.
pub fn today(e: &Env) -> u32 {
    let day = e.ledger().timestamp() / SECONDS_PER_DAY;
    u32::try_from(day).unwrap_or_else(|_| fail(ContractError::Overflow))
}

impl Year {
    /// Builds the calendar year `number` with its real Gregorian day range.
    pub fn gregorian(number: u32, enabled: bool) -> Year {
        if number < EPOCH_YEAR {
            fail(ContractError::InvalidYear);
        }
        let start = days_from_civil(number as i64, 1, 1);
        let end = days_from_civil(number as i64 + 1, 1, 1);
        let to_day = |d: i64| u32::try_from(d).unwrap_or_else(|_| fail(ContractError::InvalidYear));
        Year {
            number,
            leap_year: is_leap_year(number),
            start: to_day(start),
            end: to_day(end),
            enabled,
        }
    }

    pub fn days(&self) -> u32 {
        if self.leap_year {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_YEAR
        }
    }

    pub fn contains_day(&self, day: u32) -> bool {
        day >= 1 && day <= self.days()
    }

    /// Absolute day number of `day`. Callers validate the day first.
    pub fn absolute_day(&self, day: u32) -> u32 {
        self.start + (day - 1)
    }

    pub fn is_past(&self, day: u32, today: u32) -> bool {
        self.absolute_day(day) <= today
    }
}

/// Aborts unless the day range length agrees with the leap flag.
pub fn validate_range(year: &Year) {
    match year.end.checked_sub(year.start) {
        Some(len) if len == year.days() => {}
        _ => fail(ContractError::InvalidYear),
    }
}

pub fn validate_day(year: &Year, day: u32) {
    if !year.contains_day(day) {
        fail(ContractError::InvalidDayOfYear);
    }
}

pub fn get_year(e: &Env, number: u32) -> Option<Year> {
    e.storage().persistent().get(&CalendarKey::Year(number))
}

fn require_year(e: &Env, number: u32) -> Year {
    get_year(e, number).unwrap_or_else(|| fail(ContractError::YearNotFound))
}

fn year_numbers(e: &Env) -> Vec<u32> {
    e.storage()
        .persistent()
        .get(&CalendarKey::YearList)
        .unwrap_or(Vec::new(e))
}

fn save_year(e: &Env, year: &Year) {
    let key = CalendarKey::Year(year.number);
    e.storage().persistent().set(&key, year);
    storage::bump_persistent(e, &key);
}

fn save_year_numbers(e: &Env, numbers: &Vec<u32>) {
    e.storage().persistent().set(&CalendarKey::YearList, numbers);
    storage::bump_persistent(e, &CalendarKey::YearList);
}

/// All registered years in ascending order of number.
pub fn get_years(e: &Env) -> Vec<Year> {
    let mut years = Vec::new(e);
    for number in year_numbers(e).iter() {
        if let Some(year) = get_year(e, number) {
            years.push_back(year);
        }
    }
    years
}

pub fn add_year(e: &Env, caller: &Address, year: &Year) {
    access_control::require_role(e, caller, Role::BookingManager);
    if get_year(e, year.number).is_some() {
        fail(ContractError::YearAlreadyExists);
    }
    validate_range(year);

    save_year(e, year);

    let mut numbers = year_numbers(e);
    let mut at = numbers.len();
    for (i, n) in numbers.iter().enumerate() {
        if n > year.number {
            at = i as u32;
            break;
        }
    }
    numbers.insert(at, year.number);
    save_year_numbers(e, &numbers);

    events::emit_year_added(e, caller, year);
}

/// Bookings in `year` can still be cancelled until its last day has passed.
fn has_open_bookings(e: &Env, year: &Year) -> bool {
    booking::year_booking_count(e, year.number) > 0 && !year.is_past(year.days(), today(e))
}

pub fn remove_year(e: &Env, caller: &Address, number: u32) {
    access_control::require_role(e, caller, Role::BookingManager);
    let year = require_year(e, number);
    if has_open_bookings(e, &year) {
        fail(ContractError::YearInUse);
    }

    e.storage().persistent().remove(&CalendarKey::Year(number));
    booking::release_year(e, number);
    let mut numbers = year_numbers(e);
    if let Some(i) = numbers.first_index_of(number) {
        numbers.remove(i);
    }
    save_year_numbers(e, &numbers);

    events::emit_year_removed(e, caller, number);
}

pub fn enable_year(e: &Env, caller: &Address, number: u32, enable: bool) {
    access_control::require_role(e, caller, Role::BookingManager);
    let mut year = require_year(e, number);
    year.enabled = enable;
    save_year(e, &year);
    events::emit_year_updated(e, caller, &year);
}

/// Replaces a registered year. The day range is frozen while bookings
/// reference the year; the enabled flag can always change.
pub fn update_year(e: &Env, caller: &Address, year: &Year) {
    access_control::require_role(e, caller, Role::BookingManager);
    let current = require_year(e, year.number);
    validate_range(year);

    let reranged = current.start != year.start
        || current.end != year.end
        || current.leap_year != year.leap_year;
    if reranged && has_open_bookings(e, &current) {
        fail(ContractError::YearInUse);
    }

    save_year(e, year);
    events::emit_year_updated(e, caller, year);
}
