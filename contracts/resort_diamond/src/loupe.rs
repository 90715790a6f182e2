//! Read-only routing table: which facet serves which exported function.

use crate::types::Facet;
use soroban_sdk::{Env, Symbol, Vec};

const ADMIN: &[&str] = &[
    "initialize",
    "grant_role",
    "revoke_role",
    "has_role",
    "pause",
    "unpause",
    "is_paused",
    "facets",
    "facet_of",
];

const CALENDAR: &[&str] = &[
    "add_accommodation_year",
    "remove_accommodation_year",
    "enable_accommodation_year",
    "update_accommodation_year",
    "get_accommodation_years",
    "get_accommodation_year",
];

const BOOKING: &[&str] = &[
    "book_accommodation",
    "cancel_accommodation",
    "get_accommodation_bookings",
    "get_accommodation_booking",
];

const SALE: &[&str] = &[
    "configure_sale",
    "calculate_price",
    "buy",
    "get_sale_config",
    "tokens_sold",
    "current_price",
];

const STAKE: &[&str] = &[
    "deposit_stake",
    "withdraw_max_stake",
    "withdraw_stake",
    "restake",
    "restake_max",
    "staked_balance_of",
    "unlocked_stake_of",
    "locked_stake_of",
    "stake_deposits_of",
    "total_staked",
    "stake_lock_duration",
    "set_stake_lock_duration",
];

const TABLE: &[(&str, &[&str])] = &[
    ("admin", ADMIN),
    ("calendar", CALENDAR),
    ("booking", BOOKING),
    ("sale", SALE),
    ("stake", STAKE),
];

pub fn facets(e: &Env) -> Vec<Facet> {
    let mut out = Vec::new(e);
    for (name, functions) in TABLE {
        let mut selectors = Vec::new(e);
        for f in functions.iter() {
            selectors.push_back(Symbol::new(e, f));
        }
        out.push_back(Facet {
            name: Symbol::new(e, name),
            functions: selectors,
        });
    }
    out
}

pub fn facet_of(e: &Env, function: &Symbol) -> Option<Symbol> {
    for (name, functions) in TABLE {
        for f in functions.iter() {
            if Symbol::new(e, f) == *function {
                return Some(Symbol::new(e, name));
            }
        }
    }
    None
}
