use soroban_sdk::{contracttype, Address, Symbol, Vec};

/// Roles recognised by the access-control gate.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    DefaultAdmin,
    BookingManager,
    SaleManager,
    StakeManager,
}

/// A bookable accommodation year.
///
/// `start` and `end` are absolute day numbers counted from 1970-01-01, with
/// `end` exclusive, so `end - start` is the number of days in the year.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Year {
    pub number: u32,
    pub leap_year: bool,
    pub start: u32,
    pub end: u32,
    pub enabled: bool,
}

/// Address of one night: a registered year and a 1-based day within it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BookingDate {
    pub year: u32,
    pub day: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    pub owner: Address,
    pub year: u32,
    pub day_of_year: u32,
    pub booked_at: u64,
}

/// Parameters of the exponential bonding curve.
///
/// * `base_price` - quote cost of the first whole token (18 decimals)
/// * `growth` - per-token price ratio in ray (27 decimals), `>= 1 ray`
/// * `max_supply` - total governance tokens the sale may mint (18 decimals)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleCurve {
    pub base_price: i128,
    pub growth: u128,
    pub max_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub quote_token: Address,
    pub treasury: Address,
    pub curve: SaleCurve,
}

/// One locked tranche. Unlocks once `deposited_at + lock_duration <= now`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeDeposit {
    pub amount: i128,
    pub deposited_at: u64,
}

/// Loupe entry: a facet and the exported functions routed to it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Facet {
    pub name: Symbol,
    pub functions: Vec<Symbol>,
}
