//! Exponential bonding curve.
//!
//! The `k`-th whole token sold (0-based) costs `base_price * growth^k`, and a
//! fraction of a token is priced pro rata at the price of the unit it falls
//! in. Cumulative cost of the first `x` tokens is
//!
//! ```text
//! F(x) = base * ((g^w - 1) / (g - 1) + f * g^w),   w = floor(x), f = x - w
//! ```
//!
//! and a quote is `F(sold + amount) - F(sold)`. Everything is evaluated in
//! ray (27-decimal) fixed point on 256-bit integers and rounded up to 18
//! decimals at the end, so the sale keeps the rounding and quotes are path
//! independent: buying in two steps costs the same as one purchase, or one
//! base unit more.

use crate::math;
use crate::types::SaleCurve;
use resort_errors::{fail, ContractError};
use soroban_sdk::{Env, U256};

/// One whole token or quote unit (18 decimals).
pub const TOKEN_UNIT: i128 = 1_000_000_000_000_000_000;
/// Fixed-point one for the growth ratio (27 decimals).
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
/// Scale between a ray-denominated quote and an 18-decimal amount.
const RAY_PER_UNIT: u128 = 1_000_000_000;

/// Upper bound on `growth^k` in whole units. Keeps every intermediate
/// product below `2^256`.
pub const MAX_GROWTH_FACTOR: u128 = 100_000_000_000_000_000_000_000;
/// Largest supply cap a curve may declare (one billion tokens).
pub const MAX_SUPPLY_CAP: i128 = 1_000_000_000 * TOKEN_UNIT;

/// 223.11 quote tokens for the first governance token.
pub const DEFAULT_BASE_PRICE: i128 = 223_110_000_000_000_000_000;
/// 0.5% price increase per whole token sold.
pub const DEFAULT_GROWTH: u128 = 1_004_999_999_999_999_999_991_788_600;
/// The whole cap costs about 3.02e15 quote tokens, well inside `i128`.
pub const DEFAULT_MAX_SUPPLY: i128 = 5_000 * TOKEN_UNIT;

pub fn default_curve() -> SaleCurve {
    SaleCurve {
        base_price: DEFAULT_BASE_PRICE,
        growth: DEFAULT_GROWTH,
        max_supply: DEFAULT_MAX_SUPPLY,
    }
}

/// Constant unit price: every token costs `unit_price`.
pub fn flat_curve(unit_price: i128, max_supply: i128) -> SaleCurve {
    SaleCurve {
        base_price: unit_price,
        growth: RAY,
        max_supply,
    }
}

fn whole_units(x: &U256, ray: &U256) -> Option<u128> {
    x.div(ray).to_u128()
}

/// `growth^k` in ray, or `None` once the result would exceed
/// `MAX_GROWTH_FACTOR`. Each step truncates, matching `x * y / RAY`.
pub fn growth_pow(e: &Env, growth: u128, k: u64) -> Option<U256> {
    let ray = U256::from_u128(e, RAY);
    let mut result = ray.clone();
    let mut base = U256::from_u128(e, growth);
    let mut k = k;
    while k > 0 {
        if k & 1 == 1 {
            let r = whole_units(&result, &ray)?.checked_add(1)?;
            let b = whole_units(&base, &ray)?.checked_add(1)?;
            if r.checked_mul(b)? > MAX_GROWTH_FACTOR {
                return None;
            }
            result = result.mul(&base).div(&ray);
        }
        k >>= 1;
        // the last square would be discarded, and may not fit
        if k > 0 {
            let b = whole_units(&base, &ray)?.checked_add(1)?;
            if b.checked_mul(b)? > MAX_GROWTH_FACTOR {
                return None;
            }
            base = base.mul(&base).div(&ray);
        }
    }
    Some(result)
}

fn split(x: i128) -> (u64, u128) {
    let whole = u64::try_from(x / TOKEN_UNIT).unwrap_or_else(|_| fail(ContractError::Overflow));
    (whole, (x % TOKEN_UNIT) as u128)
}

/// `F(x) / base`: the curve's cumulative weight of the first `x` tokens, in ray.
fn cumulative_weight(e: &Env, growth: u128, x: i128) -> U256 {
    let ray = U256::from_u128(e, RAY);
    let (whole, frac) = split(x);

    let gk = growth_pow(e, growth, whole).unwrap_or_else(|| fail(ContractError::Overflow));
    let geometric = if growth == RAY {
        U256::from_u128(e, whole as u128).mul(&ray)
    } else {
        let ratio = U256::from_u128(e, growth - RAY);
        gk.sub(&ray).mul(&ray).div(&ratio)
    };
    let partial = gk
        .mul(&U256::from_u128(e, frac))
        .div(&U256::from_u128(e, TOKEN_UNIT as u128));
    geometric.add(&partial)
}

/// Cumulative cost `F(x)` of the first `x` tokens, in ray-scaled quote units.
fn cumulative_cost(e: &Env, curve: &SaleCurve, x: i128) -> U256 {
    cumulative_weight(e, curve.growth, x)
        .mul(&U256::from_u128(e, curve.base_price as u128))
        .div(&U256::from_u128(e, TOKEN_UNIT as u128))
}

/// Ray-scaled quote to an 18-decimal amount, rounding up.
fn to_amount(e: &Env, ray_amount: &U256) -> i128 {
    let scaled = ray_amount
        .add(&U256::from_u128(e, RAY_PER_UNIT - 1))
        .div(&U256::from_u128(e, RAY_PER_UNIT));
    scaled
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .unwrap_or_else(|| fail(ContractError::Overflow))
}

/// `x <= max` without relying on ordering of host integers.
fn at_most(e: &Env, x: &U256, max: &U256) -> bool {
    x.div(&max.add(&U256::from_u32(e, 1))).to_u128() == Some(0)
}

/// Aborts with `InvalidCurve` unless the curve is well formed and every
/// quote up to its cap fits an `i128`.
pub fn validate(e: &Env, curve: &SaleCurve) {
    if curve.base_price <= 0
        || curve.growth < RAY
        || curve.max_supply <= 0
        || curve.max_supply > MAX_SUPPLY_CAP
    {
        fail(ContractError::InvalidCurve);
    }
    let (whole, _) = split(curve.max_supply);
    if growth_pow(e, curve.growth, whole + 1).is_none() {
        fail(ContractError::InvalidCurve);
    }

    // F(cap) <= i128::MAX quote units, scaled to ray. Bounding the weight
    // by limit / base also keeps `weight * base` below 2^256. F is
    // monotone, so every smaller quote fits too.
    let limit = U256::from_u128(e, i128::MAX as u128)
        .mul(&U256::from_u128(e, RAY_PER_UNIT))
        .mul(&U256::from_u128(e, TOKEN_UNIT as u128));
    let max_weight = limit.div(&U256::from_u128(e, curve.base_price as u128));
    let weight = cumulative_weight(e, curve.growth, curve.max_supply);
    if !at_most(e, &weight, &max_weight) {
        fail(ContractError::InvalidCurve);
    }
}

/// Quote cost of `amount` tokens after `sold` have been sold.
pub fn quote(e: &Env, curve: &SaleCurve, sold: i128, amount: i128) -> i128 {
    if amount < 0 {
        fail(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return 0;
    }
    let end = math::add_i128(sold, amount);
    if end > curve.max_supply {
        fail(ContractError::SaleCapExceeded);
    }
    let hi = cumulative_cost(e, curve, end);
    let lo = cumulative_cost(e, curve, sold);
    to_amount(e, &hi.sub(&lo))
}

/// Price of the whole token that contains the next unit to be sold.
pub fn unit_price(e: &Env, curve: &SaleCurve, sold: i128) -> i128 {
    let (whole, _) = split(sold);
    let gk = growth_pow(e, curve.growth, whole).unwrap_or_else(|| fail(ContractError::Overflow));
    let price = gk
        .mul(&U256::from_u128(e, curve.base_price as u128))
        .div(&U256::from_u128(e, RAY));
    price
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .unwrap_or_else(|| fail(ContractError::Overflow))
}
