//! Role membership for the diamond.
//!
//! Every role-gated operation authenticates the caller and checks membership
//! before touching any facet state, so a missing role always wins over
//! "not found"-style failures.

use crate::events;
use crate::storage;
use crate::types::Role;
use resort_errors::{fail, ContractError};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum AdminKey {
    Initialized,
    Member(Role, Address),
    Paused,
}

pub const ALL_ROLES: [Role; 4] = [
    Role::DefaultAdmin,
    Role::BookingManager,
    Role::SaleManager,
    Role::StakeManager,
];

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&AdminKey::Initialized)
}

pub fn require_initialized(e: &Env) {
    if !is_initialized(e) {
        fail(ContractError::NotInitialized);
    }
}

/// Marks the diamond initialized and hands every role to `admin`.
pub fn init(e: &Env, admin: &Address) {
    if is_initialized(e) {
        fail(ContractError::AlreadyInitialized);
    }
    admin.require_auth();

    e.storage().instance().set(&AdminKey::Initialized, &true);
    e.storage().instance().set(&AdminKey::Paused, &false);
    for role in ALL_ROLES {
        store_member(e, role, admin, true);
        events::emit_role_granted(e, admin, role, admin);
    }
    storage::bump_instance(e);
}

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    e.storage()
        .instance()
        .get(&AdminKey::Member(role, account.clone()))
        .unwrap_or(false)
}

/// Authenticates `caller` and aborts unless it holds `role`.
pub fn require_role(e: &Env, caller: &Address, role: Role) {
    require_initialized(e);
    caller.require_auth();
    if !has_role(e, role, caller) {
        fail(ContractError::Unauthorized);
    }
}

pub fn grant_role(e: &Env, caller: &Address, role: Role, account: &Address) {
    require_role(e, caller, Role::DefaultAdmin);
    if has_role(e, role, account) {
        return;
    }
    store_member(e, role, account, true);
    storage::bump_instance(e);
    events::emit_role_granted(e, account, role, caller);
}

pub fn revoke_role(e: &Env, caller: &Address, role: Role, account: &Address) {
    require_role(e, caller, Role::DefaultAdmin);
    if !has_role(e, role, account) {
        return;
    }
    store_member(e, role, account, false);
    storage::bump_instance(e);
    events::emit_role_revoked(e, account, role, caller);
}

fn store_member(e: &Env, role: Role, account: &Address, member: bool) {
    let key = AdminKey::Member(role, account.clone());
    if member {
        e.storage().instance().set(&key, &true);
    } else {
        e.storage().instance().remove(&key);
    }
}
