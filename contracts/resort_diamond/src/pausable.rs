use crate::access_control::{self, AdminKey};
use crate::events;
use crate::storage;
use crate::types::Role;
use resort_errors::{fail, ContractError};
use soroban_sdk::{Address, Env};

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&AdminKey::Paused)
        .unwrap_or(false)
}

/// Gate for every state-mutating user operation except stake withdrawals.
pub fn require_not_paused(e: &Env) {
    if is_paused(e) {
        fail(ContractError::Paused);
    }
}

pub fn pause(e: &Env, caller: &Address) {
    access_control::require_role(e, caller, Role::DefaultAdmin);
    if is_paused(e) {
        fail(ContractError::Paused);
    }
    e.storage().instance().set(&AdminKey::Paused, &true);
    storage::bump_instance(e);
    events::emit_paused(e, caller);
}

pub fn unpause(e: &Env, caller: &Address) {
    access_control::require_role(e, caller, Role::DefaultAdmin);
    if !is_paused(e) {
        fail(ContractError::NotPaused);
    }
    e.storage().instance().set(&AdminKey::Paused, &false);
    storage::bump_instance(e);
    events::emit_unpaused(e, caller);
}
