use soroban_sdk::{Address, Env};

use crate::types::{
    Product, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

/// Get the platform owner
pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&StorageKey::Owner, owner);
}

/// Get the token contract purchases are settled in
pub fn get_payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::PaymentToken)
}

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::PaymentToken, token);
}

/// Extend the TTL of instance storage.
/// Called during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// PRODUCT COUNTER
// ============================================================================

/// Identifier the next listing will receive. Starts at 1.
pub fn get_next_product_id(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&StorageKey::NextProductId)
        .unwrap_or(1)
}

pub fn set_next_product_id(e: &Env, id: u64) {
    e.storage().instance().set(&StorageKey::NextProductId, &id);
}

/// Advance the counter and return the identifier that was allocated.
pub fn allocate_product_id(e: &Env) -> u64 {
    let id = get_next_product_id(e);
    set_next_product_id(e, id + 1);
    id
}

// ============================================================================
// PRODUCT STORAGE
// ============================================================================

/// Get product information by ID
pub fn get_product(e: &Env, product_id: u64) -> Option<Product> {
    let key = StorageKey::Product(product_id);
    let product = e.storage().persistent().get::<_, Product>(&key);
    if product.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    product
}

/// Set product information
pub fn set_product(e: &Env, product: &Product) {
    let key = StorageKey::Product(product.id);
    e.storage().persistent().set(&key, product);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
