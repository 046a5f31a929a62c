#![no_std]

//! # Marketplace Ledger
//!
//! Fixed-price listings settled in a single Stellar token. A seller lists a
//! product; a buyer pays its exact price, of which [`COMMISSION_PERCENT`] goes
//! to the platform owner and the rest to the seller.
//!
//! A product moves from `sold = false` to `sold = true` exactly once. The sale
//! is written to storage before any token transfer is made, and a trap in the
//! token contract rolls back the whole invocation.

mod errors;
mod events;
mod settlement;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use crate::errors::Error;
pub use crate::events::{ProductCreatedEvent, ProductSoldEvent};
pub use crate::types::{Product, Settlement, COMMISSION_PERCENT};

use crate::events::{emit_product_created, emit_product_sold};

#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // DEPLOYMENT
    // ========================================================================

    /// Fix the platform owner and the payment token for the lifetime of the
    /// contract. Runs once, at deployment.
    pub fn __constructor(e: &Env, owner: Address, payment_token: Address) {
        storage::set_owner(e, &owner);
        storage::set_payment_token(e, &payment_token);
        storage::set_next_product_id(e, 1);
        storage::extend_instance_ttl(e);
    }

    // ========================================================================
    // LISTINGS
    // ========================================================================

    /// List a new product. The authorizing `seller` owns the listing.
    ///
    /// # Arguments
    /// * `seller` - Address listing the product
    /// * `name` - Product name, must be non-empty
    /// * `price` - Price in the payment token's smallest unit, must be positive
    ///
    /// # Returns
    /// * The sequential product ID, starting at 1
    ///
    /// # Errors
    /// * `Error::InvalidInput` - Empty name or non-positive price
    pub fn create_product(
        e: &Env,
        seller: Address,
        name: String,
        price: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();

        if name.is_empty() {
            log!(e, "rejected listing: empty name");
            return Err(Error::InvalidInput);
        }

        if price <= 0 {
            log!(e, "rejected listing: price {} is not positive", price);
            return Err(Error::InvalidInput);
        }

        let id = storage::allocate_product_id(e);

        let product = Product {
            id,
            name: name.clone(),
            price,
            seller: seller.clone(),
            sold: false,
        };
        storage::set_product(e, &product);

        emit_product_created(e, id, seller, name, price, false);
        log!(e, "product {} listed at {}", id, price);

        storage::extend_instance_ttl(e);
        Ok(id)
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    /// * `Error::NotFound` - No product has this ID
    pub fn products(e: &Env, id: u64) -> Result<Product, Error> {
        storage::get_product(e, id).ok_or(Error::NotFound)
    }

    /// Number of products created so far.
    pub fn product_count(e: &Env) -> u64 {
        storage::get_next_product_id(e) - 1
    }

    // ========================================================================
    // PURCHASE
    // ========================================================================

    /// Buy a product for exactly its price.
    ///
    /// The buyer authorizes `payment`. The commission is transferred to the
    /// owner (skipped when it truncates to zero), the remainder to the seller.
    ///
    /// # Errors
    /// * `Error::NotFound` - No product has this ID
    /// * `Error::AlreadySold` - The product was already purchased
    /// * `Error::WrongAmount` - `payment` differs from the price
    pub fn purchase_product(e: &Env, buyer: Address, id: u64, payment: i128) -> Result<(), Error> {
        buyer.require_auth();

        let mut product = match storage::get_product(e, id) {
            Some(product) => product,
            None => {
                log!(e, "rejected purchase: product {} does not exist", id);
                return Err(Error::NotFound);
            }
        };

        if product.sold {
            log!(e, "rejected purchase: product {} already sold", id);
            return Err(Error::AlreadySold);
        }

        if payment != product.price {
            log!(e, "rejected purchase: paid {}, price is {}", payment, product.price);
            return Err(Error::WrongAmount);
        }

        let shares = settlement::split(product.price)?;
        let owner = storage::get_owner(e).ok_or(Error::NotInitialized)?;
        let token = storage::get_payment_token(e).ok_or(Error::NotInitialized)?;

        // Record the sale before any value leaves the buyer.
        product.sold = true;
        storage::set_product(e, &product);

        settlement::pay_out(e, &token, &buyer, &owner, &product.seller, &shares);

        emit_product_sold(e, id, product.seller.clone(), buyer, product.price);
        log!(
            e,
            "product {} sold: commission {}, seller proceeds {}",
            id,
            shares.commission,
            shares.seller_amount
        );

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Preview how a sale at `price` would be split.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - Non-positive price
    pub fn commission_for(price: i128) -> Result<Settlement, Error> {
        settlement::split(price)
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Platform owner receiving commission
    pub fn owner(e: &Env) -> Result<Address, Error> {
        storage::get_owner(e).ok_or(Error::NotInitialized)
    }

    /// Token contract purchases are settled in
    pub fn payment_token(e: &Env) -> Result<Address, Error> {
        storage::get_payment_token(e).ok_or(Error::NotInitialized)
    }
}
