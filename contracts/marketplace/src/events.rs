use soroban_sdk::{contracttype, Address, Env, String, Symbol};

pub const PRODUCT_CREATED: &str = "product_created";
pub const PRODUCT_SOLD: &str = "product_sold";

/// Published when a seller lists a product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductCreatedEvent {
    pub id: u64,
    pub seller: Address,
    pub name: String,
    pub price: i128,
    pub sold: bool,
}

/// Published when a buyer completes a purchase
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductSoldEvent {
    pub id: u64,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
}

pub fn emit_product_created(
    env: &Env,
    id: u64,
    seller: Address,
    name: String,
    price: i128,
    sold: bool,
) {
    let event = ProductCreatedEvent {
        id,
        seller: seller.clone(),
        name,
        price,
        sold,
    };
    env.events()
        .publish((Symbol::new(env, PRODUCT_CREATED), id, seller), event);
}

pub fn emit_product_sold(env: &Env, id: u64, seller: Address, buyer: Address, price: i128) {
    let event = ProductSoldEvent {
        id,
        seller,
        buyer: buyer.clone(),
        price,
    };
    env.events()
        .publish((Symbol::new(env, PRODUCT_SOLD), id, buyer), event);
}
