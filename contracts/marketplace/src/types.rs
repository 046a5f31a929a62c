use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the marketplace ledger.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Platform owner, receives commission on every sale
    Owner,
    /// Token contract used to settle purchases
    PaymentToken,
    /// Identifier the next listing will receive
    NextProductId,
    /// Product record by ID
    Product(u64),
}

/// A seller's listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Listing label
    pub name: String,
    /// Price in the payment token's smallest unit
    pub price: i128,
    /// Account that created the listing
    pub seller: Address,
    /// Set once, on purchase
    pub sold: bool,
}

/// How a sale price is divided between the owner and the seller.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub commission: i128,
    pub seller_amount: i128,
}

/// Platform commission taken on every sale, in percent.
pub const COMMISSION_PERCENT: i128 = 5;

pub const PERCENT_DENOMINATOR: i128 = 100;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
