use soroban_sdk::contracterror;

/// Error codes for the marketplace ledger contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Product ID has not been assigned
    NotFound = 1,
    /// Product has already been purchased
    AlreadySold = 2,
    /// Payment does not match the product price exactly
    WrongAmount = 3,
    /// Empty name or non-positive price
    InvalidInput = 4,
    /// Owner or payment token missing from instance storage
    NotInitialized = 6,
}
