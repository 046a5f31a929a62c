use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::types::{Settlement, COMMISSION_PERCENT, PERCENT_DENOMINATOR};

/// Split a sale price into the owner's commission and the seller's proceeds.
///
/// The commission is `floor(price * COMMISSION_PERCENT / 100)`; the seller
/// receives the remainder, so the two parts always sum to `price`.
///
/// Whole hundreds and the remainder are scaled separately, so every positive
/// `i128` price splits without overflow.
pub fn split(price: i128) -> Result<Settlement, Error> {
    if price <= 0 {
        return Err(Error::InvalidInput);
    }

    let commission = price / PERCENT_DENOMINATOR * COMMISSION_PERCENT
        + price % PERCENT_DENOMINATOR * COMMISSION_PERCENT / PERCENT_DENOMINATOR;

    Ok(Settlement {
        commission,
        seller_amount: price - commission,
    })
}

/// Move the buyer's payment to the owner and the seller.
///
/// The caller must have persisted the sale before calling this. A trap in the
/// token contract aborts the whole invocation, including that write.
pub fn pay_out(
    env: &Env,
    token: &Address,
    buyer: &Address,
    owner: &Address,
    seller: &Address,
    settlement: &Settlement,
) {
    let token_client = token::TokenClient::new(env, token);

    if settlement.commission > 0 {
        token_client.transfer(buyer, owner, &settlement.commission);
    }

    token_client.transfer(buyer, seller, &settlement.seller_amount);
}
