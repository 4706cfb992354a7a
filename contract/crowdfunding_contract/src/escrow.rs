use soroban_sdk::{token, Address, Env};

use crate::errors::CrowdfundError;
use crate::storage;

/// Move a pledge from the contributor into the contract's escrow balance.
pub fn collect_pledge(e: &Env, contributor: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(e, &storage::get_token(e)?);

    if token_client.balance(contributor) < amount {
        return Err(CrowdfundError::InsufficientBalance);
    }

    token_client.transfer(contributor, &e.current_contract_address(), &amount);
    Ok(())
}

/// Pay out of escrow. Escrow always holds at least what was recorded, so a
/// shortfall here means the accounting is broken.
pub fn release(e: &Env, recipient: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(e, &storage::get_token(e)?);
    let escrow = e.current_contract_address();

    if token_client.balance(&escrow) < amount {
        return Err(CrowdfundError::InsufficientEscrow);
    }

    token_client.transfer(&escrow, recipient, &amount);
    Ok(())
}
