use soroban_sdk::{Address, Env};

use crate::errors::CrowdfundError;
use crate::storage_types::{
    Campaign, CampaignId, Contribution, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::NextCampaignId, &0u64);
    extend_instance(e);
}

pub fn get_token(e: &Env) -> Result<Address, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Number of campaigns ever created, which is also the next id to hand out.
pub fn campaign_count(e: &Env) -> CampaignId {
    e.storage().instance().get(&DataKey::NextCampaignId).unwrap_or(0)
}

/// Reserve the next campaign id. Ids start at 0 and are never reused.
pub fn take_next_campaign_id(e: &Env) -> Result<CampaignId, CrowdfundError> {
    let id = campaign_count(e);
    let next = id.checked_add(1).ok_or(CrowdfundError::Overflow)?;
    e.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(e);
    Ok(id)
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn load_contribution(
    e: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
) -> Option<Contribution> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
}

pub fn save_contribution(
    e: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    contribution: &Contribution,
) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    e.storage().persistent().set(&key, contribution);
    extend_persistent(e, &key);
}
