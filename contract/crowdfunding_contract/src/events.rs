use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub goal: i128,
    pub deadline: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub total_pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsClaimedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "created")),
        event,
    );
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "contributed")),
        event,
    );
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "claimed")),
        event,
    );
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "refunded")),
        event,
    );
}
