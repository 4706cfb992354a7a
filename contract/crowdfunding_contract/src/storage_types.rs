use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

pub type CampaignId = u64;

// Campaign record. Phase is never stored, see `campaign::status`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub goal: i128,
    pub created_at: u32,
    pub deadline: u32,                 // Last ledger sequence accepting pledges
    pub total_pledged: i128,
    pub settled: bool,                 // Set once the owner claims
}

// Cumulative pledge of one contributor toward one campaign
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Contribution {
    pub amount: i128,
    pub refunded: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignProgress {
    pub total_pledged: i128,
    pub goal: i128,
    pub percentage: i128,              // Truncated, may exceed 100
    pub remaining_blocks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Succeeded,
    Failed,
    Settled,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
