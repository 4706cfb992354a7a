use soroban_sdk::{Address, Env, I256};

use crate::errors::CrowdfundError;
use crate::storage_types::{Campaign, CampaignProgress, CampaignStatus, Contribution};

/// Validate creation parameters and compute the deadline ledger.
pub fn deadline_for(goal: i128, height: u32, deadline_offset: u32) -> Result<u32, CrowdfundError> {
    if goal <= 0 {
        return Err(CrowdfundError::InvalidGoal);
    }
    if deadline_offset == 0 {
        return Err(CrowdfundError::InvalidDeadline);
    }
    height
        .checked_add(deadline_offset)
        .ok_or(CrowdfundError::InvalidDeadline)
}

/// Pledges are accepted up to and including the deadline ledger.
pub fn is_closed(campaign: &Campaign, height: u32) -> bool {
    height > campaign.deadline
}

pub fn goal_reached(campaign: &Campaign) -> bool {
    campaign.total_pledged >= campaign.goal
}

/// Derive the campaign phase. Computed on every read, never persisted.
pub fn status(campaign: &Campaign, height: u32) -> CampaignStatus {
    if campaign.settled {
        CampaignStatus::Settled
    } else if !is_closed(campaign, height) {
        CampaignStatus::Active
    } else if goal_reached(campaign) {
        CampaignStatus::Succeeded
    } else {
        CampaignStatus::Failed
    }
}

pub fn ensure_open(campaign: &Campaign, height: u32) -> Result<(), CrowdfundError> {
    if is_closed(campaign, height) {
        return Err(CrowdfundError::CampaignClosed);
    }
    Ok(())
}

/// Check every precondition of an owner claim and return the payout.
pub fn ensure_claimable(
    campaign: &Campaign,
    caller: &Address,
    height: u32,
) -> Result<i128, CrowdfundError> {
    if *caller != campaign.owner {
        return Err(CrowdfundError::NotOwner);
    }
    if !is_closed(campaign, height) {
        return Err(CrowdfundError::CampaignNotClosed);
    }
    if !goal_reached(campaign) {
        return Err(CrowdfundError::GoalNotMet);
    }
    if campaign.settled {
        return Err(CrowdfundError::AlreadySettled);
    }
    Ok(campaign.total_pledged)
}

/// Check every precondition of a contributor refund and return the amount owed.
pub fn ensure_refundable(
    campaign: &Campaign,
    contribution: Option<&Contribution>,
    height: u32,
) -> Result<i128, CrowdfundError> {
    if !is_closed(campaign, height) {
        return Err(CrowdfundError::CampaignNotClosed);
    }
    if goal_reached(campaign) {
        return Err(CrowdfundError::GoalMet);
    }
    let contribution = match contribution {
        Some(c) if c.amount > 0 => c,
        _ => return Err(CrowdfundError::NoContribution),
    };
    if contribution.refunded {
        return Err(CrowdfundError::AlreadyRefunded);
    }
    Ok(contribution.amount)
}

/// Percentage is the truncated `total_pledged * 100 / goal`, computed in 256
/// bits and saturated at `i128::MAX`.
pub fn progress(e: &Env, campaign: &Campaign, height: u32) -> CampaignProgress {
    let percentage = I256::from_i128(e, campaign.total_pledged)
        .mul(&I256::from_i128(e, 100))
        .div(&I256::from_i128(e, campaign.goal))
        .to_i128()
        .unwrap_or(i128::MAX);

    CampaignProgress {
        total_pledged: campaign.total_pledged,
        goal: campaign.goal,
        percentage,
        remaining_blocks: campaign.deadline.saturating_sub(height),
    }
}
