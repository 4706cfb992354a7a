#![no_std]


mod campaign;
mod errors;
mod escrow;
mod events;
mod storage;
mod storage_types;

pub use errors::{CrowdfundError, ErrorKind};
pub use storage_types::{Campaign, CampaignId, CampaignProgress, CampaignStatus, Contribution};

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Bind the contract to the token used for every pledge and payout
    pub fn initialize(e: Env, token: Address) -> Result<(), CrowdfundError> {
        if storage::is_initialized(&e) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        storage::set_token(&e, &token);
        log!(&e, "crowdfunding initialized", token);
        Ok(())
    }

    /// Open a new campaign owned by `owner`.
    ///
    /// The deadline is the current ledger sequence plus `deadline_offset`;
    /// pledges are accepted up to and including that ledger. Ids are handed
    /// out sequentially from 0.
    pub fn create_campaign(
        e: Env,
        owner: Address,
        goal: i128,
        deadline_offset: u32,
    ) -> Result<CampaignId, CrowdfundError> {
        owner.require_auth();
        if !storage::is_initialized(&e) {
            return Err(CrowdfundError::NotInitialized);
        }

        let height = e.ledger().sequence();
        let deadline = campaign::deadline_for(goal, height, deadline_offset)?;
        let campaign_id = storage::take_next_campaign_id(&e)?;

        let record = Campaign {
            id: campaign_id,
            owner: owner.clone(),
            goal,
            created_at: height,
            deadline,
            total_pledged: 0,
            settled: false,
        };
        storage::save_campaign(&e, &record);

        log!(&e, "campaign created", campaign_id, goal, deadline);
        events::emit_campaign_created(
            &e,
            events::CampaignCreatedEvent {
                campaign_id,
                owner,
                goal,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Pledge `amount` to an active campaign. Repeated pledges accumulate.
    pub fn contribute(
        e: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let mut record = storage::load_campaign(&e, campaign_id)?;
        campaign::ensure_open(&record, e.ledger().sequence())?;
        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let mut contribution = storage::load_contribution(&e, campaign_id, &contributor)
            .unwrap_or(Contribution {
                amount: 0,
                refunded: false,
            });
        contribution.amount = contribution
            .amount
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;
        record.total_pledged = record
            .total_pledged
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;

        // Local state is only written once the tokens have moved
        escrow::collect_pledge(&e, &contributor, amount)?;

        storage::save_contribution(&e, campaign_id, &contributor, &contribution);
        storage::save_campaign(&e, &record);

        log!(&e, "pledge recorded", campaign_id, amount, record.total_pledged);
        events::emit_contribution_made(
            &e,
            events::ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
                total_pledged: record.total_pledged,
            },
        );

        Ok(())
    }

    /// Owner withdraws the pooled funds of a campaign that met its goal.
    /// Succeeds at most once per campaign.
    pub fn claim_funds(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let mut record = storage::load_campaign(&e, campaign_id)?;
        let payout = campaign::ensure_claimable(&record, &caller, e.ledger().sequence())?;

        escrow::release(&e, &record.owner, payout)?;

        record.settled = true;
        storage::save_campaign(&e, &record);

        log!(&e, "funds claimed", campaign_id, payout);
        events::emit_funds_claimed(
            &e,
            events::FundsClaimedEvent {
                campaign_id,
                owner: record.owner,
                amount: payout,
            },
        );

        Ok(())
    }

    /// Return the caller's pledge from a campaign that missed its goal.
    /// Each contributor refunds independently and at most once.
    pub fn refund(
        e: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let record = storage::load_campaign(&e, campaign_id)?;
        let mut contribution = storage::load_contribution(&e, campaign_id, &contributor);
        let amount = campaign::ensure_refundable(
            &record,
            contribution.as_ref(),
            e.ledger().sequence(),
        )?;

        escrow::release(&e, &contributor, amount)?;

        if let Some(c) = contribution.as_mut() {
            c.refunded = true;
            storage::save_contribution(&e, campaign_id, &contributor, c);
        }

        log!(&e, "pledge refunded", campaign_id, amount);
        events::emit_refund_issued(
            &e,
            events::RefundIssuedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn get_campaign_details(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<Campaign, CrowdfundError> {
        storage::load_campaign(&e, campaign_id)
    }

    pub fn get_campaign_progress(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignProgress, CrowdfundError> {
        let record = storage::load_campaign(&e, campaign_id)?;
        Ok(campaign::progress(&e, &record, e.ledger().sequence()))
    }

    pub fn get_campaign_status(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignStatus, CrowdfundError> {
        let record = storage::load_campaign(&e, campaign_id)?;
        Ok(campaign::status(&record, e.ledger().sequence()))
    }

    pub fn get_contribution(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Option<Contribution> {
        storage::load_contribution(&e, campaign_id, &contributor)
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        storage::campaign_count(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, CrowdfundError> {
        storage::get_token(&e)
    }
}
