use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidGoal = 4,
    InvalidDeadline = 5,
    InvalidAmount = 6,
    CampaignClosed = 7,
    CampaignNotClosed = 8,
    NotOwner = 9,
    GoalNotMet = 10,
    GoalMet = 11,
    AlreadySettled = 12,
    NoContribution = 13,
    AlreadyRefunded = 14,
    InsufficientBalance = 15,
    InsufficientEscrow = 16,
    Overflow = 17,
}

/// Coarse classification of a [`CrowdfundError`], for callers that only
/// care about why a call was rejected rather than the exact code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    StateConflict,
    Authorization,
    AlreadySettled,
    AlreadyRefunded,
    LedgerFailure,
    Configuration,
    Internal,
}

impl CrowdfundError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrowdfundError::CampaignNotFound => ErrorKind::NotFound,
            CrowdfundError::InvalidGoal
            | CrowdfundError::InvalidDeadline
            | CrowdfundError::InvalidAmount => ErrorKind::Validation,
            CrowdfundError::CampaignClosed
            | CrowdfundError::CampaignNotClosed
            | CrowdfundError::GoalNotMet
            | CrowdfundError::GoalMet
            | CrowdfundError::NoContribution => ErrorKind::StateConflict,
            CrowdfundError::NotOwner => ErrorKind::Authorization,
            CrowdfundError::AlreadySettled => ErrorKind::AlreadySettled,
            CrowdfundError::AlreadyRefunded => ErrorKind::AlreadyRefunded,
            CrowdfundError::InsufficientBalance => ErrorKind::LedgerFailure,
            CrowdfundError::AlreadyInitialized | CrowdfundError::NotInitialized => {
                ErrorKind::Configuration
            }
            // Escrow should always cover what it recorded
            CrowdfundError::InsufficientEscrow | CrowdfundError::Overflow => ErrorKind::Internal,
        }
    }
}
