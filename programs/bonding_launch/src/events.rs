//! Events emitted by committed state transitions.

use anchor_lang::prelude::*;

#[event]
pub struct LaunchCreated {
    pub launch_id: u64,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub seed_lamports: u64,
    pub seed_shares: u64,
    pub timestamp: i64,
}

#[event]
pub struct SharesPurchased {
    pub launch_id: u64,
    pub buyer: Pubkey,
    pub lamports_in: u64,
    pub fee_lamports: u64,
    pub shares_out: u64,
    pub total_shares: u64,
    pub total_sol: u64,
    pub timestamp: i64,
}

#[event]
pub struct SharesSold {
    pub launch_id: u64,
    pub seller: Pubkey,
    pub shares_sold: u64,
    pub refund_lamports: u64,
    pub total_shares: u64,
    pub total_sol: u64,
    pub timestamp: i64,
}

#[event]
pub struct LaunchGraduated {
    pub launch_id: u64,
    pub total_shares: u64,
    pub total_sol: u64,
    pub holders: u64,
    pub market_cap_usd: f64,
    pub timestamp: i64,
}

#[event]
pub struct RefundEnabled {
    pub launch_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct RefundClaimed {
    pub launch_id: u64,
    pub user: Pubkey,
    pub refund_lamports: u64,
    pub timestamp: i64,
}

#[event]
pub struct VestingClaimed {
    pub launch_id: u64,
    pub creator: Pubkey,
    pub shares_unlocked: u64,
    pub remaining_locked: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensClaimed {
    pub launch_id: u64,
    pub user: Pubkey,
    pub tokens_claimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct CreatorFeesClaimed {
    pub launch_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
