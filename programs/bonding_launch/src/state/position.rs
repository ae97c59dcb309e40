//! Position State
//!
//! One record per (user, launch). A position is never deleted: after a
//! full sell or a refund it stays at zero shares so its claim flags keep
//! their history.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;

#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Position {
    /// Launch this position belongs to
    pub launch_id: u64,

    /// Owner of the position
    pub user: Pubkey,

    /// Freely tradable shares
    pub shares: u64,

    /// Creator seed shares still vesting (zero for everyone else)
    pub locked_shares: u64,

    /// Lamports of unrefunded original cost.
    /// Partial sells shrink this in proportion to `shares`.
    pub sol_basis: u64,

    pub has_claimed_tokens: bool,
    pub has_claimed_refund: bool,

    pub first_buy_at: i64,
    pub last_updated_at: i64,

    pub bump: u8,
}

impl Position {
    pub fn new(launch_id: u64, user: Pubkey, now: i64) -> Self {
        Self {
            launch_id,
            user,
            first_buy_at: now,
            last_updated_at: now,
            ..Self::default()
        }
    }

    /// Every share the user holds, tradable or locked
    pub fn held_shares(&self) -> Result<u64> {
        self.shares
            .checked_add(self.locked_shares)
            .ok_or_else(|| LaunchError::Overflow.into())
    }

    pub fn is_holder(&self) -> bool {
        self.shares > 0 || self.locked_shares > 0
    }

    pub fn is_creator(&self, creator: &Pubkey) -> bool {
        self.user == *creator
    }
}
