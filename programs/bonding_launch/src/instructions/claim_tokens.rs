//! Token Claim
//!
//! After graduation each holder converts their shares into token base
//! units, pro rata over the supply frozen at graduation.

use anchor_lang::prelude::*;

use crate::constants::TOKEN_DECIMALS;
use crate::errors::LaunchError;
use crate::events::TokensClaimed;
use crate::state::{Launch, LaunchConfig, Position};

pub struct ClaimTokens<'a> {
    pub config: &'a LaunchConfig,
    pub launch: &'a Launch,
    pub position: &'a mut Position,
}

impl<'a> ClaimTokens<'a> {
    /// Token base units owed to `position`:
    /// `shares · tokens_for_holders · 10^decimals / total_shares_at_graduation`
    pub fn claimable_tokens(&self) -> Result<u64> {
        require!(
            self.launch.total_shares_at_graduation > 0,
            LaunchError::InvariantViolation
        );
        let amount = (self.position.shares as u128)
            .checked_mul(self.config.tokens_for_holders as u128)
            .and_then(|v| v.checked_mul(10u128.pow(TOKEN_DECIMALS)))
            .ok_or(LaunchError::Overflow)?
            / self.launch.total_shares_at_graduation as u128;
        u64::try_from(amount).map_err(|_| LaunchError::Overflow.into())
    }

    /// Claim the position's tokens once. Returns the base units claimed.
    pub fn claim_tokens(&mut self, now: i64) -> Result<u64> {
        require!(self.launch.graduated, LaunchError::NotGraduated);
        require!(
            self.position.launch_id == self.launch.launch_id,
            LaunchError::LaunchMismatch
        );
        require!(
            !self.position.has_claimed_tokens,
            LaunchError::AlreadyClaimed
        );
        require!(
            self.position.locked_shares == 0,
            LaunchError::VestingNotComplete
        );
        require!(self.position.shares > 0, LaunchError::NothingToClaim);

        let tokens = self.claimable_tokens()?;

        self.position.has_claimed_tokens = true;
        self.position.last_updated_at = now;

        msg!("Claimed {} token units for {}", tokens, self.position.user);

        emit!(TokensClaimed {
            launch_id: self.launch.launch_id,
            user: self.position.user,
            tokens_claimed: tokens,
            timestamp: now,
        });

        Ok(tokens)
    }
}
