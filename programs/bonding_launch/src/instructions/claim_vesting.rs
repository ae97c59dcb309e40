//! Creator Vesting Claim
//!
//! Releases unlocked seed shares from the creator's `locked_shares` into
//! tradable `shares`.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::events::VestingClaimed;
use crate::state::{Launch, LaunchConfig, Position};
use crate::vesting::VestingInfo;

pub struct ClaimVesting<'a> {
    pub config: &'a LaunchConfig,
    pub launch: &'a mut Launch,
    /// Creator's position on `launch`
    pub position: &'a mut Position,
}

impl<'a> ClaimVesting<'a> {
    /// Release `amount` unlocked seed shares. Returns the vesting state
    /// after the claim.
    pub fn claim_vesting(&mut self, amount: u64, now: i64) -> Result<VestingInfo> {
        require!(
            self.position.launch_id == self.launch.launch_id,
            LaunchError::LaunchMismatch
        );
        require!(self.launch.graduated, LaunchError::NotGraduated);
        require!(
            self.position.is_creator(&self.launch.creator),
            LaunchError::NotCreator
        );

        let info = VestingInfo::compute(self.launch, self.config.vesting_days, now)?;
        info.check_claim(amount)?;

        let claimed = self
            .launch
            .creator_claimed_shares
            .checked_add(amount)
            .ok_or(LaunchError::Overflow)?;
        let shares = self
            .position
            .shares
            .checked_add(amount)
            .ok_or(LaunchError::Overflow)?;
        let Some(locked) = self.position.locked_shares.checked_sub(amount) else {
            msg!(
                "Launch {}: creator position holds {} locked shares, claim of {}",
                self.launch.launch_id,
                self.position.locked_shares,
                amount
            );
            return err!(LaunchError::InvariantViolation);
        };

        self.launch.creator_claimed_shares = claimed;
        self.position.shares = shares;
        self.position.locked_shares = locked;
        self.position.last_updated_at = now;

        msg!("Vested {} seed shares, {} still locked", amount, locked);

        emit!(VestingClaimed {
            launch_id: self.launch.launch_id,
            creator: self.position.user,
            shares_unlocked: amount,
            remaining_locked: locked,
            timestamp: now,
        });

        VestingInfo::compute(self.launch, self.config.vesting_days, now)
    }
}
