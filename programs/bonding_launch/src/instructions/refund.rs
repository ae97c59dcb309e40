//! Refund Mode
//!
//! A launch that has not graduated by the end of its duration can be
//! switched to refund mode. Every holder then gets their remaining basis
//! back exactly once.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::events::{RefundClaimed, RefundEnabled};
use crate::state::{Launch, LaunchConfig, Position};

pub struct EnableRefund<'a> {
    pub config: &'a LaunchConfig,
    pub launch: &'a mut Launch,
}

impl<'a> EnableRefund<'a> {
    pub fn enable_refund(&mut self, now: i64) -> Result<()> {
        self.launch.require_active()?;

        let expires_at = self
            .launch
            .created_at
            .checked_add(self.config.launch_duration_seconds)
            .ok_or(LaunchError::Overflow)?;
        require!(now >= expires_at, LaunchError::LaunchNotExpired);

        self.launch.refund_mode = true;
        self.launch.refund_enabled_at = Some(now);

        msg!("Refund mode enabled for launch {}", self.launch.launch_id);

        emit!(RefundEnabled {
            launch_id: self.launch.launch_id,
            timestamp: now,
        });

        Ok(())
    }
}

pub struct ClaimRefund<'a> {
    pub launch: &'a mut Launch,
    pub position: &'a mut Position,
}

impl<'a> ClaimRefund<'a> {
    /// Return the position's whole basis and retire its shares. Returns the
    /// refund in lamports.
    pub fn claim_refund(&mut self, now: i64) -> Result<u64> {
        require!(self.launch.refund_mode, LaunchError::RefundModeNotActive);
        require!(
            self.position.launch_id == self.launch.launch_id,
            LaunchError::LaunchMismatch
        );
        require!(
            !self.position.has_claimed_refund,
            LaunchError::AlreadyClaimed
        );
        require!(
            self.position.is_holder() || self.position.sol_basis > 0,
            LaunchError::NothingToClaim
        );

        let refund = self.position.sol_basis;
        let held = self.position.held_shares()?;
        let total_sol = self.launch.total_sol.checked_sub(refund);
        let total_shares = self.launch.total_shares.checked_sub(held);
        let (Some(total_sol), Some(total_shares)) = (total_sol, total_shares) else {
            msg!(
                "Launch {}: refund of {} lamports / {} shares exceeds launch totals",
                self.launch.launch_id,
                refund,
                held
            );
            return err!(LaunchError::InvariantViolation);
        };

        self.launch.total_sol = total_sol;
        self.launch.total_shares = total_shares;
        self.position.shares = 0;
        self.position.locked_shares = 0;
        self.position.sol_basis = 0;
        self.position.has_claimed_refund = true;
        self.position.last_updated_at = now;

        msg!("Refunded {} lamports to {}", refund, self.position.user);

        emit!(RefundClaimed {
            launch_id: self.launch.launch_id,
            user: self.position.user,
            refund_lamports: refund,
            timestamp: now,
        });

        Ok(refund)
    }
}
