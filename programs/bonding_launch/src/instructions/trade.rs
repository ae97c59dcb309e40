//! Share Trading
//!
//! Buys are priced on the curve; sells refund basis in proportion to the
//! shares sold. Both run the same math as [`BuyQuote`](crate::curve::BuyQuote)
//! and [`SellQuote`](crate::settlement::SellQuote), check the caller's
//! slippage bound, and only then write to the launch and the position.
//! A failed check leaves both untouched.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::curve::plan_buy;
use crate::errors::LaunchError;
use crate::events::{SharesPurchased, SharesSold};
use crate::settlement::SellSettlement;
use crate::state::{Launch, LaunchConfig, Position};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyArgs {
    pub lamports_in: u64,
    pub min_shares_out: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellArgs {
    pub shares_to_sell: u64,
    pub min_refund: u64,
}

/// A trader's position on one launch
pub struct Trade<'a> {
    pub config: &'a LaunchConfig,
    pub launch: &'a mut Launch,
    pub position: &'a mut Position,
}

impl<'a> Trade<'a> {
    /// Buy shares with `lamports_in`. Returns the shares issued.
    pub fn buy(&mut self, args: BuyArgs, now: i64) -> Result<u64> {
        require!(!self.config.paused, LaunchError::ProtocolPaused);
        self.check_position()?;

        let plan = plan_buy(
            &self.launch.curve()?,
            &self.config.fees.for_creator(self.launch.creator_verified),
            self.launch.total_shares,
            args.lamports_in,
            self.config.max_buy_lamports,
        )?;
        require!(
            plan.shares_out >= args.min_shares_out,
            LaunchError::SlippageExceeded
        );

        let total_shares = self
            .launch
            .total_shares
            .checked_add(plan.shares_out)
            .ok_or(LaunchError::Overflow)?;
        let total_sol = self
            .launch
            .total_sol
            .checked_add(plan.fees.net)
            .ok_or(LaunchError::Overflow)?;
        let creator_fees = self
            .launch
            .creator_accrued_fees
            .checked_add(plan.fees.creator_fee)
            .ok_or(LaunchError::Overflow)?;
        let protocol_fees = self
            .launch
            .protocol_accrued_fees
            .checked_add(plan.fees.protocol_fee)
            .ok_or(LaunchError::Overflow)?;
        let shares = self
            .position
            .shares
            .checked_add(plan.shares_out)
            .ok_or(LaunchError::Overflow)?;
        let sol_basis = self
            .position
            .sol_basis
            .checked_add(plan.fees.net)
            .ok_or(LaunchError::Overflow)?;

        self.launch.total_shares = total_shares;
        self.launch.total_sol = total_sol;
        self.launch.creator_accrued_fees = creator_fees;
        self.launch.protocol_accrued_fees = protocol_fees;
        self.position.shares = shares;
        self.position.sol_basis = sol_basis;
        self.position.last_updated_at = now;

        msg!(
            "Bought {} shares for {} lamports (fee {})",
            plan.shares_out,
            args.lamports_in,
            plan.fees.total_fee()
        );

        emit!(SharesPurchased {
            launch_id: self.launch.launch_id,
            buyer: self.position.user,
            lamports_in: args.lamports_in,
            fee_lamports: plan.fees.total_fee(),
            shares_out: plan.shares_out,
            total_shares,
            total_sol,
            timestamp: now,
        });

        Ok(plan.shares_out)
    }

    /// Sell tradable shares back for a proportional basis refund. Returns
    /// the refund in lamports.
    pub fn sell(&mut self, args: SellArgs, now: i64) -> Result<u64> {
        self.check_position()?;

        let settlement =
            SellSettlement::for_position(&self.position, args.shares_to_sell, args.min_refund)?;

        let total_shares = self
            .launch
            .total_shares
            .checked_sub(args.shares_to_sell)
            .ok_or_else(|| self.broken("total_shares below a holder's shares"))?;
        let total_sol = self
            .launch
            .total_sol
            .checked_sub(settlement.refund)
            .ok_or_else(|| self.broken("total_sol below a holder's basis"))?;

        self.launch.total_shares = total_shares;
        self.launch.total_sol = total_sol;
        self.position.shares = settlement.remaining_shares;
        self.position.sol_basis = settlement.remaining_basis;
        self.position.last_updated_at = now;

        msg!(
            "Sold {} shares for {} lamports",
            args.shares_to_sell,
            settlement.refund
        );

        emit!(SharesSold {
            launch_id: self.launch.launch_id,
            seller: self.position.user,
            shares_sold: args.shares_to_sell,
            refund_lamports: settlement.refund,
            total_shares,
            total_sol,
            timestamp: now,
        });

        Ok(settlement.refund)
    }

    fn check_position(&self) -> Result<()> {
        self.launch.require_active()?;
        require!(
            self.position.launch_id == self.launch.launch_id,
            LaunchError::LaunchMismatch
        );
        Ok(())
    }

    fn broken(&self, what: &str) -> Error {
        msg!("Launch {}: {}", self.launch.launch_id, what);
        LaunchError::InvariantViolation.into()
    }
}
