//! Buy quotes.
//!
//! [`plan_buy`] is the single place a buy payment is turned into shares. The
//! quote shown to a user and the state change applied by
//! [`Trade::buy`](crate::instructions::Trade::buy) both go through it.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use super::linear::LinearCurve;
use super::metrics::{graduation_progress, lamports_to_usd, market_cap_usd, ownership_percent};
use crate::errors::LaunchError;
use crate::fees::{FeeSchedule, FeeSplit};
use crate::oracle::SolPrice;
use crate::state::{Launch, LaunchConfig};

/// Outcome of spending a buy payment at a given supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyPlan {
    pub fees: FeeSplit,
    pub shares_out: u64,
    /// Lamports the curve actually charges for `shares_out`
    pub cost: u64,
}

/// Split the fee off `lamports_in` and price the remainder on `curve`.
pub fn plan_buy(
    curve: &LinearCurve,
    fees: &FeeSchedule,
    total_shares: u64,
    lamports_in: u64,
    max_buy_lamports: u64,
) -> Result<BuyPlan> {
    require!(lamports_in > 0, LaunchError::InvalidInput);
    require!(lamports_in <= max_buy_lamports, LaunchError::InvalidInput);

    let fees = fees.split(lamports_in)?;
    require!(fees.net > 0, LaunchError::InvalidInput);

    let shares_out = curve.buy_return(fees.net, total_shares)?;
    // Payment too small for a single share.
    require!(shares_out > 0, LaunchError::InvalidInput);

    let new_supply = total_shares
        .checked_add(shares_out)
        .ok_or(LaunchError::Overflow)?;
    let cost = curve.cost(total_shares, new_supply)?;

    Ok(BuyPlan {
        fees,
        shares_out,
        cost,
    })
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuyQuote {
    pub lamports_in: u64,
    pub fee_lamports: u64,
    /// Payment after fees; everything here stays in the curve
    pub net_lamports: u64,
    /// Part of `net_lamports` the issued shares are priced at
    pub cost_lamports: u64,
    pub shares_out: u64,
    /// Average lamports per issued share, rounded up
    pub price_per_share: u64,
    pub price_per_share_usd: f64,
    pub market_cap_after_usd: f64,
    pub graduation_progress_after: f64,
    pub ownership_percent_after: f64,
}

impl BuyQuote {
    /// Quote a buy of `lamports_in` into `launch` by a holder that already
    /// owns `holder_shares` (tradable + locked).
    pub fn compute(
        config: &LaunchConfig,
        launch: &Launch,
        holder_shares: u64,
        lamports_in: u64,
        sol_price: SolPrice,
    ) -> Result<Self> {
        launch.require_active()?;
        require!(holder_shares <= launch.total_shares, LaunchError::InvalidInput);

        let curve = launch.curve()?;
        let plan = plan_buy(
            &curve,
            &config.fees.for_creator(launch.creator_verified),
            launch.total_shares,
            lamports_in,
            config.max_buy_lamports,
        )?;

        let total_shares_after = launch
            .total_shares
            .checked_add(plan.shares_out)
            .ok_or(LaunchError::Overflow)?;
        let total_sol_after = launch
            .total_sol
            .checked_add(plan.fees.net)
            .ok_or(LaunchError::Overflow)?;
        let holder_after = holder_shares
            .checked_add(plan.shares_out)
            .ok_or(LaunchError::Overflow)?;

        let price_per_share = (plan.cost as u128).div_ceil(plan.shares_out as u128) as u64;
        let market_cap_after_usd = market_cap_usd(total_sol_after, sol_price);

        Ok(Self {
            lamports_in,
            fee_lamports: plan.fees.total_fee(),
            net_lamports: plan.fees.net,
            cost_lamports: plan.cost,
            shares_out: plan.shares_out,
            price_per_share,
            price_per_share_usd: lamports_to_usd(price_per_share, sol_price),
            market_cap_after_usd,
            graduation_progress_after: graduation_progress(
                market_cap_after_usd,
                config.graduation.market_cap_usd as f64,
            ),
            ownership_percent_after: ownership_percent(holder_after, total_shares_after),
        })
    }
}
