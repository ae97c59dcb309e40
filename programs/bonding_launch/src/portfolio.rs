//! Position valuation and per-user portfolio totals.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::curve::{lamports_to_usd, ownership_percent};
use crate::errors::LaunchError;
use crate::oracle::SolPrice;
use crate::state::{Launch, Position};

/// `floor(shares / reference · tokens_for_holders)`, or 0 when nothing is
/// issued.
pub fn estimate_tokens_at_graduation(
    shares: u64,
    total_shares_reference: u64,
    tokens_for_holders: u64,
) -> Result<u64> {
    if total_shares_reference == 0 {
        return Ok(0);
    }
    let tokens = (shares as u128)
        .checked_mul(tokens_for_holders as u128)
        .ok_or(LaunchError::Overflow)?
        / total_shares_reference as u128;
    u64::try_from(tokens).map_err(|_| LaunchError::Overflow.into())
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValue {
    pub launch_id: u64,
    pub shares: u64,
    pub locked_shares: u64,
    /// Curve value of `shares + locked_shares` at the current supply
    pub value_lamports: u64,
    pub value_usd: f64,
    pub sol_basis: u64,
    /// `value_lamports − sol_basis`, may be negative
    pub unrealized_gain: i64,
    pub roi_percent: f64,
    pub ownership_percent: f64,
    pub estimated_tokens: u64,
    pub graduated: bool,
}

impl PositionValue {
    pub fn compute(
        launch: &Launch,
        position: &Position,
        tokens_for_holders: u64,
        sol_price: SolPrice,
    ) -> Result<Self> {
        require!(
            position.launch_id == launch.launch_id,
            LaunchError::LaunchMismatch
        );
        let held = position.held_shares()?;
        let value_lamports = launch
            .curve()?
            .position_value(held, launch.total_shares)?;
        let unrealized_gain = signed_diff(value_lamports, position.sol_basis)?;
        let roi_percent = if position.sol_basis == 0 {
            0.0
        } else {
            unrealized_gain as f64 / position.sol_basis as f64 * 100.0
        };

        Ok(Self {
            launch_id: launch.launch_id,
            shares: position.shares,
            locked_shares: position.locked_shares,
            value_lamports,
            value_usd: lamports_to_usd(value_lamports, sol_price),
            sol_basis: position.sol_basis,
            unrealized_gain,
            roi_percent,
            ownership_percent: ownership_percent(held, launch.total_shares),
            estimated_tokens: estimate_tokens_at_graduation(
                held,
                launch.token_share_reference(),
                tokens_for_holders,
            )?,
            graduated: launch.graduated,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub positions: Vec<PositionValue>,
    pub total_value: u64,
    pub total_basis: u64,
    pub total_gain: i64,
    pub total_value_usd: f64,
    /// Holdings on launches still on the curve or in refund mode
    pub active_count: u64,
    pub graduated_count: u64,
}

impl PortfolioSummary {
    /// Value every non-empty holding of one user. Each position is paired
    /// with the launch it belongs to.
    pub fn compute<'a>(
        holdings: impl IntoIterator<Item = (&'a Launch, &'a Position)>,
        tokens_for_holders: u64,
        sol_price: SolPrice,
    ) -> Result<Self> {
        let mut summary = Self::default();
        for (launch, position) in holdings {
            if !position.is_holder() {
                continue;
            }
            let value = PositionValue::compute(launch, position, tokens_for_holders, sol_price)?;

            summary.total_value = summary
                .total_value
                .checked_add(value.value_lamports)
                .ok_or(LaunchError::Overflow)?;
            summary.total_basis = summary
                .total_basis
                .checked_add(value.sol_basis)
                .ok_or(LaunchError::Overflow)?;
            summary.total_gain = summary
                .total_gain
                .checked_add(value.unrealized_gain)
                .ok_or(LaunchError::Overflow)?;
            if value.graduated {
                summary.graduated_count += 1;
            } else {
                summary.active_count += 1;
            }
            summary.positions.push(value);
        }
        summary.total_value_usd = lamports_to_usd(summary.total_value, sol_price);
        Ok(summary)
    }
}

fn signed_diff(value: u64, basis: u64) -> Result<i64> {
    let diff = value as i128 - basis as i128;
    i64::try_from(diff).map_err(|_| LaunchError::Overflow.into())
}
