//! # Sell Settlement
//!
//! Sells are **not** priced on the curve. A seller gets back the part of
//! their original cost that matches the fraction of shares they sell:
//!
//! ```text
//!   refund          = floor(basis · shares_sold / shares_held)
//!   basis'          = basis − refund
//!   shares_held'    = shares_held − shares_sold
//! ```
//!
//! Because both sides shrink by the same fraction, `basis / shares` is the
//! same after any sequence of partial sells.
//!
//! Curve appreciation is not paid out on a sell. The quote reports it as
//! `leaving_behind`: what the sold shares are worth on the curve right now
//! minus the refund actually received.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{BPS_DENOMINATOR, WARNING_LOW_MAX_BPS, WARNING_MEDIUM_MAX_BPS};
use crate::curve::lamports_to_usd;
use crate::errors::LaunchError;
use crate::oracle::SolPrice;
use crate::state::{Launch, Position};

/// Proportional refund for selling `shares_to_sell` out of `user_shares`.
pub fn refund(shares_to_sell: u64, user_shares: u64, user_basis: u64) -> Result<u64> {
    require!(shares_to_sell > 0, LaunchError::InvalidInput);
    require!(
        shares_to_sell <= user_shares,
        LaunchError::InsufficientShares
    );

    let refund = (user_basis as u128)
        .checked_mul(shares_to_sell as u128)
        .ok_or(LaunchError::Overflow)?
        / user_shares as u128;

    // refund ≤ basis because shares_to_sell ≤ user_shares
    u64::try_from(refund).map_err(|_| LaunchError::Overflow.into())
}

/// Position after a sell settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellSettlement {
    pub refund: u64,
    pub remaining_shares: u64,
    pub remaining_basis: u64,
}

/// Settle a sell against a position, enforcing the caller's minimum refund.
pub fn settle_sell(
    shares_to_sell: u64,
    user_shares: u64,
    user_basis: u64,
    min_refund: u64,
) -> Result<SellSettlement> {
    let refund = refund(shares_to_sell, user_shares, user_basis)?;
    require!(refund >= min_refund, LaunchError::SlippageExceeded);

    Ok(SellSettlement {
        refund,
        remaining_shares: user_shares - shares_to_sell,
        remaining_basis: user_basis - refund,
    })
}

impl SellSettlement {
    /// Settle a sell of tradable shares out of `position`.
    ///
    /// The refund is proportional over everything the position holds, so a
    /// creator whose basis also covers a locked seed is only refunded the
    /// part of the basis that belongs to the shares sold. Locked shares
    /// cannot be sold.
    pub fn for_position(position: &Position, shares_to_sell: u64, min_refund: u64) -> Result<Self> {
        require!(
            shares_to_sell <= position.shares,
            LaunchError::InsufficientShares
        );
        let held = position.held_shares()?;
        let settled = settle_sell(shares_to_sell, held, position.sol_basis, min_refund)?;
        Ok(Self {
            remaining_shares: position.shares - shares_to_sell,
            ..settled
        })
    }
}

/// Curve value of the sold shares minus the refund, floored at zero.
pub fn leaving_behind(value_of_shares_sold: u64, refund: u64) -> u64 {
    value_of_shares_sold.saturating_sub(refund)
}

/// How loudly a display layer should warn about a sell.
#[derive(
    AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum WarningSeverity {
    /// Selling at or below basis: nothing is forfeited
    None,
    /// Under 10% of the shares' curve value is forfeited
    Low,
    /// Under 50%
    Medium,
    /// Half or more
    High,
}

impl WarningSeverity {
    pub fn classify(leaving_behind: u64, value_of_shares_sold: u64) -> Self {
        if leaving_behind == 0 || value_of_shares_sold == 0 {
            return Self::None;
        }
        let forfeited_bps =
            leaving_behind as u128 * BPS_DENOMINATOR as u128 / value_of_shares_sold as u128;
        if forfeited_bps < WARNING_LOW_MAX_BPS as u128 {
            Self::Low
        } else if forfeited_bps < WARNING_MEDIUM_MAX_BPS as u128 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellQuote {
    pub shares_to_sell: u64,
    pub refund_amount: u64,
    pub value_of_shares_sold: u64,
    pub leaving_behind: u64,
    pub leaving_behind_usd: f64,
    pub warning_severity: WarningSeverity,
    pub remaining_shares: u64,
    pub remaining_basis: u64,
}

impl SellQuote {
    pub fn compute(
        launch: &Launch,
        position: &Position,
        shares_to_sell: u64,
        sol_price: SolPrice,
    ) -> Result<Self> {
        launch.require_active()?;
        require!(
            position.launch_id == launch.launch_id,
            LaunchError::LaunchMismatch
        );

        let settlement = SellSettlement::for_position(position, shares_to_sell, 0)?;
        let value_of_shares_sold = launch
            .curve()?
            .position_value(shares_to_sell, launch.total_shares)?;
        let leaving_behind = leaving_behind(value_of_shares_sold, settlement.refund);

        Ok(Self {
            shares_to_sell,
            refund_amount: settlement.refund,
            value_of_shares_sold,
            leaving_behind,
            leaving_behind_usd: lamports_to_usd(leaving_behind, sol_price),
            warning_severity: WarningSeverity::classify(leaving_behind, value_of_shares_sold),
            remaining_shares: settlement.remaining_shares,
            remaining_basis: settlement.remaining_basis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_launch_error, holder, launch_with_supply, price};

    #[test]
    fn test_refund_is_proportional() {
        // 100 shares on a 10 SOL basis, sell half
        assert_eq!(refund(50, 100, 10_000_000_000).unwrap(), 5_000_000_000);
        assert_eq!(refund(10, 10, 100).unwrap(), 100);
        // floor
        assert_eq!(refund(1, 3, 100).unwrap(), 33);
    }

    #[test]
    fn test_refund_rejections() {
        assert_launch_error(refund(0, 10, 100), LaunchError::InvalidInput);
        assert_launch_error(refund(11, 10, 100), LaunchError::InsufficientShares);
        assert_launch_error(refund(1, 0, 0), LaunchError::InsufficientShares);
    }

    #[test]
    fn test_partial_sells_keep_basis_ratio() {
        // 300 shares, 900 lamports basis: 3 lamports per share throughout
        let first = settle_sell(100, 300, 900, 0).unwrap();
        assert_eq!(first.refund, 300);
        assert_eq!((first.remaining_shares, first.remaining_basis), (200, 600));

        let second = settle_sell(50, first.remaining_shares, first.remaining_basis, 0).unwrap();
        assert_eq!(second.refund, 150);
        assert_eq!((second.remaining_shares, second.remaining_basis), (150, 450));
        assert_eq!(second.remaining_basis * 300, 900 * second.remaining_shares);
    }

    #[test]
    fn test_min_refund_is_enforced() {
        assert_launch_error(settle_sell(10, 10, 100, 101), LaunchError::SlippageExceeded);
        assert_eq!(settle_sell(10, 10, 100, 100).unwrap().refund, 100);
    }

    #[test]
    fn test_full_exit_after_second_buyer() {
        // Holder 1 paid 100 for 10 shares; a second buyer took supply to 20
        let launch = launch_with_supply(20, 400);
        let position = holder(&launch, 10, 100);

        let quote = SellQuote::compute(&launch, &position, 10, price(200.0)).unwrap();
        assert_eq!(quote.refund_amount, 100);
        assert_eq!(quote.value_of_shares_sold, 300);
        assert_eq!(quote.leaving_behind, 200);
        assert_eq!(quote.warning_severity, WarningSeverity::High);
        assert_eq!(quote.remaining_shares, 0);
        assert_eq!(quote.remaining_basis, 0);
    }

    #[test]
    fn test_no_warning_at_or_below_basis() {
        // Sole holder: curve value equals basis
        let launch = launch_with_supply(10, 100);
        let position = holder(&launch, 10, 100);
        let quote = SellQuote::compute(&launch, &position, 10, price(200.0)).unwrap();
        assert_eq!(quote.leaving_behind, 0);
        assert_eq!(quote.leaving_behind_usd, 0.0);
        assert_eq!(quote.warning_severity, WarningSeverity::None);
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(WarningSeverity::classify(0, 1_000), WarningSeverity::None);
        assert_eq!(WarningSeverity::classify(99, 1_000), WarningSeverity::Low);
        assert_eq!(WarningSeverity::classify(100, 1_000), WarningSeverity::Medium);
        assert_eq!(WarningSeverity::classify(499, 1_000), WarningSeverity::Medium);
        assert_eq!(WarningSeverity::classify(500, 1_000), WarningSeverity::High);
    }

    #[test]
    fn test_locked_seed_is_not_sellable_but_shares_the_basis() {
        let launch = launch_with_supply(100, 10_000);
        let mut creator = holder(&launch, 20, 1_000);
        creator.locked_shares = 80;

        assert_launch_error(
            SellSettlement::for_position(&creator, 21, 0),
            LaunchError::InsufficientShares,
        );
        let settled = SellSettlement::for_position(&creator, 20, 0).unwrap();
        assert_eq!(settled.refund, 200);
        assert_eq!(settled.remaining_shares, 0);
        assert_eq!(settled.remaining_basis, 800);
    }

    #[test]
    fn test_quote_rejects_foreign_position() {
        let launch = launch_with_supply(10, 100);
        let mut position = holder(&launch, 10, 100);
        position.launch_id = launch.launch_id + 1;
        assert_launch_error(
            SellQuote::compute(&launch, &position, 5, price(200.0)),
            LaunchError::LaunchMismatch,
        );
    }
}
