//! Buy fee split.
//!
//! ```text
//!   lamports_in ──┬── fee ──┬── creator_fee   (creator / verified_creator_fee_bps)
//!                 │         └── protocol_fee  (remainder of the fee)
//!                 └── net ───── enters the curve and the buyer's basis
//! ```
//!
//! A creator who has already graduated a launch is verified and earns the
//! higher creator rate; the protocol's part shrinks to match.
//!
//! Sells are free: a seller always gets their full proportional basis.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{BPS_DENOMINATOR, CREATOR_FEE_BPS, CREATOR_FEE_VERIFIED_BPS, TOTAL_FEE_BPS};
use crate::errors::LaunchError;

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeSchedule {
    /// Total fee on a buy payment
    pub total_fee_bps: u64,
    /// Creator's part of the total fee
    pub creator_fee_bps: u64,
    /// Creator's part for a verified creator
    pub verified_creator_fee_bps: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            total_fee_bps: TOTAL_FEE_BPS,
            creator_fee_bps: CREATOR_FEE_BPS,
            verified_creator_fee_bps: CREATOR_FEE_VERIFIED_BPS,
        }
    }
}

/// How one buy payment is divided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub creator_fee: u64,
    pub protocol_fee: u64,
    pub net: u64,
}

impl FeeSplit {
    pub fn total_fee(&self) -> u64 {
        self.creator_fee + self.protocol_fee
    }
}

impl FeeSchedule {
    /// A schedule that takes nothing.
    pub const FREE: FeeSchedule = FeeSchedule {
        total_fee_bps: 0,
        creator_fee_bps: 0,
        verified_creator_fee_bps: 0,
    };

    pub fn validate(&self) -> Result<()> {
        require!(
            self.total_fee_bps < BPS_DENOMINATOR,
            LaunchError::InvalidConfig
        );
        require!(
            self.creator_fee_bps <= self.total_fee_bps,
            LaunchError::InvalidConfig
        );
        require!(
            self.verified_creator_fee_bps <= self.total_fee_bps,
            LaunchError::InvalidConfig
        );
        Ok(())
    }

    /// The schedule a launch's buys pay under, by creator tier.
    pub fn for_creator(&self, verified: bool) -> FeeSchedule {
        if verified {
            FeeSchedule {
                creator_fee_bps: self.verified_creator_fee_bps,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn split(&self, lamports_in: u64) -> Result<FeeSplit> {
        let total_fee = bps_of(lamports_in, self.total_fee_bps)?;
        let creator_fee = bps_of(lamports_in, self.creator_fee_bps)?;
        let protocol_fee = total_fee
            .checked_sub(creator_fee)
            .ok_or(LaunchError::InvalidConfig)?;
        let net = lamports_in
            .checked_sub(total_fee)
            .ok_or(LaunchError::Overflow)?;

        Ok(FeeSplit {
            creator_fee,
            protocol_fee,
            net,
        })
    }
}

fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(LaunchError::Overflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(value).map_err(|_| LaunchError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let split = FeeSchedule::default().split(1_000_000_000).unwrap();
        assert_eq!(split.creator_fee, 3_000_000);
        assert_eq!(split.protocol_fee, 7_000_000);
        assert_eq!(split.total_fee(), 10_000_000);
        assert_eq!(split.net, 990_000_000);
    }

    #[test]
    fn test_small_payments_round_fees_down() {
        let split = FeeSchedule::default().split(99).unwrap();
        assert_eq!(split.total_fee(), 0);
        assert_eq!(split.net, 99);
    }

    #[test]
    fn test_free_schedule() {
        let split = FeeSchedule::FREE.split(12_345).unwrap();
        assert_eq!(split, FeeSplit { creator_fee: 0, protocol_fee: 0, net: 12_345 });
    }

    #[test]
    fn test_verified_creator_takes_more_of_the_same_fee() {
        let split = FeeSchedule::default()
            .for_creator(true)
            .split(1_000_000_000)
            .unwrap();
        assert_eq!(split.creator_fee, 5_000_000);
        assert_eq!(split.protocol_fee, 5_000_000);
        assert_eq!(split.net, 990_000_000);
        assert_eq!(
            FeeSchedule::default().for_creator(false),
            FeeSchedule::default()
        );
    }

    #[test]
    fn test_validate() {
        FeeSchedule::default().validate().unwrap();
        let schedule = |total_fee_bps, creator_fee_bps, verified_creator_fee_bps| FeeSchedule {
            total_fee_bps,
            creator_fee_bps,
            verified_creator_fee_bps,
        };
        assert!(schedule(10_000, 0, 0).validate().is_err());
        assert!(schedule(50, 60, 0).validate().is_err());
        assert!(schedule(50, 30, 60).validate().is_err());
    }
}
