//! # Creator Seed Vesting
//!
//! Only the creator's seed buy vests. It is fully locked until the launch
//! graduates, then unlocks linearly by whole days:
//!
//! ```text
//!   unlocked ▲
//!       seed ┤                       ┌──────── FullyVested
//!            │                 ┌─────┘
//!            │           ┌─────┘
//!            │     ┌─────┘            Vesting
//!          0 ┼─────┘
//!            └─────┬─────────────────┬──────▶ days since graduation
//!                  0                 42
//! ```
//!
//! `claimed ≤ unlocked` holds at every step because a claim can take at
//! most `unlocked − claimed`.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::SECONDS_PER_DAY;
use crate::errors::LaunchError;
use crate::state::Launch;

#[derive(
    AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub enum VestingState {
    NotStarted,
    Vesting,
    FullyVested,
}

/// Whole days since graduation, clamped to `0..=vesting_days`.
pub fn days_elapsed(graduated_at: i64, now: i64, vesting_days: u64) -> Result<u64> {
    let elapsed = now.checked_sub(graduated_at).ok_or(LaunchError::Overflow)?;
    if elapsed <= 0 {
        return Ok(0);
    }
    Ok((elapsed.div_euclid(SECONDS_PER_DAY) as u64).min(vesting_days))
}

/// `floor(seed_shares · days / vesting_days)`
pub fn unlocked_shares(seed_shares: u64, days: u64, vesting_days: u64) -> Result<u64> {
    require!(vesting_days > 0, LaunchError::InvalidConfig);
    let days = days.min(vesting_days);
    let unlocked = seed_shares as u128 * days as u128 / vesting_days as u128;
    // days ≤ vesting_days keeps this ≤ seed_shares
    Ok(unlocked as u64)
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VestingInfo {
    pub state: VestingState,
    pub seed_shares: u64,
    pub unlocked_shares: u64,
    pub claimed_shares: u64,
    pub claimable_shares: u64,
    /// Seed shares not yet unlocked
    pub locked_shares: u64,
    pub days_elapsed: u64,
    pub days_remaining: u64,
}

impl VestingInfo {
    pub fn compute(launch: &Launch, vesting_days: u64, now: i64) -> Result<Self> {
        let seed_shares = launch.creator_seed_shares;
        let claimed_shares = launch.creator_claimed_shares;

        let graduated_at = match (launch.graduated, launch.graduated_at) {
            (true, Some(at)) => at,
            _ => {
                return Ok(Self {
                    state: VestingState::NotStarted,
                    seed_shares,
                    unlocked_shares: 0,
                    claimed_shares,
                    claimable_shares: 0,
                    locked_shares: seed_shares,
                    days_elapsed: 0,
                    days_remaining: vesting_days,
                })
            }
        };

        let days = days_elapsed(graduated_at, now, vesting_days)?;
        let unlocked = unlocked_shares(seed_shares, days, vesting_days)?;
        if claimed_shares > unlocked {
            msg!(
                "Vesting claimed {} exceeds unlocked {} on launch {}",
                claimed_shares,
                unlocked,
                launch.launch_id
            );
            return err!(LaunchError::InvariantViolation);
        }

        let state = if days >= vesting_days {
            VestingState::FullyVested
        } else {
            VestingState::Vesting
        };

        Ok(Self {
            state,
            seed_shares,
            unlocked_shares: unlocked,
            claimed_shares,
            claimable_shares: unlocked - claimed_shares,
            locked_shares: seed_shares - unlocked,
            days_elapsed: days,
            days_remaining: vesting_days - days,
        })
    }

    /// Check a claim of `amount` seed shares against this snapshot.
    pub fn check_claim(&self, amount: u64) -> Result<()> {
        require!(self.claimable_shares > 0, LaunchError::NothingToClaim);
        require!(amount > 0, LaunchError::InvalidInput);
        require!(amount <= self.claimable_shares, LaunchError::InvalidInput);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VESTING_DURATION_DAYS;
    use crate::test_utils::assert_launch_error;

    const GRADUATED_AT: i64 = 1_700_000_000;

    fn graduated_launch(seed: u64, claimed: u64) -> Launch {
        Launch {
            creator_seed_shares: seed,
            creator_claimed_shares: claimed,
            graduated: true,
            graduated_at: Some(GRADUATED_AT),
            ..Launch::default()
        }
    }

    fn day(n: i64) -> i64 {
        GRADUATED_AT + n * SECONDS_PER_DAY
    }

    #[test]
    fn test_day_ten_unlocks_proportionally() {
        let info = VestingInfo::compute(&graduated_launch(4_200, 200), VESTING_DURATION_DAYS, day(10))
            .unwrap();
        assert_eq!(info.state, VestingState::Vesting);
        assert_eq!(info.days_elapsed, 10);
        assert_eq!(info.days_remaining, 32);
        assert_eq!(info.unlocked_shares, 1_000);
        assert_eq!(info.claimable_shares, 800);
        assert_eq!(info.locked_shares, 3_200);
    }

    #[test]
    fn test_partial_days_round_down() {
        let info = VestingInfo::compute(&graduated_launch(4_200, 0), 42, day(10) + SECONDS_PER_DAY - 1)
            .unwrap();
        assert_eq!(info.days_elapsed, 10);
    }

    #[test]
    fn test_not_started_before_graduation() {
        let launch = Launch {
            creator_seed_shares: 4_200,
            ..Launch::default()
        };
        let info = VestingInfo::compute(&launch, 42, day(100)).unwrap();
        assert_eq!(info.state, VestingState::NotStarted);
        assert_eq!(info.claimable_shares, 0);
        assert_eq!(info.locked_shares, 4_200);
        assert_eq!(info.days_remaining, 42);
        assert_launch_error(info.check_claim(1), LaunchError::NothingToClaim);
    }

    #[test]
    fn test_clock_before_graduation_counts_as_day_zero() {
        let info = VestingInfo::compute(&graduated_launch(4_200, 0), 42, day(-3)).unwrap();
        assert_eq!(info.state, VestingState::Vesting);
        assert_eq!(info.days_elapsed, 0);
        assert_eq!(info.unlocked_shares, 0);
    }

    #[test]
    fn test_fully_vested_caps_at_window() {
        let info = VestingInfo::compute(&graduated_launch(4_200, 1_000), 42, day(365)).unwrap();
        assert_eq!(info.state, VestingState::FullyVested);
        assert_eq!(info.days_elapsed, 42);
        assert_eq!(info.days_remaining, 0);
        assert_eq!(info.unlocked_shares, 4_200);
        assert_eq!(info.claimable_shares, 3_200);
        assert_eq!(info.locked_shares, 0);
    }

    #[test]
    fn test_unlock_endpoints() {
        assert_eq!(unlocked_shares(4_200, 0, 42).unwrap(), 0);
        assert_eq!(unlocked_shares(4_200, 42, 42).unwrap(), 4_200);
        assert_eq!(unlocked_shares(u64::MAX, 42, 42).unwrap(), u64::MAX);
        assert_eq!(unlocked_shares(100, 1, 42).unwrap(), 2);
        assert_launch_error(unlocked_shares(100, 1, 0), LaunchError::InvalidConfig);
    }

    #[test]
    fn test_check_claim() {
        let info = VestingInfo::compute(&graduated_launch(4_200, 200), 42, day(10)).unwrap();
        info.check_claim(800).unwrap();
        assert_launch_error(info.check_claim(801), LaunchError::InvalidInput);
        assert_launch_error(info.check_claim(0), LaunchError::InvalidInput);

        let drained = VestingInfo::compute(&graduated_launch(4_200, 1_000), 42, day(10)).unwrap();
        assert_launch_error(drained.check_claim(1), LaunchError::NothingToClaim);
    }

    #[test]
    fn test_over_claimed_snapshot_is_rejected() {
        assert_launch_error(
            VestingInfo::compute(&graduated_launch(4_200, 1_001), 42, day(10)),
            LaunchError::InvariantViolation,
        );
    }
}
