//! # Graduation Gates
//!
//! A launch leaves the curve only when all three gates hold at the same
//! moment:
//!
//! | Gate          | Passes when                                   |
//! |---------------|-----------------------------------------------|
//! | Market cap    | `total_sol · sol_price ≥ $42,000`             |
//! | Holders       | positions with shares or locked shares ≥ 100  |
//! | Concentration | largest holding ≤ 1000 bps of `total_shares`  |
//!
//! Holder composition changes with every trade, so the verdict is
//! recomputed for each check and never stored.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BPS_DENOMINATOR, GRADUATION_MARKET_CAP_USD, GRADUATION_MAX_CONCENTRATION_BPS,
    GRADUATION_MIN_HOLDERS,
};
use crate::curve::market_cap_usd;
use crate::errors::LaunchError;
use crate::oracle::SolPrice;
use crate::state::{Launch, Position};

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GraduationThresholds {
    pub market_cap_usd: u64,
    pub min_holders: u64,
    pub max_concentration_bps: u64,
}

impl Default for GraduationThresholds {
    fn default() -> Self {
        Self {
            market_cap_usd: GRADUATION_MARKET_CAP_USD,
            min_holders: GRADUATION_MIN_HOLDERS,
            max_concentration_bps: GRADUATION_MAX_CONCENTRATION_BPS,
        }
    }
}

/// Holder statistics taken from one snapshot of a launch's positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HolderSnapshot {
    pub holders: u64,
    pub top_holder_shares: u64,
}

impl HolderSnapshot {
    /// Count holders of `launch_id` and find the largest holding.
    /// Positions of other launches and empty positions are skipped.
    pub fn from_positions<'a>(
        launch_id: u64,
        positions: impl IntoIterator<Item = &'a Position>,
    ) -> Result<Self> {
        let mut snapshot = Self::default();
        for position in positions {
            if position.launch_id != launch_id || !position.is_holder() {
                continue;
            }
            snapshot.holders += 1;
            snapshot.top_holder_shares = snapshot.top_holder_shares.max(position.held_shares()?);
        }
        Ok(snapshot)
    }

    /// `floor(top_holder_shares / total_shares · 10000)`
    pub fn concentration_bps(&self, total_shares: u64) -> Result<u64> {
        require!(
            self.top_holder_shares <= total_shares,
            LaunchError::InvariantViolation
        );
        if total_shares == 0 {
            return Ok(0);
        }
        Ok((self.top_holder_shares as u128 * BPS_DENOMINATOR as u128 / total_shares as u128) as u64)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraduationGates {
    pub market_cap_usd: f64,
    pub market_cap_target: u64,
    pub market_cap_met: bool,
    pub holders: u64,
    pub holders_target: u64,
    pub holders_met: bool,
    pub concentration_bps: u64,
    pub concentration_target: u64,
    pub concentration_met: bool,
    pub can_graduate: bool,
    pub blocking_reasons: Vec<String>,
}

impl GraduationGates {
    /// Evaluate every gate for `launch` against a snapshot of its positions.
    pub fn evaluate<'a>(
        thresholds: &GraduationThresholds,
        launch: &Launch,
        positions: impl IntoIterator<Item = &'a Position>,
        sol_price: SolPrice,
    ) -> Result<Self> {
        let snapshot = HolderSnapshot::from_positions(launch.launch_id, positions)?;
        Self::from_snapshot(thresholds, launch, &snapshot, sol_price)
    }

    pub fn from_snapshot(
        thresholds: &GraduationThresholds,
        launch: &Launch,
        snapshot: &HolderSnapshot,
        sol_price: SolPrice,
    ) -> Result<Self> {
        let market_cap_usd = market_cap_usd(launch.total_sol, sol_price);
        let concentration_bps = snapshot.concentration_bps(launch.total_shares)?;

        let market_cap_met = market_cap_usd >= thresholds.market_cap_usd as f64;
        let holders_met = snapshot.holders >= thresholds.min_holders;
        let concentration_met = concentration_bps <= thresholds.max_concentration_bps;

        let mut blocking_reasons = Vec::new();
        if !market_cap_met {
            let shown = market_cap_usd.floor() as u64;
            let short = (thresholds.market_cap_usd as f64 - market_cap_usd).ceil() as u64;
            blocking_reasons.push(format!(
                "Market cap ${}/${} (need ${} more)",
                group_thousands(shown),
                group_thousands(thresholds.market_cap_usd),
                group_thousands(short),
            ));
        }
        if !holders_met {
            blocking_reasons.push(format!(
                "Holders {}/{} (need {} more)",
                snapshot.holders,
                thresholds.min_holders,
                thresholds.min_holders - snapshot.holders,
            ));
        }
        if !concentration_met {
            blocking_reasons.push(format!(
                "Top holder {}/{} (over by {})",
                bps_percent(concentration_bps),
                bps_percent(thresholds.max_concentration_bps),
                bps_percent(concentration_bps - thresholds.max_concentration_bps),
            ));
        }

        Ok(Self {
            market_cap_usd,
            market_cap_target: thresholds.market_cap_usd,
            market_cap_met,
            holders: snapshot.holders,
            holders_target: thresholds.min_holders,
            holders_met,
            concentration_bps,
            concentration_target: thresholds.max_concentration_bps,
            concentration_met,
            can_graduate: market_cap_met && holders_met && concentration_met,
            blocking_reasons,
        })
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn bps_percent(bps: u64) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}
