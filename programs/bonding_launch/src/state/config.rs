//! Launch Configuration
//!
//! Settings shared by every launch a host operates. Curve parameters are
//! copied onto each [`Launch`](crate::state::Launch) when it is created, so
//! changing the config never reprices an existing launch.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::curve::CurveParams;
use crate::errors::LaunchError;
use crate::fees::FeeSchedule;
use crate::graduation::GraduationThresholds;

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchConfig {
    /// Curve assigned to new launches
    pub curve: CurveParams,

    /// Buy fee split
    pub fees: FeeSchedule,

    /// Market cap / holders / concentration gates
    pub graduation: GraduationThresholds,

    /// Creator seed vesting window in whole days
    pub vesting_days: u64,

    /// Whole tokens distributed to shareholders at graduation
    pub tokens_for_holders: u64,

    /// Seconds after creation before refund mode may be enabled
    pub launch_duration_seconds: i64,

    /// Largest single buy payment in lamports
    pub max_buy_lamports: u64,

    /// Creator seed bounds in USD
    pub min_seed_usd: u64,
    pub max_seed_usd: u64,

    /// Emergency stop: no new launches and no buys. Sells, refunds and
    /// claims stay open.
    pub paused: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            curve: CurveParams::default(),
            fees: FeeSchedule::default(),
            graduation: GraduationThresholds::default(),
            vesting_days: VESTING_DURATION_DAYS,
            tokens_for_holders: TOKENS_FOR_HOLDERS,
            launch_duration_seconds: LAUNCH_DURATION_SECONDS,
            max_buy_lamports: MAX_BUY_LAMPORTS,
            min_seed_usd: MIN_SEED_USD,
            max_seed_usd: MAX_SEED_USD,
            paused: false,
        }
    }
}

impl LaunchConfig {
    /// Reject settings no launch could run under.
    pub fn validate(&self) -> Result<()> {
        self.curve.validate()?;
        self.fees.validate()?;
        require!(
            self.graduation.max_concentration_bps <= BPS_DENOMINATOR,
            LaunchError::InvalidConfig
        );
        require!(self.vesting_days > 0, LaunchError::InvalidConfig);
        require!(self.tokens_for_holders > 0, LaunchError::InvalidConfig);
        require!(self.launch_duration_seconds > 0, LaunchError::InvalidConfig);
        require!(self.max_buy_lamports > 0, LaunchError::InvalidConfig);
        require!(
            self.min_seed_usd <= self.max_seed_usd,
            LaunchError::InvalidConfig
        );
        Ok(())
    }
}
