//! Shared fixtures for unit tests.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::fmt::Debug;

use crate::curve::{CurveParams, LinearCurve};
use crate::errors::LaunchError;
use crate::fees::FeeSchedule;
use crate::oracle::SolPrice;
use crate::state::{Launch, LaunchConfig, Position};

/// `P0 = 0`, `k = 2`, so `cost(0, s) = s²`.
pub const SQUARE_CURVE: CurveParams = CurveParams {
    base_price: 0,
    slope_numerator: 2,
    slope_denominator: 1,
};

pub const TEST_LAUNCH_ID: u64 = 7;

pub fn assert_launch_error<T: Debug>(result: Result<T>, expected: LaunchError) {
    match result {
        Err(Error::AnchorError(e)) => {
            assert_eq!(e.error_code_number, u32::from(expected), "{e:?}")
        }
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

pub fn square_curve() -> LinearCurve {
    LinearCurve::new(SQUARE_CURVE).unwrap()
}

/// Default settings on the square curve with no buy fee.
pub fn free_config() -> LaunchConfig {
    LaunchConfig {
        curve: SQUARE_CURVE,
        fees: FeeSchedule::FREE,
        ..LaunchConfig::default()
    }
}

pub fn launch_with_supply(total_shares: u64, total_sol: u64) -> Launch {
    Launch {
        launch_id: TEST_LAUNCH_ID,
        creator: Pubkey::new_unique(),
        name: "Test".to_string(),
        symbol: "TST".to_string(),
        curve: SQUARE_CURVE,
        total_shares,
        total_sol,
        ..Launch::default()
    }
}

pub fn holder(launch: &Launch, shares: u64, sol_basis: u64) -> Position {
    Position {
        shares,
        sol_basis,
        ..Position::new(launch.launch_id, Pubkey::new_unique(), launch.created_at)
    }
}

pub fn price(usd: f64) -> SolPrice {
    SolPrice::new(usd).unwrap()
}
