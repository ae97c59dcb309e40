//! # Linear-Price Bonding Curve
//!
//! The marginal price of a share grows linearly with the shares already
//! issued:
//!
//! ```text
//!   price(s) = P0 + k·s            k = slope_numerator / slope_denominator
//!
//!   cost(s0, s1) = ∫ price = P0·(s1 − s0) + (k/2)·(s1² − s0²)
//! ```
//!
//! ## Rounding
//!
//! Every conversion rounds in the curve's favour:
//! - `cost` rounds **up** (the buyer never pays less than the integral)
//! - `buy_return` rounds **down** (the buyer never receives a share they
//!   did not fully pay for)
//!
//! ## Inverting the curve
//!
//! Multiplying `cost(s0, s1) = L` by `2d` (with `k = n/d`) gives the
//! quadratic `n·s1² + 2d·P0·s1 − C = 0` where
//! `C = n·s0² + 2d·P0·s0 + 2d·L`, so
//!
//! ```text
//!   s1 = ( √(d²·P0² + n·C) − d·P0 ) / n
//! ```
//!
//! `n` and `d` are first divided by their gcd so that `d·P0` stays small
//! enough to square. The integer square root floors, and the result is then
//! nudged by at most a couple of shares so that
//! `cost(s0, s1) ≤ L < cost(s0, s1 + 1)` holds exactly against the
//! rounded-up `cost`. When the discriminant still does not fit in u128 the
//! supply is found by bisecting `cost` instead.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{CURVE_BASE_PRICE, CURVE_SCALE, CURVE_SLOPE};
use crate::errors::LaunchError;

/// Shape of a launch's curve, fixed when the launch is created.
#[derive(
    AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct CurveParams {
    /// `P0`: marginal price of the first share, lamports
    pub base_price: u64,
    /// `k = slope_numerator / slope_denominator` lamports per share per share
    pub slope_numerator: u128,
    pub slope_denominator: u128,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            base_price: CURVE_BASE_PRICE,
            slope_numerator: CURVE_SLOPE,
            slope_denominator: CURVE_SCALE,
        }
    }
}

impl CurveParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.slope_denominator > 0, LaunchError::InvalidConfig);
        // A flat zero-price curve would hand out unlimited shares.
        require!(
            self.base_price > 0 || self.slope_numerator > 0,
            LaunchError::InvalidConfig
        );
        Ok(())
    }
}

/// Pricing engine over a validated [`CurveParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearCurve {
    params: CurveParams,
}

impl LinearCurve {
    pub fn new(params: CurveParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Marginal price of the next share at `total_shares`, in lamports.
    pub fn price(&self, total_shares: u64) -> Result<u64> {
        let slope_part = ceil_div(
            self.params
                .slope_numerator
                .checked_mul(total_shares as u128)
                .ok_or(LaunchError::Overflow)?,
            self.params.slope_denominator,
        )?;
        let price = (self.params.base_price as u128)
            .checked_add(slope_part)
            .ok_or(LaunchError::Overflow)?;
        to_u64(price)
    }

    /// Lamports needed to move supply from `s0` to `s1`.
    ///
    /// Formula: `P0·(s1 − s0) + ceil(n·(s1² − s0²) / 2d)`
    pub fn cost(&self, s0: u64, s1: u64) -> Result<u64> {
        to_u64(self.cost_u128(s0, s1)?)
    }

    /// Largest `shares_out` with `cost(s0, s0 + shares_out) ≤ lamports_in`.
    ///
    /// Lamports left over after the last whole share stay with the curve.
    pub fn buy_return(&self, lamports_in: u64, s0: u64) -> Result<u64> {
        require!(lamports_in > 0, LaunchError::InvalidInput);
        require!(s0 < u64::MAX, LaunchError::InvalidInput);

        let budget = lamports_in as u128;
        let mut s1 = self
            .solve_supply(budget, s0)
            .unwrap_or_else(|| self.search_supply(budget, s0))
            .clamp(s0 as u128, u64::MAX as u128);

        // Undo any overshoot from the floored root vs. the rounded-up cost.
        while s1 > s0 as u128 && !self.affordable(s0, s1 as u64, budget) {
            s1 -= 1;
        }
        // Take any share the floored root left on the table.
        while s1 < u64::MAX as u128 && self.affordable(s0, (s1 + 1) as u64, budget) {
            s1 += 1;
        }

        to_u64(s1 - s0 as u128)
    }

    /// What it would cost right now to buy back `holder_shares` at the top
    /// of the current supply: `cost(total_shares − holder_shares, total_shares)`.
    pub fn position_value(&self, holder_shares: u64, total_shares: u64) -> Result<u64> {
        require!(holder_shares <= total_shares, LaunchError::InvalidInput);
        self.cost(total_shares - holder_shares, total_shares)
    }

    fn cost_u128(&self, s0: u64, s1: u64) -> Result<u128> {
        require!(s1 >= s0, LaunchError::InvalidInput);
        let (lo, hi) = (s0 as u128, s1 as u128);
        let delta = hi - lo;

        let linear = (self.params.base_price as u128)
            .checked_mul(delta)
            .ok_or(LaunchError::Overflow)?;

        // s1² − s0² = (s1 − s0)(s1 + s0)
        let delta_sq = delta
            .checked_mul(hi + lo)
            .ok_or(LaunchError::Overflow)?;
        let numerator = self
            .params
            .slope_numerator
            .checked_mul(delta_sq)
            .ok_or(LaunchError::Overflow)?;
        let denominator = self
            .params
            .slope_denominator
            .checked_mul(2)
            .ok_or(LaunchError::Overflow)?;
        let quadratic = ceil_div(numerator, denominator)?;

        linear
            .checked_add(quadratic)
            .ok_or_else(|| LaunchError::Overflow.into())
    }

    /// `cost(s0, s1) ≤ budget`, counting an overflowing cost as unaffordable.
    fn affordable(&self, s0: u64, s1: u64, budget: u128) -> bool {
        matches!(self.cost_u128(s0, s1), Ok(cost) if cost <= budget)
    }

    /// Closed-form estimate of the supply reached by spending `budget`,
    /// or `None` when an intermediate term leaves u128.
    fn solve_supply(&self, budget: u128, s0: u64) -> Option<u128> {
        let p0 = self.params.base_price as u128;
        let s0 = s0 as u128;

        if self.params.slope_numerator == 0 {
            // Flat price: every share costs exactly P0.
            return s0.checked_add(budget / p0);
        }

        let g = gcd(self.params.slope_numerator, self.params.slope_denominator);
        let n = self.params.slope_numerator / g;
        let d = self.params.slope_denominator / g;

        let two_d = d.checked_mul(2)?;
        let d_p0 = d.checked_mul(p0)?;

        // C = n·s0² + 2d·P0·s0 + 2d·L
        let c = n
            .checked_mul(s0.checked_mul(s0)?)?
            .checked_add(two_d.checked_mul(p0)?.checked_mul(s0)?)?
            .checked_add(two_d.checked_mul(budget)?)?;

        let discriminant = d_p0.checked_mul(d_p0)?.checked_add(n.checked_mul(c)?)?;

        Some(integer_sqrt(discriminant).saturating_sub(d_p0) / n)
    }

    /// Largest `s1 ≥ s0` with `cost(s0, s1) ≤ budget`, by bisection.
    fn search_supply(&self, budget: u128, s0: u64) -> u128 {
        let (mut lo, mut hi) = (s0 as u128, u64::MAX as u128);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.affordable(s0, mid as u64, budget) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        lo
    }
}

/// Integer square root using Newton's method
///
/// Computes floor(√n) without overflowing near `u128::MAX`
pub fn integer_sqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Initial guess at or above the root
    let shift = (128 - n.leading_zeros() + 1) / 2;
    let mut x = 1u128 << shift;

    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn ceil_div(numerator: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, LaunchError::InvalidConfig);
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        Ok(quotient + 1)
    }
}

fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| LaunchError::Overflow.into())
}

// ============================================================================
// TESTS
// ============================================================================
