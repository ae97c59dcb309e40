//! Display metrics derived from curve state.
//!
//! These return floating USD / percentage figures for display layers.
//! Nothing here feeds back into lamport settlement.

use anchor_lang::prelude::*;

use crate::constants::LAMPORTS_PER_SOL;
use crate::errors::LaunchError;
use crate::oracle::SolPrice;

/// `total_sol / 1e9 · sol_price_usd`
pub fn market_cap_usd(total_sol: u64, sol_price: SolPrice) -> f64 {
    lamports_to_usd(total_sol, sol_price)
}

pub fn lamports_to_usd(lamports: u64, sol_price: SolPrice) -> f64 {
    // Multiply first so whole-dollar results stay exact.
    (lamports as f64 * sol_price.usd()) / LAMPORTS_PER_SOL as f64
}

/// Lamports worth `usd` at `sol_price`, rounded down.
pub fn usd_to_lamports(usd: u64, sol_price: SolPrice) -> Result<u64> {
    let lamports = (usd as f64 * LAMPORTS_PER_SOL as f64 / sol_price.usd()).floor();
    require!(lamports >= 0.0, LaunchError::PriceUnavailable);
    require!(lamports < u64::MAX as f64, LaunchError::Overflow);
    Ok(lamports as u64)
}

/// Progress toward the graduation market cap, clamped to `0..=100`.
pub fn graduation_progress(market_cap_usd: f64, target_usd: f64) -> f64 {
    if target_usd <= 0.0 {
        return 100.0;
    }
    (market_cap_usd / target_usd * 100.0).clamp(0.0, 100.0)
}

/// `shares / total_shares · 100`, or 0 when nothing is issued.
pub fn ownership_percent(shares: u64, total_shares: u64) -> f64 {
    if total_shares == 0 {
        return 0.0;
    }
    shares as f64 / total_shares as f64 * 100.0
}
