//! # SOL/USD Price Input
//!
//! The engine never fetches, caches or ages prices. A host supplies a
//! [`PriceProvider`] (Pyth reader, cached feed, fixed test value ...) and
//! the engine reads one [`SolPrice`] per operation. Staleness and retry
//! policy belong to the provider.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::LaunchError;

/// A validated SOL price in USD: finite and strictly positive.
///
/// USD values are display figures only; settlement math never reads them
/// back into lamports except for the creator seed bounds. The only decode
/// path is serde, which goes through the same check as [`SolPrice::new`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct SolPrice(f64);

impl SolPrice {
    pub fn new(usd: f64) -> Result<Self> {
        require!(usd.is_finite() && usd > 0.0, LaunchError::PriceUnavailable);
        Ok(Self(usd))
    }

    pub fn usd(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SolPrice {
    type Error = String;

    fn try_from(usd: f64) -> std::result::Result<Self, Self::Error> {
        if usd.is_finite() && usd > 0.0 {
            Ok(Self(usd))
        } else {
            Err(format!("invalid SOL price: {usd}"))
        }
    }
}

impl From<SolPrice> for f64 {
    fn from(price: SolPrice) -> f64 {
        price.0
    }
}

/// Source of the live SOL/USD price.
pub trait PriceProvider {
    /// Latest price, or `LaunchError::PriceUnavailable` when none can be served.
    fn sol_price(&self) -> Result<SolPrice>;
}

/// A provider that always answers with the same price.
#[derive(Clone, Copy, Debug)]
pub struct FixedPrice(pub SolPrice);

impl PriceProvider for FixedPrice {
    fn sol_price(&self) -> Result<SolPrice> {
        Ok(self.0)
    }
}

impl<P: PriceProvider + ?Sized> PriceProvider for &P {
    fn sol_price(&self) -> Result<SolPrice> {
        (**self).sol_price()
    }
}
