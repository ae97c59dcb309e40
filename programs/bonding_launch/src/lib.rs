//! # Bonding Launch: Curve-Priced Token Launches
//!
//! The settlement core of a token launchpad. Buyers acquire shares on a
//! linear bonding curve; once a launch passes its graduation gates it
//! leaves the curve and shares convert into tokens.
//!
//! ## Overview
//!
//! - [`curve`] prices buys and values holdings.
//! - [`settlement`] refunds sells at basis and reports what was left behind.
//! - [`graduation`] decides when a launch may leave the curve.
//! - [`portfolio`] values every holding of a user.
//! - [`vesting`] unlocks the creator's seed after graduation.
//!
//! Reads go through [`Quoter`]. Writes go through the transitions in
//! [`instructions`], which take exclusive borrows of the launch and position
//! snapshots they change. Storage, signing and the price feed belong to the
//! host.

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod fees;
pub mod graduation;
pub mod instructions;
pub mod oracle;
pub mod portfolio;
pub mod quoter;
pub mod settlement;
pub mod state;
pub mod vesting;

#[cfg(test)]
mod test_utils;

pub use curve::*;
pub use errors::LaunchError;
pub use instructions::*;
pub use oracle::{FixedPrice, PriceProvider, SolPrice};
pub use quoter::Quoter;

// Owner for the account layouts in `state`
declare_id!("3PE5ttSJQYMk2saJSJdLZMrqBA35J1biubzs5NauDbX9");
