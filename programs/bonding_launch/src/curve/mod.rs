//! # Curve Pricing Engine
//!
//! Every lamport figure in the launch engine comes from this module:
//! marginal price, cost between two supply points, shares bought by a
//! payment, and the current value of a holding.
//!
//! ```text
//!   price ▲
//!         │                 ╱
//!         │               ╱ ░
//!         │             ╱ ░░░   cost(s0, s1) = shaded area
//!         │           ╱ ░░░░░
//!         │         ╱ ░░░░░░░
//!      P0 ┼───────╱───────────
//!         └──────┴─────────┴────▶ supply
//!                s0        s1
//! ```
//!
//! A holding of `h` shares is valued at what it would cost to buy those `h`
//! shares at the top of the current supply, so value rises for existing
//! holders as later buyers move the supply up.

pub mod linear;
pub mod metrics;
pub mod quote;

pub use linear::*;
pub use metrics::*;
pub use quote::*;
