//! State transitions for the launch lifecycle
//!
//! Each transition borrows the snapshots it changes mutably, checks
//! everything first, and writes only once every check has passed:
//! - `create_launch` - Open a launch with the creator's locked seed
//! - `trade` - Buy shares on the curve / sell them back for basis
//! - `graduate` - Leave the curve once all gates pass
//! - `refund` - Enable refund mode after expiry, claim basis back
//! - `claim_vesting` - Release vested creator seed shares
//! - `claim_tokens` - Convert shares to tokens after graduation
//! - `claim_creator_fees` - Pay out the creator's buy fees after graduation

pub mod claim_creator_fees;
pub mod claim_tokens;
pub mod claim_vesting;
pub mod create_launch;
pub mod graduate;
pub mod refund;
pub mod trade;

pub use claim_creator_fees::*;
pub use claim_tokens::*;
pub use claim_vesting::*;
pub use create_launch::*;
pub use graduate::*;
pub use refund::*;
pub use trade::*;
