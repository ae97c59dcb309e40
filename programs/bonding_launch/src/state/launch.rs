//! Launch State
//!
//! One record per token sale. The engine reads and updates snapshots of
//! this record; persisting them is the host's job.
//!
//! ```text
//!            create_launch
//!                 │
//!                 ▼
//!   ┌──────────────────────────┐   buy / sell
//!   │          Active          │◀────────────┐
//!   │  total_shares, total_sol │─────────────┘
//!   └──────────────────────────┘
//!         │               │
//!  graduate (gates)   enable_refund (expired)
//!         ▼               ▼
//!   ┌───────────┐   ┌─────────────┐
//!   │ Graduated │   │ Refund mode │     terminal, never reverted
//!   └───────────┘   └─────────────┘
//! ```

use anchor_lang::prelude::*;

use crate::curve::{CurveParams, LinearCurve};
use crate::errors::LaunchError;

#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Launch {
    /// Unique launch ID
    pub launch_id: u64,

    /// Creator of this launch (owner of the vesting seed)
    pub creator: Pubkey,

    #[max_len(50)]
    pub name: String,

    #[max_len(10)]
    pub symbol: String,

    /// Curve fixed at creation
    pub curve: CurveParams,

    /// Net shares outstanding: sum of every position's shares + locked shares
    pub total_shares: u64,

    /// Lamports held by the curve: net buy payments minus sell refunds
    pub total_sol: u64,

    /// Shares issued by the creator's seed buy (all locked until vested)
    pub creator_seed_shares: u64,

    /// Net lamports the seed buy paid into the curve
    pub creator_seed_basis: u64,

    /// Seed shares already released to the creator
    pub creator_claimed_shares: u64,

    pub graduated: bool,
    pub refund_mode: bool,

    pub created_at: i64,
    pub graduated_at: Option<i64>,
    pub refund_enabled_at: Option<i64>,

    /// `total_shares` frozen at graduation, the token distribution denominator
    pub total_shares_at_graduation: u64,

    /// Creator had graduated a launch before this one; buys pay the
    /// verified creator fee rate
    pub creator_verified: bool,

    /// Buy fees owed to the creator, paid out by `claim_creator_fees`
    pub creator_accrued_fees: u64,
    /// Lifetime protocol fees, routed to the host's treasury as each buy
    /// settles
    pub protocol_accrued_fees: u64,

    pub bump: u8,
}

impl Launch {
    pub fn curve(&self) -> Result<LinearCurve> {
        LinearCurve::new(self.curve)
    }

    /// Still trading on the curve
    pub fn is_active(&self) -> bool {
        !self.graduated && !self.refund_mode
    }

    /// Reject any transition on a launch that already left the curve.
    pub fn require_active(&self) -> Result<()> {
        require!(!self.graduated, LaunchError::AlreadyGraduated);
        require!(!self.refund_mode, LaunchError::AlreadyRefunding);
        Ok(())
    }

    /// Denominator for token allocation: frozen once graduated, otherwise
    /// the live supply as a forward estimate.
    pub fn token_share_reference(&self) -> u64 {
        if self.graduated {
            self.total_shares_at_graduation
        } else {
            self.total_shares
        }
    }
}
