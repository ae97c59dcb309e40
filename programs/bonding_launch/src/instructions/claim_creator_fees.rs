//! Creator Fee Claim
//!
//! Buy fees earned by the creator accrue on the launch while it trades and
//! become payable once it graduates. The host moves the returned lamports
//! to the creator's wallet.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::events::CreatorFeesClaimed;
use crate::state::Launch;

pub struct ClaimCreatorFees<'a> {
    pub launch: &'a mut Launch,
    /// Signer asking for the payout
    pub creator: Pubkey,
}

impl<'a> ClaimCreatorFees<'a> {
    /// Pay out every accrued creator fee. Returns the lamports owed.
    pub fn claim_creator_fees(&mut self, now: i64) -> Result<u64> {
        require!(
            self.creator == self.launch.creator,
            LaunchError::NotCreator
        );
        require!(self.launch.graduated, LaunchError::NotGraduated);

        let amount = self.launch.creator_accrued_fees;
        require!(amount > 0, LaunchError::NoFeesToClaim);

        self.launch.creator_accrued_fees = 0;

        msg!(
            "Launch {}: creator claimed {} lamports in fees",
            self.launch.launch_id,
            amount
        );

        emit!(CreatorFeesClaimed {
            launch_id: self.launch.launch_id,
            creator: self.creator,
            amount,
            timestamp: now,
        });

        Ok(amount)
    }
}
