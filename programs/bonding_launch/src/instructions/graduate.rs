//! Graduation
//!
//! Moves a launch off the curve. The gates are evaluated here from the
//! holder snapshot and price passed in; a verdict computed elsewhere is
//! never accepted.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::events::LaunchGraduated;
use crate::graduation::GraduationGates;
use crate::oracle::SolPrice;
use crate::state::{Launch, LaunchConfig, Position};

pub struct Graduate<'a> {
    pub config: &'a LaunchConfig,
    pub launch: &'a mut Launch,
}

impl<'a> Graduate<'a> {
    /// Graduate the launch if every gate passes against `positions`.
    pub fn graduate<'p>(
        &mut self,
        positions: impl IntoIterator<Item = &'p Position>,
        sol_price: SolPrice,
        now: i64,
    ) -> Result<GraduationGates> {
        self.launch.require_active()?;

        let gates =
            GraduationGates::evaluate(&self.config.graduation, self.launch, positions, sol_price)?;
        if !gates.can_graduate {
            msg!(
                "Launch {} cannot graduate: {}",
                self.launch.launch_id,
                gates.blocking_reasons.join("; ")
            );
            return err!(LaunchError::GateNotMet);
        }

        self.launch.graduated = true;
        self.launch.graduated_at = Some(now);
        self.launch.total_shares_at_graduation = self.launch.total_shares;

        msg!("Launch {} graduated!", self.launch.launch_id);
        msg!(
            "Supply frozen at {} shares, {} lamports",
            self.launch.total_shares,
            self.launch.total_sol
        );

        emit!(LaunchGraduated {
            launch_id: self.launch.launch_id,
            total_shares: self.launch.total_shares,
            total_sol: self.launch.total_sol,
            holders: gates.holders,
            market_cap_usd: gates.market_cap_usd,
            timestamp: now,
        });

        Ok(gates)
    }
}
