//! Launch Creation
//!
//! Opens a launch and prices the creator's seed buy on the fresh curve.
//! The whole seed is locked in the creator's position until it vests
//! after graduation.

use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::curve::{lamports_to_usd, plan_buy};
use crate::errors::LaunchError;
use crate::events::LaunchCreated;
use crate::oracle::SolPrice;
use crate::state::{Launch, LaunchConfig, Position};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct CreateLaunchArgs {
    pub name: String,
    pub symbol: String,
    /// Creator's seed payment in lamports, fee included
    pub seed_lamports: u64,
    /// The creator has graduated a launch before
    pub creator_verified: bool,
}

/// Inputs for opening a new launch
pub struct CreateLaunch<'a> {
    pub config: &'a LaunchConfig,
    /// ID assigned by the host's launch registry
    pub launch_id: u64,
    pub creator: Pubkey,
}

impl<'a> CreateLaunch<'a> {
    /// Build the launch record and the creator's seeded position.
    pub fn create_launch(
        &self,
        args: CreateLaunchArgs,
        sol_price: SolPrice,
        now: i64,
    ) -> Result<(Launch, Position)> {
        require!(!self.config.paused, LaunchError::ProtocolPaused);
        self.config.validate()?;
        validate_label(&args.name, MAX_NAME_LEN)?;
        validate_label(&args.symbol, MAX_SYMBOL_LEN)?;

        let seed_usd = lamports_to_usd(args.seed_lamports, sol_price);
        require!(
            seed_usd >= self.config.min_seed_usd as f64,
            LaunchError::SeedAmountTooLow
        );
        require!(
            seed_usd <= self.config.max_seed_usd as f64,
            LaunchError::SeedAmountTooHigh
        );

        let launch = Launch {
            launch_id: self.launch_id,
            creator: self.creator,
            name: args.name,
            symbol: args.symbol,
            curve: self.config.curve,
            creator_verified: args.creator_verified,
            created_at: now,
            ..Launch::default()
        };
        let plan = plan_buy(
            &launch.curve()?,
            &self.config.fees.for_creator(launch.creator_verified),
            0,
            args.seed_lamports,
            self.config.max_buy_lamports,
        )?;

        let launch = Launch {
            total_shares: plan.shares_out,
            total_sol: plan.fees.net,
            creator_seed_shares: plan.shares_out,
            creator_seed_basis: plan.fees.net,
            creator_accrued_fees: plan.fees.creator_fee,
            protocol_accrued_fees: plan.fees.protocol_fee,
            ..launch
        };
        let position = Position {
            locked_shares: plan.shares_out,
            sol_basis: plan.fees.net,
            ..Position::new(self.launch_id, self.creator, now)
        };

        msg!("Launch {} created: {} (${})", launch.launch_id, launch.name, launch.symbol);
        msg!("Seed: {} lamports -> {} shares", args.seed_lamports, plan.shares_out);

        emit!(LaunchCreated {
            launch_id: launch.launch_id,
            creator: self.creator,
            name: launch.name.clone(),
            symbol: launch.symbol.clone(),
            seed_lamports: args.seed_lamports,
            seed_shares: plan.shares_out,
            timestamp: now,
        });

        Ok((launch, position))
    }
}

fn validate_label(label: &str, max_len: usize) -> Result<()> {
    require!(!label.trim().is_empty(), LaunchError::InvalidInput);
    require!(label.len() <= max_len, LaunchError::InvalidInput);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LAMPORTS_PER_SOL;
    use crate::test_utils::{assert_launch_error, price};

    fn args(seed_lamports: u64) -> CreateLaunchArgs {
        CreateLaunchArgs {
            name: "Moon Cat".to_string(),
            symbol: "MCAT".to_string(),
            seed_lamports,
            creator_verified: false,
        }
    }

    #[test]
    fn test_seed_is_locked_in_creator_position() {
        let config = LaunchConfig::default();
        let creator = Pubkey::new_unique();
        let ctx = CreateLaunch {
            config: &config,
            launch_id: 1,
            creator,
        };
        // 1 SOL at $200 = $200 seed
        let (launch, position) = ctx
            .create_launch(args(LAMPORTS_PER_SOL), price(200.0), 1_000)
            .unwrap();

        assert_eq!(launch.creator, creator);
        assert_eq!(launch.created_at, 1_000);
        assert_eq!(launch.curve, config.curve);
        assert_eq!(launch.total_sol, 990_000_000);
        assert_eq!(launch.creator_accrued_fees, 3_000_000);
        assert_eq!(launch.protocol_accrued_fees, 7_000_000);
        assert!(launch.total_shares > 0);
        assert_eq!(launch.creator_seed_shares, launch.total_shares);
        assert_eq!(launch.creator_seed_basis, launch.total_sol);

        assert_eq!(position.user, creator);
        assert_eq!(position.shares, 0);
        assert_eq!(position.locked_shares, launch.total_shares);
        assert_eq!(position.sol_basis, launch.total_sol);
        assert!(position.is_creator(&launch.creator));
    }

    #[test]
    fn test_seed_usd_bounds() {
        let config = LaunchConfig::default();
        let ctx = CreateLaunch {
            config: &config,
            launch_id: 1,
            creator: Pubkey::new_unique(),
        };
        // $39 and $20,001 at $100/SOL
        assert_launch_error(
            ctx.create_launch(args(390_000_000), price(100.0), 0),
            LaunchError::SeedAmountTooLow,
        );
        assert_launch_error(
            ctx.create_launch(args(200_010_000_000), price(100.0), 0),
            LaunchError::SeedAmountTooHigh,
        );
        ctx.create_launch(args(400_000_000), price(100.0), 0).unwrap();
        ctx.create_launch(args(200 * LAMPORTS_PER_SOL), price(100.0), 0).unwrap();
    }

    #[test]
    fn test_verified_creator_and_pause() {
        let config = LaunchConfig::default();
        let ctx = CreateLaunch {
            config: &config,
            launch_id: 1,
            creator: Pubkey::new_unique(),
        };
        let verified = CreateLaunchArgs {
            creator_verified: true,
            ..args(LAMPORTS_PER_SOL)
        };
        let (launch, _) = ctx.create_launch(verified, price(200.0), 0).unwrap();
        assert!(launch.creator_verified);
        assert_eq!(launch.creator_accrued_fees, 5_000_000);
        assert_eq!(launch.protocol_accrued_fees, 5_000_000);

        let paused = LaunchConfig {
            paused: true,
            ..LaunchConfig::default()
        };
        assert_launch_error(
            CreateLaunch {
                config: &paused,
                launch_id: 2,
                creator: Pubkey::new_unique(),
            }
            .create_launch(args(LAMPORTS_PER_SOL), price(200.0), 0),
            LaunchError::ProtocolPaused,
        );
    }

    #[test]
    fn test_labels_are_validated() {
        let config = LaunchConfig::default();
        let ctx = CreateLaunch {
            config: &config,
            launch_id: 1,
            creator: Pubkey::new_unique(),
        };
        let mut bad = args(LAMPORTS_PER_SOL);
        bad.name = "  ".to_string();
        assert_launch_error(ctx.create_launch(bad, price(200.0), 0), LaunchError::InvalidInput);

        let mut bad = args(LAMPORTS_PER_SOL);
        bad.symbol = "TOOLONGSYMBOL".to_string();
        assert_launch_error(ctx.create_launch(bad, price(200.0), 0), LaunchError::InvalidInput);
    }
}
