//! Read-side facade for display and transaction-building layers.
//!
//! A [`Quoter`] pairs a [`LaunchConfig`] with a [`PriceProvider`] and reads
//! the price once per call. Everything else is delegated to the pure
//! components, so a quote and the state change it precedes always share
//! the same math.

use anchor_lang::prelude::*;

use crate::curve::BuyQuote;
use crate::graduation::GraduationGates;
use crate::oracle::PriceProvider;
use crate::portfolio::PortfolioSummary;
use crate::settlement::SellQuote;
use crate::state::{Launch, LaunchConfig, Position};
use crate::vesting::VestingInfo;

pub struct Quoter<'a, P: PriceProvider> {
    config: &'a LaunchConfig,
    prices: P,
}

impl<'a, P: PriceProvider> Quoter<'a, P> {
    pub fn new(config: &'a LaunchConfig, prices: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, prices })
    }

    pub fn config(&self) -> &LaunchConfig {
        self.config
    }

    /// Quote a buy by `position`'s owner, or by a first-time buyer when
    /// `position` is `None`.
    pub fn buy_quote(
        &self,
        launch: &Launch,
        position: Option<&Position>,
        lamports_in: u64,
    ) -> Result<BuyQuote> {
        let holder_shares = match position {
            Some(position) => position.held_shares()?,
            None => 0,
        };
        let sol_price = self.prices.sol_price()?;
        BuyQuote::compute(self.config, launch, holder_shares, lamports_in, sol_price)
    }

    pub fn sell_quote(
        &self,
        launch: &Launch,
        position: &Position,
        shares_to_sell: u64,
    ) -> Result<SellQuote> {
        let sol_price = self.prices.sol_price()?;
        SellQuote::compute(launch, position, shares_to_sell, sol_price)
    }

    pub fn graduation_gates<'p>(
        &self,
        launch: &Launch,
        positions: impl IntoIterator<Item = &'p Position>,
    ) -> Result<GraduationGates> {
        let sol_price = self.prices.sol_price()?;
        GraduationGates::evaluate(&self.config.graduation, launch, positions, sol_price)
    }

    pub fn portfolio<'p>(
        &self,
        holdings: impl IntoIterator<Item = (&'p Launch, &'p Position)>,
    ) -> Result<PortfolioSummary> {
        let sol_price = self.prices.sol_price()?;
        PortfolioSummary::compute(holdings, self.config.tokens_for_holders, sol_price)
    }

    /// Vesting needs no price.
    pub fn vesting(&self, launch: &Launch, now: i64) -> Result<VestingInfo> {
        VestingInfo::compute(launch, self.config.vesting_days, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LaunchError;
    use crate::oracle::{FixedPrice, SolPrice};
    use crate::test_utils::{assert_launch_error, free_config, holder, launch_with_supply, price};
    use std::cell::Cell;

    struct CountingFeed {
        reads: Cell<u32>,
        price: Option<SolPrice>,
    }

    impl PriceProvider for CountingFeed {
        fn sol_price(&self) -> Result<SolPrice> {
            self.reads.set(self.reads.get() + 1);
            self.price.ok_or_else(|| LaunchError::PriceUnavailable.into())
        }
    }

    #[test]
    fn test_quotes_read_price_once() {
        let config = free_config();
        let feed = CountingFeed {
            reads: Cell::new(0),
            price: Some(price(200.0)),
        };
        let quoter = Quoter::new(&config, &feed).unwrap();
        let launch = launch_with_supply(10, 100);
        let position = holder(&launch, 10, 100);

        let buy = quoter.buy_quote(&launch, Some(&position), 300).unwrap();
        assert_eq!(buy.shares_out, 10);
        assert_eq!(buy.ownership_percent_after, 100.0);
        assert_eq!(feed.reads.get(), 1);

        quoter.sell_quote(&launch, &position, 5).unwrap();
        quoter.graduation_gates(&launch, [&position]).unwrap();
        quoter.portfolio([(&launch, &position)]).unwrap();
        assert_eq!(feed.reads.get(), 4);

        quoter.vesting(&launch, 0).unwrap();
        assert_eq!(feed.reads.get(), 4);
    }

    #[test]
    fn test_missing_price_fails_the_quote() {
        let config = free_config();
        let feed = CountingFeed {
            reads: Cell::new(0),
            price: None,
        };
        let quoter = Quoter::new(&config, feed).unwrap();
        let launch = launch_with_supply(0, 0);
        assert_launch_error(
            quoter.buy_quote(&launch, None, 100),
            LaunchError::PriceUnavailable,
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = free_config();
        config.vesting_days = 0;
        assert!(Quoter::new(&config, FixedPrice(price(200.0))).is_err());
    }
}
