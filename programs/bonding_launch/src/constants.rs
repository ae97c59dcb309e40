//! Protocol Constants
//!
//! Default economics for a launch. Every value here seeds
//! [`LaunchConfig::default`](crate::state::LaunchConfig); hosts that need
//! different numbers build their own config and validate it.

pub use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

// ============================================================================
// GRADUATION GATES
// ============================================================================

/// Market cap (USD) a launch must reach before it can leave the curve
pub const GRADUATION_MARKET_CAP_USD: u64 = 42_000;

/// Minimum number of distinct holders for graduation
pub const GRADUATION_MIN_HOLDERS: u64 = 100;

/// Largest single holder allowed at graduation (1000 bps = 10%)
pub const GRADUATION_MAX_CONCENTRATION_BPS: u64 = 1_000;

/// Basis points denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================================
// TOKEN SUPPLY
// ============================================================================

/// Tokens distributed pro rata to shareholders at graduation (whole tokens)
pub const TOKENS_FOR_HOLDERS: u64 = 800_000_000;

/// Decimals of the token minted at graduation
pub const TOKEN_DECIMALS: u32 = 9;

// ============================================================================
// TIME WINDOWS
// ============================================================================

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Creator seed vesting window, counted in whole days from graduation
pub const VESTING_DURATION_DAYS: u64 = 42;

/// A launch that has not graduated after this long may enter refund mode
pub const LAUNCH_DURATION_SECONDS: i64 = 7 * SECONDS_PER_DAY;

// ============================================================================
// FEES & LIMITS
// ============================================================================

/// Fee taken from every buy payment (1%)
pub const TOTAL_FEE_BPS: u64 = 100;

/// Creator's part of [`TOTAL_FEE_BPS`]; the protocol keeps the rest
pub const CREATOR_FEE_BPS: u64 = 30;

/// Creator's part once the creator has graduated a launch (0.5%)
pub const CREATOR_FEE_VERIFIED_BPS: u64 = 50;

/// Largest single buy payment (1000 SOL)
pub const MAX_BUY_LAMPORTS: u64 = 1_000 * LAMPORTS_PER_SOL;

/// Creator seed bounds, converted to lamports at the live SOL price
pub const MIN_SEED_USD: u64 = 40;
pub const MAX_SEED_USD: u64 = 20_000;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_SYMBOL_LEN: usize = 10;

// ============================================================================
// BONDING CURVE
// ============================================================================

/// Marginal price of the first share, in lamports
pub const CURVE_BASE_PRICE: u64 = 0;

/// Slope of the marginal price, as `CURVE_SLOPE / CURVE_SCALE` lamports per share.
///
/// With a zero base price, ~210 SOL of buys issues ~733M shares and ~420 SOL
/// issues ~1.04B, so the $42K target is reached at a share count that
/// depends on the SOL price rather than on a fixed cap.
pub const CURVE_SLOPE: u128 = 781_250;
pub const CURVE_SCALE: u128 = 1_000_000_000_000;

// ============================================================================
// SELL WARNINGS
// ============================================================================

/// Forfeited fraction of the shares' curve value below which a sell warning is `Low`
pub const WARNING_LOW_MAX_BPS: u64 = 1_000;

/// Forfeited fraction below which a sell warning is `Medium`; `High` from here up
pub const WARNING_MEDIUM_MAX_BPS: u64 = 5_000;
