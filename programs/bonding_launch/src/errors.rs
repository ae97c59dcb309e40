use anchor_lang::prelude::*;

/// Errors raised by the launch engine.
///
/// Business-rule rejections (`InsufficientShares`, `SlippageExceeded`,
/// `GateNotMet`, `NothingToClaim`, ...) are expected outcomes callers branch
/// on. `Overflow` and `InvariantViolation` mean a snapshot or computation is
/// broken; the transition that hit them is abandoned and never retried.
#[error_code]
pub enum LaunchError {
    #[msg("Invalid input amount")]
    InvalidInput,

    #[msg("Insufficient shares for sell")]
    InsufficientShares,

    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,

    #[msg("Graduation gates are not met")]
    GateNotMet,

    #[msg("This launch has already graduated")]
    AlreadyGraduated,

    #[msg("Refund mode is already active")]
    AlreadyRefunding,

    #[msg("Nothing available to claim")]
    NothingToClaim,

    #[msg("Math overflow")]
    Overflow,

    #[msg("Launch state invariant violated")]
    InvariantViolation,

    #[msg("Launch is not graduated")]
    NotGraduated,

    #[msg("Refund mode is not active")]
    RefundModeNotActive,

    #[msg("Launch duration has not expired yet")]
    LaunchNotExpired,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Creator only")]
    NotCreator,

    #[msg("Creator seed must finish vesting first")]
    VestingNotComplete,

    #[msg("Invalid launch configuration")]
    InvalidConfig,

    #[msg("SOL price is unavailable")]
    PriceUnavailable,

    #[msg("Seed amount below minimum USD threshold")]
    SeedAmountTooLow,

    #[msg("Seed amount above maximum USD threshold")]
    SeedAmountTooHigh,

    #[msg("Position does not belong to this launch")]
    LaunchMismatch,

    #[msg("No fees to claim")]
    NoFeesToClaim,

    #[msg("Protocol is currently paused")]
    ProtocolPaused,
}
