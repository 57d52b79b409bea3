use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    // General Program Errors
    #[msg("Unauthorized action for this account")]
    Unauthorized,

    #[msg("Program is currently paused")]
    ProgramPaused,

    #[msg("Program is already paused")]
    AlreadyPaused,

    #[msg("Program is already active")]
    AlreadyActive,

    // Configuration Errors
    #[msg("Treasury fee exceeds the protocol maximum")]
    FeeTooHigh,

    #[msg("Round interval must be greater than 0")]
    InvalidInterval,

    #[msg("Minimum bet amount must be greater than 0")]
    InvalidMinBetAmount,

    // Round Management Errors
    #[msg("Round does not exist")]
    RoundNotFound,

    #[msg("Can only end round after closeTimestamp")]
    TooEarly,

    #[msg("Round has already ended")]
    RoundAlreadyEnded,

    #[msg("Round has not ended yet")]
    RoundNotEnded,

    #[msg("Round account does not match the requested epoch")]
    InvalidRoundAccount,

    // Betting Errors
    #[msg("Can only bet once per round")]
    DuplicateBet,

    #[msg("Bet amount must be greater than minBetAmount")]
    BelowMinimum,

    // Claim Errors
    #[msg("No bet placed for this round")]
    BetNotFound,

    #[msg("Reward has already been claimed")]
    AlreadyClaimed,

    #[msg("Bet account does not match the requested epoch and bettor")]
    InvalidBetAccount,

    #[msg("Claim requires at least one epoch")]
    EmptyClaim,

    #[msg("Invalid remaining accounts length")]
    InvalidRemainingAccounts,

    // Arithmetic Errors
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}
