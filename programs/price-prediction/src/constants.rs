use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ROUND_SEED: &str = "round";
#[constant]
pub const BET_SEED: &str = "bet";
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Account discriminator size
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Basis points
pub const HUNDRED_PERCENT_BPS: u16 = 10_000;
#[constant]
pub const MAX_TREASURY_FEE_BPS: u16 = 1_000; // 10%

/// Claim batching
pub const MAX_CLAIM_EPOCHS: usize = 10;
pub const ACCOUNTS_PER_CLAIM_EPOCH: usize = 2; // (round, bet)

/// Enum for program status flags
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProgramStatus {
    Active,
    Paused,
}

/// Enum for bet positions
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum Position {
    #[default]
    Bull, // price closes higher than it started
    Bear, // price closes lower than it started
}
