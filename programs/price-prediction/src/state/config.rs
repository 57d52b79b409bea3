use crate::{constants::*, error::PredictionError, utils::*};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct Config {
    // --- Authorities ---
    pub admin: Pubkey,    // Allowed to change configuration and pause the program.
    pub operator: Pubkey, // Allowed to execute round transitions.

    // --- Custody ---
    pub token_mint: Pubkey,   // The SPL token escrowed by bets.
    pub treasury_amount: u64, // Fees and forfeited pools retained in the vault.

    // --- Round Rules ---
    pub interval_seconds: i64, // Length of every newly opened round.
    pub min_bet_amount: u64,   // Minimum escrow per bet.
    pub treasury_fee_bps: u16, // Protocol fee taken from each round's total.

    // --- Global State ---
    pub status: ProgramStatus, // Active / Paused
    pub current_epoch: u64,    // Epoch of the latest opened round, 0 before the first one.

    // --- Metadata ---
    pub version: u64,   // Bumped on every configuration change.
    pub bump: u8,       // A bump seed for PDA.
    pub vault_bump: u8, // A bump seed for the vault PDA.
}

impl Config {
    pub fn validate_interval(interval_seconds: i64) -> Result<()> {
        require!(interval_seconds > 0, PredictionError::InvalidInterval);
        Ok(())
    }

    pub fn validate_min_bet_amount(min_bet_amount: u64) -> Result<()> {
        require!(min_bet_amount > 0, PredictionError::InvalidMinBetAmount);
        Ok(())
    }

    pub fn validate_treasury_fee(treasury_fee_bps: u16) -> Result<()> {
        require!(
            treasury_fee_bps <= MAX_TREASURY_FEE_BPS,
            PredictionError::FeeTooHigh
        );
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == ProgramStatus::Active
    }

    pub fn next_epoch(&self) -> Result<u64> {
        self.current_epoch
            .checked_add(1)
            .ok_or(PredictionError::Overflow.into())
    }

    pub fn bump_version(&mut self) -> Result<()> {
        self.version = self
            .version
            .checked_add(1)
            .ok_or(PredictionError::Overflow)?;
        Ok(())
    }

    /// Applies an admin configuration change. Either every provided field
    /// is valid and applied, or nothing changes.
    pub fn apply_update(
        &mut self,
        caller: &Pubkey,
        new_interval_seconds: Option<i64>,
        new_min_bet_amount: Option<u64>,
        new_treasury_fee_bps: Option<u16>,
    ) -> Result<()> {
        require!(
            authorize(self, Role::Admin, caller),
            PredictionError::Unauthorized
        );

        if let Some(new_interval_seconds) = new_interval_seconds {
            Config::validate_interval(new_interval_seconds)?;
        }
        if let Some(new_min_bet_amount) = new_min_bet_amount {
            Config::validate_min_bet_amount(new_min_bet_amount)?;
        }
        if let Some(new_treasury_fee_bps) = new_treasury_fee_bps {
            Config::validate_treasury_fee(new_treasury_fee_bps)?;
        }

        if let Some(new_interval_seconds) = new_interval_seconds {
            self.interval_seconds = new_interval_seconds;
        }
        if let Some(new_min_bet_amount) = new_min_bet_amount {
            self.min_bet_amount = new_min_bet_amount;
        }
        if let Some(new_treasury_fee_bps) = new_treasury_fee_bps {
            self.treasury_fee_bps = new_treasury_fee_bps;
        }

        self.bump_version()
    }

    pub fn assign_operator(&mut self, caller: &Pubkey, operator: Pubkey) -> Result<()> {
        require!(
            authorize(self, Role::Admin, caller),
            PredictionError::Unauthorized
        );

        self.operator = operator;
        self.bump_version()
    }

    pub fn set_status(&mut self, caller: &Pubkey, status: ProgramStatus) -> Result<()> {
        match status {
            ProgramStatus::Paused => require!(
                self.status != ProgramStatus::Paused,
                PredictionError::AlreadyPaused
            ),
            ProgramStatus::Active => require!(
                self.status != ProgramStatus::Active,
                PredictionError::AlreadyActive
            ),
        }

        require!(
            authorize(self, Role::Admin, caller),
            PredictionError::Unauthorized
        );

        self.status = status;
        Ok(())
    }

    pub fn credit_treasury(&mut self, amount: u64) -> Result<()> {
        self.treasury_amount = self
            .treasury_amount
            .checked_add(amount)
            .ok_or(PredictionError::Overflow)?;
        Ok(())
    }
}
