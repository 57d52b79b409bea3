use crate::{constants::*, error::PredictionError, state::Round};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Bet {
    // --- Identify ---
    pub epoch: u64,     // The round this bet is associated with.
    pub bettor: Pubkey, // The address of the player placing the bet.

    // --- Bet Info ---
    pub position: Position, // Bull or Bear.
    pub amount: u64,        // The amount escrowed in the vault.
    pub claimed: bool,      // Whether the reward has been paid out.

    // --- Metadata ---
    pub created_at: i64, // The timestamp when the bet was placed.
    pub bump: u8,        // A bump seed for PDA.
}

impl Bet {
    pub fn address(epoch: u64, bettor: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[BET_SEED.as_bytes(), &epoch.to_le_bytes(), bettor.as_ref()],
            program_id,
        )
    }

    /// A freshly allocated bet account is all zeroes, as is `Bet::default()`.
    pub fn is_placed(&self) -> bool {
        self.bettor != Pubkey::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn place(
        &mut self,
        epoch: u64,
        bettor: Pubkey,
        position: Position,
        amount: u64,
        min_bet_amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_placed(), PredictionError::DuplicateBet);
        require!(amount >= min_bet_amount, PredictionError::BelowMinimum);

        self.epoch = epoch;
        self.bettor = bettor;
        self.position = position;
        self.amount = amount;
        self.claimed = false;
        self.created_at = now;
        self.bump = bump;

        Ok(())
    }

    /// Marks a winning bet as claimed and returns what it is owed.
    /// Bets that cannot win pay zero and are left untouched.
    pub fn settle_claim(&mut self, round: &Round) -> Result<u64> {
        require!(round.ended, PredictionError::RoundNotEnded);
        require!(self.is_placed(), PredictionError::BetNotFound);
        require!(self.epoch == round.epoch, PredictionError::InvalidBetAccount);
        require!(!self.claimed, PredictionError::AlreadyClaimed);

        let payout = round.payout_for(self)?;
        if payout == 0 {
            return Ok(0);
        }

        self.claimed = true;

        Ok(payout)
    }
}
