use crate::{constants::*, error::PredictionError, state::Bet, utils::*};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Round {
    // --- Identity ---
    pub epoch: u64,           // Strictly increasing round identifier, starting at 1.
    pub start_timestamp: i64, // When the round was opened.
    pub close_timestamp: i64, // start_timestamp + interval at opening time.

    // --- Prices ---
    pub start_price: i64,         // Reference price the round opened with.
    pub close_price: Option<i64>, // Reference price the round closed with.

    // --- Escrow ---
    pub total_amount: u64, // bull_amount + bear_amount
    pub bull_amount: u64,
    pub bear_amount: u64,

    // --- Settlement ---
    pub reward_base_cal_amount: u64, // Winning side's total, the payout divisor. 0 if nobody can win.
    pub reward_amount: u64,          // total_amount minus the treasury fee.
    pub ended: bool,

    // --- Metadata ---
    pub bump: u8, // A bump seed for PDA.
}

/// Outcome of closing a round, used for treasury bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettlement {
    pub treasury_fee: u64,
    pub forfeited: u64, // reward pool nobody is able to claim
}

impl Round {
    pub fn address(epoch: u64, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[ROUND_SEED.as_bytes(), &epoch.to_le_bytes()], program_id)
    }

    pub fn open(
        &mut self,
        epoch: u64,
        now: i64,
        interval_seconds: i64,
        start_price: i64,
        bump: u8,
    ) -> Result<()> {
        let close_timestamp = now
            .checked_add(interval_seconds)
            .ok_or(PredictionError::Overflow)?;

        *self = Round {
            epoch,
            start_timestamp: now,
            close_timestamp,
            start_price,
            close_price: None,
            total_amount: 0,
            bull_amount: 0,
            bear_amount: 0,
            reward_base_cal_amount: 0,
            reward_amount: 0,
            ended: false,
            bump,
        };

        Ok(())
    }

    pub fn ensure_closeable(&self, now: i64) -> Result<()> {
        require!(!self.ended, PredictionError::RoundAlreadyEnded);
        require!(now >= self.close_timestamp, PredictionError::TooEarly);
        Ok(())
    }

    pub fn record_bet(&mut self, position: Position, amount: u64) -> Result<()> {
        require!(!self.ended, PredictionError::RoundAlreadyEnded);

        self.total_amount = self
            .total_amount
            .checked_add(amount)
            .ok_or(PredictionError::Overflow)?;

        match position {
            Position::Bull => {
                self.bull_amount = self
                    .bull_amount
                    .checked_add(amount)
                    .ok_or(PredictionError::Overflow)?;
            }
            Position::Bear => {
                self.bear_amount = self
                    .bear_amount
                    .checked_add(amount)
                    .ok_or(PredictionError::Overflow)?;
            }
        }

        Ok(())
    }

    /// Settles the round at `close_price`. Runs once per round.
    pub fn finalize(&mut self, close_price: i64, treasury_fee_bps: u16) -> Result<RoundSettlement> {
        require!(!self.ended, PredictionError::RoundAlreadyEnded);

        self.close_price = Some(close_price);
        self.reward_base_cal_amount = match winning_position(self.start_price, close_price) {
            Some(Position::Bull) => self.bull_amount,
            Some(Position::Bear) => self.bear_amount,
            None => 0,
        };
        self.reward_amount = calculate_reward_amount(self.total_amount, treasury_fee_bps)?;
        self.ended = true;

        let treasury_fee = self
            .total_amount
            .checked_sub(self.reward_amount)
            .ok_or(PredictionError::Underflow)?;
        let forfeited = if self.reward_base_cal_amount == 0 {
            self.reward_amount
        } else {
            0
        };

        Ok(RoundSettlement {
            treasury_fee,
            forfeited,
        })
    }

    pub fn winning_position(&self) -> Option<Position> {
        let close_price = self.close_price?;
        winning_position(self.start_price, close_price)
    }

    /// Amount owed to `bet`. Zero for losing bets, ties and empty winning sides.
    pub fn payout_for(&self, bet: &Bet) -> Result<u64> {
        require!(self.ended, PredictionError::RoundNotEnded);

        if self.winning_position() != Some(bet.position) {
            return Ok(0);
        }

        calculate_payout(bet.amount, self.reward_amount, self.reward_base_cal_amount)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn opened_round(epoch: u64, now: i64, interval: i64, price: i64) -> Round {
        let mut round = Round::default();
        round.open(epoch, now, interval, price, 255).unwrap();
        round
    }

    #[test]
    fn test_open_sets_fresh_state() {
        let round = opened_round(1, 1_000, 120, 100);

        assert_eq!(round.epoch, 1);
        assert_eq!(round.start_timestamp, 1_000);
        assert_eq!(round.close_timestamp - round.start_timestamp, 120);
        assert_eq!(round.start_price, 100);
        assert_eq!(round.close_price, None);
        assert_eq!(round.total_amount, 0);
        assert_eq!(round.bull_amount, 0);
        assert_eq!(round.bear_amount, 0);
        assert_eq!(round.reward_base_cal_amount, 0);
        assert_eq!(round.reward_amount, 0);
        assert!(!round.ended);
    }

    #[test]
    fn test_open_overflowing_close_timestamp() {
        let mut round = Round::default();
        assert_eq!(
            round.open(1, i64::MAX, 1, 100, 255).unwrap_err(),
            PredictionError::Overflow.into()
        );
    }

    #[test]
    fn test_ensure_closeable() {
        let round = opened_round(1, 1_000, 120, 100);

        assert_eq!(
            round.ensure_closeable(1_119).unwrap_err(),
            PredictionError::TooEarly.into()
        );
        assert!(round.ensure_closeable(1_120).is_ok());
        assert!(round.ensure_closeable(5_000).is_ok());
    }

    #[test]
    fn test_record_bet_aggregates_sides() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bull, 10).unwrap();
        round.record_bet(Position::Bear, 25).unwrap();
        round.record_bet(Position::Bull, 5).unwrap();

        assert_eq!(round.bull_amount, 15);
        assert_eq!(round.bear_amount, 25);
        assert_eq!(round.total_amount, 40);
    }

    #[test]
    fn test_record_bet_rejected_after_close() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bull, 10).unwrap();
        round.finalize(150, 1_000).unwrap();

        assert_eq!(
            round.record_bet(Position::Bear, 10).unwrap_err(),
            PredictionError::RoundAlreadyEnded.into()
        );
        assert_eq!(round.total_amount, 10);
        assert_eq!(round.bear_amount, 0);
    }

    #[test]
    fn test_close_bull_wins() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bull, 1_000).unwrap();
        round.record_bet(Position::Bear, 2_000).unwrap();

        let settlement = round.finalize(200, 1_000).unwrap();

        assert!(round.ended);
        assert_eq!(round.close_price, Some(200));
        assert_eq!(round.reward_base_cal_amount, 1_000);
        assert_eq!(round.reward_amount, 2_700);
        assert_eq!(settlement.treasury_fee, 300);
        assert_eq!(settlement.forfeited, 0);
        assert_eq!(round.winning_position(), Some(Position::Bull));
    }

    #[test]
    fn test_close_bear_wins() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bull, 1_000).unwrap();
        round.record_bet(Position::Bear, 2_000).unwrap();

        round.finalize(-5, 500).unwrap();

        assert_eq!(round.reward_base_cal_amount, 2_000);
        assert_eq!(round.reward_amount, 2_850);
        assert_eq!(round.winning_position(), Some(Position::Bear));
    }

    #[test]
    fn test_close_tie_forfeits_pool() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bull, 1_000).unwrap();
        round.record_bet(Position::Bear, 2_000).unwrap();

        let settlement = round.finalize(100, 1_000).unwrap();

        assert_eq!(round.reward_base_cal_amount, 0);
        assert_eq!(round.reward_amount, 2_700);
        assert_eq!(settlement.treasury_fee, 300);
        assert_eq!(settlement.forfeited, 2_700);
        assert_eq!(round.winning_position(), None);
    }

    #[test]
    fn test_close_empty_winning_side_forfeits_pool() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.record_bet(Position::Bear, 2_000).unwrap();

        let settlement = round.finalize(101, 0).unwrap();

        assert_eq!(round.reward_base_cal_amount, 0);
        assert_eq!(settlement.treasury_fee, 0);
        assert_eq!(settlement.forfeited, 2_000);
    }

    #[test]
    fn test_finalize_runs_once() {
        let mut round = opened_round(1, 1_000, 120, 100);
        round.finalize(150, 1_000).unwrap();

        assert_eq!(
            round.finalize(50, 1_000).unwrap_err(),
            PredictionError::RoundAlreadyEnded.into()
        );
        assert_eq!(round.close_price, Some(150));
        assert_eq!(
            round.ensure_closeable(i64::MAX).unwrap_err(),
            PredictionError::RoundAlreadyEnded.into()
        );
    }
}
