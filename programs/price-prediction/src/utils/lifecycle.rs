use crate::{constants::*, error::PredictionError, state::*, utils::*};
use anchor_lang::prelude::*;

/// Round transition run by the operator: finalizes `current` at `price`
/// and opens the next epoch at the same price.
///
/// `current` is `None` only before the first round exists.
pub fn execute_transition(
    config: &mut Config,
    caller: &Pubkey,
    current: Option<&mut Round>,
    next: &mut Round,
    next_bump: u8,
    now: i64,
    price: i64,
) -> Result<Option<RoundSettlement>> {
    require!(config.is_active(), PredictionError::ProgramPaused);
    require!(
        authorize(config, Role::Operator, caller),
        PredictionError::Unauthorized
    );

    let settlement = match current {
        Some(round) => {
            require!(
                round.epoch == config.current_epoch,
                PredictionError::InvalidRoundAccount
            );
            round.ensure_closeable(now)?;

            let settlement = round.finalize(price, config.treasury_fee_bps)?;
            config.credit_treasury(settlement.treasury_fee)?;
            config.credit_treasury(settlement.forfeited)?;
            Some(settlement)
        }
        None => {
            require!(config.current_epoch == 0, PredictionError::RoundNotFound);
            None
        }
    };

    let epoch = config.next_epoch()?;
    next.open(epoch, now, config.interval_seconds, price, next_bump)?;
    config.current_epoch = epoch;

    Ok(settlement)
}

/// Records a bet against `round`. `round` is `None` for an epoch that was
/// never opened.
#[allow(clippy::too_many_arguments)]
pub fn accept_bet(
    config: &Config,
    round: Option<&mut Round>,
    bet: &mut Bet,
    bettor: Pubkey,
    position: Position,
    amount: u64,
    now: i64,
    bet_bump: u8,
) -> Result<()> {
    require!(config.is_active(), PredictionError::ProgramPaused);

    let round = round.ok_or(PredictionError::RoundNotFound)?;

    // Only `ended` gates betting; a round past its close timestamp keeps
    // accepting bets until the operator executes the next round.
    require!(!round.ended, PredictionError::RoundAlreadyEnded);

    bet.place(
        round.epoch,
        bettor,
        position,
        amount,
        config.min_bet_amount,
        now,
        bet_bump,
    )?;
    round.record_bet(position, amount)
}

pub fn validate_claim_batch(epochs: &[u64]) -> Result<()> {
    require!(!epochs.is_empty(), PredictionError::EmptyClaim);
    require!(
        epochs.len() <= MAX_CLAIM_EPOCHS,
        PredictionError::InvalidRemainingAccounts
    );
    Ok(())
}

/// Settles one epoch of a claim. A bet that was never placed is passed in
/// as `Bet::default()`.
pub fn claim_epoch(round: Option<&Round>, bet: &mut Bet) -> Result<u64> {
    let round = round.ok_or(PredictionError::RoundNotFound)?;
    bet.settle_claim(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{config::tests::test_config, round::tests::opened_round};

    #[test]
    fn test_first_transition_needs_no_current_round() {
        let operator = Pubkey::new_unique();
        let mut config = test_config(Pubkey::new_unique(), operator);
        let mut next = Round::default();

        let settlement =
            execute_transition(&mut config, &operator, None, &mut next, 254, 1_000, 100).unwrap();

        assert_eq!(settlement, None);
        assert_eq!(config.current_epoch, 1);
        assert_eq!(next.epoch, 1);
        assert_eq!(next.start_price, 100);
        assert_eq!(next.close_timestamp, 1_120);
        assert_eq!(next.bump, 254);
    }

    #[test]
    fn test_transition_checks_pause_before_caller() {
        let operator = Pubkey::new_unique();
        let mut config = test_config(Pubkey::new_unique(), operator);
        config.status = ProgramStatus::Paused;

        assert_eq!(
            execute_transition(
                &mut config,
                &Pubkey::new_unique(),
                None,
                &mut Round::default(),
                254,
                1_000,
                100
            )
            .unwrap_err(),
            PredictionError::ProgramPaused.into()
        );
    }

    #[test]
    fn test_transition_requires_the_running_round() {
        let operator = Pubkey::new_unique();
        let mut config = test_config(Pubkey::new_unique(), operator);
        config.current_epoch = 2;

        assert_eq!(
            execute_transition(&mut config, &operator, None, &mut Round::default(), 254, 5_000, 100)
                .unwrap_err(),
            PredictionError::RoundNotFound.into()
        );

        let mut stale = opened_round(1, 1_000, 120, 100);
        assert_eq!(
            execute_transition(
                &mut config,
                &operator,
                Some(&mut stale),
                &mut Round::default(),
                254,
                5_000,
                100
            )
            .unwrap_err(),
            PredictionError::InvalidRoundAccount.into()
        );
        assert!(!stale.ended);
    }

    #[test]
    fn test_transition_credits_fee_and_forfeit() {
        let operator = Pubkey::new_unique();
        let mut config = test_config(Pubkey::new_unique(), operator);
        config.current_epoch = 1;

        let mut current = opened_round(1, 1_000, 120, 100);
        current.record_bet(Position::Bull, 1_000).unwrap();
        current.record_bet(Position::Bear, 2_000).unwrap();
        let mut next = Round::default();

        // Tie at 100
        let settlement = execute_transition(
            &mut config,
            &operator,
            Some(&mut current),
            &mut next,
            254,
            1_120,
            100,
        )
        .unwrap()
        .unwrap();

        assert_eq!(settlement.treasury_fee, 300);
        assert_eq!(settlement.forfeited, 2_700);
        assert_eq!(config.treasury_amount, 3_000);
        assert!(current.ended);
        assert_eq!(next.epoch, 2);
        assert_eq!(config.current_epoch, 2);
    }

    #[test]
    fn test_accept_bet_checks_pause_before_round() {
        let mut config = test_config(Pubkey::new_unique(), Pubkey::new_unique());
        config.status = ProgramStatus::Paused;
        let mut bet = Bet::default();

        assert_eq!(
            accept_bet(
                &config,
                None,
                &mut bet,
                Pubkey::new_unique(),
                Position::Bull,
                10,
                1_000,
                254
            )
            .unwrap_err(),
            PredictionError::ProgramPaused.into()
        );
        assert!(!bet.is_placed());
    }

    #[test]
    fn test_accept_bet_records_on_round() {
        let config = test_config(Pubkey::new_unique(), Pubkey::new_unique());
        let bettor = Pubkey::new_unique();
        let mut round = opened_round(4, 1_000, 120, 100);
        let mut bet = Bet::default();

        accept_bet(
            &config,
            Some(&mut round),
            &mut bet,
            bettor,
            Position::Bear,
            25,
            1_050,
            253,
        )
        .unwrap();

        assert_eq!(bet.epoch, 4);
        assert_eq!(bet.bettor, bettor);
        assert_eq!(bet.bump, 253);
        assert_eq!(round.bear_amount, 25);
        assert_eq!(round.total_amount, 25);
    }

    #[test]
    fn test_claim_batch_bounds() {
        assert_eq!(
            validate_claim_batch(&[]).unwrap_err(),
            PredictionError::EmptyClaim.into()
        );
        assert!(validate_claim_batch(&[1; MAX_CLAIM_EPOCHS]).is_ok());
        assert_eq!(
            validate_claim_batch(&[1; MAX_CLAIM_EPOCHS + 1]).unwrap_err(),
            PredictionError::InvalidRemainingAccounts.into()
        );
    }

    #[test]
    fn test_claim_epoch_unknown_round() {
        assert_eq!(
            claim_epoch(None, &mut Bet::default()).unwrap_err(),
            PredictionError::RoundNotFound.into()
        );
    }
}
