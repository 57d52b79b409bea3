use crate::{constants::*, error::PredictionError};
use anchor_lang::prelude::*;

/// Side that wins a round, or `None` when the price did not move.
pub fn winning_position(start_price: i64, close_price: i64) -> Option<Position> {
    match close_price.cmp(&start_price) {
        std::cmp::Ordering::Greater => Some(Position::Bull),
        std::cmp::Ordering::Less => Some(Position::Bear),
        std::cmp::Ordering::Equal => None,
    }
}

/// floor(total_amount * treasury_fee_bps / 10000)
pub fn calculate_treasury_fee(total_amount: u64, treasury_fee_bps: u16) -> Result<u64> {
    let fee = (total_amount as u128)
        .checked_mul(treasury_fee_bps as u128)
        .ok_or(PredictionError::Overflow)?
        .checked_div(HUNDRED_PERCENT_BPS as u128)
        .ok_or(PredictionError::Overflow)?;

    u64::try_from(fee).map_err(|_| PredictionError::Overflow.into())
}

pub fn calculate_reward_amount(total_amount: u64, treasury_fee_bps: u16) -> Result<u64> {
    let fee = calculate_treasury_fee(total_amount, treasury_fee_bps)?;

    total_amount
        .checked_sub(fee)
        .ok_or(PredictionError::Underflow.into())
}

/// Proportional share of the reward pool, rounded down.
/// A zero reward base pays nothing instead of dividing by zero.
pub fn calculate_payout(
    bet_amount: u64,
    reward_amount: u64,
    reward_base_cal_amount: u64,
) -> Result<u64> {
    if reward_base_cal_amount == 0 {
        return Ok(0);
    }

    let payout = (bet_amount as u128)
        .checked_mul(reward_amount as u128)
        .ok_or(PredictionError::Overflow)?
        .checked_div(reward_base_cal_amount as u128)
        .ok_or(PredictionError::Overflow)?;

    u64::try_from(payout).map_err(|_| PredictionError::Overflow.into())
}
