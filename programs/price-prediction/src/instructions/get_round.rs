use crate::{constants::*, error::PredictionError, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(epoch: u64)]
pub struct GetRound<'info> {
    /// CHECK: Deserialized in the handler so an unknown epoch fails with RoundNotFound
    #[account(
        seeds = [ROUND_SEED.as_bytes(), &epoch.to_le_bytes()],
        bump
    )]
    pub round: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetRound>, _epoch: u64) -> Result<Round> {
    load_account::<Round>(
        &ctx.accounts.round.to_account_info(),
        PredictionError::InvalidRoundAccount,
    )?
    .ok_or(PredictionError::RoundNotFound.into())
}
