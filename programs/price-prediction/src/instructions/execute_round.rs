use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ExecuteRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    // Omitted only before the first round is opened
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &config.current_epoch.to_le_bytes()],
        bump
    )]
    pub current_round: Option<Account<'info, Round>>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Round::INIT_SPACE,
        seeds = [ROUND_SEED.as_bytes(), &(config.current_epoch + 1).to_le_bytes()],
        bump
    )]
    pub next_round: Account<'info, Round>,

    pub system_program: Program<'info, System>,
}

/// Closes the running round at `price` and opens the next one starting at
/// the same price.
pub fn handler(ctx: Context<ExecuteRound>, price: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let operator = ctx.accounts.signer.key();
    let next_bump = ctx.bumps.next_round;

    // validate, close the outgoing round and open the next one
    let settlement = execute_transition(
        &mut ctx.accounts.config,
        &operator,
        ctx.accounts.current_round.as_deref_mut(),
        &mut ctx.accounts.next_round,
        next_bump,
        now,
        price,
    )?;

    // emit events
    if let (Some(settlement), Some(round)) = (settlement, ctx.accounts.current_round.as_ref()) {
        emit!(RoundEnded {
            epoch: round.epoch,
            close_price: price,
            total_amount: round.total_amount,
            reward_base_cal_amount: round.reward_base_cal_amount,
            reward_amount: round.reward_amount,
            treasury_fee: settlement.treasury_fee,
            forfeited: settlement.forfeited,
        });
    }

    let next_round = &ctx.accounts.next_round;
    emit!(RoundStarted {
        epoch: next_round.epoch,
        start_timestamp: next_round.start_timestamp,
        close_timestamp: next_round.close_timestamp,
        start_price: next_round.start_price,
    });

    Ok(())
}
