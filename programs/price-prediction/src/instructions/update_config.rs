use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

/// Changes apply to rounds opened and bets placed afterwards. Rounds already
/// running keep the close timestamp they were opened with.
pub fn handler(
    ctx: Context<UpdateConfig>,
    new_interval_seconds: Option<i64>,
    new_min_bet_amount: Option<u64>,
    new_treasury_fee_bps: Option<u16>,
) -> Result<()> {
    let admin = ctx.accounts.signer.key();
    let config = &mut ctx.accounts.config;

    // validate, set fields and bump the config version
    config.apply_update(
        &admin,
        new_interval_seconds,
        new_min_bet_amount,
        new_treasury_fee_bps,
    )?;

    // emit event
    emit!(ConfigUpdated {
        admin,
        interval_seconds: config.interval_seconds,
        min_bet_amount: config.min_bet_amount,
        treasury_fee_bps: config.treasury_fee_bps,
        version: config.version,
    });

    Ok(())
}
