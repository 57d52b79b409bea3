use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetConfig<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<GetConfig>) -> Result<Config> {
    Ok((*ctx.accounts.config).clone())
}

pub fn current_epoch_handler(ctx: Context<GetConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.current_epoch)
}
