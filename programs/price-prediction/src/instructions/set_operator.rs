use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetOperator<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<SetOperator>, operator: Pubkey) -> Result<()> {
    let admin = ctx.accounts.signer.key();

    // validate, set fields and bump the config version
    ctx.accounts.config.assign_operator(&admin, operator)?;

    // emit event
    emit!(OperatorUpdated { admin, operator });

    Ok(())
}
