use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetProgramStatus<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

/// Pauses or resumes round execution and betting. Claims stay open while
/// paused.
pub fn handler(ctx: Context<SetProgramStatus>, status: ProgramStatus) -> Result<()> {
    let admin = ctx.accounts.signer.key();
    let config = &mut ctx.accounts.config;

    // validate, then set fields
    config.set_status(&admin, status)?;

    // emit event
    let config = config.key();
    match status {
        ProgramStatus::Paused => emit!(ProgramPaused { admin, config }),
        ProgramStatus::Active => emit!(ProgramUnpaused { admin, config }),
    }

    Ok(())
}
