use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED.as_bytes()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> Initialize<'info> {
    pub fn validate(
        &self,
        interval_seconds: i64,
        min_bet_amount: u64,
        treasury_fee_bps: u16,
    ) -> Result<()> {
        Config::validate_interval(interval_seconds)?;
        Config::validate_min_bet_amount(min_bet_amount)?;
        Config::validate_treasury_fee(treasury_fee_bps)?;

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    admin: Pubkey,
    operator: Pubkey,
    interval_seconds: i64,
    min_bet_amount: u64,
    treasury_fee_bps: u16,
) -> Result<()> {
    // validate
    ctx.accounts
        .validate(interval_seconds, min_bet_amount, treasury_fee_bps)?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.admin = admin;
    config.operator = operator;
    config.token_mint = ctx.accounts.mint.key();
    config.treasury_amount = 0;
    config.interval_seconds = interval_seconds;
    config.min_bet_amount = min_bet_amount;
    config.treasury_fee_bps = treasury_fee_bps;
    config.status = ProgramStatus::Active;
    config.current_epoch = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    // emit event
    emit!(ConfigUpdated {
        admin,
        interval_seconds,
        min_bet_amount,
        treasury_fee_bps,
        version: config.version,
    });

    Ok(())
}
