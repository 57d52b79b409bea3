use crate::{constants::*, error::PredictionError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
#[instruction(epoch: u64)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Deserialized in the handler so an unknown epoch fails with RoundNotFound
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &epoch.to_le_bytes()],
        bump
    )]
    pub round: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Bet::INIT_SPACE,
        seeds = [BET_SEED.as_bytes(), &epoch.to_le_bytes(), signer.key().as_ref()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = config.vault_bump,
        token::mint = mint
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = signer
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn load_round(&self) -> Result<Option<Round>> {
        load_account::<Round>(
            &self.round.to_account_info(),
            PredictionError::InvalidRoundAccount,
        )
    }
}

pub fn handler(
    ctx: Context<PlaceBet>,
    epoch: u64,
    position: Position,
    amount: u64,
) -> Result<()> {
    let mut round = ctx.accounts.load_round()?;
    let now = Clock::get()?.unix_timestamp;
    let bettor = ctx.accounts.signer.key();
    let bet_bump = ctx.bumps.bet;

    // validate, then set bet and round fields
    accept_bet(
        &ctx.accounts.config,
        round.as_mut(),
        &mut ctx.accounts.bet,
        bettor,
        position,
        amount,
        now,
        bet_bump,
    )?;
    if let Some(round) = round.as_ref() {
        store_account(&ctx.accounts.round.to_account_info(), round)?;
    }

    // transfer from bettor to vault
    let transfer_accounts = Transfer {
        from: ctx.accounts.bettor_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    // emit event
    emit!(BetPlaced {
        epoch,
        bettor,
        position,
        amount,
    });

    Ok(())
}
