use crate::{constants::*, error::PredictionError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

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
}

impl<'info> Claim<'info> {
    pub fn validate(&self, epochs: &[u64], remaining_accounts_len: usize) -> Result<()> {
        validate_claim_batch(epochs)?;

        require!(
            remaining_accounts_len == epochs.len() * ACCOUNTS_PER_CLAIM_EPOCH,
            PredictionError::InvalidRemainingAccounts
        );

        Ok(())
    }
}

/// Settles one `(round, bet)` remaining-account pair and returns the payout.
/// The bet is written back only when something is paid.
pub fn claim_pair(
    epoch: u64,
    bettor: &Pubkey,
    round_ai: &AccountInfo,
    bet_ai: &AccountInfo,
    program_id: &Pubkey,
) -> Result<u64> {
    // validate expected PDAs
    require_keys_eq!(
        *round_ai.key,
        Round::address(epoch, program_id).0,
        PredictionError::InvalidRoundAccount
    );
    require_keys_eq!(
        *bet_ai.key,
        Bet::address(epoch, bettor, program_id).0,
        PredictionError::InvalidBetAccount
    );

    // load round, then bet
    let round = load_account::<Round>(round_ai, PredictionError::InvalidRoundAccount)?;
    let mut bet =
        load_account::<Bet>(bet_ai, PredictionError::InvalidBetAccount)?.unwrap_or_default();

    let payout = claim_epoch(round.as_ref(), &mut bet)?;
    if payout == 0 {
        return Ok(0);
    }

    // serialize back
    require!(bet_ai.is_writable, PredictionError::InvalidBetAccount);
    store_account(bet_ai, &bet)?;

    Ok(payout)
}

/// Pays out every winning bet in `epochs` as one unit: any failing epoch
/// aborts the whole claim.
///
/// Remaining accounts: `[round, bet]` per epoch, in the order of `epochs`.
pub fn handler(ctx: Context<Claim>, epochs: Vec<u64>) -> Result<()> {
    // validate
    ctx.accounts.validate(&epochs, ctx.remaining_accounts.len())?;

    let bettor = ctx.accounts.signer.key();
    let mut total_payout = 0u64;

    for (epoch, pair) in epochs
        .iter()
        .zip(ctx.remaining_accounts.chunks(ACCOUNTS_PER_CLAIM_EPOCH))
    {
        let payout = claim_pair(*epoch, &bettor, &pair[0], &pair[1], ctx.program_id)?;
        if payout == 0 {
            msg!("Nothing to claim for epoch {}", epoch);
            continue;
        }

        total_payout = total_payout
            .checked_add(payout)
            .ok_or(PredictionError::Overflow)?;

        emit!(RewardClaimed {
            epoch: *epoch,
            bettor,
            amount: payout,
        });
    }

    // transfer from vault to bettor
    if total_payout > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.bettor_token_account.to_account_info(),
            authority: ctx.accounts.config.to_account_info(),
        };
        let config_bump = ctx.accounts.config.bump;
        let seeds = &[CONFIG_SEED.as_bytes(), &[config_bump]];
        let signer = &[&seeds[..]];
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        );
        transfer(transfer_ctx, total_payout)?;
    }

    Ok(())
}
