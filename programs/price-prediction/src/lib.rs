#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("7xQq3nE9RkP6sFvJ4bYtWm2cLd8HaZu5GgNrVjKeXp1T");

#[program]
pub mod price_prediction {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        admin: Pubkey,
        operator: Pubkey,
        interval_seconds: i64,
        min_bet_amount: u64,
        treasury_fee_bps: u16,
    ) -> Result<()> {
        initialize::handler(
            ctx,
            admin,
            operator,
            interval_seconds,
            min_bet_amount,
            treasury_fee_bps,
        )
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_interval_seconds: Option<i64>,
        new_min_bet_amount: Option<u64>,
        new_treasury_fee_bps: Option<u16>,
    ) -> Result<()> {
        update_config::handler(
            ctx,
            new_interval_seconds,
            new_min_bet_amount,
            new_treasury_fee_bps,
        )
    }

    pub fn set_operator(ctx: Context<SetOperator>, operator: Pubkey) -> Result<()> {
        set_operator::handler(ctx, operator)
    }

    pub fn set_program_status(
        ctx: Context<SetProgramStatus>,
        status: ProgramStatus,
    ) -> Result<()> {
        set_program_status::handler(ctx, status)
    }

    pub fn execute_round(ctx: Context<ExecuteRound>, price: i64) -> Result<()> {
        execute_round::handler(ctx, price)
    }

    pub fn place_bet(
        ctx: Context<PlaceBet>,
        epoch: u64,
        position: Position,
        amount: u64,
    ) -> Result<()> {
        place_bet::handler(ctx, epoch, position, amount)
    }

    pub fn claim(ctx: Context<Claim>, epochs: Vec<u64>) -> Result<()> {
        claim::handler(ctx, epochs)
    }

    pub fn get_round(ctx: Context<GetRound>, epoch: u64) -> Result<Round> {
        get_round::handler(ctx, epoch)
    }

    pub fn get_config(ctx: Context<GetConfig>) -> Result<Config> {
        get_config::handler(ctx)
    }

    pub fn get_current_epoch(ctx: Context<GetConfig>) -> Result<u64> {
        get_config::current_epoch_handler(ctx)
    }
}
