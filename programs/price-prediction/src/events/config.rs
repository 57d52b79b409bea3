use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub interval_seconds: i64,
    pub min_bet_amount: u64,
    pub treasury_fee_bps: u16,
    pub version: u64,
}

#[event]
pub struct OperatorUpdated {
    pub admin: Pubkey,
    pub operator: Pubkey,
}

#[event]
pub struct ProgramPaused {
    pub admin: Pubkey,
    pub config: Pubkey,
}

#[event]
pub struct ProgramUnpaused {
    pub admin: Pubkey,
    pub config: Pubkey,
}
