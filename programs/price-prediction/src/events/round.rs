use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub epoch: u64,
    pub start_timestamp: i64,
    pub close_timestamp: i64,
    pub start_price: i64,
}

#[event]
pub struct RoundEnded {
    pub epoch: u64,
    pub close_price: i64,
    pub total_amount: u64,
    pub reward_base_cal_amount: u64,
    pub reward_amount: u64,
    pub treasury_fee: u64,
    pub forfeited: u64,
}
