use crate::constants::Position;
use anchor_lang::prelude::*;

#[event]
pub struct BetPlaced {
    pub epoch: u64,
    pub bettor: Pubkey,
    pub position: Position,
    pub amount: u64,
}

#[event]
pub struct RewardClaimed {
    pub epoch: u64,
    pub bettor: Pubkey,
    pub amount: u64,
}
