use crate::state::Config;
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Operator,
}

pub fn authorize(config: &Config, role: Role, caller: &Pubkey) -> bool {
    match role {
        Role::Admin => *caller == config.admin,
        Role::Operator => *caller == config.operator,
    }
}
