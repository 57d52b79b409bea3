#![allow(ambiguous_glob_reexports)]

pub mod claim;
pub mod execute_round;
pub mod get_config;
pub mod get_round;
pub mod initialize;
pub mod place_bet;
pub mod set_operator;
pub mod set_program_status;
pub mod update_config;

pub use claim::*;
pub use execute_round::*;
pub use get_config::*;
pub use get_round::*;
pub use initialize::*;
pub use place_bet::*;
pub use set_operator::*;
pub use set_program_status::*;
pub use update_config::*;
