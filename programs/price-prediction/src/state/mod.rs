pub mod bet;
pub mod config;
pub mod round;

pub use bet::*;
pub use config::*;
pub use round::*;
