pub mod access;
pub mod account;
pub mod lifecycle;
pub mod reward;

pub use access::*;
pub use account::*;
pub use lifecycle::*;
pub use reward::*;
