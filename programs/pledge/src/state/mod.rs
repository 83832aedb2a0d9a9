pub mod config;
pub mod pledge;

pub use config::*;
pub use pledge::*;
