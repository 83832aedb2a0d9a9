pub mod create_pledge;
pub mod edit_pledge;
pub mod initialize;
pub mod process_completion;
pub mod process_expired;
pub mod report_completion;
pub mod update_config;

pub use create_pledge::*;
pub use edit_pledge::*;
pub use initialize::*;
pub use process_completion::*;
pub use process_expired::*;
pub use report_completion::*;
pub use update_config::*;
