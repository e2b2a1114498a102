//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod config_cmd;
pub mod integrations;
pub mod util;
