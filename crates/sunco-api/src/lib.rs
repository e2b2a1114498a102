// sunco-api: Async Rust client for the Sunshine Conversations custom integration API

pub mod error;
pub mod integration;
pub mod transport;

pub use error::Error;
pub use integration::types as integration_types;
pub use integration::{ClientConfig, IntegrationClient};
pub use transport::Transport;
