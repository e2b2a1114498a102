// Custom integration endpoints of the Sunshine Conversations v2 API.
//
// Base path: {base}v2/apps/{appId}/integrations
// Auth: HTTP Basic (API key id / API secret)

pub mod client;
pub mod types;

pub use client::{ClientConfig, IntegrationClient};
