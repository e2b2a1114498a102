//! CLI error types with miette diagnostics.
//!
//! Maps `sunco_api::Error` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(sunco::connection_failed),
        help(
            "Check the base URL and your network connection.\n\
             URL: {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Credentials ──────────────────────────────────────────────────
    #[error("No API credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(sunco::no_credentials),
        help(
            "Pass --key-id and --secret, set SUNCO_KEY_ID and SUNCO_SECRET,\n\
             or add key_id and secret (or secret_env) to the profile."
        )
    )]
    NoCredentials { profile: String },

    // ── Responses ────────────────────────────────────────────────────
    #[error("Unexpected response from the API")]
    #[diagnostic(
        code(sunco::unexpected_response),
        help("The server may have rejected the request. Rerun with -vv to see the response status.\n{message}")
    )]
    UnexpectedResponse { message: String },

    #[error(transparent)]
    #[diagnostic(code(sunco::api))]
    Api(sunco_api::Error),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(sunco::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(sunco::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(sunco::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(sunco::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(sunco::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── sunco_api::Error → CliError mapping ──────────────────────────────

impl From<sunco_api::Error> for CliError {
    fn from(err: sunco_api::Error) -> Self {
        match err {
            sunco_api::Error::Transport(e) => CliError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "(unknown)".to_owned(), ToString::to_string),
                source: Box::new(e),
            },

            sunco_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            },

            sunco_api::Error::InvalidPathSegment { value } => CliError::Validation {
                field: "id".into(),
                reason: format!("'{value}' would be resolved away as a relative path"),
            },

            sunco_api::Error::Deserialization { message, .. } => {
                CliError::UnexpectedResponse { message }
            }

            other => CliError::Api(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization_maps_to_unexpected_response() {
        let err = CliError::from(sunco_api::Error::Deserialization {
            message: "expected value at line 1 column 1".into(),
            body: "<html>".into(),
        });
        assert!(matches!(err, CliError::UnexpectedResponse { .. }));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn dot_segment_id_is_a_usage_error() {
        let err = CliError::from(sunco_api::Error::InvalidPathSegment {
            value: "..".into(),
        });
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "id"));
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn unknown_profile_is_a_usage_error() {
        let err = CliError::ProfileNotFound {
            name: "prod".into(),
            available: "default, staging".into(),
        };
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn missing_credentials_exit_code() {
        let err = CliError::NoCredentials {
            profile: "default".into(),
        };
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }
}
