//! CLI-owned configuration: TOML profiles, credential resolution, and
//! translation to `sunco_api::ClientConfig`.
//!
//! The API crate never sees these types -- it receives a pre-built `ClientConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use sunco_api::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Public Sunshine Conversations API root (US region).
pub const DEFAULT_BASE_URL: &str = "https://api.smooch.io/";

// ── TOML config structs ──────────────────────────────────────────────

/// CLI-owned TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Named app profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// One Sunshine Conversations app and the API key used to manage it.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// API root, e.g. "https://api.eu-1.smooch.io/".
    pub base_url: Option<String>,

    pub app_id: Option<String>,

    /// API key id (basic-auth username).
    pub key_id: Option<String>,

    /// API key secret (plaintext -- prefer secret_env).
    pub secret: Option<String>,

    /// Environment variable name containing the secret.
    pub secret_env: Option<String>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path: `--config` first, then platform conventions.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    if let Some(ref path) = global.config {
        return path.clone();
    }
    ProjectDirs::from("com", "sunco", "sunco").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sunco");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
///
/// Nested keys come from `SUNCO_` variables split on `__`, e.g.
/// `SUNCO_PROFILES__PROD__APP_ID`.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SUNCO_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate the active `Profile` + global flags into a `ClientConfig`.
///
/// Flags (and their `SUNCO_*` env vars) win over profile values. A profile
/// named explicitly with `--profile` must exist; the default one may be absent.
pub fn resolve_client_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, config);
    let empty = Profile::default();
    let profile = match config.profiles.get(&profile_name) {
        Some(profile) => profile,
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => &empty,
    };

    let base_url = global
        .base_url
        .clone()
        .or_else(|| profile.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.into());

    let app_id = global
        .app_id
        .clone()
        .or_else(|| profile.app_id.clone())
        .ok_or_else(|| CliError::Validation {
            field: "app_id".into(),
            reason: format!("not set for profile '{profile_name}' (use --app-id)"),
        })?;

    let key_id = global
        .key_id
        .clone()
        .or_else(|| profile.key_id.clone())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.clone(),
        })?;

    let secret = resolve_secret(profile, &profile_name, global)?;

    Ok(ClientConfig::new(base_url, app_id, key_id, secret))
}

// ── Credential helpers ───────────────────────────────────────────────

/// Resolve the API secret from the credential chain.
fn resolve_secret(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    // 1. CLI flag / SUNCO_SECRET
    if let Some(ref secret) = global.secret {
        return Ok(SecretString::from(secret.clone()));
    }

    // 2. Profile's secret_env -> env var lookup
    if let Some(ref env_name) = profile.secret_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 3. Plaintext in config
    if let Some(ref secret) = profile.secret {
        return Ok(SecretString::from(secret.clone()));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}
