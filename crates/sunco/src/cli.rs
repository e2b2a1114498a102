//! Clap derive structures for the `sunco` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sunco -- manage Sunshine Conversations custom integrations
#[derive(Debug, Parser)]
#[command(
    name = "sunco",
    version,
    about = "Manage Sunshine Conversations custom integrations from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SUNCO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use from the config file
    #[arg(long, short = 'p', env = "SUNCO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "SUNCO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// App id (overrides profile)
    #[arg(long, short = 'a', env = "SUNCO_APP_ID", global = true)]
    pub app_id: Option<String>,

    /// API key id, sent as the basic-auth username
    #[arg(long, env = "SUNCO_KEY_ID", global = true)]
    pub key_id: Option<String>,

    /// API key secret, sent as the basic-auth password
    #[arg(long, env = "SUNCO_SECRET", global = true, hide_env_values = true)]
    pub secret: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SUNCO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one id per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage custom integrations and their webhooks
    #[command(alias = "int", alias = "i")]
    Integrations(IntegrationsArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Integrations ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IntegrationsArgs {
    #[command(subcommand)]
    pub command: IntegrationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum IntegrationsCommand {
    /// List custom integrations
    #[command(alias = "ls")]
    List,

    /// Show one integration
    Get {
        /// Integration id
        id: String,
    },

    /// Create a custom integration with one webhook
    Create(CreateArgs),

    /// Rename an integration
    Update {
        /// Integration id
        id: String,

        /// New display name
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Delete an integration
    #[command(alias = "rm")]
    Delete {
        /// Integration id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Display name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Webhook target URL
    #[arg(long, short = 't')]
    pub target: String,

    /// Trigger to subscribe to (repeatable), e.g. conversation:message
    #[arg(long = "trigger", value_name = "TRIGGER")]
    pub triggers: Vec<String>,

    /// Include the full user object in webhook payloads
    #[arg(long)]
    pub include_full_user: bool,

    /// Include the full source object in webhook payloads
    #[arg(long)]
    pub include_full_source: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Show the resolved connection settings (secret redacted)
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
