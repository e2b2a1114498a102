//! Config subcommand handlers.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

/// What `config show` prints. The secret never leaves `SecretString`.
#[derive(Serialize)]
struct ResolvedView<'a> {
    profile: &'a str,
    base_url: &'a str,
    app_id: &'a str,
    key_id: &'a str,
    secret: &'static str,
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path(global);
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config(&path)?;
            let profile = config::active_profile_name(global, &cfg);
            let resolved = config::resolve_client_config(global, &cfg)?;

            let view = ResolvedView {
                profile: &profile,
                base_url: resolved.base_url(),
                app_id: resolved.app_id(),
                key_id: resolved.key_id(),
                secret: "********",
            };
            let out = output::render_single(
                &global.output,
                &view,
                |v| {
                    format!(
                        "Profile:  {}\nBase URL: {}\nApp ID:   {}\nKey ID:   {}\nSecret:   {}",
                        v.profile, v.base_url, v.app_id, v.key_id, v.secret
                    )
                },
                |v| v.profile.to_owned(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
