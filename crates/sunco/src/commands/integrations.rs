//! Integration command handlers.

use sunco_api::IntegrationClient;

use crate::cli::{GlobalOpts, IntegrationsArgs, IntegrationsCommand};
use crate::error::CliError;
use crate::output::{self, IntegrationRow};

use super::util;

pub async fn handle(
    client: &IntegrationClient,
    args: IntegrationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        IntegrationsCommand::List => {
            let integrations = client.list_custom_integrations().await?;
            let out = output::render_list(
                &global.output,
                &integrations,
                |i| IntegrationRow::from(i),
                |i| i.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        IntegrationsCommand::Get { id } => {
            let integration = client.get_integration(&id).await?;
            let out = output::render_single(
                &global.output,
                &integration,
                output::integration_detail,
                |i| i.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        IntegrationsCommand::Create(args) => {
            let integration = client
                .create_integration(
                    &args.name,
                    &args.target,
                    &args.triggers,
                    args.include_full_user,
                    args.include_full_source,
                )
                .await?;
            let out = output::render_single(
                &global.output,
                &integration,
                output::integration_detail,
                |i| i.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // The API client does not check the response, so only report delivery.
        IntegrationsCommand::Update { id, name } => {
            client.update_integration(&id, &name).await?;
            if !global.quiet {
                eprintln!("Update sent for integration '{id}'");
            }
            Ok(())
        }

        IntegrationsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete integration '{id}'? Its webhooks stop firing."),
                "integrations delete",
                global.yes,
            )? {
                return Ok(());
            }
            client.delete_integration(&id).await?;
            if !global.quiet {
                eprintln!("Delete sent for integration '{id}'");
            }
            Ok(())
        }
    }
}
