use std::path::Path;

use anyhow::Result;

use crate::{
    api,
    cli::{Cli, Command, OtpCommand},
    domain, infra,
    infra::{config::AppConfig, storage_layout::StorageLayout},
    ui::{self, StdTerminal},
    usecases::{
        self,
        bootstrap::{self, AppGateway},
        context::AppContext,
        guided_auth::{self, GuidedAuthOutcome, RetryPolicy},
        session::SignOutOutcome,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_command(cli))
}

async fn run_command(cli: Cli) -> Result<()> {
    let command = cli.command_or_default();

    if matches!(command, Command::Logout) {
        let context = build_logout_context(cli.config.as_deref())?;
        let mut gateway = bootstrap::compose_gateway(&context)?;
        let outcome = gateway.sign_out().await;
        tracing::info!(token = ?outcome.token, "logout completed");
        return match logout_message(&outcome) {
            Ok(line) => {
                println!("{line}");
                Ok(())
            }
            Err(line) => anyhow::bail!(line),
        };
    }

    let context = bootstrap::bootstrap(cli.config.as_deref())?;
    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        api = api::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let mut gateway = bootstrap::compose_gateway(&context)?;
    let mut terminal = StdTerminal;

    match command {
        Command::Chat => {
            let conversation = bootstrap::compose_conversation(&context);
            let session = gateway.subscribe();
            let (shell, _) = tokio::join!(
                ui::shell::start(&mut terminal, &conversation, session),
                gateway.restore_session()
            );
            shell?;
        }
        Command::Login => {
            let outcome =
                guided_auth::run_guided_sign_in(&mut terminal, &mut gateway, &RetryPolicy::default())
                    .await?;
            report_guided_outcome(&outcome, "login");
        }
        Command::Register => {
            let outcome =
                guided_auth::run_guided_sign_up(&mut terminal, &mut gateway, &RetryPolicy::default())
                    .await?;
            report_guided_outcome(&outcome, "register");
        }
        Command::Whoami => {
            let user = gateway.restore_session().await;
            println!("{}", whoami_line(user.as_ref().and_then(|user| user.display_name())));
        }
        Command::Otp { command } => run_otp(&mut terminal, &gateway, command).await?,
        Command::Logout => {}
    }

    Ok(())
}

async fn run_otp(
    terminal: &mut StdTerminal,
    gateway: &AppGateway,
    command: OtpCommand,
) -> Result<()> {
    let delivered = match command {
        OtpCommand::Send { email } => guided_auth::request_otp(terminal, gateway, &email).await?,
        OtpCommand::Verify { email, code } => {
            guided_auth::confirm_otp(terminal, gateway, &email, &code).await?
        }
    };

    tracing::debug!(delivered, "otp command finished");
    Ok(())
}

fn build_logout_context(config_path: Option<&Path>) -> Result<AppContext> {
    match bootstrap::bootstrap(config_path) {
        Ok(context) => Ok(context),
        Err(error) => {
            tracing::warn!(
                error = ?error,
                "logout fallback: bootstrap failed, continuing with local cleanup"
            );
            Ok(AppContext::new(AppConfig::default(), StorageLayout::resolve()?))
        }
    }
}

fn logout_message(outcome: &SignOutOutcome) -> Result<&'static str, &'static str> {
    if outcome.token_cleared() {
        Ok("Signed out. Run `prepdesk login` to sign in again.")
    } else {
        Err("AUTH_SESSION_PERSIST_FAILED: signed out for this run, but the stored session token could not be removed")
    }
}

fn report_guided_outcome(outcome: &GuidedAuthOutcome, command: &str) {
    match outcome {
        GuidedAuthOutcome::Authenticated => {
            tracing::info!(command, "guided authorization completed");
        }
        GuidedAuthOutcome::ExitWithGuidance => {
            tracing::info!(command, "guided authorization ended without a session");
            println!("No session was created. Run `prepdesk {command}` to try again.");
        }
    }
}

fn whoami_line(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Signed in as {name}."),
        None => "Not signed in.".to_owned(),
    }
}
