//! Interactive account flows: sign-in, sign-up, one-time passcodes.
//!
//! Prompts re-ask only for locally invalid input. A backend rejection ends the
//! flow with a sanitized error code so the user can rerun the command.

use std::io;

use crate::infra::{
    contracts::TokenStore,
    secrets::{redact_text, sanitize_error_code},
};

use super::{
    contracts::{AuthApi, AuthApiError, LineTerminal},
    session::{GatewayError, SessionGateway},
};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub email_attempts: usize,
    pub name_attempts: usize,
    pub password_attempts: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            email_attempts: 3,
            name_attempts: 3,
            password_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidedAuthOutcome {
    Authenticated,
    ExitWithGuidance,
}

pub async fn run_guided_sign_in<A, S>(
    terminal: &mut dyn LineTerminal,
    gateway: &mut SessionGateway<A, S>,
    retry_policy: &RetryPolicy,
) -> io::Result<GuidedAuthOutcome>
where
    A: AuthApi,
    S: TokenStore,
{
    let Some(email) = collect_email(terminal, retry_policy.email_attempts)? else {
        return Ok(GuidedAuthOutcome::ExitWithGuidance);
    };

    let Some(password) = collect_password(terminal, retry_policy.password_attempts, false)? else {
        return Ok(GuidedAuthOutcome::ExitWithGuidance);
    };

    match gateway.sign_in(&email, &password).await {
        Ok(user) => {
            let name = user.display_name().unwrap_or(email.as_str()).to_owned();
            terminal.print_line(&format!("Signed in as {name}."))?;
            Ok(GuidedAuthOutcome::Authenticated)
        }
        Err(error) => {
            report_gateway_error(terminal, &error, "sign-in")?;
            Ok(GuidedAuthOutcome::ExitWithGuidance)
        }
    }
}

pub async fn run_guided_sign_up<A, S>(
    terminal: &mut dyn LineTerminal,
    gateway: &mut SessionGateway<A, S>,
    retry_policy: &RetryPolicy,
) -> io::Result<GuidedAuthOutcome>
where
    A: AuthApi,
    S: TokenStore,
{
    let Some(email) = collect_email(terminal, retry_policy.email_attempts)? else {
        return Ok(GuidedAuthOutcome::ExitWithGuidance);
    };

    let Some(full_name) = collect_full_name(terminal, retry_policy.name_attempts)? else {
        return Ok(GuidedAuthOutcome::ExitWithGuidance);
    };

    let Some(password) = collect_password(terminal, retry_policy.password_attempts, true)? else {
        return Ok(GuidedAuthOutcome::ExitWithGuidance);
    };

    match gateway.sign_up(&email, &password, &full_name).await {
        Ok(_) => {
            terminal.print_line(&format!("Account created. Signed in as {full_name}."))?;
            Ok(GuidedAuthOutcome::Authenticated)
        }
        Err(error) => {
            report_gateway_error(terminal, &error, "sign-up")?;
            Ok(GuidedAuthOutcome::ExitWithGuidance)
        }
    }
}

pub async fn request_otp<A, S>(
    terminal: &mut dyn LineTerminal,
    gateway: &SessionGateway<A, S>,
    email: &str,
) -> io::Result<bool>
where
    A: AuthApi,
    S: TokenStore,
{
    if !is_valid_email(email) {
        terminal.print_line("AUTH_INVALID_EMAIL: Use an address like name@example.com.")?;
        return Ok(false);
    }

    match gateway.send_otp(email).await {
        Ok(()) => {
            terminal.print_line(&format!("A one-time code was sent to {email}."))?;
            Ok(true)
        }
        Err(error) => {
            report_gateway_error(terminal, &error, "send-otp")?;
            Ok(false)
        }
    }
}

pub async fn confirm_otp<A, S>(
    terminal: &mut dyn LineTerminal,
    gateway: &SessionGateway<A, S>,
    email: &str,
    code: &str,
) -> io::Result<bool>
where
    A: AuthApi,
    S: TokenStore,
{
    let code = code.trim();
    if code.is_empty() {
        terminal.print_line("AUTH_INVALID_CODE: The code cannot be empty.")?;
        return Ok(false);
    }

    match gateway.verify_otp(email, code).await {
        Ok(()) => {
            terminal.print_line("Code verified.")?;
            Ok(true)
        }
        Err(error) => {
            report_gateway_error(terminal, &error, "verify-otp")?;
            Ok(false)
        }
    }
}

fn collect_email(terminal: &mut dyn LineTerminal, attempts: usize) -> io::Result<Option<String>> {
    for attempt in 1..=attempts {
        let Some(email) = terminal.prompt_line("Email: ")? else {
            terminal.print_line("Input cancelled (EOF). Run the command again to retry.")?;
            return Ok(None);
        };

        if !is_valid_email(&email) {
            terminal.print_line(&format!(
                "Invalid email address. Attempts left: {}",
                attempts.saturating_sub(attempt)
            ))?;
            continue;
        }

        return Ok(Some(email));
    }

    terminal.print_line("Email step failed too many times.")?;
    Ok(None)
}

fn collect_full_name(
    terminal: &mut dyn LineTerminal,
    attempts: usize,
) -> io::Result<Option<String>> {
    for attempt in 1..=attempts {
        let Some(name) = terminal.prompt_line("Full name: ")? else {
            terminal.print_line("Input cancelled (EOF). Run the command again to retry.")?;
            return Ok(None);
        };

        if name.trim().is_empty() {
            terminal.print_line(&format!(
                "Name cannot be empty. Attempts left: {}",
                attempts.saturating_sub(attempt)
            ))?;
            continue;
        }

        return Ok(Some(name.trim().to_owned()));
    }

    terminal.print_line("Name step failed too many times.")?;
    Ok(None)
}

fn collect_password(
    terminal: &mut dyn LineTerminal,
    attempts: usize,
    enforce_length: bool,
) -> io::Result<Option<String>> {
    for attempt in 1..=attempts {
        let Some(password) = terminal.prompt_secret("Password: ")? else {
            terminal.print_line("Input cancelled (EOF). Run the command again to retry.")?;
            return Ok(None);
        };

        let too_short = enforce_length && password.chars().count() < MIN_PASSWORD_LENGTH;
        if password.is_empty() || too_short {
            terminal.print_line(&format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters. Attempts left: {}",
                attempts.saturating_sub(attempt)
            ))?;
            continue;
        }

        return Ok(Some(password));
    }

    terminal.print_line("Password step failed too many times.")?;
    Ok(None)
}

fn report_gateway_error(
    terminal: &mut dyn LineTerminal,
    error: &GatewayError,
    step: &str,
) -> io::Result<()> {
    let code = sanitize_error_code(error.code());
    tracing::warn!(code = %code, step, "account operation failed");

    let detail = match error {
        GatewayError::Api(AuthApiError::Rejected { message, .. }) => redact_text(message),
        GatewayError::Api(AuthApiError::Unauthorized) => "not authenticated".to_owned(),
        GatewayError::Api(_) => "account service is unavailable, try again later".to_owned(),
        GatewayError::TokenStore(_) => "session could not be saved locally".to_owned(),
    };

    terminal.print_line(&format!("{code}: {step} failed: {detail}"))
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
