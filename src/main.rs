// Copyright (c) 2025 Portal. All rights reserved.

mod cli_messages;
mod consts;
mod environment;
mod events;
mod form;
mod logging;
mod runtime;
mod session;
mod ui;
mod validation;
mod workers;

use crate::environment::Environment;
use crate::form::Credentials;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::validation::{validate_email, validate_password};
use clap::{Parser, Subcommand};
use std::error::Error;

/// Terminal sign-in client with a simulated authentication backend
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the sign-in portal
    Start {
        /// Run without the terminal UI, submitting a single sign-in attempt.
        #[arg(long)]
        headless: bool,

        /// Email address to submit in headless mode.
        #[arg(long, value_name = "EMAIL", requires = "headless")]
        email: Option<String>,

        /// Password to submit in headless mode.
        #[arg(long, value_name = "PASSWORD", requires = "headless")]
        password: Option<String>,

        /// Disable background colors in the terminal UI.
        #[arg(long)]
        no_background_color: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let portal_environment_str = std::env::var("PORTAL_ENVIRONMENT").unwrap_or_default();
    let environment = portal_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            email,
            password,
            no_background_color,
        } => start(environment, headless, email, password, !no_background_color).await,
    }
}

/// Starts the Portal CLI application.
///
/// # Arguments
/// * `environment` - The environment to present in the UI and logs.
/// * `headless` - Whether to run without the terminal UI.
/// * `email` - Email flag value, headless mode only.
/// * `password` - Password flag value, headless mode only.
/// * `with_background` - Whether to enable background colors.
async fn start(
    environment: Environment,
    headless: bool,
    email: Option<String>,
    password: Option<String>,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    if headless {
        // A rejected credential pair behaves like a submit that never
        // starts: nothing is dispatched and the worker never spins up.
        let credentials = headless_credentials(email, password)?;
        let session = setup_session(environment).await;
        run_headless_mode(session, credentials).await
    } else {
        let session = setup_session(environment).await;
        run_tui_mode(session, with_background).await
    }
}

/// Check the headless credential flags with the same rules the form uses.
fn headless_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<Credentials, Box<dyn Error>> {
    let email = email.unwrap_or_default();
    let password = password.unwrap_or_default();

    let mut problems = Vec::new();
    if let Err(e) = validate_email(&email) {
        problems.push(e.to_string());
    }
    if let Err(e) = validate_password(&password) {
        problems.push(e.to_string());
    }

    if !problems.is_empty() {
        let details = problems.join("; ");
        print_cmd_error!("Sign-in attempt rejected", details.as_str());
        return Err(Box::from(details));
    }

    Ok(Credentials { email, password })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_credentials_accepts_valid_pair() {
        let result = headless_credentials(
            Some("a@b.com".to_string()),
            Some("secret1".to_string()),
        );
        let credentials = result.expect("valid pair accepted");
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, "secret1");
    }

    #[test]
    fn headless_credentials_rejects_invalid_email() {
        let result = headless_credentials(Some("bad".to_string()), Some("secret1".to_string()));
        let message = result.expect_err("invalid email rejected").to_string();
        assert!(message.contains("valid email address"));
    }

    #[test]
    /// Omitted flags validate like empty fields, so both hints come back.
    fn headless_credentials_rejects_missing_flags() {
        let message = headless_credentials(None, None)
            .expect_err("missing flags rejected")
            .to_string();
        assert!(message.contains("Email is required"));
        assert!(message.contains("Password is required"));
    }
}
