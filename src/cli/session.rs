//! Session lifecycle commands (login, logout, status)

use colored::Colorize;
use dialoguer::{Input, Password};

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_format;
use crate::cli::handlers;
use crate::cli::OutputFormat;
use crate::client::{AuthApi, RegistryClient};
use crate::client::models::LoginRequest;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::validate;

/// Load the config, or start from an empty one when none exists yet.
fn load_or_default(path: Option<&str>) -> Result<Config> {
    match Config::load_at(path) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
        Err(err) => Err(err),
    }
}

/// Log in: prompt for credentials, exchange them for a bearer token,
/// and store it in the config file.
pub async fn login(opts: &GlobalOptions, email: Option<String>) -> Result<()> {
    let mut config = load_or_default(opts.config_ref())?;
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    validate::email("email", &email)?;

    let password = Password::new().with_prompt("Password").interact()?;

    let client = RegistryClient::new(config.api_host(), None)?;
    let response = client
        .login(&LoginRequest {
            email: email.clone(),
            password,
        })
        .await?;

    config.email = Some(email);
    config.token = Some(response.token);
    config.save_at(opts.config_ref())?;

    handlers::success("Logged in, session token stored.");
    Ok(())
}

/// Log out: drop the stored session token.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut config = load_or_default(opts.config_ref())?;

    if config.token.is_none() {
        println!("Not logged in.");
        return Ok(());
    }

    config.clear_token();
    config.save_at(opts.config_ref())?;
    handlers::success("Logged out.");
    Ok(())
}

/// Drop the stored token after the backend answered 401.
pub fn clear_stored_token(path: Option<&str>) -> Result<()> {
    let mut config = Config::load_at(path)?;
    if config.token.is_some() {
        config.clear_token();
        config.save_at(path)?;
    }
    Ok(())
}

/// Show session and configuration status.
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let config = load_or_default(opts.config_ref())?;
    let format = resolve_format(opts, &config);
    let logged_in = config.token.is_some();

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "api_host": config.api_host(),
                "email": config.email,
                "logged_in": logged_in,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            println!("{}", "Komora Status".bold());
            println!();
            println!("  API host:  {}", config.api_host());
            println!(
                "  Email:     {}",
                config.email.as_deref().unwrap_or("-")
            );
            if logged_in {
                println!("  Session:   {}", "logged in".green());
            } else {
                println!("  Session:   {} (run `komora login`)", "not logged in".yellow());
            }
        }
    }

    Ok(())
}
