//! Komora CLI - admin companion for the dental chamber registry

use clap::Parser;
use colored::Colorize;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod validate;

use cli::{Cli, Commands, GlobalOptions};
use error::{ApiError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    if let Err(err) = run(cli.command, &opts).await {
        // A 401 means the stored token is dead; drop it so the next
        // command prompts for a fresh login instead of failing again.
        if matches!(err, Error::Api(ApiError::Unauthorized))
            && let Err(clear_err) = cli::session::clear_stored_token(opts.config_ref())
        {
            log::warn!("Could not clear stored token: {}", clear_err);
        }

        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Login { email } => cli::session::login(opts, email).await,
        Commands::Logout => cli::session::logout(opts),
        Commands::Status => cli::session::status(opts),
        Commands::Version => {
            println!("komora version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Member(cmd) => cli::member::run(cmd, opts).await,
        Commands::City(cmd) => cli::reference::run_city(cmd, opts).await,
        Commands::License(cmd) => cli::license::run(cmd, opts).await,
        Commands::Employee(cmd) => cli::employee::run(cmd, opts).await,
        Commands::Consultant(cmd) => cli::consultant::run(cmd, opts).await,
        Commands::Certificate(cmd) => cli::certificate::run(cmd, opts).await,
        Commands::Company(cmd) => cli::company::run(cmd, opts).await,
        Commands::Finance(cmd) => cli::finance::run(cmd, opts).await,
        Commands::News(cmd) => cli::news::run(cmd, opts).await,
        Commands::Category(cmd) => cli::reference::run_category(cmd, opts).await,
        Commands::Adv(cmd) => cli::advertisement::run(cmd, opts).await,
        Commands::Congress(cmd) => cli::congress::run(cmd, opts).await,
        Commands::Homepage(cmd) => cli::homepage::run(cmd, opts).await,
        Commands::Cache(cmd) => {
            let format = opts.format.unwrap_or_default();
            match cmd {
                cli::CacheCommands::Status => cli::cache::status(format),
                cli::CacheCommands::Clear => cli::cache::clear(format),
                cli::CacheCommands::Path => cli::cache::path(),
            }
        }
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
