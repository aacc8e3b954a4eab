//! Homepage command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers;
use crate::cli::{CommandContext, HomepageCommands};
use crate::client::ContentApi;
use crate::client::models::HomePagePayload;
use crate::error::Result;
use crate::models::HomePageDisplay;

pub async fn run(cmd: HomepageCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        HomepageCommands::Show => show(opts).await,
        HomepageCommands::Update { title, text } => update(opts, title, text).await,
    }
}

async fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = ctx.client.get_homepage().await?;
    handlers::print_one(&HomePageDisplay::from(&page), ctx.format)
}

async fn update(opts: &GlobalOptions, title: Option<String>, text: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_homepage().await?;

    let payload = HomePagePayload {
        title: title.or(current.title).unwrap_or_default(),
        text: text.or(current.text).unwrap_or_default(),
    };
    payload.validate()?;

    let page = ctx.client.update_homepage(current.id, &payload).await?;
    handlers::success(&format!("Updated homepage {}", page.id));
    Ok(())
}
