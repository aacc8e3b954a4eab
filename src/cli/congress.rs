//! Congress registration command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, CongressCommands};
use crate::client::ContentApi;
use crate::error::{ApiError, Result};
use crate::models::CongressDisplay;

pub async fn run(cmd: CongressCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        CongressCommands::List { args } => list(opts, &args).await,
        CongressCommands::Paid { id } => set_payment(opts, id, true).await,
        CongressCommands::Unpaid { id } => set_payment(opts, id, false).await,
        CongressCommands::Paper { id } => paper(opts, id).await,
        CongressCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let participants = ctx.client.list_congress_participants().await?;
    render_list::<_, CongressDisplay>(&participants, args, ctx.format)
}

async fn set_payment(opts: &GlobalOptions, id: i64, paid: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.set_congress_payment(id, paid).await?;
    handlers::success(&format!(
        "Marked registration {} as {}",
        id,
        if paid { "paid" } else { "unpaid" }
    ));
    Ok(())
}

/// Print the static URL of the uploaded congress paper.
async fn paper(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let participants = ctx.client.list_congress_participants().await?;

    let participant = participants
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("congress registration {}", id)))?;

    match participant.file {
        Some(path) => {
            println!("{}/{}", ctx.config.api_host(), path.trim_start_matches('/'));
            Ok(())
        }
        None => Err(ApiError::NotFound(format!(
            "registration {} has no uploaded paper",
            id
        ))
        .into()),
    }
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("congress registration {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_congress_participant(id).await?;
    handlers::success(&format!("Deleted congress registration {}", id));
    Ok(())
}
