//! Advertisement command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{AdvCommands, CommandContext};
use crate::client::ContentApi;
use crate::client::models::AdvertisementPayload;
use crate::error::Result;
use crate::models::AdvertisementDisplay;

pub async fn run(cmd: AdvCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        AdvCommands::List { args } => list(opts, &args).await,
        AdvCommands::Get { id } => get(opts, id).await,
        AdvCommands::Create { title, text, phone } => {
            let payload = AdvertisementPayload {
                title,
                full_text: text,
                phone,
            };
            create(opts, payload).await
        }
        AdvCommands::Update {
            id,
            title,
            text,
            phone,
        } => update(opts, id, title, text, phone).await,
        AdvCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let ads = ctx.client.list_advertisements().await?;
    render_list::<_, AdvertisementDisplay>(&ads, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let ad = ctx.client.get_advertisement(id).await?;
    handlers::print_one(&AdvertisementDisplay::from(&ad), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: AdvertisementPayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let ad = ctx.client.create_advertisement(&payload).await?;
    handlers::success(&format!("Published advertisement {} ({})", ad.id, ad.title));
    Ok(())
}

async fn update(
    opts: &GlobalOptions,
    id: i64,
    title: Option<String>,
    text: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_advertisement(id).await?;

    let payload = AdvertisementPayload {
        title: title.unwrap_or(current.title),
        full_text: text.or(current.full_text).unwrap_or_default(),
        phone: phone.or(current.phone).unwrap_or_default(),
    };
    payload.validate()?;

    let ad = ctx.client.update_advertisement(id, &payload).await?;
    handlers::success(&format!("Updated advertisement {}", ad.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("advertisement {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_advertisement(id).await?;
    handlers::success(&format!("Deleted advertisement {}", id));
    Ok(())
}
