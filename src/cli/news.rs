//! News command implementations

use std::path::Path;

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, NewsCommands};
use crate::client::ContentApi;
use crate::client::body::FilePart;
use crate::client::models::{NewsPayload, NewsUpdatePayload};
use crate::error::Result;
use crate::models::NewsDisplay;
use crate::validate;

pub async fn run(cmd: NewsCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        NewsCommands::List { args, category } => list(opts, &args, category).await,
        NewsCommands::Get { id } => get(opts, id).await,
        NewsCommands::Create {
            title,
            category,
            category_name,
            date,
            content,
            full_text,
            image,
            image_title,
        } => {
            let payload = NewsPayload {
                title,
                category_id: category,
                category_name,
                date: date
                    .as_deref()
                    .map(|raw| validate::date("date", raw))
                    .transpose()?,
                content,
                full_text,
                image: image
                    .as_deref()
                    .map(|p| FilePart::read(Path::new(p)))
                    .transpose()?,
                image_title,
            };
            create(opts, payload).await
        }
        NewsCommands::Update {
            id,
            title,
            category,
            date,
            content,
            full_text,
        } => update(opts, id, title, category, date, content, full_text).await,
        NewsCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs, category: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // Category narrowing has its own backend endpoint, use it
    let items = match category {
        Some(category_id) => ctx.client.news_for_category(category_id).await?,
        None => ctx.client.list_news().await?,
    };

    render_list::<_, NewsDisplay>(&items, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let item = ctx.client.get_news(id).await?;
    handlers::print_one(&NewsDisplay::from(&item), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: NewsPayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let item = ctx.client.create_news(&payload).await?;
    handlers::success(&format!("Published article {} ({})", item.id, item.title));
    Ok(())
}

async fn update(
    opts: &GlobalOptions,
    id: i64,
    title: Option<String>,
    category: Option<i64>,
    date: Option<String>,
    content: Option<String>,
    full_text: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_news(id).await?;

    let date = match date {
        Some(raw) => Some(validate::date("date", &raw)?),
        None => current
            .date
            .as_deref()
            .map(|raw| validate::date("date", raw))
            .transpose()?,
    };

    let payload = NewsUpdatePayload {
        title: title.unwrap_or(current.title),
        category_id: category
            .or(current.category_id)
            .unwrap_or_default(),
        date,
        content: content.or(current.content),
        full_text: full_text.or(current.full_text),
    };
    payload.validate()?;

    let item = ctx.client.update_news(id, &payload).await?;
    handlers::success(&format!("Updated article {}", item.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("article {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_news(id).await?;
    handlers::success(&format!("Deleted article {}", id));
    Ok(())
}
