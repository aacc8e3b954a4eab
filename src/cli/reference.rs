//! Read-only reference list commands (cities, news categories)

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::list::render_list;
use crate::cli::{CategoryCommands, CityCommands, CommandContext};
use crate::client::{ContentApi, DirectoryApi};
use crate::error::Result;
use crate::models::{CategoryDisplay, CityDisplay};

pub async fn run_city(cmd: CityCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        CityCommands::List { args } => {
            let ctx = CommandContext::new(opts)?;
            let cities = ctx.client.list_cities().await?;
            render_list::<_, CityDisplay>(&cities, &args, ctx.format)
        }
    }
}

pub async fn run_category(cmd: CategoryCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        CategoryCommands::List { args } => {
            let ctx = CommandContext::new(opts)?;
            let categories = ctx.client.list_categories().await?;
            render_list::<_, CategoryDisplay>(&categories, &args, ctx.format)
        }
    }
}
