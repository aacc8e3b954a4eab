//! Company command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, CompanyCommands};
use crate::client::DirectoryApi;
use crate::client::models::{Company, CompanyPayload};
use crate::error::Result;
use crate::models::CompanyDisplay;

pub async fn run(cmd: CompanyCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        CompanyCommands::List { args, city } => list(opts, &args, city).await,
        CompanyCommands::Get { id } => get(opts, id).await,
        CompanyCommands::Create {
            name,
            city,
            address,
            phone,
            status,
            owner,
        } => {
            let payload = CompanyPayload {
                name,
                city_id: city,
                address,
                phone,
                status,
                user_id: owner,
            };
            create(opts, payload).await
        }
        CompanyCommands::Update {
            id,
            name,
            city,
            address,
            phone,
            status,
            owner,
        } => update(opts, id, name, city, address, phone, status, owner).await,
        CompanyCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs, city: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let companies = ctx.client.list_companies().await?;

    let companies: Vec<Company> = match city {
        Some(city_id) => companies
            .into_iter()
            .filter(|c| c.city_id == Some(city_id))
            .collect(),
        None => companies,
    };

    render_list::<_, CompanyDisplay>(&companies, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let company = ctx.client.get_company(id).await?;
    handlers::print_one(&CompanyDisplay::from(&company), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: CompanyPayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let company = ctx.client.create_company(&payload).await?;
    handlers::success(&format!("Registered company {} ({})", company.id, company.name));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update(
    opts: &GlobalOptions,
    id: i64,
    name: Option<String>,
    city: Option<i64>,
    address: Option<String>,
    phone: Option<String>,
    status: Option<String>,
    owner: Option<i64>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_company(id).await?;

    let payload = CompanyPayload {
        name: name.unwrap_or(current.name),
        city_id: city.or(current.city_id),
        address: address.or(current.address),
        phone: phone.or(current.phone),
        status: status.or(current.status),
        user_id: owner.or(current.user_id),
    };
    payload.validate()?;

    let company = ctx.client.update_company(id, &payload).await?;
    handlers::success(&format!("Updated company {}", company.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("company {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_company(id).await?;
    handlers::success(&format!("Deleted company {}", id));
    Ok(())
}
