//! Consultant command implementations

use std::path::Path;

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{
    CommandContext, ConsultantCommands, ConsultantContractCommands, ConsultantFileCommands,
};
use crate::client::StaffApi;
use crate::client::body::FilePart;
use crate::client::models::{ConsultantPayload, ContractPayload, Disposition};
use crate::error::Result;
use crate::models::{ConsultantDisplay, ContractDisplay};
use crate::validate;

pub async fn run(cmd: ConsultantCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        ConsultantCommands::List { args } => list(opts, &args).await,
        ConsultantCommands::Get { id } => get(opts, id).await,
        ConsultantCommands::Create {
            name,
            surname,
            jmbg,
            email,
            phone,
            date_of_birth,
            personal_id,
            contracts,
        } => {
            let payload = ConsultantPayload {
                name,
                surname,
                jmbg,
                email,
                phone,
                date_of_birth: date_of_birth
                    .as_deref()
                    .map(|raw| validate::date("date_of_birth", raw))
                    .transpose()?,
                personal_id: read_part(personal_id.as_deref())?,
                contracts: read_parts(&contracts)?,
                is_update: false,
            };
            create(opts, payload).await
        }
        ConsultantCommands::Update {
            id,
            name,
            surname,
            jmbg,
            email,
            phone,
            date_of_birth,
            personal_id,
            contracts,
        } => {
            update(
                opts,
                id,
                ConsultantOverlay {
                    name,
                    surname,
                    jmbg,
                    email,
                    phone,
                    date_of_birth,
                    personal_id,
                    contracts,
                },
            )
            .await
        }
        ConsultantCommands::Delete { id, yes } => delete(opts, id, yes).await,
        ConsultantCommands::File(file_cmd) => match file_cmd {
            ConsultantFileCommands::Get {
                id,
                disposition,
                output,
            } => file_get(opts, id, disposition, output.as_deref()).await,
        },
        ConsultantCommands::Contract(contract_cmd) => match contract_cmd {
            ConsultantContractCommands::Add { id, file } => contract_add(opts, id, &file).await,
            ConsultantContractCommands::Get {
                id,
                contract_id,
                disposition,
                output,
            } => contract_get(opts, id, contract_id, disposition, output.as_deref()).await,
            ConsultantContractCommands::Rm {
                id,
                contract_id,
                yes,
            } => contract_rm(opts, id, contract_id, yes).await,
        },
    }
}

/// Flags provided to `consultant update`; unset fields keep current values.
pub struct ConsultantOverlay {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub jmbg: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub personal_id: Option<String>,
    pub contracts: Vec<String>,
}

fn read_part(path: Option<&str>) -> Result<Option<FilePart>> {
    path.map(|p| FilePart::read(Path::new(p))).transpose()
}

fn read_parts(paths: &[String]) -> Result<Vec<FilePart>> {
    paths
        .iter()
        .map(|p| FilePart::read(Path::new(p)))
        .collect()
}

async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let consultants = ctx.client.list_consultants().await?;
    render_list::<_, ConsultantDisplay>(&consultants, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let consultant = ctx.client.get_consultant(id).await?;

    handlers::print_one(&ConsultantDisplay::from(&consultant), ctx.format)?;
    if !consultant.contracts.is_empty() {
        let contracts: Vec<ContractDisplay> = consultant
            .contracts
            .iter()
            .map(ContractDisplay::from)
            .collect();
        handlers::print_rows(&contracts, ctx.format)?;
    }
    Ok(())
}

async fn create(opts: &GlobalOptions, payload: ConsultantPayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let consultant = ctx.client.create_consultant(&payload).await?;
    handlers::success(&format!(
        "Engaged consultant {} ({})",
        consultant.id,
        consultant.full_name()
    ));
    Ok(())
}

async fn update(opts: &GlobalOptions, id: i64, overlay: ConsultantOverlay) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_consultant(id).await?;

    let date_of_birth = match overlay.date_of_birth {
        Some(raw) => Some(validate::date("date_of_birth", &raw)?),
        None => current
            .date_of_birth
            .as_deref()
            .map(|raw| validate::date("date_of_birth", raw))
            .transpose()?,
    };

    let payload = ConsultantPayload {
        name: overlay.name.unwrap_or(current.name),
        surname: overlay.surname.unwrap_or(current.surname),
        jmbg: overlay.jmbg.or(current.jmbg),
        email: overlay.email.or(current.email),
        phone: overlay.phone.or(current.phone),
        date_of_birth,
        personal_id: read_part(overlay.personal_id.as_deref())?,
        contracts: read_parts(&overlay.contracts)?,
        is_update: true,
    };
    payload.validate()?;

    let consultant = ctx.client.update_consultant(id, &payload).await?;
    handlers::success(&format!("Updated consultant {}", consultant.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("consultant {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_consultant(id).await?;
    handlers::success(&format!("Deleted consultant {}", id));
    Ok(())
}

async fn contract_add(opts: &GlobalOptions, id: i64, file: &str) -> Result<()> {
    let payload = ContractPayload {
        contract: FilePart::read(Path::new(file))?,
    };

    let ctx = CommandContext::new(opts)?;
    let consultant = ctx.client.add_consultant_contract(id, &payload).await?;
    handlers::success(&format!(
        "Attached contract to consultant {} ({} on file)",
        consultant.id,
        consultant.contracts.len()
    ));
    Ok(())
}

async fn file_get(
    opts: &GlobalOptions,
    id: i64,
    disposition: Disposition,
    output: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let consultant = ctx.client.get_consultant(id).await?;
    let target = handlers::blob_target(output, consultant.personal_id.as_deref())?;

    let bytes = ctx.client.fetch_consultant_personal_id(id, disposition).await?;
    handlers::write_blob(&bytes, &target)
}

async fn contract_get(
    opts: &GlobalOptions,
    id: i64,
    contract_id: i64,
    disposition: Disposition,
    output: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let consultant = ctx.client.get_consultant(id).await?;

    let stored = consultant
        .contracts
        .iter()
        .find(|c| c.id == contract_id)
        .and_then(|c| c.file.as_deref());
    let target = handlers::blob_target(output, stored)?;

    let bytes = ctx
        .client
        .fetch_consultant_contract(id, contract_id, disposition)
        .await?;
    handlers::write_blob(&bytes, &target)
}

async fn contract_rm(opts: &GlobalOptions, id: i64, contract_id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(
        &format!("contract {} of consultant {}", contract_id, id),
        yes,
    )? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.remove_consultant_contract(id, contract_id).await?;
    handlers::success(&format!("Removed contract {}", contract_id));
    Ok(())
}
