//! Employee command implementations

use std::path::Path;

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{
    CommandContext, EmployeeCommands, EmployeeContractCommands, EmployeeFileCommands,
};
use crate::client::StaffApi;
use crate::client::body::FilePart;
use crate::client::models::{Disposition, EmployeeFileField, EmployeePayload};
use crate::error::Result;
use crate::models::{ContractDisplay, EmployeeDisplay};
use crate::validate;

pub async fn run(cmd: EmployeeCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        EmployeeCommands::List { args } => list(opts, &args).await,
        EmployeeCommands::Get { id } => get(opts, id).await,
        EmployeeCommands::Create {
            name,
            surname,
            jmbg,
            email,
            phone,
            address,
            position,
            date_of_birth,
            personal_id,
            contract,
        } => {
            let payload = EmployeePayload {
                name,
                surname,
                jmbg,
                email,
                phone,
                address,
                position,
                date_of_birth: date_of_birth
                    .as_deref()
                    .map(|raw| validate::date("date_of_birth", raw))
                    .transpose()?,
                personal_id: read_part(personal_id.as_deref())?,
                contract: read_part(contract.as_deref())?,
                is_update: false,
            };
            create(opts, payload).await
        }
        EmployeeCommands::Update {
            id,
            name,
            surname,
            jmbg,
            email,
            phone,
            address,
            position,
            date_of_birth,
            personal_id,
            contract,
        } => {
            update(
                opts,
                id,
                EmployeeOverlay {
                    name,
                    surname,
                    jmbg,
                    email,
                    phone,
                    address,
                    position,
                    date_of_birth,
                    personal_id,
                    contract,
                },
            )
            .await
        }
        EmployeeCommands::Delete { id, yes } => delete(opts, id, yes).await,
        EmployeeCommands::File(file_cmd) => match file_cmd {
            EmployeeFileCommands::Get {
                id,
                field,
                disposition,
                output,
            } => file_get(opts, id, field, disposition, output.as_deref()).await,
        },
        EmployeeCommands::Contract(contract_cmd) => match contract_cmd {
            EmployeeContractCommands::Get {
                id,
                contract_id,
                disposition,
                output,
            } => contract_get(opts, id, contract_id, disposition, output.as_deref()).await,
            EmployeeContractCommands::Rm {
                id,
                contract_id,
                yes,
            } => contract_rm(opts, id, contract_id, yes).await,
        },
    }
}

/// Flags provided to `employee update`; unset fields keep current values.
pub struct EmployeeOverlay {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub jmbg: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
    pub date_of_birth: Option<String>,
    pub personal_id: Option<String>,
    pub contract: Option<String>,
}

fn read_part(path: Option<&str>) -> Result<Option<FilePart>> {
    path.map(|p| FilePart::read(Path::new(p))).transpose()
}

async fn list(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let employees = ctx.client.list_employees().await?;
    render_list::<_, EmployeeDisplay>(&employees, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let employee = ctx.client.get_employee(id).await?;

    handlers::print_one(&EmployeeDisplay::from(&employee), ctx.format)?;
    if !employee.contracts.is_empty() {
        let contracts: Vec<ContractDisplay> =
            employee.contracts.iter().map(ContractDisplay::from).collect();
        handlers::print_rows(&contracts, ctx.format)?;
    }
    Ok(())
}

async fn create(opts: &GlobalOptions, payload: EmployeePayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let employee = ctx.client.create_employee(&payload).await?;
    handlers::success(&format!(
        "Hired employee {} ({})",
        employee.id,
        employee.full_name()
    ));
    Ok(())
}

async fn update(opts: &GlobalOptions, id: i64, overlay: EmployeeOverlay) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_employee(id).await?;

    let date_of_birth = match overlay.date_of_birth {
        Some(raw) => Some(validate::date("date_of_birth", &raw)?),
        None => current
            .date_of_birth
            .as_deref()
            .map(|raw| validate::date("date_of_birth", raw))
            .transpose()?,
    };

    let payload = EmployeePayload {
        name: overlay.name.unwrap_or(current.name),
        surname: overlay.surname.unwrap_or(current.surname),
        jmbg: overlay.jmbg.or(current.jmbg),
        email: overlay.email.or(current.email),
        phone: overlay.phone.or(current.phone),
        address: overlay.address.or(current.address),
        position: overlay.position.or(current.position),
        date_of_birth,
        personal_id: read_part(overlay.personal_id.as_deref())?,
        contract: read_part(overlay.contract.as_deref())?,
        is_update: true,
    };
    payload.validate()?;

    let employee = ctx.client.update_employee(id, &payload).await?;
    handlers::success(&format!("Updated employee {}", employee.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("employee {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_employee(id).await?;
    handlers::success(&format!("Deleted employee {}", id));
    Ok(())
}

async fn file_get(
    opts: &GlobalOptions,
    id: i64,
    field: EmployeeFileField,
    disposition: Disposition,
    output: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let employee = ctx.client.get_employee(id).await?;

    let stored = match field {
        EmployeeFileField::PersonalId => employee.personal_id.as_deref(),
        EmployeeFileField::Contract => {
            employee.contracts.first().and_then(|c| c.file.as_deref())
        }
    };
    let target = handlers::blob_target(output, stored)?;

    let bytes = ctx.client.fetch_employee_file(id, field, disposition).await?;
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
    let employee = ctx.client.get_employee(id).await?;

    let stored = employee
        .contracts
        .iter()
        .find(|c| c.id == contract_id)
        .and_then(|c| c.file.as_deref());
    let target = handlers::blob_target(output, stored)?;

    let bytes = ctx
        .client
        .fetch_employee_contract(id, contract_id, disposition)
        .await?;
    handlers::write_blob(&bytes, &target)
}

async fn contract_rm(opts: &GlobalOptions, id: i64, contract_id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("contract {} of employee {}", contract_id, id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.remove_employee_contract(id, contract_id).await?;
    handlers::success(&format!("Removed contract {}", contract_id));
    Ok(())
}
