//! License command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, LicenseCommands};
use crate::client::DirectoryApi;
use crate::client::models::{License, LicensePayload};
use crate::error::Result;
use crate::models::LicenseDisplay;
use crate::validate;

pub async fn run(cmd: LicenseCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        LicenseCommands::List { args, member } => list(opts, &args, member).await,
        LicenseCommands::Get { id } => get(opts, id).await,
        LicenseCommands::Create {
            member,
            license_type,
            number,
            expires,
            kind,
        } => {
            let payload = LicensePayload {
                member_id: member,
                license_type,
                license_number: number,
                expires_at: expires
                    .as_deref()
                    .map(|raw| validate::date("expires", raw))
                    .transpose()?,
                kind,
            };
            create(opts, payload).await
        }
        LicenseCommands::Update {
            id,
            member,
            license_type,
            number,
            expires,
            kind,
        } => update(opts, id, member, license_type, number, expires, kind).await,
        LicenseCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs, member: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let licenses = ctx.client.list_licenses().await?;

    let licenses: Vec<License> = match member {
        Some(member_id) => licenses
            .into_iter()
            .filter(|l| l.member_id == member_id)
            .collect(),
        None => licenses,
    };

    render_list::<_, LicenseDisplay>(&licenses, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let license = ctx.client.get_license(id).await?;
    handlers::print_one(&LicenseDisplay::from(&license), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: LicensePayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let license = ctx.client.create_license(&payload).await?;
    handlers::success(&format!(
        "Issued {} license {} to member {}",
        license.license_type, license.id, license.member_id
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update(
    opts: &GlobalOptions,
    id: i64,
    member: Option<i64>,
    license_type: Option<String>,
    number: Option<String>,
    expires: Option<String>,
    kind: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_license(id).await?;

    let expires_at = match expires {
        Some(raw) => Some(validate::date("expires", &raw)?),
        None => current
            .expires_at
            .as_deref()
            .map(|raw| validate::date("expires", raw))
            .transpose()?,
    };

    let payload = LicensePayload {
        member_id: member.unwrap_or(current.member_id),
        license_type: license_type.unwrap_or(current.license_type),
        license_number: number.or(current.license_number),
        expires_at,
        kind: kind.or(current.kind),
    };
    payload.validate()?;

    let license = ctx.client.update_license(id, &payload).await?;
    handlers::success(&format!("Updated license {}", license.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("license {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_license(id).await?;
    handlers::success(&format!("Deleted license {}", id));
    Ok(())
}
