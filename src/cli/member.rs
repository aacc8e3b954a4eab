//! Member command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, MemberCommands};
use crate::client::DirectoryApi;
use crate::client::models::{Member, MemberPayload};
use crate::error::{Result, ValidationError};
use crate::models::MemberDisplay;
use crate::validate;

pub async fn run(cmd: MemberCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        MemberCommands::List { args, city } => list(opts, &args, city).await,
        MemberCommands::Get { id } => get(opts, id).await,
        MemberCommands::Create {
            name,
            surname,
            sex,
            date_of_birth,
            speciality,
            city,
            company,
            fax,
            email,
            phone,
        } => {
            let payload = MemberPayload {
                name,
                surname,
                sex,
                date_of_birth: validate::date("date_of_birth", &date_of_birth)?,
                speciality,
                city_id: city,
                company_id: company,
                fax_nbr: fax,
                email,
                phone,
            };
            create(opts, payload).await
        }
        MemberCommands::Update {
            id,
            name,
            surname,
            sex,
            date_of_birth,
            speciality,
            city,
            company,
            fax,
            email,
            phone,
        } => {
            update(
                opts,
                id,
                MemberOverlay {
                    name,
                    surname,
                    sex,
                    date_of_birth,
                    speciality,
                    city,
                    company,
                    fax,
                    email,
                    phone,
                },
            )
            .await
        }
        MemberCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

/// Flags provided to `member update`; unset fields keep current values.
pub struct MemberOverlay {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<String>,
    pub speciality: Option<String>,
    pub city: Option<i64>,
    pub company: Option<i64>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

async fn list(opts: &GlobalOptions, args: &ListArgs, city: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let members = ctx.client.list_members().await?;

    let members: Vec<Member> = match city {
        Some(city_id) => members
            .into_iter()
            .filter(|m| m.city_id == Some(city_id))
            .collect(),
        None => members,
    };

    render_list::<_, MemberDisplay>(&members, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let member = ctx.client.get_member(id).await?;
    handlers::print_one(&MemberDisplay::from(&member), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: MemberPayload) -> Result<()> {
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let member = ctx.client.create_member(&payload).await?;
    handlers::success(&format!(
        "Registered member {} ({} {})",
        member.id, member.name, member.surname
    ));
    Ok(())
}

async fn update(opts: &GlobalOptions, id: i64, overlay: MemberOverlay) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_member(id).await?;

    let date_of_birth = match overlay.date_of_birth {
        Some(raw) => validate::date("date_of_birth", &raw)?,
        None => {
            let stored = current
                .date_of_birth
                .as_deref()
                .ok_or(ValidationError::Required("date_of_birth"))?;
            validate::date("date_of_birth", stored)?
        }
    };

    let payload = MemberPayload {
        name: overlay.name.unwrap_or(current.name),
        surname: overlay.surname.unwrap_or(current.surname),
        sex: overlay.sex.or(current.sex).unwrap_or_default(),
        date_of_birth,
        speciality: overlay.speciality.or(current.speciality).unwrap_or_default(),
        city_id: overlay
            .city
            .or(current.city_id)
            .ok_or(ValidationError::Required("city"))?,
        company_id: overlay.company.or(current.company_id),
        fax_nbr: overlay.fax.or(current.fax_nbr),
        email: overlay.email.or(current.email).unwrap_or_default(),
        phone: overlay.phone.or(current.phone).unwrap_or_default(),
    };
    payload.validate()?;

    let member = ctx.client.update_member(id, &payload).await?;
    handlers::success(&format!("Updated member {}", member.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("member {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_member(id).await?;
    handlers::success(&format!("Deleted member {}", id));
    Ok(())
}
