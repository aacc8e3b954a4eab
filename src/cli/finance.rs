//! Finance ledger command implementations

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CommandContext, FinanceCommands};
use crate::client::RecordsApi;
use crate::client::models::{FinancePayload, FinanceRecord, LedgerBalance};
use crate::error::Result;
use crate::models::{BalanceDisplay, FinanceDisplay};
use crate::validate;

pub async fn run(cmd: FinanceCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        FinanceCommands::List { args, member } => list(opts, &args, member).await,
        FinanceCommands::Ledger { member_id } => ledger(opts, member_id).await,
        FinanceCommands::Get { id } => get(opts, id).await,
        FinanceCommands::Create {
            member,
            date,
            duguje,
            potrazuje,
            description,
        } => {
            let payload = FinancePayload {
                member_id: member,
                date: validate::date("date", &date)?,
                duguje,
                potrazuje,
                description,
            };
            create(opts, payload).await
        }
        FinanceCommands::Update {
            id,
            member,
            date,
            duguje,
            potrazuje,
            description,
        } => update(opts, id, member, date, duguje, potrazuje, description).await,
        FinanceCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs, member: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let records = ctx.client.list_finances().await?;

    let records: Vec<FinanceRecord> = match member {
        Some(member_id) => records
            .into_iter()
            .filter(|r| r.member_id == member_id)
            .collect(),
        None => records,
    };

    render_list::<_, FinanceDisplay>(&records, args, ctx.format)
}

/// One member's ledger plus the locally computed totals footer.
async fn ledger(opts: &GlobalOptions, member_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let records = ctx.client.member_ledger(member_id).await?;

    let rows: Vec<FinanceDisplay> = records.iter().map(FinanceDisplay::from).collect();
    handlers::print_rows(&rows, ctx.format)?;
    handlers::print_one(&BalanceDisplay::from(LedgerBalance::of(&records)), ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let record = ctx.client.get_finance(id).await?;
    handlers::print_one(&FinanceDisplay::from(&record), ctx.format)
}

async fn create(opts: &GlobalOptions, payload: FinancePayload) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let record = ctx.client.create_finance(&payload).await?;
    handlers::success(&format!(
        "Recorded ledger entry {} for member {}",
        record.id, record.member_id
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update(
    opts: &GlobalOptions,
    id: i64,
    member: Option<i64>,
    date: Option<String>,
    duguje: Option<f64>,
    potrazuje: Option<f64>,
    description: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.get_finance(id).await?;

    let date = match date {
        Some(raw) => validate::date("date", &raw)?,
        None => {
            let stored = current.date.as_deref().unwrap_or_default();
            validate::date("date", stored)?
        }
    };

    let payload = FinancePayload {
        member_id: member.unwrap_or(current.member_id),
        date,
        duguje: duguje.unwrap_or(current.duguje),
        potrazuje: potrazuje.unwrap_or(current.potrazuje),
        description: description.or(current.description),
    };

    let record = ctx.client.update_finance(id, &payload).await?;
    handlers::success(&format!("Updated ledger entry {}", record.id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("ledger entry {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_finance(id).await?;
    handlers::success(&format!("Deleted ledger entry {}", id));
    Ok(())
}
