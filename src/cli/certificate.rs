//! Certificate command implementations

use std::path::Path;

use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::handlers::{self, list::render_list};
use crate::cli::{CertificateCommands, CertificateFileCommands, CommandContext};
use crate::client::RecordsApi;
use crate::client::body::FilePart;
use crate::client::models::{
    Certificate, CertificateFilePayload, CertificatePayload, Disposition, FileUpload,
};
use crate::error::{Error, Result};
use crate::models::{CertificateDisplay, CertificateFileDisplay};

pub async fn run(cmd: CertificateCommands, opts: &GlobalOptions) -> Result<()> {
    match cmd {
        CertificateCommands::List { args, member } => list(opts, &args, member).await,
        CertificateCommands::Get { id } => get(opts, id).await,
        CertificateCommands::Create {
            member,
            files,
            titles,
        } => create(opts, member, &files, titles).await,
        CertificateCommands::File(file_cmd) => match file_cmd {
            CertificateFileCommands::Add { id, file, title } => {
                file_add(opts, id, &file, title).await
            }
            CertificateFileCommands::Get {
                id,
                file_id,
                disposition,
                output,
            } => file_get(opts, id, file_id, disposition, output.as_deref()).await,
            CertificateFileCommands::Rm { id, file_id, yes } => {
                file_rm(opts, id, file_id, yes).await
            }
        },
        CertificateCommands::Delete { id, yes } => delete(opts, id, yes).await,
    }
}

async fn list(opts: &GlobalOptions, args: &ListArgs, member: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let certificates = ctx.client.list_certificates().await?;

    let certificates: Vec<Certificate> = match member {
        Some(member_id) => certificates
            .into_iter()
            .filter(|c| c.user_id == member_id)
            .collect(),
        None => certificates,
    };

    render_list::<_, CertificateDisplay>(&certificates, args, ctx.format)
}

async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let certificate = ctx.client.get_certificate(id).await?;

    handlers::print_one(&CertificateDisplay::from(&certificate), ctx.format)?;
    if !certificate.files.is_empty() {
        let files: Vec<CertificateFileDisplay> = certificate
            .files
            .iter()
            .map(CertificateFileDisplay::from)
            .collect();
        handlers::print_rows(&files, ctx.format)?;
    }
    Ok(())
}

async fn create(
    opts: &GlobalOptions,
    member: i64,
    files: &[String],
    titles: Vec<String>,
) -> Result<()> {
    if files.len() != titles.len() {
        return Err(Error::Other(format!(
            "got {} files but {} titles, pass one --title per --file",
            files.len(),
            titles.len()
        )));
    }

    let uploads: Vec<FileUpload> = files
        .iter()
        .zip(titles)
        .map(|(path, title)| {
            Ok(FileUpload {
                file: FilePart::read(Path::new(path))?,
                title,
            })
        })
        .collect::<Result<_>>()?;

    let payload = CertificatePayload {
        user_id: member,
        uploads,
    };
    payload.validate()?;

    let ctx = CommandContext::new(opts)?;
    let certificate = ctx.client.create_certificate(&payload).await?;
    handlers::success(&format!(
        "Created certificate {} with {} file(s)",
        certificate.id,
        certificate.files.len()
    ));
    Ok(())
}

async fn file_add(opts: &GlobalOptions, id: i64, file: &str, title: String) -> Result<()> {
    let payload = CertificateFilePayload {
        upload: FileUpload {
            file: FilePart::read(Path::new(file))?,
            title,
        },
    };

    let ctx = CommandContext::new(opts)?;
    let certificate = ctx.client.add_certificate_file(id, &payload).await?;
    handlers::success(&format!(
        "Attached file to certificate {} ({} on file)",
        certificate.id,
        certificate.files.len()
    ));
    Ok(())
}

async fn file_get(
    opts: &GlobalOptions,
    id: i64,
    file_id: i64,
    disposition: Disposition,
    output: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let certificate = ctx.client.get_certificate(id).await?;

    let stored = certificate
        .files
        .iter()
        .find(|f| f.id == file_id)
        .and_then(|f| f.file.as_deref());
    let target = handlers::blob_target(output, stored)?;

    let bytes = ctx
        .client
        .fetch_certificate_file(id, file_id, disposition)
        .await?;
    handlers::write_blob(&bytes, &target)
}

async fn file_rm(opts: &GlobalOptions, id: i64, file_id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("file {} of certificate {}", file_id, id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.remove_certificate_file(id, file_id).await?;
    handlers::success(&format!("Removed file {}", file_id));
    Ok(())
}

async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    if !handlers::confirm_delete(&format!("certificate {}", id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_certificate(id).await?;
    handlers::success(&format!("Deleted certificate {}", id));
    Ok(())
}
