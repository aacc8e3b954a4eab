//! Shared command handler helpers

pub mod list;

use colored::Colorize;

use crate::error::Result;

pub use crate::output::{print_one, print_rows};

/// Print a one-line success notice.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Resolve where a downloaded blob should land.
///
/// `--output` wins; otherwise the attachment's stored file name is
/// used. With neither, the caller has to pass `--output`.
pub fn blob_target(output: Option<&str>, stored: Option<&str>) -> Result<std::path::PathBuf> {
    if let Some(path) = output {
        return Ok(std::path::PathBuf::from(path));
    }
    stored
        .and_then(|s| std::path::Path::new(s).file_name())
        .map(std::path::PathBuf::from)
        .ok_or_else(|| {
            crate::error::Error::Other(
                "the record has no stored file name, pass --output PATH".to_string(),
            )
        })
}

/// Write fetched blob bytes to disk and print a notice.
pub fn write_blob(bytes: &[u8], target: &std::path::Path) -> Result<()> {
    std::fs::write(target, bytes)?;
    success(&format!("Wrote {} bytes to {}", bytes.len(), target.display()));
    Ok(())
}

/// Ask for delete confirmation unless `--yes` was given.
///
/// Returns false (and prints a notice) when the operator cancels;
/// the caller must then skip the DELETE call. Without a terminal the
/// prompt cannot be answered, so that also counts as a cancel.
pub fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !dialoguer::console::Term::stderr().is_term() {
        println!("Canceled, nothing deleted. Pass --yes to delete without a prompt.");
        return Ok(false);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Canceled, nothing deleted.");
    }
    Ok(confirmed)
}
