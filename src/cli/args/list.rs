//! List command arguments

use clap::Args;

use super::SortDir;

/// Shared arguments for list commands.
///
/// The whole pipeline is client-side: the full list is fetched (through
/// the cache), then searched, sorted, and paginated in memory.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive substring search over the entity's text columns
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Column to sort by (as shown in JSON output, e.g. "surname")
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, hide_possible_values = true)]
    pub sort_dir: Option<SortDir>,

    /// Maximum results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Page number (0-indexed, requires --limit)
    #[arg(long, short = 'p', requires = "limit")]
    pub page: Option<usize>,
}
