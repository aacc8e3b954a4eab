//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod advertisement;
pub mod args;
pub mod cache;
pub mod certificate;
pub mod company;
pub mod completions;
pub mod congress;
pub mod consultant;
pub mod context;
pub mod employee;
pub mod finance;
pub mod handlers;
pub mod homepage;
pub mod license;
pub mod member;
pub mod news;
pub mod reference;
pub mod session;

pub use args::{GlobalOptions, ListArgs, OutputFormat, SortDir};
pub use context::CommandContext;

use crate::client::models::{Disposition, EmployeeFileField};

/// Komora CLI - admin companion for the dental chamber registry
#[derive(Parser, Debug)]
#[command(name = "komora")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "KOMORA_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "KOMORA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override registry API host
    #[arg(long, global = true, env = "KOMORA_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Bypass cache, fetch fresh data from the API
    #[arg(long, global = true, env = "KOMORA_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "KOMORA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the registry and store the session token
    Login {
        /// Administrator email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Drop the stored session token
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage chamber members
    #[command(subcommand)]
    Member(MemberCommands),

    /// List cities (read-only reference)
    #[command(subcommand)]
    City(CityCommands),

    /// Manage work licenses
    #[command(subcommand)]
    License(LicenseCommands),

    /// Manage chamber employees
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Manage external consultants
    #[command(subcommand)]
    Consultant(ConsultantCommands),

    /// Manage member certificates
    #[command(subcommand)]
    Certificate(CertificateCommands),

    /// Manage dental companies
    #[command(subcommand)]
    Company(CompanyCommands),

    /// Manage membership-fee ledgers
    #[command(subcommand)]
    Finance(FinanceCommands),

    /// Manage news articles
    #[command(subcommand)]
    News(NewsCommands),

    /// List news categories (read-only reference)
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Manage classified advertisements
    #[command(subcommand)]
    Adv(AdvCommands),

    /// Manage congress registrations
    #[command(subcommand)]
    Congress(CongressCommands),

    /// Manage the public homepage content
    #[command(subcommand)]
    Homepage(HomepageCommands),

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   komora completion bash > /etc/bash_completion.d/komora
  zsh:    komora completion zsh > \"${fpath[1]}/_komora\"
  fish:   komora completion fish > ~/.config/fish/completions/komora.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Member management subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List members
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only members registered in this city
        #[arg(long)]
        city: Option<i64>,
    },

    /// Show one member
    Get {
        /// Member id
        id: i64,
    },

    /// Register a new member
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        /// Sex as recorded by the registry
        #[arg(long)]
        sex: String,
        /// Date of birth (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date_of_birth: String,
        #[arg(long)]
        speciality: String,
        /// City id (see `komora city list`)
        #[arg(long)]
        city: i64,
        /// Primary company id
        #[arg(long)]
        company: Option<i64>,
        /// Facsimile stamp number
        #[arg(long)]
        fax: Option<String>,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Update a member (unset flags keep their current values)
    Update {
        /// Member id
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        sex: Option<String>,
        /// Date of birth (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        speciality: Option<String>,
        #[arg(long)]
        city: Option<i64>,
        #[arg(long)]
        company: Option<i64>,
        #[arg(long)]
        fax: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a member
    #[command(visible_alias = "rm")]
    Delete {
        /// Member id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// City reference subcommands
#[derive(Subcommand, Debug)]
pub enum CityCommands {
    /// List cities
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

/// License management subcommands
#[derive(Subcommand, Debug)]
pub enum LicenseCommands {
    /// List licenses
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only licenses held by this member
        #[arg(long)]
        member: Option<i64>,
    },

    /// Show one license
    Get {
        /// License id
        id: i64,
    },

    /// Issue a license to a member
    Create {
        /// Holder member id
        #[arg(long)]
        member: i64,
        /// License type (permanent, temporary)
        #[arg(long = "type")]
        license_type: String,
        /// License number
        #[arg(long)]
        number: Option<String>,
        /// Expiry date for temporary licenses (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        expires: Option<String>,
        /// License kind label
        #[arg(long)]
        kind: Option<String>,
    },

    /// Update a license (unset flags keep their current values)
    Update {
        /// License id
        id: i64,
        #[arg(long)]
        member: Option<i64>,
        #[arg(long = "type")]
        license_type: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        expires: Option<String>,
        #[arg(long)]
        kind: Option<String>,
    },

    /// Delete a license
    #[command(visible_alias = "rm")]
    Delete {
        /// License id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Employee management subcommands
#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List employees
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show one employee with contracts
    Get {
        /// Employee id
        id: i64,
    },

    /// Hire a new employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        /// National id number (13 digits)
        #[arg(long)]
        jmbg: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        position: Option<String>,
        /// Date of birth (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date_of_birth: Option<String>,
        /// Personal id scan (PDF/JPEG/PNG)
        #[arg(long, value_name = "PATH")]
        personal_id: Option<String>,
        /// Work contract scan (PDF/JPEG/PNG)
        #[arg(long, value_name = "PATH")]
        contract: Option<String>,
    },

    /// Update an employee (unset flags keep their current values)
    Update {
        /// Employee id
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        jmbg: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        /// Replace the personal id scan
        #[arg(long, value_name = "PATH")]
        personal_id: Option<String>,
        /// Attach a new contract scan
        #[arg(long, value_name = "PATH")]
        contract: Option<String>,
    },

    /// Delete an employee
    #[command(visible_alias = "rm")]
    Delete {
        /// Employee id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Download employee file attachments
    #[command(subcommand)]
    File(EmployeeFileCommands),

    /// Manage employee contract attachments
    #[command(subcommand)]
    Contract(EmployeeContractCommands),
}

/// Employee file subcommands
#[derive(Subcommand, Debug)]
pub enum EmployeeFileCommands {
    /// Download the personal id or contract scan
    Get {
        /// Employee id
        id: i64,
        /// Which file slot to fetch
        #[arg(value_enum)]
        field: EmployeeFileField,
        /// Content disposition requested from the backend
        #[arg(long, value_enum, default_value = "inline")]
        disposition: Disposition,
        /// Write to this path (defaults to the stored file name)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },
}

/// Employee contract subcommands
#[derive(Subcommand, Debug)]
pub enum EmployeeContractCommands {
    /// Download one contract scan
    Get {
        /// Employee id
        id: i64,
        /// Contract id
        contract_id: i64,
        #[arg(long, value_enum, default_value = "inline")]
        disposition: Disposition,
        /// Write to this path (defaults to the stored file name)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Remove one contract attachment
    Rm {
        /// Employee id
        id: i64,
        /// Contract id
        contract_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Consultant management subcommands
#[derive(Subcommand, Debug)]
pub enum ConsultantCommands {
    /// List consultants
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show one consultant with contracts
    Get {
        /// Consultant id
        id: i64,
    },

    /// Engage a new consultant
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        /// National id number (13 digits)
        #[arg(long)]
        jmbg: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Date of birth (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date_of_birth: Option<String>,
        /// Personal id scan (PDF/JPEG/PNG)
        #[arg(long, value_name = "PATH")]
        personal_id: Option<String>,
        /// Contract scans, repeatable (PDF/JPEG/PNG)
        #[arg(long = "contract", value_name = "PATH")]
        contracts: Vec<String>,
    },

    /// Update a consultant (unset flags keep their current values)
    Update {
        /// Consultant id
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        jmbg: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        /// Replace the personal id scan
        #[arg(long, value_name = "PATH")]
        personal_id: Option<String>,
        /// Attach new contract scans, repeatable
        #[arg(long = "contract", value_name = "PATH")]
        contracts: Vec<String>,
    },

    /// Delete a consultant
    #[command(visible_alias = "rm")]
    Delete {
        /// Consultant id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Download the personal id scan
    #[command(subcommand)]
    File(ConsultantFileCommands),

    /// Manage consultant contract attachments
    #[command(subcommand)]
    Contract(ConsultantContractCommands),
}

/// Consultant file subcommands
#[derive(Subcommand, Debug)]
pub enum ConsultantFileCommands {
    /// Download the personal id scan
    Get {
        /// Consultant id
        id: i64,
        #[arg(long, value_enum, default_value = "inline")]
        disposition: Disposition,
        /// Write to this path (defaults to the stored file name)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },
}

/// Consultant contract subcommands
#[derive(Subcommand, Debug)]
pub enum ConsultantContractCommands {
    /// Attach a contract scan to an existing consultant
    Add {
        /// Consultant id
        id: i64,
        /// Contract scan (PDF/JPEG/PNG)
        file: String,
    },

    /// Download one contract scan
    Get {
        /// Consultant id
        id: i64,
        /// Contract id
        contract_id: i64,
        #[arg(long, value_enum, default_value = "inline")]
        disposition: Disposition,
        /// Write to this path (defaults to the stored file name)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Remove one contract attachment
    Rm {
        /// Consultant id
        id: i64,
        /// Contract id
        contract_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Certificate management subcommands
#[derive(Subcommand, Debug)]
pub enum CertificateCommands {
    /// List certificate records
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only certificates of this member
        #[arg(long)]
        member: Option<i64>,
    },

    /// Show one certificate record with its files
    Get {
        /// Certificate id
        id: i64,
    },

    /// Create a certificate record with its scans
    Create {
        /// Owning member id
        #[arg(long)]
        member: i64,
        /// Certificate scans, repeatable (PDF/JPEG/PNG)
        #[arg(long = "file", value_name = "PATH", required = true)]
        files: Vec<String>,
        /// Display titles, one per file
        #[arg(long = "title", required = true)]
        titles: Vec<String>,
    },

    /// Manage certificate file attachments
    #[command(subcommand)]
    File(CertificateFileCommands),

    /// Delete a certificate record (attached files are governed by the backend)
    #[command(visible_alias = "rm")]
    Delete {
        /// Certificate id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Certificate file subcommands
#[derive(Subcommand, Debug)]
pub enum CertificateFileCommands {
    /// Attach one scan to an existing certificate record
    Add {
        /// Certificate id
        id: i64,
        /// Certificate scan (PDF/JPEG/PNG)
        file: String,
        /// Display title
        #[arg(long)]
        title: String,
    },

    /// Download one certificate scan
    Get {
        /// Certificate id
        id: i64,
        /// File id
        file_id: i64,
        #[arg(long, value_enum, default_value = "inline")]
        disposition: Disposition,
        /// Write to this path (defaults to the stored file name)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Remove one certificate scan
    Rm {
        /// Certificate id
        id: i64,
        /// File id
        file_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Company management subcommands
#[derive(Subcommand, Debug)]
pub enum CompanyCommands {
    /// List companies
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only companies in this city
        #[arg(long)]
        city: Option<i64>,
    },

    /// Show one company
    Get {
        /// Company id
        id: i64,
    },

    /// Register a new company
    Create {
        #[arg(long)]
        name: String,
        /// City id (see `komora city list`)
        #[arg(long)]
        city: Option<i64>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Owning member id
        #[arg(long)]
        owner: Option<i64>,
    },

    /// Update a company (unset flags keep their current values)
    Update {
        /// Company id
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        city: Option<i64>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        owner: Option<i64>,
    },

    /// Delete a company
    #[command(visible_alias = "rm")]
    Delete {
        /// Company id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Finance ledger subcommands
#[derive(Subcommand, Debug)]
pub enum FinanceCommands {
    /// List all ledger entries
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only entries of this member
        #[arg(long)]
        member: Option<i64>,
    },

    /// Show one member's ledger with totals
    Ledger {
        /// Member id
        member_id: i64,
    },

    /// Show one ledger entry
    Get {
        /// Entry id
        id: i64,
    },

    /// Record a ledger entry
    Create {
        /// Member id
        #[arg(long)]
        member: i64,
        /// Entry date (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date: String,
        /// Amount owed (debit)
        #[arg(long, default_value_t = 0.0)]
        duguje: f64,
        /// Amount paid (credit)
        #[arg(long, default_value_t = 0.0)]
        potrazuje: f64,
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a ledger entry (unset flags keep their current values)
    Update {
        /// Entry id
        id: i64,
        #[arg(long)]
        member: Option<i64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        duguje: Option<f64>,
        #[arg(long)]
        potrazuje: Option<f64>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a ledger entry
    #[command(visible_alias = "rm")]
    Delete {
        /// Entry id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// News management subcommands
#[derive(Subcommand, Debug)]
pub enum NewsCommands {
    /// List news articles
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Show only articles in this category
        #[arg(long)]
        category: Option<i64>,
    },

    /// Show one article
    Get {
        /// Article id
        id: i64,
    },

    /// Publish an article
    Create {
        #[arg(long)]
        title: String,
        /// Category id (see `komora category list`)
        #[arg(long)]
        category: i64,
        /// Category name sent alongside the id
        #[arg(long)]
        category_name: Option<String>,
        /// Publication date (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        date: Option<String>,
        /// Short teaser shown on list pages
        #[arg(long)]
        content: Option<String>,
        /// Full article body
        #[arg(long)]
        full_text: Option<String>,
        /// Cover image (PDF/JPEG/PNG)
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
        /// Cover image caption
        #[arg(long)]
        image_title: Option<String>,
    },

    /// Update an article (unset flags keep their current values)
    Update {
        /// Article id
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        full_text: Option<String>,
    },

    /// Delete an article
    #[command(visible_alias = "rm")]
    Delete {
        /// Article id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Category reference subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List news categories
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

/// Advertisement management subcommands
#[derive(Subcommand, Debug)]
pub enum AdvCommands {
    /// List advertisements
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show one advertisement
    Get {
        /// Advertisement id
        id: i64,
    },

    /// Publish an advertisement
    Create {
        #[arg(long)]
        title: String,
        /// Advertisement body
        #[arg(long)]
        text: String,
        /// Contact phone (min 9 digits)
        #[arg(long)]
        phone: String,
    },

    /// Update an advertisement (unset flags keep their current values)
    Update {
        /// Advertisement id
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete an advertisement
    #[command(visible_alias = "rm")]
    Delete {
        /// Advertisement id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Congress registration subcommands
#[derive(Subcommand, Debug)]
pub enum CongressCommands {
    /// List congress registrations
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Mark a registration as paid
    Paid {
        /// Registration id
        id: i64,
    },

    /// Mark a registration as unpaid
    Unpaid {
        /// Registration id
        id: i64,
    },

    /// Print the uploaded paper's URL
    Paper {
        /// Registration id
        id: i64,
    },

    /// Delete a registration
    #[command(visible_alias = "rm")]
    Delete {
        /// Registration id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Homepage content subcommands
#[derive(Subcommand, Debug)]
pub enum HomepageCommands {
    /// Show the current homepage content
    Show,

    /// Update the homepage content (unset flags keep their current values)
    Update {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached data
    Clear,
    /// Print cache directory path
    Path,
}
