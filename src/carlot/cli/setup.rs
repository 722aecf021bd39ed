use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "carlot", bin_name = "carlot", version = get_version())]
#[command(about = "Browse, search and list cars for sale", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding listings and configuration
    #[arg(long, global = true, env = "CARLOT_DATA", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all cars, optionally filtered by a search query
    #[command(alias = "ls")]
    List {
        /// Words to search for in name, location and description
        query: Vec<String>,
    },

    /// Search cars by name, location or description
    #[command(alias = "s")]
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List a car for sale
    Sell(SellArgs),

    /// Show the details of one car
    #[command(alias = "v")]
    View {
        /// Listing id or details link (e.g. 42 or details.html?id=42)
        reference: String,
    },

    /// Remove a listing
    #[command(alias = "rm")]
    Delete {
        /// Listing id or details link
        reference: String,
    },

    /// Log in (simulated; no credentials are checked)
    Login {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Forget the logged-in user
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Replace all listings with the sample data
    Reset,

    /// Get or set configuration values
    Config {
        /// Configuration key (e.g. on_corrupt_data)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

/// Sell form fields. Missing fields are left empty so validation can report them.
#[derive(Args, Debug)]
pub struct SellArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub price: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Image URL (a placeholder is used when omitted)
    #[arg(long, default_value = "")]
    pub image: String,

    #[arg(long, default_value = "")]
    pub year: String,

    #[arg(long, default_value = "")]
    pub mileage: String,

    #[arg(long, default_value = "")]
    pub fuel: String,

    /// Validate only; do not save the listing
    #[arg(long)]
    pub dry_run: bool,
}
