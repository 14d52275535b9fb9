use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "sc",
    version,
    about = "Command-line client for the SC marketplace API",
    long_about = "Signs in against the marketplace API and calls its endpoints.\n\
                  The session is kept in a JSON file between runs; set $SC_SESSION_FILE \
                  or use --session-file to choose where."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL
    #[arg(long, env = "SC_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Session file path
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show whether a session is stored
    Session,
    /// Sign in with phone and password
    Login(LoginArgs),
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in account
    Me,
    /// Search professionals
    Search(SearchArgs),
    /// Manage favorite professionals
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// List classified listings
    Listings(ListingsArgs),
    /// Show the subscription status
    Subscription,
    /// List active advertisements
    Ads,
    /// List regions with their departments
    Regions,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Password
    #[arg(long, env = "SC_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query
    pub query: Option<String>,

    /// Trade identifier
    #[arg(long)]
    pub job: Option<u64>,

    /// Geographic zone identifier
    #[arg(long)]
    pub zone: Option<u64>,

    /// Only professionals currently online
    #[arg(long)]
    pub online: bool,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorites
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// Bookmark a professional
    Add {
        /// Professional identifier
        pro_id: u64,
    },
    /// Remove a bookmark
    Remove {
        /// Professional identifier
        pro_id: u64,
    },
}

#[derive(Debug, Args)]
pub struct ListingsArgs {
    /// Only the signed-in professional's listings
    #[arg(long)]
    pub mine: bool,

    /// Filter by city
    #[arg(long)]
    pub city: Option<String>,
}
