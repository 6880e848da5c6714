use clap::{Args, Parser, Subcommand};
use securepaste::model::Visibility;

#[derive(Parser, Debug)]
#[command(name = "securepaste", bin_name = "securepaste", version)]
#[command(about = "Command-line client for the SecurePaste service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Service root URL (overrides SECUREPASTE_URL and the config file)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub url: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Paste(PasteCommands),

    #[command(flatten)]
    Browse(BrowseCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum PasteCommands {
    /// Create a new paste
    #[command(alias = "n", display_order = 1)]
    Create {
        title: String,

        content: String,

        #[command(flatten)]
        options: CreateOptions,
    },

    /// Show a paste (counts as a view)
    #[command(alias = "v", display_order = 2)]
    Get {
        id: String,

        /// Password for protected pastes
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Change title, content, language or visibility
    #[command(alias = "e", display_order = 3)]
    Update {
        id: String,

        #[arg(long, short)]
        title: Option<String>,

        #[arg(long, short)]
        content: Option<String>,

        #[arg(long, short)]
        language: Option<String>,

        /// public, unlisted or private
        #[arg(long)]
        visibility: Option<Visibility>,
    },

    /// Delete a paste
    #[command(alias = "rm", display_order = 4)]
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct CreateOptions {
    #[arg(long, short)]
    pub language: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub author_name: Option<String>,

    #[arg(long, value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// public, unlisted or private (default: public)
    #[arg(long)]
    pub visibility: Option<Visibility>,

    /// Minutes until the paste expires (1 to 525600)
    #[arg(long, value_name = "MINUTES")]
    pub expires_in: Option<u32>,

    /// Require this password to read the paste
    #[arg(long, short)]
    pub password: Option<String>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Page size (default from config)
    #[arg(long, short)]
    pub size: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommands {
    /// List public pastes, newest first
    #[command(alias = "ls", display_order = 10)]
    Public {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// List public pastes from the last 24 hours
    #[command(display_order = 11)]
    Recent {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Search public pastes by title and content
    #[command(display_order = 12)]
    Search {
        query: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// List public pastes in a language
    #[command(alias = "lang", display_order = 13)]
    Language {
        language: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show service statistics
    #[command(display_order = 14)]
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Run the guided tour against the service
    #[command(display_order = 20)]
    Demo,

    /// Check whether the service is up
    #[command(display_order = 21)]
    Health,

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (base-url, page-size, timeout)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
