use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Version string, with the git hash appended for builds from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{} ({})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "thaidict", version = get_version())]
#[command(about = "English to Thai vocabulary dictionary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dictionary file to use instead of the configured one
    #[arg(long, global = true, env = "THAIDICT_DICTIONARY")]
    pub dict: Option<PathBuf>,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new word
    #[command(alias = "a")]
    Add {
        /// English word or phrase
        english: String,

        /// Thai translation
        thai: String,

        /// Category of the word
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List words
    #[command(alias = "ls")]
    List {
        /// Only list words in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single word
    Get { english: String },

    /// Change the translation or category of a word
    #[command(alias = "e")]
    Update {
        /// English word or phrase to update
        english: String,

        /// New Thai translation
        thai: String,

        /// New category (omit to clear it)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a word
    #[command(alias = "rm")]
    Delete { english: String },

    /// Delete every word in the dictionary
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },

    /// Search english, thai and category for a term
    #[command(alias = "s")]
    Search { term: String },

    /// Check a Thai translation
    #[command(alias = "c")]
    Check {
        /// English word or phrase
        english: String,

        /// Your Thai translation
        thai: String,
    },

    /// Sort the dictionary (english, thai or category) and save the new order
    Sort { field: String },

    /// Import words from a CSV file (english,thai[,category] per row)
    Import { file: PathBuf },

    /// Get or set configuration
    Config {
        /// Configuration key (dictionary-path, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the dictionary file
    Path,
}
