use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for wintertv
#[derive(Parser)]
#[command(
    name = "wintertv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Upcoming winter-sports broadcasts on TV, filtered by sport",
    long_about = None
)]
pub struct Cli {
    /// Load events from this JSON file instead of the configured/bundled schedule
    #[arg(global = true, long = "events", value_name = "FILE")]
    pub events: Option<String>,

    /// Use this configuration file instead of the default location
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Toggle overrides shared by `list`, `browse` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<String>,

    /// Only events from the reference date through N days after it
    #[arg(long = "days", value_name = "N")]
    pub days: Option<u32>,

    /// Switch a sport on (repeatable), e.g. --show curling
    #[arg(long = "show", value_name = "SPORT")]
    pub show: Vec<String>,

    /// Switch a sport off (repeatable), e.g. --hide ice-hockey
    #[arg(long = "hide", value_name = "SPORT")]
    pub hide: Vec<String>,

    /// Start with every sport switched on
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show upcoming events for the enabled sports
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Interactive view: toggle sports and see the list redraw
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List sport categories with their defaults and upcoming event counts
    Sports {
        #[arg(long = "as-of", value_name = "DATE")]
        as_of: Option<String>,

        /// Count only events from the reference date through N days after it
        #[arg(long = "days", value_name = "N")]
        days: Option<u32>,
    },

    /// Export the visible events
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}
