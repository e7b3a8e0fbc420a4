//! CLI argument definitions for `coursefinder`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_finder::config::ConfigOverrides;
use course_finder::core::discovery::{PriceRange, Selection, SortKey};
use course_finder::core::models::{Category, Difficulty, Format};
use course_finder::core::render::ViewFormat;
use course_finder::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `page_size`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Filter, sort and paging flags of the `list` command
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Search title and description (remembered in the search history)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Category: SIYB, Technology, Management, Marketing or all
    #[arg(long, value_name = "CATEGORY", default_value = "all")]
    pub category: Selection<Category>,

    /// Exact duration label, e.g. "3 Months", or all
    #[arg(long, value_name = "DURATION", default_value = "all")]
    pub duration: Selection<String>,

    /// Format: Online, In-Person, Hybrid or all
    #[arg(long = "delivery", value_name = "FORMAT", default_value = "all")]
    pub delivery: Selection<Format>,

    /// Difficulty: Beginner, Intermediate, Advanced or all
    #[arg(long, value_name = "LEVEL", default_value = "all")]
    pub difficulty: Selection<Difficulty>,

    /// Lowest price to include
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<u32>,

    /// Highest price to include
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<u32>,

    /// Only show saved courses
    #[arg(long)]
    pub saved_only: bool,

    /// Sort order: popularity, price-low, price-high, duration
    #[arg(long, value_name = "KEY", default_value = "popularity")]
    pub sort: SortKey,

    /// Page to show (1-based)
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub page: usize,
}

impl ListArgs {
    /// Requested price window, or `None` when neither bound was given
    ///
    /// A missing bound is left open.
    pub fn price_range(&self) -> Option<PriceRange> {
        if self.min_price.is_none() && self.max_price.is_none() {
            return None;
        }
        Some(PriceRange::new(
            self.min_price.unwrap_or(0),
            self.max_price.unwrap_or(u32::MAX),
        ))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalog.
    ///
    /// Filters are combined; only courses satisfying all of them are shown.
    List {
        #[command(flatten)]
        filters: ListArgs,

        /// Output format: text or markdown
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ViewFormat,
    },
    /// Save a course, or remove it if already saved.
    Save {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show saved courses.
    Saved {
        /// Output format: text or markdown
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ViewFormat,
    },
    /// Compare up to three courses side by side.
    Compare {
        /// Course ids, in the order they should appear
        #[arg(value_name = "IDS", num_args = 1..)]
        ids: Vec<String>,

        /// Output format: text or markdown
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ViewFormat,
    },
    /// Show recent searches.
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },
    /// List the values each filter accepts.
    Facets,
    /// Browse interactively, one command per line.
    Shell {
        /// Output format: text or markdown
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ViewFormat,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursefinder",
    about = "Find, compare and bookmark courses from the catalog",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the directory saved courses and search history are kept in
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override courses per page
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means the config value is left alone.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            catalog_file: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            data_dir: None,
            catalog: None,
            page_size: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Facets).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.page_size.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut args = cli(Command::Facets);
        args.config_level = Some(LogLevelArg::Debug);
        args.data_dir = Some(PathBuf::from("/tmp/cf"));
        args.catalog = Some(PathBuf::from("courses.json"));
        args.page_size = Some(3);

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.data_dir, Some("/tmp/cf".to_string()));
        assert_eq!(overrides.catalog_file, Some("courses.json".to_string()));
        assert_eq!(overrides.page_size, Some(3));
    }

    #[test]
    fn test_parse_list_flags() {
        let args = Cli::try_parse_from([
            "coursefinder",
            "list",
            "--category",
            "siyb",
            "--delivery",
            "in-person",
            "--sort",
            "price-low",
            "--max-price",
            "3500",
        ])
        .unwrap();

        let Command::List { filters, format } = args.command else {
            panic!("expected list command");
        };
        assert_eq!(filters.category, Selection::Only(Category::Siyb));
        assert_eq!(filters.delivery, Selection::Only(Format::InPerson));
        assert_eq!(filters.difficulty, Selection::All);
        assert_eq!(filters.sort, SortKey::PriceLow);
        assert_eq!(format, ViewFormat::Text);
        assert_eq!(filters.price_range(), Some(PriceRange::new(0, 3500)));
    }

    #[test]
    fn test_price_range_absent_without_bounds() {
        let args = Cli::try_parse_from(["coursefinder", "list"]).unwrap();
        let Command::List { filters, .. } = args.command else {
            panic!("expected list command");
        };
        assert_eq!(filters.price_range(), None);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["coursefinder", "list", "--category", "cooking"]).is_err());
    }
}
