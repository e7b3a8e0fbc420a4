//! Command-line interface entry point for `coursefinder`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_finder::config::Config;
use course_finder::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_finder::{error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::List { filters, format } => {
            commands::list::run(&mut session_or_exit(&config), &filters, format);
        }
        Command::Save { id } => commands::saved::toggle(&mut session_or_exit(&config), &id),
        Command::Saved { format } => commands::saved::show(&session_or_exit(&config), format),
        Command::Compare { ids, format } => {
            commands::compare::run(&mut session_or_exit(&config), &ids, format);
        }
        Command::History { clear } => commands::history::run(&mut session_or_exit(&config), clear),
        Command::Facets => commands::facets::run(&session_or_exit(&config)),
        Command::Shell { format } => commands::shell::run(&mut session_or_exit(&config), format),
    }
}

fn session_or_exit(config: &Config) -> commands::CliSession {
    match commands::open_session(config) {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
