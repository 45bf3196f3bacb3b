//! Command-line interface entry point for `CoursePlanner`

mod args;
mod commands;
mod prompt;

use args::{Cli, Command};
use clap::Parser;
use course_planner::config::Config;
use course_planner::core::Workspace;
use course_planner::logger::{self, enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_planner::{get_version, info, verbose};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            verbose!("✓ File logging initialized at: {display_path}");
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    info!(
        "courseplanner v{} started with level {}",
        get_version(),
        logger::level()
    );

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let mut workspace = Workspace::new();
            commands::menu::run(&config, &mut workspace);
        }
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}
