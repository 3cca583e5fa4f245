mod app;
mod cli;
mod ui;

use tasklist::config;
use tasklist::storage;
use tasklist::todo;
use tasklist::utils;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::fs;
use std::io::Write;
use std::panic;
use storage::SqliteStore;
use todo::{FilterMode, Priority, TaskBoard, visibility};
use ui::theme::Theme;
use utils::paths::{
    ensure_tasklist_dir_exists, get_config_path, get_crash_log_path, get_logs_dir,
};

const THEMES: [&str; 3] = ["default", "dark", "light"];

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to ~/.tasklist/logs/tasklist.log, rolled daily.
/// Log level can be controlled with RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "tasklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

/// CLI subcommands print to stdout, so only warnings and worse reach stderr.
fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_board(config: &Config) -> Result<TaskBoard<SqliteStore>> {
    let db_path = config.database_path()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    let board = TaskBoard::load(store)?;
    Ok(board)
}

/// Convert a 1-based task number from the command line into a list index.
fn task_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Task numbers start at 1"))
}

fn main() -> Result<()> {
    install_crash_handler();

    ensure_tasklist_dir_exists()?;

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(command) => {
            init_stderr_logging();
            run_command(command, config)?;
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!("tasklist starting");

            let board = open_board(&config)?;
            let theme = Theme::from_config(&config);
            let state = app::AppState::new(board, theme, config.default_priority);

            let state = ui::run_tui(state, config.mouse)?;

            tracing::info!(open = state.open_count(), "tasklist exiting gracefully");
        }
    }

    Ok(())
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Add { task, priority } => {
            let mut board = open_board(&config)?;
            let priority = priority.unwrap_or(config.default_priority);
            board.add(&task, priority)?;
            println!("Added task #{}", board.len());
        }
        Commands::List { filter } => {
            let board = open_board(&config)?;
            print_list(&board, filter);
        }
        Commands::Toggle { number } => {
            let mut board = open_board(&config)?;
            let index = task_index(number)?;
            board.toggle_complete(index)?;
            let state = if board.tasks()[index].completed {
                "done"
            } else {
                "open"
            };
            println!("Task #{number} is now {state}");
        }
        Commands::Remove { number } => {
            let mut board = open_board(&config)?;
            let removed = board.remove(task_index(number)?)?;
            println!("Removed: {}", removed.text);
        }
        Commands::Move { from, to } => {
            let mut board = open_board(&config)?;
            board.reorder(task_index(from)?, task_index(to)?)?;
            println!("Moved task #{from} to #{to}");
        }
        Commands::Config {
            theme,
            default_priority,
            mouse,
        } => {
            update_config(config, theme, default_priority, mouse)?;
        }
    }
    Ok(())
}

fn update_config(
    mut config: Config,
    theme: Option<String>,
    default_priority: Option<Priority>,
    mouse: Option<bool>,
) -> Result<()> {
    let changed = theme.is_some() || default_priority.is_some() || mouse.is_some();

    if let Some(theme) = theme {
        if !THEMES.contains(&theme.as_str()) {
            return Err(anyhow!(
                "Unknown theme '{}'. Choose one of: {}",
                theme,
                THEMES.join(", ")
            ));
        }
        config.theme = theme;
    }
    if let Some(priority) = default_priority {
        config.default_priority = priority;
    }
    if let Some(mouse) = mouse {
        config.mouse = mouse;
    }

    if changed {
        config.save()?;
        println!("Saved {}", get_config_path()?.display());
    }

    println!("theme = {}", config.theme);
    println!("default_priority = {}", config.default_priority);
    println!("mouse = {}", config.mouse);
    Ok(())
}

fn print_list(board: &TaskBoard<SqliteStore>, filter: FilterMode) {
    let mut shown = 0;
    for (idx, task) in board.tasks().iter().enumerate() {
        if !visibility(task, filter).is_visible() {
            continue;
        }
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        println!("{:>3}. {} {}", idx + 1, checkbox, task.label());
        shown += 1;
    }

    if shown == 0 {
        match filter {
            FilterMode::All => println!("No tasks"),
            _ => println!("No {} tasks", filter),
        }
    }
    println!("Open tasks: {}", board.open_count());
}
