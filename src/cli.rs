use clap::{Parser, Subcommand};
use tasklist::todo::{FilterMode, Priority};

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A terminal task list with priorities, filters and drag-to-reorder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the end of the list
    Add {
        task: String,

        #[arg(short, long)]
        priority: Option<Priority>,
    },
    /// Print the list with task numbers
    List {
        #[arg(short, long, default_value_t = FilterMode::All)]
        filter: FilterMode,
    },
    /// Mark a task done, or open again if it is done
    Toggle {
        /// Task number as shown by `list`
        number: usize,
    },
    /// Delete a task
    Remove {
        number: usize,
    },
    /// Move a task to another position
    Move {
        from: usize,
        to: usize,
    },
    /// Show or change settings in config.toml
    Config {
        /// Color theme: default, dark or light
        #[arg(long)]
        theme: Option<String>,

        /// Priority preselected for new tasks
        #[arg(long)]
        default_priority: Option<Priority>,

        /// Capture the mouse in the TUI
        #[arg(long)]
        mouse: Option<bool>,
    },
}
