//! # MotiTask
//!
//! A motivation-aware task list for the terminal. Tell it how much energy you
//! have today and it suggests tasks of a matching difficulty, then tracks your
//! streak, weekly consistency and momentum over time.
//!
//! ## Usage
//!
//! ### Interactive Mode (TUI)
//!
//! Run without arguments to open the dashboard:
//!
//! ```bash
//! motitask
//! # or explicitly
//! motitask ui
//! ```
//!
//! #### TUI Key Bindings
//!
//! **Global**
//! *   `q`: Quit
//! *   `v`: Cycle Tasks / Templates / Progress views
//! *   `+` / `-`: Raise or lower motivation
//!
//! **Task View**
//! *   `a`: Add new task
//! *   `Space`: Toggle selected task
//! *   `d`: Delete selected task
//! *   `f`: Switch between recommended and all tasks
//! *   `c`: Hide/show completed tasks
//! *   `r`: Reset all tasks for a new day
//! *   `w`: Log a glass of water
//!
//! **Template View**
//! *   `Enter`: Add the selected suggestion as a task
//!
//! ### Command Line Interface (CLI)
//!
//! ```bash
//! motitask motivation 7
//! motitask add "Write report" --difficulty medium --duration 30
//! motitask category templates fitness
//! motitask pick fitness 2
//! motitask list --all-tasks
//! motitask toggle 1f3a
//! motitask progress
//! ```
//!
//! ## Data Storage
//!
//! Every piece of state is a JSON file in your local data directory
//! (`~/.local/share/motitask/` on Linux). Override it with `MOTITASK_DIR`.
//! Log verbosity is controlled by `RUST_LOG` (default `warn`).

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use motitask::commands::*;
use motitask::logging::init_logging;
use motitask::models::{ColorTag, Difficulty, IconTag};
use motitask::recommend::ViewFilter;
use motitask::tui::run_tui;
use motitask::{Error, Result};

#[derive(Parser)]
#[command(name = "motitask")]
#[command(about = "Motivation-aware task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title (quoted if it has spaces)
        title: String,
        /// easy, medium or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,
        /// Category id
        #[arg(short, long)]
        category: Option<String>,
        /// Planned duration in minutes
        #[arg(short = 'm', long)]
        duration: Option<u32>,
        /// Attach a countdown timer
        #[arg(short, long)]
        timer: bool,
        /// Reminder time, e.g. 18:30
        #[arg(short, long)]
        reminder: Option<String>,
    },
    /// Add a task from a category suggestion (see `category templates`)
    Pick {
        /// Category id
        category: String,
        /// Suggestion number as listed by `category templates`
        number: usize,
        /// Planned duration in minutes
        #[arg(short = 'm', long)]
        duration: Option<u32>,
        #[arg(short, long)]
        timer: bool,
        #[arg(short, long)]
        reminder: Option<String>,
    },
    /// List tasks for the current motivation
    List {
        /// Show every pending task grouped by difficulty
        #[arg(short, long)]
        all_tasks: bool,
    },
    /// Toggle a task between pending and done
    Toggle {
        /// Task id or unique prefix
        id: String,
    },
    /// Remove a task
    Remove {
        /// Task id or unique prefix
        id: String,
    },
    /// Mark every task as pending again
    ResetDay,
    /// Show or set the motivation level (1-10)
    Motivation {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
        level: Option<u8>,
    },
    /// Toggle hiding of completed tasks
    HideCompleted,
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Record today's progress and show statistics
    Progress,
    /// Log a glass of water
    Water,
    /// Delete all data
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Create a custom category
    Add {
        name: String,
        #[arg(short, long, default_value = "Star")]
        icon: IconTag,
        #[arg(short, long, default_value = "Blue")]
        color: ColorTag,
    },
    /// List categories
    List,
    /// Show the suggestions a category offers at the current motivation
    Templates {
        /// Category id
        id: String,
    },
}

fn run(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add { title, difficulty, category, duration, timer, reminder }) => {
            cmd_add(title, difficulty, category, duration, timer, reminder, false).map(|_| ())
        }
        Some(Commands::Pick { category, number, duration, timer, reminder }) => {
            cmd_pick(category, number, duration, timer, reminder, false).map(|_| ())
        }
        Some(Commands::List { all_tasks }) => {
            cmd_list(if all_tasks { ViewFilter::All } else { ViewFilter::Recommended })
        }
        Some(Commands::Toggle { id }) => cmd_toggle(id, false).map(|_| ()),
        Some(Commands::Remove { id }) => cmd_remove(id, false),
        Some(Commands::ResetDay) => cmd_reset_day(false).map(|_| ()),
        Some(Commands::Motivation { level }) => cmd_motivation(level, false).map(|_| ()),
        Some(Commands::HideCompleted) => cmd_hide_completed(false).map(|_| ()),
        Some(Commands::Category { command }) => match command {
            CategoryCommands::Add { name, icon, color } => cmd_category_add(name, icon, color, false).map(|_| ()),
            CategoryCommands::List => cmd_category_list(),
            CategoryCommands::Templates { id } => cmd_category_templates(id),
        },
        Some(Commands::Progress) => cmd_progress(false).map(|_| ()),
        Some(Commands::Water) => cmd_water(false).map(|_| ()),
        Some(Commands::Reset { force }) => cmd_reset(force),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => return Err(Error::UnsupportedShell(shell)),
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "motitask", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Ui) | None => run_tui(),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
