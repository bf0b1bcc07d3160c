use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use budget_tracker::cli::{
    handle_calc_command, handle_category_command, handle_income_command, handle_reset_command,
    handle_show_command, CategoryCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::logging::init_logging;
use budget_tracker::services::BudgetManager;
use budget_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal budget tracker",
    long_about = "Budget Tracker keeps an income figure and a list of expense \
                  categories, and shows how much of the income is used, both \
                  overall and per category."
)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the monthly income
    Income {
        /// Income amount (must be positive)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Recompute and show the usage ring
    Calc,

    /// Delete all budget data
    Reset,

    /// Show the summary and category bars
    Show,

    /// Show current configuration and paths
    Config,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&paths, cli.verbose)?;

    // Initialize storage
    let store = FileStore::new(paths.data_dir());
    let mut manager = BudgetManager::load(store, settings.store_key.as_str())?;
    debug!(base_dir = %paths.base_dir().display(), "budget loaded");

    match cli.command {
        Some(Commands::Income { amount }) => {
            handle_income_command(&mut manager, &settings, amount)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut manager, &settings, cmd)?;
        }
        Some(Commands::Calc) => {
            handle_calc_command(&mut manager, &settings)?;
        }
        Some(Commands::Reset) => {
            handle_reset_command(&mut manager)?;
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Store key:          {}", settings.store_key);
            println!("  Notification secs:  {}", settings.notification_secs);
        }
        Some(Commands::Tui) => {
            budget_tracker::tui::run_tui(manager, &settings)?;
        }
        Some(Commands::Show) | None => {
            handle_show_command(&manager, &settings)?;
        }
    }

    Ok(())
}
