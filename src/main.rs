use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_breakdown_command, handle_budget_command, handle_history_command,
    handle_summary_command, handle_tips_command, handle_transaction_command, BudgetCommands,
    TipsOutcome, TransactionCommands,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::models::UserId;
use budget_tracker::services::BudgetService;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Record income and expenses, set per-category budget limits, \
                  see where the money goes, and ask a language model for \
                  savings tips, all from the command line."
)]
struct Cli {
    /// User whose data to use (defaults to the configured default user)
    #[arg(short, long, global = true, env = "BUDGET_TRACKER_USER")]
    user: Option<UserId>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show total income, expenses, net balance and expenses by category
    Summary,

    /// Show the share of spending in each category
    Breakdown,

    /// Ask the configured AI backend for savings tips
    Tips {
        /// Only check whether the backend is reachable
        #[arg(long)]
        check: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Initialize storage and default budget limits
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let user = cli.user.unwrap_or_else(|| settings.default_user.clone());

    // Initialize storage for the selected user
    let mut storage = Storage::open(paths.clone(), user)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Breakdown) => {
            handle_breakdown_command(&storage, &settings)?;
        }
        Some(Commands::Tips { check }) => {
            if handle_tips_command(&storage, &settings, check).await? == TipsOutcome::Failure {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing budget-tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let seeded = BudgetService::new(&storage).ensure_defaults()?;
            println!("Initialization complete for user '{}'.", storage.user());
            if seeded {
                println!();
                println!("A zero limit has been created for every expense category.");
                println!("Run 'budget budget set <category> <limit>' to set your limits.");
            }
        }
        Some(Commands::Config) => {
            println!("budget-tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("User directory:   {}", paths.user_dir(storage.user()).display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default user:    {}", settings.default_user);
            println!("  Current user:    {}", storage.user());
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            let ai = settings.ai.clone().with_env_overrides();
            println!("  AI backend:      {:?}", ai.backend);
            println!("  AI host:         {}", ai.host);
            println!("  AI model:        {}", ai.model);
        }
        None => {
            println!("budget-tracker - personal budgeting from the terminal");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
