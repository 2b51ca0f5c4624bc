use anyhow::Result;
use clap::{Parser, Subcommand};

use tripsplit::cli::{
    handle_expense_command, handle_export_command, handle_participant_command,
    handle_summary_command, ExpenseCommands, ExportArgs, ParticipantCommands,
};
use tripsplit::config::{Settings, TripPaths};
use tripsplit::logging::init_logging;
use tripsplit::storage::init::needs_initialization;
use tripsplit::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "tripsplit",
    version,
    about = "Split shared trip expenses and see who owes whom",
    long_about = "TripSplit records who paid for what on a group trip, works out \
                  each participant's net balance and tells you how to settle up."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize settings and an empty expense list
    Init,

    /// Show current configuration and paths
    Config,

    /// Roster commands
    #[command(subcommand)]
    Participant(ParticipantCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show balances and how to settle up
    Summary,

    /// Export expenses to a file
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = TripPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing TripSplit at: {}", paths.base_dir().display());
            initialize_storage(&paths, &mut settings)?;
            println!("Initialization complete!");
            println!();
            println!("Participants:");
            for participant in &settings.roster {
                println!("  {:6} {}", participant.id.as_str(), participant.name);
            }
            println!();
            println!("Run 'tripsplit expense add --help' to record the first expense.");
        }
        Some(Commands::Config) => {
            println!("TripSplit Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:      {}", settings.currency_code);
            println!("  Participants:  {}", settings.roster.len());
            println!("  Initialized:   {}", storage.is_initialized());
        }
        Some(Commands::Participant(cmd)) => {
            handle_participant_command(&settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        None => {
            println!("TripSplit - shared trip expense splitter");
            println!();
            println!("Run 'tripsplit --help' for usage information.");
            if needs_initialization(&paths) {
                println!("Run 'tripsplit init' to get started.");
            }
        }
    }

    Ok(())
}
