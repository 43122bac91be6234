use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use eventto::cli::{
    handle_attendee_command, handle_budget_command, handle_event_command, handle_expense_command,
    handle_guest_command, handle_vendor_command,
};
use eventto::config::{paths::EventtoPaths, settings::Settings};
use eventto::display::format_dashboard;
use eventto::storage::{self, json_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "eventto",
    version,
    about = "Event budgets, expenses and guest lists from the terminal",
    long_about = "eventto reads JSON snapshots of an event-management store and reports \
                  on them: budget totals and bands per event, expense lists and CSV \
                  export, vendors, attendees and guest lists."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty tables
    Init {
        /// Also write a sample data set
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Show headline counts, featured events and the first event's budget
    #[command(alias = "dash")]
    Dashboard,

    /// Event commands
    #[command(subcommand)]
    Event(eventto::cli::EventCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(eventto::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(eventto::cli::ExpenseCommands),

    /// Vendor commands
    #[command(subcommand)]
    Vendor(eventto::cli::VendorCommands),

    /// Attendee commands
    #[command(subcommand)]
    Attendee(eventto::cli::AttendeeCommands),

    /// Guest list commands
    #[command(subcommand)]
    Guest(eventto::cli::GuestCommands),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = EventtoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init { sample }) => {
            println!("Initializing eventto at: {}", paths.base_dir().display());
            if storage::needs_initialization(&paths) {
                storage::initialize_storage(&paths)?;
            } else {
                println!("All tables already present; existing snapshots left untouched.");
            }
            settings.save(&paths)?;
            if sample {
                storage::write_sample_data(&paths)?;
                println!("Sample events, budgets, expenses, vendors and guests written.");
            }
            println!("Initialization complete!");
            println!();
            println!("Table snapshots live in {}", paths.data_dir().display());
            println!("Run 'eventto dashboard' for an overview.");
        }
        Some(Commands::Config) => {
            println!("eventto Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!();
            println!("Tables:");
            for table in [
                paths.events_file(),
                paths.budget_categories_file(),
                paths.expenses_file(),
                paths.vendors_file(),
                paths.attendees_file(),
                paths.guests_file(),
            ] {
                let state = if !table.exists() {
                    "missing"
                } else if json_file_valid(&table) {
                    "ok"
                } else {
                    "invalid JSON"
                };
                println!("  {:<28} {}", table.display(), state);
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Session timeout:   {}s", settings.session_timeout_secs);
            println!("  Featured events:   {}", settings.featured_events);
        }
        Some(command) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;
            run_command(&storage, &settings, command)?;
        }
        None => {
            println!("eventto - event budgets from the terminal");
            println!();
            println!("Run 'eventto --help' for usage information.");
            println!("Run 'eventto init --sample' to try it with sample data.");
        }
    }

    Ok(())
}

fn run_command(storage: &Storage, settings: &Settings, command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard => {
            let stats = storage.dashboard(settings.featured_events);
            print!("{}", format_dashboard(&stats, settings));
        }
        Commands::Event(cmd) => handle_event_command(storage, settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(storage, settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(storage, settings, cmd)?,
        Commands::Vendor(cmd) => handle_vendor_command(storage, cmd)?,
        Commands::Attendee(cmd) => handle_attendee_command(storage, settings, cmd)?,
        Commands::Guest(cmd) => handle_guest_command(storage, cmd)?,
        Commands::Init { .. } | Commands::Config => {}
    }

    Ok(())
}
