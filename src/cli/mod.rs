mod commands;
pub mod error;
pub mod utils;

#[cfg(test)]
mod utils_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::db::{Database, Role, SqliteDatabase};
use commands::PageParams;
use error::CliResult;
use utils::OutputFormat;

#[derive(Parser)]
#[command(name = "lawncare")]
#[command(author, version, about = "Lawn-care bookings database", long_about = None)]
pub struct Cli {
    /// Database file (default: LAWNCARE_DB env or ~/.local/share/lawncare/lawn_database.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema and seed rows
    Init,
    /// Drop every table and recreate the seeded schema
    Reset {
        /// Confirm that all data should be deleted
        #[arg(long)]
        force: bool,
    },
    /// Customer and employee accounts
    Person {
        #[command(subcommand)]
        command: PersonCommands,
    },
    /// Serviceable addresses
    Property {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Bookings
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// The service catalog
    Service {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Check a username and password
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Args, Clone, Copy)]
struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: i64,
    /// Rows per page
    #[arg(long, default_value_t = crate::db::DEFAULT_PAGE_SIZE)]
    page_size: i64,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListArgs {
    fn page(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Subcommand)]
enum ListCommands {
    /// List one page
    List {
        #[command(flatten)]
        args: ListArgs,
    },
    /// Case-insensitive substring search
    Search {
        query: String,
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Subcommand)]
enum PersonCommands {
    /// List one page of people
    List {
        /// Only customers or only employees
        #[arg(long)]
        role: Option<Role>,
        #[command(flatten)]
        args: ListArgs,
    },
    /// Case-insensitive substring search
    Search {
        query: String,
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Subcommand)]
enum BookingCommands {
    /// List one page of bookings
    List {
        #[command(flatten)]
        args: ListArgs,
    },
    /// Search bookings by date, customer or address
    Search {
        query: String,
        #[command(flatten)]
        args: ListArgs,
    },
    /// Show cost, payments and completion of one booking
    Show {
        id: i64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env(cli.db.clone());
    init_tracing(&config.log_filter);

    let db = SqliteDatabase::open(&config.db_path).await?;
    let output = execute(&db, &config, cli.command).await;
    db.close().await;

    println!("{}", output?);
    Ok(())
}

async fn execute(db: &SqliteDatabase, config: &Config, command: Commands) -> CliResult<String> {
    if !matches!(command, Commands::Init | Commands::Reset { .. }) {
        db.migrate().await?;
    }

    match command {
        Commands::Init => commands::admin::init(db, &config.db_path).await,
        Commands::Reset { force } => commands::admin::reset(db, force).await,
        Commands::Person { command } => match command {
            PersonCommands::List { role, args } => {
                commands::person::list_persons(db, role, args.page(), args.format).await
            }
            PersonCommands::Search { query, args } => {
                commands::person::search_persons(db, &query, args.page(), args.format).await
            }
        },
        Commands::Property { command } => match command {
            ListCommands::List { args } => {
                commands::property::list_properties(db, args.page(), args.format).await
            }
            ListCommands::Search { query, args } => {
                commands::property::search_properties(db, &query, args.page(), args.format).await
            }
        },
        Commands::Booking { command } => match command {
            BookingCommands::List { args } => {
                commands::booking::list_bookings(db, args.page(), args.format).await
            }
            BookingCommands::Search { query, args } => {
                commands::booking::search_bookings(db, &query, args.page(), args.format).await
            }
            BookingCommands::Show { id, format } => {
                commands::booking::show_booking(db, id, format).await
            }
        },
        Commands::Service { command } => match command {
            ListCommands::List { args } => {
                commands::service::list_services(db, args.page(), args.format).await
            }
            ListCommands::Search { query, args } => {
                commands::service::search_services(db, &query, args.page(), args.format).await
            }
        },
        Commands::Login { username, password } => {
            commands::auth::login(db, &username, &password).await
        }
    }
}
