//! Parceltrack CLI - Command-line interface for the parcel lifecycle tracker

use clap::{Parser, Subcommand};
use parceltrack::config::{self, TrackerConfig};
use parceltrack::storage::schema;
use parceltrack::ui::{self, status_icon};
use parceltrack::{Error, Parcel, ParcelStatus, ParcelStore};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "parceltrack")]
#[command(version = "0.1.0")]
#[command(about = "Parcel lifecycle tracker - track parcels from registration to delivery")]
#[command(long_about = r#"
Parceltrack keeps every parcel's owner, shipping address and lifecycle state
in a local SQLite database:
  • registered → sent → delivered, never backward
  • the address is frozen once a parcel ships
  • shipped parcels are never deleted, so delivery history survives

Example usage:
  parceltrack register --client 1000 --address "6 Unter den Linden, Berlin"
  parceltrack status --number 1 --status sent
  parceltrack client --client 1000
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and write a parceltrack.toml config
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Register a new parcel
    Register {
        /// Identifier of the owning client
        #[arg(short, long)]
        client: i64,

        /// Shipping address
        #[arg(short, long)]
        address: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show a single parcel
    Show {
        /// Parcel number
        #[arg(short, long)]
        number: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print the parcel as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List all parcels of a client
    Client {
        /// Identifier of the client
        #[arg(short, long)]
        client: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print the parcels as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Change the shipping address of a not-yet-shipped parcel
    Address {
        /// Parcel number
        #[arg(short, long)]
        number: i64,

        /// New shipping address
        #[arg(short, long)]
        address: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Move a parcel forward in its lifecycle
    Status {
        /// Parcel number
        #[arg(short, long)]
        number: i64,

        /// Target status: registered, sent or delivered
        #[arg(short, long)]
        status: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Delete a not-yet-shipped parcel
    Delete {
        /// Parcel number
        #[arg(short, long)]
        number: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show parcel counts per lifecycle state
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print the counts as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Open (and if necessary create) the tracker database.
///
/// The connection is owned here, at the edge: the store only ever borrows
/// it, and dropping it at the end of the command closes the handle.
fn open_database(flag: Option<PathBuf>) -> anyhow::Result<Connection> {
    let cfg = config::load_config(None)?;
    let path = config::resolve_database(flag, cfg.as_ref());
    config::ensure_db_dir(&path)?;

    let conn = Connection::open(&path)?;
    schema::ensure_schema(&conn)?;
    tracing::debug!("using database {}", path.display());
    Ok(conn)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { database, force } => {
            let database =
                database.unwrap_or_else(|| PathBuf::from(config::DEFAULT_DATABASE));
            let config_path = config::default_config_path();

            if force && config_path.exists() {
                ui::warn("overwriting existing config");
            }

            config::write_config(
                &config_path,
                &TrackerConfig {
                    database: Some(database.display().to_string()),
                },
                force,
            )?;

            config::ensure_db_dir(&database)?;
            let conn = Connection::open(&database)?;
            schema::ensure_schema(&conn)?;

            ui::success("tracker initialized");
            ui::field("Database", &database.display().to_string());
            ui::field("Config", &config_path.display().to_string());
        }

        Commands::Register {
            client,
            address,
            database,
        } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            let parcel = Parcel::new(client, address);
            let number = store.add(&parcel)?;

            ui::success(&format!("parcel {} registered for client {}", number, client));
            ui::field("Address", &parcel.address);
            ui::field("Registered at", &parcel.created_at);
        }

        Commands::Show {
            number,
            database,
            json,
        } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            let parcel = store.get(number)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&parcel)?);
            } else {
                println!(
                    "{} Parcel {} ({})",
                    status_icon(parcel.status),
                    parcel.number,
                    parcel.status
                );
                ui::field("Client", &parcel.client.to_string());
                ui::field("Address", &parcel.address);
                ui::field("Registered at", &parcel.created_at);
            }
        }

        Commands::Client {
            client,
            database,
            json,
        } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            let parcels = store.get_by_client(client)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&parcels)?);
            } else if parcels.is_empty() {
                println!("No parcels for client {}", client);
            } else {
                ui::header(&format!("Parcels of client {}", client));
                println!("{}", ui::parcel_table(&parcels));
            }
        }

        Commands::Address {
            number,
            address,
            database,
        } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            match store.set_address(number, &address) {
                Ok(()) => ui::success(&format!("parcel {} now ships to: {}", number, address)),
                Err(Error::ParcelNotFound(_)) => anyhow::bail!(
                    "parcel {} not found, or already shipped (the address is frozen after sending)",
                    number
                ),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Status {
            number,
            status,
            database,
        } => {
            let status: ParcelStatus = status.parse()?;

            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            match store.set_status(number, status) {
                Ok(()) => ui::success(&format!(
                    "parcel {} is now {} {}",
                    number,
                    status,
                    status_icon(status)
                )),
                Err(Error::ParcelNotFound(_)) => anyhow::bail!(
                    "parcel {} not found, or cannot move back to {}",
                    number,
                    status
                ),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Delete { number, database } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            match store.delete(number) {
                Ok(()) => ui::success(&format!("parcel {} deleted", number)),
                Err(Error::ParcelNotFound(_)) => anyhow::bail!(
                    "parcel {} not found, or already shipped (delivery history is kept)",
                    number
                ),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Stats { database, json } => {
            let conn = open_database(database)?;
            let store = ParcelStore::new(&conn);

            let stats = store.stats()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                ui::header("Tracker statistics");
                println!("{}", ui::stats_table(&stats));
            }
        }
    }

    Ok(())
}
