use std::{env, process};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use smartpark_application::prelude as flows;
use smartpark_core::{entities::*, usecases};
use smartpark_db_sqlite::Connections;

const DEFAULT_DB_URL: &str = "smartpark.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Parser)]
#[command(name = "smartpark", version, about)]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Size of the database connection pool
    #[arg(long, default_value_t = DB_CONNECTION_POOL_SIZE)]
    pool_size: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations and exit
    Migrate,
    /// Print marketplace statistics (requires an admin account)
    Stats {
        username: String,
        password: String,
    },
    /// Populate the database with a small demo dataset
    Seed,
}

pub fn run() {
    let args = Args::parse();

    let db_url = args.db_url.unwrap_or_else(|| {
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string())
    });
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db_url,
        args.pool_size
    );
    let connections = match Connections::init(&db_url, args.pool_size) {
        Ok(connections) => connections,
        Err(err) => {
            eprintln!("Could not open database '{}': {}", db_url, err);
            process::exit(1);
        }
    };
    smartpark_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());

    let result = match args.command {
        None | Some(Command::Migrate) => Ok(()),
        Some(Command::Stats { username, password }) => print_stats(&connections, &username, &password),
        Some(Command::Seed) => seed(&connections),
    };
    if let Err(err) = result {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn print_stats(connections: &Connections, username: &str, password: &str) -> anyhow::Result<()> {
    let account = flows::login(connections, username, password).context("Login failed")?;
    let stats = flows::gather_stats(connections, account.id)?;
    println!("Users           : {}", stats.users);
    println!("  verified      : {}", stats.verified_users);
    println!("Parking spaces  : {}", stats.spaces);
    println!("Bookings        : {}", stats.bookings);
    Ok(())
}

fn register_or_skip(
    connections: &Connections,
    new_user: usecases::NewUser,
) -> anyhow::Result<Option<User>> {
    use smartpark_application::error::{AppError, BError};
    match flows::register_user(connections, new_user) {
        Ok(user) => Ok(Some(user)),
        Err(AppError::Business(BError::Parameter(usecases::Error::UserExists))) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn seed(connections: &Connections) -> anyhow::Result<()> {
    let admin = register_or_skip(
        connections,
        usecases::NewUser {
            username: "admin".into(),
            email: "admin@smartpark.example".into(),
            phone: None,
            password: "changeme".into(),
        },
    )?;
    let Some(admin) = admin else {
        log::info!("Database already seeded");
        return Ok(());
    };

    let alice = register_or_skip(
        connections,
        usecases::NewUser {
            username: "alice".into(),
            email: "alice@smartpark.example".into(),
            phone: Some("+4912345".into()),
            password: "changeme".into(),
        },
    )?
    .expect("fresh database");
    flows::set_user_verified(connections, admin.id, alice.id, true)?;

    let draft = |title: &str, address: &str, price_per_hour| usecases::SpaceDraft {
        title: title.into(),
        description: "Seeded demo listing".into(),
        address: address.into(),
        latitude: None,
        longitude: None,
        price_per_hour,
        availability_start: TimeOfDay::from_hm(8, 0).expect("valid time"),
        availability_end: TimeOfDay::from_hm(20, 0).expect("valid time"),
        active: true,
    };
    flows::create_space(connections, alice.id, draft("Downtown Garage", "1 Main St", 5.0))?;
    flows::create_space(connections, alice.id, draft("Airport Lot", "2 Airport Rd", 20.0))?;
    log::info!("Seeded demo data");
    Ok(())
}
