//! Fill the demo account with freshly generated transactions.

use std::process::ExitCode;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use rusqlite::Connection;
use time::OffsetDateTime;

use welth::{
    initialize_db,
    logging::setup_logging,
    seed::{GeneratorConfig, SeedTarget, seed_transactions},
};

/// Replace the demo account's transactions with random ones.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database, created if missing.
    #[arg(long)]
    db_path: String,

    /// Seed for the random number generator, for reproducible data.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let conn = match Connection::open(&args.db_path) {
        Ok(conn) => conn,
        Err(error) => {
            eprintln!("Could not open database {}: {error}", args.db_path);
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = initialize_db(&conn) {
        eprintln!("Could not initialize database: {error}");
        return ExitCode::FAILURE;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = GeneratorConfig::default();
    let today = OffsetDateTime::now_utc().date();

    let result = seed_transactions(&SeedTarget::demo(), &config, today, &mut rng, &conn);

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("Could not serialize the result: {error}"),
    }

    if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
