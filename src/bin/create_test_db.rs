use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use sales_stats_rs::{
    seed::{FileSeedSource, reseed},
    stores::SQLiteTransactionStore,
};

/// A utility for creating a test database for the REST API server of sales_stats_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// File path to a JSON array of product sales to seed the database with.
    #[arg(long, short)]
    seed_file: String,
}

/// Create and populate a database for manual testing.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let store = SQLiteTransactionStore::new(conn)?;

    println!("Seeding transactions from {:#?}...", args.seed_file);
    let count = reseed(&store, &FileSeedSource::new(&args.seed_file)).await?;

    println!("Success! Created {count} transactions.");

    Ok(())
}
