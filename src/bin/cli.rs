//! Stockroom CLI
//!
//! Command-line interface over an inventory file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom::record::code;
use stockroom::{report, Config, Inventory, Record, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockroom CLI
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Inventory manager over a flat delimited file")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, default_value = "inventory.txt")]
    file: PathBuf,

    /// Create the file (header only) if it does not exist
    #[arg(long)]
    create: bool,

    /// Skip fsync after writes
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every record
    View,

    /// Show every record with its stock value (cost * quantity)
    Value,

    /// Search for a record by product code
    Search {
        /// Product code, e.g. SKU12345 (case and spaces ignored)
        code: String,
    },

    /// Add a new record
    Add {
        #[arg(long)]
        country: String,

        /// Product code, e.g. SKU12345 (case and spaces ignored)
        #[arg(long)]
        code: String,

        #[arg(long)]
        product: String,

        /// Unit cost without currency symbol
        #[arg(long)]
        cost: f64,

        #[arg(long)]
        quantity: i64,
    },

    /// Show the record with the lowest quantity
    Lowest,

    /// Print a sale notice for the record with the highest quantity
    Highest,

    /// Restock the lowest-quantity record (or a specific code)
    Restock {
        /// Amount to add to the current quantity
        #[arg(allow_hyphen_values = true)]
        amount: i64,

        /// Restock this product code instead of the lowest one
        #[arg(long)]
        code: Option<String>,
    },
}

fn main() {
    // Initialize tracing/logging (stderr, so tables on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> stockroom::Result<()> {
    let sync_strategy = if args.no_sync {
        SyncStrategy::OsBuffered
    } else {
        SyncStrategy::EveryWrite
    };

    // Build config from args
    let config = Config::builder()
        .inventory_path(&args.file)
        .create_if_missing(args.create)
        .sync_strategy(sync_strategy)
        .build();

    let inventory = Inventory::open(config)?;
    tracing::debug!("Stockroom v{}: {} records", stockroom::VERSION, inventory.len());

    match args.command {
        Commands::View => {
            print!("{}", report::render_records(&inventory.records()));
        }
        Commands::Value => {
            print!("{}", report::render_values(&inventory.records()));
        }
        Commands::Search { code: input } => {
            let code = code::normalize(&input)?;
            match inventory.by_code(&code) {
                Some(record) => print!("{}", record),
                None => return Err(stockroom::InventoryError::RecordNotFound(code)),
            }
        }
        Commands::Add {
            country,
            code: input,
            product,
            cost,
            quantity,
        } => {
            let code = code::normalize(&input)?;
            let pos = inventory.add(Record::new(country, code, product, cost, quantity))?;
            println!("Record added at position {}.", pos);
        }
        Commands::Lowest => {
            let (_, record) = inventory.lowest()?;
            println!("{}", report::low_stock_notice(&record));
        }
        Commands::Highest => {
            let (_, record) = inventory.highest()?;
            println!("{}", report::sale_notice(&record));
        }
        Commands::Restock { amount, code: None } => {
            let outcome = inventory.restock_lowest(amount)?;
            print_restock(&outcome);
        }
        Commands::Restock {
            amount,
            code: Some(input),
        } => {
            let code = code::normalize(&input)?;
            let outcome = inventory.restock_code(&code, amount)?;
            print_restock(&outcome);
        }
    }

    Ok(())
}

fn print_restock(outcome: &stockroom::Restock) {
    println!(
        "{} has been restocked. Stock went from {} to {}.",
        outcome.record.product(),
        outcome.previous_quantity,
        outcome.record.quantity()
    );
}
