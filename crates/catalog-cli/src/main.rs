mod catalog;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use catalog_core::CatalogError;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Browse the product catalog from the command line")]
struct Cli {
    /// YAML catalog file to read instead of the built-in catalog
    #[arg(long, global = true, env = "CATALOG_DATA_PATH")]
    data: Option<PathBuf>,
    /// Print the same JSON envelopes the HTTP API returns
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, best sellers first
    List {
        /// Page number, starting at 1
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,
        /// Products per page (default 16)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<String>,
    },
    /// Show full details for one product
    Get {
        /// Product id
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Show the catalog's lowest and highest price
    PriceLimits,
    /// List products within a price range
    Filter {
        /// Lowest price to include
        #[arg(long, allow_hyphen_values = true)]
        min_price: Option<String>,
        /// Highest price to include
        #[arg(long, allow_hyphen_values = true)]
        max_price: Option<String>,
        /// Page number, starting at 1
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,
        /// Products per page (default 16)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<String>,
        /// Only keep products whose name, description or category contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Load and integrity-check a catalog file
    Validate {
        /// Path to the YAML catalog
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("catalog-cli: no command given; run with --help for usage");
        return Ok(ExitCode::SUCCESS);
    };

    let result = run(command, cli.data.as_deref(), cli.json);

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<CatalogError>() {
            Some(catalog_err) => {
                output::print_catalog_error(catalog_err, cli.json)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

fn run(command: Commands, data: Option<&Path>, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::List { page, page_size } => catalog::run_list(
            &catalog::open_service(data)?,
            &catalog::PageArgs {
                page: page.as_deref(),
                page_size: page_size.as_deref(),
            },
            json,
        ),
        Commands::Get { id } => catalog::run_get(&catalog::open_service(data)?, &id, json),
        Commands::PriceLimits => catalog::run_price_limits(&catalog::open_service(data)?, json),
        Commands::Filter {
            min_price,
            max_price,
            page,
            page_size,
            search,
        } => catalog::run_filter(
            &catalog::open_service(data)?,
            &catalog::FilterArgs {
                min_price: min_price.as_deref(),
                max_price: max_price.as_deref(),
                paging: catalog::PageArgs {
                    page: page.as_deref(),
                    page_size: page_size.as_deref(),
                },
                search: search.as_deref().unwrap_or_default(),
            },
            json,
        ),
        Commands::Validate { path } => catalog::run_validate(&path, json),
    }
}

#[cfg(test)]
mod tests;
