use std::io::Write;

use clap::{Parser, Subcommand};
use plp_catalog::{CatalogClient, CatalogError};
use plp_core::{apply_sort, AppConfig, Product, SortOption};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "plp-cli")]
#[command(about = "Product listing command line interface")]
struct Cli {
    /// Catalog endpoint; overrides `PLP_CATALOG_URL`.
    #[arg(long, global = true, env = "PLP_CATALOG_URL")]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog once and print it in the chosen order
    List {
        #[arg(long, default_value = "recommended", value_parser = parse_sort)]
        sort: SortOption,

        /// Print the sorted products as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn parse_sort(raw: &str) -> Result<SortOption, String> {
    raw.parse::<SortOption>().map_err(|e| {
        let valid: Vec<&str> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
        format!("{e} (expected one of: {})", valid.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = plp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = catalog_client(cli.catalog_url.as_deref(), &config)?;

    match cli.command {
        Commands::List { sort, json } => {
            let products = client.fetch_products().await?;
            let sorted = apply_sort(&products, sort);
            tracing::debug!(%sort, count = sorted.len(), "listing catalog");

            let mut out = std::io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &sorted)?;
                writeln!(out)?;
            } else {
                for product in &sorted {
                    writeln!(out, "{}", format_line(product))?;
                }
            }
        }
    }

    Ok(())
}

/// Builds the client for `--catalog-url` when given, else the configured
/// endpoint. Only the URL actually used is validated.
fn catalog_client(
    flag_url: Option<&str>,
    config: &AppConfig,
) -> Result<CatalogClient, CatalogError> {
    CatalogClient::new(
        flag_url.unwrap_or(&config.catalog_url),
        config.catalog_timeout_secs,
        &config.user_agent,
    )
}

fn format_line(product: &Product) -> String {
    format!(
        "{:>6}  {:>10}  {}",
        product.id,
        product.display_price(),
        product.title
    )
}
