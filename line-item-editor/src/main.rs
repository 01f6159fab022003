//! Line Item Editor entry point.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use line_item_editor::config::EditorConfig;
use line_item_editor::models::TransactionDirection;
use line_item_editor::services::replay::{load_catalog, load_script, load_warehouses};
use line_item_editor::services::{
    get_metrics, init_metrics, replay, DocumentSummary, SearchHit,
};
use service_core::config::AppContext;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[derive(Parser)]
#[command(name = "line-item-editor")]
#[command(about = "Replay line item editor sessions against a product catalog")]
#[command(version)]
struct Cli {
    /// Dump Prometheus metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted editing session and print the resulting document
    Replay {
        /// Product catalog JSON array
        #[arg(long)]
        catalog: PathBuf,

        /// Warehouse list JSON array (default: no warehouses)
        #[arg(long)]
        warehouses: Option<PathBuf>,

        /// Session script JSON
        #[arg(long)]
        script: PathBuf,

        /// Include the per-action editor trace
        #[arg(long)]
        trace: bool,
    },

    /// Search the catalog the way the product picker does
    Search {
        /// Product catalog JSON array
        #[arg(long)]
        catalog: PathBuf,

        /// Price column to show
        #[arg(long, value_enum, default_value = "sale")]
        direction: TransactionDirection,

        /// Name or SKU fragment
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(e.exit_code());
        }
    };

    init_tracing(&config.service_name, &config.log_level, config.common.log_json);
    init_metrics();

    tracing::info!(
        version = %config.service_version,
        api_base_url = %config.common.api_base_url,
        currency = %config.common.currency,
        "Starting line-item-editor"
    );

    let ctx = config.context();
    let result = run(cli.command, &ctx);

    if cli.metrics {
        eprintln!("{}", get_metrics());
    }

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}

fn run(command: Commands, ctx: &AppContext) -> Result<(), AppError> {
    match command {
        Commands::Replay {
            catalog,
            warehouses,
            script,
            trace,
        } => {
            let catalog = load_catalog(&catalog)?;
            let warehouses = match warehouses {
                Some(path) => load_warehouses(&path)?,
                None => Vec::new(),
            };
            let script = load_script(&script)?;

            tracing::info!(
                products = catalog.len(),
                warehouses = warehouses.len(),
                actions = script.actions.len(),
                "Fixtures loaded"
            );

            let outcome = replay(&script, &catalog, &warehouses, ctx.currency())?;
            let summary = DocumentSummary::from(&outcome.document);

            let output = if trace {
                serde_json::json!({ "document": summary, "steps": outcome.steps })
            } else {
                serde_json::to_value(&summary)?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Search {
            catalog,
            direction,
            query,
        } => {
            let catalog = load_catalog(&catalog)?;
            let field = direction.price_field();
            let hits: Vec<SearchHit> = catalog
                .search(&query)
                .into_iter()
                .map(|entry| SearchHit::from_entry(entry, field, ctx))
                .collect();

            tracing::info!(query = %query, hits = hits.len(), "Catalog searched");
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_direction_defaults_to_sale() {
        let cli =
            Cli::try_parse_from(["line-item-editor", "search", "--catalog", "c.json", "bolt"])
                .unwrap();
        match cli.command {
            Commands::Search { direction, .. } => {
                assert_eq!(direction, TransactionDirection::Sale)
            }
            Commands::Replay { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn test_search_rejects_unknown_direction() {
        let parsed = Cli::try_parse_from([
            "line-item-editor",
            "search",
            "--catalog",
            "c.json",
            "--direction",
            "purchas",
            "bolt",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from([
            "line-item-editor",
            "search",
            "--catalog",
            "c.json",
            "--direction",
            "purchase",
            "bolt",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Search {
                direction: TransactionDirection::Purchase,
                ..
            }
        ));
    }
}
