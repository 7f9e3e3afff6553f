use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use courier_optimizer::solver::{
    cost_engine::CostEngine, quote::Quote, route_search::SearchStrategy,
};
use tracing::info;

use crate::file_utils::{read_catalog, read_order};

#[derive(Args)]
pub struct QuoteArgs {
    /// Order JSON file (product code -> quantity), `-` reads stdin
    #[arg(short = 'i', long)]
    order: PathBuf,

    /// Catalog JSON file, defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[arg(short, long, default_value_t = SearchStrategy::Exhaustive)]
    strategy: SearchStrategy,

    /// Print every leg of the cheapest route
    #[arg(long)]
    legs: bool,

    /// Print the whole quote as JSON
    #[arg(long, conflicts_with = "legs")]
    json: bool,
}

pub fn run(args: QuoteArgs) -> Result<(), anyhow::Error> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    let order = read_order(&args.order)?;
    let engine = CostEngine::new(catalog).with_strategy(args.strategy);

    let quote = engine.quote(&order)?;
    info!(
        search = engine.search_name(),
        cost = quote.total_cost,
        "quote computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    if args.legs {
        println!("{}", legs_table(&quote));
    }

    println!("{}", quote.minimum_cost);

    Ok(())
}

fn legs_table(quote: &Quote) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["From", "To", "Kind", "Weight", "Distance", "Cost"]);

    for leg in &quote.legs {
        table.add_row(vec![
            leg.from.clone(),
            leg.to.clone(),
            format!("{:?}", leg.kind),
            leg.weight.to_string(),
            leg.distance.to_string(),
            leg.cost.to_string(),
        ]);
    }

    table
}
