use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use courier_optimizer::solver::{cost_engine::CostEngine, route_search::SearchStrategy};
use tracing::{info, warn};

use crate::file_utils::{read_catalog, read_folder, read_order};

#[derive(Args)]
pub struct BatchArgs {
    /// Folder of order JSON files, or a single order file
    #[arg(short = 'i', long)]
    dataset: PathBuf,

    /// Catalog JSON file, defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[arg(short, long, default_value_t = SearchStrategy::Exhaustive)]
    strategy: SearchStrategy,
}

pub fn run(args: BatchArgs) -> Result<(), anyhow::Error> {
    info!("Quoting orders from {:?}", args.dataset);
    let paths = if args.dataset.is_file() {
        vec![args.dataset]
    } else {
        read_folder(&args.dataset)?
    };

    let engine =
        CostEngine::new(read_catalog(args.catalog.as_deref())?).with_strategy(args.strategy);

    let mut table = Table::new();
    table.set_header(vec!["Order", "Route", "Minimum cost"]);

    for path in paths {
        let name = path.display().to_string();
        let quote = match read_order(&path).and_then(|order| engine.quote(&order).map_err(Into::into)) {
            Ok(quote) => quote,
            Err(error) => {
                warn!("{}: {:#}", name, error);
                table.add_row(vec![name, String::from("-"), format!("error: {error}")]);
                continue;
            }
        };

        table.add_row(vec![
            name,
            quote.route.join(" -> "),
            quote.minimum_cost.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
