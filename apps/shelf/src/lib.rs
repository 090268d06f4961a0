use std::{io, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use shelf_domain::ConstraintRequest;
use shelf_service::{RankRequest, ShelfService, ranking::AnnealingGrid};

#[derive(Debug, Parser)]
#[command(
	version = shelf_cli::VERSION,
	rename_all = "kebab",
	styles = shelf_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Catalog file (`.json` array or `.jsonl`); overrides `catalog.path` from the config.
	#[arg(long, value_name = "FILE")]
	pub catalog: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
#[command(rename_all = "kebab")]
pub enum Command {
	/// Retrieve candidates matching the filters.
	Search {
		#[command(flatten)]
		filters: FilterArgs,
	},
	/// Retrieve candidates, then re-rank them.
	Rank {
		#[command(flatten)]
		filters: FilterArgs,
		#[command(flatten)]
		rank: RankArgs,
	},
	/// Grid-search annealing schedules over the retrieved candidates.
	Tune {
		#[command(flatten)]
		filters: FilterArgs,
		#[command(flatten)]
		rank: RankArgs,
	},
	/// List categories with item counts.
	Categories,
}

#[derive(Clone, Debug, Default, ClapArgs)]
pub struct FilterArgs {
	#[arg(long, value_name = "PRICE")]
	pub price_min: Option<f64>,
	#[arg(long, value_name = "PRICE")]
	pub price_max: Option<f64>,
	#[arg(long, value_name = "NAME")]
	pub category: Option<String>,
	#[arg(long, value_name = "NAME")]
	pub store: Option<String>,
	/// Minimum seller rating, either `4.0` or `>=4.0`.
	#[arg(long, value_name = "RATING")]
	pub min_rating: Option<String>,
	#[arg(long, value_name = "ORDER")]
	pub sort_by: Option<String>,
	/// Traversal strategy: scan, bfs, dfs, or priority.
	#[arg(long, value_name = "NAME")]
	pub strategy: Option<String>,
	#[arg(long, value_name = "N")]
	pub max_results: Option<usize>,
}
impl FilterArgs {
	pub fn to_request(&self) -> color_eyre::Result<ConstraintRequest> {
		let min_rating =
			self.min_rating.as_deref().map(shelf_domain::parse_rating_bound).transpose()?;

		Ok(ConstraintRequest {
			price_min: self.price_min,
			price_max: self.price_max,
			category: self.category.clone(),
			min_rating,
			store: self.store.clone(),
			sort_by: self.sort_by.clone(),
			strategy: self.strategy.clone(),
			max_results: self.max_results,
		})
	}
}

#[derive(Clone, Debug, Default, ClapArgs)]
pub struct RankArgs {
	/// Ranking strategy: baseline, hill_climbing, or simulated_annealing.
	#[arg(long, value_name = "NAME")]
	pub rank_strategy: Option<String>,
	/// Category that earns the full category-match feature. Defaults to `--category`.
	#[arg(long, value_name = "NAME")]
	pub target_category: Option<String>,
	#[arg(long, value_name = "N")]
	pub k: Option<usize>,
	#[arg(long, value_name = "SEED")]
	pub seed: Option<u64>,
	/// Number of ranked items to return.
	#[arg(long, value_name = "N")]
	pub top: Option<usize>,
}
impl RankArgs {
	pub fn to_request(&self, filters: &FilterArgs) -> RankRequest {
		RankRequest {
			candidate_ids: Vec::new(),
			strategy: self.rank_strategy.clone(),
			weights: None,
			target_category: self.target_category.clone().or_else(|| filters.category.clone()),
			k: self.k,
			seed: self.seed,
			max_results: self.top,
		}
	}
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = shelf_config::load(&args.config)?;
	let filter =
		EnvFilter::try_new(&cfg.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

	let Some(catalog_path) = args.catalog.clone().or_else(|| cfg.catalog.path.clone()) else {
		return Err(eyre::eyre!("No catalog given. Pass --catalog or set catalog.path."));
	};
	let catalog = shelf_domain::load_catalog(&catalog_path, cfg.catalog.max_items)?;
	let service = ShelfService::new(cfg, catalog);

	match &args.command {
		Command::Search { filters } => print_json(&service.retrieve(&filters.to_request()?)?),
		Command::Rank { filters, rank } => print_json(
			&service.search_and_rank(&filters.to_request()?, &rank.to_request(filters))?,
		),
		Command::Tune { filters, rank } => print_json(&service.tune_annealing(
			&filters.to_request()?,
			&rank.to_request(filters),
			&AnnealingGrid::default(),
		)?),
		Command::Categories => print_json(&service.categories()),
	}
}

fn print_json<T>(value: &T) -> color_eyre::Result<()>
where
	T: Serialize,
{
	let json = serde_json::to_string_pretty(value)?;

	println!("{json}");

	Ok(())
}
