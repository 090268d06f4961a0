mod traversal;
mod tree;

pub use traversal::{
	CATEGORY_MISMATCH_PENALTY, MAX_PROXIMITY_PENALTY, STORE_MISMATCH_PENALTY, proximity_penalty,
};
pub use tree::{Node, SearchTree};

use std::{cmp::Ordering, time::Instant};

use shelf_domain::{Catalog, ConstraintSpec, Item, RetrievalOutcome, RetrievalStrategy, SortOrder};

/// Walks one catalog snapshot with the strategy named in `spec`.
///
/// Every strategy applies the full predicate to each visited item, so the candidate set is the
/// same for all of them; only `total_scanned` and the unsorted visit order differ.
pub fn retrieve(catalog: &Catalog, tree: &SearchTree, spec: &ConstraintSpec) -> RetrievalOutcome {
	let started = Instant::now();
	let strategy = spec.strategy();
	let traversal = match strategy {
		RetrievalStrategy::Scan => traversal::scan(catalog, spec),
		RetrievalStrategy::BreadthFirst => traversal::breadth_first(catalog, tree, spec),
		RetrievalStrategy::DepthFirst => traversal::depth_first(catalog, tree, spec),
		RetrievalStrategy::Priority => traversal::priority(catalog, tree, spec),
	};
	let mut matches: Vec<&Item> =
		traversal.matches.iter().filter_map(|pos| catalog.item_at(*pos)).collect();

	sort_candidates(&mut matches, spec.sort());

	if let Some(max) = spec.max_results() {
		matches.truncate(max);
	}

	let candidate_ids: Vec<String> = matches.iter().map(|item| item.id.clone()).collect();
	let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;

	tracing::info!(
		strategy = %strategy,
		candidates = candidate_ids.len(),
		scanned = traversal.scanned,
		elapsed_ms,
		"Retrieval completed."
	);

	RetrievalOutcome::new(candidate_ids, strategy, traversal.scanned, elapsed_ms)
}

/// Stable sort, so equal keys keep their traversal order.
fn sort_candidates(items: &mut [&Item], order: SortOrder) {
	let cmp: fn(&&Item, &&Item) -> Ordering = match order {
		SortOrder::None => return,
		SortOrder::PriceAsc => |a, b| a.price.total_cmp(&b.price),
		SortOrder::PriceDesc => |a, b| b.price.total_cmp(&a.price),
		SortOrder::RatingAsc => |a, b| a.seller_rating.total_cmp(&b.seller_rating),
		SortOrder::RatingDesc => |a, b| b.seller_rating.total_cmp(&a.seller_rating),
	};

	items.sort_by(cmp);
}
