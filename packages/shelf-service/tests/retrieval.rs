use std::collections::BTreeSet;

use shelf_domain::{Catalog, ConstraintRequest, ConstraintSpec, RetrievalStrategy};
use shelf_service::retrieval::{self, SearchTree};
use shelf_testkit::{demo_catalog, item, scenario_catalog};

fn spec(req: ConstraintRequest, strategy: RetrievalStrategy) -> ConstraintSpec {
	req.validate(strategy).expect("Request must validate.")
}

fn requests() -> Vec<ConstraintRequest> {
	vec![
		ConstraintRequest::default(),
		ConstraintRequest { category: Some("Computers".to_string()), ..Default::default() },
		ConstraintRequest { store: Some("logitech".to_string()), ..Default::default() },
		ConstraintRequest {
			category: Some("electronics".to_string()),
			store: Some("Sony".to_string()),
			..Default::default()
		},
		ConstraintRequest { price_min: Some(20.0), price_max: Some(50.0), ..Default::default() },
		ConstraintRequest { min_rating: Some(4.5), ..Default::default() },
		ConstraintRequest {
			category: Some("computers".to_string()),
			price_max: Some(40.0),
			min_rating: Some(4.4),
			..Default::default()
		},
		ConstraintRequest { category: Some("garden".to_string()), ..Default::default() },
	]
}

fn candidate_set(outcome: &shelf_domain::RetrievalOutcome) -> BTreeSet<String> {
	outcome.candidate_ids().iter().cloned().collect()
}

#[test]
fn all_strategies_agree_on_the_candidate_set() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let tree = SearchTree::build(&catalog);

	for req in requests() {
		let predicate = spec(req.clone(), RetrievalStrategy::Scan);
		let expected: BTreeSet<String> = catalog
			.iter()
			.filter(|item| predicate.matches(item))
			.map(|item| item.id.clone())
			.collect();

		for strategy in RetrievalStrategy::ALL {
			let outcome = retrieval::retrieve(&catalog, &tree, &predicate.with_strategy(strategy));

			assert_eq!(
				candidate_set(&outcome),
				expected,
				"Strategy {strategy} disagreed on {req:?}."
			);
			assert_eq!(outcome.strategy(), strategy);
			assert!(outcome.total_scanned() <= catalog.len());
		}
	}
}

#[test]
fn scenario_category_constraint_prunes_the_other_category() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let tree = SearchTree::build(&catalog);
	let req = ConstraintRequest { category: Some("home".to_string()), ..Default::default() };

	for strategy in RetrievalStrategy::ALL {
		let outcome = retrieval::retrieve(&catalog, &tree, &spec(req.clone(), strategy));
		let ids: BTreeSet<&str> = outcome.candidate_ids().iter().map(String::as_str).collect();

		assert_eq!(ids, BTreeSet::from(["A", "B"]));

		if strategy == RetrievalStrategy::Scan {
			assert_eq!(outcome.total_scanned(), 3);
		} else {
			assert!(outcome.total_scanned() < 3, "{strategy} scanned {}.", outcome.total_scanned());
		}
	}
}

#[test]
fn narrowing_category_or_store_never_scans_more() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let tree = SearchTree::build(&catalog);
	let base = ConstraintRequest { price_max: Some(60.0), ..Default::default() };
	let by_category = ConstraintRequest { category: Some("computers".to_string()), ..base.clone() };
	let by_store = ConstraintRequest { store: Some("logitech".to_string()), ..by_category.clone() };

	for strategy in RetrievalStrategy::ALL {
		let scanned = |req: &ConstraintRequest| {
			retrieval::retrieve(&catalog, &tree, &spec(req.clone(), strategy)).total_scanned()
		};

		assert!(scanned(&by_category) <= scanned(&base));
		assert!(scanned(&by_store) <= scanned(&by_category));
	}
}

#[test]
fn price_bounds_are_inclusive_to_the_cent() {
	let catalog = Catalog::new(vec![
		item("below", 9.99, 4.0, "home", "s"),
		item("at_min", 10.0, 4.0, "home", "s"),
		item("at_max", 20.0, 4.0, "home", "s"),
		item("above", 20.01, 4.0, "home", "s"),
	])
	.expect("Catalog must build.");
	let tree = SearchTree::build(&catalog);
	let req = ConstraintRequest { price_min: Some(10.0), price_max: Some(20.0), ..Default::default() };

	for strategy in RetrievalStrategy::ALL {
		let outcome = retrieval::retrieve(&catalog, &tree, &spec(req.clone(), strategy));

		assert_eq!(outcome.into_candidate_ids(), ["at_min", "at_max"]);
	}
}

#[test]
fn sort_orders_are_applied_before_truncation() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let tree = SearchTree::build(&catalog);
	let req = ConstraintRequest {
		category: Some("computers".to_string()),
		sort_by: Some("price_asc".to_string()),
		max_results: Some(3),
		..Default::default()
	};
	let outcome = retrieval::retrieve(&catalog, &tree, &spec(req, RetrievalStrategy::DepthFirst));

	assert_eq!(outcome.candidate_ids(), ["B07ABC9876", "B18YZA4444", "B08GFTPQ5B"]);
	assert_eq!(outcome.total_scanned(), 8);
}

#[test]
fn rating_descending_keeps_ties_in_traversal_order() {
	let catalog = Catalog::new(vec![
		item("a", 1.0, 4.0, "home", "s"),
		item("b", 1.0, 4.9, "home", "s"),
		item("c", 1.0, 4.0, "home", "s"),
	])
	.expect("Catalog must build.");
	let tree = SearchTree::build(&catalog);
	let req = ConstraintRequest { sort_by: Some("rating_desc".to_string()), ..Default::default() };
	let outcome = retrieval::retrieve(&catalog, &tree, &spec(req, RetrievalStrategy::Scan));

	assert_eq!(outcome.candidate_ids(), ["b", "a", "c"]);
}

#[test]
fn empty_catalog_yields_empty_outcome() {
	let catalog = Catalog::empty();
	let tree = SearchTree::build(&catalog);

	for strategy in RetrievalStrategy::ALL {
		let outcome = retrieval::retrieve(&catalog, &tree, &ConstraintSpec::unconstrained(strategy));

		assert!(outcome.is_empty());
		assert_eq!(outcome.total_scanned(), 0);
	}
}

#[test]
fn outcome_serializes_with_snake_case_strategy() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let tree = SearchTree::build(&catalog);
	let outcome = retrieval::retrieve(
		&catalog,
		&tree,
		&ConstraintSpec::unconstrained(RetrievalStrategy::BreadthFirst),
	);
	let json = serde_json::to_value(&outcome).expect("Outcome must serialize.");

	assert_eq!(json["strategy"], "bfs");
	assert_eq!(json["total_scanned"], 3);
	assert_eq!(json["candidate_ids"], serde_json::json!(["A", "B", "C"]));
}
