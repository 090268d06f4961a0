//! Catalog fixtures shared by the test suites of the shelf packages.

use shelf_domain::{Catalog, Item, Result};

const DEMO_CATALOG: &str = include_str!("../fixtures/demo_catalog.json");

/// Shorthand for an item with only the required fields set.
pub fn item(id: &str, price: f64, rating: f64, category: &str, store: &str) -> Item {
	Item::new(id, format!("Item {id}"), price, category, store, rating)
}

/// Three items across two categories: `A` and `B` in "home", `C` in "electronics".
///
/// `A` is cheaper and better rated than `B`; `B` carries the longer description.
pub fn scenario_catalog() -> Result<Catalog> {
	Catalog::new(scenario_items())
}

pub fn scenario_items() -> Vec<Item> {
	vec![
		item("A", 18.0, 4.8, "home", "hearth")
			.with_rating_count(320)
			.with_description("Linen throw."),
		item("B", 35.0, 4.5, "home", "hearth")
			.with_rating_count(140)
			.with_description(
				"Hand-woven wool blanket with reinforced edges, sized for a queen bed and \
				 washable on a cold cycle.",
			)
			.with_features(["wool", "queen size"]),
		item("C", 15.0, 4.0, "electronics", "voltage").with_rating_count(75),
	]
}

/// Twenty listings across three categories and several stores.
pub fn demo_catalog() -> Result<Catalog> {
	Catalog::new(demo_items())
}

pub fn demo_items() -> Vec<Item> {
	serde_json::from_str(DEMO_CATALOG).unwrap_or_else(|err| panic!("demo catalog fixture: {err}"))
}

/// Raw fixture text, for tests that exercise the loader.
pub fn demo_catalog_json() -> &'static str {
	DEMO_CATALOG
}
