use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{Error, Item, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
	pub name: String,
	pub count: usize,
}

/// Read-only item collection for one snapshot.
///
/// Items keep their insertion order; the category index is keyed by the lower-cased
/// category name so lookups are case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	items: Vec<Item>,
	positions: HashMap<String, usize>,
	by_category: BTreeMap<String, Vec<usize>>,
}
impl Catalog {
	pub fn new(items: Vec<Item>) -> Result<Self> {
		let mut positions = HashMap::with_capacity(items.len());
		let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();

		for (pos, item) in items.iter().enumerate() {
			item.validate()?;

			if positions.insert(item.id.clone(), pos).is_some() {
				return Err(Error::DuplicateItem { id: item.id.clone() });
			}

			by_category.entry(item.category_key()).or_default().push(pos);
		}

		Ok(Self { items, positions, by_category })
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn get(&self, id: &str) -> Option<&Item> {
		self.positions.get(id).map(|pos| &self.items[*pos])
	}

	pub fn contains(&self, id: &str) -> bool {
		self.positions.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Item> {
		self.items.iter()
	}

	/// Position-addressed access for index structures built over this catalog.
	pub fn item_at(&self, pos: usize) -> Option<&Item> {
		self.items.get(pos)
	}

	pub fn ids(&self) -> Vec<&str> {
		self.items.iter().map(|item| item.id.as_str()).collect()
	}

	pub fn ids_in_category(&self, category: &str) -> Vec<&str> {
		self.by_category
			.get(&category.trim().to_lowercase())
			.map(|positions| positions.iter().map(|pos| self.items[*pos].id.as_str()).collect())
			.unwrap_or_default()
	}

	/// Category names with item counts, sorted by lower-cased name. The display name is the
	/// spelling of the first item seen in each category.
	pub fn categories(&self) -> Vec<CategorySummary> {
		self.by_category
			.values()
			.filter_map(|positions| {
				let first = positions.first()?;

				Some(CategorySummary {
					name: self.items[*first].category.clone(),
					count: positions.len(),
				})
			})
			.collect()
	}
}
impl<'a> IntoIterator for &'a Catalog {
	type IntoIter = std::slice::Iter<'a, Item>;
	type Item = &'a Item;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
