use std::collections::HashMap;

use shelf_domain::{Catalog, ConstraintSpec};

/// A position in the [`SearchTree`]. Category and store variants index the tree's own node
/// arrays; item variants carry the catalog position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Node {
	Root,
	Category(usize),
	Store(usize),
	Item(usize),
}

#[derive(Clone, Debug)]
struct CategoryNode {
	key: String,
	stores: Vec<usize>,
}

#[derive(Clone, Debug)]
struct StoreNode {
	key: String,
	items: Vec<usize>,
}

/// Root → category → store → item hierarchy over one catalog snapshot.
///
/// Children appear in order of first occurrence in the catalog, so a depth-first walk that
/// expands the first child first visits items in catalog order within each store.
#[derive(Clone, Debug, Default)]
pub struct SearchTree {
	categories: Vec<CategoryNode>,
	stores: Vec<StoreNode>,
	items: usize,
}
impl SearchTree {
	pub fn build(catalog: &Catalog) -> Self {
		let mut categories: Vec<CategoryNode> = Vec::new();
		let mut stores: Vec<StoreNode> = Vec::new();
		let mut category_index: HashMap<String, usize> = HashMap::new();
		let mut store_index: HashMap<(usize, String), usize> = HashMap::new();

		for (pos, item) in catalog.iter().enumerate() {
			let category_key = item.category_key();
			let category = match category_index.get(&category_key) {
				Some(idx) => *idx,
				None => {
					categories.push(CategoryNode { key: category_key.clone(), stores: Vec::new() });
					category_index.insert(category_key, categories.len() - 1);

					categories.len() - 1
				},
			};
			let store_key = item.store_key();
			let store = match store_index.get(&(category, store_key.clone())) {
				Some(idx) => *idx,
				None => {
					stores.push(StoreNode { key: store_key.clone(), items: Vec::new() });
					categories[category].stores.push(stores.len() - 1);
					store_index.insert((category, store_key), stores.len() - 1);

					stores.len() - 1
				},
			};

			stores[store].items.push(pos);
		}

		Self { categories, stores, items: catalog.len() }
	}

	pub fn category_count(&self) -> usize {
		self.categories.len()
	}

	pub fn store_count(&self) -> usize {
		self.stores.len()
	}

	pub fn item_count(&self) -> usize {
		self.items
	}

	pub fn children(&self, node: Node) -> Vec<Node> {
		match node {
			Node::Root => (0..self.categories.len()).map(Node::Category).collect(),
			Node::Category(idx) => self
				.categories
				.get(idx)
				.map(|category| category.stores.iter().copied().map(Node::Store).collect())
				.unwrap_or_default(),
			Node::Store(idx) => self
				.stores
				.get(idx)
				.map(|store| store.items.iter().copied().map(Node::Item).collect())
				.unwrap_or_default(),
			Node::Item(_) => Vec::new(),
		}
	}

	/// Lower-cased category or store name for interior nodes.
	pub fn key(&self, node: Node) -> Option<&str> {
		match node {
			Node::Category(idx) => self.categories.get(idx).map(|category| category.key.as_str()),
			Node::Store(idx) => self.stores.get(idx).map(|store| store.key.as_str()),
			Node::Root | Node::Item(_) => None,
		}
	}

	/// True when no item below `node` can satisfy `spec`.
	pub fn is_prunable(&self, node: Node, spec: &ConstraintSpec) -> bool {
		match node {
			Node::Category(_) => self.key(node).is_some_and(|key| !spec.matches_category(key)),
			Node::Store(_) => self.key(node).is_some_and(|key| !spec.matches_store(key)),
			Node::Root | Node::Item(_) => false,
		}
	}
}
