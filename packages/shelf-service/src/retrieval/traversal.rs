use std::{
	cmp::Ordering,
	collections::{BinaryHeap, VecDeque},
};

use shelf_domain::{Catalog, ConstraintSpec, Item};

use super::tree::{Node, SearchTree};

pub const CATEGORY_MISMATCH_PENALTY: f64 = 100.0;
pub const STORE_MISMATCH_PENALTY: f64 = 75.0;
pub const MAX_PROXIMITY_PENALTY: f64 = 50.0;

const RATING_SHORTFALL_SCALE: f64 = 10.0;

/// Matching catalog positions in visit order plus the number of items visited.
#[derive(Debug, Default)]
pub struct Traversal {
	pub matches: Vec<usize>,
	pub scanned: usize,
}
impl Traversal {
	fn visit(&mut self, catalog: &Catalog, pos: usize, spec: &ConstraintSpec) {
		let Some(item) = catalog.item_at(pos) else {
			return;
		};

		self.scanned += 1;

		if spec.matches(item) {
			self.matches.push(pos);
		}
	}
}

pub fn scan(catalog: &Catalog, spec: &ConstraintSpec) -> Traversal {
	let mut out = Traversal::default();

	for pos in 0..catalog.len() {
		out.visit(catalog, pos, spec);
	}

	out
}

pub fn breadth_first(catalog: &Catalog, tree: &SearchTree, spec: &ConstraintSpec) -> Traversal {
	let mut out = Traversal::default();
	let mut queue = VecDeque::from([Node::Root]);

	while let Some(node) = queue.pop_front() {
		if tree.is_prunable(node, spec) {
			continue;
		}

		match node {
			Node::Item(pos) => out.visit(catalog, pos, spec),
			_ => queue.extend(tree.children(node)),
		}
	}

	out
}

pub fn depth_first(catalog: &Catalog, tree: &SearchTree, spec: &ConstraintSpec) -> Traversal {
	let mut out = Traversal::default();
	let mut stack = vec![Node::Root];

	while let Some(node) = stack.pop() {
		if tree.is_prunable(node, spec) {
			continue;
		}

		match node {
			Node::Item(pos) => out.visit(catalog, pos, spec),
			_ => stack.extend(tree.children(node).into_iter().rev()),
		}
	}

	out
}

/// Best-first walk: nodes closest to a perfect match are expanded first.
pub fn priority(catalog: &Catalog, tree: &SearchTree, spec: &ConstraintSpec) -> Traversal {
	let mut out = Traversal::default();
	let mut frontier = BinaryHeap::new();
	let mut seq = 0_u64;

	frontier.push(Frontier { penalty: 0.0, seq, node: Node::Root });

	while let Some(Frontier { node, .. }) = frontier.pop() {
		if tree.is_prunable(node, spec) {
			continue;
		}

		if let Node::Item(pos) = node {
			out.visit(catalog, pos, spec);

			continue;
		}

		for child in tree.children(node) {
			seq += 1;

			let penalty = node_penalty(catalog, tree, child, spec);

			frontier.push(Frontier { penalty, seq, node: child });
		}
	}

	out
}

/// Heuristic distance of `node` from a perfect match. Zero means every active constraint holds.
pub fn node_penalty(
	catalog: &Catalog,
	tree: &SearchTree,
	node: Node,
	spec: &ConstraintSpec,
) -> f64 {
	match node {
		Node::Root => 0.0,
		Node::Category(_) => {
			if tree.is_prunable(node, spec) { CATEGORY_MISMATCH_PENALTY } else { 0.0 }
		},
		Node::Store(_) => {
			if tree.is_prunable(node, spec) { STORE_MISMATCH_PENALTY } else { 0.0 }
		},
		Node::Item(pos) =>
			catalog.item_at(pos).map(|item| proximity_penalty(item, spec)).unwrap_or(0.0),
	}
}

/// Price distance outside the requested range plus a scaled rating shortfall, capped.
pub fn proximity_penalty(item: &Item, spec: &ConstraintSpec) -> f64 {
	let mut penalty = 0.0;

	if let Some(min) = spec.price_min()
		&& item.price < min
	{
		penalty += min - item.price;
	}
	if let Some(max) = spec.price_max()
		&& item.price > max
	{
		penalty += item.price - max;
	}
	if let Some(rating) = spec.min_rating()
		&& item.seller_rating < rating
	{
		penalty += (rating - item.seller_rating) * RATING_SHORTFALL_SCALE;
	}

	penalty.min(MAX_PROXIMITY_PENALTY)
}

#[derive(Debug)]
struct Frontier {
	penalty: f64,
	seq: u64,
	node: Node,
}
impl Ord for Frontier {
	// Reversed so the max-heap pops the smallest penalty, then the earliest push.
	fn cmp(&self, other: &Self) -> Ordering {
		other.penalty.total_cmp(&self.penalty).then_with(|| other.seq.cmp(&self.seq))
	}
}
impl PartialOrd for Frontier {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl PartialEq for Frontier {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}
impl Eq for Frontier {}
