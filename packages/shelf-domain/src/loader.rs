use std::{fs, path::Path};

use crate::{Catalog, Error, Item, Result};

/// Loads a catalog from a JSON array (`.json`) or JSON Lines (`.jsonl`) file.
pub fn load_catalog(path: &Path, max_items: Option<usize>) -> Result<Catalog> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;
	let is_lines = path
		.extension()
		.and_then(|ext| ext.to_str())
		.map(|ext| ext.eq_ignore_ascii_case("jsonl"))
		.unwrap_or(false);
	let mut items = if is_lines {
		parse_json_lines(path, &raw, max_items)?
	} else {
		serde_json::from_str::<Vec<Item>>(&raw).map_err(|err| Error::ParseCatalog {
			path: path.to_path_buf(),
			line: err.line(),
			source: err,
		})?
	};

	if let Some(max) = max_items {
		items.truncate(max);
	}

	let catalog = Catalog::new(items)?;

	tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded.");

	Ok(catalog)
}

fn parse_json_lines(path: &Path, raw: &str, max_items: Option<usize>) -> Result<Vec<Item>> {
	let mut items = Vec::new();

	for (idx, line) in raw.lines().enumerate() {
		if max_items.map(|max| items.len() >= max).unwrap_or(false) {
			break;
		}

		let line = line.trim();

		if line.is_empty() {
			continue;
		}

		let item = serde_json::from_str::<Item>(line).map_err(|err| Error::ParseCatalog {
			path: path.to_path_buf(),
			line: idx + 1,
			source: err,
		})?;

		items.push(item);
	}

	Ok(items)
}
