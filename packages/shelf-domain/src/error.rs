pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Validation failed: {reason}")]
	Validation { reason: String },
	#[error("Unknown strategy '{name}'. Valid options: {}.", valid_options.join(", "))]
	UnknownStrategy { name: String, valid_options: Vec<String> },
	#[error("Duplicate item id '{id}'.")]
	DuplicateItem { id: String },
	#[error("Failed to read catalog at {path:?}.")]
	ReadCatalog { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse catalog at {path:?} (line {line}).")]
	ParseCatalog { path: std::path::PathBuf, line: usize, source: serde_json::Error },
}
impl Error {
	pub(crate) fn validation(reason: impl Into<String>) -> Self {
		Self::Validation { reason: reason.into() }
	}
}
