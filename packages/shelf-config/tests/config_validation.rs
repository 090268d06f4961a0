use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use shelf_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &[&str], key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let mut table = root.as_table_mut().expect("Sample config must be a table.");

	for name in section {
		table = table
			.get_mut(*name)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Sample config must include [{name}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("shelf_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> shelf_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = shelf_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(err.to_string().contains(expected), "Unexpected error message: {err}");
}

#[test]
fn sample_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TOML.to_string()).expect("Sample config must load.");

	assert_eq!(cfg.retrieval.strategy, "bfs");
	assert_eq!(cfg.ranking.strategy, "hill_climbing");
	assert_eq!(cfg.ranking.k, 10);
	assert_eq!(cfg.ranking.annealing.seed, Some(42));
	assert_eq!(cfg.catalog.max_items, Some(500));
}

#[test]
fn minimal_config_uses_defaults() {
	let cfg = load_payload("[service]\nlog_level = \"debug\"\n".to_string())
		.expect("Minimal config must load.");

	assert_eq!(cfg.retrieval.strategy, "scan");
	assert_eq!(cfg.ranking.strategy, "baseline");
	assert_eq!(cfg.ranking.k, 10);
	assert!(cfg.catalog.path.is_none());
	assert!((cfg.ranking.weights.rating - 0.35).abs() < 1e-12);
	assert_eq!(cfg.ranking.hill_climbing.patience, 50);
	assert_eq!(cfg.ranking.annealing.max_iterations, 2_000);
	assert!(cfg.ranking.annealing.seed.is_none());
}

#[test]
fn strategy_names_are_normalized() {
	let payload = sample_with(&["retrieval"], "strategy", Value::String(" Priority ".to_string()));
	let cfg = load_payload(payload).expect("Config must load.");

	assert_eq!(cfg.retrieval.strategy, "priority");
}

#[test]
fn blank_catalog_path_becomes_none() {
	let payload = sample_with(&["catalog"], "path", Value::String("  ".to_string()));
	let cfg = load_payload(payload).expect("Config must load.");

	assert!(cfg.catalog.path.is_none());
}

#[test]
fn unknown_retrieval_strategy_is_rejected() {
	expect_validation(
		sample_with(&["retrieval"], "strategy", Value::String("random".to_string())),
		"retrieval.strategy must be one of scan, bfs, dfs, or priority.",
	);
}

#[test]
fn unknown_ranking_strategy_is_rejected() {
	expect_validation(
		sample_with(&["ranking"], "strategy", Value::String("genetic".to_string())),
		"ranking.strategy must be one of baseline, hill_climbing, or simulated_annealing.",
	);
}

#[test]
fn k_must_be_positive() {
	expect_validation(
		sample_with(&["ranking"], "k", Value::Integer(0)),
		"ranking.k must be greater than zero.",
	);
}

#[test]
fn negative_weight_is_rejected() {
	expect_validation(
		sample_with(&["ranking", "weights"], "price", Value::Float(-0.1)),
		"ranking.weights.price must be zero or greater.",
	);
}

#[test]
fn all_zero_weights_are_rejected() {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let weights = root
		.get_mut("ranking")
		.and_then(|ranking| ranking.get_mut("weights"))
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [ranking.weights].");

	for key in ["price", "rating", "popularity", "category_match", "richness"] {
		weights.insert(key.to_string(), Value::Float(0.0));
	}

	expect_validation(
		toml::to_string(&root).expect("Failed to render config."),
		"ranking.weights must include at least one positive weight.",
	);
}

#[test]
fn hill_climbing_patience_must_be_positive() {
	expect_validation(
		sample_with(&["ranking", "hill_climbing"], "patience", Value::Integer(0)),
		"ranking.hill_climbing.patience must be greater than zero.",
	);
}

#[test]
fn cooling_rate_must_be_below_one() {
	expect_validation(
		sample_with(&["ranking", "annealing"], "cooling_rate", Value::Float(1.0)),
		"ranking.annealing.cooling_rate must be in the open range 0.0-1.0.",
	);
}

#[test]
fn min_temperature_must_stay_below_initial() {
	expect_validation(
		sample_with(&["ranking", "annealing"], "min_temperature", Value::Float(2.0)),
		"ranking.annealing.min_temperature must be less than ranking.annealing.initial_temperature.",
	);
}

#[test]
fn max_items_must_be_positive() {
	expect_validation(
		sample_with(&["catalog"], "max_items", Value::Integer(0)),
		"catalog.max_items must be greater than zero.",
	);
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("shelf_config_missing_file.toml");
	let err = shelf_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\nlog_level = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error: {err:?}");
}
