use rand::Rng;
use serde::Serialize;

use crate::ranking::{AnnealingParams, HillClimbingParams, cmp_f64_desc, metric::ndcg_at_k};

/// Result of one optimizer call: a permutation of candidate indices and how it was reached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimizerRun {
	pub order: Vec<usize>,
	pub objective: f64,
	pub iterations: u32,
	/// Hill climbing: the objective after each applied swap, starting with the initial value.
	/// Annealing: the current objective after each iteration, starting with the initial value.
	pub trajectory: Vec<f64>,
}

/// Indices of `scores` sorted by descending score; ties keep input order.
pub fn sorted_order(scores: &[f64]) -> Vec<usize> {
	let mut order: Vec<usize> = (0..scores.len()).collect();

	order.sort_by(|a, b| cmp_f64_desc(scores[*a], scores[*b]));

	order
}

pub fn objective(scores: &[f64], order: &[usize], k: usize) -> f64 {
	let ordered: Vec<f64> = order.iter().map(|idx| scores[*idx]).collect();

	ndcg_at_k(&ordered, k)
}

pub fn baseline(scores: &[f64], k: usize) -> OptimizerRun {
	let order = sorted_order(scores);
	let objective = objective(scores, &order, k);

	OptimizerRun { order, objective, iterations: 0, trajectory: vec![objective] }
}

/// Steepest-ascent local search over adjacent swaps.
///
/// Each round applies the single best strictly-improving swap. The objective never decreases
/// from one round to the next.
pub fn hill_climb(
	scores: &[f64],
	start: Vec<usize>,
	k: usize,
	params: &HillClimbingParams,
) -> OptimizerRun {
	let mut order = start;
	let mut current = objective(scores, &order, k);
	let mut trajectory = vec![current];
	let mut iterations = 0_u32;
	let mut stalled = 0_u32;

	while iterations < params.max_iterations {
		let mut best: Option<(usize, f64)> = None;

		for pos in 0..order.len().saturating_sub(1) {
			order.swap(pos, pos + 1);

			let candidate = objective(scores, &order, k);

			order.swap(pos, pos + 1);

			if candidate > current && best.is_none_or(|(_, value)| candidate > value) {
				best = Some((pos, candidate));
			}
		}

		let Some((pos, value)) = best else {
			tracing::debug!(
				iterations,
				objective = current,
				"Hill climbing reached a local optimum."
			);

			break;
		};
		let gain = value - current;

		order.swap(pos, pos + 1);
		current = value;
		iterations += 1;
		trajectory.push(current);

		if gain < params.min_gain {
			stalled += 1;

			if stalled >= params.patience {
				tracing::debug!(
					iterations,
					objective = current,
					"Hill climbing ran out of patience."
				);

				break;
			}
		} else {
			stalled = 0;
		}
	}

	OptimizerRun { order, objective: current, iterations, trajectory }
}

/// Simulated annealing over random adjacent swaps, returning the best ordering seen.
///
/// All randomness comes from `rng`; a seeded generator makes the run reproducible.
pub fn anneal<R>(
	scores: &[f64],
	start: Vec<usize>,
	k: usize,
	params: &AnnealingParams,
	rng: &mut R,
) -> OptimizerRun
where
	R: Rng,
{
	let mut order = start;
	let mut current = objective(scores, &order, k);
	let mut best_order = order.clone();
	let mut best = current;
	let mut trajectory = vec![current];
	let mut temperature = params.initial_temperature;
	let mut iterations = 0_u32;

	if order.len() < 2 {
		return OptimizerRun { order, objective: current, iterations, trajectory };
	}

	while iterations < params.max_iterations && temperature >= params.min_temperature {
		let pos = rng.gen_range(0..order.len() - 1);

		order.swap(pos, pos + 1);

		let candidate = objective(scores, &order, k);
		let loss = current - candidate;
		let accept = loss <= 0.0 || rng.r#gen::<f64>() < (-loss / temperature).exp();

		if accept {
			current = candidate;

			if current > best {
				best = current;
				best_order.clone_from(&order);
			}
		} else {
			order.swap(pos, pos + 1);
		}

		temperature *= params.cooling_rate;
		iterations += 1;
		trajectory.push(current);
	}

	tracing::debug!(iterations, objective = best, temperature, "Simulated annealing finished.");

	OptimizerRun { order: best_order, objective: best, iterations, trajectory }
}
