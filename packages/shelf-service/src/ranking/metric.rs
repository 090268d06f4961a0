use crate::ranking::cmp_f64_desc;

/// NDCG over the first `k` positions of `scores`, taken in presentation order.
///
/// The ideal is the best `k` of all the scores, sorted descending, so a strong item left below
/// the cutoff costs the ordering. Degenerate inputs (no scores, `k == 0`, an all-zero ideal)
/// count as perfectly ordered.
pub fn ndcg_at_k(scores: &[f64], k: usize) -> f64 {
	let cutoff = k.min(scores.len());

	if cutoff == 0 {
		return 1.0;
	}

	let mut ideal = scores.to_vec();

	ideal.sort_by(|a, b| cmp_f64_desc(*a, *b));

	let ideal_dcg = dcg(&ideal[..cutoff]);

	if ideal_dcg <= 0.0 {
		return 1.0;
	}

	(dcg(&scores[..cutoff]) / ideal_dcg).clamp(0.0, 1.0)
}

fn dcg(scores: &[f64]) -> f64 {
	scores.iter().enumerate().map(|(rank, score)| score / ((rank + 2) as f64).log2()).sum()
}
