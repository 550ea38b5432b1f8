use std::collections::HashMap;

/// Page name to score.
pub type Ranks = HashMap<String, f64, ahash::RandomState>;

pub fn norm_1<K>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn total_mass(ranks: &Ranks) -> f64 {
    ranks.values().sum()
}

/// Largest absolute difference between two rank vectors over the keys of `a`.
pub fn max_abs_diff(a: &Ranks, b: &Ranks) -> f64 {
    a.iter()
        .map(|(page, x)| (x - b.get(page).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}
