//! Dispersion statistic over category counts.
//!
//! The score is the summed absolute deviation of each count from the mean
//! count, normalized by `total * (k - 1)`. A distribution where one category
//! takes all of the mass scores close to 1, an even split scores 0.
//!
//! ```rust
//! use stylemap::core::consistency::{get_consistency, Consistency};
//!
//! assert_eq!(get_consistency(&[75, 25], 100), 0.5);
//! assert_eq!(vec![1u64].get_consistency(1), 0.0);
//! ```

/// Score how strongly the mass in `counts` concentrates on few categories.
///
/// Returns 0 when there is no evidence (`total == 0`) or fewer than two
/// categories to compare. The result is clamped to `[0, 1]`, since some
/// dimensions feed overlapping subset counts whose sum exceeds `total`.
pub fn get_consistency(counts: &[u64], total: u64) -> f64 {
    if total == 0 || counts.len() <= 1 {
        return 0.0;
    }

    let k = counts.len() as f64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / k;
    let deviation: f64 = counts.iter().map(|&c| (c as f64 - mean).abs()).sum();

    (deviation / (total as f64 * (k - 1.0))).clamp(0.0, 1.0)
}

/// Extension method form of [`get_consistency`] for count sequences.
pub trait Consistency {
    fn get_consistency(&self, total: u64) -> f64;
}

impl Consistency for [u64] {
    fn get_consistency(&self, total: u64) -> f64 {
        get_consistency(self, total)
    }
}

impl Consistency for Vec<u64> {
    fn get_consistency(&self, total: u64) -> f64 {
        get_consistency(self, total)
    }
}
