//! Parallel reduction of per-unit registries.
//!
//! Units are analyzed independently on the rayon pool and folded together
//! with [`StyleRegistry::merge`]. Because merge is commutative and
//! associative the result does not depend on scheduling.

use crate::io::load_unit;
use crate::registry::StyleRegistry;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug_span, info, warn};

/// Outcome of aggregating a set of unit files.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub registry: StyleRegistry,
    pub analyzed: usize,
    /// Units that failed to load, with the reason. They contribute nothing.
    pub skipped: Vec<(PathBuf, String)>,
}

enum UnitOutcome {
    Analyzed(StyleRegistry),
    Skipped(PathBuf, String),
}

fn analyze_unit(path: &Path) -> UnitOutcome {
    let _span = debug_span!("unit", path = %path.display()).entered();
    match load_unit(path) {
        Ok(registry) => UnitOutcome::Analyzed(registry),
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            UnitOutcome::Skipped(path.to_path_buf(), e.to_string())
        }
    }
}

impl Aggregate {
    fn empty() -> Self {
        Self {
            registry: StyleRegistry::new(),
            analyzed: 0,
            skipped: Vec::new(),
        }
    }

    fn from_outcome(outcome: UnitOutcome) -> Self {
        match outcome {
            UnitOutcome::Analyzed(registry) => Self {
                registry,
                analyzed: 1,
                skipped: Vec::new(),
            },
            UnitOutcome::Skipped(path, reason) => Self {
                skipped: vec![(path, reason)],
                ..Self::empty()
            },
        }
    }

    fn combine(mut self, other: Self) -> Self {
        self.skipped.extend(other.skipped);
        Self {
            registry: self.registry.merge(&other.registry),
            analyzed: self.analyzed + other.analyzed,
            skipped: self.skipped,
        }
    }
}

/// Load every unit in parallel and merge the results.
pub fn aggregate_units(paths: &[PathBuf]) -> Aggregate {
    let _span = debug_span!("aggregate_units", units = paths.len()).entered();

    let mut aggregate = paths
        .par_iter()
        .map(|path| Aggregate::from_outcome(analyze_unit(path)))
        .reduce(Aggregate::empty, Aggregate::combine);
    aggregate.skipped.sort();

    info!(
        "Aggregated {} units ({} skipped)",
        aggregate.analyzed,
        aggregate.skipped.len()
    );
    aggregate
}

/// Merge already-built registries in parallel.
pub fn merge_registries(registries: &[StyleRegistry]) -> StyleRegistry {
    registries
        .par_iter()
        .cloned()
        .reduce(StyleRegistry::new, |a, b| a.merge(&b))
}
