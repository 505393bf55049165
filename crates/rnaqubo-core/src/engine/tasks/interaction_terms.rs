use crate::core::models::ids::{QuartetId, QuartetPair};
use crate::core::models::quartet::Quartet;
use crate::core::relations::{Relation, classify};
use crate::engine::config::InteractionParameters;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTerms {
    pub quadratic: BTreeMap<QuartetPair, f64>,
    pub stacked_pairs: usize,
    pub crossing_pairs: usize,
    /// Pairs flagged as both stacked and crossing. Nested generation makes this
    /// impossible, so any non-zero count points at a broken predicate.
    pub conflicting_pairs: usize,
}

/// Scans every unordered pair of distinct quartets once and accumulates the stacking
/// reward and the crossing penalty into one quadratic slot per pair.
///
/// The scan is split into one row per quartet `a`, covering the pairs `(a, b)` with
/// `b > a`. Progress is reported once per row, so `total_steps` is the quartet count.
#[instrument(skip_all, name = "interaction_terms_task", fields(quartets = quartets.len()))]
pub fn run(
    quartets: &[Quartet],
    params: &InteractionParameters,
    reporter: &ProgressReporter,
) -> InteractionTerms {
    let n = quartets.len();
    if n < 2 {
        return InteractionTerms::default();
    }

    reporter.report(Progress::TaskStart {
        total_steps: n as u64,
    });

    let row = |a: usize| {
        reporter.report(Progress::TaskIncrement);
        (a + 1..n).filter_map(move |b| related_pair(a, &quartets[a], b, &quartets[b]))
    };

    #[cfg(not(feature = "parallel"))]
    let related: Vec<(QuartetPair, Relation)> = (0..n).flat_map(row).collect();

    #[cfg(feature = "parallel")]
    let related: Vec<(QuartetPair, Relation)> =
        (0..n).into_par_iter().flat_map_iter(row).collect();

    reporter.report(Progress::TaskFinish);

    let mut terms = InteractionTerms::default();
    for (pair, relation) in related {
        let slot = terms.quadratic.entry(pair).or_insert(0.0);
        if relation.stacked {
            *slot += params.stacking_reward;
            terms.stacked_pairs += 1;
        }
        if relation.crossing {
            *slot += params.crossing_penalty;
            terms.crossing_pairs += 1;
        }
        if relation.stacked && relation.crossing {
            reporter.report(Progress::Message(format!(
                "Quartets {} and {} are both stacked and crossing",
                quartets[pair.first().index()],
                quartets[pair.second().index()]
            )));
            warn!(
                first = %quartets[pair.first().index()],
                second = %quartets[pair.second().index()],
                "Quartet pair is both stacked and crossing; summing both contributions."
            );
            terms.conflicting_pairs += 1;
        }
    }

    info!(
        stacked = terms.stacked_pairs,
        crossing = terms.crossing_pairs,
        "Assembled interaction terms."
    );
    terms
}

fn related_pair(
    a: usize,
    qa: &Quartet,
    b: usize,
    qb: &Quartet,
) -> Option<(QuartetPair, Relation)> {
    let relation = classify(qa, qb);
    if relation.is_independent() {
        return None;
    }
    QuartetPair::new(QuartetId(a), QuartetId(b)).map(|pair| (pair, relation))
}
