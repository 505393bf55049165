use crate::core::models::quartet::Quartet;
use crate::core::models::sequence::Sequence;
use crate::core::pairing::is_valid_pair;
use tracing::{debug, instrument};

/// Minimum number of unpaired bases enclosed by the outer pair of a quartet.
pub const MIN_HAIRPIN_LOOP: usize = 3;

/// Enumerates every quartet `(i, j, i+1, j-1)` of the sequence whose outer and inner pairs
/// both pair, with `j >= i + MIN_HAIRPIN_LOOP + 1`.
///
/// Quartets are produced in ascending `i`, then ascending `j`; this order fixes the
/// quartet ids used by the rest of the formulation. Overlapping quartets are all kept.
#[instrument(skip_all, name = "quartet_generation_task", fields(length = sequence.len()))]
pub fn run(sequence: &Sequence) -> Vec<Quartet> {
    let n = sequence.len();
    let min_span = MIN_HAIRPIN_LOOP + 1;

    let quartets: Vec<Quartet> = (0..n)
        .flat_map(|i| (i + min_span..n).map(move |j| Quartet::new(i, j)))
        .filter(|q| {
            let (i, j) = q.outer();
            let (k, l) = q.inner();
            is_valid_pair(sequence.base(i), sequence.base(j))
                && is_valid_pair(sequence.base(k), sequence.base(l))
        })
        .collect();

    debug!(count = quartets.len(), "Generated candidate quartets.");
    quartets
}
