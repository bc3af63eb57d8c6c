use std::hash::Hash;

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::FindError;
use crate::index::PositionIndex;


/// Find every occurrence of `pattern` in `target`.
///
/// Each occurrence is the list of target indices the pattern's elements
/// matched to, one per pattern element, in pattern order. Occurrences are
/// returned in discovery order; an empty result means no occurrence exists
/// and is a normal return, distinct from any error.
///
/// Extraction is greedy and runs in O(n) amortized time over the target
/// length: each target position is consumed by at most one occurrence
/// across the whole run, and the loop stops the moment any pattern element
/// cannot be matched.
pub fn search<K>(
    pattern: &[K],
    target: &[K],
    config: &SearchConfig,
) -> Result<Vec<Vec<usize>>, FindError>
where
    K: Eq + Hash + Clone,
{
    validate_inputs(pattern, target)?;

    let Some(mut index) = PositionIndex::build(pattern, target) else {
        debug!(
            pattern_len = pattern.len(),
            target_len = target.len(),
            "pattern key absent from target; no occurrences possible"
        );
        return Ok(Vec::new());
    };

    let mut occurrences: Vec<Vec<usize>> = Vec::new();
    let mut previous_max: Option<usize> = None;

    while let Some(occurrence) = extract_occurrence(pattern, &mut index, config, previous_max) {
        trace!(n = occurrences.len(), indices = ?occurrence, "occurrence extracted");
        previous_max = occurrence.iter().copied().max();
        occurrences.push(occurrence);
    }

    debug!(
        pattern_len = pattern.len(),
        target_len = target.len(),
        occurrences = occurrences.len(),
        "search complete"
    );
    Ok(occurrences)
}

/// Attempt to assemble one complete occurrence. Returns `None` as soon as
/// any pattern element has no qualifying position left; a partially built
/// occurrence is discarded, its already-popped positions stay consumed.
fn extract_occurrence<K>(
    pattern: &[K],
    index: &mut PositionIndex<K>,
    config: &SearchConfig,
    previous_max: Option<usize>,
) -> Option<Vec<usize>>
where
    K: Eq + Hash + Clone,
{
    // The occurrence-gap prune is applied eagerly to every key's list before
    // any element is chosen, so the positions that survive do not depend on
    // which keys happen to be consumed this round.
    index.prune_all(|list| config.occurrence_gap.prune(list, previous_max));

    let mut chosen = Vec::with_capacity(pattern.len());
    let mut last_chosen: Option<usize> = None;
    for key in pattern {
        let list = index.list_mut(key)?;
        let position = config.element_gap.select(list, last_chosen)?;
        last_chosen = Some(position);
        chosen.push(position);
    }
    Some(chosen)
}

/// Structural validation, applied before any matching work.
pub(crate) fn validate_inputs<K>(pattern: &[K], target: &[K]) -> Result<(), FindError> {
    if pattern.is_empty() {
        return Err(FindError::InvalidInput("pattern must not be empty".into()));
    }
    if target.is_empty() {
        return Err(FindError::InvalidInput("target must not be empty".into()));
    }
    if pattern.len() > target.len() {
        return Err(FindError::InvalidInput(
            "pattern cannot be longer than target".into(),
        ));
    }
    Ok(())
}
