//! # seqfind
//!
//! ## Purpose
//!
//! `seqfind` locates every occurrence of a short ordered sequence (the
//! *pattern*) inside a longer sequence (the *target*), returning for each
//! occurrence the list of target indices the pattern's elements matched to.
//! Matches are not required to be contiguous: a pattern element may match an
//! equal element anywhere in the target, subject to two independent gap
//! policies.
//!
//! ## Core Types
//!
//! - [`search`]: the matching engine, generic over any `Eq + Hash` element.
//! - [`SearchConfig`]: the two gap policies for a search:
//!   - [`OccurrenceGap`] — whether successive occurrences may overlap in
//!     index range (`Unrestricted`) or must sit strictly after the previous
//!     occurrence's maximum index (`NonOverlapping`).
//!   - [`ElementGap`] — whether indices within one occurrence are assigned
//!     freely (`Unordered`) or must be strictly ascending (`Ordered`).
//! - [`Value`] / [`find_in_values`]: a dynamically typed element surface for
//!   heterogeneous inputs, with configurable equality via
//!   [`NormalizeConfig`]: canonicalization of unhashable composites,
//!   string-form keying of opaque elements, and fixed-precision float
//!   rounding.
//! - [`FindError`]: the error taxonomy. An error reports zero occurrences;
//!   an empty `Ok` result is the normal "nothing found" outcome.
//!
//! ## Example
//!
//! ```
//! use seqfind::{search, ElementGap, OccurrenceGap, SearchConfig};
//!
//! let target = [2, 2, 2, 3, 2, 1, 1, 1, 7, 1, 2];
//!
//! // Default policies: occurrences may overlap, element order is free.
//! let hits = search(&[1, 2], &target, &SearchConfig::default()).unwrap();
//! assert_eq!(hits, vec![vec![5, 0], vec![6, 1], vec![7, 2], vec![9, 4]]);
//!
//! // Non-overlapping occurrences.
//! let cfg = SearchConfig::default().with_occurrence_gap(OccurrenceGap::NonOverlapping);
//! let hits = search(&[1, 2], &target, &cfg).unwrap();
//! assert_eq!(hits, vec![vec![5, 0], vec![6, 10]]);
//!
//! // Strictly ascending indices within each occurrence.
//! let cfg = SearchConfig::default().with_element_gap(ElementGap::Ordered);
//! let hits = search(&[1, 2], &[1, 3, 1, 7, 2, 8, 2, 9, 1, 2], &cfg).unwrap();
//! assert_eq!(hits, vec![vec![0, 4], vec![2, 6], vec![8, 9]]);
//! ```
//!
//! Heterogeneous or composite elements go through [`find_in_values`]:
//!
//! ```
//! use seqfind::{find_in_values, NormalizeConfig, SearchConfig, Value};
//!
//! let pattern = vec![Value::from("foo"), Value::List(vec![Value::from("bar")])];
//! let target = vec![
//!     Value::from("foo"),
//!     Value::List(vec![Value::from("bar")]),
//!     Value::from("foo"),
//! ];
//! let normalize = NormalizeConfig::default().with_canonicalize_unhashable(true);
//! let hits = find_in_values(&pattern, &target, &normalize, &SearchConfig::default()).unwrap();
//! assert_eq!(hits, vec![vec![0, 1]]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod normalize;
pub mod policy;
pub mod value;

mod index;

pub use crate::config::{NormalizeConfig, SearchConfig, MAX_FLOAT_PRECISION};
pub use crate::engine::search;
pub use crate::error::FindError;
pub use crate::key::Key;
pub use crate::normalize::{normalize_value, normalize_values};
pub use crate::policy::{ElementGap, OccurrenceGap};
pub use crate::value::Value;

/// Find every occurrence of `pattern` in `target` over dynamically typed
/// elements.
///
/// Inputs are validated, both sequences are normalized into comparison keys
/// under `normalize`, and the generic engine runs with `search_config`. This
/// is the full-pipeline entry point; callers whose elements are already
/// `Eq + Hash` can skip normalization and call [`search`] directly.
pub fn find_in_values(
    pattern: &[Value],
    target: &[Value],
    normalize: &NormalizeConfig,
    search_config: &SearchConfig,
) -> Result<Vec<Vec<usize>>, FindError> {
    engine::validate_inputs(pattern, target)?;
    let pattern_keys = normalize_values(pattern, normalize)?;
    let target_keys = normalize_values(target, normalize)?;
    search(&pattern_keys, &target_keys, search_config)
}
