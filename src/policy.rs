use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FindError;
use crate::index::PositionList;

/// Controls how candidate positions carry over between successive occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceGap {
    /// Successive occurrences may reuse or overlap index ranges freely.
    #[default]
    Unrestricted,
    /// Every index of a new occurrence must exceed the previous occurrence's
    /// maximum index; positions at or below it are discarded for good.
    NonOverlapping,
}

/// Controls how a position is assigned to each pattern element within one occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementGap {
    /// Each element takes the smallest remaining position for its key,
    /// regardless of positions already chosen in this occurrence.
    #[default]
    Unordered,
    /// Indices within an occurrence are strictly ascending: each element
    /// takes the smallest remaining position greater than the last one chosen.
    Ordered,
}

impl OccurrenceGap {
    /// Pre-selection filter for one key's candidate list.
    ///
    /// Under `NonOverlapping`, drops every remaining position at or below
    /// `previous_max`. Pruned positions are never reconsidered, for any key.
    pub(crate) fn prune(self, list: &mut PositionList, previous_max: Option<usize>) {
        if let (OccurrenceGap::NonOverlapping, Some(max)) = (self, previous_max) {
            list.prune_through(max);
        }
    }
}

impl ElementGap {
    /// Select and remove one position for the current pattern element.
    ///
    /// `last_chosen` is the most recently assigned index in the in-progress
    /// occurrence, or `None` for its first element. Returns `None` when no
    /// qualifying position remains, which stops the extraction loop.
    pub(crate) fn select(
        self,
        list: &mut PositionList,
        last_chosen: Option<usize>,
    ) -> Option<usize> {
        match (self, last_chosen) {
            (ElementGap::Unordered, _) | (ElementGap::Ordered, None) => list.pop_front(),
            (ElementGap::Ordered, Some(last)) => list.pop_after(last),
        }
    }
}

impl FromStr for OccurrenceGap {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unrestricted" => Ok(OccurrenceGap::Unrestricted),
            "non_overlapping" | "non-overlapping" => Ok(OccurrenceGap::NonOverlapping),
            other => Err(FindError::InvalidGapPolicy(other.to_string())),
        }
    }
}

impl FromStr for ElementGap {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unordered" => Ok(ElementGap::Unordered),
            "ordered" => Ok(ElementGap::Ordered),
            other => Err(FindError::InvalidGapPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for OccurrenceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccurrenceGap::Unrestricted => f.write_str("unrestricted"),
            OccurrenceGap::NonOverlapping => f.write_str("non_overlapping"),
        }
    }
}

impl fmt::Display for ElementGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementGap::Unordered => f.write_str("unordered"),
            ElementGap::Ordered => f.write_str("ordered"),
        }
    }
}
