use serde::{Deserialize, Serialize};

use crate::error::FindError;
use crate::policy::{ElementGap, OccurrenceGap};

/// Highest decimal precision at which one rounding step is still
/// representable in an f64.
pub const MAX_FLOAT_PRECISION: u32 = 15;

/// Configuration for the element normalizer.
///
/// All options default to off: elements are compared by their raw value, and
/// composite elements (lists, sets, maps) are rejected as unhashable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Recursively convert lists, sets, and maps into immutable, hashable
    /// composites so they can participate in matching.
    #[serde(default)]
    pub canonicalize_unhashable: bool,
    /// Key opaque (non-primitive) elements by their string form instead of
    /// their instance identity.
    #[serde(default)]
    pub use_string_form: bool,
    /// Round float elements to this many decimal places, half away from
    /// zero, before keying.
    #[serde(default)]
    pub float_precision: Option<u32>,
}

impl NormalizeConfig {
    pub fn with_canonicalize_unhashable(mut self, on: bool) -> Self {
        self.canonicalize_unhashable = on;
        self
    }

    pub fn with_use_string_form(mut self, on: bool) -> Self {
        self.use_string_form = on;
        self
    }

    pub fn with_float_precision(mut self, precision: u32) -> Self {
        self.float_precision = Some(precision);
        self
    }

    /// Validate the configuration before any normalization work.
    pub fn validate(&self) -> Result<(), FindError> {
        if let Some(precision) = self.float_precision {
            if precision > MAX_FLOAT_PRECISION {
                return Err(FindError::InvalidPrecision(format!(
                    "float_precision {precision} exceeds maximum of {MAX_FLOAT_PRECISION}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for a single search: the two gap policies.
///
/// Cheap to copy and serde-friendly so it can be embedded in higher-level
/// configs or passed across process boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether successive occurrences may overlap in index range.
    #[serde(default)]
    pub occurrence_gap: OccurrenceGap,
    /// Whether indices within one occurrence must be strictly ascending.
    #[serde(default)]
    pub element_gap: ElementGap,
}

impl SearchConfig {
    pub fn with_occurrence_gap(mut self, gap: OccurrenceGap) -> Self {
        self.occurrence_gap = gap;
        self
    }

    pub fn with_element_gap(mut self, gap: ElementGap) -> Self {
        self.element_gap = gap;
        self
    }

    /// Parse a config from the free-form policy names accepted at the API
    /// boundary. Unrecognized names fail with [`FindError::InvalidGapPolicy`]
    /// before any index building happens.
    pub fn from_names(occurrence_gap: &str, element_gap: &str) -> Result<Self, FindError> {
        Ok(Self {
            occurrence_gap: occurrence_gap.parse()?,
            element_gap: element_gap.parse()?,
        })
    }
}
