use thiserror::Error;

/// Errors that can occur while normalizing elements or searching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindError {
    /// Pattern or target failed structural validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An element cannot be turned into a map key under the active configuration.
    #[error("unhashable element: {0}")]
    UnhashableKey(String),
    /// `use_string_form` is set but an opaque element carries no string form.
    #[error("no string form for opaque element of type `{0}`")]
    NoStringForm(String),
    /// `float_precision` cannot be applied.
    #[error("invalid float precision: {0}")]
    InvalidPrecision(String),
    /// Unrecognized gap policy name at the configuration boundary.
    #[error("invalid gap policy `{0}`")]
    InvalidGapPolicy(String),
}
