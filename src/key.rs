/// A normalized, hashable comparison key produced by the normalizer.
///
/// Equality between keys is the equality the caller configured: raw value
/// equality for primitives, structural equality for canonicalized
/// composites, string-form or instance-identity equality for opaque
/// elements. `Ord` exists so canonicalized set and map members have a
/// stable order independent of how the caller listed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Bool(bool),
    Int(i64),
    /// Float keyed by its raw bit pattern (with -0.0 normalized to 0.0).
    FloatBits(u64),
    /// Float rounded to a fixed decimal precision: `units * 10^-precision`.
    Scaled { units: i128, precision: u32 },
    Str(String),
    /// Canonicalized list.
    Tuple(Vec<Key>),
    /// Canonicalized set: members sorted and deduplicated.
    SetOf(Vec<Key>),
    /// Canonicalized map: entries sorted by key.
    MapOf(Vec<(Key, Key)>),
    /// Opaque element keyed by instance identity.
    Opaque(u64),
}
