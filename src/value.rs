use serde::{Deserialize, Serialize};

/// A dynamically typed element that can appear in a pattern or target.
///
/// The engine itself is generic over any `Eq + Hash` key; `Value` is the
/// input type for callers whose elements are heterogeneous or composite and
/// need the normalizer to produce comparison keys. See
/// [`normalize_values`](crate::normalize_values).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Ordered composite. Unhashable unless
    /// [`canonicalize_unhashable`](crate::NormalizeConfig::canonicalize_unhashable) is set.
    List(Vec<Value>),
    /// Unordered composite; member order is irrelevant once canonicalized.
    Set(Vec<Value>),
    /// Key-value composite; entry order is irrelevant once canonicalized.
    Map(Vec<(Value, Value)>),
    /// A caller-defined object the library cannot inspect.
    ///
    /// Without `use_string_form`, two opaque elements are equal only when
    /// they carry the same `instance` id. With it, they are keyed by
    /// `display`, which fails with
    /// [`NoStringForm`](crate::FindError::NoStringForm) when absent.
    Opaque {
        type_name: String,
        instance: u64,
        display: Option<String>,
    },
}

impl Value {
    /// Short type label used in error messages.
    pub(crate) fn type_label(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Opaque { type_name, .. } => type_name,
        }
    }

    /// Convenience constructor for an opaque element with a string form.
    pub fn opaque_with_display(
        type_name: impl Into<String>,
        instance: u64,
        display: impl Into<String>,
    ) -> Self {
        Value::Opaque {
            type_name: type_name.into(),
            instance,
            display: Some(display.into()),
        }
    }

    /// Convenience constructor for an opaque element without a string form.
    pub fn opaque(type_name: impl Into<String>, instance: u64) -> Self {
        Value::Opaque {
            type_name: type_name.into(),
            instance,
            display: None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}
