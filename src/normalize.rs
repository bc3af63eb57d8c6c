//! Element normalizer: turns raw [`Value`] elements into hashable
//! comparison [`Key`]s according to a [`NormalizeConfig`].
//!
//! The matching engine never sees how keys were produced; it only requires
//! that two elements the caller considers equal normalize to equal keys.

use crate::config::NormalizeConfig;
use crate::error::FindError;
use crate::key::Key;
use crate::value::Value;

/// Normalize a whole sequence of elements.
///
/// Validates the configuration once, then normalizes each element in order.
/// Deterministic and side-effect free.
pub fn normalize_values(values: &[Value], cfg: &NormalizeConfig) -> Result<Vec<Key>, FindError> {
    cfg.validate()?;
    values.iter().map(|v| normalize_value(v, cfg)).collect()
}

/// Normalize a single element.
pub fn normalize_value(value: &Value, cfg: &NormalizeConfig) -> Result<Key, FindError> {
    match value {
        Value::Bool(b) => Ok(Key::Bool(*b)),
        Value::Int(i) => Ok(Key::Int(*i)),
        Value::Str(s) => Ok(Key::Str(s.clone())),
        Value::Float(f) => normalize_float(*f, cfg),
        Value::List(items) => {
            if !cfg.canonicalize_unhashable {
                return Err(unhashable(value));
            }
            let keys = items
                .iter()
                .map(|v| normalize_value(v, cfg))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Key::Tuple(keys))
        }
        Value::Set(members) => {
            if !cfg.canonicalize_unhashable {
                return Err(unhashable(value));
            }
            let mut keys = members
                .iter()
                .map(|v| normalize_value(v, cfg))
                .collect::<Result<Vec<_>, _>>()?;
            keys.sort();
            keys.dedup();
            Ok(Key::SetOf(keys))
        }
        Value::Map(entries) => {
            if !cfg.canonicalize_unhashable {
                return Err(unhashable(value));
            }
            let mut keys = entries
                .iter()
                .map(|(k, v)| Ok((normalize_value(k, cfg)?, normalize_value(v, cfg)?)))
                .collect::<Result<Vec<_>, FindError>>()?;
            keys.sort();
            Ok(Key::MapOf(keys))
        }
        Value::Opaque {
            type_name,
            instance,
            display,
        } => {
            if cfg.use_string_form {
                match display {
                    Some(text) => Ok(Key::Str(text.clone())),
                    None => Err(FindError::NoStringForm(type_name.clone())),
                }
            } else {
                Ok(Key::Opaque(*instance))
            }
        }
    }
}

fn normalize_float(f: f64, cfg: &NormalizeConfig) -> Result<Key, FindError> {
    match cfg.float_precision {
        Some(precision) => round_half_up(f, precision),
        // -0.0 and 0.0 must produce the same key.
        None => Ok(Key::FloatBits(if f == 0.0 { 0.0f64.to_bits() } else { f.to_bits() })),
    }
}

/// Round `f` to `precision` decimal places, half away from zero, and key it
/// by the resulting integer number of decimal units.
fn round_half_up(f: f64, precision: u32) -> Result<Key, FindError> {
    if !f.is_finite() {
        return Err(FindError::InvalidPrecision(format!(
            "cannot round non-finite float {f}"
        )));
    }
    // Precision is already bounded by NormalizeConfig::validate, so the
    // factor itself is finite.
    let factor = 10f64.powi(precision as i32);
    let scaled = f * factor;
    if !scaled.is_finite() || scaled.abs() >= i128::MAX as f64 {
        return Err(FindError::InvalidPrecision(format!(
            "{f} at precision {precision} is not representable"
        )));
    }
    let units = if scaled >= 0.0 {
        (scaled + 0.5).floor()
    } else {
        (scaled - 0.5).ceil()
    } as i128;
    Ok(Key::Scaled { units, precision })
}

fn unhashable(value: &Value) -> FindError {
    FindError::UnhashableKey(format!(
        "`{}` element requires canonicalize_unhashable",
        value.type_label()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalizing() -> NormalizeConfig {
        NormalizeConfig::default().with_canonicalize_unhashable(true)
    }

    #[test]
    fn primitives_normalize_to_raw_value_keys() {
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize_value(&Value::Int(7), &cfg).unwrap(), Key::Int(7));
        assert_eq!(
            normalize_value(&Value::Str("abc".into()), &cfg).unwrap(),
            Key::Str("abc".into())
        );
        assert_eq!(
            normalize_value(&Value::Bool(true), &cfg).unwrap(),
            Key::Bool(true)
        );
    }

    #[test]
    fn composites_without_canonicalization_are_unhashable() {
        let cfg = NormalizeConfig::default();
        let err = normalize_value(&Value::List(vec![Value::Int(1)]), &cfg).unwrap_err();
        assert!(matches!(err, FindError::UnhashableKey(_)));
        let err = normalize_value(&Value::Map(vec![]), &cfg).unwrap_err();
        assert!(matches!(err, FindError::UnhashableKey(_)));
    }

    #[test]
    fn nested_composites_canonicalize_recursively() {
        let cfg = canonicalizing();
        let value = Value::List(vec![
            Value::Int(1),
            Value::Map(vec![(Value::Str("k".into()), Value::List(vec![Value::Int(2)]))]),
        ]);
        let key = normalize_value(&value, &cfg).unwrap();
        assert_eq!(
            key,
            Key::Tuple(vec![
                Key::Int(1),
                Key::MapOf(vec![(Key::Str("k".into()), Key::Tuple(vec![Key::Int(2)]))]),
            ])
        );
    }

    #[test]
    fn set_members_are_order_insensitive() {
        let cfg = canonicalizing();
        let a = Value::Set(vec![Value::Int(1), Value::Int(2), Value::Int(2)]);
        let b = Value::Set(vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(
            normalize_value(&a, &cfg).unwrap(),
            normalize_value(&b, &cfg).unwrap()
        );
    }

    #[test]
    fn map_entry_order_is_irrelevant() {
        let cfg = canonicalizing();
        let a = Value::Map(vec![
            (Value::Str("x".into()), Value::Int(1)),
            (Value::Str("y".into()), Value::Int(2)),
        ]);
        let b = Value::Map(vec![
            (Value::Str("y".into()), Value::Int(2)),
            (Value::Str("x".into()), Value::Int(1)),
        ]);
        assert_eq!(
            normalize_value(&a, &cfg).unwrap(),
            normalize_value(&b, &cfg).unwrap()
        );
    }

    #[test]
    fn opaque_identity_distinguishes_instances() {
        let cfg = NormalizeConfig::default();
        let a = normalize_value(&Value::opaque("Widget", 1), &cfg).unwrap();
        let b = normalize_value(&Value::opaque("Widget", 2), &cfg).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn string_form_matches_equivalent_instances() {
        let cfg = NormalizeConfig::default().with_use_string_form(true);
        let a = normalize_value(&Value::opaque_with_display("Widget", 1, "Widget(9)"), &cfg);
        let b = normalize_value(&Value::opaque_with_display("Widget", 2, "Widget(9)"), &cfg);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn string_form_requires_a_display() {
        let cfg = NormalizeConfig::default().with_use_string_form(true);
        let err = normalize_value(&Value::opaque("Widget", 1), &cfg).unwrap_err();
        assert_eq!(err, FindError::NoStringForm("Widget".to_string()));
    }

    #[test]
    fn float_precision_rounds_half_away_from_zero() {
        let cfg = NormalizeConfig::default().with_float_precision(2);
        let key = |f: f64| normalize_value(&Value::Float(f), &cfg).unwrap();
        // 0.125 is exactly representable; the .5 decimal tie rounds away from zero.
        assert_eq!(key(0.125), key(0.13));
        assert_eq!(key(-0.125), key(-0.13));
        assert_eq!(key(0.124), key(0.1241));
        assert_ne!(key(0.124), key(0.125));
    }

    #[test]
    fn precision_window_defines_float_equality() {
        let cfg = NormalizeConfig::default().with_float_precision(3);
        let a = normalize_value(&Value::Float(0.12349999), &cfg).unwrap();
        let b = normalize_value(&Value::Float(0.1235001), &cfg).unwrap();
        assert_ne!(a, b);
        let a = normalize_value(&Value::Float(0.12340001), &cfg).unwrap();
        let b = normalize_value(&Value::Float(0.12339999), &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_floats_are_rejected_under_precision() {
        let cfg = NormalizeConfig::default().with_float_precision(2);
        let err = normalize_value(&Value::Float(f64::NAN), &cfg).unwrap_err();
        assert!(matches!(err, FindError::InvalidPrecision(_)));
        let err = normalize_value(&Value::Float(f64::INFINITY), &cfg).unwrap_err();
        assert!(matches!(err, FindError::InvalidPrecision(_)));
    }

    #[test]
    fn excessive_precision_fails_before_any_element() {
        let cfg = NormalizeConfig::default().with_float_precision(40);
        let err = normalize_values(&[Value::Int(1)], &cfg).unwrap_err();
        assert!(matches!(err, FindError::InvalidPrecision(_)));
    }

    #[test]
    fn negative_zero_keys_like_zero() {
        let cfg = NormalizeConfig::default();
        assert_eq!(
            normalize_value(&Value::Float(-0.0), &cfg).unwrap(),
            normalize_value(&Value::Float(0.0), &cfg).unwrap()
        );
    }
}
