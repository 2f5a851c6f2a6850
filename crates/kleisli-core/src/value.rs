use serde_json::Value;

use crate::error::{KleisliError, Result};

/// Human-readable kind name for a JSON value.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Chain dispatch for dynamically-typed values.
///
/// Only arrays are chainable: `f` runs on each element in order and the
/// results are flattened one level (an array result is spliced in, anything
/// else is appended as a single element). Every other kind fails with
/// [`KleisliError::NotChainable`] before `f` is called.
pub fn chain_value<F>(m: Value, mut f: F) -> Result<Value>
where
    F: FnMut(Value) -> Result<Value>,
{
    let items = match m {
        Value::Array(items) => items,
        other => {
            let kind = kind_of(&other);
            tracing::trace!(kind, "chain on non-chainable value");
            return Err(KleisliError::not_chainable(kind));
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match f(item)? {
            Value::Array(inner) => out.extend(inner),
            single => out.push(single),
        }
    }
    Ok(Value::Array(out))
}
