//! Shallow-merge update semantics.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Overlay `patch` onto `record`: keys present in the patch overwrite
/// the stored field (an explicit `null` included), absent keys are
/// preserved unchanged. The `id` key is ignored; record ids come from
/// the request path and never change.
pub fn shallow_merge<T>(record: &T, mut patch: Map<String, Value>) -> Result<T, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    patch.remove("id");

    let mut base = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        other => {
            return Err(serde::de::Error::custom(format!(
                "record serialized as {other}, expected an object"
            )))
        }
    };
    for (key, value) in patch {
        base.insert(key, value);
    }
    serde_json::from_value(Value::Object(base))
}
