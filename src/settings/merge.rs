//! Deep merge over JSON trees

use serde_json::Value;

/// Merge `patch` into `target`, returning a new value.
///
/// When both sides hold an object at the same key the merge recurses;
/// otherwise the patch value replaces the target value wholesale, arrays
/// included. Neither input is mutated. A top-level JSON null patch stands
/// for "no patch" and returns the target unchanged.
pub fn deep_merge(target: &Value, patch: &Value) -> Value {
    if patch.is_null() {
        return target.clone();
    }

    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            let mut merged = target_map.clone();
            for (key, patch_value) in patch_map {
                let next = match merged.get(key) {
                    Some(current) if current.is_object() && patch_value.is_object() => {
                        deep_merge(current, patch_value)
                    }
                    _ => patch_value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => patch.clone(),
    }
}
