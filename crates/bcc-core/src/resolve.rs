// Dotted-key resolution over a parsed serde_json::Value tree.
// Objects consume one segment per level. Arrays consume nothing: every element
// is tried against the same remaining segments and the first hit wins.
// Scalars end the walk unless the path is exhausted.
use serde_json::Value;
use tracing::trace;

use crate::keypath::KeyPath;

/// Follow `path` from `node`. `None` means not found; a present `null` comes
/// back as `Some(&Value::Null)`.
pub fn resolve<'a, S: AsRef<str>>(node: &'a Value, path: &[S]) -> Option<&'a Value> {
    let Some((head, rest)) = path.split_first() else {
        return Some(node);
    };
    match node {
        Value::Object(map) => map.get(head.as_ref()).and_then(|v| resolve(v, rest)),
        Value::Array(items) => {
            trace!(len = items.len(), key = head.as_ref(), "searching array elements");
            items.iter().find_map(|item| resolve(item, path))
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

pub fn resolve_path<'a>(node: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    resolve(node, path.segments())
}
