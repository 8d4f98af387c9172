//! RFC 6901 JSON pointer navigation, used by the `$` and `get` operators.
//!
//! `/` separates segments; `~1` escapes `/` and `~0` escapes `~`; numeric
//! segments into arrays are decimal indices; a missing key or an
//! out-of-range index is reported as an error (the caller wraps it with the
//! evaluation path).

use jexpr_types::Value;

/// Splits a pointer string (with its leading `/` already stripped by the
/// caller if desired) into unescaped segments.
pub fn split_segments(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer.split('/').map(unescape_segment).collect()
}

fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Navigates `root` through `segments`, following object-key and
/// array-index semantics. Returns an error message (not yet path-annotated)
/// on a missing key, a non-numeric array segment, or an out-of-range index.
pub fn navigate<'a>(root: &'a Value, segments: &[String]) -> Result<&'a Value, String> {
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment).ok_or_else(|| format!("no such key '{segment}'"))?,
            Value::Array(items) => {
                let index: usize = segment.parse().map_err(|_| format!("'{segment}' is not a valid array index"))?;
                items.get(index).ok_or_else(|| format!("array index {index} out of range"))?
            }
            other => return Err(format!("cannot descend into {other} with segment '{segment}'")),
        };
    }
    Ok(current)
}

/// Convenience: parse and navigate a full `/`-prefixed pointer string in one
/// call. An empty pointer (after stripping the leading `/`) returns `root`.
pub fn navigate_pointer<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value, String> {
    let stripped = pointer.strip_prefix('/').unwrap_or(pointer);
    navigate(root, &split_segments(stripped))
}
