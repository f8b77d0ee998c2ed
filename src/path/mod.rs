// ABOUTME: Placeholder expression parsing and scope traversal
// ABOUTME: Turns dotted/bracketed expressions into path segments and walks them against a scope

use crate::value::{Scope, Value};

/// Parse a placeholder expression into ordered property-access steps.
///
/// Supports dotted segments, numeric indices and quoted keys:
/// `"a.b.c"` → `["a", "b", "c"]`, `"a[0].b"` → `["a", "0", "b"]`,
/// `"a['x-y']"` → `["a", "x-y"]`. Surrounding whitespace is ignored.
///
/// Parsing is lenient: this runs once per placeholder on text the tokenizer
/// already accepted, so malformed brackets degrade instead of failing. An
/// unterminated bracket (`"a[0"`) closes at end of input and yields the same
/// segments as `"a[0]"`.
pub fn to_path(expr: &str) -> Vec<String> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = expr.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                let mut inner = String::new();
                for inner_ch in chars.by_ref() {
                    if inner_ch == ']' {
                        break;
                    }
                    inner.push(inner_ch);
                }
                let inner = inner.trim();
                let inner = inner
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .or_else(|| inner.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
                    .unwrap_or(inner);
                segments.push(inner.to_string());
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Walk parsed path segments against a scope.
///
/// A missing key, an out-of-range index, or an attempt to descend into a
/// non-container all yield [`Value::Absent`], which stringifies as an empty
/// string. An empty path resolves to the scope itself.
pub fn get_keys(scope: &Scope, path: &[String]) -> Value {
    let mut current = scope;
    for segment in path {
        let next = match current {
            Scope::Object(map) => map.get(segment.as_str()),
            Scope::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Value::Absent,
        }
    }
    Value::from(current)
}
