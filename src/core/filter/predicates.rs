//! Filter predicates

/// Whether every whitespace separated term of `query` occurs in `target`
///
/// Matching ignores case. A blank query matches everything.
pub fn is_all_string_included(target: &str, query: &str) -> bool {
    let target = target.to_lowercase();
    query
        .split_whitespace()
        .all(|term| target.contains(&term.to_lowercase()))
}

/// Whether `value` is selected; nothing selected means everything is
pub fn is_selected<T: PartialEq>(value: &T, selected: &[T]) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Whether any of `values` is selected; nothing selected means everything is
pub fn is_any_value_selected<T: PartialEq>(values: &[T], selected: &[T]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}
