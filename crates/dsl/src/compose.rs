//! Composition combinators.
//!
//! Declarative bodies are ordinary expressions producing `Vec<T>`,
//! where `T` is whatever node the surrounding context collects: group
//! children, supplementary items, boundary items, decoration items, or
//! sections. Every combinator both accepts and produces that same
//! list-of-node shape, so they nest freely.

/// Wraps a single node as a one-element body.
pub fn one<T>(node: impl Into<T>) -> Vec<T> {
    vec![node.into()]
}

/// Concatenates sibling bodies, preserving declaration order.
pub fn sequence<T>(parts: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    parts.into_iter().flatten().collect()
}

/// Includes a body only when `condition` holds; otherwise contributes
/// nothing (no placeholder entry).
pub fn when<T>(condition: bool, content: impl FnOnce() -> Vec<T>) -> Vec<T> {
    if condition { content() } else { Vec::new() }
}

/// Selects exactly one of two bodies. The unchosen branch is never
/// evaluated and contributes nothing.
pub fn either<T>(
    condition: bool,
    first: impl FnOnce() -> Vec<T>,
    second: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    if condition { first() } else { second() }
}

/// Accumulates one body per element of `items`, flattened in iteration
/// order.
pub fn for_each<T, I: IntoIterator>(
    items: I,
    mut content: impl FnMut(I::Item) -> Vec<T>,
) -> Vec<T> {
    items.into_iter().flat_map(|item| content(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_preserves_declaration_order() {
        let body: Vec<u32> = sequence([one::<u32>(1u32), one::<u32>(2u32), one::<u32>(3u32)]);
        assert_eq!(body, vec![1, 2, 3]);
    }

    #[test]
    fn when_contributes_nothing_when_false() {
        assert_eq!(when(false, || one::<u32>(1u32)), Vec::<u32>::new());
        assert_eq!(when(true, || one::<u32>(1u32)), vec![1]);
    }

    #[test]
    fn either_selects_exactly_one_branch() {
        assert_eq!(either(true, || one::<u32>(1u32), || one::<u32>(2u32)), vec![1]);
        assert_eq!(either(false, || one::<u32>(1u32), || one::<u32>(2u32)), vec![2]);
    }

    #[test]
    fn for_each_flattens_in_iteration_order() {
        let body = for_each(0u32..3, |i| one::<u32>(i * 10));
        assert_eq!(body, vec![0, 10, 20]);
    }

    #[test]
    fn combinators_nest() {
        let body = sequence([
            one::<u32>(0u32),
            for_each(1u32..3, |i| either(i == 1, || one::<u32>(i), || one::<u32>(i * 100))),
        ]);
        assert_eq!(body, vec![0, 1, 200]);
    }
}
