use super::*;

enum Nested {
    Leaf(u32),
    Wrap(Box<Nested>),
}

fn build(depth: u32) -> Nested {
    let mut node = Nested::Leaf(depth);
    for _ in 0..depth {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

fn leaf_value(node: &Nested) -> u32 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(v) => *v,
        Nested::Wrap(inner) => leaf_value(inner),
    })
}

fn drop_iteratively(mut node: Nested) {
    while let Nested::Wrap(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_shallow_walk() {
    let tree = build(16);
    assert_eq!(leaf_value(&tree), 16);
    drop_iteratively(tree);
}

#[test]
fn test_deep_walk() {
    // Deep enough to overflow a default 8MB thread stack without growth.
    let tree = build(200_000);
    assert_eq!(leaf_value(&tree), 200_000);
    drop_iteratively(tree);
}

#[test]
fn test_passes_results_through() {
    let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(ok, Ok(7));
}
