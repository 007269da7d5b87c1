use super::*;
use crate::nested;
use pretty_assertions::assert_eq;

#[test]
fn leaf_classification() {
    let value = NestedValue::leaf(7);
    assert_eq!(value.node_kind(), NodeKind::Leaf);
    assert_eq!(value.leaf(), Some(&7));
    assert_eq!(value.identity(), None);
    assert_eq!(value.child_count(), 0);
}

#[test]
fn container_classification() {
    let list = NestedValue::leaves([1, 2, 3]);
    let tuple = NestedValue::tuple([NestedValue::leaf(1)]);

    assert_eq!(list.node_kind(), NodeKind::Container(ContainerKind::List));
    assert_eq!(tuple.node_kind(), NodeKind::Container(ContainerKind::Tuple));
    assert_eq!(list.leaf(), None);
    assert_eq!(list.child_count(), 3);
    assert!(list.identity().is_some());
}

#[test]
fn clones_share_storage() {
    let list = NestedValue::<i32>::list([]);
    let alias = list.clone();

    if let Some(seq) = alias.seq() {
        seq.push(NestedValue::leaf(1));
    }

    assert_eq!(list.child_count(), 1);
    assert_eq!(list.identity(), alias.identity());
}

#[test]
fn distinct_containers_have_distinct_identity() {
    let a = NestedValue::leaves([1]);
    let b = NestedValue::leaves([1]);
    assert_ne!(a.identity(), b.identity());
    assert_eq!(a, b);
}

#[test]
fn equality_respects_container_kind() {
    let list: NestedValue<i32> = nested![[1, 2]];
    let tuple: NestedValue<i32> = nested![(1, 2)];
    assert_ne!(list, tuple);
}

#[test]
fn self_containing_list_compares_by_pointer() {
    let seq = Seq::new();
    seq.push(NestedValue::leaf(1));
    seq.push(NestedValue::List(seq.clone()));

    let value = NestedValue::List(seq.clone());
    assert_eq!(value, value.clone());

    seq.clear();
    assert!(seq.is_empty());
}

#[test]
fn debug_does_not_walk_cycles() {
    let seq: Seq<i32> = Seq::new();
    seq.push(NestedValue::List(seq.clone()));

    let rendered = format!("{:?}", NestedValue::List(seq.clone()));
    assert!(rendered.starts_with("List(Seq"));
    assert!(rendered.contains("len: 1"));

    seq.clear();
}

#[test]
fn children_visited_in_order() {
    let value: NestedValue<i32> = nested![[1, [2, 3], (4,)]];
    let kinds = value.with_children(|children| {
        children
            .iter()
            .map(Nested::node_kind)
            .collect::<Vec<_>>()
    });
    assert_eq!(
        kinds,
        vec![
            NodeKind::Leaf,
            NodeKind::Container(ContainerKind::List),
            NodeKind::Container(ContainerKind::Tuple),
        ]
    );
}
