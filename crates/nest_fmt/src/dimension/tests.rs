use super::*;
use nest_ir::{nested, NestedValue};
use pretty_assertions::assert_eq;

#[test]
fn leaf_root_has_no_dimension() {
    assert_eq!(ndim(&NestedValue::Leaf(5)), Ok(0));
}

#[test]
fn empty_list_is_one_dimensional() {
    assert_eq!(ndim(&NestedValue::<i32>::list(Vec::new())), Ok(1));
}

#[test]
fn uniform_nesting() {
    assert_eq!(ndim(&nested![[1, 2, 3]]), Ok(1));
    assert_eq!(ndim(&nested![[[1, 2], [3, 4]]]), Ok(2));
    assert_eq!(ndim(&nested![[[[1, 2], [3, 4]], [[5, 6], [7, 8]]]]), Ok(3));
}

#[test]
fn ragged_nesting_takes_deepest_branch() {
    assert_eq!(ndim(&nested![[[1, 2], [[3, 4], [5, 6]]]]), Ok(3));
    assert_eq!(ndim(&nested![[1, [2, [3, [4]]]]]), Ok(4));
}

#[test]
fn tuples_do_not_extend_dimension() {
    assert_eq!(ndim(&nested![[(1, 2), 3]]), Ok(1));
    assert_eq!(ndim(&nested![[([[1]], 2)]]), Ok(1));
}

#[test]
fn tuple_document_counts_its_own_lists() {
    assert_eq!(ndim(&nested![([1, 2], [3, 4])]), Ok(2));
    assert_eq!(ndim(&nested![(1, 2)]), Ok(1));
}

#[test]
fn list_cycle_is_rejected_with_path() {
    let root = NestedValue::leaves([1]);
    let Some(seq) = root.seq() else {
        panic!("expected a list");
    };
    let inner = NestedValue::leaves([2]);
    seq.push(inner.clone());
    if let Some(inner_seq) = inner.seq() {
        inner_seq.push(root.clone());
    }

    let err = ndim(&root);
    seq.clear();
    assert_eq!(
        err,
        Err(MalformedInput::new(NodePath::from([1, 1]), MalformedReason::Cycle))
    );
}

#[test]
fn cycle_through_tuple_is_not_measured() {
    let root = NestedValue::<i32>::list(Vec::new());
    let tuple = NestedValue::tuple([root.clone()]);
    let Some(seq) = root.seq() else {
        panic!("expected a list");
    };
    seq.push(tuple);

    let dim = ndim(&root);
    seq.clear();
    assert_eq!(dim, Ok(1));
}

#[test]
fn shared_sublist_is_not_a_cycle() {
    let shared = nested![[1, 2]];
    let root = NestedValue::list([shared.clone(), shared]);
    assert_eq!(ndim(&root), Ok(2));
}

#[test]
fn calculator_reports_paths_below_its_prefix() {
    let root = NestedValue::<i32>::list(Vec::new());
    let Some(seq) = root.seq() else {
        panic!("expected a list");
    };
    seq.push(root.clone());

    let err = DimensionCalculator::at(NodePath::from([4])).measure(&root);
    seq.clear();
    assert_eq!(
        err,
        Err(MalformedInput::new(NodePath::from([4, 0]), MalformedReason::Cycle))
    );
}

#[test]
fn json_objects_are_rejected() {
    let value = serde_json::json!([[1], [2, {"a": 3}]]);
    assert_eq!(
        ndim(&value),
        Err(MalformedInput::new(
            NodePath::from([1, 1]),
            MalformedReason::Unsupported("mapping")
        ))
    );
}

#[test]
fn deep_lists_do_not_overflow() {
    let mut value = NestedValue::Leaf(0);
    for _ in 0..100_000 {
        value = NestedValue::list([value]);
    }
    assert_eq!(ndim(&value), Ok(100_000));
}
