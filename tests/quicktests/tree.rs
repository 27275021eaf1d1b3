use observed_bst::{TraversalOrder, Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we hold the same values in the same order.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
    ops.iter().all(|op| match op {
        Op::Insert(x) => {
            bst.insert(*x);
            let at = model.partition_point(|v| v <= x);
            model.insert(at, *x);
            true
        }
        Op::Remove(x) => {
            let expected = model.binary_search(x).map(|at| model.remove(at)).is_ok();
            bst.remove(x) == expected
        }
        Op::Contains(x) => bst.contains(x) == model.binary_search(x).is_ok(),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.len() == model.len()
        && tree.iter().eq(model.iter())
        && tree.min().ok() == model.first()
        && tree.max().ok() == model.last()
}

#[quickcheck]
fn count_matches_traversals(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut Vec::new());

    [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
    ]
    .into_iter()
    .all(|order| tree.traverse(order).count() == tree.len())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn round_trip(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before = tree.len();

    tree.insert(x);
    let inserted = tree.contains(&x);
    let removed_once = tree.remove(&x);

    inserted && removed_once && tree.len() == before
}

#[quickcheck]
fn reversed_comparator_iterates_descending(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_comparator(|a: &i16, b: &i16| b.cmp(a));
    tree.extend(xs.iter().copied());

    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));

    tree.iter().eq(expected.iter())
        && tree.min().ok() == expected.first()
        && tree.max().ok() == expected.last()
}

#[quickcheck]
fn min_max_empty_only_when_empty(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let empty = xs.is_empty();

    (tree.min() == Err(TreeError::Empty)) == empty && (tree.max() == Err(TreeError::Empty)) == empty
}

#[quickcheck]
fn notifications_match_changes(ops: Vec<Op<i8>>) -> bool {
    let added = Rc::new(RefCell::new(Vec::new()));
    let removed = Rc::new(RefCell::new(Vec::new()));
    let mut tree: Tree<i8> = Tree::new();

    let log = Rc::clone(&added);
    tree.on_added(move |v, _| log.borrow_mut().push(*v));
    let log = Rc::clone(&removed);
    tree.on_removed(move |v, _| log.borrow_mut().push(*v));

    let mut expected_added = Vec::new();
    let mut expected_removed = Vec::new();
    for op in &ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                expected_added.push(*x);
            }
            Op::Remove(x) => {
                if tree.remove(x) {
                    expected_removed.push(*x);
                }
            }
            Op::Contains(x) => {
                tree.contains(x);
            }
        }
    }

    *added.borrow() == expected_added && *removed.borrow() == expected_removed
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut cloned = tree.clone();
    cloned.insert(x);

    let pre_order = |t: &Tree<i8>| t.traverse(TraversalOrder::PreOrder).copied().collect::<Vec<_>>();
    let mut without_x = pre_order(&cloned);
    if let Some(at) = without_x.iter().rposition(|v| *v == x) {
        without_x.remove(at);
    }

    cloned.len() == tree.len() + 1 && without_x == pre_order(&tree)
}

#[quickcheck]
fn into_iter_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.into_iter().eq(sorted)
}
