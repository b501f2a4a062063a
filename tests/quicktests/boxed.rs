use bst::boxed::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removals we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.traverse_inorder().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for removal in &removals {
        tree.remove(removal);
    }

    let mut still_present = xs;
    for removal in &removals {
        // We may have inserted the same value multiple times - drop each one.
        still_present.retain(|x| x != removal);
    }

    removals.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn inorder_is_sorted_without_duplicates(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let expected: BTreeSet<_> = xs.iter().collect();
    tree.traverse_inorder() == expected.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn remove_missing_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = Tree::new();
    for x in xs.iter().filter(|x| **x != missing) {
        tree.insert(*x);
    }
    let before: Vec<i8> = tree.traverse_inorder().into_iter().copied().collect();

    tree.remove(&missing).is_none()
        && tree.traverse_inorder().into_iter().copied().eq(before)
}

#[quickcheck]
fn clear_twice_leaves_empty_tree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.clear();
    let once = tree.is_empty() && tree.traverse_inorder().is_empty();
    tree.clear();

    once && tree.is_empty() && tree.traverse_inorder().is_empty() && tree.len() == 0
}

#[quickcheck]
fn written_lines_match_traversal(xs: Vec<u16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut out = Vec::new();
    tree.write_inorder(&mut out).unwrap();
    let written = String::from_utf8(out).unwrap();

    written
        .lines()
        .map(|line| line.parse::<u16>().unwrap())
        .eq(tree.traverse_inorder().into_iter().copied())
}
