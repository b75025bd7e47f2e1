use bstree::unbalanced::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and an ordered set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same values as the model.
fn do_ops<V>(ops: &[Op<V>], bst: &mut Tree<V>, set: &mut BTreeSet<V>)
where
    V: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                assert_eq!(bst.remove(v), set.take(v));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|v| tree.find(v).map(Node::value) == Some(v))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
    }
}

quickcheck::quickcheck! {
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
}

quickcheck::quickcheck! {
    fn both_find_variants_agree(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        probes.iter().all(|x| {
            tree.find(x).map(Node::value) == tree.find_recursively(x).map(Node::value)
        })
    }
}

quickcheck::quickcheck! {
    fn both_insert_variants_agree(xs: Vec<i8>) -> bool {
        let mut iterative = Tree::new();
        let mut recursive = Tree::new();
        for x in &xs {
            iterative.insert(*x);
            recursive.insert_recursively(*x);
        }

        iterative.bfs() == recursive.bfs()
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let in_order = tree.dfs_in_order();
        in_order.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn reinsertion_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let before: Vec<i8> = tree.dfs_in_order().into_iter().copied().collect();

        for x in &xs {
            tree.insert(*x);
        }

        tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>() == before
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let added: HashSet<_> = xs.into_iter().collect();
        let deleted: HashSet<_> = deletes.into_iter().collect();

        deleted.iter().all(|x| tree.find(x).is_none())
            && added.difference(&deleted).all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            tree.insert(*x);
            set.insert(*x);
        }

        let expected: Vec<&i8> = set.iter().collect();
        let mut pre: Vec<&i8> = tree.dfs_pre_order();
        let mut post: Vec<&i8> = tree.dfs_post_order();
        let mut level: Vec<&i8> = tree.bfs();
        pre.sort();
        post.sort();
        level.sort();

        tree.dfs_in_order() == expected && pre == expected && post == expected && level == expected
    }
}
