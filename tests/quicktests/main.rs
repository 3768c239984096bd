//! Property tests shared by every BST flavor. Each flavor gets its own module generated by
//! `tree_properties!` so failures name the tree they came from.

/// Generates a module of quickcheck properties for the given `i8` tree type.
macro_rules! tree_properties {
    ($name:ident, $tree:ty) => {
        mod $name {
            use std::collections::BTreeSet;

            use bst::Order;

            type Tree = $tree;

            fn tree_of(xs: &[i8]) -> Tree {
                let mut tree = Tree::new();
                for x in xs {
                    tree.insert(*x);
                }

                tree
            }

            /// Copies every traversal out of the tree so it can be compared after a mutation.
            fn snapshot(tree: &Tree) -> Vec<Vec<i8>> {
                Order::ALL
                    .into_iter()
                    .map(|order| tree.traverse(order).into_iter().copied().collect())
                    .collect()
            }

            quickcheck::quickcheck! {
                fn in_order_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                    let mut tree = tree_of(&xs);
                    for delete in &deletes {
                        tree.delete(delete);
                    }

                    let in_order = tree.in_order();
                    in_order.windows(2).all(|pair| pair[0] < pair[1])
                }
            }

            quickcheck::quickcheck! {
                fn search_finds_exactly_the_survivors(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                    let mut tree = tree_of(&xs);
                    for delete in &deletes {
                        tree.delete(delete);
                    }

                    let deleted: BTreeSet<_> = deletes.iter().collect();
                    let survivors: BTreeSet<_> =
                        xs.iter().filter(|x| !deleted.contains(x)).collect();

                    survivors.iter().all(|x| tree.search(x))
                        && deleted.iter().all(|x| !tree.search(x))
                        && tree.len() == survivors.len()
                }
            }

            quickcheck::quickcheck! {
                fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                    let tree = tree_of(&xs);
                    let added: BTreeSet<_> = xs.into_iter().collect();
                    let nots: BTreeSet<_> = nots.into_iter().collect();
                    let mut nots = nots.difference(&added);

                    nots.all(|x| !tree.search(x))
                }
            }

            quickcheck::quickcheck! {
                fn duplicate_insert_is_ignored(xs: Vec<i8>, x: i8) -> bool {
                    let mut tree = tree_of(&xs);
                    tree.insert(x);
                    let before = snapshot(&tree);
                    tree.insert(x);

                    snapshot(&tree) == before
                }
            }

            quickcheck::quickcheck! {
                fn delete_missing_is_ignored(xs: Vec<i8>, x: i8) -> bool {
                    let mut tree = tree_of(&xs);
                    if tree.search(&x) {
                        tree.delete(&x);
                    }
                    let before = snapshot(&tree);
                    tree.delete(&x);

                    snapshot(&tree) == before
                }
            }

            quickcheck::quickcheck! {
                fn traversals_hold_the_same_elements(xs: Vec<i8>) -> bool {
                    let tree = tree_of(&xs);
                    let sorted: Vec<i8> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

                    let in_order: Vec<i8> = tree.in_order().into_iter().copied().collect();
                    let permutations = snapshot(&tree).into_iter().all(|mut listing| {
                        listing.sort_unstable();
                        listing == sorted
                    });

                    permutations && in_order == sorted
                }
            }

            quickcheck::quickcheck! {
                fn min_and_max_bound_the_tree(xs: Vec<i8>) -> bool {
                    let tree = tree_of(&xs);
                    let in_order = tree.in_order();

                    tree.min() == in_order.first().copied() && tree.max() == in_order.last().copied()
                }
            }
        }
    };
}

tree_properties!(recursive, bst::recursive::Tree<i8>);
tree_properties!(iterative, bst::iterative::Tree<i8>);
