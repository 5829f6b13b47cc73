use ds_classics::avl::Tree;

/// Walks the tree through its public accessors, checking cached heights and the AVL balance at
/// every node. Returns the height of `tree`.
fn check_balanced<K>(tree: &Tree<K>) -> usize {
    let Some(node) = tree.root() else {
        return 0;
    };
    let left_height = check_balanced(node.left());
    let right_height = check_balanced(node.right());

    assert_eq!(node.height(), left_height.max(right_height) + 1);
    assert!((-1..=1).contains(&tree.balance_factor()));
    node.height()
}

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x))
}

quickcheck::quickcheck! {
    fn balanced_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in xs {
            tree = tree.insert(x);
            check_balanced(&tree);
        }
        true
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_input(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut sorted = xs;
        sorted.sort_unstable();

        tree.in_order().copied().eq(sorted)
    }
}

quickcheck::quickcheck! {
    fn height_is_logarithmic(xs: Vec<u16>) -> bool {
        let n = xs.len();
        let tree = xs.into_iter().fold(Tree::new(), |tree, x| tree.insert(x));

        tree.height() as f64 <= 1.45 * ((n + 2) as f64).log2()
    }
}

quickcheck::quickcheck! {
    fn contains_inserted_only(xs: Vec<i8>, probe: i8) -> bool {
        let tree = build(&xs);
        tree.contains(&probe) == xs.contains(&probe) && tree.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn pre_order_visits_every_key(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut pre: Vec<_> = tree.pre_order().copied().collect();
        let mut xs = xs;
        pre.sort_unstable();
        xs.sort_unstable();

        pre == xs && tree.pre_order().next() == tree.root().map(|n| n.key())
    }
}
