use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ds_classics::avl::Tree;
use ds_classics::binary_search::search;
use ds_classics::linked_list::DoublyLinkedList;
use ds_classics::trie::Trie;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Keys inserted in ascending order. This is the worst case for a tree that doesn't balance
/// itself.
fn ascending_keys(num_levels: u32) -> Vec<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Keys ordered so that, without any self-balancing, the resultant tree would still be
/// balanced: each range's middle comes before either half.
fn balanced_keys(num_levels: u32) -> Vec<i32> {
    fn fill(xs: &[i32], out: &mut Vec<i32>) {
        if !xs.is_empty() {
            let mid = xs.len() / 2;
            out.push(xs[mid]);
            fill(&xs[..mid], out);
            fill(&xs[mid + 1..], out);
        }
    }

    let mut out = Vec::new();
    fill(&ascending_keys(num_levels), &mut out);
    out
}

fn build(keys: &[i32]) -> Tree<i32> {
    keys.iter().fold(Tree::new(), |tree, key| tree.insert(*key))
}

/// Helper to bench a function on an AVL tree.
/// It creates a group for the given name and closure and runs it for trees of various sizes
/// built from ascending and balanced key orders.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(Tree<i32>, i32) -> Tree<i32>) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_key = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("ascending", build(&ascending_keys(num_levels))),
            ("balanced", build(&balanced_keys(num_levels))),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_key);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        // Insertion consumes the tree, so clone outside the timed section.
                        let tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        let tree = f(tree, black_box(largest_key));
                        time += instant.elapsed();
                        drop(black_box(tree));
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

fn avl_benchmarks(c: &mut Criterion) {
    bench_helper(c, "avl-insert", |tree, i| tree.insert(i + 1));
    bench_helper(c, "avl-insert-duplicate", |tree, i| tree.insert(i));
    bench_helper(c, "avl-contains", |tree, i| {
        black_box(tree.contains(&i));
        tree
    });
    bench_helper(c, "avl-contains-miss", |tree, i| {
        black_box(tree.contains(&(i + 1)));
        tree
    });
}

fn binary_search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary-search");

    for num_levels in [3, 7, 11, 15] {
        let sorted = ascending_keys(num_levels);
        let largest = *sorted.last().unwrap_or(&0);

        group.bench_with_input(BenchmarkId::new("hit", largest), &sorted, |b, sorted| {
            b.iter(|| search(sorted, black_box(&largest)))
        });
        group.bench_with_input(BenchmarkId::new("miss", largest), &sorted, |b, sorted| {
            b.iter(|| search(sorted, black_box(&(largest + 1))))
        });
    }

    group.finish();
}

fn linked_list_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked-list");

    for len in [8, 128, 2048] {
        group.bench_with_input(BenchmarkId::new("append", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for x in 0..len {
                    list.append(x);
                }
                list
            })
        });
        group.bench_with_input(BenchmarkId::new("prepend", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for x in 0..len {
                    list.prepend(x);
                }
                list
            })
        });
    }

    group.finish();
}

fn trie_benchmarks(c: &mut Criterion) {
    let words: Vec<String> = (0..10_000).map(|x: u32| format!("{x:x}word")).collect();
    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word);
    }

    c.bench_function("trie-search", |b| {
        b.iter(|| {
            for word in &words {
                black_box(trie.search(word));
            }
        })
    });
    c.bench_function("trie-starts-with-miss", |b| {
        b.iter(|| black_box(trie.starts_with(black_box("zzz"))))
    });
}

criterion_group!(
    benches,
    avl_benchmarks,
    binary_search_benchmarks,
    linked_list_benchmarks,
    trie_benchmarks
);
criterion_main!(benches);
