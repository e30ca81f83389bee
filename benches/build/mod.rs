use std::collections::VecDeque;

use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interprune::Tree;

use crate::Lfsr;

/// The order keys are inserted in, which fixes the shape of the unbalanced
/// tree being built.
#[derive(Debug, Clone, Copy)]
enum Order {
    /// LFSR order, giving a tree of roughly logarithmic height.
    Random,
    /// Ascending keys, degenerating into a right-leaning chain.
    Ascending,
    /// Each sub-range's midpoint before its halves, giving a perfectly
    /// balanced tree.
    Midpoints,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::Random => "random",
            Order::Ascending => "ascending",
            Order::Midpoints => "midpoints",
        }
    }

    fn keys(self, n_values: usize) -> Vec<i64> {
        match self {
            Order::Random => {
                let mut rand = Lfsr::default();
                (0..n_values).map(|_| rand.next_key()).collect()
            }
            Order::Ascending => (0..n_values as i64).collect(),
            Order::Midpoints => {
                let mut out = Vec::with_capacity(n_values);
                let mut queue = VecDeque::from([0..n_values as i64]);
                while let Some(r) = queue.pop_front() {
                    if r.is_empty() {
                        continue;
                    }
                    let mid = r.start + (r.end - r.start) / 2;
                    out.push(mid);
                    queue.push_back(r.start..mid);
                    queue.push_back(mid + 1..r.end);
                }
                out
            }
        }
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("from_keys");

    for n_values in [100, 1_000, 5_000] {
        for order in [Order::Random, Order::Ascending, Order::Midpoints] {
            bench_param(&mut g, order, n_values)
        }
    }
}

/// Measure building a tree from `n_values` keys supplied in `order`.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, order: Order, n_values: usize)
where
    M: Measurement,
{
    let keys = order.keys(n_values);

    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(
        BenchmarkId::new(format!("{}/n_values", order.name()), n_values),
        |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| Tree::from_keys(keys).expect("keys are distinct"),
                BatchSize::SmallInput,
            );
        },
    );
}
