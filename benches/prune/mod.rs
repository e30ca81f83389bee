use std::hint::black_box;

use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interprune::Tree;

use crate::{centred_interval, random_tree};

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("delete_interval");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let t = random_tree(n_values);

    bench_point(n_values, g, &t);
    bench_narrow(n_values, g, &t);
    bench_half(n_values, g, &t);
    bench_all(n_values, g, &t);
}

macro_rules! prune_bench {
    (
        $name:ident,
        $fraction:expr
    ) => {
        paste::paste! {
            /// Measure deleting a centred interval spanning the given fraction
            /// of the key space from a clone of `t`.
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };
                let interval = centred_interval($fraction);

                g.throughput(Throughput::Elements(n_values as _));
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || t.clone(),
                        |mut t| {
                            black_box(t.delete_interval(&interval).expect("valid tree"));
                            t
                        },
                        BatchSize::LargeInput,
                    );
                });
            }
        }
    };
}

prune_bench!(point, 0.0);
prune_bench!(narrow, 0.01);
prune_bench!(half, 0.5);
prune_bench!(all, 1.0);
