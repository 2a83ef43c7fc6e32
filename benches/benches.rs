use criterion::*;
use rand::{prelude::*, rngs::SmallRng};
use subset_walker::{Strategy, SubsetEnumerator};

criterion_main!(benches);
criterion_group!(benches, power_set, power_set_head, strings);

fn power_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("PowerSet");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[u32] = &[4, 8, 10, 12, 14];
    let mut rng = SmallRng::seed_from_u64(3407);
    for n in SIZES.iter() {
        let mut whole: Vec<u32> = (0..*n).collect();
        whole.shuffle(&mut rng);
        for strategy in Strategy::ALL {
            let e = SubsetEnumerator::new(whole.iter().copied(), strategy).unwrap();
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), n, |b, _| {
                b.iter(|| {
                    e.iter().for_each(|ss| {
                        black_box(ss);
                    });
                })
            });
        }
    }
    group.finish();
}

fn power_set_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("PowerSetHead");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[u32] = &[10, 20, 40, 80];
    for n in SIZES.iter() {
        let whole: Vec<u32> = (0..*n).collect();
        for strategy in Strategy::ALL {
            let e = SubsetEnumerator::new(whole.iter().copied(), strategy).unwrap();
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), n, |b, _| {
                b.iter(|| {
                    let mut subsets = e.iter();
                    for _ in 0..64 {
                        black_box(subsets.next());
                    }
                })
            });
        }
    }
    group.finish();
}

fn strings(c: &mut Criterion) {
    const N: usize = 12;
    let mut group = c.benchmark_group("Strings".to_string());
    let mut rng = SmallRng::seed_from_u64(3407);
    let tokens: Vec<String> = (0..N)
        .map(|_| {
            let len = rng.random_range(1..8);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();
    for strategy in Strategy::ALL {
        let e = SubsetEnumerator::new(tokens.iter(), strategy).unwrap();
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                e.iter().for_each(|ss| {
                    black_box(ss);
                });
            })
        });
    }
    group.finish();
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
