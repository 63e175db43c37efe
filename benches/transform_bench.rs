use criterion::{black_box, criterion_group, Criterion};
use logit_visualizer::format::format_default;
use logit_visualizer::transform::{compute_with, Normalization};
use logit_visualizer::{Entry, Mode};

const SIZES: &[usize] = &[2, 3, 10];

fn entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let value = (i as f64).mul_add(1.7, -8.0);
            Entry::new(i.to_string(), format!("Class {}", i + 1), value, "#6366f1")
        })
        .collect()
}

fn benchmark_transforms(c: &mut Criterion) {
    for &size in SIZES {
        let input = entries(size);
        let mut group = c.benchmark_group(format!("{size} entries"));

        group.bench_function("softmax/literal", |b| {
            b.iter(|| compute_with(black_box(&input), 0.8, Mode::Softmax, Normalization::Literal));
        });

        group.bench_function("softmax/max_shift", |b| {
            b.iter(|| compute_with(black_box(&input), 0.8, Mode::Softmax, Normalization::MaxShift));
        });

        group.bench_function("sigmoid", |b| {
            b.iter(|| compute_with(black_box(&input), 0.8, Mode::Sigmoid, Normalization::Literal));
        });

        group.finish();
    }

    c.bench_function("format_number", |b| {
        b.iter(|| format_default(black_box(0.000_375)));
    });
}

criterion_group!(benches, benchmark_transforms);

fn main() {
    let mut criterion = Criterion::default();
    let args: Vec<String> = std::env::args().collect();
    let has_ide_flags = args.iter().any(|arg| {
        arg.starts_with("--format")
            || arg.starts_with("-Z")
            || arg == "--show-output"
            || arg == "--no-fail-fast"
    });
    if !has_ide_flags {
        criterion = criterion.configure_from_args();
    }
    benchmark_transforms(&mut criterion);
}
