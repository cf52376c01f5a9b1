//! Benchmarks for peak detection and smoothing.
//!
//! Signals are sized like the diffraction patterns the toolkit was built
//! for (a few thousand samples per scan).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use peakfit_rs::signal::{find_peak_indices, Extrema, Kernel1d};

/// A synthetic pattern: a handful of bumps on a slowly varying background.
fn synthetic_pattern(len: usize) -> Vec<f64> {
    let bump = |x: f64, center: f64, sigma: f64, amplitude: f64| {
        let arg = (x - center) / sigma;
        amplitude * (-0.5 * arg * arg).exp()
    };

    (0..len)
        .map(|i| {
            let x = i as f64 / len as f64 * 60.0;
            bump(x, 12.0, 0.4, 100.0)
                + bump(x, 24.0, 0.5, 60.0)
                + bump(x, 37.0, 0.5, 45.0)
                + bump(x, 51.0, 0.6, 30.0)
                + 2.0 * (0.7 * x).sin()
        })
        .collect()
}

fn bench_find_peak_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_peak_indices");

    for len in [500, 2000, 8000] {
        let signal = synthetic_pattern(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &signal, |b, signal| {
            b.iter(|| find_peak_indices(black_box(signal), 0.25, 0.0, Extrema::Maxima, false))
        });
    }

    group.finish();
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");
    let signal = synthetic_pattern(2000);

    group.bench_function("boxcar_n5", |b| {
        let kernel = Kernel1d::boxcar(5);
        b.iter(|| kernel.apply(black_box(&signal)))
    });
    group.bench_function("gaussian_sigma3", |b| {
        let kernel = Kernel1d::gaussian(3.0);
        b.iter(|| kernel.apply(black_box(&signal)))
    });

    group.finish();
}

criterion_group!(benches, bench_find_peak_indices, bench_convolution);
criterion_main!(benches);
