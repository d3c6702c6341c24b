use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndfourier::{nddft, ndfft, Complex, DftHandler, FftHandler};
const SIZES: [usize; 3] = [128, 256, 512];

pub fn bench_fft2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft2d");
    for n in SIZES.iter() {
        let name = format!("Size: {}", *n);
        let mut data = Array2::<Complex<f64>>::zeros((*n, *n));
        let mut vhat = Array2::<Complex<f64>>::zeros((*n, *n));
        for (i, v) in data.iter_mut().enumerate() {
            v.re = i as f64;
        }
        let handler: FftHandler<f64> = FftHandler::new(*n).unwrap();
        group.bench_function(&name, |b| {
            b.iter(|| ndfft(&mut data, &mut vhat, &handler, 0))
        });
    }
    group.finish();
}

pub fn bench_dft2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft2d");
    for n in [32, 64, 128].iter() {
        let name = format!("Size: {}", *n);
        let mut data = Array2::<Complex<f64>>::zeros((*n, *n));
        let mut vhat = Array2::<Complex<f64>>::zeros((*n, *n));
        for (i, v) in data.iter_mut().enumerate() {
            v.re = i as f64;
        }
        let handler: DftHandler<f64> = DftHandler::new(*n).unwrap();
        group.bench_function(&name, |b| {
            b.iter(|| nddft(&mut data, &mut vhat, &handler, 0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fft2d, bench_dft2d);
criterion_main!(benches);
