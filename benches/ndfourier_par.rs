use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndfourier::{ndfft_par, Complex, FftHandler};
const SIZES: [usize; 3] = [128, 256, 512];

pub fn bench_fft2d_par(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft2d_par");
    for n in SIZES.iter() {
        let name = format!("Size: {}", *n);
        let mut data = Array2::<Complex<f64>>::zeros((*n, *n));
        let mut vhat = Array2::<Complex<f64>>::zeros((*n, *n));
        for (i, v) in data.iter_mut().enumerate() {
            v.re = i as f64;
        }
        let handler: FftHandler<f64> = FftHandler::new(*n).unwrap();
        group.bench_function(&name, |b| {
            b.iter(|| ndfft_par(&mut data, &mut vhat, &handler, 0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fft2d_par);
criterion_main!(benches);
