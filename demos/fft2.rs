//! Perform a 2-dimensional Fourier transform, center the spectrum for
//! display and invert back to the original grid.
//!
//! cargo run --example fft2
use ndarray::{Array2, Zip};
use ndfourier::{fft2, fftshift, ifft2, ifftshift, Complex};

fn main() {
    let grid: Array2<Complex<f64>> = Array2::from_shape_fn((3, 5), |(i, j)| {
        Complex::new((i * 5 + j) as f64, 0.0)
    });

    // Forward transform with implicit padding to (4, 8)
    let (spectrum, dims) = fft2(&grid).unwrap();
    println!("spectrum shape: {:?}, original: {:?}", spectrum.dim(), dims);

    // Center the zero-frequency bin for display, then undo it
    let centered = fftshift(&spectrum).unwrap();
    let uncentered = ifftshift(&centered).unwrap();
    Zip::from(&uncentered).and(&spectrum).for_each(|&x, &y| {
        assert_eq!(x, y);
    });

    // Inverse transform crops back to the original shape
    let restored = ifft2(&spectrum, dims).unwrap();
    Zip::from(&restored).and(&grid).for_each(|&x, &y| {
        if (x - y.re).abs() > 1e-9 {
            panic!("Large difference of values, got {} expected {}.", x, y.re)
        };
    });
    println!("restored: {}", restored);
}
