//! Perform a 1-dimensional Fourier transform of a non-power-of-two signal.
//!
//! cargo run --example fft1
use ndarray::array;
use ndfourier::{fft, ifft, pad_to_pow2, Complex};

fn main() {
    let signal = array![1., 2., 3., 4., 5.].mapv(|x| Complex::new(x, 0.));
    let (padded, len) = pad_to_pow2(&signal).unwrap();
    let spectrum = fft(&padded).unwrap();
    let restored = ifft(&spectrum).unwrap();
    println!("original length: {}", len);
    println!("spectrum: {}", spectrum);
    println!("restored: {}", restored.slice(ndarray::s![..len]));
}
