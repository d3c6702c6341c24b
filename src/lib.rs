//! # ndfourier: radix-2 FFT, inverse FFT and reference DFT on *n*-dimensional arrays
//!
//! This library implements the discrete Fourier transform over 1D and 2D
//! complex-valued ndarray data. The fast path is a recursive radix-2
//! (Cooley-Tukey, decimation-in-time) transform with a small base case that
//! delegates to the O(n^2) direct summation; the direct summation is also
//! exposed on its own as a reference transform for arbitrary lengths.
//!
//! ndfourier provides Handler structs which hold the validated transform
//! length and the precomputed twiddle tables for every recursion level.
//! A handler is passed to the respective ndfft/nddft function alongside the
//! arrays; the transform is applied for each vector-lane along the chosen
//! axis. On top of the handler layer sit convenience functions ([`fft`],
//! [`fft2`], ...) that bundle power-of-two padding, row/column application
//! and shape bookkeeping for the common 1D, 2D and 3-channel cases.
//!
//! The fast transforms require power-of-two lengths; [`pad_to_pow2`] and
//! [`pad_to_pow2_2d`] round arbitrary inputs up by zero-filling, and
//! [`fftshift`]/[`ifftshift`] move the zero-frequency bin of a 2D spectrum
//! to the grid center and back.
//!
//! ## Parallel
//! With the `parallel` feature (default), all axis transforms ship a parallel
//! version which leverages the parallel abilities of ndarray.
//!
//! ## Example
//! 2-dimensional transform of a non-power-of-two grid, with padding and crop:
//! ```
//! use ndarray::Array2;
//! use ndfourier::{fft2, ifft2, Complex};
//!
//! let grid: Array2<Complex<f64>> = Array2::from_shape_fn((3, 5), |(i, j)| {
//!     Complex::new((i * 5 + j) as f64, 0.0)
//! });
//! let (spectrum, dims) = fft2(&grid).unwrap();
//! assert_eq!(spectrum.dim(), (4, 8));
//! assert_eq!(dims, (3, 5));
//! let restored = ifft2(&spectrum, dims).unwrap();
//! assert_eq!(restored.dim(), (3, 5));
//! ```
#![warn(missing_docs)]
extern crate ndarray;
extern crate num_complex;
use ndarray::{s, Array1, Array2, Array3, ArrayBase, Axis, Dimension, RemoveAxis, Zip};
use ndarray::{Data, DataMut};
pub use num_complex::Complex;
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
pub use num_traits::Zero;
use std::f64::consts::PI;
use thiserror::Error;

/// Element trait of all transforms, covering `f64` and `f32`.
pub trait FftNum: Float + FloatConst + FromPrimitive + NumAssign + Send + Sync + 'static {}
impl<T> FftNum for T where T: Float + FloatConst + FromPrimitive + NumAssign + Send + Sync + 'static {}

/// Result type of the fallible transform surface.
pub type Result<T> = std::result::Result<T, FftError>;

/// Errors reported by the transform surface.
///
/// Every condition is detected at the entry of the offending call; no
/// transform runs partially.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// The supplied length, shape or axis layout cannot be transformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Lengths at or below this threshold are handed to the direct summation
/// instead of recursing further.
const DIRECT_THRESHOLD: usize = 4;

/// Twiddle factor `e^{-2 pi i k / m}` of the forward transform.
///
/// Stateless; the inverse transforms use the conjugate.
#[allow(clippy::cast_precision_loss)]
fn omega<T: FftNum>(m: usize, k: usize) -> Complex<T> {
    let angle = -2.0 * PI * (k as f64) / (m as f64);
    Complex::from_polar(T::one(), T::from_f64(angle).unwrap())
}

/// Direct O(n^2) summation `fu[u] = sum_x fx[x] e^{-2 pi i x u / m}`.
fn direct_dft<T: FftNum>(fx: &[Complex<T>]) -> Vec<Complex<T>> {
    let m = fx.len();
    let mut fu = vec![Complex::zero(); m];
    for (u, value) in fu.iter_mut().enumerate() {
        let mut sum = Complex::zero();
        for (x, &f) in fx.iter().enumerate() {
            sum += f * omega::<T>(m, (x * u) % m);
        }
        *value = sum;
    }
    fu
}

/// Direct inverse summation with the positive exponent and 1/m scaling.
#[allow(clippy::cast_precision_loss)]
fn direct_idft<T: FftNum>(fu: &[Complex<T>]) -> Vec<Complex<T>> {
    let m = fu.len();
    let scale = T::from_f64(1. / m as f64).unwrap();
    let mut fx = vec![Complex::zero(); m];
    for (x, value) in fx.iter_mut().enumerate() {
        let mut sum = Complex::zero();
        for (u, &f) in fu.iter().enumerate() {
            sum += f * omega::<T>(m, (x * u) % m).conj();
        }
        *value = sum * scale;
    }
    fx
}

/// Declare procedural macro which creates functions for the individual
/// transforms, i.e. fft, ifft, dft and idft.
/// The transforms are applied for each vector-lane along the specified axis.
macro_rules! create_transform {
    (
        $(#[$meta:meta])* $i: ident, $h: ty, $p: ident
    ) => {
        $(#[$meta])*
        pub fn $i<R, S, T, D>(
            input: &mut ArrayBase<R, D>,
            output: &mut ArrayBase<S, D>,
            handler: &$h,
            axis: usize,
        ) where
            T: FftNum,
            R: Data<Elem = Complex<T>>,
            S: Data<Elem = Complex<T>> + DataMut,
            D: Dimension + RemoveAxis,
        {
            let outer_axis = input.ndim() - 1;
            if axis == outer_axis {
                Zip::from(input.rows())
                    .and(output.rows_mut())
                    .for_each(|x, mut y| {
                        handler.$p(x.as_slice().unwrap(), y.as_slice_mut().unwrap());
                    });
            } else {
                let mut outvec = Array1::zeros(output.shape()[axis]);
                input.swap_axes(outer_axis, axis);
                output.swap_axes(outer_axis, axis);
                Zip::from(input.rows())
                    .and(output.rows_mut())
                    .for_each(|x, mut y| {
                        handler.$p(&x.to_vec(), outvec.as_slice_mut().unwrap());
                        y.assign(&outvec);
                    });
                input.swap_axes(outer_axis, axis);
                output.swap_axes(outer_axis, axis);
            }
        }
    };
}

/// Similar to create_transform, but supports parallel computation.
#[cfg(feature = "parallel")]
macro_rules! create_transform_par {
    ($(#[$meta:meta])* $i: ident, $h: ty, $p: ident) => {
        $(#[$meta])*
        pub fn $i<R, S, T, D>(
            input: &mut ArrayBase<R, D>,
            output: &mut ArrayBase<S, D>,
            handler: &$h,
            axis: usize,
        ) where
            T: FftNum,
            R: Data<Elem = Complex<T>>,
            S: Data<Elem = Complex<T>> + DataMut,
            D: Dimension + RemoveAxis,
        {
            let outer_axis = input.ndim() - 1;
            if axis == outer_axis {
                Zip::from(input.rows())
                    .and(output.rows_mut())
                    .par_for_each(|x, mut y| {
                        handler.$p(x.as_slice().unwrap(), y.as_slice_mut().unwrap());
                    });
            } else {
                let n = output.shape()[axis];
                input.swap_axes(outer_axis, axis);
                output.swap_axes(outer_axis, axis);
                Zip::from(input.rows())
                    .and(output.rows_mut())
                    .par_for_each(|x, mut y| {
                        let mut outvec = Array1::zeros(n);
                        handler.$p(&x.to_vec(), outvec.as_slice_mut().unwrap());
                        y.assign(&outvec);
                    });
                input.swap_axes(outer_axis, axis);
                output.swap_axes(outer_axis, axis);
            }
        }
    };
}

/// # Radix-2 fast Fourier transform.
///
/// Holds the validated power-of-two length and the twiddle table of every
/// recursion level, precomputed once at construction. The forward lane runs
/// the Cooley-Tukey decimation-in-time recursion; lengths at or below the
/// base case are handed to the direct summation. The inverse lane reuses the
/// forward recursion via conjugation and divides by the length.
///
/// The accompanying functions are [`ndfft`]/[`ndifft`] (serial) and
/// `ndfft_par`/`ndifft_par` (parallel, feature `parallel`).
///
/// # Example
/// 2-dimensional transform along the first axis:
/// ```
/// use ndarray::Array2;
/// use ndfourier::{ndfft, Complex, FftHandler};
///
/// let (nx, ny) = (8, 4);
/// let mut data = Array2::<Complex<f64>>::zeros((nx, ny));
/// let mut vhat = Array2::<Complex<f64>>::zeros((nx, ny));
/// for (i, v) in data.iter_mut().enumerate() {
///     v.re = i as f64;
/// }
/// let handler: FftHandler<f64> = FftHandler::new(nx).unwrap();
/// ndfft(&mut data, &mut vhat, &handler, 0);
/// ```
pub struct FftHandler<T> {
    n: usize,
    // twiddles[l] holds the m factors of recursion level l (m = n >> l).
    twiddles: Vec<Vec<Complex<T>>>,
}

impl<T: FftNum> FftHandler<T> {
    /// Creates a new `FftHandler`.
    ///
    /// # Arguments
    ///
    /// * `n` - Length of array along axis of which fft will be performed.
    /// Must be a power of two.
    ///
    /// # Errors
    /// [`FftError::InvalidInput`] if `n` is zero or not a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfourier::FftHandler;
    /// let handler: FftHandler<f64> = FftHandler::new(16).unwrap();
    /// assert!(FftHandler::<f64>::new(12).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(FftError::InvalidInput(
                "input size must be greater than zero".to_string(),
            ));
        }
        if !n.is_power_of_two() {
            return Err(FftError::InvalidInput(format!(
                "input size must be a power of two, got {}",
                n
            )));
        }
        let mut twiddles = Vec::new();
        let mut m = n;
        while m > DIRECT_THRESHOLD {
            twiddles.push((0..m).map(|k| omega(m, k)).collect());
            m /= 2;
        }
        Ok(FftHandler::<T> { n, twiddles })
    }

    /// Transform length this handler was planned for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the planned length is zero. Always false for a constructed
    /// handler; present for the usual len/is_empty pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn fft_lane(&self, data: &[Complex<T>], out: &mut [Complex<T>]) {
        Self::assert_size(self.n, data.len());
        Self::assert_size(self.n, out.len());
        let fu = self.recurse(data, 0);
        out.copy_from_slice(&fu);
    }

    #[allow(clippy::cast_precision_loss)]
    fn ifft_lane(&self, data: &[Complex<T>], out: &mut [Complex<T>]) {
        Self::assert_size(self.n, data.len());
        Self::assert_size(self.n, out.len());
        let conjugated: Vec<Complex<T>> = data.iter().map(|v| v.conj()).collect();
        let fx = self.recurse(&conjugated, 0);
        let n64 = T::from_f64(1. / self.n as f64).unwrap();
        for (b, d) in out.iter_mut().zip(fx.iter()) {
            *b = d.conj() * n64;
        }
    }

    /// Even/odd split and butterfly combine. `level` indexes the twiddle
    /// table of the current sub-length.
    fn recurse(&self, fx: &[Complex<T>], level: usize) -> Vec<Complex<T>> {
        let m = fx.len();
        if m <= DIRECT_THRESHOLD {
            return direct_dft(fx);
        }
        let even: Vec<Complex<T>> = fx.iter().step_by(2).copied().collect();
        let odd: Vec<Complex<T>> = fx.iter().skip(1).step_by(2).copied().collect();
        let e = self.recurse(&even, level + 1);
        let o = self.recurse(&odd, level + 1);
        let w = &self.twiddles[level];
        let half = m / 2;
        let mut fu = vec![Complex::zero(); m];
        for k in 0..half {
            fu[k] = e[k] + w[k] * o[k];
            fu[k + half] = e[k] + w[k + half] * o[k];
        }
        fu
    }

    fn assert_size(n: usize, size: usize) {
        assert!(
            n == size,
            "Size mismatch in fft, got {} expected {}",
            size,
            n
        );
    }
}

/// # Direct discrete Fourier transform (reference).
///
/// O(n^2) summation implementing the transform definition for any positive
/// length, including non-powers of two. Serves as the base case and
/// correctness oracle of [`FftHandler`]; its inverse lane uses the directly
/// derived positive-exponent formula rather than conjugation.
///
/// The accompanying functions are [`nddft`]/[`ndidft`] (serial) and
/// `nddft_par`/`ndidft_par` (parallel, feature `parallel`).
///
/// # Example
///
/// ```
/// use ndarray::Array1;
/// use ndfourier::{nddft, Complex, DftHandler};
///
/// let mut data = Array1::<Complex<f64>>::zeros(5);
/// let mut vhat = Array1::<Complex<f64>>::zeros(5);
/// data[0] = Complex::new(1.0, 0.0);
/// let handler: DftHandler<f64> = DftHandler::new(5).unwrap();
/// nddft(&mut data, &mut vhat, &handler, 0);
/// ```
pub struct DftHandler<T> {
    n: usize,
    marker: std::marker::PhantomData<T>,
}

impl<T: FftNum> DftHandler<T> {
    /// Creates a new `DftHandler` for length `n`.
    ///
    /// # Errors
    /// [`FftError::InvalidInput`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(FftError::InvalidInput(
                "input size must be greater than zero".to_string(),
            ));
        }
        Ok(DftHandler::<T> {
            n,
            marker: std::marker::PhantomData,
        })
    }

    /// Transform length this handler was planned for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the planned length is zero. Always false for a constructed
    /// handler; present for the usual len/is_empty pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn dft_lane(&self, data: &[Complex<T>], out: &mut [Complex<T>]) {
        Self::assert_size(self.n, data.len());
        Self::assert_size(self.n, out.len());
        out.copy_from_slice(&direct_dft(data));
    }

    fn idft_lane(&self, data: &[Complex<T>], out: &mut [Complex<T>]) {
        Self::assert_size(self.n, data.len());
        Self::assert_size(self.n, out.len());
        out.copy_from_slice(&direct_idft(data));
    }

    fn assert_size(n: usize, size: usize) {
        assert!(
            n == size,
            "Size mismatch in dft, got {} expected {}",
            size,
            n
        );
    }
}

create_transform!(
    /// Radix-2 fast Fourier transform (serial).
    /// # Example
    /// ```
    /// use ndarray::Array2;
    /// use ndfourier::{ndfft, Complex, FftHandler};
    ///
    /// let (nx, ny) = (8, 4);
    /// let mut data = Array2::<Complex<f64>>::zeros((nx, ny));
    /// let mut vhat = Array2::<Complex<f64>>::zeros((nx, ny));
    /// for (i, v) in data.iter_mut().enumerate() {
    ///     v.re = i as f64;
    ///     v.im = -1.0 * i as f64;
    /// }
    /// let handler: FftHandler<f64> = FftHandler::new(ny).unwrap();
    /// ndfft(&mut data, &mut vhat, &handler, 1);
    /// ```
    ndfft,
    FftHandler<T>,
    fft_lane
);

create_transform!(
    /// Inverse radix-2 fast Fourier transform (serial).
    /// # Example
    /// ```
    /// use ndarray::Array2;
    /// use ndfourier::{ndfft, ndifft, Complex, FftHandler};
    ///
    /// let (nx, ny) = (8, 4);
    /// let mut data = Array2::<Complex<f64>>::zeros((nx, ny));
    /// let mut vhat = Array2::<Complex<f64>>::zeros((nx, ny));
    /// for (i, v) in data.iter_mut().enumerate() {
    ///     v.re = i as f64;
    ///     v.im = -1.0 * i as f64;
    /// }
    /// let handler: FftHandler<f64> = FftHandler::new(ny).unwrap();
    /// ndfft(&mut data, &mut vhat, &handler, 1);
    /// ndifft(&mut vhat, &mut data, &handler, 1);
    /// ```
    ndifft,
    FftHandler<T>,
    ifft_lane
);

create_transform!(
    /// Direct discrete Fourier transform, any length (serial).
    ///
    /// Further infos: see [`DftHandler`]
    nddft,
    DftHandler<T>,
    dft_lane
);

create_transform!(
    /// Inverse direct discrete Fourier transform, any length (serial).
    ///
    /// Further infos: see [`DftHandler`]
    ndidft,
    DftHandler<T>,
    idft_lane
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Radix-2 fast Fourier transform (parallel).
    ///
    /// Further infos: see [`ndfft`]
    ndfft_par,
    FftHandler<T>,
    fft_lane
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Inverse radix-2 fast Fourier transform (parallel).
    ///
    /// Further infos: see [`ndifft`]
    ndifft_par,
    FftHandler<T>,
    ifft_lane
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Direct discrete Fourier transform, any length (parallel).
    ///
    /// Further infos: see [`nddft`]
    nddft_par,
    DftHandler<T>,
    dft_lane
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Inverse direct discrete Fourier transform, any length (parallel).
    ///
    /// Further infos: see [`ndidft`]
    ndidft_par,
    DftHandler<T>,
    idft_lane
);

/// Forward radix-2 transform of a 1D signal.
///
/// The length must be a power of two; pad with [`pad_to_pow2`] first if it
/// is not.
///
/// # Errors
/// [`FftError::InvalidInput`] if the length is zero or not a power of two.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use ndfourier::{fft, Complex};
///
/// let signal = Array1::from(vec![Complex::new(1.0_f64, 0.0); 8]);
/// let spectrum = fft(&signal).unwrap();
/// assert!((spectrum[0].re - 8.0).abs() < 1e-12);
/// ```
pub fn fft<T: FftNum>(signal: &Array1<Complex<T>>) -> Result<Array1<Complex<T>>> {
    let handler = FftHandler::new(signal.len())?;
    let mut spectrum = Array1::zeros(signal.len());
    handler.fft_lane(&signal.to_vec(), spectrum.as_slice_mut().unwrap());
    Ok(spectrum)
}

/// Inverse radix-2 transform of a 1D spectrum.
///
/// Implemented as conjugate, forward transform, conjugate, divide by the
/// length; agrees with [`idft`] within floating-point tolerance.
///
/// # Errors
/// [`FftError::InvalidInput`] if the length is zero or not a power of two.
pub fn ifft<T: FftNum>(spectrum: &Array1<Complex<T>>) -> Result<Array1<Complex<T>>> {
    let handler = FftHandler::new(spectrum.len())?;
    let mut signal = Array1::zeros(spectrum.len());
    handler.ifft_lane(&spectrum.to_vec(), signal.as_slice_mut().unwrap());
    Ok(signal)
}

/// Forward direct transform of a 1D signal, any positive length.
///
/// # Errors
/// [`FftError::InvalidInput`] if the length is zero.
pub fn dft<T: FftNum>(signal: &Array1<Complex<T>>) -> Result<Array1<Complex<T>>> {
    let handler = DftHandler::new(signal.len())?;
    let mut spectrum = Array1::zeros(signal.len());
    handler.dft_lane(&signal.to_vec(), spectrum.as_slice_mut().unwrap());
    Ok(spectrum)
}

/// Inverse direct transform of a 1D spectrum, any positive length.
///
/// # Errors
/// [`FftError::InvalidInput`] if the length is zero.
pub fn idft<T: FftNum>(spectrum: &Array1<Complex<T>>) -> Result<Array1<Complex<T>>> {
    let handler = DftHandler::new(spectrum.len())?;
    let mut signal = Array1::zeros(spectrum.len());
    handler.idft_lane(&spectrum.to_vec(), signal.as_slice_mut().unwrap());
    Ok(signal)
}

/// Forward 2D transform with implicit power-of-two padding.
///
/// Pads both axes up to the next power of two, then applies the radix-2
/// transform to every row and then to every column. Returns the padded-shape
/// spectrum together with the original `(rows, cols)`, which [`ifft2`] needs
/// for cropping.
///
/// # Errors
/// [`FftError::InvalidInput`] if either dimension is zero.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use ndfourier::{fft2, Complex};
///
/// let grid = Array2::<Complex<f64>>::zeros((3, 5));
/// let (spectrum, dims) = fft2(&grid).unwrap();
/// assert_eq!(spectrum.dim(), (4, 8));
/// assert_eq!(dims, (3, 5));
/// ```
pub fn fft2<T: FftNum>(grid: &Array2<Complex<T>>) -> Result<(Array2<Complex<T>>, (usize, usize))> {
    let (mut padded, dims) = pad_to_pow2_2d(grid)?;
    let (rows, cols) = padded.dim();
    let handler_rows: FftHandler<T> = FftHandler::new(cols)?;
    let handler_cols: FftHandler<T> = FftHandler::new(rows)?;
    let mut work = Array2::zeros((rows, cols));
    ndfft(&mut padded, &mut work, &handler_rows, 1);
    let mut spectrum = Array2::zeros((rows, cols));
    ndfft(&mut work, &mut spectrum, &handler_cols, 0);
    Ok((spectrum, dims))
}

/// Inverse 2D transform with crop to the original shape.
///
/// Applies the inverse radix-2 transform to every row and then to every
/// column, takes the real part (the imaginary residue is floating-point
/// error of a real-valued round trip) and crops to `original` =
/// `(rows, cols)` as reported by [`fft2`].
///
/// # Errors
/// [`FftError::InvalidInput`] if the spectrum dimensions are zero or not
/// powers of two, or if `original` is zero-sized or exceeds the spectrum.
pub fn ifft2<T: FftNum>(
    spectrum: &Array2<Complex<T>>,
    original: (usize, usize),
) -> Result<Array2<T>> {
    let (rows, cols) = spectrum.dim();
    let handler_rows: FftHandler<T> = FftHandler::new(cols)?;
    let handler_cols: FftHandler<T> = FftHandler::new(rows)?;
    let (m, n) = original;
    if m == 0 || n == 0 || m > rows || n > cols {
        return Err(FftError::InvalidInput(format!(
            "original shape {}x{} does not fit spectrum shape {}x{}",
            m, n, rows, cols
        )));
    }
    let mut input = spectrum.clone();
    let mut work = Array2::zeros((rows, cols));
    ndifft(&mut input, &mut work, &handler_rows, 1);
    let mut grid = Array2::zeros((rows, cols));
    ndifft(&mut work, &mut grid, &handler_cols, 0);
    Ok(grid.slice(s![..m, ..n]).mapv(|v| v.re))
}

/// Forward 2D transform of a 3-channel grid.
///
/// Applies the whole [`fft2`] procedure independently to each of the 3
/// channel planes; there is no cross-channel coupling. Returns the
/// padded-shape spectrum and the original `(rows, cols)`.
///
/// # Errors
/// [`FftError::InvalidInput`] if the channel axis is not of size 3 or a
/// spatial dimension is zero.
pub fn fft2_rgb<T: FftNum>(
    grid: &Array3<Complex<T>>,
) -> Result<(Array3<Complex<T>>, (usize, usize))> {
    let (h, w, channels) = grid.dim();
    if channels != 3 {
        return Err(FftError::InvalidInput(format!(
            "channel axis must have size 3, got {}",
            channels
        )));
    }
    if h == 0 || w == 0 {
        return Err(FftError::InvalidInput(
            "grid dimensions must be greater than zero".to_string(),
        ));
    }
    let mut spectrum = Array3::zeros((h.next_power_of_two(), w.next_power_of_two(), 3));
    for channel in 0..3 {
        let plane = grid.index_axis(Axis(2), channel).to_owned();
        let (plane_hat, _) = fft2(&plane)?;
        spectrum.index_axis_mut(Axis(2), channel).assign(&plane_hat);
    }
    Ok((spectrum, (h, w)))
}

/// Inverse 2D transform of a 3-channel spectrum, cropped per channel.
///
/// # Errors
/// [`FftError::InvalidInput`] if the channel axis is not of size 3, the
/// spatial dimensions are not powers of two, or `original` does not fit.
pub fn ifft2_rgb<T: FftNum>(
    spectrum: &Array3<Complex<T>>,
    original: (usize, usize),
) -> Result<Array3<T>> {
    let (_, _, channels) = spectrum.dim();
    if channels != 3 {
        return Err(FftError::InvalidInput(format!(
            "channel axis must have size 3, got {}",
            channels
        )));
    }
    let (m, n) = original;
    let mut grid = Array3::zeros((m, n, 3));
    for channel in 0..3 {
        let plane = spectrum.index_axis(Axis(2), channel).to_owned();
        let restored = ifft2(&plane, original)?;
        grid.index_axis_mut(Axis(2), channel).assign(&restored);
    }
    Ok(grid)
}

/// Pads a 1D signal with zeros up to the next power-of-two length.
///
/// Returns the padded signal and the original length, which the caller needs
/// to crop after an inverse transform. A signal whose length already is a
/// power of two is returned unchanged.
///
/// # Errors
/// [`FftError::InvalidInput`] if the signal is empty.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use ndfourier::{pad_to_pow2, Complex};
///
/// let signal = Array1::from(vec![Complex::new(1.0_f64, 0.0); 5]);
/// let (padded, len) = pad_to_pow2(&signal).unwrap();
/// assert_eq!(padded.len(), 8);
/// assert_eq!(len, 5);
/// ```
pub fn pad_to_pow2<A>(signal: &Array1<A>) -> Result<(Array1<A>, usize)>
where
    A: Clone + Zero,
{
    let len = signal.len();
    if len == 0 {
        return Err(FftError::InvalidInput(
            "cannot pad an empty signal".to_string(),
        ));
    }
    let target = len.next_power_of_two();
    if target == len {
        return Ok((signal.clone(), len));
    }
    let mut padded = Array1::zeros(target);
    padded.slice_mut(s![..len]).assign(signal);
    Ok((padded, len))
}

/// Pads a 2D grid with zeros up to the next power of two per axis.
///
/// The original block lands in the top-left corner; the returned
/// `(rows, cols)` are the pre-padding dimensions. A grid whose dimensions
/// already are powers of two is returned unchanged.
///
/// # Errors
/// [`FftError::InvalidInput`] if either dimension is zero.
pub fn pad_to_pow2_2d<A>(grid: &Array2<A>) -> Result<(Array2<A>, (usize, usize))>
where
    A: Clone + Zero,
{
    let (m, n) = grid.dim();
    if m == 0 || n == 0 {
        return Err(FftError::InvalidInput(format!(
            "grid dimensions must be greater than zero, got {}x{}",
            m, n
        )));
    }
    let target = (m.next_power_of_two(), n.next_power_of_two());
    if target == (m, n) {
        return Ok((grid.clone(), (m, n)));
    }
    let mut padded = Array2::zeros(target);
    padded.slice_mut(s![..m, ..n]).assign(grid);
    Ok((padded, (m, n)))
}

/// Moves the zero-frequency bin of a 2D spectrum to the grid center.
///
/// Swaps the top-left quadrant with the bottom-right and the top-right with
/// the bottom-left. The quadrant split is the integer midpoint, so both
/// dimensions must be even for the four blocks to exchange cleanly; odd
/// dimensions are rejected.
///
/// # Errors
/// [`FftError::InvalidInput`] if either dimension is odd.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use ndfourier::{fftshift, Complex};
///
/// let mut spectrum = Array2::<Complex<f64>>::zeros((4, 6));
/// spectrum[[0, 0]] = Complex::new(1.0, 0.0);
/// let centered = fftshift(&spectrum).unwrap();
/// assert_eq!(centered[[2, 3]], Complex::new(1.0, 0.0));
/// ```
pub fn fftshift<A>(spectrum: &Array2<A>) -> Result<Array2<A>>
where
    A: Clone + Zero,
{
    let (p, q) = shift_midpoints(spectrum.dim())?;
    let mut shifted = Array2::zeros(spectrum.dim());
    shifted
        .slice_mut(s![p.., q..])
        .assign(&spectrum.slice(s![..p, ..q]));
    shifted
        .slice_mut(s![..p, ..q])
        .assign(&spectrum.slice(s![p.., q..]));
    shifted
        .slice_mut(s![..p, q..])
        .assign(&spectrum.slice(s![p.., ..q]));
    shifted
        .slice_mut(s![p.., ..q])
        .assign(&spectrum.slice(s![..p, q..]));
    Ok(shifted)
}

/// Moves a centered spectrum's zero-frequency bin back to the corner.
///
/// The explicit inverse permutation of [`fftshift`]; for even dimensions the
/// two coincide, but both directions are spelled out since the coincidence
/// does not survive other midpoint choices.
///
/// # Errors
/// [`FftError::InvalidInput`] if either dimension is odd.
pub fn ifftshift<A>(spectrum: &Array2<A>) -> Result<Array2<A>>
where
    A: Clone + Zero,
{
    let (p, q) = shift_midpoints(spectrum.dim())?;
    let mut unshifted = Array2::zeros(spectrum.dim());
    unshifted
        .slice_mut(s![..p, ..q])
        .assign(&spectrum.slice(s![p.., q..]));
    unshifted
        .slice_mut(s![p.., q..])
        .assign(&spectrum.slice(s![..p, ..q]));
    unshifted
        .slice_mut(s![p.., ..q])
        .assign(&spectrum.slice(s![..p, q..]));
    unshifted
        .slice_mut(s![..p, q..])
        .assign(&spectrum.slice(s![p.., ..q]));
    Ok(unshifted)
}

// The quadrant split point. Floor division, so only even dimensions give
// four blocks that can exchange cleanly.
fn shift_midpoints(dim: (usize, usize)) -> Result<(usize, usize)> {
    let (m, n) = dim;
    if m % 2 != 0 || n % 2 != 0 {
        return Err(FftError::InvalidInput(format!(
            "quadrant swap requires even dimensions, got {}x{}",
            m, n
        )));
    }
    Ok((m / 2, n / 2))
}
