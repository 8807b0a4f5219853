/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

//! Cohen-Daubechies-Feauveau 9/7 discrete wavelet transform via the lifting scheme.
//!
//! Provides single level 1D transforms over strided signals and in-place multiresolution
//! 2D transforms over strided planes, in single and double precision.
//!
//! ```
//! use liftdwt::{DecompositionOptions, Extent, LiftDwt, MultiResolutionExecutor, StridedPlane};
//!
//! let executor = LiftDwt::make_cdf97_f64();
//! let outer = Extent::new(8, 6);
//! let mut pixels = vec![1.0f64; outer.width * outer.height];
//! let mut plane = StridedPlane::row_major(&mut pixels, outer).unwrap();
//! let levels = executor
//!     .forward_2d(&mut plane, outer, DecompositionOptions::default())
//!     .unwrap();
//! assert_eq!(levels, 3);
//! executor
//!     .inverse_2d(&mut plane, outer, DecompositionOptions::default())
//!     .unwrap();
//! assert!(pixels.iter().all(|&v| (v - 1.0).abs() < 1e-6));
//! ```

mod accel;
mod cdf97;
mod config;
mod dsp;
mod err;
mod factory;
mod image;
mod multires;
mod padding;
mod plane;
mod sample;
mod strided;
mod util;

use crate::cdf97::Cdf97;
pub use accel::{
    AcceleratorFault, BankAccelerator, BankedLiftingStep, LiftingStep, ScalarLiftingStep,
};
pub use cdf97::{forward_1d, inverse_1d};
pub use config::{
    ACCELERATION_ENV, Acceleration, DwtConfig, THREADS_ENV, default_threads,
};
pub use dsp::{EDKDSP_BANK_SIZE, EmulatedDsp};
pub use err::DwtError;
pub use image::{Image, test_pattern_value};
pub use multires::{DecompositionOptions, level_limit, resolve_levels};
pub use padding::{zero_pad_forward_bands, zero_pad_inverse_band};
pub use plane::{Extent, StridedPlane};
pub use sample::{LiftingSample, samples_match};
pub use strided::{StridedSlice, StridedSliceMut};
use std::sync::Arc;
pub use util::{ceil_div, ceil_div_pow2, ceil_log2, high_length, low_length, pow2_ceil_log2};

/// Trait for performing the **forward discrete wavelet transform (DWT)**.
///
/// # Type Parameters
/// - `T`: The numeric type of the input signal (e.g., `f32` or `f64`).
pub trait DwtForwardExecutor<T> {
    /// Executes the forward DWT on a 1D input signal.
    ///
    /// # Parameters
    /// - `input`: Slice of the input signal.
    /// - `approx`: Mutable slice to store the approximation (low-pass) coefficients,
    ///   exactly `ceil(N/2)` long.
    /// - `details`: Mutable slice to store the detail (high-pass) coefficients,
    ///   exactly `floor(N/2)` long.
    ///
    /// # Returns
    /// `Ok(())` on success, or a `DwtError` if sizes mismatch or allocation fails.
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), DwtError>;

    /// Strided form of [`DwtForwardExecutor::execute_forward`] with a caller owned scratch
    /// of at least `N` samples.
    fn execute_forward_strided(
        &self,
        input: &StridedSlice<'_, T>,
        approx: &mut StridedSliceMut<'_, T>,
        details: &mut StridedSliceMut<'_, T>,
        scratch: &mut [T],
    ) -> Result<(), DwtError>;
}

/// Trait for performing the **inverse discrete wavelet transform (IDWT)**.
///
/// # Type Parameters
/// - `T`: The numeric type of the coefficients (e.g., `f32` or `f64`).
pub trait DwtInverseExecutor<T> {
    /// Reconstructs a signal from approximation and detail coefficients.
    ///
    /// # Parameters
    /// - `approx`: Slice of approximation (low-pass) coefficients.
    /// - `details`: Slice of detail (high-pass) coefficients.
    /// - `output`: Mutable slice to store the reconstructed signal.
    ///
    /// # Returns
    /// `Ok(())` on success, or a `DwtError` if sizes mismatch or allocation fails.
    fn execute_inverse(
        &self,
        approx: &[T],
        details: &[T],
        output: &mut [T],
    ) -> Result<(), DwtError>;

    /// Strided form of [`DwtInverseExecutor::execute_inverse`], the output length is the
    /// signal length.
    fn execute_inverse_strided(
        &self,
        approx: &StridedSlice<'_, T>,
        details: &StridedSlice<'_, T>,
        output: &mut StridedSliceMut<'_, T>,
        scratch: &mut [T],
    ) -> Result<(), DwtError>;
}

/// In-place multiresolution transform of a 2D plane.
///
/// The transform runs on the `inner` region of the plane, the remaining part of the
/// outer extent is the padding domain.
pub trait MultiResolutionExecutor<T> {
    /// Decomposes the plane and returns the number of levels actually run.
    ///
    /// Each level transforms every row and then every column of the current
    /// approximation quadrant, low band first, high band at half the outer extent.
    fn forward_2d(
        &self,
        plane: &mut StridedPlane<'_, T>,
        inner: Extent,
        options: DecompositionOptions,
    ) -> Result<usize, DwtError>;

    /// Reconstructs a plane decomposed by [`MultiResolutionExecutor::forward_2d`] with the
    /// same extents and options.
    fn inverse_2d(
        &self,
        plane: &mut StridedPlane<'_, T>,
        inner: Extent,
        options: DecompositionOptions,
    ) -> Result<(), DwtError>;
}

/// Represents the result of a **single-level DWT**.
#[derive(Debug, Clone, PartialEq)]
pub struct Dwt<T> {
    /// Approximation (low-pass) coefficients of the signal.
    pub approximations: Vec<T>,
    /// Detail (high-pass) coefficients of the signal.
    pub details: Vec<T>,
}

/// Full CDF 9/7 executor, 1D and 2D.
pub trait Cdf97Executor<T>:
    DwtForwardExecutor<T> + DwtInverseExecutor<T> + MultiResolutionExecutor<T> + Send + Sync
{
    /// Performs a single level DWT of the signal.
    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, DwtError>;
    /// Reconstructs the signal of `approximations.len() + details.len()` samples.
    ///
    /// # Returns
    /// - `Err(DwtError)` if the band lengths do not come from one signal.
    fn idwt(&self, dwt: &Dwt<T>) -> Result<Vec<T>, DwtError>;
}

impl<T: LiftingSample> Cdf97Executor<T> for Cdf97<T> {
    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, DwtError> {
        self.dwt_impl(signal)
    }

    fn idwt(&self, dwt: &Dwt<T>) -> Result<Vec<T>, DwtError> {
        self.idwt_impl(dwt)
    }
}

/// Factory for CDF 9/7 executors.
pub struct LiftDwt {}

impl LiftDwt {
    /// Create a forward and inverse DWT executor for the CDF 9/7 wavelet using `f32`.
    ///
    /// Uses [`DwtConfig::default`]: scalar lifting and one worker per CPU. The worker
    /// pool is built by the first executor and shared by every later one.
    pub fn make_cdf97_f32() -> Arc<dyn Cdf97Executor<f32> + Send + Sync> {
        Self::make_cdf97_f32_with(DwtConfig::default())
    }

    /// Create a forward and inverse DWT executor for the CDF 9/7 wavelet using `f64`.
    ///
    /// Uses [`DwtConfig::default`]: scalar lifting and one worker per CPU. The worker
    /// pool is built by the first executor and shared by every later one.
    pub fn make_cdf97_f64() -> Arc<dyn Cdf97Executor<f64> + Send + Sync> {
        Self::make_cdf97_f64_with(DwtConfig::default())
    }

    /// `f32` executor with explicit configuration.
    pub fn make_cdf97_f32_with(config: DwtConfig) -> Arc<dyn Cdf97Executor<f32> + Send + Sync> {
        Arc::new(Cdf97::<f32>::new(config))
    }

    /// `f64` executor with explicit configuration, banked acceleration falls back to scalar.
    pub fn make_cdf97_f64_with(config: DwtConfig) -> Arc<dyn Cdf97Executor<f64> + Send + Sync> {
        Arc::new(Cdf97::<f64>::new(config))
    }
}

/// Crate name and version, e.g. `liftdwt 0.1.0`.
pub fn version() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(version().starts_with("liftdwt "));
        assert!(version().ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_image_round_trip_f32() {
        let executor = LiftDwt::make_cdf97_f32_with(DwtConfig::default().with_threads(2));
        let outer = Extent::new(64, 48);
        let inner = Extent::new(61, 45);
        let mut image = Image::<f32>::new(outer).unwrap();
        image.fill_test_pattern(inner, 1).unwrap();
        let original = image.clone();
        let options = DecompositionOptions::default()
            .with_decompose_to_pixel(true)
            .with_zero_padding(true);

        let levels = executor
            .forward_2d(&mut image.as_plane_mut().unwrap(), inner, options)
            .unwrap();
        assert_eq!(levels, 6);
        assert!(!image.compare(&original, inner).unwrap());
        executor
            .inverse_2d(&mut image.as_plane_mut().unwrap(), inner, options)
            .unwrap();
        assert!(image.compare(&original, inner).unwrap());
    }

    #[test]
    fn test_image_round_trip_f64() {
        let executor = LiftDwt::make_cdf97_f64_with(
            DwtConfig::default()
                .with_acceleration(Acceleration::Banked)
                .with_threads(1),
        );
        let outer = Extent::new(33, 70);
        let mut image = Image::<f64>::new(outer).unwrap();
        image.fill_test_pattern(outer, 0).unwrap();
        let original = image.clone();
        let options = DecompositionOptions::default();

        let levels = executor
            .forward_2d(&mut image.as_plane_mut().unwrap(), outer, options)
            .unwrap();
        assert_eq!(levels, 6);
        executor
            .inverse_2d(&mut image.as_plane_mut().unwrap(), outer, options)
            .unwrap();
        assert!(image.compare(&original, outer).unwrap());
    }

    #[test]
    fn test_default_executors() {
        let signal = (0..17).map(|i| i as f64 * 0.5).collect::<Vec<_>>();
        let executor = LiftDwt::make_cdf97_f64();
        let dwt = executor.dwt(&signal).unwrap();
        let restored = executor.idwt(&dwt).unwrap();
        for (o, re) in signal.iter().zip(restored.iter()) {
            assert!(samples_match(*o, *re));
        }

        let signal = signal.iter().map(|&v| v as f32).collect::<Vec<_>>();
        let executor = LiftDwt::make_cdf97_f32();
        let dwt = executor.dwt(&signal).unwrap();
        let restored = executor.idwt(&dwt).unwrap();
        for (o, re) in signal.iter().zip(restored.iter()) {
            assert!(samples_match(*o, *re));
        }
    }
}
