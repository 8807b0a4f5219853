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

#![allow(clippy::excessive_precision)]

use num_traits::{AsPrimitive, Float};
use std::fmt::Debug;

// S. Mallat, A Wavelet Tour of Signal Processing: The Sparse Way, 3rd ed., p. 370.
const P1: f64 = 1.58613434342059;
const U1: f64 = -0.0529801185729;
const P2: f64 = -0.8829110755309;
const U2: f64 = 0.4435068520439;
const S1: f64 = 1.1496043988602;
const S2: f64 = 1. / S1;

/// Floating point sample the CDF 9/7 lifting kernel runs on.
///
/// Carries the lifting constants rounded to the sample precision and the tolerance
/// reconstructed samples are compared with.
pub trait LiftingSample: Float + Default + Debug + Send + Sync + 'static + AsPrimitive<f64> {
    /// First predict coefficient.
    const P1: Self;
    /// First update coefficient.
    const U1: Self;
    /// Second predict coefficient.
    const P2: Self;
    /// Second update coefficient.
    const U2: Self;
    /// Scale applied to the low band.
    const S1: Self;
    /// Scale applied to the high band, `1 / S1`.
    const S2: Self;
    /// Largest difference two samples may have to be considered equal.
    const COMPARE_EPS: Self;
}

impl LiftingSample for f64 {
    const P1: f64 = P1;
    const U1: f64 = U1;
    const P2: f64 = P2;
    const U2: f64 = U2;
    const S1: f64 = S1;
    const S2: f64 = S2;
    const COMPARE_EPS: f64 = 1e-6;
}

impl LiftingSample for f32 {
    const P1: f32 = P1 as f32;
    const U1: f32 = U1 as f32;
    const P2: f32 = P2 as f32;
    const U2: f32 = U2 as f32;
    const S1: f32 = S1 as f32;
    const S2: f32 = S2 as f32;
    const COMPARE_EPS: f32 = 1e-3;
}

/// Returns `true` when both samples are finite and differ by no more than
/// [`LiftingSample::COMPARE_EPS`].
#[inline]
pub fn samples_match<T: LiftingSample>(a: T, b: T) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= T::COMPARE_EPS
}
