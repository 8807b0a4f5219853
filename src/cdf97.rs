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

use crate::accel::LiftingStep;
use crate::config::DwtConfig;
use crate::err::{DwtError, try_vec};
use crate::factory::LiftingStepFactory;
use crate::multires::LinePool;
use crate::sample::LiftingSample;
use crate::strided::{LineRead, LineWrite, StridedSlice, StridedSliceMut};
use crate::util::{high_length, low_length};
use crate::{Dwt, DwtForwardExecutor, DwtInverseExecutor};
use std::sync::Arc;

#[inline]
fn scale<T: LiftingSample>(x: &mut [T], even: T, odd: T) {
    let mut chunks = x.chunks_exact_mut(2);
    for pair in chunks.by_ref() {
        pair[0] = pair[0] * even;
        pair[1] = pair[1] * odd;
    }
    if let [last] = chunks.into_remainder() {
        *last = *last * even;
    }
}

/// Predict pass over the odd samples followed by the update pass over the even ones.
fn forward_predict_update<T: LiftingSample>(
    x: &mut [T],
    p: T,
    u: T,
    step: &dyn LiftingStep<T>,
) {
    let n = x.len();
    let odd = n & 1;
    let two = T::one() + T::one();

    step.lift(&mut x[..n - 1 + odd], -p);
    if odd == 1 {
        x[n - 1] = x[n - 1] + two * u * x[n - 2];
    } else {
        x[n - 1] = x[n - 1] - two * p * x[n - 2];
    }
    x[0] = x[0] + two * u * x[1];
    step.lift(&mut x[1..n - odd], u);
}

fn inverse_update_predict<T: LiftingSample>(
    x: &mut [T],
    p: T,
    u: T,
    step: &dyn LiftingStep<T>,
) {
    let n = x.len();
    let odd = n & 1;
    let two = T::one() + T::one();

    step.lift(&mut x[1..n - odd], -u);
    x[0] = x[0] - two * u * x[1];
    if odd == 1 {
        x[n - 1] = x[n - 1] - two * u * x[n - 2];
    } else {
        x[n - 1] = x[n - 1] + two * p * x[n - 2];
    }
    step.lift(&mut x[..n - 1 + odd], p);
}

/// Forward lifting on interleaved samples, leaving low coefficients at even and high
/// at odd indices.
pub(crate) fn forward_lift<T: LiftingSample>(x: &mut [T], step: &dyn LiftingStep<T>) {
    debug_assert!(x.len() >= 2);
    forward_predict_update(x, T::P1, T::U1, step);
    forward_predict_update(x, T::P2, T::U2, step);
    scale(x, T::S1, T::S2);
}

/// Exact mirror of [`forward_lift`].
pub(crate) fn inverse_lift<T: LiftingSample>(x: &mut [T], step: &dyn LiftingStep<T>) {
    debug_assert!(x.len() >= 2);
    scale(x, T::S2, T::S1);
    inverse_update_predict(x, T::P2, T::U2, step);
    inverse_update_predict(x, T::P1, T::U1, step);
}

/// Transforms `n` samples of `src` into `low` and `high`.
///
/// The source is copied into `tmp` before anything is written, so the bands may
/// share storage with the source.
pub(crate) fn forward_line<T, S, L, H>(
    src: &S,
    low: &mut L,
    high: &mut H,
    tmp: &mut [T],
    n: usize,
    step: &dyn LiftingStep<T>,
) where
    T: LiftingSample,
    S: LineRead<T>,
    L: LineWrite<T>,
    H: LineWrite<T>,
{
    match n {
        0 => {}
        1 => low.write(0, src.read(0) * T::S1),
        _ => {
            let x = &mut tmp[..n];
            for (i, dst) in x.iter_mut().enumerate() {
                *dst = src.read(i);
            }
            forward_lift(x, step);
            for (i, &v) in x.iter().step_by(2).enumerate() {
                low.write(i, v);
            }
            for (i, &v) in x.iter().skip(1).step_by(2).enumerate() {
                high.write(i, v);
            }
        }
    }
}

/// Reconstructs `n` samples from `low` and `high` into `dst`.
///
/// Both bands are gathered into `tmp` first, `dst` may share storage with them.
pub(crate) fn inverse_line<T, L, H, D>(
    low: &L,
    high: &H,
    dst: &mut D,
    tmp: &mut [T],
    n: usize,
    step: &dyn LiftingStep<T>,
) where
    T: LiftingSample,
    L: LineRead<T>,
    H: LineRead<T>,
    D: LineWrite<T>,
{
    match n {
        0 => {}
        1 => dst.write(0, low.read(0) * T::S2),
        _ => {
            let x = &mut tmp[..n];
            for (i, v) in x.iter_mut().step_by(2).enumerate() {
                *v = low.read(i);
            }
            for (i, v) in x.iter_mut().skip(1).step_by(2).enumerate() {
                *v = high.read(i);
            }
            inverse_lift(x, step);
            for (i, &v) in x.iter().enumerate() {
                dst.write(i, v);
            }
        }
    }
}

/// Single level forward CDF 9/7 transform of a strided signal.
///
/// `low` receives `ceil(N/2)` and `high` `floor(N/2)` coefficients, longer views keep
/// their tail untouched. `scratch` must hold at least `N` samples.
pub fn forward_1d<T: LiftingSample>(
    src: &StridedSlice<'_, T>,
    low: &mut StridedSliceMut<'_, T>,
    high: &mut StridedSliceMut<'_, T>,
    scratch: &mut [T],
    step: &dyn LiftingStep<T>,
) -> Result<(), DwtError> {
    let n = src.len();
    if scratch.len() < n {
        return Err(DwtError::ScratchTooSmall(scratch.len(), n));
    }
    if low.len() < low_length(n) {
        return Err(DwtError::ApproxSizeNotMatches(low.len(), low_length(n)));
    }
    if high.len() < high_length(n) {
        return Err(DwtError::DetailsSizeNotMatches(high.len(), high_length(n)));
    }
    forward_line(src, low, high, scratch, n, step);
    Ok(())
}

/// Single level inverse CDF 9/7 transform into a strided destination of `N` samples.
///
/// Reads `ceil(N/2)` samples of `low` and `floor(N/2)` of `high`.
pub fn inverse_1d<T: LiftingSample>(
    low: &StridedSlice<'_, T>,
    high: &StridedSlice<'_, T>,
    dst: &mut StridedSliceMut<'_, T>,
    scratch: &mut [T],
    step: &dyn LiftingStep<T>,
) -> Result<(), DwtError> {
    let n = dst.len();
    if scratch.len() < n {
        return Err(DwtError::ScratchTooSmall(scratch.len(), n));
    }
    if low.len() < low_length(n) {
        return Err(DwtError::ApproxSizeNotMatches(low.len(), low_length(n)));
    }
    if high.len() < high_length(n) {
        return Err(DwtError::DetailsSizeNotMatches(high.len(), high_length(n)));
    }
    inverse_line(low, high, dst, scratch, n, step);
    Ok(())
}

/// CDF 9/7 lifting executor bound to one lifting step implementation and worker pool.
pub(crate) struct Cdf97<T> {
    pub(crate) step: Arc<dyn LiftingStep<T> + Send + Sync>,
    pub(crate) pool: LinePool,
}

impl<T: LiftingSample + LiftingStepFactory<T>> Cdf97<T> {
    pub(crate) fn new(config: DwtConfig) -> Self {
        log::debug!(
            "cdf97 executor: {} lifting, {} threads",
            config.acceleration,
            config.threads
        );
        Self {
            step: T::lifting_step(config.acceleration),
            pool: LinePool::new(config.threads),
        }
    }
}

impl<T: LiftingSample> DwtForwardExecutor<T> for Cdf97<T> {
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), DwtError> {
        if approx.len() != low_length(input.len()) {
            return Err(DwtError::ApproxSizeNotMatches(
                approx.len(),
                low_length(input.len()),
            ));
        }
        if details.len() != high_length(input.len()) {
            return Err(DwtError::DetailsSizeNotMatches(
                details.len(),
                high_length(input.len()),
            ));
        }
        let mut scratch = try_vec![T::zero(); input.len()];
        forward_1d(
            &StridedSlice::contiguous(input),
            &mut StridedSliceMut::contiguous(approx),
            &mut StridedSliceMut::contiguous(details),
            &mut scratch,
            self.step.as_ref(),
        )
    }

    fn execute_forward_strided(
        &self,
        input: &StridedSlice<'_, T>,
        approx: &mut StridedSliceMut<'_, T>,
        details: &mut StridedSliceMut<'_, T>,
        scratch: &mut [T],
    ) -> Result<(), DwtError> {
        forward_1d(input, approx, details, scratch, self.step.as_ref())
    }
}

impl<T: LiftingSample> DwtInverseExecutor<T> for Cdf97<T> {
    fn execute_inverse(
        &self,
        approx: &[T],
        details: &[T],
        output: &mut [T],
    ) -> Result<(), DwtError> {
        if approx.len() != low_length(output.len()) {
            return Err(DwtError::ApproxSizeNotMatches(
                approx.len(),
                low_length(output.len()),
            ));
        }
        if details.len() != high_length(output.len()) {
            return Err(DwtError::DetailsSizeNotMatches(
                details.len(),
                high_length(output.len()),
            ));
        }
        let mut scratch = try_vec![T::zero(); output.len()];
        inverse_1d(
            &StridedSlice::contiguous(approx),
            &StridedSlice::contiguous(details),
            &mut StridedSliceMut::contiguous(output),
            &mut scratch,
            self.step.as_ref(),
        )
    }

    fn execute_inverse_strided(
        &self,
        approx: &StridedSlice<'_, T>,
        details: &StridedSlice<'_, T>,
        output: &mut StridedSliceMut<'_, T>,
        scratch: &mut [T],
    ) -> Result<(), DwtError> {
        inverse_1d(approx, details, output, scratch, self.step.as_ref())
    }
}

impl<T: LiftingSample> Cdf97<T> {
    pub(crate) fn dwt_impl(&self, signal: &[T]) -> Result<Dwt<T>, DwtError> {
        let mut approximations = try_vec![T::zero(); low_length(signal.len())];
        let mut details = try_vec![T::zero(); high_length(signal.len())];
        self.execute_forward(signal, &mut approximations, &mut details)?;
        Ok(Dwt {
            approximations,
            details,
        })
    }

    pub(crate) fn idwt_impl(&self, dwt: &Dwt<T>) -> Result<Vec<T>, DwtError> {
        let n = dwt.approximations.len() + dwt.details.len();
        if low_length(n) != dwt.approximations.len() {
            return Err(DwtError::DetailsSizeNotMatches(
                dwt.details.len(),
                high_length(n),
            ));
        }
        let mut output = try_vec![T::zero(); n];
        self.execute_inverse(&dwt.approximations, &dwt.details, &mut output)?;
        Ok(output)
    }
}
