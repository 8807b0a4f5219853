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
use crate::cdf97::{Cdf97, forward_line, inverse_line};
use crate::err::{DwtError, try_vec};
use crate::padding::{pad_forward, pad_inverse};
use crate::plane::{Extent, StridedPlane};
use crate::sample::LiftingSample;
use crate::util::ceil_log2;
use crate::MultiResolutionExecutor;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::collections::HashMap;
#[cfg(feature = "parallel")]
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Controls how deep a 2D decomposition goes and what happens to the unused margins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionOptions {
    /// Requested number of levels, `None` or anything above the limit means the limit.
    pub levels: Option<usize>,
    /// Keep halving the larger dimension until it is a single sample, instead of
    /// stopping when the smaller one is.
    pub decompose_to_pixel: bool,
    /// Zero the parts of the outer extent not covered by transformed data.
    pub zero_padding: bool,
}

impl DecompositionOptions {
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn with_decompose_to_pixel(mut self, decompose_to_pixel: bool) -> Self {
        self.decompose_to_pixel = decompose_to_pixel;
        self
    }

    pub fn with_zero_padding(mut self, zero_padding: bool) -> Self {
        self.zero_padding = zero_padding;
        self
    }
}

/// Deepest level a plane of extent `outer` can be decomposed to.
pub fn level_limit(outer: Extent, decompose_to_pixel: bool) -> usize {
    if decompose_to_pixel {
        ceil_log2(outer.max_dim())
    } else {
        ceil_log2(outer.min_dim())
    }
}

/// Number of levels a transform with `options` runs on a plane of extent `outer`.
pub fn resolve_levels(outer: Extent, options: DecompositionOptions) -> usize {
    let limit = level_limit(outer, options.decompose_to_pixel);
    match options.levels {
        Some(levels) if levels <= limit => levels,
        _ => limit,
    }
}

/// Pools shared by every executor, keyed by worker count.
#[cfg(feature = "parallel")]
static SHARED_POOLS: OnceLock<Mutex<HashMap<usize, Arc<rayon::ThreadPool>>>> = OnceLock::new();

#[cfg(feature = "parallel")]
fn shared_pool(threads: usize) -> Result<Arc<rayon::ThreadPool>, rayon::ThreadPoolBuildError> {
    let mut pools = SHARED_POOLS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = pools.get(&threads) {
        return Ok(Arc::clone(pool));
    }
    let pool = Arc::new(rayon::ThreadPoolBuilder::new().num_threads(threads).build()?);
    pools.insert(threads, Arc::clone(&pool));
    Ok(pool)
}

/// Runs the independent lines of one pass, inline or on a rayon pool.
///
/// Executors asking for the same worker count share one pool, built on first use.
pub(crate) struct LinePool {
    #[cfg(feature = "parallel")]
    workers: Option<(Arc<rayon::ThreadPool>, usize)>,
}

impl LinePool {
    pub(crate) fn new(threads: usize) -> Self {
        #[cfg(feature = "parallel")]
        let workers = if threads > 1 {
            match shared_pool(threads) {
                Ok(pool) => Some((pool, threads)),
                Err(e) => {
                    log::warn!("cannot start {threads} workers, passes run inline: {e}");
                    None
                }
            }
        } else {
            None
        };
        #[cfg(not(feature = "parallel"))]
        let _ = threads;
        Self {
            #[cfg(feature = "parallel")]
            workers,
        }
    }

    /// Calls `f(line, scratch)` for every line in `0..count`.
    ///
    /// Each worker owns one scratch buffer of `scratch_len` samples.
    pub(crate) fn for_each_line<T, F>(
        &self,
        count: usize,
        scratch_len: usize,
        f: F,
    ) -> Result<(), DwtError>
    where
        T: LiftingSample,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if let Some((pool, threads)) = &self.workers {
                let min_len = crate::util::ceil_div(count, *threads).max(1);
                pool.install(|| {
                    (0..count).into_par_iter().with_min_len(min_len).for_each_init(
                        || vec![T::zero(); scratch_len],
                        |scratch, line| f(line, scratch),
                    );
                });
                return Ok(());
            }
        }
        let mut scratch = try_vec![T::zero(); scratch_len];
        for line in 0..count {
            f(line, &mut scratch);
        }
        Ok(())
    }
}

/// Forward multiresolution transform, in place. Returns the number of levels run.
pub(crate) fn forward_2d<T: LiftingSample>(
    plane: &mut StridedPlane<'_, T>,
    inner: Extent,
    options: DecompositionOptions,
    step: &dyn LiftingStep<T>,
    pool: &LinePool,
) -> Result<usize, DwtError> {
    plane.check_inner(inner)?;
    let outer = plane.outer();
    let j_max = resolve_levels(outer, options);
    if outer.is_empty() {
        return Ok(j_max);
    }
    let scratch_len = outer.max_dim();
    let lines = plane.as_plane_ptr();

    for j in 0..j_max {
        let o_src = outer.halved(j);
        let o_dst = outer.halved(j + 1);
        let i_src = inner.halved(j);
        log::debug!(
            "forward level {j}: outer {}x{}, inner {}x{}",
            o_src.width,
            o_src.height,
            i_src.width,
            i_src.height
        );

        pool.for_each_line(o_src.height, scratch_len, |y, tmp: &mut [T]| {
            // SAFETY: every `y` is visited once and rows are disjoint.
            let row = unsafe { lines.row(y) };
            let (mut low, mut high) = (row, row.skip(o_dst.width));
            forward_line(&row, &mut low, &mut high, tmp, i_src.width, step);
        })?;
        pool.for_each_line(o_src.width, scratch_len, |x, tmp: &mut [T]| {
            // SAFETY: every `x` is visited once and columns are disjoint.
            let col = unsafe { lines.column(x) };
            let (mut low, mut high) = (col, col.skip(o_dst.height));
            forward_line(&col, &mut low, &mut high, tmp, i_src.height, step);
        })?;

        if options.zero_padding {
            pool.for_each_line(o_src.height, 0, |y, _: &mut [T]| {
                // SAFETY: every `y` is visited once and rows are disjoint.
                let row = unsafe { lines.row(y) };
                let (mut low, mut high) = (row, row.skip(o_dst.width));
                pad_forward(
                    &mut low,
                    &mut high,
                    i_src.width,
                    o_dst.width,
                    o_src.width - o_dst.width,
                );
            })?;
            pool.for_each_line(o_src.width, 0, |x, _: &mut [T]| {
                // SAFETY: every `x` is visited once and columns are disjoint.
                let col = unsafe { lines.column(x) };
                let (mut low, mut high) = (col, col.skip(o_dst.height));
                pad_forward(
                    &mut low,
                    &mut high,
                    i_src.height,
                    o_dst.height,
                    o_src.height - o_dst.height,
                );
            })?;
        }
    }
    Ok(j_max)
}

/// Inverse multiresolution transform, in place, undoing [`forward_2d`] run with the same options.
pub(crate) fn inverse_2d<T: LiftingSample>(
    plane: &mut StridedPlane<'_, T>,
    inner: Extent,
    options: DecompositionOptions,
    step: &dyn LiftingStep<T>,
    pool: &LinePool,
) -> Result<(), DwtError> {
    plane.check_inner(inner)?;
    let outer = plane.outer();
    let j_max = resolve_levels(outer, options);
    if outer.is_empty() {
        return Ok(());
    }
    let scratch_len = outer.max_dim();
    let lines = plane.as_plane_ptr();

    for j in (1..=j_max).rev() {
        let o_src = outer.halved(j);
        let o_dst = outer.halved(j - 1);
        let i_dst = inner.halved(j - 1);
        log::debug!(
            "inverse level {j}: outer {}x{}, inner {}x{}",
            o_dst.width,
            o_dst.height,
            i_dst.width,
            i_dst.height
        );

        pool.for_each_line(o_dst.width, scratch_len, |x, tmp: &mut [T]| {
            // SAFETY: every `x` is visited once and columns are disjoint.
            let col = unsafe { lines.column(x) };
            let (high, mut dst) = (col.skip(o_src.height), col);
            inverse_line(&col, &high, &mut dst, tmp, i_dst.height, step);
        })?;
        pool.for_each_line(o_dst.height, scratch_len, |y, tmp: &mut [T]| {
            // SAFETY: every `y` is visited once and rows are disjoint.
            let row = unsafe { lines.row(y) };
            let (high, mut dst) = (row.skip(o_src.width), row);
            inverse_line(&row, &high, &mut dst, tmp, i_dst.width, step);
        })?;

        if options.zero_padding {
            pool.for_each_line(o_dst.height, 0, |y, _: &mut [T]| {
                // SAFETY: every `y` is visited once and rows are disjoint.
                let mut row = unsafe { lines.row(y) };
                pad_inverse(&mut row, i_dst.width, o_dst.width);
            })?;
            pool.for_each_line(o_dst.width, 0, |x, _: &mut [T]| {
                // SAFETY: every `x` is visited once and columns are disjoint.
                let mut col = unsafe { lines.column(x) };
                pad_inverse(&mut col, i_dst.height, o_dst.height);
            })?;
        }
    }
    Ok(())
}

impl<T: LiftingSample> MultiResolutionExecutor<T> for Cdf97<T> {
    fn forward_2d(
        &self,
        plane: &mut StridedPlane<'_, T>,
        inner: Extent,
        options: DecompositionOptions,
    ) -> Result<usize, DwtError> {
        forward_2d(plane, inner, options, self.step.as_ref(), &self.pool)
    }

    fn inverse_2d(
        &self,
        plane: &mut StridedPlane<'_, T>,
        inner: Extent,
        options: DecompositionOptions,
    ) -> Result<(), DwtError> {
        inverse_2d(plane, inner, options, self.step.as_ref(), &self.pool)
    }
}
