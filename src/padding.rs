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

use crate::err::DwtError;
use crate::sample::LiftingSample;
use crate::strided::{LineWrite, StridedSliceMut};
use crate::util::low_length;

/// Zeroes the part of both bands past the coefficients produced from `n` samples.
pub(crate) fn pad_forward<T, L, H>(
    low: &mut L,
    high: &mut H,
    n: usize,
    n_dst_low: usize,
    n_dst_high: usize,
) where
    T: LiftingSample,
    L: LineWrite<T>,
    H: LineWrite<T>,
{
    debug_assert!(
        n_dst_low >= n_dst_high && n_dst_low - n_dst_high <= 1,
        "band targets {n_dst_low} and {n_dst_high} are not a halving"
    );
    if n_dst_low == 0 && n_dst_high == 0 {
        return;
    }
    let start = low_length(n);
    for i in start..n_dst_low {
        low.write(i, T::zero());
    }
    for i in start..n_dst_high {
        high.write(i, T::zero());
    }
    // An odd source leaves one high slot that was never produced.
    if n & 1 == 1 && n / 2 < n_dst_high {
        high.write(n / 2, T::zero());
    }
}

pub(crate) fn pad_inverse<T: LiftingSample, D: LineWrite<T>>(dst: &mut D, n: usize, n_dst: usize) {
    for i in n..n_dst {
        dst.write(i, T::zero());
    }
}

/// Zeroes the bands of a forward transform of `n` samples up to the target lengths
/// `n_dst_low` and `n_dst_high`.
///
/// The low band is cleared from `ceil(n/2)`, the high band from `floor(n/2)`.
/// Targets must differ by at most one, low not shorter than high.
pub fn zero_pad_forward_bands<T: LiftingSample>(
    low: &mut StridedSliceMut<'_, T>,
    high: &mut StridedSliceMut<'_, T>,
    n: usize,
    n_dst_low: usize,
    n_dst_high: usize,
) -> Result<(), DwtError> {
    if low.len() < n_dst_low {
        return Err(DwtError::ApproxSizeNotMatches(low.len(), n_dst_low));
    }
    if high.len() < n_dst_high {
        return Err(DwtError::DetailsSizeNotMatches(high.len(), n_dst_high));
    }
    pad_forward(low, high, n, n_dst_low, n_dst_high);
    Ok(())
}

/// Zeroes `band[n..n_dst]`.
pub fn zero_pad_inverse_band<T: LiftingSample>(
    band: &mut StridedSliceMut<'_, T>,
    n: usize,
    n_dst: usize,
) -> Result<(), DwtError> {
    if band.len() < n_dst {
        return Err(DwtError::OutputSizeNotMatches(band.len(), n_dst));
    }
    pad_inverse(band, n, n_dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_forward_odd() {
        let mut low = vec![1f32; 5];
        let mut high = vec![1f32; 4];
        zero_pad_forward_bands(
            &mut StridedSliceMut::contiguous(&mut low),
            &mut StridedSliceMut::contiguous(&mut high),
            5,
            5,
            4,
        )
        .unwrap();
        assert_eq!(low, vec![1., 1., 1., 0., 0.]);
        assert_eq!(high, vec![1., 1., 0., 0.]);
    }

    #[test]
    fn test_pad_forward_even() {
        let mut low = vec![1f64; 4];
        let mut high = vec![1f64; 4];
        zero_pad_forward_bands(
            &mut StridedSliceMut::contiguous(&mut low),
            &mut StridedSliceMut::contiguous(&mut high),
            4,
            4,
            4,
        )
        .unwrap();
        assert_eq!(low, vec![1., 1., 0., 0.]);
        assert_eq!(high, vec![1., 1., 0., 0.]);
    }

    #[test]
    fn test_pad_forward_stays_in_bounds() {
        // Odd source filling the whole low target, the high band is one shorter.
        let mut low = vec![1f32; 3];
        let mut high = vec![1f32; 2];
        zero_pad_forward_bands(
            &mut StridedSliceMut::contiguous(&mut low),
            &mut StridedSliceMut::contiguous(&mut high),
            5,
            3,
            2,
        )
        .unwrap();
        assert_eq!(low, vec![1., 1., 1.]);
        assert_eq!(high, vec![1., 1.]);

        let mut low = vec![1f32; 1];
        let mut high: Vec<f32> = vec![];
        zero_pad_forward_bands(
            &mut StridedSliceMut::contiguous(&mut low),
            &mut StridedSliceMut::contiguous(&mut high),
            1,
            1,
            0,
        )
        .unwrap();
        assert_eq!(low, vec![1.]);
    }

    #[test]
    fn test_pad_forward_nothing_to_do() {
        let mut low: Vec<f32> = vec![];
        let mut high: Vec<f32> = vec![];
        zero_pad_forward_bands(
            &mut StridedSliceMut::contiguous(&mut low),
            &mut StridedSliceMut::contiguous(&mut high),
            3,
            0,
            0,
        )
        .unwrap();
    }

    #[test]
    fn test_pad_forward_checks_views() {
        let mut low = vec![1f32; 2];
        let mut high = vec![1f32; 3];
        assert_eq!(
            zero_pad_forward_bands(
                &mut StridedSliceMut::contiguous(&mut low),
                &mut StridedSliceMut::contiguous(&mut high),
                3,
                3,
                3,
            ),
            Err(DwtError::ApproxSizeNotMatches(2, 3))
        );
    }

    #[test]
    fn test_pad_inverse() {
        let mut data = vec![1f64; 10];
        let mut band = StridedSliceMut::new(&mut data, 0, 5, 2).unwrap();
        zero_pad_inverse_band(&mut band, 3, 5).unwrap();
        assert_eq!(data, vec![1., 1., 1., 1., 1., 1., 0., 1., 0., 1.]);

        let mut data = vec![1f64; 4];
        let mut band = StridedSliceMut::contiguous(&mut data);
        assert_eq!(
            zero_pad_inverse_band(&mut band, 2, 5),
            Err(DwtError::OutputSizeNotMatches(4, 5))
        );
    }
}
