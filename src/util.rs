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

/// Number of low-pass (approximation) coefficients produced from `n` samples.
#[inline]
pub fn low_length(n: usize) -> usize {
    n.div_ceil(2)
}

/// Number of high-pass (detail) coefficients produced from `n` samples.
#[inline]
pub fn high_length(n: usize) -> usize {
    n / 2
}

/// Smallest power of two greater than or equal to `x`, i.e. `2^ceil(log2(x))`.
///
/// `0` maps to `1`.
#[inline]
pub fn pow2_ceil_log2(x: usize) -> usize {
    x.next_power_of_two()
}

/// Smallest integer not less than the base 2 logarithm of `x`, i.e. `ceil(log2(x))`.
///
/// Both `0` and `1` map to `0`, so an empty dimension never asks for a decomposition level.
#[inline]
pub fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        return 0;
    }
    (usize::BITS - (x - 1).leading_zeros()) as usize
}

/// `ceil(x / y)`.
#[inline]
pub fn ceil_div(x: usize, y: usize) -> usize {
    x.div_ceil(y)
}

/// `ceil(i / 2^j)`, the extent of a dimension `i` after `j` halvings.
#[inline]
pub fn ceil_div_pow2(i: usize, j: usize) -> usize {
    if j >= usize::BITS as usize {
        return usize::from(i > 0);
    }
    i.div_ceil(1usize << j)
}
