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

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DwtError {
    OutOfMemory(usize),
    ZeroStride,
    ViewOutOfBounds(usize, usize),
    ScratchTooSmall(usize, usize),
    ApproxSizeNotMatches(usize, usize),
    DetailsSizeNotMatches(usize, usize),
    OutputSizeNotMatches(usize, usize),
    InputSizeNotMatches(usize, usize),
    InnerExceedsOuter(usize, usize, usize, usize),
    OverlappingStrides(usize, usize),
}

impl Error for DwtError {}

impl std::fmt::Display for DwtError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DwtError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            DwtError::ZeroStride => f.write_str("Stride must be greater than zero"),
            DwtError::ViewOutOfBounds(required, available) => f.write_fmt(format_args!(
                "View requires {required} elements, but the buffer holds only {available}"
            )),
            DwtError::ScratchTooSmall(were_length, min_length) => f.write_fmt(format_args!(
                "Scratch should hold at least {min_length} elements, but it was {were_length}"
            )),
            DwtError::ApproxSizeNotMatches(current_size, required_size) => f.write_fmt(
                format_args!("Approximate size {current_size} does not match required size {required_size}"),
            ),
            DwtError::DetailsSizeNotMatches(current_size, required_size) => f.write_fmt(
                format_args!("Details size {current_size} does not match required size {required_size}"),
            ),
            DwtError::OutputSizeNotMatches(current_size, required_size) => f.write_fmt(
                format_args!("Output size should be {required_size}, but it was {current_size}"),
            ),
            DwtError::InputSizeNotMatches(current_size, required_size) => f.write_fmt(
                format_args!("Input size should be {required_size}, but it was {current_size}"),
            ),
            DwtError::InnerExceedsOuter(inner_w, inner_h, outer_w, outer_h) => f.write_fmt(
                format_args!("Inner extent {inner_w}x{inner_h} exceeds outer extent {outer_w}x{outer_h}"),
            ),
            DwtError::OverlappingStrides(row_stride, col_stride) => f.write_fmt(format_args!(
                "Row stride {row_stride} and column stride {col_stride} address the same element twice"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::DwtError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

use std::error::Error;
use std::fmt::Formatter;
pub(crate) use try_vec;
