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

use crate::sample::LiftingSample;
use crate::util::ceil_div;
use std::error::Error;
use std::fmt::Formatter;

/// One lifting step over an odd-length array.
///
/// For every odd position `i` performs `arr[i] += alpha * (arr[i - 1] + arr[i + 1])`.
/// Even positions are read only. An array of length `1` is left untouched.
pub trait LiftingStep<T>: Send + Sync {
    fn lift(&self, arr: &mut [T], alpha: T);
}

/// Plain loop over the odd positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarLiftingStep;

#[inline]
pub(crate) fn lift_odd_positions<T: LiftingSample>(arr: &mut [T], alpha: T) {
    for i in (1..arr.len().saturating_sub(1)).step_by(2) {
        arr[i] = arr[i] + alpha * (arr[i - 1] + arr[i + 1]);
    }
}

impl<T: LiftingSample> LiftingStep<T> for ScalarLiftingStep {
    fn lift(&self, arr: &mut [T], alpha: T) {
        debug_assert!(arr.len() % 2 == 1, "lifting step needs an odd length");
        lift_odd_positions(arr, alpha);
    }
}

/// Failure reported by a [`BankAccelerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorFault {
    /// Blocks handed to the device must have odd length.
    EvenLength(usize),
    /// Block of the given length does not fit a bank of the given capacity.
    BankOverflow(usize, usize),
    /// Device specific failure.
    Device(String),
}

impl std::fmt::Display for AcceleratorFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceleratorFault::EvenLength(len) => {
                f.write_fmt(format_args!("Block length {len} is not odd"))
            }
            AcceleratorFault::BankOverflow(len, capacity) => f.write_fmt(format_args!(
                "Block length {len} does not fit bank capacity {capacity}"
            )),
            AcceleratorFault::Device(reason) => f.write_str(reason),
        }
    }
}

impl Error for AcceleratorFault {}

/// Vector co-processor with a fixed amount of on-chip memory per bank.
///
/// `lift_block` must behave exactly as [`LiftingStep::lift`] on a block no longer
/// than [`BankAccelerator::bank_capacity`].
pub trait BankAccelerator: Send + Sync {
    /// Elements one memory bank holds.
    fn bank_capacity(&self) -> usize;
    fn lift_block(&self, block: &mut [f32], alpha: f32) -> Result<(), AcceleratorFault>;
}

/// Splits an odd-length array into overlapping blocks that fit an accelerator bank.
///
/// Consecutive blocks share their boundary even elements so every odd position is
/// updated exactly once from its original neighbours. Any fault of the device aborts
/// the process, the line would otherwise be left half transformed.
pub struct BankedLiftingStep<A> {
    accelerator: A,
}

impl<A: BankAccelerator> BankedLiftingStep<A> {
    pub fn new(accelerator: A) -> Self {
        Self { accelerator }
    }

    pub fn accelerator(&self) -> &A {
        &self.accelerator
    }
}

#[cold]
fn accelerator_fault(fault: AcceleratorFault) -> ! {
    log::error!("lifting accelerator fault: {fault}");
    std::process::abort()
}

impl<A: BankAccelerator> LiftingStep<f32> for BankedLiftingStep<A> {
    fn lift(&self, arr: &mut [f32], alpha: f32) {
        debug_assert!(arr.len() % 2 == 1, "lifting step needs an odd length");
        let len = arr.len();
        if len <= 1 {
            return;
        }
        let bank = self.accelerator.bank_capacity();
        // Largest odd number of updated elements leaving room for both border neighbours.
        let block_size = match bank.checked_sub(1 - (bank & 1) + 2) {
            Some(size) if size > 0 => size,
            _ => accelerator_fault(AcceleratorFault::BankOverflow(3, bank)),
        };
        let block_count = ceil_div(len - 1, block_size + 1);
        log::trace!("banked lift: len {len}, bank {bank}, {block_count} blocks");

        for nn in 0..block_count {
            let left = nn * (block_size + 1) + 1;
            let right = ((nn + 1) * (block_size + 1) - 1).min(len - 2);
            let block = &mut arr[left - 1..right + 2];
            if let Err(fault) = self.accelerator.lift_block(block, alpha) {
                accelerator_fault(fault);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::EmulatedDsp;
    use proptest::prelude::*;

    fn signal(len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| ((i * 7919 % 113) as f32 - 56.) * 0.37)
            .collect()
    }

    #[test]
    fn test_scalar_lift() {
        let mut arr = vec![1f32, 2., 3., 4., 5.];
        ScalarLiftingStep.lift(&mut arr[..], 0.5);
        assert_eq!(arr, vec![1., 4., 3., 8., 5.]);

        let mut single = vec![3f64];
        ScalarLiftingStep.lift(&mut single[..], 2.);
        assert_eq!(single, vec![3.]);
    }

    fn check_banked<const BANK: usize>(len: usize, alpha: f32) {
        let mut reference = signal(len);
        let mut banked = reference.clone();
        ScalarLiftingStep.lift(&mut reference[..], alpha);
        BankedLiftingStep::new(EmulatedDsp::<BANK>).lift(&mut banked[..], alpha);
        for (i, (&a, &b)) in reference.iter().zip(banked.iter()).enumerate() {
            assert!(
                (a - b).abs() < 1e-6,
                "bank {BANK}, len {len}, index {i}: scalar {a}, banked {b}"
            );
        }
    }

    #[test]
    fn test_banked_matches_scalar() {
        for len in (1..1200).step_by(2) {
            check_banked::<256>(len, -1.5861343);
        }
        for len in (1..200).step_by(2) {
            check_banked::<3>(len, 0.44350685);
            check_banked::<4>(len, 0.44350685);
            check_banked::<5>(len, -0.05298012);
            check_banked::<16>(len, 0.8829111);
            check_banked::<17>(len, 0.8829111);
        }
    }

    proptest! {
        #[test]
        fn prop_banked_matches_scalar(half in 0usize..600, alpha in -4f32..4f32) {
            check_banked::<32>(2 * half + 1, alpha);
        }
    }
}
