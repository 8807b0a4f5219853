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

use crate::accel::{BankedLiftingStep, LiftingStep, ScalarLiftingStep};
use crate::config::Acceleration;
use crate::dsp::{EDKDSP_BANK_SIZE, EmulatedDsp};
use std::sync::Arc;

pub(crate) trait LiftingStepFactory<T> {
    fn lifting_step(acceleration: Acceleration) -> Arc<dyn LiftingStep<T> + Send + Sync>;
}

impl LiftingStepFactory<f32> for f32 {
    fn lifting_step(acceleration: Acceleration) -> Arc<dyn LiftingStep<f32> + Send + Sync> {
        match acceleration {
            Acceleration::Scalar => Arc::new(ScalarLiftingStep),
            Acceleration::Banked => {
                Arc::new(BankedLiftingStep::new(EmulatedDsp::<EDKDSP_BANK_SIZE>))
            }
        }
    }
}

impl LiftingStepFactory<f64> for f64 {
    fn lifting_step(acceleration: Acceleration) -> Arc<dyn LiftingStep<f64> + Send + Sync> {
        if acceleration != Acceleration::Scalar {
            log::debug!("{acceleration} lifting is single precision only, using scalar loops");
        }
        Arc::new(ScalarLiftingStep)
    }
}
