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

use std::fmt::Formatter;

/// Environment variable selecting the lifting-step implementation, `0` for scalar.
pub const ACCELERATION_ENV: &str = "LIFTDWT_ACCEL";
/// Environment variable overriding the worker count.
pub const THREADS_ENV: &str = "LIFTDWT_THREADS";

/// Implementation of the interior lifting loops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acceleration {
    /// Plain loops on the host.
    #[default]
    Scalar,
    /// Bank-sized blocks offloaded to a vector co-processor.
    ///
    /// Only single precision can be offloaded, double precision keeps the scalar loops.
    Banked,
}

impl Acceleration {
    /// Maps an integer selector to a strategy: `0` is scalar, anything else banked.
    pub fn from_selector(selector: i64) -> Self {
        if selector == 0 {
            Acceleration::Scalar
        } else {
            Acceleration::Banked
        }
    }
}

impl std::fmt::Display for Acceleration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Acceleration::Scalar => f.write_str("scalar"),
            Acceleration::Banked => f.write_str("banked"),
        }
    }
}

/// Worker count used when nothing else is requested.
pub fn default_threads() -> usize {
    num_cpus::get().max(1)
}

/// Runtime settings applied when an executor is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwtConfig {
    pub acceleration: Acceleration,
    /// Workers used for the row and column passes of the 2D transform, `1` runs them inline.
    pub threads: usize,
}

impl Default for DwtConfig {
    fn default() -> Self {
        Self {
            acceleration: Acceleration::Scalar,
            threads: default_threads(),
        }
    }
}

impl DwtConfig {
    /// Defaults overridden by `LIFTDWT_ACCEL` and `LIFTDWT_THREADS`.
    ///
    /// Values that do not parse, and a thread count of zero, are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let acceleration = std::env::var(ACCELERATION_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(Acceleration::from_selector)
            .unwrap_or(defaults.acceleration);
        let threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&t| t > 0)
            .unwrap_or(defaults.threads);
        log::debug!("dwt config from environment: {acceleration} lifting, {threads} threads");
        Self {
            acceleration,
            threads,
        }
    }

    pub fn with_acceleration(mut self, acceleration: Acceleration) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Sets the worker count, `0` is treated as `1`.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(Acceleration::from_selector(0), Acceleration::Scalar);
        assert_eq!(Acceleration::from_selector(1), Acceleration::Banked);
        assert_eq!(Acceleration::from_selector(-3), Acceleration::Banked);
    }

    #[test]
    fn test_defaults() {
        let config = DwtConfig::default();
        assert_eq!(config.acceleration, Acceleration::Scalar);
        assert!(config.threads >= 1);
        assert_eq!(config.with_threads(0).threads, 1);
        assert_eq!(
            config.with_acceleration(Acceleration::Banked).acceleration,
            Acceleration::Banked
        );
    }

    #[test]
    fn test_from_env_keeps_valid_thread_count() {
        let config = DwtConfig::from_env();
        assert!(config.threads >= 1);
    }
}
