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

use crate::err::{DwtError, try_vec};
use crate::plane::{Extent, StridedPlane};
use crate::sample::{LiftingSample, samples_match};
use num_traits::AsPrimitive;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Owned row-major image, the outer extent is the allocated size.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    outer: Extent,
    data: Vec<T>,
}

/// Value of the synthetic test pattern at `(x, y)`, `2xy / (x² + y² + 1)` after `x >>= shift`.
pub fn test_pattern_value<T: LiftingSample>(x: usize, y: usize, shift: u32) -> T
where
    usize: AsPrimitive<T>,
{
    let x = x.checked_shr(shift).unwrap_or(0);
    let numerator: T = (2 * x * y).as_();
    let denominator: T = (x * x + y * y + 1).as_();
    numerator / denominator
}

impl<T: LiftingSample> Image<T> {
    /// Allocates a zeroed image.
    pub fn new(outer: Extent) -> Result<Self, DwtError> {
        let len = outer
            .width
            .checked_mul(outer.height)
            .ok_or(DwtError::OutOfMemory(usize::MAX))?;
        let data = try_vec![T::zero(); len];
        Ok(Self { outer, data })
    }

    pub fn from_vec(outer: Extent, data: Vec<T>) -> Result<Self, DwtError> {
        let expected = outer
            .width
            .checked_mul(outer.height)
            .ok_or(DwtError::OutOfMemory(usize::MAX))?;
        if data.len() != expected {
            return Err(DwtError::InputSizeNotMatches(data.len(), expected));
        }
        Ok(Self { outer, data })
    }

    pub fn outer(&self) -> Extent {
        self.outer
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.outer.width || y >= self.outer.height {
            return None;
        }
        Some(self.data[y * self.outer.width + x])
    }

    pub fn as_plane_mut(&mut self) -> Result<StridedPlane<'_, T>, DwtError> {
        StridedPlane::row_major(&mut self.data, self.outer)
    }

    fn check_inner(&self, inner: Extent) -> Result<(), DwtError> {
        if !inner.fits_in(self.outer) {
            return Err(DwtError::InnerExceedsOuter(
                inner.width,
                inner.height,
                self.outer.width,
                self.outer.height,
            ));
        }
        Ok(())
    }

    /// Fills the `inner` region with the test pattern, see [`test_pattern_value`].
    pub fn fill_test_pattern(&mut self, inner: Extent, shift: u32) -> Result<(), DwtError>
    where
        usize: AsPrimitive<T>,
    {
        self.check_inner(inner)?;
        let width = self.outer.width;
        for (y, row) in self.data.chunks_exact_mut(width.max(1)).take(inner.height).enumerate() {
            for (x, dst) in row.iter_mut().take(inner.width).enumerate() {
                *dst = test_pattern_value(x, y, shift);
            }
        }
        Ok(())
    }

    /// Returns `true` when every sample of the `inner` region matches, see [`samples_match`].
    ///
    /// Both images must hold the `inner` region.
    pub fn compare(&self, other: &Image<T>, inner: Extent) -> Result<bool, DwtError> {
        self.check_inner(inner)?;
        other.check_inner(inner)?;
        for y in 0..inner.height {
            for x in 0..inner.width {
                let a = self.data[y * self.outer.width + x];
                let b = other.data[y * other.outer.width + x];
                if !samples_match(a, b) {
                    log::debug!("samples differ at ({x}, {y}): {a:?} vs {b:?}");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Writes the `inner` region as an ASCII PGM (`P2`) with maximum value 255.
    ///
    /// Each sample is scaled by `255 / max_value`.
    pub fn save_pgm<P: AsRef<Path>>(
        &self,
        path: P,
        max_value: T,
        inner: Extent,
    ) -> std::io::Result<()>
    where
        usize: AsPrimitive<T>,
    {
        self.check_inner(inner)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_pgm(&mut writer, max_value, inner)?;
        writer.flush()
    }

    fn write_pgm<W: Write>(
        &self,
        writer: &mut W,
        max_value: T,
        inner: Extent,
    ) -> std::io::Result<()>
    where
        usize: AsPrimitive<T>,
    {
        const TARGET: usize = 255;
        let target: T = TARGET.as_();
        writeln!(writer, "P2")?;
        writeln!(writer, "{} {}", inner.width, inner.height)?;
        writeln!(writer, "{TARGET}")?;
        for y in 0..inner.height {
            for x in 0..inner.width {
                let px = self.data[y * self.outer.width + x];
                let scaled: f64 = (target * px / max_value).as_();
                writeln!(writer, "{}", scaled as i32)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern() {
        assert_eq!(test_pattern_value::<f64>(0, 5, 0), 0.);
        assert_eq!(test_pattern_value::<f64>(1, 1, 0), 2. / 3.);
        assert_eq!(test_pattern_value::<f64>(3, 2, 1), 4. / 6.);
        assert_eq!(test_pattern_value::<f32>(4, 4, 64), 0.);

        let mut image = Image::<f32>::new(Extent::new(4, 3)).unwrap();
        image.fill_test_pattern(Extent::new(3, 2), 0).unwrap();
        assert_eq!(image.get(1, 1), Some(2. / 3.));
        assert_eq!(image.get(2, 1), Some(4. / 6.));
        assert_eq!(image.get(3, 1), Some(0.));
        assert_eq!(image.get(1, 2), Some(0.));
        assert!(image.fill_test_pattern(Extent::new(5, 1), 0).is_err());
    }

    #[test]
    fn test_compare() {
        let outer = Extent::new(3, 3);
        let a = Image::from_vec(outer, vec![1f64; 9]).unwrap();
        let mut b = a.clone();
        b.data_mut()[8] = f64::NAN;
        assert!(a.compare(&b, Extent::new(2, 2)).unwrap());
        assert!(!a.compare(&b, outer).unwrap());
        b.data_mut()[8] = 1. + 1e-7;
        assert!(a.compare(&b, outer).unwrap());
        b.data_mut()[0] = 1.1;
        assert!(!a.compare(&b, outer).unwrap());
        assert!(a.compare(&b, Extent::new(4, 1)).is_err());
    }

    #[test]
    fn test_from_vec_size() {
        assert_eq!(
            Image::from_vec(Extent::new(2, 2), vec![0f32; 3]).err(),
            Some(DwtError::InputSizeNotMatches(3, 4))
        );
    }

    #[test]
    fn test_write_pgm() {
        let image = Image::from_vec(Extent::new(3, 2), vec![0f32, 0.5, 1., 0.25, 2., 9.]).unwrap();
        let mut out = Vec::new();
        image.write_pgm(&mut out, 1., Extent::new(2, 2)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P2\n2 2\n255\n0\n127\n63\n510\n");
    }

    #[test]
    fn test_save_pgm() {
        let mut image = Image::<f64>::new(Extent::new(8, 8)).unwrap();
        image.fill_test_pattern(Extent::new(8, 8), 0).unwrap();
        let path = std::env::temp_dir().join(format!("liftdwt-{}.pgm", std::process::id()));
        image.save_pgm(&path, 1., Extent::new(8, 8)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P2"));
        assert_eq!(lines.next(), Some("8 8"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.count(), 64);
    }
}
