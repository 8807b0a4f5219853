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
use crate::strided::{LinePtr, StridedSlice};
use crate::util::ceil_div_pow2;
use std::marker::PhantomData;

/// Width and height of a plane region, in samples.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_dim(&self) -> usize {
        self.width.min(self.height)
    }

    pub fn max_dim(&self) -> usize {
        self.width.max(self.height)
    }

    /// The extent after `j` halvings of both dimensions, rounding up.
    pub fn halved(&self, j: usize) -> Extent {
        Extent::new(ceil_div_pow2(self.width, j), ceil_div_pow2(self.height, j))
    }

    pub fn fits_in(&self, other: Extent) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Mutable 2D view over a sample buffer.
///
/// Pixel `(x, y)` lives at `y * row_stride + x * col_stride`. Strides are in elements,
/// so both row-major and column-major layouts, as well as sub-images of a larger
/// buffer, can be described. Construction guarantees that no two pixels share memory.
pub struct StridedPlane<'a, T> {
    data: &'a mut [T],
    row_stride: usize,
    col_stride: usize,
    outer: Extent,
}

impl<'a, T: Copy> StridedPlane<'a, T> {
    pub fn new(
        data: &'a mut [T],
        row_stride: usize,
        col_stride: usize,
        outer: Extent,
    ) -> Result<Self, DwtError> {
        if row_stride == 0 || col_stride == 0 {
            return Err(DwtError::ZeroStride);
        }
        if !outer.is_empty() {
            let rows_disjoint = outer.height == 1
                || outer
                    .width
                    .checked_mul(col_stride)
                    .is_some_and(|w| row_stride >= w);
            let cols_disjoint = outer.width == 1
                || outer
                    .height
                    .checked_mul(row_stride)
                    .is_some_and(|h| col_stride >= h);
            if !rows_disjoint && !cols_disjoint {
                return Err(DwtError::OverlappingStrides(row_stride, col_stride));
            }
            let required = (outer.height - 1)
                .checked_mul(row_stride)
                .and_then(|r| (outer.width - 1).checked_mul(col_stride)?.checked_add(r))
                .and_then(|last| last.checked_add(1))
                .ok_or(DwtError::ViewOutOfBounds(usize::MAX, data.len()))?;
            if required > data.len() {
                return Err(DwtError::ViewOutOfBounds(required, data.len()));
            }
        }
        Ok(Self {
            data,
            row_stride,
            col_stride,
            outer,
        })
    }

    /// Row-major plane with rows packed back to back.
    pub fn row_major(data: &'a mut [T], outer: Extent) -> Result<Self, DwtError> {
        Self::new(data, outer.width.max(1), 1, outer)
    }

    pub fn outer(&self) -> Extent {
        self.outer
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.outer.width || y >= self.outer.height {
            return None;
        }
        Some(y * self.row_stride + x * self.col_stride)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.data[i])
    }

    pub fn row(&self, y: usize) -> Result<StridedSlice<'_, T>, DwtError> {
        StridedSlice::new(&*self.data, y * self.row_stride, self.outer.width, self.col_stride)
    }

    pub fn column(&self, x: usize) -> Result<StridedSlice<'_, T>, DwtError> {
        StridedSlice::new(&*self.data, x * self.col_stride, self.outer.height, self.row_stride)
    }

    pub(crate) fn check_inner(&self, inner: Extent) -> Result<(), DwtError> {
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

    pub(crate) fn as_plane_ptr(&mut self) -> PlanePtr<'_, T> {
        PlanePtr {
            ptr: self.data.as_mut_ptr(),
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            outer: self.outer,
            _marker: PhantomData,
        }
    }
}

/// Shares a validated plane between the workers of one row or column pass.
pub(crate) struct PlanePtr<'a, T> {
    ptr: *mut T,
    row_stride: usize,
    col_stride: usize,
    outer: Extent,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: workers only touch disjoint lines, see `row` and `column`.
unsafe impl<T: Send> Send for PlanePtr<'_, T> {}
unsafe impl<T: Send> Sync for PlanePtr<'_, T> {}

impl<T> PlanePtr<'_, T> {
    /// # Safety
    ///
    /// While the returned line is used, no other line sharing its elements may be
    /// used. Distinct rows never share elements, neither do distinct columns.
    pub(crate) unsafe fn row(&self, y: usize) -> LinePtr<T> {
        assert!(y < self.outer.height);
        // SAFETY: the plane was validated to hold every pixel of row `y`.
        unsafe {
            LinePtr::from_raw(
                self.ptr.add(y * self.row_stride),
                self.col_stride,
                self.outer.width,
            )
        }
    }

    /// # Safety
    ///
    /// Same contract as [`PlanePtr::row`].
    pub(crate) unsafe fn column(&self, x: usize) -> LinePtr<T> {
        assert!(x < self.outer.width);
        // SAFETY: the plane was validated to hold every pixel of column `x`.
        unsafe {
            LinePtr::from_raw(
                self.ptr.add(x * self.col_stride),
                self.row_stride,
                self.outer.height,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        let e = Extent::new(5, 3);
        assert_eq!(e.min_dim(), 3);
        assert_eq!(e.max_dim(), 5);
        assert_eq!(e.halved(1), Extent::new(3, 2));
        assert_eq!(e.halved(2), Extent::new(2, 1));
        assert_eq!(e.halved(3), Extent::new(1, 1));
        assert!(Extent::new(5, 2).fits_in(e));
        assert!(!Extent::new(6, 2).fits_in(e));
        assert!(Extent::new(0, 4).is_empty());
    }

    #[test]
    fn test_plane_validation() {
        let mut data = vec![0f32; 20];
        assert!(StridedPlane::new(&mut data, 5, 1, Extent::new(5, 4)).is_ok());
        assert!(StridedPlane::new(&mut data, 1, 4, Extent::new(5, 4)).is_ok());
        assert_eq!(
            StridedPlane::new(&mut data, 0, 1, Extent::new(5, 4)).err(),
            Some(DwtError::ZeroStride)
        );
        assert_eq!(
            StridedPlane::new(&mut data, 2, 1, Extent::new(5, 4)).err(),
            Some(DwtError::OverlappingStrides(2, 1))
        );
        assert_eq!(
            StridedPlane::new(&mut data, 6, 1, Extent::new(5, 4)).err(),
            Some(DwtError::ViewOutOfBounds(23, 20))
        );
        assert!(StridedPlane::new(&mut data, 1, 1, Extent::new(20, 1)).is_ok());
        assert!(StridedPlane::new(&mut data, 7, 3, Extent::new(0, 0)).is_ok());
    }

    #[test]
    fn test_plane_addressing() {
        let mut data = (0..12).map(|x| x as f64).collect::<Vec<_>>();
        let mut plane = StridedPlane::new(&mut data, 1, 3, Extent::new(4, 3)).unwrap();
        assert_eq!(plane.get(1, 2), Some(5.));
        assert_eq!(plane.get(4, 0), None);
        assert_eq!(plane.row(1).unwrap().to_vec(), vec![1., 4., 7., 10.]);
        assert_eq!(plane.column(3).unwrap().to_vec(), vec![9., 10., 11.]);
        *plane.get_mut(0, 0).unwrap() = -1.;
        assert_eq!(
            plane.check_inner(Extent::new(5, 3)),
            Err(DwtError::InnerExceedsOuter(5, 3, 4, 3))
        );
        assert_eq!(data[0], -1.);
    }

    #[test]
    fn test_plane_ptr_lines() {
        use crate::strided::{LineRead, LineWrite};
        let mut data = (0..6).map(|x| x as f32).collect::<Vec<_>>();
        let mut plane = StridedPlane::row_major(&mut data, Extent::new(3, 2)).unwrap();
        let ptr = plane.as_plane_ptr();
        let mut row = unsafe { ptr.row(1) };
        assert_eq!(row.read(2), 5.);
        row.write(0, 9.);
        let column = unsafe { ptr.column(0) };
        assert_eq!(column.read(1), 9.);
        assert_eq!(data[3], 9.);
    }
}
