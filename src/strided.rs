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

/// Read access to one line of samples, addressed by logical index.
pub(crate) trait LineRead<T> {
    fn read(&self, index: usize) -> T;
}

/// Write access to one line of samples, addressed by logical index.
pub(crate) trait LineWrite<T> {
    fn write(&mut self, index: usize, value: T);
}

fn required_length(offset: usize, len: usize, stride: usize) -> Option<usize> {
    if len == 0 {
        return Some(offset);
    }
    (len - 1).checked_mul(stride)?.checked_add(offset)?.checked_add(1)
}

fn check_view(
    available: usize,
    offset: usize,
    len: usize,
    stride: usize,
) -> Result<(), DwtError> {
    if stride == 0 {
        return Err(DwtError::ZeroStride);
    }
    let required = required_length(offset, len, stride)
        .ok_or(DwtError::ViewOutOfBounds(usize::MAX, available))?;
    if required > available {
        return Err(DwtError::ViewOutOfBounds(required, available));
    }
    Ok(())
}

/// Read-only strided view: `len` elements starting at `offset`, `stride` elements apart.
///
/// A row of a row-major image is a view with stride `1`, a column is a view with
/// stride equal to the row pitch.
#[derive(Debug, Clone, Copy)]
pub struct StridedSlice<'a, T> {
    data: &'a [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T: Copy> StridedSlice<'a, T> {
    /// Creates a view, failing if the stride is zero or the last element is out of bounds.
    pub fn new(data: &'a [T], offset: usize, len: usize, stride: usize) -> Result<Self, DwtError> {
        check_view(data.len(), offset, len, stride)?;
        Ok(Self {
            data,
            offset,
            len,
            stride,
        })
    }

    /// Views a whole slice with stride `1`.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            offset: 0,
            len: data.len(),
            stride: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.data.get(self.offset + index * self.stride).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let data: &'a [T] = self.data;
        data[self.offset.min(data.len())..]
            .iter()
            .step_by(self.stride)
            .take(self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

impl<T: Copy> LineRead<T> for StridedSlice<'_, T> {
    #[inline]
    fn read(&self, index: usize) -> T {
        debug_assert!(index < self.len);
        self.data[self.offset + index * self.stride]
    }
}

/// Mutable strided view: `len` elements starting at `offset`, `stride` elements apart.
#[derive(Debug)]
pub struct StridedSliceMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T: Copy> StridedSliceMut<'a, T> {
    /// Creates a view, failing if the stride is zero or the last element is out of bounds.
    pub fn new(
        data: &'a mut [T],
        offset: usize,
        len: usize,
        stride: usize,
    ) -> Result<Self, DwtError> {
        check_view(data.len(), offset, len, stride)?;
        Ok(Self {
            data,
            offset,
            len,
            stride,
        })
    }

    /// Views a whole slice with stride `1`.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            offset: 0,
            len,
            stride: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.data.get(self.offset + index * self.stride).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.data.get_mut(self.offset + index * self.stride)
    }

    pub fn as_view(&self) -> StridedSlice<'_, T> {
        StridedSlice {
            data: &*self.data,
            offset: self.offset,
            len: self.len,
            stride: self.stride,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let start = self.offset.min(self.data.len());
        self.data[start..]
            .iter_mut()
            .step_by(self.stride)
            .take(self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_view().to_vec()
    }
}

impl<T: Copy> LineRead<T> for StridedSliceMut<'_, T> {
    #[inline]
    fn read(&self, index: usize) -> T {
        debug_assert!(index < self.len);
        self.data[self.offset + index * self.stride]
    }
}

impl<T: Copy> LineWrite<T> for StridedSliceMut<'_, T> {
    #[inline]
    fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        self.data[self.offset + index * self.stride] = value;
    }
}

/// One row or column of a plane shared between worker threads.
///
/// Holds a raw base pointer so that disjoint lines of the same buffer can be
/// written concurrently.
pub(crate) struct LinePtr<T> {
    base: *mut T,
    start: usize,
    len: usize,
    stride: usize,
}

impl<T> Clone for LinePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LinePtr<T> {}

impl<T> LinePtr<T> {
    /// # Safety
    ///
    /// `base.add(i * stride)` must be valid for reads and writes for every `i < len`,
    /// and nothing else may access those elements while the line or any copy of it is used.
    pub(crate) unsafe fn from_raw(base: *mut T, stride: usize, len: usize) -> Self {
        Self {
            base,
            start: 0,
            len,
            stride,
        }
    }

    /// The tail of this line beginning at element `start`.
    pub(crate) fn skip(self, start: usize) -> Self {
        assert!(start <= self.len, "line offset {start} past length {}", self.len);
        Self {
            base: self.base,
            start: self.start + start,
            len: self.len - start,
            stride: self.stride,
        }
    }
}

impl<T: Copy> LineRead<T> for LinePtr<T> {
    #[inline]
    fn read(&self, index: usize) -> T {
        assert!(index < self.len);
        // SAFETY: `index < len`, the element is inside the region promised by `from_raw`.
        unsafe { *self.base.add((self.start + index) * self.stride) }
    }
}

impl<T: Copy> LineWrite<T> for LinePtr<T> {
    #[inline]
    fn write(&mut self, index: usize, value: T) {
        assert!(index < self.len);
        // SAFETY: `index < len`, the element is inside the region promised by `from_raw`.
        unsafe {
            *self.base.add((self.start + index) * self.stride) = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_bounds() {
        let data = [0f32; 10];
        assert!(StridedSlice::new(&data, 0, 4, 3).is_ok());
        assert!(StridedSlice::new(&data, 1, 3, 3).is_ok());
        assert_eq!(
            StridedSlice::new(&data, 1, 4, 3).unwrap_err(),
            DwtError::ViewOutOfBounds(11, 10)
        );
        assert_eq!(
            StridedSlice::new(&data, 2, 4, 3).unwrap_err(),
            DwtError::ViewOutOfBounds(12, 10)
        );
        assert_eq!(
            StridedSlice::new(&data, 0, 2, 0).unwrap_err(),
            DwtError::ZeroStride
        );
        assert!(StridedSlice::new(&data, 10, 0, 1).is_ok());
    }

    #[test]
    fn test_view_addressing() {
        let data = (0..12).map(|x| x as f64).collect::<Vec<_>>();
        let view = StridedSlice::new(&data, 2, 4, 3).unwrap();
        assert_eq!(view.to_vec(), vec![2., 5., 8., 11.]);
        assert_eq!(view.get(3), Some(11.));
        assert_eq!(view.get(4), None);
        assert_eq!(view.read(1), 5.);
    }

    #[test]
    fn test_view_mut_writes_only_its_elements() {
        let mut data = vec![0f32; 10];
        {
            let mut view = StridedSliceMut::new(&mut data, 1, 3, 4).unwrap();
            for (i, v) in view.iter_mut().enumerate() {
                *v = (i + 1) as f32;
            }
            view.write(2, 7.);
            assert_eq!(view.get(2), Some(7.));
            assert_eq!(view.get(3), None);
        }
        assert_eq!(data, vec![0., 1., 0., 0., 0., 2., 0., 0., 0., 7.]);
        assert!(StridedSliceMut::new(&mut data[..9], 1, 3, 4).is_err());
    }

    #[test]
    fn test_line_ptr_skip() {
        let mut data = (0..10).map(|x| x as f32).collect::<Vec<_>>();
        let line = unsafe { LinePtr::from_raw(data.as_mut_ptr(), 2, 5) };
        let mut tail = line.skip(2);
        assert_eq!(tail.read(0), 4.);
        tail.write(2, -1.);
        assert_eq!(line.read(4), -1.);
        assert_eq!(data[8], -1.);
    }
}
