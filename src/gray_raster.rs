/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
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
use crate::err::MismatchedSize;
use crate::ForgeError;
use std::borrow::Cow;

/// Single channel 8-bit image store.
///
/// Data may be borrowed from the caller or owned, every transform produces an owned raster
/// with a freshly allocated buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster<'a> {
    pub data: Cow<'a, [u8]>,
    pub width: usize,
    pub height: usize,
    /// Image stride, items per row, might be 0
    pub stride: usize,
}

impl<'a> GrayRaster<'a> {
    /// Allocates image filled with `value`
    pub fn filled(width: usize, height: usize, value: u8) -> GrayRaster<'static> {
        GrayRaster {
            data: Cow::Owned(vec![value; width * height]),
            width,
            height,
            stride: width,
        }
    }

    /// Takes ownership of tightly packed data
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> GrayRaster<'static> {
        GrayRaster {
            data: Cow::Owned(data),
            width,
            height,
            stride: width,
        }
    }

    /// Borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a [u8], width: usize, height: usize) -> Self {
        Self {
            data: Cow::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> usize {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Checks that raster is not empty and data covers declared layout
    #[inline]
    pub fn check_layout(&self) -> Result<(), ForgeError> {
        if self.width == 0 || self.height == 0 {
            return Err(ForgeError::ZeroBaseSize);
        }
        let stride = self.row_stride();
        if stride < self.width {
            return Err(ForgeError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: self.width,
                received: stride,
            }));
        }
        let required = stride
            .checked_mul(self.height - 1)
            .and_then(|v| v.checked_add(self.width));
        match required {
            Some(required) if self.data.len() >= required => Ok(()),
            _ => Err(ForgeError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: stride.saturating_mul(self.height),
                received: self.data.len(),
            })),
        }
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches(&self, other: &GrayRaster<'_>) -> Result<(), ForgeError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(ForgeError::ImageSizeMismatch)
    }

    /// Iterates over visible rows, stride padding is skipped.
    ///
    /// Layout must be checked beforehand.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.width;
        self.data
            .chunks(self.row_stride())
            .take(self.height)
            .map(move |row| &row[..width])
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.row_stride() + x]
    }

    /// Copies visible pixels into a tightly packed buffer
    pub fn to_packed(&self) -> Vec<u8> {
        let mut packed = Vec::with_capacity(self.pixel_count());
        for row in self.rows() {
            packed.extend_from_slice(row);
        }
        packed
    }

    /// Detaches raster from borrowed storage
    pub fn into_owned(self) -> GrayRaster<'static> {
        GrayRaster {
            data: Cow::Owned(self.data.into_owned()),
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Copies `other` into this raster with its top left corner at (`x`, `y`).
    ///
    /// Pixels falling outside are dropped.
    pub(crate) fn blit(
        &mut self,
        other: &GrayRaster<'_>,
        x: usize,
        y: usize,
    ) -> Result<(), ForgeError> {
        self.check_layout()?;
        other.check_layout()?;
        let stride = self.row_stride();
        let (width, height) = (self.width, self.height);
        if x >= width || y >= height {
            return Ok(());
        }
        let data = self.data.to_mut();
        let visible = other.width.min(width - x);
        for (dy, src) in other.rows().take(height - y).enumerate() {
            let start = (y + dy) * stride + x;
            data[start..start + visible].copy_from_slice(&src[..visible]);
        }
        Ok(())
    }
}
