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
use crate::{ForgeError, GrayRaster};
use num_traits::{AsPrimitive, Float};

/// Rounds to nearest and clamps into 8-bit range, NaN maps to 0
#[inline(always)]
pub(crate) fn quantize<V>(v: V) -> u8
where
    V: Float + AsPrimitive<u8>,
    u8: AsPrimitive<V>,
{
    let max: V = 255u8.as_();
    v.max(V::zero()).min(max).round().as_()
}

/// 256 entries table mapping every input intensity to its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityLut {
    table: Box<[u8; 256]>,
}

impl Default for IntensityLut {
    fn default() -> Self {
        Self::identity()
    }
}

impl IntensityLut {
    pub fn identity() -> Self {
        let mut table = Box::new([0u8; 256]);
        for (i, value) in table.iter_mut().enumerate() {
            *value = i as u8;
        }
        Self { table }
    }

    pub fn from_table(table: [u8; 256]) -> Self {
        Self {
            table: Box::new(table),
        }
    }

    /// Samples `curve` at every intensity in `0..=255`.
    ///
    /// Curve works in the intensity domain, results are rounded and clamped.
    pub fn from_curve<V, F>(curve: F) -> Self
    where
        F: Fn(V) -> V,
        V: Float + AsPrimitive<u8>,
        u8: AsPrimitive<V>,
    {
        let mut table = Box::new([0u8; 256]);
        for (i, value) in table.iter_mut().enumerate() {
            let x: V = (i as u8).as_();
            *value = quantize(curve(x));
        }
        Self { table }
    }

    #[inline(always)]
    pub fn map(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }

    /// Table equal to applying `self` first and `next` to its output
    pub fn then(&self, next: &IntensityLut) -> IntensityLut {
        let mut table = Box::new([0u8; 256]);
        for (dst, &src) in table.iter_mut().zip(self.table.iter()) {
            *dst = next.map(src);
        }
        IntensityLut { table }
    }

    /// True when pixel ordering is preserved
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn apply_lane(&self, src: &[u8], dst: &mut [u8]) -> Result<(), ForgeError> {
        if src.len() != dst.len() {
            return Err(ForgeError::LaneSizeMismatch);
        }
        for (&src, dst) in src.iter().zip(dst.iter_mut()) {
            *dst = self.table[src as usize];
        }
        Ok(())
    }

    /// Maps every pixel into a newly allocated, tightly packed raster
    pub fn apply(&self, image: &GrayRaster<'_>) -> Result<GrayRaster<'static>, ForgeError> {
        image.check_layout()?;
        let mut dst = vec![0u8; image.pixel_count()];
        for (src, dst) in image.rows().zip(dst.chunks_exact_mut(image.width)) {
            self.apply_lane(src, dst)?;
        }
        Ok(GrayRaster::new(dst, image.width, image.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_clamps_and_rounds() {
        assert_eq!(quantize(-3.0f32), 0);
        assert_eq!(quantize(300.0f64), 255);
        assert_eq!(quantize(12.5f64), 13);
        assert_eq!(quantize(12.49f32), 12);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn identity_leaves_raster_untouched() {
        let data: Vec<u8> = (0..=255).collect();
        let raster = GrayRaster::borrow(&data, 16, 16);
        let out = IntensityLut::identity().apply(&raster).unwrap();
        assert_eq!(out, raster.into_owned());
    }

    #[test]
    fn composition_matches_sequential_application() {
        let invert = IntensityLut::from_curve(|v: f32| 255. - v);
        let half = IntensityLut::from_curve(|v: f32| v * 0.5);
        let data: Vec<u8> = (0..=255).collect();
        let raster = GrayRaster::borrow(&data, 32, 8);
        let sequential = half.apply(&invert.apply(&raster).unwrap()).unwrap();
        let composed = invert.then(&half).apply(&raster).unwrap();
        assert_eq!(sequential, composed);
    }

    #[test]
    fn monotonic_detection() {
        assert!(IntensityLut::identity().is_monotonic());
        assert!(!IntensityLut::from_curve(|v: f64| 255. - v).is_monotonic());
    }

    #[test]
    fn lane_size_must_match() {
        let lut = IntensityLut::identity();
        let mut dst = [0u8; 3];
        assert_eq!(
            lut.apply_lane(&[1, 2], &mut dst),
            Err(ForgeError::LaneSizeMismatch)
        );
    }

    #[test]
    fn output_never_aliases_borrowed_input() {
        let data = vec![7u8; 4];
        let raster = GrayRaster::borrow(&data, 2, 2);
        let out = IntensityLut::identity().apply(&raster).unwrap();
        assert!(matches!(out.data, std::borrow::Cow::Owned(_)));
    }
}
