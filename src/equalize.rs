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
use crate::lut::{quantize, IntensityLut};
use crate::{ForgeError, GrayRaster};

/// 256 bins intensity histogram of a raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: Box<[u64; 256]>,
    total: u64,
}

impl Histogram {
    pub fn from_raster(image: &GrayRaster<'_>) -> Result<Histogram, ForgeError> {
        image.check_layout()?;
        let mut bins = Box::new([0u64; 256]);
        for row in image.rows() {
            for &v in row {
                bins[v as usize] += 1;
            }
        }
        Ok(Histogram {
            bins,
            total: image.pixel_count() as u64,
        })
    }

    pub fn bins(&self) -> &[u64; 256] {
        &self.bins
    }

    /// Pixel count
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Cumulative counts, last entry equals [Histogram::total]
    pub fn cdf(&self) -> [u64; 256] {
        let mut cdf = [0u64; 256];
        let mut acc = 0u64;
        for (dst, &count) in cdf.iter_mut().zip(self.bins.iter()) {
            acc += count;
            *dst = acc;
        }
        cdf
    }

    /// Global equalization table, `v -> round(255 * cdf(v) / total)`
    pub fn equalization_lut(&self) -> IntensityLut {
        if self.total == 0 {
            return IntensityLut::identity();
        }
        let cdf = self.cdf();
        let scale = 255. / self.total as f64;
        let mut table = [0u8; 256];
        for (dst, &c) in table.iter_mut().zip(cdf.iter()) {
            *dst = quantize(c as f64 * scale);
        }
        IntensityLut::from_table(table)
    }

    /// Largest distance between the normalized CDF and the uniform one.
    ///
    /// 0 is perfectly flat, values close to 1 mean all mass sits in one bin at an end.
    pub fn cdf_flatness(&self) -> f64 {
        if self.total == 0 {
            return 0.;
        }
        let total = self.total as f64;
        self.cdf()
            .iter()
            .enumerate()
            .map(|(i, &c)| (c as f64 / total - (i + 1) as f64 / 256.).abs())
            .fold(0f64, f64::max)
    }
}

/// Global histogram equalization, no clipping or tiling
pub fn histogram_equalize(image: &GrayRaster<'_>) -> Result<GrayRaster<'static>, ForgeError> {
    let histogram = Histogram::from_raster(image)?;
    log::debug!(
        "histogram equalization: {} pixels, flatness {:.4}",
        histogram.total(),
        histogram.cdf_flatness()
    );
    histogram.equalization_lut().apply(image)
}
