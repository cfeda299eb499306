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
use crate::equalize::Histogram;
use crate::gamma::GammaParameters;
use crate::lut::IntensityLut;
use crate::stretch::StretchParameters;
use crate::{EnhancementMethod, ForgeError, GrayRaster};

pub type SyncIntensityTransform = dyn IntensityTransform + Send + Sync;

pub trait IntensityTransform {
    /// Transforms image lane.
    ///
    /// Lane length must match.
    fn transform_lane(&self, src: &[u8], dst: &mut [u8]) -> Result<(), ForgeError>;

    /// Transforms the whole image into a newly allocated one of the same size.
    fn transform(&self, image: &GrayRaster<'_>) -> Result<GrayRaster<'static>, ForgeError>;
}

pub(crate) struct LutTransform {
    pub(crate) lut: IntensityLut,
}

impl IntensityTransform for LutTransform {
    fn transform_lane(&self, src: &[u8], dst: &mut [u8]) -> Result<(), ForgeError> {
        self.lut.apply_lane(src, dst)
    }

    fn transform(&self, image: &GrayRaster<'_>) -> Result<GrayRaster<'static>, ForgeError> {
        self.lut.apply(image)
    }
}

fn make_lut(method: EnhancementMethod, source: &GrayRaster<'_>) -> Result<IntensityLut, ForgeError> {
    let lut = match method {
        EnhancementMethod::HistogramEqualization => {
            Histogram::from_raster(source)?.equalization_lut()
        }
        EnhancementMethod::GammaCorrection { gamma } => {
            GammaParameters::new(gamma, 1.0).generate_gamma_table()?
        }
        EnhancementMethod::GammaPlusContrast { gamma } => {
            let gamma_table = GammaParameters::new(gamma, 1.0).generate_gamma_table()?;
            let stretch_table = StretchParameters::default().generate_stretch_table()?;
            gamma_table.then(&stretch_table)
        }
    };
    Ok(lut)
}

/// Creates transform for the method.
///
/// # Arguments
///
/// * `method`: see [EnhancementMethod]
/// * `source`: image the transform is built for, equalization derives its table from it
///
/// returns: Box<dyn IntensityTransform + Send + Sync>
pub fn create_transform(
    method: EnhancementMethod,
    source: &GrayRaster<'_>,
) -> Result<Box<SyncIntensityTransform>, ForgeError> {
    let lut = make_lut(method, source)?;
    Ok(Box::new(LutTransform { lut }))
}

/// Gamma correction followed by the default contrast stretch
pub fn compose_gamma_then_contrast(
    image: &GrayRaster<'_>,
    gamma: f32,
) -> Result<GrayRaster<'static>, ForgeError> {
    enhance(image, EnhancementMethod::GammaPlusContrast { gamma })
}

/// Applies `method` to `image`, input is never modified
pub fn enhance(
    image: &GrayRaster<'_>,
    method: EnhancementMethod,
) -> Result<GrayRaster<'static>, ForgeError> {
    image.check_layout()?;
    let transform = create_transform(method, image)?;
    log::debug!(
        "enhancing {}x{} image with {}",
        image.width,
        image.height,
        method
    );
    transform.transform(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contrast_stretch, gamma_correction, histogram_equalize};

    fn chest_like() -> GrayRaster<'static> {
        let (width, height) = (48usize, 32usize);
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let ribs = if (y / 4) % 2 == 0 { 40 } else { 0 };
                data.push((20 + x * 3 + ribs) as u8);
            }
        }
        GrayRaster::new(data, width, height)
    }

    #[test]
    fn composition_equals_sequential_application() {
        let image = chest_like();
        for gamma in [0.2f32, 0.6, 1.0, 1.5] {
            let composed = compose_gamma_then_contrast(&image, gamma).unwrap();
            let sequential = contrast_stretch(
                &gamma_correction(&image, gamma, 1.0).unwrap(),
                StretchParameters::default(),
            )
            .unwrap();
            assert_eq!(composed, sequential);
        }
    }

    #[test]
    fn composition_order_matters() {
        let image = chest_like();
        let gamma_first = compose_gamma_then_contrast(&image, 0.6).unwrap();
        let stretch_first = gamma_correction(
            &contrast_stretch(&image, StretchParameters::default()).unwrap(),
            0.6,
            1.0,
        )
        .unwrap();
        assert_ne!(gamma_first, stretch_first);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let image = chest_like();
        assert_eq!(
            enhance(&image, EnhancementMethod::HistogramEqualization).unwrap(),
            histogram_equalize(&image).unwrap()
        );
        assert_eq!(
            enhance(&image, EnhancementMethod::GammaCorrection { gamma: 1.3 }).unwrap(),
            gamma_correction(&image, 1.3, 1.0).unwrap()
        );
    }

    #[test]
    fn lane_transform() {
        let image = chest_like();
        let transform =
            create_transform(EnhancementMethod::GammaCorrection { gamma: 1.0 }, &image).unwrap();
        let src = [0u8, 17, 128, 255];
        let mut dst = [0u8; 4];
        transform.transform_lane(&src, &mut dst).unwrap();
        assert_eq!(src, dst);
        assert_eq!(
            transform.transform_lane(&src, &mut [0u8; 2]),
            Err(ForgeError::LaneSizeMismatch)
        );
    }

    #[test]
    fn invalid_gamma_is_reported() {
        let image = chest_like();
        assert_eq!(
            enhance(&image, EnhancementMethod::GammaPlusContrast { gamma: -0.5 }),
            Err(ForgeError::InvalidGamma(-0.5))
        );
    }

    #[test]
    fn source_is_left_untouched() {
        let image = chest_like();
        let copy = image.clone();
        let _ = enhance(&image, EnhancementMethod::GammaPlusContrast { gamma: 0.4 }).unwrap();
        assert_eq!(image, copy);
    }
}
