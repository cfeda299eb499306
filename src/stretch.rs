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
use crate::lut::IntensityLut;
use crate::{ForgeError, GrayRaster};

/// Control points of the three segment contrast stretch.
///
/// `(r1, s1)` and `(r2, s2)` are the knees of the curve, the ends are pinned at
/// `(0, 0)` and `(255, 255)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct StretchParameters {
    pub r1: u8,
    pub s1: u8,
    pub r2: u8,
    pub s2: u8,
}

impl Default for StretchParameters {
    fn default() -> Self {
        Self {
            r1: 60,
            s1: 10,
            r2: 180,
            s2: 245,
        }
    }
}

impl StretchParameters {
    pub fn new(r1: u8, s1: u8, r2: u8, s2: u8) -> Self {
        Self { r1, s1, r2, s2 }
    }

    pub fn validate(&self) -> Result<(), ForgeError> {
        if self.r1 >= self.r2 {
            return Err(ForgeError::DegenerateStretchPoints {
                r1: self.r1,
                r2: self.r2,
            });
        }
        Ok(())
    }

    /// Evaluates the piecewise linear curve before rounding.
    ///
    /// `r1 == 0` collapses the first segment onto `s1`, `r2 == 255` leaves the last one empty.
    pub fn evaluate(&self, v: f64) -> f64 {
        let r1 = self.r1 as f64;
        let s1 = self.s1 as f64;
        let r2 = self.r2 as f64;
        let s2 = self.s2 as f64;
        if v <= r1 {
            if self.r1 == 0 {
                s1
            } else {
                (s1 / r1) * v
            }
        } else if v <= r2 {
            ((s2 - s1) / (r2 - r1)) * (v - r1) + s1
        } else if self.r2 == 255 {
            s2
        } else {
            ((255. - s2) / (255. - r2)) * (v - r2) + s2
        }
    }

    pub fn generate_stretch_table(&self) -> Result<IntensityLut, ForgeError> {
        self.validate()?;
        Ok(IntensityLut::from_curve(|v: f64| self.evaluate(v)))
    }
}

/// Piecewise linear contrast stretching
pub fn contrast_stretch(
    image: &GrayRaster<'_>,
    params: StretchParameters,
) -> Result<GrayRaster<'static>, ForgeError> {
    let table = params.generate_stretch_table()?;
    log::debug!("contrast stretch: {:?}", params);
    table.apply(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_knees_are_exact() {
        let table = StretchParameters::default()
            .generate_stretch_table()
            .unwrap();
        assert_eq!(table.map(0), 0);
        assert_eq!(table.map(60), 10);
        assert_eq!(table.map(180), 245);
        assert_eq!(table.map(255), 255);
    }

    #[test]
    fn continuous_at_knees() {
        let params = StretchParameters::default();
        for knee in [params.r1 as f64, params.r2 as f64] {
            let left = params.evaluate(knee);
            let right = params.evaluate(knee + 1e-6);
            assert!((left - right).abs() < 1.0, "jump at {knee}");
        }
        let table = params.generate_stretch_table().unwrap();
        for i in 1..=255u8 {
            let step = table.map(i) as i32 - table.map(i - 1) as i32;
            // steepest segment slope is 235 / 120
            assert!((0..=3).contains(&step), "step {step} at {i}");
        }
    }

    #[test]
    fn stretches_mid_range() {
        let data: Vec<u8> = vec![60, 90, 120, 150, 180, 200];
        let image = GrayRaster::new(data, 3, 2);
        let out = contrast_stretch(&image, StretchParameters::default()).unwrap();
        assert_eq!(out.data.as_ref(), &[10, 69, 128, 186, 245, 248]);
    }

    #[test]
    fn degenerate_points_are_guarded() {
        let image = GrayRaster::filled(4, 4, 0);
        let out = contrast_stretch(&image, StretchParameters::new(0, 30, 200, 220)).unwrap();
        assert!(out.data.iter().all(|&v| v == 30));

        let table = StretchParameters::new(10, 5, 255, 250)
            .generate_stretch_table()
            .unwrap();
        assert_eq!(table.map(255), 250);

        assert_eq!(
            contrast_stretch(&image, StretchParameters::new(100, 10, 100, 245)),
            Err(ForgeError::DegenerateStretchPoints { r1: 100, r2: 100 })
        );
        assert_eq!(
            contrast_stretch(&image, StretchParameters::new(200, 10, 50, 245)),
            Err(ForgeError::DegenerateStretchPoints { r1: 200, r2: 50 })
        );
    }
}
