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
use num_traits::Float;

/// Gamma used when none is given, brightens underexposed films
pub const DEFAULT_GAMMA: f32 = 0.6;

#[inline(always)]
/// Pure power law on normalized values
pub(crate) fn pure_gamma_function<V: Float>(x: V, gamma: V) -> V {
    if x <= V::zero() {
        V::zero()
    } else if x >= V::one() {
        V::one()
    } else {
        x.powf(gamma)
    }
}

/// Power law transform parameters, `out = (in / 255)^gamma * 255 * gain`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct GammaParameters {
    pub gamma: f32,
    pub gain: f32,
}

impl Default for GammaParameters {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            gain: 1.0,
        }
    }
}

impl GammaParameters {
    pub fn new(gamma: f32, gain: f32) -> Self {
        Self { gamma, gain }
    }

    pub fn validate(&self) -> Result<(), ForgeError> {
        if !self.gamma.is_finite() || self.gamma <= 0. {
            return Err(ForgeError::InvalidGamma(self.gamma));
        }
        if !self.gain.is_finite() || self.gain <= 0. {
            return Err(ForgeError::InvalidGain(self.gain));
        }
        Ok(())
    }

    /// Builds the table, recomputed on every call
    pub fn generate_gamma_table(&self) -> Result<IntensityLut, ForgeError> {
        self.validate()?;
        let gamma = self.gamma as f64;
        let gain = self.gain as f64;
        Ok(IntensityLut::from_curve(|v: f64| {
            pure_gamma_function(v / 255., gamma) * 255. * gain
        }))
    }
}

/// Power law (gamma) transformation.
///
/// Gamma below 1 brightens shadows, above 1 darkens them.
pub fn gamma_correction(
    image: &GrayRaster<'_>,
    gamma: f32,
    gain: f32,
) -> Result<GrayRaster<'static>, ForgeError> {
    let table = GammaParameters::new(gamma, gain).generate_gamma_table()?;
    log::debug!("gamma correction: gamma={gamma}, gain={gain}");
    table.apply(image)
}
