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
use crate::gamma::DEFAULT_GAMMA;
use crate::ForgeError;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Gamma values offered to users, the engine itself accepts any positive gamma
pub const GAMMA_RANGE: RangeInclusive<f32> = 0.2..=1.5;

/// Defines an enhancement method.
///
/// Every method is a global point-wise mapping, output pixel depends only on the input
/// pixel at the same position (and, for equalization, on the source histogram).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub enum EnhancementMethod {
    /// Global histogram equalization through the cumulative distribution.
    #[default]
    HistogramEqualization,
    /// Power law transform with unit gain.
    GammaCorrection { gamma: f32 },
    /// Gamma correction followed by the default piecewise contrast stretch.
    GammaPlusContrast { gamma: f32 },
}

impl EnhancementMethod {
    /// Display names in the order they are offered
    pub const NAMES: [&'static str; 3] = [
        "Histogram Equalization",
        "Gamma Correction",
        "Gamma + Contrast",
    ];

    /// Name results are stored and reported under
    pub fn display_name(&self) -> &'static str {
        match self {
            EnhancementMethod::HistogramEqualization => Self::NAMES[0],
            EnhancementMethod::GammaCorrection { .. } => Self::NAMES[1],
            EnhancementMethod::GammaPlusContrast { .. } => Self::NAMES[2],
        }
    }

    /// Resolves a display name, gamma defaults to [DEFAULT_GAMMA] when absent.
    ///
    /// Gamma is ignored for methods that do not take it.
    pub fn from_name(name: &str, gamma: Option<f32>) -> Result<EnhancementMethod, ForgeError> {
        let gamma = gamma.unwrap_or(DEFAULT_GAMMA);
        match name {
            "Histogram Equalization" => Ok(EnhancementMethod::HistogramEqualization),
            "Gamma Correction" => Ok(EnhancementMethod::GammaCorrection { gamma }),
            "Gamma + Contrast" => Ok(EnhancementMethod::GammaPlusContrast { gamma }),
            _ => Err(ForgeError::UnknownMethod(name.to_string())),
        }
    }

    pub fn gamma(&self) -> Option<f32> {
        match *self {
            EnhancementMethod::HistogramEqualization => None,
            EnhancementMethod::GammaCorrection { gamma }
            | EnhancementMethod::GammaPlusContrast { gamma } => Some(gamma),
        }
    }
}

impl Display for EnhancementMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.gamma() {
            Some(gamma) => write!(f, "{} (Gamma={:.2})", self.display_name(), gamma),
            None => f.write_str(self.display_name()),
        }
    }
}
