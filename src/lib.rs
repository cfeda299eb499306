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
//! Point-wise intensity enhancement for 8-bit grayscale radiographs.
//!
//! Every method is a 256 entries lookup table applied to each pixel: gamma correction,
//! piecewise linear contrast stretching, global histogram equalization and gamma followed
//! by contrast stretching. [EnhancementSession] keeps the loaded image with its results
//! and renders comparison pages for reports.
mod equalize;
mod err;
mod gamma;
mod gray_raster;
mod lut;
mod method;
mod report;
mod session;
mod stretch;
mod transform;

pub use equalize::{histogram_equalize, Histogram};
pub use err::{ForgeError, MismatchedSize};
pub use gamma::{gamma_correction, GammaParameters, DEFAULT_GAMMA};
pub use gray_raster::GrayRaster;
pub use lut::IntensityLut;
pub use method::{EnhancementMethod, GAMMA_RANGE};
pub use report::{
    compose_comparison, report_file_name, Caption, ComparisonLayout, ReportPage, MARGIN,
    REPORT_DIR,
};
pub use session::EnhancementSession;
pub use stretch::{contrast_stretch, StretchParameters};
pub use transform::{
    compose_gamma_then_contrast, create_transform, enhance, IntensityTransform,
    SyncIntensityTransform,
};
