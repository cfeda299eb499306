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
use anyhow::{anyhow, Context};
use image::imageops::FilterType;
use image::GrayImage;
use std::path::Path;
use xrayforge::GrayRaster;

/// Loads any supported image and converts it to 8-bit luma.
///
/// Returns the image with the file stem, used to name outputs.
pub fn load_grayscale(path: &Path) -> anyhow::Result<(GrayRaster<'static>, String)> {
    let img = image::open(path)
        .with_context(|| format!("Could not open image file {}", path.display()))?
        .into_luma8();
    let (width, height) = img.dimensions();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok((
        GrayRaster::new(img.into_raw(), width as usize, height as usize),
        name,
    ))
}

pub fn to_gray_image(raster: &GrayRaster<'_>) -> anyhow::Result<GrayImage> {
    raster.check_layout()?;
    GrayImage::from_raw(
        raster.width as u32,
        raster.height as u32,
        raster.to_packed(),
    )
    .ok_or_else(|| anyhow!("raster {}x{} does not fit", raster.width, raster.height))
}

/// Shrinks the image so neither side exceeds `max_side`, smaller images are kept as is
pub fn fit_within(img: GrayImage, max_side: u32) -> GrayImage {
    let (width, height) = img.dimensions();
    let longest = width.max(height);
    if longest <= max_side {
        return img;
    }
    let scale = max_side as f64 / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    image::imageops::resize(&img, new_width, new_height, FilterType::Triangle)
}

pub fn save_grayscale(raster: &GrayRaster<'_>, path: &Path) -> anyhow::Result<()> {
    to_gray_image(raster)?
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))
}

/// `Gamma + Contrast` -> `gamma_contrast`
pub fn method_slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
