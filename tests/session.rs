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
use xrayforge::{
    compose_gamma_then_contrast, contrast_stretch, gamma_correction, EnhancementMethod,
    EnhancementSession, ForgeError, GrayRaster, Histogram, StretchParameters,
};

/// Synthetic chest film: dark lungs either side of a bright mediastinum, ribs on top
fn synthetic_film(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let center = (x as i64 - width as i64 / 2).unsigned_abs() as usize;
            let mut v = if center < width / 8 { 150 } else { 45 };
            if (y / 6) % 3 == 0 {
                v += 25;
            }
            v += (x + y) % 9;
            data.push(v as u8);
        }
    }
    data
}

#[test]
fn session_workflow_produces_ordered_report() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height) = (96usize, 72usize);
    let buffer = synthetic_film(width, height);

    let mut session = EnhancementSession::new();
    session
        .load_source(GrayRaster::borrow(&buffer, width, height), "film")
        .unwrap();

    for name in EnhancementMethod::NAMES {
        let method = EnhancementMethod::from_name(name, Some(0.5)).unwrap();
        let out = session.apply_and_store(method).unwrap();
        assert_eq!(out.width, width);
        assert_eq!(out.height, height);
    }
    session
        .apply_and_store(EnhancementMethod::HistogramEqualization)
        .unwrap();

    let names: Vec<&str> = session
        .all_results()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, EnhancementMethod::NAMES);

    let pages = session.report_pages().unwrap();
    assert_eq!(pages.len(), 3);
    for (page, name) in pages.zip(EnhancementMethod::NAMES) {
        let page = page.unwrap();
        assert_eq!(page.title, name);
        assert_eq!(page.page.width, width * 2 + xrayforge::MARGIN * 3);
    }
    assert_eq!(session.report_file_name().unwrap(), "film_report.pdf");

    // the session owns a copy, the caller buffer is untouched
    assert_eq!(buffer, synthetic_film(width, height));
}

#[test]
fn equalization_flattens_film() {
    let (width, height) = (96usize, 72usize);
    let buffer = synthetic_film(width, height);
    let mut session = EnhancementSession::new();
    session
        .load_source(GrayRaster::borrow(&buffer, width, height), "film")
        .unwrap();
    let before = Histogram::from_raster(session.source().unwrap()).unwrap();
    let equalized = session
        .apply_and_store(EnhancementMethod::HistogramEqualization)
        .unwrap();
    let after = Histogram::from_raster(equalized).unwrap();
    assert!(after.cdf_flatness() < before.cdf_flatness());
}

#[test]
fn strided_source_is_supported() {
    let data = [10u8, 200, 0, 0, 60, 180, 0, 0];
    let mut image = GrayRaster::borrow(&data, 2, 2);
    image.stride = 4;
    let out = contrast_stretch(&image, StretchParameters::default()).unwrap();
    assert_eq!(out.stride, 2);
    assert_eq!(out.data.as_ref(), &[2, 248, 10, 245]);
}

#[test]
fn gamma_then_contrast_is_not_commutative() {
    let (width, height) = (96usize, 72usize);
    let buffer = synthetic_film(width, height);
    let image = GrayRaster::borrow(&buffer, width, height);
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
fn errors_surface_to_caller() {
    let mut session = EnhancementSession::new();
    let err = session
        .apply_and_store(EnhancementMethod::GammaCorrection { gamma: 0.6 })
        .unwrap_err();
    assert_eq!(err, ForgeError::NoSourceLoaded);
    assert!(!err.is_invalid_input());

    session
        .load_source(GrayRaster::filled(3, 3, 100), "tiny")
        .unwrap();
    let err = session
        .apply_and_store(EnhancementMethod::GammaPlusContrast { gamma: f32::INFINITY })
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(
        session.report_pages().err(),
        Some(ForgeError::EmptyResultSet)
    );
}
