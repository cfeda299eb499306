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
use crate::{ForgeError, GrayRaster};

/// Directory reports are written to unless told otherwise
pub const REPORT_DIR: &str = "results";

/// Smallest space around comparison cells, in pixels
pub const MARGIN: usize = 16;

const PAGE_BACKGROUND: u8 = 255;
const PLOT_BACKGROUND: u8 = 235;
const PLOT_BAR: u8 = 0;

/// `<base>_report.pdf`
pub fn report_file_name(base_name: &str) -> String {
    format!("{}_report.pdf", base_name)
}

/// Text label anchored on a comparison page.
///
/// `(x, y)` is the start of the baseline in page pixels, `y` grows downwards.
/// Vertical captions read bottom to top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Caption {
    pub text: &'static str,
    pub x: usize,
    pub y: usize,
    pub vertical: bool,
}

/// Geometry of the 2x2 comparison grid.
///
/// ```text
/// original | original histogram
/// enhanced | enhanced histogram
/// ```
///
/// Margin grows with the cell so labels keep their room once the page is scaled to paper.
/// Rows are two margins apart to fit the axis caption of the upper plot and the title of
/// the lower cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComparisonLayout {
    pub cell_width: usize,
    pub cell_height: usize,
    pub margin: usize,
}

impl ComparisonLayout {
    pub fn for_cell(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            margin: (cell_width.max(cell_height) / 16).max(MARGIN),
        }
    }

    /// Page width and height
    pub fn page_size(&self) -> (usize, usize) {
        (
            self.cell_width * 2 + self.margin * 3,
            self.cell_height * 2 + self.margin * 5,
        )
    }

    /// Top left corners: original, original histogram, enhanced, enhanced histogram
    pub fn cells(&self) -> [(usize, usize); 4] {
        let left = self.margin;
        let right = self.margin * 2 + self.cell_width;
        let top = self.margin;
        let bottom = self.margin * 3 + self.cell_height;
        [(left, top), (right, top), (left, bottom), (right, bottom)]
    }

    /// Cell titles and histogram axis captions
    pub fn captions(&self) -> Vec<Caption> {
        const TITLES: [&str; 4] = [
            "Original",
            "Original Histogram",
            "Enhanced",
            "Enhanced Histogram",
        ];
        let cells = self.cells();
        let gap = self.margin / 4;
        let mut captions: Vec<Caption> = TITLES
            .iter()
            .zip(cells.iter())
            .map(|(&text, &(x, y))| Caption {
                text,
                x,
                y: y - gap,
                vertical: false,
            })
            .collect();
        for &(x, y) in [cells[1], cells[3]].iter() {
            captions.push(Caption {
                text: "Pixel Intensity",
                x,
                y: y + self.cell_height + self.margin - gap,
                vertical: false,
            });
            captions.push(Caption {
                text: "Frequency",
                x: x - gap,
                y: y + self.cell_height,
                vertical: true,
            });
        }
        captions
    }
}

/// One report page: a titled comparison of the source against one result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub title: String,
    pub layout: ComparisonLayout,
    pub page: GrayRaster<'static>,
}

impl Histogram {
    /// Renders the histogram as a bar plot of the requested size.
    ///
    /// Bars are scaled so the tallest bin spans the whole height, when the plot is narrower
    /// than 256 pixels each column shows the largest of the bins it covers.
    pub fn plot(&self, width: usize, height: usize) -> GrayRaster<'static> {
        let mut plot = GrayRaster::filled(width, height, PLOT_BACKGROUND);
        let peak = self.bins().iter().copied().max().unwrap_or(0);
        if peak == 0 || width == 0 || height == 0 {
            return plot;
        }
        let data = plot.data.to_mut();
        for x in 0..width {
            let start = x * 256 / width;
            let end = ((x + 1) * 256 / width).max(start + 1).min(256);
            let value = self.bins()[start..end].iter().copied().max().unwrap_or(0);
            let bar = ((value * height as u64).div_ceil(peak)) as usize;
            for y in height - bar.min(height)..height {
                data[y * width + x] = PLOT_BAR;
            }
        }
        plot
    }
}

/// Renders the comparison grid described by [ComparisonLayout].
///
/// Cells take the size of `source`, both images must have the same size.
pub fn compose_comparison(
    source: &GrayRaster<'_>,
    enhanced: &GrayRaster<'_>,
) -> Result<GrayRaster<'static>, ForgeError> {
    let source_histogram = Histogram::from_raster(source)?;
    let enhanced_histogram = Histogram::from_raster(enhanced)?;
    source.size_matches(enhanced)?;

    let layout = ComparisonLayout::for_cell(source.width, source.height);
    let (cell_w, cell_h) = (layout.cell_width, layout.cell_height);
    let (page_w, page_h) = layout.page_size();
    let mut page = GrayRaster::filled(page_w, page_h, PAGE_BACKGROUND);
    let [original, original_plot, result, result_plot] = layout.cells();
    page.blit(source, original.0, original.1)?;
    page.blit(
        &source_histogram.plot(cell_w, cell_h),
        original_plot.0,
        original_plot.1,
    )?;
    page.blit(enhanced, result.0, result.1)?;
    page.blit(
        &enhanced_histogram.plot(cell_w, cell_h),
        result_plot.0,
        result_plot.1,
    )?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_convention() {
        assert_eq!(report_file_name("chest_01"), "chest_01_report.pdf");
    }

    #[test]
    fn plot_peak_fills_height() {
        let image = GrayRaster::new(vec![0, 0, 0, 255], 2, 2);
        let histogram = Histogram::from_raster(&image).unwrap();
        let plot = histogram.plot(256, 30);
        // bin 0 is the peak, bin 255 has a third of it
        assert!((0..30).all(|y| plot.get(0, y) == PLOT_BAR));
        assert_eq!(plot.get(255, 29), PLOT_BAR);
        assert_eq!(plot.get(255, 20), PLOT_BAR);
        assert_eq!(plot.get(255, 19), PLOT_BACKGROUND);
        assert_eq!(plot.get(128, 29), PLOT_BACKGROUND);
    }

    #[test]
    fn narrow_plot_keeps_bins() {
        let image = GrayRaster::filled(3, 3, 200);
        let plot = Histogram::from_raster(&image).unwrap().plot(16, 8);
        // 200 falls into column 200 * 16 / 256 = 12
        assert_eq!(plot.get(12, 0), PLOT_BAR);
        assert_eq!(plot.get(11, 7), PLOT_BACKGROUND);
    }

    #[test]
    fn comparison_layout() {
        let source = GrayRaster::filled(10, 6, 40);
        let enhanced = GrayRaster::filled(10, 6, 220);
        let page = compose_comparison(&source, &enhanced).unwrap();
        assert_eq!(page.width, 10 * 2 + MARGIN * 3);
        assert_eq!(page.height, 6 * 2 + MARGIN * 5);
        assert_eq!(page.get(MARGIN, MARGIN), 40);
        assert_eq!(page.get(MARGIN + 9, MARGIN * 3 + 6 + 5), 220);
        assert_eq!(page.get(0, 0), PAGE_BACKGROUND);
    }

    #[test]
    fn margin_follows_cell_size() {
        assert_eq!(ComparisonLayout::for_cell(100, 80).margin, MARGIN);
        let layout = ComparisonLayout::for_cell(4000, 3200);
        assert_eq!(layout.margin, 250);
        assert_eq!(layout.page_size(), (8750, 7650));
        assert_eq!(layout.cells()[3], (4500, 3950));
    }

    #[test]
    fn captions_sit_in_margins() {
        let layout = ComparisonLayout::for_cell(200, 120);
        let (page_w, page_h) = layout.page_size();
        let captions = layout.captions();
        let texts: Vec<&str> = captions.iter().map(|c| c.text).collect();
        assert_eq!(
            texts,
            [
                "Original",
                "Original Histogram",
                "Enhanced",
                "Enhanced Histogram",
                "Pixel Intensity",
                "Frequency",
                "Pixel Intensity",
                "Frequency",
            ]
        );
        let cells = layout.cells();
        let inside_cell = |x: usize, y: usize| {
            cells.iter().any(|&(cx, cy)| {
                (cx..cx + layout.cell_width).contains(&x)
                    && (cy..cy + layout.cell_height).contains(&y)
            })
        };
        for caption in &captions {
            assert!(caption.x < page_w && caption.y < page_h, "{:?}", caption);
            assert!(!inside_cell(caption.x, caption.y), "{:?}", caption);
        }
        // axis caption of the upper plot stays above the lower title
        assert!(captions[4].y < captions[3].y);
        assert!(captions[5].vertical);
    }

    #[test]
    fn comparison_requires_same_size() {
        let source = GrayRaster::filled(10, 6, 40);
        let enhanced = GrayRaster::filled(6, 10, 220);
        assert_eq!(
            compose_comparison(&source, &enhanced),
            Err(ForgeError::ImageSizeMismatch)
        );
    }
}
