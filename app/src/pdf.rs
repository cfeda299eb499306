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
//! Minimal PDF 1.4 writer: one page per report entry, a bold title, the comparison
//! grid embedded as an uncompressed 8-bit DeviceGray image and its cell captions.
use crate::io::{fit_within, to_gray_image};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use xrayforge::{ForgeError, ReportPage};

/// US Letter, in points
const PAGE_WIDTH: f64 = 612.;
const PAGE_HEIGHT: f64 = 792.;
const PAGE_MARGIN: f64 = 36.;
const TITLE_SIZE: f64 = 14.;
const TITLE_SPACE: f64 = 30.;
const CAPTION_SIZE: f64 = 8.;
/// Longest side of an embedded page image, keeps files reasonably sized
const MAX_IMAGE_SIDE: u32 = 2048;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_ID: usize = 3;
const CAPTION_FONT_ID: usize = 4;
const FIRST_PAGE_ID: usize = 5;
const OBJECTS_PER_PAGE: usize = 3;

struct PdfWriter<W: Write> {
    inner: W,
    offset: usize,
    /// Byte offset of every object, index is object id - 1
    xref: Vec<usize>,
}

impl<W: Write> PdfWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            offset: 0,
            xref: Vec::new(),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.offset += bytes.len();
        Ok(())
    }

    fn begin_object(&mut self, id: usize) -> io::Result<()> {
        if self.xref.len() < id {
            self.xref.resize(id, 0);
        }
        self.xref[id - 1] = self.offset;
        self.write(format!("{} 0 obj\n", id).as_bytes())
    }

    fn object(&mut self, id: usize, body: &str) -> io::Result<()> {
        self.begin_object(id)?;
        self.write(body.as_bytes())?;
        self.write(b"\nendobj\n")
    }

    fn stream_object(&mut self, id: usize, dict: &str, data: &[u8]) -> io::Result<()> {
        self.begin_object(id)?;
        self.write(format!("<< {} /Length {} >>\nstream\n", dict, data.len()).as_bytes())?;
        self.write(data)?;
        self.write(b"\nendstream\nendobj\n")
    }

    fn finish(mut self) -> io::Result<W> {
        let xref_offset = self.offset;
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.xref.len() + 1);
        for offset in &self.xref {
            table.push_str(&format!("{:010} 00000 n \n", offset));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.xref.len() + 1,
            CATALOG_ID,
            xref_offset
        ));
        self.write(table.as_bytes())?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Escapes a PDF literal string, non ASCII characters are replaced
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Writes the whole document into `sink`.
///
/// Pages are consumed one at a time, each is dropped once its objects are written.
pub fn write_pdf<W, I>(sink: W, pages: I) -> anyhow::Result<W>
where
    W: Write,
    I: IntoIterator<Item = Result<ReportPage, ForgeError>>,
    I::IntoIter: ExactSizeIterator,
{
    let pages = pages.into_iter();
    let count = pages.len();
    let mut pdf = PdfWriter::new(sink);
    pdf.write(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;
    pdf.object(CATALOG_ID, &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID))?;

    let kids = (0..count)
        .map(|i| format!("{} 0 R", FIRST_PAGE_ID + i * OBJECTS_PER_PAGE))
        .collect::<Vec<_>>()
        .join(" ");
    pdf.object(
        PAGES_ID,
        &format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, count),
    )?;
    pdf.object(
        FONT_ID,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>",
    )?;
    pdf.object(
        CAPTION_FONT_ID,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>",
    )?;

    for (i, page) in pages.enumerate() {
        let page = page?;
        let page_id = FIRST_PAGE_ID + i * OBJECTS_PER_PAGE;
        let content_id = page_id + 1;
        let image_id = page_id + 2;

        let img = fit_within(to_gray_image(&page.page)?, MAX_IMAGE_SIDE);
        let (img_w, img_h) = img.dimensions();

        let box_w = PAGE_WIDTH - PAGE_MARGIN * 2.;
        let box_h = PAGE_HEIGHT - PAGE_MARGIN * 2. - TITLE_SPACE;
        let scale = (box_w / img_w as f64).min(box_h / img_h as f64);
        let draw_w = img_w as f64 * scale;
        let draw_h = img_h as f64 * scale;
        let x = (PAGE_WIDTH - draw_w) / 2.;
        let y = PAGE_MARGIN + (box_h - draw_h) / 2.;

        pdf.object(
            page_id,
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> /XObject << /Im1 {} 0 R >> >> \
                 /Contents {} 0 R >>",
                PAGES_ID,
                PAGE_WIDTH,
                PAGE_HEIGHT,
                FONT_ID,
                CAPTION_FONT_ID,
                image_id,
                content_id
            ),
        )?;

        let mut content = format!(
            "q {:.2} 0 0 {:.2} {:.2} {:.2} cm /Im1 Do Q\n\
             BT /F1 {} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            draw_w,
            draw_h,
            x,
            y,
            TITLE_SIZE,
            PAGE_MARGIN,
            PAGE_HEIGHT - PAGE_MARGIN - TITLE_SIZE,
            escape_text(&page.title)
        );
        // page pixels to points, pixel rows grow downwards
        let px = draw_w / page.page.width as f64;
        for caption in page.layout.captions() {
            let cx = x + caption.x as f64 * px;
            let cy = y + draw_h - caption.y as f64 * px;
            let matrix = if caption.vertical {
                "0 1 -1 0"
            } else {
                "1 0 0 1"
            };
            content.push_str(&format!(
                "BT /F2 {} Tf {} {:.2} {:.2} Tm ({}) Tj ET\n",
                CAPTION_SIZE,
                matrix,
                cx,
                cy,
                escape_text(caption.text)
            ));
        }
        pdf.stream_object(content_id, "", content.as_bytes())?;
        pdf.stream_object(
            image_id,
            &format!(
                "/Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace /DeviceGray /BitsPerComponent 8",
                img_w, img_h
            ),
            img.as_raw(),
        )?;
    }

    Ok(pdf.finish()?)
}

/// Writes the report, the file is closed before returning on success and failure alike
pub fn write_report<I>(path: &Path, pages: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Result<ReportPage, ForgeError>>,
    I::IntoIter: ExactSizeIterator,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    write_pdf(BufWriter::new(file), pages)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(())
}
