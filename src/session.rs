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
use crate::report::{compose_comparison, report_file_name, ComparisonLayout, ReportPage};
use crate::{enhance, EnhancementMethod, ForgeError, GrayRaster};

/// Holds the loaded source image and every result produced from it.
///
/// Results are keyed by method display name and kept in insertion order, applying a method
/// again replaces its earlier result in place. Loading a new source drops all results.
#[derive(Debug, Default)]
pub struct EnhancementSession {
    source: Option<GrayRaster<'static>>,
    source_name: String,
    results: Vec<(String, GrayRaster<'static>)>,
}

impl EnhancementSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the source and clears results.
    ///
    /// Borrowed data is copied, the session always owns its images. On error nothing changes.
    pub fn load_source(
        &mut self,
        image: GrayRaster<'_>,
        name: impl Into<String>,
    ) -> Result<(), ForgeError> {
        image.check_layout()?;
        let name = name.into();
        log::debug!(
            "loaded source '{}' {}x{}, dropping {} results",
            name,
            image.width,
            image.height,
            self.results.len()
        );
        self.source = Some(image.into_owned());
        self.source_name = name;
        self.results.clear();
        Ok(())
    }

    pub fn source(&self) -> Option<&GrayRaster<'static>> {
        self.source.as_ref()
    }

    /// Base name the source was loaded with
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(|_| self.source_name.as_str())
    }

    /// Enhances the source and stores the output under the method display name
    pub fn apply_and_store(
        &mut self,
        method: EnhancementMethod,
    ) -> Result<&GrayRaster<'static>, ForgeError> {
        let source = self.source.as_ref().ok_or(ForgeError::NoSourceLoaded)?;
        let enhanced = enhance(source, method)?;
        let name = method.display_name();
        let index = match self.results.iter().position(|(key, _)| key == name) {
            Some(index) => {
                self.results[index].1 = enhanced;
                index
            }
            None => {
                self.results.push((name.to_string(), enhanced));
                self.results.len() - 1
            }
        };
        log::debug!("applied {}, {} results stored", method, self.results.len());
        Ok(&self.results[index].1)
    }

    /// Stored results in insertion order
    pub fn all_results(&self) -> &[(String, GrayRaster<'static>)] {
        &self.results
    }

    pub fn result(&self, name: &str) -> Option<&GrayRaster<'static>> {
        self.results
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, image)| image)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drops source and results
    pub fn reset(&mut self) {
        self.source = None;
        self.source_name.clear();
        self.results.clear();
    }

    /// Report file name derived from the source name
    pub fn report_file_name(&self) -> Result<String, ForgeError> {
        self.source_name()
            .map(report_file_name)
            .ok_or(ForgeError::NoSourceLoaded)
    }

    /// Comparison pages, one per stored result in insertion order.
    ///
    /// Pages are rendered lazily so a writer holds a single full resolution page at a time.
    pub fn report_pages(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = Result<ReportPage, ForgeError>> + '_, ForgeError>
    {
        if self.results.is_empty() {
            return Err(ForgeError::EmptyResultSet);
        }
        let source = self.source.as_ref().ok_or(ForgeError::NoSourceLoaded)?;
        let layout = ComparisonLayout::for_cell(source.width, source.height);
        Ok(self.results.iter().map(move |(name, enhanced)| {
            Ok(ReportPage {
                title: name.clone(),
                layout,
                page: compose_comparison(source, enhanced)?,
            })
        }))
    }
}
