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
mod io;
mod pdf;

use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;
use xrayforge::{EnhancementMethod, EnhancementSession, DEFAULT_GAMMA, GAMMA_RANGE, REPORT_DIR};

#[derive(Parser, Debug)]
#[command(name = "xrayforge")]
#[command(about = "Enhance chest X-ray images and export a comparison report")]
#[command(version)]
struct Cli {
    /// Image to enhance (JPEG, PNG or TIFF), color images are converted to gray
    input: PathBuf,

    /// Enhancement method, repeat to apply several in order
    #[arg(
        short,
        long = "method",
        default_value = "Histogram Equalization",
        value_parser = PossibleValuesParser::new(EnhancementMethod::NAMES)
    )]
    methods: Vec<String>,

    /// Gamma for the gamma based methods
    #[arg(short, long, default_value_t = DEFAULT_GAMMA, value_parser = parse_gamma)]
    gamma: f32,

    /// Directory the report is written to, created when missing
    #[arg(long, default_value = REPORT_DIR)]
    out_dir: PathBuf,

    /// Also save every enhanced image as PNG next to the report
    #[arg(long)]
    save_enhanced: bool,
}

fn parse_gamma(value: &str) -> Result<f32, String> {
    let gamma: f32 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if !GAMMA_RANGE.contains(&gamma) {
        return Err(format!(
            "gamma must be within {}..={}",
            GAMMA_RANGE.start(),
            GAMMA_RANGE.end()
        ));
    }
    Ok(gamma)
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let (image, name) = io::load_grayscale(&cli.input)?;
    let mut session = EnhancementSession::new();
    session
        .load_source(image, name.as_str())
        .with_context(|| format!("Rejected image {}", cli.input.display()))?;
    log::info!("Loaded {}", name);

    for method_name in &cli.methods {
        let method = EnhancementMethod::from_name(method_name, Some(cli.gamma))?;
        session.apply_and_store(method)?;
        log::info!("Applied {}", method);
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    if cli.save_enhanced {
        for (method_name, enhanced) in session.all_results() {
            let path = cli
                .out_dir
                .join(format!("{}_{}.png", name, io::method_slug(method_name)));
            io::save_grayscale(enhanced, &path)?;
            log::info!("Saved {}", path.display());
        }
    }

    let path = cli.out_dir.join(session.report_file_name()?);
    pdf::write_report(&path, session.report_pages()?)?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let path = run(&cli)?;
    log::info!("Report saved: {}", path.display());
    Ok(())
}
