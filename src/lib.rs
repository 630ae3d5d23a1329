mod error;
mod fonts;
mod layout;
mod markup;
mod model;
mod pdf;
mod report;

pub use error::Error;
pub use fonts::FontCatalog;
pub use layout::{Paginator, wrap};
pub use markup::{MarkupLine, classify};
pub use model::{
    Analysis, AnalysisSection, Document, FontRole, Obligations, Page, PageGeometry, Style, TextRun,
};
pub use pdf::encode;
pub use report::layout_report;

use std::path::Path;
use std::time::Instant;

/// Parse the structured analysis JSON produced by the upstream service.
/// Absent categories deserialize to empty arrays.
pub fn parse_analysis(json: &str) -> Result<Analysis, Error> {
    serde_json::from_str(json).map_err(|e| Error::InvalidAnalysis(e.to_string()))
}

/// Render the report for today's date and return the PDF bytes.
pub fn render_report(analysis: &Analysis, explanation: &str) -> Vec<u8> {
    let t0 = Instant::now();

    let fonts = FontCatalog::standard();
    let generated = chrono::Local::now().date_naive();
    let doc = layout_report(analysis, explanation, generated, &fonts);
    let t_layout = t0.elapsed();

    let bytes = pdf::encode(&doc, &fonts);
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, encode={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.pages.len(),
        bytes.len(),
    );

    bytes
}

/// Parse the analysis JSON, render the report, and write it to `output`.
pub fn write_report(analysis_json: &str, explanation: &str, output: &Path) -> Result<(), Error> {
    let analysis = parse_analysis(analysis_json)?;
    let bytes = render_report(&analysis, explanation);
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    Ok(())
}
