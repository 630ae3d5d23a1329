use chrono::NaiveDate;

use crate::fonts::FontCatalog;
use crate::layout::{Paginator, wrap};
use crate::markup::{MarkupLine, classify};
use crate::model::{Analysis, AnalysisSection, Document, FontRole, PageGeometry, Style};

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const MUTED: [f32; 3] = [0.5, 0.5, 0.5];
const WARNING_RED: [f32; 3] = [0.7, 0.1, 0.1];

const LINE_HEIGHT: f32 = 14.0;
const BULLET_OFFSET: f32 = 10.0;

const TITLE: Style = Style {
    role: FontRole::Title,
    size: 18.0,
    line_height: 22.0,
    color: [0.1, 0.2, 0.7],
    indent: 0.0,
};
const DATE_LINE: Style = Style {
    role: FontRole::Body,
    size: 10.0,
    line_height: 12.0,
    color: MUTED,
    indent: 0.0,
};
const PART_HEADER: Style = Style {
    role: FontRole::Bold,
    size: 14.0,
    line_height: 18.0,
    color: BLACK,
    indent: 0.0,
};
const SECTION_HEADER: Style = Style {
    role: FontRole::Bold,
    size: 12.0,
    line_height: 16.0,
    color: BLACK,
    indent: 0.0,
};
const BODY: Style = Style {
    role: FontRole::Body,
    size: 10.0,
    line_height: LINE_HEIGHT,
    color: BLACK,
    indent: 0.0,
};
const FOOTNOTE: Style = Style {
    role: FontRole::Body,
    size: 8.0,
    line_height: 10.0,
    color: MUTED,
    indent: 0.0,
};

const NO_CONTENT_NOTICE: &str = "No analysis available for this document.";
const DISCLAIMER: &str = "This analysis is provided by AI and does not constitute legal advice. \
     Please consult with a qualified attorney for legal matters.";

/// Lay the full report out onto fixed-size pages.
///
/// Pure function of its inputs: no I/O, no clock. The caller supplies the
/// generation date shown under the title.
pub fn layout_report(
    analysis: &Analysis,
    explanation: &str,
    generated: NaiveDate,
    fonts: &FontCatalog,
) -> Document {
    let mut r = ReportRenderer {
        fonts,
        pager: Paginator::new(PageGeometry::default(), fonts),
    };

    r.title_block(generated);

    if analysis.is_empty() && explanation.trim().is_empty() {
        r.flow(NO_CONTENT_NOTICE, &BODY);
        r.footer();
        return r.pager.into_document();
    }

    r.flow("=== LEGAL ANALYSIS ===", &PART_HEADER);
    r.pager.advance(LINE_HEIGHT);
    for section in analysis.sections() {
        if section.items.is_empty() {
            continue;
        }
        r.analysis_section(&section);
    }

    r.pager.ensure_space(3.0 * LINE_HEIGHT);
    r.pager.advance(LINE_HEIGHT);
    r.flow("=== PLAIN ENGLISH EXPLANATION ===", &PART_HEADER);
    r.pager.advance(LINE_HEIGHT);
    r.explanation(explanation);

    r.pager.advance(2.0 * LINE_HEIGHT);
    r.footer();

    let doc = r.pager.into_document();
    log::debug!(
        "layout: {} pages, {} runs",
        doc.pages.len(),
        doc.pages.iter().map(|p| p.runs.len()).sum::<usize>(),
    );
    doc
}

struct ReportRenderer<'a> {
    fonts: &'a FontCatalog,
    pager: Paginator<'a>,
}

impl ReportRenderer<'_> {
    /// Wrap `text` at the content width reduced by the style's indent and
    /// draw every resulting line at margin + indent.
    fn flow(&mut self, text: &str, style: &Style) {
        let geom = self.pager.geometry();
        let max_width = geom.content_width() - style.indent;
        let x = geom.margin + style.indent;
        for line in wrap(text, style, max_width, self.fonts) {
            self.pager.draw_line(&line, style, x);
        }
    }

    fn title_block(&mut self, generated: NaiveDate) {
        self.flow("LEGAL DOCUMENT ANALYSIS REPORT", &TITLE);
        self.flow(
            &format!("Generated on {}", generated.format("%Y-%m-%d")),
            &DATE_LINE,
        );
        self.pager.advance(2.0 * LINE_HEIGHT);
    }

    fn analysis_section(&mut self, section: &AnalysisSection<'_>) {
        // Keep the header together with at least one item line.
        self.pager.ensure_space(3.0 * LINE_HEIGHT);
        self.flow(
            &format!("{}:", section.label),
            &Style {
                indent: section.indent,
                ..SECTION_HEADER
            },
        );
        self.pager.advance(0.5 * LINE_HEIGHT);

        let (prefix, color) = if section.is_warning {
            ("(Warning) ", WARNING_RED)
        } else {
            ("\u{2022} ", BLACK)
        };
        let item_style = Style {
            color,
            indent: section.indent + BULLET_OFFSET,
            ..BODY
        };
        for item in section.items {
            self.flow(&format!("{prefix}{item}"), &item_style);
        }
        self.pager.advance(LINE_HEIGHT);
    }

    fn explanation(&mut self, text: &str) {
        for raw_line in text.lines() {
            match classify(raw_line) {
                MarkupLine::Blank => self.pager.advance(0.5 * LINE_HEIGHT),
                MarkupLine::Text { content, style } => self.flow(&content, &style),
            }
        }
    }

    fn footer(&mut self) {
        self.flow("---", &FOOTNOTE);
        self.flow(DISCLAIMER, &FOOTNOTE);
    }
}
