use serde::Deserialize;

/// Font role within the embedded style set. `Body` maps to Times-Roman,
/// `Bold` and `Title` to Times-Bold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Body,
    Bold,
    Title,
}

/// Immutable per-run style. Colors are unit RGB, sizes and offsets in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub role: FontRole,
    pub size: f32,
    pub line_height: f32,
    pub color: [f32; 3],
    pub indent: f32,
}

/// One positioned, styled piece of text on one page. `y` is the baseline in
/// PDF coordinates (origin bottom-left).
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub style: Style,
    pub x: f32,
    pub y: f32,
}

/// A fixed-size page. Dimensions never change after creation; runs only grow.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            runs: Vec::new(),
        }
    }
}

/// The completed multi-page layout, handed to the PDF encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// Horizontal band available to text: page width minus both margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        // US Letter in points, uniform 50pt margin.
        Self {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
        }
    }
}

/// Structured analysis as produced by the upstream service. Every field is
/// absent-tolerant: a category the analyst found nothing for arrives as an
/// empty or missing array.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Analysis {
    pub key_clauses: Vec<String>,
    pub risks_red_flags: Vec<String>,
    pub missing_terms: Vec<String>,
    pub obligations: Obligations,
    pub termination_conditions: Vec<String>,
    pub liability_damages: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Obligations {
    pub client: Vec<String>,
    pub contractor: Vec<String>,
}

/// Read-only view over one analysis category, in report order.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisSection<'a> {
    pub label: &'static str,
    pub items: &'a [String],
    pub is_warning: bool,
    pub indent: f32,
}

impl Analysis {
    /// Sections in the fixed report order. Empty sections are included here;
    /// the renderer skips them.
    pub fn sections(&self) -> [AnalysisSection<'_>; 7] {
        let section = |label, items, is_warning| AnalysisSection {
            label,
            items,
            is_warning,
            indent: 0.0,
        };
        [
            section("KEY CLAUSES IDENTIFIED", &self.key_clauses[..], false),
            section("RISKS & RED FLAGS", &self.risks_red_flags[..], true),
            section("MISSING STANDARD TERMS", &self.missing_terms[..], false),
            section("CLIENT OBLIGATIONS", &self.obligations.client[..], false),
            section(
                "CONTRACTOR OBLIGATIONS",
                &self.obligations.contractor[..],
                false,
            ),
            section(
                "TERMINATION CONDITIONS",
                &self.termination_conditions[..],
                false,
            ),
            section("LIABILITY & DAMAGES", &self.liability_damages[..], false),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.sections().iter().all(|s| s.items.is_empty())
    }
}
