use crate::fonts::FontCatalog;
use crate::model::{Document, Page, PageGeometry, Style, TextRun};

/// Greedily pack words into lines no wider than `max_width`.
///
/// Words are never split: a single word wider than `max_width` is emitted on
/// a line of its own. Word order is preserved. Whitespace-only input yields
/// no lines.
pub fn wrap(text: &str, style: &Style, max_width: f32, fonts: &FontCatalog) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fonts.measure(&candidate, style) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Owns the growing page list and the vertical cursor of a render pass.
///
/// `draw_line` checks remaining space itself before appending, so a run can
/// never land below the bottom margin regardless of what the caller forgot.
/// `ensure_space` stays public for look-ahead policies such as keeping a
/// section header together with its first item.
pub struct Paginator<'a> {
    fonts: &'a FontCatalog,
    geom: PageGeometry,
    pages: Vec<Page>,
    cursor_y: f32,
}

impl<'a> Paginator<'a> {
    pub fn new(geom: PageGeometry, fonts: &'a FontCatalog) -> Self {
        Self {
            fonts,
            geom,
            pages: vec![Page::new(geom.width, geom.height)],
            cursor_y: geom.height - geom.margin,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geom
    }

    /// Current vertical drawing position on the current page.
    pub fn current_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Start a fresh page unless `required` points still fit above the
    /// bottom margin. Does nothing when space is already sufficient.
    pub fn ensure_space(&mut self, required: f32) {
        if self.cursor_y - required < self.geom.margin {
            self.pages.push(Page::new(self.geom.width, self.geom.height));
            self.cursor_y = self.geom.height - self.geom.margin;
        }
    }

    /// Move the cursor down without drawing (blank lines, section gaps).
    /// The next `draw_line` starts a new page if this pushed past the margin.
    pub fn advance(&mut self, amount: f32) {
        self.cursor_y -= amount;
    }

    /// Append a run at `(x, cursor)` on the current page, then advance the
    /// cursor by the style's line height.
    pub fn draw_line(&mut self, text: &str, style: &Style, x: f32) {
        self.ensure_space(style.line_height);
        // Wrapped lines must fit the content band; a lone word wider than
        // the band is allowed (words are never split).
        debug_assert!(
            !text.contains(' ')
                || x + self.fonts.measure(text, style)
                    <= self.geom.width - self.geom.margin + 0.5,
            "wrapped line exceeds the content band",
        );
        let run = TextRun {
            content: text.to_string(),
            style: *style,
            x,
            y: self.cursor_y,
        };
        self.pages
            .last_mut()
            .expect("paginator always holds a page")
            .runs
            .push(run);
        self.cursor_y -= style.line_height;
    }

    /// Finish the render pass and hand over the completed document.
    pub fn into_document(self) -> Document {
        Document { pages: self.pages }
    }
}
