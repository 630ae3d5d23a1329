use crate::model::{FontRole, Style};

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const LIST_INDENT: f32 = 10.0;

const BODY: Style = Style {
    role: FontRole::Body,
    size: 10.0,
    line_height: 14.0,
    color: BLACK,
    indent: 0.0,
};

/// Classification of one raw explanation line.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkupLine {
    /// Empty after trimming; the renderer turns this into half a line-height
    /// of vertical space instead of a drawn run.
    Blank,
    Text { content: String, style: Style },
}

fn heading(text: &str, bump: f32) -> MarkupLine {
    text_line(
        text.trim(),
        Style {
            role: FontRole::Bold,
            size: BODY.size + bump,
            line_height: BODY.line_height + bump,
            ..BODY
        },
    )
}

fn text_line(content: &str, style: Style) -> MarkupLine {
    if content.is_empty() {
        // Markers around nothing ("****", "### ") collapse to a blank line.
        MarkupLine::Blank
    } else {
        MarkupLine::Text {
            content: content.to_string(),
            style,
        }
    }
}

/// Interpret one line of lightweight markup. Rules are checked in order and
/// the first match wins; this is deliberately a rule list, not a parser.
pub fn classify(raw_line: &str) -> MarkupLine {
    let line = raw_line.trim();
    if line.is_empty() {
        return MarkupLine::Blank;
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return heading(rest, 2.0);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return heading(rest, 4.0);
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return heading(rest, 6.0);
    }
    if let Some(rest) = line
        .strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
    {
        return text_line(
            &format!("\u{2022} {}", rest.trim()),
            Style {
                indent: LIST_INDENT,
                ..BODY
            },
        );
    }
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return text_line(
            line[2..line.len() - 2].trim(),
            Style {
                role: FontRole::Bold,
                ..BODY
            },
        );
    }
    if line.len() >= 2 && line.starts_with('_') && line.ends_with('_') {
        // No italic face in the embedded style set; rendered as plain body.
        return text_line(line[1..line.len() - 1].trim(), BODY);
    }
    text_line(line, BODY)
}
