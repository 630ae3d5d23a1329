use crate::model::{FontRole, Style};

/// Metrics for one base-14 face. Widths are per WinAnsi byte 32..=255 at
/// 1000 units/em; layout scales them by the style size.
pub(crate) struct FontEntry {
    pub(crate) base_font: &'static str,
    pub(crate) widths_1000: Vec<f32>,
}

impl FontEntry {
    fn char_width_1000(&self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        if byte >= 32 {
            self.widths_1000[(byte - 32) as usize]
        } else {
            0.0
        }
    }

    pub(crate) fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }
}

/// The embedded style set: Times-Roman for body text, Times-Bold for bold
/// and title roles. All measurement goes through `measure`; nothing else in
/// the crate touches glyph widths.
pub struct FontCatalog {
    body: FontEntry,
    bold: FontEntry,
}

impl FontCatalog {
    pub fn standard() -> Self {
        Self {
            body: FontEntry {
                base_font: "Times-Roman",
                widths_1000: times_roman_widths(),
            },
            bold: FontEntry {
                base_font: "Times-Bold",
                widths_1000: times_bold_widths(),
            },
        }
    }

    pub(crate) fn entry(&self, role: FontRole) -> &FontEntry {
        match role {
            FontRole::Body => &self.body,
            FontRole::Bold | FontRole::Title => &self.bold,
        }
    }

    /// Rendered width of `text` at the style's role and size, in points.
    pub fn measure(&self, text: &str, style: &Style) -> f32 {
        self.entry(style.role).text_width(text, style.size)
    }
}

/// Approximate Times-Roman widths at 1000 units/em for WinAnsi chars 32..=255.
fn times_roman_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 250.0,                    // space
            44 | 46 => 250.0,               // comma, period
            33..=47 => 333.0,               // punctuation
            48..=57 => 500.0,               // digits
            58 | 59 => 278.0,               // colon, semicolon
            60..=64 => 500.0,               // more punctuation
            73 => 333.0,                    // I (narrow uppercase)
            74 => 389.0,                    // J
            77 => 889.0,                    // M (wide)
            87 => 944.0,                    // W (wide)
            65..=90 => 667.0,               // uppercase A-Z (average)
            91..=96 => 333.0,               // brackets etc.
            102 => 333.0,                   // f
            105 | 106 | 108 | 116 => 278.0, // narrow lowercase: i j l t
            109 => 778.0,                   // m (wide)
            114 => 333.0,                   // r
            119 => 722.0,                   // w (wide)
            97..=122 => 472.0,              // lowercase a-z (average)
            0x95 => 350.0,                  // bullet
            _ => 500.0,
        })
        .collect()
}

/// Approximate Times-Bold widths at 1000 units/em for WinAnsi chars 32..=255.
fn times_bold_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 250.0,                    // space
            44 | 46 => 250.0,               // comma, period
            33..=47 => 333.0,               // punctuation
            48..=57 => 500.0,               // digits
            58 | 59 => 333.0,               // colon, semicolon
            60..=64 => 520.0,               // more punctuation
            73 => 389.0,                    // I (narrow uppercase)
            74 => 500.0,                    // J
            77 => 944.0,                    // M (wide)
            87 => 1000.0,                   // W (wide)
            65..=90 => 722.0,               // uppercase A-Z (average)
            91..=96 => 333.0,               // brackets etc.
            102 => 333.0,                   // f
            105 | 106 | 108 => 278.0,       // narrow lowercase: i j l
            116 => 333.0,                   // t
            109 => 833.0,                   // m (wide)
            114 => 444.0,                   // r
            119 => 722.0,                   // w (wide)
            97..=122 => 510.0,              // lowercase a-z (average)
            0x95 => 350.0,                  // bullet
            _ => 520.0,
        })
        .collect()
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95, // bullet
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x2122 => 0x99,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str
/// encoding. Unmappable chars are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b >= 32)
        .collect()
}
