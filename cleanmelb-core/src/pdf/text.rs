use super::color::Color;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Standard Type1 fonts used on the poster. They never need embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Font {
    /// Courier (monospace)
    #[default]
    Courier,
    /// Courier Bold
    CourierBold,
}

impl Font {
    /// BaseFont name, also used as the resource name.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
        }
    }

    /// Advance of every glyph, in text space units per point of font size.
    pub fn char_width(&self) -> f64 {
        0.6
    }

    /// How many characters of `size` fit on a line `width` points wide.
    pub fn chars_per_line(&self, size: f64, width: f64) -> usize {
        (width / (self.char_width() * size)).floor().max(1.0) as usize
    }
}

/// Page content operators: text runs, fill colors and image placements,
/// kept in drawing order.
#[derive(Debug, Clone)]
pub struct ContentStream {
    operations: String,
    current_font: Font,
    font_size: f64,
    position: (f64, f64),
    fonts: BTreeSet<Font>,
}

impl Default for ContentStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStream {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_font: Font::Courier,
            font_size: 12.0,
            position: (0.0, 0.0),
            fonts: BTreeSet::new(),
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.current_font = font;
        self.font_size = size;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.operations.push_str(&color.fill_operator());
        self.operations.push('\n');
        self
    }

    /// Moves the baseline origin of the next run, in points.
    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = (x, y);
        self
    }

    /// Shows `text` at the current position as one text object.
    pub fn write(&mut self, text: &str) -> &mut Self {
        let (x, y) = self.position;
        self.fonts.insert(self.current_font);

        self.operations.push_str("BT\n");
        let _ = writeln!(
            self.operations,
            "/{} {} Tf",
            self.current_font.pdf_name(),
            self.font_size
        );
        let _ = writeln!(self.operations, "{x:.2} {y:.2} Td");
        self.operations.push_str(&literal_string(text));
        self.operations.push_str(" Tj\nET\n");
        self
    }

    /// Writes each line below the previous one, `leading` points apart.
    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S], leading: f64) -> &mut Self {
        for line in lines {
            self.write(line.as_ref());
            self.position.1 -= leading;
        }
        self
    }

    pub(crate) fn draw_xobject(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) {
        self.operations.push_str("q\n");
        let _ = writeln!(
            self.operations,
            "{width:.2} 0 0 {height:.2} {x:.2} {y:.2} cm"
        );
        let _ = writeln!(self.operations, "/{name} Do");
        self.operations.push_str("Q\n");
    }

    /// Raw operators, before any compression.
    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub fn fonts(&self) -> impl Iterator<Item = Font> + '_ {
        self.fonts.iter().copied()
    }
}

/// Encodes text as WinAnsi bytes. Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x00..=0x7F | 0xA0..=0xFF => ch as u8,
            0x20AC => 0x80, // Euro sign
            0x2026 => 0x85, // Horizontal ellipsis
            0x2018 => 0x91, // Left single quotation mark
            0x2019 => 0x92, // Right single quotation mark
            0x201C => 0x93, // Left double quotation mark
            0x201D => 0x94, // Right double quotation mark
            0x2022 => 0x95, // Bullet
            0x2013 => 0x96, // En dash
            0x2014 => 0x97, // Em dash
            _ => b'?',
        })
        .collect()
}

/// A PDF literal string `( ... )` holding `text`.
pub(crate) fn literal_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for byte in encode_win_ansi(text) {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push(')');
    out
}
