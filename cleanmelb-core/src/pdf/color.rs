/// Fill color for text and shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
}

impl Color {
    /// Creates an RGB color from 0-255 components.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// Non-stroking color operator for a content stream.
    pub(crate) fn fill_operator(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} rg"),
            Color::Gray(g) => format!("{g:.3} g"),
        }
    }
}
