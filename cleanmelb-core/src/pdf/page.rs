use super::image::Image;
use super::text::ContentStream;
use crate::error::{PosterError, Result};

/// A4 portrait, in points.
pub const A4_WIDTH: f64 = 595.0;
pub const A4_HEIGHT: f64 = 842.0;

/// A single page: its size, content and the images it references.
#[derive(Debug, Clone)]
pub struct Page {
    width: f64,
    height: f64,
    content: ContentStream,
    images: Vec<(String, Image)>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: ContentStream::new(),
            images: Vec::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Content builder for text and colors.
    pub fn text(&mut self) -> &mut ContentStream {
        &mut self.content
    }

    pub fn content(&self) -> &ContentStream {
        &self.content
    }

    /// Registers `image` under `name`, replacing any image with that name.
    pub fn add_image(&mut self, name: impl Into<String>, image: Image) {
        let name = name.into();
        match self.images.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = image,
            None => self.images.push((name, image)),
        }
    }

    /// Paints a registered image into the box with lower-left corner (x, y).
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        if self.images.iter().any(|(n, _)| n == name) {
            self.content.draw_xobject(name, x, y, width, height);
            Ok(())
        } else {
            Err(PosterError::InvalidReference(format!(
                "Image '{name}' not found"
            )))
        }
    }

    pub fn images(&self) -> &[(String, Image)] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::image::tests::sample_jpeg;

    #[test]
    fn test_a4_size() {
        let page = Page::a4();
        assert_eq!(page.width(), 595.0);
        assert_eq!(page.height(), 842.0);
    }

    #[test]
    fn test_draw_unknown_image_fails() {
        let mut page = Page::a4();
        let result = page.draw_image("Logo", 0.0, 0.0, 10.0, 10.0);
        assert!(matches!(result, Err(PosterError::InvalidReference(_))));
        assert!(page.content().operations().is_empty());
    }

    #[test]
    fn test_draw_registered_image() {
        let mut page = Page::a4();
        page.add_image("Logo", Image::from_jpeg_data(sample_jpeg()).unwrap());
        page.draw_image("Logo", 39.69, 728.5, 141.73, 56.69).unwrap();

        let ops = page.content().operations();
        assert!(ops.contains("141.73 0 0 56.69 39.69 728.50 cm"));
        assert!(ops.contains("/Logo Do"));
        assert_eq!(page.images().len(), 1);
    }

    #[test]
    fn test_add_image_replaces_same_name() {
        let mut page = Page::a4();
        let jpeg = Image::from_jpeg_data(sample_jpeg()).unwrap();
        let rgb = Image::from_rgb_data(vec![255; 3], 1, 1).unwrap();
        page.add_image("Logo", jpeg);
        page.add_image("Logo", rgb.clone());
        assert_eq!(page.images(), &[("Logo".to_string(), rgb)]);
    }
}
