//! Images for the poster logo.
//!
//! JPEG data is embedded untouched behind a `DCTDecode` filter. Raw RGB pixels
//! (and, with the `external-images` feature, anything the `image` crate can
//! decode) are embedded as a plain or Flate-compressed sample stream.

use super::objects::{encoded_stream, Dictionary, Object};
use crate::error::{PosterError, Result};

/// An image that can be placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<u8>,
    format: ImageFormat,
    width: u32,
    height: u32,
    color_space: ColorSpace,
    bits_per_component: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Baseline or progressive JPEG, passed through
    Jpeg,
    /// Uncompressed 8-bit samples
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRGB,
    DeviceCMYK,
}

impl ColorSpace {
    fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceCMYK => "DeviceCMYK",
        }
    }
}

impl Image {
    /// Creates an image from JPEG data.
    pub fn from_jpeg_data(data: Vec<u8>) -> Result<Self> {
        let (width, height, color_space, bits_per_component) = parse_jpeg_header(&data)?;

        Ok(Image {
            data,
            format: ImageFormat::Jpeg,
            width,
            height,
            color_space,
            bits_per_component,
        })
    }

    /// Creates an image from packed 8-bit RGB samples.
    pub fn from_rgb_data(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(PosterError::InvalidImage(format!(
                "expected {expected} RGB bytes for {width}x{height}, got {}",
                data.len()
            )));
        }

        Ok(Image {
            data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space: ColorSpace::DeviceRGB,
            bits_per_component: 8,
        })
    }

    /// Creates an image from encoded file contents.
    ///
    /// JPEG is always accepted. Other formats need the `external-images`
    /// feature.
    pub fn from_encoded_data(data: Vec<u8>) -> Result<Self> {
        if data.starts_with(&[0xFF, 0xD8]) {
            return Self::from_jpeg_data(data);
        }
        Self::decode_external(data)
    }

    #[cfg(feature = "external-images")]
    fn decode_external(data: Vec<u8>) -> Result<Self> {
        let decoded = ::image::load_from_memory(&data)
            .map_err(|e| PosterError::InvalidImage(e.to_string()))?
            .to_rgb8();
        let (width, height) = decoded.dimensions();
        Self::from_rgb_data(decoded.into_raw(), width, height)
    }

    #[cfg(not(feature = "external-images"))]
    fn decode_external(_data: Vec<u8>) -> Result<Self> {
        Err(PosterError::InvalidImage(
            "only JPEG logos are supported without the external-images feature".to_string(),
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Image XObject stream for this image.
    pub fn to_pdf_object(&self) -> Result<Object> {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("XObject"));
        dict.set("Subtype", Object::name("Image"));
        dict.set("Width", Object::Integer(i64::from(self.width)));
        dict.set("Height", Object::Integer(i64::from(self.height)));
        dict.set("ColorSpace", Object::name(self.color_space.pdf_name()));
        dict.set(
            "BitsPerComponent",
            Object::Integer(i64::from(self.bits_per_component)),
        );

        match self.format {
            ImageFormat::Jpeg => {
                dict.set("Filter", Object::name("DCTDecode"));
                Ok(Object::stream(dict, self.data.clone()))
            }
            ImageFormat::Raw => encoded_stream(dict, self.data.clone()),
        }
    }
}

/// Reads width, height, color space and bit depth from the first SOF marker.
fn parse_jpeg_header(data: &[u8]) -> Result<(u32, u32, ColorSpace, u8)> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return Err(PosterError::InvalidImage(
            "Not a valid JPEG file".to_string(),
        ));
    }

    let mut pos = 2;
    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return Err(PosterError::InvalidImage("Invalid JPEG marker".to_string()));
        }

        let marker = data[pos + 1];
        pos += 2;

        match marker {
            // Fill bytes
            0xFF => pos -= 1,
            // SOF0..SOF15, minus DHT, JPG and DAC
            0xC0..=0xCF if marker != 0xC4 && marker != 0xC8 && marker != 0xCC => {
                // length(2) precision(1) height(2) width(2) components(1)
                if pos + 7 >= data.len() {
                    return Err(PosterError::InvalidImage("Truncated JPEG file".to_string()));
                }
                let bits = data[pos + 2];
                let height = u32::from(data[pos + 3]) << 8 | u32::from(data[pos + 4]);
                let width = u32::from(data[pos + 5]) << 8 | u32::from(data[pos + 6]);
                let components = data[pos + 7];

                if width == 0 || height == 0 {
                    return Err(PosterError::InvalidImage(
                        "Could not find image dimensions".to_string(),
                    ));
                }

                let color_space = match components {
                    1 => ColorSpace::DeviceGray,
                    3 => ColorSpace::DeviceRGB,
                    4 => ColorSpace::DeviceCMYK,
                    _ => {
                        return Err(PosterError::InvalidImage(format!(
                            "Unsupported number of components: {components}"
                        )))
                    }
                };
                return Ok((width, height, color_space, bits));
            }
            0xD9 => break,
            // Markers without a length field
            0x01 | 0xD0..=0xD8 => {}
            _ => {
                if pos + 1 >= data.len() {
                    return Err(PosterError::InvalidImage("Truncated JPEG file".to_string()));
                }
                let length = usize::from(data[pos]) << 8 | usize::from(data[pos + 1]);
                pos += length;
            }
        }
    }

    Err(PosterError::InvalidImage(
        "Could not find image dimensions".to_string(),
    ))
}
