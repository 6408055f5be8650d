//! Decoded images and the textures created from them.

use std::path::Path;

use image::{self, DynamicImage};

use crate::errors::*;
use crate::math::Vector2;
use crate::video::texture::{Texture, TextureFormat, TextureParams};

/// Tightly packed texels of a decoded image, with the first row at the bottom
/// if the image has been flipped.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub format: TextureFormat,
    pub dimensions: Vector2<u32>,
    pub data: Vec<u8>,
}

impl TextureData {
    /// Decodes the image file at `path`. The format is guessed from the
    /// contents, any format the `image` crate supports works.
    pub fn from_path<P: AsRef<Path>>(path: P, flip: bool) -> Result<Self> {
        let path = path.as_ref();
        let dynamic = image::open(path)
            .with_context(|_| format!("Failed to decode image {}", path.display()))?;

        Ok(TextureData::from_dynamic(dynamic, flip))
    }

    /// Decodes an image file that is already in memory.
    pub fn from_memory(bytes: &[u8], flip: bool) -> Result<Self> {
        let dynamic = image::load_from_memory(bytes)?;
        Ok(TextureData::from_dynamic(dynamic, flip))
    }

    /// Converts a image into texels. Single channel images become `R8`, images
    /// with three channels `RGB8` and everything else `RGBA8`.
    pub fn from_dynamic(dynamic: DynamicImage, flip: bool) -> Self {
        let dynamic = if flip { dynamic.flipv() } else { dynamic };
        let dimensions = Vector2::new(dynamic.width(), dynamic.height());

        let (format, data) = match dynamic.color().channel_count() {
            1 => (TextureFormat::R8, dynamic.to_luma8().into_raw()),
            3 => (TextureFormat::RGB8, dynamic.to_rgb8().into_raw()),
            _ => (TextureFormat::RGBA8, dynamic.to_rgba8().into_raw()),
        };

        TextureData {
            format,
            dimensions,
            data,
        }
    }

    /// A opaque white texel.
    pub fn white() -> Self {
        TextureData {
            format: TextureFormat::RGBA8,
            dimensions: Vector2::new(1, 1),
            data: vec![255; 4],
        }
    }

    /// Decodes the image at `path`, or returns `TextureData::white` with a
    /// warning if it can not be decoded.
    pub fn from_path_or_white<P: AsRef<Path>>(path: P, flip: bool) -> Self {
        match TextureData::from_path(path.as_ref(), flip) {
            Ok(data) => data,
            Err(err) => {
                warn!("[Texture] {}, falls back to white.", err);
                TextureData::white()
            }
        }
    }

    /// Creates a texture with the format and dimensions of this image. Only the
    /// sampling fields of `params` are used.
    pub fn upload(&self, params: TextureParams) -> Result<Texture> {
        let params = TextureParams {
            format: self.format,
            dimensions: self.dimensions,
            ..params
        };

        Texture::new(params, Some(&self.data[..]))
    }
}

impl Texture {
    /// Loads a texture from the image file at `path`. A image that can not be
    /// decoded is replaced with a white texel, so the demo keeps running.
    pub fn from_file<P: AsRef<Path>>(path: P, flip: bool, params: TextureParams) -> Result<Self> {
        TextureData::from_path_or_white(path, flip).upload(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    #[test]
    fn flip_rgb() {
        let mut img = ImageBuffer::new(2, 2);
        img.put_pixel(0, 0, Rgb([255u8, 0, 0]));
        img.put_pixel(1, 1, Rgb([0u8, 0, 255]));

        let data = TextureData::from_dynamic(DynamicImage::ImageRgb8(img.clone()), false);
        assert_eq!(data.format, TextureFormat::RGB8);
        assert_eq!(data.dimensions, Vector2::new(2, 2));
        assert_eq!(&data.data[0..3], &[255, 0, 0]);

        let data = TextureData::from_dynamic(DynamicImage::ImageRgb8(img), true);
        assert_eq!(&data.data[0..3], &[0, 0, 0]);
        assert_eq!(&data.data[6..9], &[255, 0, 0]);
        assert_eq!(&data.data[3..6], &[0, 0, 255]);
    }

    #[test]
    fn channels() {
        let img = ImageBuffer::from_pixel(3, 1, Rgba([1u8, 2, 3, 4]));
        let data = TextureData::from_dynamic(DynamicImage::ImageRgba8(img), true);
        assert_eq!(data.format, TextureFormat::RGBA8);
        assert_eq!(data.data.len(), 12);

        let img = DynamicImage::new_luma8(5, 3);
        let data = TextureData::from_dynamic(img, false);
        assert_eq!(data.format, TextureFormat::R8);
        assert_eq!(data.data.len(), 15);
    }

    #[test]
    fn fallback() {
        assert!(TextureData::from_memory(b"definitely not an image", false).is_err());

        let data = TextureData::from_path_or_white("/definitely/not/here.png", true);
        assert_eq!(data, TextureData::white());
    }
}
