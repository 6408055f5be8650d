//! Two dimensional textures.

use std::mem;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::Vector2;

use super::check;
use super::errors::Error;

/// List of all the texture formats the demos upload or render into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    R8,
    RGB8,
    RGBA8,
    R32F,
    RGB32F,
    RGBA16F,
    RGBA32F,
}

impl TextureFormat {
    /// The number of components of a texel.
    pub fn components(self) -> u8 {
        match self {
            TextureFormat::R8 | TextureFormat::R32F => 1,
            TextureFormat::RGB8 | TextureFormat::RGB32F => 3,
            TextureFormat::RGBA8 | TextureFormat::RGBA16F | TextureFormat::RGBA32F => 4,
        }
    }

    /// The size in bytes of a texel of the client side data.
    pub fn size(self) -> usize {
        match self {
            TextureFormat::R8 | TextureFormat::RGB8 | TextureFormat::RGBA8 => {
                self.components() as usize
            }
            _ => self.components() as usize * mem::size_of::<f32>(),
        }
    }

    /// Returns the `(internal format, format, type)` triple of `glTexImage2D`.
    /// Half float textures are filled from 32-bit floats.
    pub fn gl_format(self) -> (GLenum, GLenum, GLenum) {
        match self {
            TextureFormat::R8 => (gl::R8, gl::RED, gl::UNSIGNED_BYTE),
            TextureFormat::RGB8 => (gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE),
            TextureFormat::RGBA8 => (gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE),
            TextureFormat::R32F => (gl::R32F, gl::RED, gl::FLOAT),
            TextureFormat::RGB32F => (gl::RGB32F, gl::RGB, gl::FLOAT),
            TextureFormat::RGBA16F => (gl::RGBA16F, gl::RGBA, gl::FLOAT),
            TextureFormat::RGBA32F => (gl::RGBA32F, gl::RGBA, gl::FLOAT),
        }
    }
}

/// Wrap mode for texture coordinates out of `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    Mirror,
    Clamp,
}

impl From<TextureWrap> for GLenum {
    fn from(wrap: TextureWrap) -> Self {
        match wrap {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::Mirror => gl::MIRRORED_REPEAT,
            TextureWrap::Clamp => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Filter mode for sampling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureParams {
    pub format: TextureFormat,
    pub wrap: TextureWrap,
    pub filter: TextureFilter,
    /// Generates the full mipmap chain after uploading.
    pub mipmap: bool,
    pub dimensions: Vector2<u32>,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            format: TextureFormat::RGBA8,
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            mipmap: false,
            dimensions: Vector2::new(0, 0),
        }
    }
}

impl TextureParams {
    /// The size in bytes of the client side data of the whole texture.
    #[inline]
    pub fn data_size(&self) -> usize {
        self.dimensions.x as usize * self.dimensions.y as usize * self.format.size()
    }

    pub fn validate<T: Copy>(&self, data: Option<&[T]>) -> Result<()> {
        if self.dimensions.x == 0 || self.dimensions.y == 0 {
            bail!("[Texture] Dimensions {:?} are empty.", self.dimensions);
        }

        if let Some(data) = data {
            if mem::size_of_val(data) != self.data_size() {
                return Err(Error::OutOfBounds.into());
            }
        }

        Ok(())
    }
}

/// A `GL_TEXTURE_2D` object. The texture is deleted when dropped.
#[derive(Debug)]
pub struct Texture {
    id: GLuint,
    params: TextureParams,
}

impl Texture {
    /// Creates a texture and fills it with `data`, a tightly packed array of
    /// bytes or floats depending on the format.
    pub fn new<T: Copy>(params: TextureParams, data: Option<&[T]>) -> Result<Self> {
        params.validate(data)?;

        let (internal_format, format, pixel_type) = params.format.gl_format();
        let value = match data {
            Some(v) => v.as_ptr() as *const c_void,
            None => ptr::null(),
        };

        unsafe {
            let mut id = 0;
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            // Rows of RGB8 images are not 4-byte aligned in general.
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                internal_format as GLint,
                params.dimensions.x as GLsizei,
                params.dimensions.y as GLsizei,
                0,
                format,
                pixel_type,
                value,
            );

            let mipmap = params.mipmap && data.is_some();
            if mipmap {
                gl::GenerateMipmap(gl::TEXTURE_2D);
            }

            bind_texture_params(params.wrap, params.filter, mipmap);

            let texture = Texture { id, params };
            check()?;
            Ok(texture)
        }
    }

    /// Creates a texture without initial contents, e.g. a render target.
    #[inline]
    pub fn empty(params: TextureParams) -> Result<Self> {
        Texture::new::<u8>(params, None)
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn params(&self) -> &TextureParams {
        &self.params
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.params.dimensions
    }

    /// Binds the texture to the texture unit `GL_TEXTURE0 + unit`.
    pub fn bind(&self, unit: u32) -> Result<()> {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
            check()
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

unsafe fn bind_texture_params(wrap: TextureWrap, filter: TextureFilter, mipmap: bool) {
    let wrap: GLenum = wrap.into();
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap as GLint);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap as GLint);

    let (min_filter, mag_filter) = match filter {
        TextureFilter::Nearest if mipmap => (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST),
        TextureFilter::Nearest => (gl::NEAREST, gl::NEAREST),
        TextureFilter::Linear if mipmap => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
        TextureFilter::Linear => (gl::LINEAR, gl::LINEAR),
    };

    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min_filter as GLint);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag_filter as GLint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(TextureFormat::RGB8.gl_format(), (gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE));
        assert_eq!(TextureFormat::R32F.gl_format(), (gl::R32F, gl::RED, gl::FLOAT));
        assert_eq!(TextureFormat::RGBA16F.gl_format(), (gl::RGBA16F, gl::RGBA, gl::FLOAT));

        assert_eq!(TextureFormat::R8.size(), 1);
        assert_eq!(TextureFormat::RGB8.size(), 3);
        assert_eq!(TextureFormat::RGB32F.size(), 12);
        assert_eq!(TextureFormat::RGBA16F.size(), 16);
    }

    #[test]
    fn validate() {
        let params = TextureParams {
            format: TextureFormat::RGB32F,
            dimensions: Vector2::new(4, 4),
            ..Default::default()
        };

        assert!(params.validate(Some(&[0.0f32; 48][..])).is_ok());
        assert!(params.validate(Some(&[0.0f32; 47][..])).is_err());
        assert!(params.validate(Some(&[0u8; 48][..])).is_err());
        assert!(params.validate::<u8>(None).is_ok());

        let empty = TextureParams::default();
        assert!(empty.validate::<u8>(None).is_err());
    }
}
