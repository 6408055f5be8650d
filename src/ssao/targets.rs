//! Off-screen render targets of the deferred passes.

use crate::errors::*;
use crate::math::Vector2;
use crate::video::framebuffer::{Framebuffer, Renderbuffer};
use crate::video::texture::{Texture, TextureFilter, TextureFormat, TextureParams, TextureWrap};

fn target_params(format: TextureFormat, dimensions: Vector2<u32>) -> TextureParams {
    TextureParams {
        format,
        wrap: TextureWrap::Clamp,
        filter: TextureFilter::Nearest,
        mipmap: false,
        dimensions,
    }
}

/// The geometry buffer: view-space positions, normals and albedo of the
/// visible fragments, with a depth buffer for the geometry pass.
pub struct GBuffer {
    pub framebuffer: Framebuffer,
    pub position: Texture,
    pub normal: Texture,
    pub albedo: Texture,
    depth: Renderbuffer,
}

impl GBuffer {
    pub fn new(dimensions: Vector2<u32>) -> Result<Self> {
        let framebuffer = Framebuffer::new()?;
        let position = Texture::empty(target_params(TextureFormat::RGBA16F, dimensions))?;
        let normal = Texture::empty(target_params(TextureFormat::RGBA16F, dimensions))?;
        let albedo = Texture::empty(target_params(TextureFormat::RGBA8, dimensions))?;
        let depth = Renderbuffer::new(dimensions)?;

        framebuffer.attach_color(0, &position)?;
        framebuffer.attach_color(1, &normal)?;
        framebuffer.attach_color(2, &albedo)?;
        framebuffer.set_draw_buffers(3)?;
        framebuffer.attach_depth(&depth)?;
        framebuffer.check_complete()?;
        Framebuffer::bind_default()?;

        Ok(GBuffer {
            framebuffer,
            position,
            normal,
            albedo,
            depth,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.depth.dimensions()
    }
}

/// A single channel float target that holds occlusion factors.
pub struct OcclusionTarget {
    pub framebuffer: Framebuffer,
    pub color: Texture,
}

impl OcclusionTarget {
    pub fn new(dimensions: Vector2<u32>) -> Result<Self> {
        let framebuffer = Framebuffer::new()?;
        let color = Texture::empty(target_params(TextureFormat::R32F, dimensions))?;

        framebuffer.attach_color(0, &color)?;
        framebuffer.check_complete()?;
        Framebuffer::bind_default()?;

        Ok(OcclusionTarget { framebuffer, color })
    }
}
