//! Framebuffer objects and their depth renderbuffers.

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::Vector2;

use super::check;
use super::errors::Error;
use super::texture::Texture;

/// The maximum number of color attachments a framebuffer draws into.
pub const MAX_DRAW_BUFFERS: usize = 8;

/// A depth renderbuffer. The renderbuffer is deleted when dropped.
#[derive(Debug)]
pub struct Renderbuffer {
    id: GLuint,
    dimensions: Vector2<u32>,
}

impl Renderbuffer {
    pub fn new(dimensions: Vector2<u32>) -> Result<Self> {
        if dimensions.x == 0 || dimensions.y == 0 {
            bail!("[Renderbuffer] Dimensions {:?} are empty.", dimensions);
        }

        unsafe {
            let mut id = 0;
            gl::GenRenderbuffers(1, &mut id);
            gl::BindRenderbuffer(gl::RENDERBUFFER, id);
            gl::RenderbufferStorage(
                gl::RENDERBUFFER,
                gl::DEPTH_COMPONENT24,
                dimensions.x as GLsizei,
                dimensions.y as GLsizei,
            );
            gl::BindRenderbuffer(gl::RENDERBUFFER, 0);

            let rb = Renderbuffer { id, dimensions };
            check()?;
            Ok(rb)
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }
}

impl Drop for Renderbuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteRenderbuffers(1, &self.id);
        }
    }
}

/// A framebuffer object. Attachments are referenced, not owned, so the
/// textures must outlive the draws into this framebuffer.
#[derive(Debug)]
pub struct Framebuffer {
    id: GLuint,
}

impl Framebuffer {
    pub fn new() -> Result<Self> {
        unsafe {
            let mut id = 0;
            gl::GenFramebuffers(1, &mut id);
            let fb = Framebuffer { id };
            check()?;
            Ok(fb)
        }
    }

    /// Redirects following draws into this framebuffer.
    pub fn bind(&self) -> Result<()> {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.id);
            check()
        }
    }

    /// Redirects following draws into the default framebuffer of window.
    pub fn bind_default() -> Result<()> {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
            check()
        }
    }

    /// Attaches `texture` at `GL_COLOR_ATTACHMENT0 + index`. Leaves this
    /// framebuffer bound.
    pub fn attach_color(&self, index: usize, texture: &Texture) -> Result<()> {
        if index >= MAX_DRAW_BUFFERS {
            return Err(Error::OutOfBounds.into());
        }

        self.bind()?;
        unsafe {
            gl::FramebufferTexture2D(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0 + index as GLenum,
                gl::TEXTURE_2D,
                texture.id(),
                0,
            );
            check()
        }
    }

    /// Attaches `rb` as depth buffer. Leaves this framebuffer bound.
    pub fn attach_depth(&self, rb: &Renderbuffer) -> Result<()> {
        self.bind()?;
        unsafe {
            gl::FramebufferRenderbuffer(
                gl::FRAMEBUFFER,
                gl::DEPTH_ATTACHMENT,
                gl::RENDERBUFFER,
                rb.id,
            );
            check()
        }
    }

    /// Makes fragment outputs `0..n` write into the color attachments `0..n`.
    pub fn set_draw_buffers(&self, n: usize) -> Result<()> {
        if n == 0 || n > MAX_DRAW_BUFFERS {
            return Err(Error::OutOfBounds.into());
        }

        let buffers: Vec<GLenum> = (0..n).map(|i| gl::COLOR_ATTACHMENT0 + i as GLenum).collect();

        self.bind()?;
        unsafe {
            gl::DrawBuffers(n as GLsizei, buffers.as_ptr());
            check()
        }
    }

    /// Checks the completeness of this framebuffer.
    pub fn check_complete(&self) -> Result<()> {
        self.bind()?;

        let status = unsafe { gl::CheckFramebufferStatus(gl::FRAMEBUFFER) };
        if status != gl::FRAMEBUFFER_COMPLETE {
            let err = Error::FramebufferIncomplete(status_name(status).to_owned());
            error!("[Framebuffer] {}", err);
            return Err(err.into());
        }

        Ok(())
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.id);
        }
    }
}

fn status_name(status: GLenum) -> &'static str {
    match status {
        gl::FRAMEBUFFER_COMPLETE => "GL_FRAMEBUFFER_COMPLETE",
        gl::FRAMEBUFFER_UNDEFINED => "GL_FRAMEBUFFER_UNDEFINED",
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT",
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
            "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT"
        }
        gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER",
        gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER",
        gl::FRAMEBUFFER_UNSUPPORTED => "GL_FRAMEBUFFER_UNSUPPORTED",
        gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE",
        gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => "GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS",
        _ => "unknown framebuffer status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names() {
        assert_eq!(
            status_name(gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT),
            "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT"
        );
        assert_eq!(status_name(0), "unknown framebuffer status");
    }
}
