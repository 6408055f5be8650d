//! Thin wrappers of OpenGL objects.
//!
//! Each wrapper owns exactly one GL object (or a VAO with its buffers) and
//! deletes it when dropped, so the usual "create, use every frame, delete on
//! exit" pattern of the demos becomes plain ownership. The wrappers issue the
//! same calls a demo would issue by hand; there is no state caching and no
//! command buffer.
//!
//! All the functions here must be called from the thread that owns the
//! current GL context.

pub mod capabilities;
pub mod errors;
pub mod framebuffer;
pub mod mesh;
pub mod primitives;
pub mod shader;
pub mod state;
pub mod texture;

pub mod prelude {
    pub use super::framebuffer::{Framebuffer, Renderbuffer};
    pub use super::mesh::{Mesh, MeshHint, MeshParams, Primitive, VertexLayout};
    pub use super::shader::{Program, UniformVariable};
    pub use super::texture::{Texture, TextureFilter, TextureFormat, TextureParams, TextureWrap};
}

use gl;

use crate::errors::*;

use self::capabilities::Capabilities;
use self::errors::Error;

/// Queries the capabilities of the current context, logs them and checks that
/// they meet the requirements of the demos.
pub fn probe() -> Result<Capabilities> {
    let caps = unsafe { Capabilities::parse()? };
    info!("[Video] {:#?}", caps);
    capabilities::check_capabilities(&caps)?;
    Ok(caps)
}

/// Maps the last error reported by `glGetError` into `Error::Gl`.
pub(crate) unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),
        code => Err(Error::Gl(describe(code).to_owned()).into()),
    }
}

fn describe(code: gl::types::GLenum) -> &'static str {
    match code {
        gl::INVALID_ENUM => "An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "A numeric argument is out of range.",
        gl::INVALID_OPERATION => "The specified operation is not allowed in the current state.",
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "There is not enough memory left to execute the command.",
        _ => "Oops, Unknown OpenGL error.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_descriptions() {
        assert_eq!(describe(gl::INVALID_VALUE), "A numeric argument is out of range.");
        assert_eq!(describe(0xFFFF), "Oops, Unknown OpenGL error.");
    }
}
