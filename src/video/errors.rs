use std::fmt;

/// The programmable stage a shader object belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderStage::Vertex => write!(f, "VERTEX"),
            ShaderStage::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to compile {} shader, errors: \n{}", stage, log)]
    ShaderCompile { stage: ShaderStage, log: String },
    #[fail(display = "Failed to link program, errors: \n{}", _0)]
    ShaderLink(String),
    #[fail(display = "Framebuffer is not complete: {}.", _0)]
    FramebufferIncomplete(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Uniform `{}` is undefined.", _0)]
    UniformUndefined(String),
    #[fail(display = "Out of bounds.")]
    OutOfBounds,
    #[fail(display = "[GL] {}", _0)]
    Gl(String),
}
