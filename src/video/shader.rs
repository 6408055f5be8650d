//! Program objects built from a vertex and a fragment stage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::{Color, Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

use super::check;
use super::errors::{Error, ShaderStage};

/// Uniform variable for video program object. Each matrix based `UniformVariable`
/// is assumed to be supplied in column major order, which is what `cgmath` produces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformVariable {
    I32(i32),
    F32(f32),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Matrix2f([[f32; 2]; 2]),
    Matrix3f([[f32; 3]; 3]),
    Matrix4f([[f32; 4]; 4]),
}

impl From<i32> for UniformVariable {
    fn from(v: i32) -> Self {
        UniformVariable::I32(v)
    }
}

impl From<bool> for UniformVariable {
    fn from(v: bool) -> Self {
        UniformVariable::I32(v as i32)
    }
}

impl From<f32> for UniformVariable {
    fn from(v: f32) -> Self {
        UniformVariable::F32(v)
    }
}

impl From<[f32; 2]> for UniformVariable {
    fn from(v: [f32; 2]) -> Self {
        UniformVariable::Vector2f(v)
    }
}

impl From<Vector2<f32>> for UniformVariable {
    fn from(v: Vector2<f32>) -> Self {
        UniformVariable::Vector2f(v.into())
    }
}

impl From<[f32; 3]> for UniformVariable {
    fn from(v: [f32; 3]) -> Self {
        UniformVariable::Vector3f(v)
    }
}

impl From<Vector3<f32>> for UniformVariable {
    fn from(v: Vector3<f32>) -> Self {
        UniformVariable::Vector3f(v.into())
    }
}

impl From<[f32; 4]> for UniformVariable {
    fn from(v: [f32; 4]) -> Self {
        UniformVariable::Vector4f(v)
    }
}

impl From<Vector4<f32>> for UniformVariable {
    fn from(v: Vector4<f32>) -> Self {
        UniformVariable::Vector4f(v.into())
    }
}

impl From<Color<f32>> for UniformVariable {
    fn from(v: Color<f32>) -> Self {
        UniformVariable::Vector4f([v.r, v.g, v.b, v.a])
    }
}

impl From<Matrix2<f32>> for UniformVariable {
    fn from(v: Matrix2<f32>) -> Self {
        UniformVariable::Matrix2f(v.into())
    }
}

impl From<Matrix3<f32>> for UniformVariable {
    fn from(v: Matrix3<f32>) -> Self {
        UniformVariable::Matrix3f(v.into())
    }
}

impl From<Matrix4<f32>> for UniformVariable {
    fn from(v: Matrix4<f32>) -> Self {
        UniformVariable::Matrix4f(v.into())
    }
}

/// A linked program object. The program is deleted when dropped.
#[derive(Debug)]
pub struct Program {
    id: GLuint,
    uniforms: RefCell<HashMap<String, GLint>>,
}

impl Program {
    /// Compiles both stages and links them. The stage objects are deleted once
    /// the program has been linked, whether the link succeeded or not.
    pub fn new(vs: &str, fs: &str) -> Result<Self> {
        unsafe {
            let vs = compile(ShaderStage::Vertex, vs)?;
            let fs = match compile(ShaderStage::Fragment, fs) {
                Ok(fs) => fs,
                Err(err) => {
                    gl::DeleteShader(vs);
                    return Err(err);
                }
            };

            let program = link(&[vs, fs]);
            gl::DeleteShader(vs);
            gl::DeleteShader(fs);

            let id = program?;
            check()?;

            Ok(Program {
                id,
                uniforms: RefCell::new(HashMap::new()),
            })
        }
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Installs the program as part of current rendering state.
    pub fn bind(&self) -> Result<()> {
        unsafe {
            gl::UseProgram(self.id);
            check()
        }
    }

    /// Gets the location of a active uniform variable. Returns `None` if the
    /// program has no such uniform, which GL reports as location `-1`.
    pub fn uniform_location(&self, name: &str) -> Result<Option<GLint>> {
        if let Some(&location) = self.uniforms.borrow().get(name) {
            return Ok(if location == -1 { None } else { Some(location) });
        }

        let c_name = CString::new(name.as_bytes())
            .map_err(|_| Error::UniformUndefined(name.to_owned()))?;

        let location = unsafe {
            let location = gl::GetUniformLocation(self.id, c_name.as_ptr());
            check()?;
            location
        };

        if location == -1 {
            debug!("[Program] Uniform `{}` is not active, ignored.", name);
        }

        self.uniforms.borrow_mut().insert(name.to_owned(), location);
        Ok(if location == -1 { None } else { Some(location) })
    }

    /// Sets a uniform variable of this program. The program has to be bound.
    /// Uniforms that the program does not use are silently ignored.
    pub fn set_uniform<T: Into<UniformVariable>>(&self, name: &str, v: T) -> Result<()> {
        match self.uniform_location(name)? {
            Some(location) => unsafe { bind_uniform_variable(location, &v.into()) },
            None => Ok(()),
        }
    }

    /// Sets every element of a `vec3` array uniform, e.g. `samples[0]..samples[n]`.
    pub fn set_uniform_vec3_array(&self, name: &str, values: &[Vector3<f32>]) -> Result<()> {
        if let Some(location) = self.uniform_location(&format!("{}[0]", name))? {
            let values: Vec<[f32; 3]> = values.iter().map(|&v| v.into()).collect();
            unsafe {
                gl::Uniform3fv(location, values.len() as GLsizei, values.as_ptr() as *const f32);
                check()?;
            }
        }

        Ok(())
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

unsafe fn bind_uniform_variable(location: GLint, variable: &UniformVariable) -> Result<()> {
    match *variable {
        UniformVariable::I32(v) => gl::Uniform1i(location, v),
        UniformVariable::F32(v) => gl::Uniform1f(location, v),
        UniformVariable::Vector2f(v) => gl::Uniform2f(location, v[0], v[1]),
        UniformVariable::Vector3f(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
        UniformVariable::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
        UniformVariable::Matrix2f(v) => gl::UniformMatrix2fv(location, 1, gl::FALSE, v[0].as_ptr()),
        UniformVariable::Matrix3f(v) => gl::UniformMatrix3fv(location, 1, gl::FALSE, v[0].as_ptr()),
        UniformVariable::Matrix4f(v) => gl::UniformMatrix4fv(location, 1, gl::FALSE, v[0].as_ptr()),
    }

    check()
}

unsafe fn compile(stage: ShaderStage, src: &str) -> Result<GLuint> {
    let tp = match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    };

    let c_str = CString::new(src.as_bytes()).map_err(|_| Error::ShaderCompile {
        stage,
        log: "source contains a nul byte.".to_owned(),
    })?;

    let shader = gl::CreateShader(tp);
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    // Get the compile status
    let mut status = GLint::from(gl::FALSE);
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

    // Fail on error
    if status != GLint::from(gl::TRUE) {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(1) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        gl::DeleteShader(shader);

        let log = info_log(buf);
        error!("[Program] Failed to compile {} shader:\n{}", stage, log);
        Err(Error::ShaderCompile { stage, log }.into())
    } else {
        Ok(shader)
    }
}

unsafe fn link(shaders: &[GLuint]) -> Result<GLuint> {
    let program = gl::CreateProgram();
    for &shader in shaders {
        gl::AttachShader(program, shader);
    }

    gl::LinkProgram(program);

    // Get the link status
    let mut status = GLint::from(gl::FALSE);
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

    for &shader in shaders {
        gl::DetachShader(program, shader);
    }

    // Fail on error
    if status != GLint::from(gl::TRUE) {
        let mut len: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(1) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        gl::DeleteProgram(program);

        let log = info_log(buf);
        error!("[Program] Failed to link program:\n{}", log);
        Err(Error::ShaderLink(log).into())
    } else {
        Ok(program)
    }
}

/// Converts a info log buffer into string, dropping the trailing null character.
fn info_log(mut buf: Vec<u8>) -> String {
    if let Some(n) = buf.iter().position(|&v| v == 0) {
        buf.truncate(n);
    }

    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::SquareMatrix;

    #[test]
    fn info_log_strips_null() {
        let log = b"0:1(1): error: syntax error\n\0".to_vec();
        assert_eq!(info_log(log), "0:1(1): error: syntax error");
        assert_eq!(info_log(vec![0]), "");
    }

    #[test]
    fn conversions() {
        assert_eq!(UniformVariable::from(true), UniformVariable::I32(1));
        assert_eq!(UniformVariable::from(false), UniformVariable::I32(0));
        assert_eq!(UniformVariable::from(0.5f32), UniformVariable::F32(0.5));
        assert_eq!(
            UniformVariable::from(Vector3::new(1.0f32, 2.0, 3.0)),
            UniformVariable::Vector3f([1.0, 2.0, 3.0])
        );

        let m = Matrix4::from_translation(Vector3::new(1.0f32, 2.0, 3.0));
        match UniformVariable::from(m) {
            UniformVariable::Matrix4f(v) => assert_eq!(v[3], [1.0, 2.0, 3.0, 1.0]),
            _ => unreachable!(),
        }

        match UniformVariable::from(Matrix3::<f32>::identity()) {
            UniformVariable::Matrix3f(v) => assert_eq!(v[1], [0.0, 1.0, 0.0]),
            _ => unreachable!(),
        }
    }
}
