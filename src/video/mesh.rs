//! Vertex array objects with their vertex and index buffers.

use std::mem;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;
use smallvec::SmallVec;

use crate::errors::*;

use super::check;
use super::errors::Error;

/// The maximum number of attributes in a vertex layout.
pub const MAX_VERTEX_ATTRIBUTES: usize = 8;

/// Hint abouts the intended update strategy of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshHint {
    /// The resource is initialized with data and cannot be changed later, this
    /// is the most common and most efficient usage.
    Immutable,
    /// The resource will be be updated by the CPU in each frame.
    Stream,
    /// The resource will be written by the CPU before use, updates will be infrequent.
    Dynamic,
}

impl From<MeshHint> for GLenum {
    fn from(hint: MeshHint) -> Self {
        match hint {
            MeshHint::Immutable => gl::STATIC_DRAW,
            MeshHint::Stream => gl::STREAM_DRAW,
            MeshHint::Dynamic => gl::DYNAMIC_DRAW,
        }
    }
}

/// Defines how the input vertex data is used to assemble primitives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Primitive {
    /// Separate points.
    Points,
    /// Separate lines.
    Lines,
    /// Line strips.
    LineStrip,
    /// Separate triangles.
    Triangles,
    /// Triangle strips.
    TriangleStrip,
}

impl From<Primitive> for GLenum {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Points => gl::POINTS,
            Primitive::Lines => gl::LINES,
            Primitive::LineStrip => gl::LINE_STRIP,
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

/// The details of a vertex attribute. All the components are 32-bit floats.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexAttribute {
    /// The `layout (location = n)` of the attribute in vertex shader.
    pub location: u32,
    /// The number of components per generic vertex element.
    pub size: u8,
    /// The offset in bytes from the start of vertex.
    pub offset: usize,
}

/// `VertexLayout` defines how a single vertex structure looks like, which is a
/// packed sequence of float attributes.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VertexLayout {
    stride: usize,
    elements: SmallVec<[VertexAttribute; MAX_VERTEX_ATTRIBUTES]>,
}

impl VertexLayout {
    /// Creates a new an empty `VertexLayoutBuilder`.
    #[inline]
    pub fn build() -> VertexLayoutBuilder {
        VertexLayoutBuilder::new()
    }

    /// Stride of single vertex structure in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The number of floats of single vertex structure.
    #[inline]
    pub fn components(&self) -> usize {
        self.stride / mem::size_of::<f32>()
    }

    /// Returns the number of elements in the layout.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Relative element offset from the layout.
    pub fn offset(&self, location: u32) -> Option<usize> {
        self.element(location).map(|v| v.offset)
    }

    /// Returns the attribute bound to `location`.
    pub fn element(&self, location: u32) -> Option<VertexAttribute> {
        self.elements.iter().find(|v| v.location == location).cloned()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &VertexAttribute> {
        self.elements.iter()
    }
}

/// Helper structure to build a vertex layout.
#[derive(Default)]
pub struct VertexLayoutBuilder(SmallVec<[(u32, u8); MAX_VERTEX_ATTRIBUTES]>);

impl VertexLayoutBuilder {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a attribute with `size` float components. Declaring the same
    /// location twice replaces the former declaration in place.
    pub fn with(&mut self, location: u32, size: u8) -> &mut Self {
        assert!(size > 0 && size <= 4);

        if let Some(v) = self.0.iter_mut().find(|v| v.0 == location) {
            v.1 = size;
            return self;
        }

        assert!(self.0.len() < MAX_VERTEX_ATTRIBUTES);
        self.0.push((location, size));
        self
    }

    pub fn finish(&mut self) -> VertexLayout {
        let mut layout = VertexLayout::default();
        for &(location, size) in &self.0 {
            layout.elements.push(VertexAttribute {
                location,
                size,
                offset: layout.stride,
            });

            layout.stride += size as usize * mem::size_of::<f32>();
        }

        layout
    }
}

/// The setup parameters of mesh object.
#[derive(Debug, Clone)]
pub struct MeshParams {
    /// Usage hints.
    pub hint: MeshHint,
    /// How a single vertex structure looks like.
    pub layout: VertexLayout,
    /// How the input vertex data is used to assemble primitives.
    pub primitive: Primitive,
}

impl Default for MeshParams {
    fn default() -> Self {
        MeshParams {
            hint: MeshHint::Immutable,
            layout: VertexLayout::default(),
            primitive: Primitive::Triangles,
        }
    }
}

impl MeshParams {
    /// Checks that `vertices` holds whole vertices and every index points
    /// into them. Returns the number of vertices.
    pub fn validate(&self, vertices: &[f32], indices: Option<&[u32]>) -> Result<usize> {
        if self.layout.is_empty() {
            bail!("[Mesh] Vertex layout is empty.");
        }

        let components = self.layout.components();
        if vertices.is_empty() || vertices.len() % components != 0 {
            bail!(
                "[Mesh] {} floats do not make whole vertices of {} floats.",
                vertices.len(),
                components
            );
        }

        let num = vertices.len() / components;
        if let Some(indices) = indices {
            if indices.iter().any(|&v| v as usize >= num) {
                return Err(Error::OutOfBounds.into());
            }
        }

        Ok(num)
    }
}

/// A vertex array object with its vertex buffer and an optional index buffer.
#[derive(Debug)]
pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: Option<GLuint>,
    primitive: Primitive,
    count: usize,
}

impl Mesh {
    pub fn new(params: MeshParams, vertices: &[f32], indices: Option<&[u32]>) -> Result<Self> {
        let num_vertices = params.validate(vertices, indices)?;
        let stride = params.layout.stride();

        unsafe {
            let mut vao = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            let vbo = create_buffer(gl::ARRAY_BUFFER, params.hint, vertices);
            let ebo = indices.map(|v| create_buffer(gl::ELEMENT_ARRAY_BUFFER, params.hint, v));

            for v in params.layout.iter() {
                gl::EnableVertexAttribArray(v.location);
                gl::VertexAttribPointer(
                    v.location,
                    GLint::from(v.size),
                    gl::FLOAT,
                    gl::FALSE,
                    stride as GLsizei,
                    v.offset as *const c_void,
                );
            }

            gl::BindVertexArray(0);

            let mesh = Mesh {
                vao,
                vbo,
                ebo,
                primitive: params.primitive,
                count: indices.map(|v| v.len()).unwrap_or(num_vertices),
            };

            check()?;
            Ok(mesh)
        }
    }

    /// The number of vertices, or indices if the mesh is indexed, drawn by `draw`.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Draws the whole mesh with the program currently bound.
    pub fn draw(&self) -> Result<()> {
        unsafe {
            gl::BindVertexArray(self.vao);

            if self.ebo.is_some() {
                gl::DrawElements(
                    self.primitive.into(),
                    self.count as GLsizei,
                    gl::UNSIGNED_INT,
                    ptr::null(),
                );
            } else {
                gl::DrawArrays(self.primitive.into(), 0, self.count as GLsizei);
            }

            gl::BindVertexArray(0);
            check()
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            if let Some(ebo) = self.ebo {
                gl::DeleteBuffers(1, &ebo);
            }
        }
    }
}

unsafe fn create_buffer<T: Copy>(tp: GLenum, hint: MeshHint, data: &[T]) -> GLuint {
    let mut id = 0;
    gl::GenBuffers(1, &mut id);
    gl::BindBuffer(tp, id);
    gl::BufferData(
        tp,
        mem::size_of_val(data) as GLsizeiptr,
        data.as_ptr() as *const c_void,
        hint.into(),
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MeshParams {
        MeshParams {
            layout: VertexLayout::build().with(0, 3).with(1, 2).finish(),
            ..Default::default()
        }
    }

    #[test]
    fn layout() {
        let layout = VertexLayout::build().with(0, 3).with(1, 3).with(2, 2).finish();

        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.components(), 8);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.offset(0), Some(0));
        assert_eq!(layout.offset(1), Some(12));
        assert_eq!(layout.offset(2), Some(24));
        assert_eq!(layout.offset(3), None);
    }

    #[test]
    fn rewrite() {
        let layout = VertexLayout::build()
            .with(0, 1)
            .with(1, 2)
            .with(0, 3)
            .finish();

        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.offset(0), Some(0));
        assert_eq!(layout.offset(1), Some(12));
        assert_eq!(layout.element(0).unwrap().size, 3);
    }

    #[test]
    fn validate() {
        let params = params();
        let quad = [0.0; 20];

        assert_eq!(params.validate(&quad, None).unwrap(), 4);
        assert_eq!(params.validate(&quad, Some(&[0, 1, 3, 1, 2, 3])).unwrap(), 4);
        assert!(params.validate(&quad[..19], None).is_err());
        assert!(params.validate(&[], None).is_err());
        assert!(params.validate(&quad, Some(&[0, 1, 4])).is_err());
        assert!(MeshParams::default().validate(&quad, None).is_err());
    }
}
