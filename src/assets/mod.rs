//! Decoding of image files and Wavefront OBJ models.
//!
//! Decoding happens on CPU and produces plain data (`TextureData`,
//! `ModelData`) that could be inspected without a GL context. Uploading turns
//! them into GPU objects.

pub mod model;
pub mod texture;

pub use self::model::{MaterialData, MeshData, Model, ModelData, TextureKind, TexturePlan, Vertex};
pub use self::texture::TextureData;
