//! Wavefront OBJ models with their MTL materials.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tobj;

use crate::errors::*;
use crate::video::check;
use crate::video::mesh::{Mesh, MeshParams, Primitive, VertexLayout};
use crate::video::shader::Program;
use crate::video::texture::{Texture, TextureFilter, TextureParams, TextureWrap};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

/// The kinds of texture maps a material could reference. The sampler uniforms
/// of a program are named `texture_diffuse1`, `texture_specular1`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Diffuse,
    Specular,
    Normal,
}

impl TextureKind {
    pub fn prefix(self) -> &'static str {
        match self {
            TextureKind::Diffuse => "texture_diffuse",
            TextureKind::Specular => "texture_specular",
            TextureKind::Normal => "texture_normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialData {
    pub name: String,
    /// The texture maps, with paths resolved against the directory of model.
    pub textures: Vec<(TextureKind, PathBuf)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub material: Option<usize>,
}

impl MeshData {
    /// Flattens the vertices into the `position, normal, texcoord` layout.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut buf = Vec::with_capacity(self.vertices.len() * 8);
        for v in &self.vertices {
            buf.extend_from_slice(&v.position);
            buf.extend_from_slice(&v.normal);
            buf.extend_from_slice(&v.texcoord);
        }

        buf
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelData {
    pub meshes: Vec<MeshData>,
    pub materials: Vec<MaterialData>,
}

impl ModelData {
    /// Loads the OBJ file at `path`. Material libraries are looked up next to
    /// it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|_| format!("Failed to open model {}", path.display()))?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut reader = BufReader::new(file);
        let model = ModelData::parse(&mut reader, dir, |mtl| tobj::load_mtl(dir.join(mtl)))
            .with_context(|_| format!("Failed to load model {}", path.display()))?;

        info!(
            "[Model] Loads {} with {} meshes and {} materials.",
            path.display(),
            model.meshes.len(),
            model.materials.len()
        );

        Ok(model)
    }

    /// Parses a OBJ from `reader`. `mtl_loader` resolves the `mtllib`
    /// statements, and texture paths of materials are resolved against `dir`.
    /// Faces are triangulated and every vertex gets a single index.
    pub fn parse<R, F>(reader: &mut R, dir: &Path, mtl_loader: F) -> Result<Self>
    where
        R: BufRead,
        F: Fn(&Path) -> tobj::MTLLoadResult,
    {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };

        let (models, materials) = tobj::load_obj_buf(reader, &options, |p| mtl_loader(p))?;

        let materials = match materials {
            Ok(materials) => materials,
            Err(err) => {
                warn!("[Model] Failed to load materials, {}.", err);
                Vec::new()
            }
        };

        let materials = materials
            .into_iter()
            .map(|v| {
                let mut textures = Vec::new();
                let maps = [
                    (TextureKind::Diffuse, v.diffuse_texture),
                    (TextureKind::Specular, v.specular_texture),
                    (TextureKind::Normal, v.normal_texture),
                ];

                for (kind, file) in maps.iter().cloned() {
                    if let Some(file) = file {
                        textures.push((kind, dir.join(file.trim())));
                    }
                }

                MaterialData {
                    name: v.name,
                    textures,
                }
            })
            .collect();

        let meshes = models
            .into_iter()
            .map(|v| {
                let mesh = v.mesh;
                let num = mesh.positions.len() / 3;

                let vertices = (0..num)
                    .map(|i| {
                        let mut vertex = Vertex::default();
                        vertex.position.copy_from_slice(&mesh.positions[i * 3..i * 3 + 3]);

                        if mesh.normals.len() >= (i + 1) * 3 {
                            vertex.normal.copy_from_slice(&mesh.normals[i * 3..i * 3 + 3]);
                        }

                        if mesh.texcoords.len() >= (i + 1) * 2 {
                            vertex.texcoord.copy_from_slice(&mesh.texcoords[i * 2..i * 2 + 2]);
                        }

                        vertex
                    })
                    .collect();

                MeshData {
                    name: v.name,
                    vertices,
                    indices: mesh.indices,
                    material: mesh.material_id,
                }
            })
            .collect();

        Ok(ModelData { meshes, materials })
    }
}

/// The textures a model needs and the sampler uniforms each mesh binds them
/// to. Every distinct file is listed once, in the order of first reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TexturePlan<'a> {
    pub files: Vec<&'a Path>,
    /// Per mesh, the sampler names with an index into `files`.
    pub samplers: Vec<Vec<(String, usize)>>,
}

impl<'a> TexturePlan<'a> {
    /// Numbers the maps of a material per kind, starting from 1. Meshes without
    /// a valid material get no samplers.
    pub fn new(data: &'a ModelData) -> Self {
        let mut files = Vec::new();
        let mut loaded: HashMap<&Path, usize> = HashMap::new();
        let mut samplers = Vec::with_capacity(data.meshes.len());

        for v in &data.meshes {
            let mut mesh = Vec::new();

            if let Some(material) = v.material.and_then(|i| data.materials.get(i)) {
                let mut counters: HashMap<TextureKind, usize> = HashMap::new();

                for (kind, path) in &material.textures {
                    let index = *loaded.entry(path.as_path()).or_insert_with(|| {
                        files.push(path.as_path());
                        files.len() - 1
                    });

                    let n = counters.entry(*kind).or_insert(0);
                    *n += 1;
                    mesh.push((format!("{}{}", kind.prefix(), n), index));
                }
            }

            samplers.push(mesh);
        }

        TexturePlan { files, samplers }
    }
}

struct ModelMesh {
    mesh: Mesh,
    samplers: Vec<(String, usize)>,
}

/// A model living on GPU, with one mesh per OBJ object and the textures its
/// materials reference.
pub struct Model {
    meshes: Vec<ModelMesh>,
    textures: Vec<Texture>,
}

impl Model {
    /// Uploads all the meshes of `data`. Every distinct texture file is loaded
    /// only once, even if several materials reference it.
    pub fn upload(data: &ModelData) -> Result<Self> {
        let params = TextureParams {
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            mipmap: true,
            ..Default::default()
        };

        let plan = TexturePlan::new(data);

        let mut textures = Vec::with_capacity(plan.files.len());
        for path in &plan.files {
            textures.push(Texture::from_file(path, true, params)?);
        }

        let mut meshes = Vec::with_capacity(data.meshes.len());
        for (v, samplers) in data.meshes.iter().zip(plan.samplers) {
            let params = MeshParams {
                layout: layout(),
                primitive: Primitive::Triangles,
                ..Default::default()
            };

            let mesh = Mesh::new(params, &v.interleaved(), Some(&v.indices))?;
            meshes.push(ModelMesh { mesh, samplers });
        }

        info!(
            "[Model] Uploads {} meshes with {} textures.",
            meshes.len(),
            textures.len()
        );

        Ok(Model { meshes, textures })
    }

    /// Draws every mesh with `program`, which has to be bound already. The
    /// textures of a mesh are bound to consecutive units starting from 0.
    pub fn draw(&self, program: &Program) -> Result<()> {
        for v in &self.meshes {
            for (unit, (name, index)) in v.samplers.iter().enumerate() {
                self.textures[*index].bind(unit as u32)?;
                program.set_uniform(name, unit as i32)?;
            }

            v.mesh.draw()?;
        }

        unsafe {
            gl::ActiveTexture(gl::TEXTURE0);
            check()
        }
    }
}

/// The vertex layout of model meshes: position at location 0, normal at 1 and
/// texture coordinates at 2.
pub fn layout() -> VertexLayout {
    VertexLayout::build().with(0, 3).with(1, 3).with(2, 2).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const OBJ: &str = "
mtllib quad.mtl
o Quad
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.0
v -1.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn 0.0 0.0 1.0
usemtl Painted
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    const MTL: &str = "
newmtl Painted
Kd 1.0 1.0 1.0
map_Kd diffuse.png
map_Ks specular.png
";

    fn parse(mtl: &'static str) -> ModelData {
        let mut reader = Cursor::new(OBJ);
        ModelData::parse(&mut reader, Path::new("models/quad"), |_| {
            tobj::load_mtl_buf(&mut Cursor::new(mtl))
        })
        .unwrap()
    }

    #[test]
    fn triangulated_quad() {
        let model = parse(MTL);
        assert_eq!(model.meshes.len(), 1);

        let mesh = &model.meshes[0];
        assert_eq!(mesh.name, "Quad");
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        assert_eq!(mesh.material, Some(0));

        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
            assert_eq!(v.texcoord[0], (v.position[0] + 1.0) * 0.5);
            assert_eq!(v.texcoord[1], (v.position[1] + 1.0) * 0.5);
        }

        assert_eq!(mesh.interleaved().len(), 32);
    }

    #[test]
    fn material_paths() {
        let model = parse(MTL);
        assert_eq!(model.materials.len(), 1);
        assert_eq!(model.materials[0].name, "Painted");
        assert_eq!(
            model.materials[0].textures,
            vec![
                (TextureKind::Diffuse, PathBuf::from("models/quad/diffuse.png")),
                (TextureKind::Specular, PathBuf::from("models/quad/specular.png")),
            ]
        );
    }

    #[test]
    fn missing_material_library() {
        let mut reader = Cursor::new(OBJ);
        let model = ModelData::parse(&mut reader, Path::new("."), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })
        .unwrap();

        assert_eq!(model.meshes.len(), 1);
        assert!(model.materials.is_empty());
    }

    fn material(textures: &[(TextureKind, &str)]) -> MaterialData {
        MaterialData {
            name: String::new(),
            textures: textures
                .iter()
                .map(|&(kind, path)| (kind, PathBuf::from(path)))
                .collect(),
        }
    }

    fn mesh(material: Option<usize>) -> MeshData {
        MeshData {
            material,
            ..Default::default()
        }
    }

    #[test]
    fn shared_textures_load_once() {
        let data = ModelData {
            meshes: vec![mesh(Some(0)), mesh(Some(1)), mesh(None), mesh(Some(7))],
            materials: vec![
                material(&[
                    (TextureKind::Diffuse, "a.png"),
                    (TextureKind::Diffuse, "b.png"),
                    (TextureKind::Specular, "s.png"),
                ]),
                material(&[(TextureKind::Specular, "a.png")]),
            ],
        };

        let plan = TexturePlan::new(&data);
        assert_eq!(
            plan.files,
            vec![Path::new("a.png"), Path::new("b.png"), Path::new("s.png")]
        );

        assert_eq!(plan.samplers.len(), 4);
        assert_eq!(
            plan.samplers[0],
            vec![
                ("texture_diffuse1".to_owned(), 0),
                ("texture_diffuse2".to_owned(), 1),
                ("texture_specular1".to_owned(), 2),
            ]
        );
        assert_eq!(plan.samplers[1], vec![("texture_specular1".to_owned(), 0)]);
        assert!(plan.samplers[2].is_empty());
        assert!(plan.samplers[3].is_empty());
    }

    #[test]
    fn parsed_material_samplers() {
        let model = parse(MTL);
        let plan = TexturePlan::new(&model);
        assert_eq!(plan.files.len(), 2);
        assert_eq!(
            plan.samplers,
            vec![vec![
                ("texture_diffuse1".to_owned(), 0),
                ("texture_specular1".to_owned(), 1),
            ]]
        );
    }

    #[test]
    fn missing_model() {
        assert!(ModelData::load("/definitely/not/here.obj").is_err());
    }
}
