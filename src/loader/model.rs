use super::{LoadError, PendingAsset};
use glamx::{Quat, Vec3};
use kiss3d::procedural::{IndexBuffer, RenderMesh};
use std::path::{Path, PathBuf};

/// Node transform of a glTF document, applied scale first.
#[derive(Clone, Copy)]
struct NodeTransform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl NodeTransform {
    fn of(node: &gltf::Node) -> Self {
        let (t, r, s) = node.transform().decomposed();
        NodeTransform {
            translation: Vec3::new(t[0], t[1], t[2]),
            rotation: Quat::from_xyzw(r[0], r[1], r[2], r[3]),
            scale: Vec3::new(s[0], s[1], s[2]),
        }
    }

    fn point(&self, p: Vec3) -> Vec3 {
        self.translation + self.rotation * (self.scale * p)
    }

    fn normal(&self, n: Vec3) -> Vec3 {
        self.rotation * n
    }
}

/// Accumulates the triangles of every mesh in the document.
#[derive(Default)]
struct MeshBuilder {
    coords: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
}

impl MeshBuilder {
    fn visit(
        &mut self,
        node: &gltf::Node,
        buffers: &[gltf::buffer::Data],
        chain: &mut Vec<NodeTransform>,
    ) {
        chain.push(NodeTransform::of(node));

        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    log::debug!(
                        "skipping {:?} primitive of mesh {:?}",
                        primitive.mode(),
                        mesh.name()
                    );
                    continue;
                }

                self.push_primitive(&primitive, buffers, chain);
            }
        }

        for child in node.children() {
            self.visit(&child, buffers, chain);
        }

        let _ = chain.pop();
    }

    fn push_primitive(
        &mut self,
        primitive: &gltf::Primitive,
        buffers: &[gltf::buffer::Data],
        chain: &[NodeTransform],
    ) {
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|b| &b.0[..]));

        let Some(positions) = reader.read_positions() else {
            return;
        };

        // Innermost transform first.
        let to_world = |p: Vec3| chain.iter().rev().fold(p, |p, t| t.point(p));
        let base = self.coords.len() as u32;
        self.coords.extend(positions.map(|p| to_world(Vec3::new(p[0], p[1], p[2]))));
        let count = self.coords.len() as u32 - base;

        match reader.read_normals() {
            Some(normals) => self.normals.extend(normals.map(|n| {
                chain
                    .iter()
                    .rev()
                    .fold(Vec3::new(n[0], n[1], n[2]), |n, t| t.normal(n))
                    .normalize_or_zero()
            })),
            // Recomputed from the faces below.
            None => self.normals.extend(std::iter::repeat(Vec3::ZERO).take(count as usize)),
        }

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..count).collect(),
        };

        self.faces.extend(
            indices
                .chunks_exact(3)
                .filter(|tri| tri.iter().all(|&i| i < count))
                .map(|tri| [base + tri[0], base + tri[1], base + tri[2]]),
        );
    }

    fn finish(self, origin: &Path) -> Result<RenderMesh, LoadError> {
        if self.faces.is_empty() {
            return Err(LoadError::EmptyModel(origin.to_path_buf()));
        }

        let needs_normals = self.normals.iter().any(|n| *n == Vec3::ZERO);
        let mut mesh = RenderMesh::new(
            self.coords,
            Some(self.normals),
            None,
            Some(IndexBuffer::Unified(self.faces)),
        );

        if needs_normals {
            mesh.recompute_normals();
        }

        Ok(mesh)
    }
}

fn build(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    origin: &Path,
) -> Result<RenderMesh, LoadError> {
    let mut builder = MeshBuilder::default();
    let mut chain = Vec::new();

    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                builder.visit(&node, buffers, &mut chain);
            }
        }
        // No scene: take the root nodes in document order.
        None => {
            let children: Vec<usize> = document
                .nodes()
                .flat_map(|n| n.children().map(|c| c.index()).collect::<Vec<_>>())
                .collect();
            for node in document.nodes().filter(|n| !children.contains(&n.index())) {
                builder.visit(&node, buffers, &mut chain);
            }
        }
    }

    builder.finish(origin)
}

/// Loads a glTF/GLB file and flattens all of its triangles into one mesh.
///
/// Node transforms are baked into the vertices. Missing normals are
/// recomputed from the faces.
pub fn load_model(path: impl AsRef<Path>) -> Result<RenderMesh, LoadError> {
    let path = path.as_ref();
    let (document, buffers, _images) = gltf::import(path)?;
    let mesh = build(&document, &buffers, path)?;

    log::info!(
        "loaded model {}: {} vertices, {} triangles",
        path.display(),
        mesh.coords.len(),
        mesh.num_triangles()
    );

    Ok(mesh)
}

/// Same as [`load_model`] for an in-memory document.
pub fn load_model_from_slice(data: &[u8]) -> Result<RenderMesh, LoadError> {
    let (document, buffers, _images) = gltf::import_slice(data)?;
    build(&document, &buffers, Path::new("<memory>"))
}

/// Starts loading a model on a background thread.
pub fn spawn_model(path: impl Into<PathBuf>) -> PendingAsset<RenderMesh> {
    let path = path.into();
    PendingAsset::spawn(path.display().to_string(), move || load_model(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One triangle in the XY plane, under a node translated by +2 on Z.
    const TRIANGLE: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0, "translation": [0.0, 0.0, 2.0] }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
        "buffers": [{
            "byteLength": 36,
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
        }],
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        }]
    }"#;

    #[test]
    fn flattens_triangle_with_node_transform() {
        let mesh = load_model_from_slice(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(mesh.coords.len(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert!(mesh.coords.iter().all(|p| p.z == 2.0));
        assert_eq!(mesh.coords[1], Vec3::new(1.0, 0.0, 2.0));
        assert!(mesh.has_normals());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_model("does/not/exist.glb").is_err());
    }

    #[test]
    fn spawned_missing_file_fails() {
        let pending = spawn_model("does/not/exist.glb");
        assert!(pending.wait().is_err());
    }
}
