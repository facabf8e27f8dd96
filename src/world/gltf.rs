use anyhow::{Context, Result};
use glam::Vec3;
use std::path::Path;

use super::Triangle;

/// Loads a glTF file and flattens its node hierarchy into world-space
/// triangles. Each triangle carries its material's base color; textures
/// are ignored since the walkthrough only needs flat-shaded geometry to
/// stand on.
pub fn load_gltf_triangles(path: impl AsRef<Path>) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    log::info!("Loading glTF scene: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    // Base color per material, defaulting to mid grey
    let mut colors: Vec<[f32; 3]> = gltf
        .materials()
        .map(|m| {
            let c = m.pbr_metallic_roughness().base_color_factor();
            [c[0], c[1], c[2]]
        })
        .collect();
    if colors.is_empty() {
        colors.push([0.7, 0.7, 0.7]);
    }

    let mut triangles = Vec::new();
    for scene in gltf.scenes() {
        log::debug!("Processing scene: {:?}", scene.name());
        for node in scene.nodes() {
            process_node(&node, &buffers, &glam::Mat4::IDENTITY, &colors, &mut triangles)?;
        }
    }

    log::info!("Extracted {} triangles from glTF", triangles.len());
    Ok(triangles)
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &glam::Mat4,
    colors: &[[f32; 3]],
    triangles: &mut Vec<Triangle>,
) -> Result<()> {
    let local_transform = glam::Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, colors, triangles)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, colors, triangles)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &glam::Mat4,
    colors: &[[f32; 3]],
    triangles: &mut Vec<Triangle>,
) -> Result<()> {
    log::debug!("  Processing mesh: {:?}", mesh.name());

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .context("Mesh primitive has no positions")?;

        let vertices: Vec<Vec3> = positions
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        let color = primitive
            .material()
            .index()
            .and_then(|i| colors.get(i))
            .copied()
            .unwrap_or([0.7, 0.7, 0.7]);

        if let Some(indices) = reader.read_indices() {
            let indices: Vec<u32> = indices.into_u32().collect();
            for tri in indices.chunks(3) {
                if tri.len() == 3 {
                    triangles.push(Triangle::new(
                        vertices[tri[0] as usize],
                        vertices[tri[1] as usize],
                        vertices[tri[2] as usize],
                        color,
                    ));
                }
            }
        } else {
            // No indices - treat as triangle list
            for chunk in vertices.chunks(3) {
                if chunk.len() == 3 {
                    triangles.push(Triangle::new(chunk[0], chunk[1], chunk[2], color));
                }
            }
        }
    }

    Ok(())
}
