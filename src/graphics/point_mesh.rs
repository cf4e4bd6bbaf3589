use bevy::prelude::*;
use bevy::render::{
    mesh::{Indices, PrimitiveTopology, VertexAttributeValues},
    render_asset::RenderAssetUsages,
};
use galaxy_generator::PointCloud;
use rayon::prelude::*;

const VERTICES_PER_POINT: usize = 4;
const INDICES_PER_POINT: usize = 6;

/// Builds one flat square of side `size` per particle, lying in the galaxy
/// plane and tinted with the particle color.
pub fn build_point_mesh(cloud: &PointCloud, size: f32) -> Mesh {
    let half = size * 0.5;
    let corners = [
        vec3(-half, 0.0, -half),
        vec3(half, 0.0, -half),
        vec3(half, 0.0, half),
        vec3(-half, 0.0, half),
    ];

    let vertex_count = cloud.len() * VERTICES_PER_POINT;
    let mut positions = vec![[0.0f32; 3]; vertex_count];
    let mut colors = vec![[0.0f32; 4]; vertex_count];

    positions
        .par_chunks_exact_mut(VERTICES_PER_POINT)
        .zip(colors.par_chunks_exact_mut(VERTICES_PER_POINT))
        .zip(cloud.positions().par_iter().zip(cloud.colors().par_iter()))
        .for_each(|((quad, quad_colors), (center, color))| {
            let center = Vec3::from_array(*center);
            for (vertex, corner) in quad.iter_mut().zip(corners) {
                *vertex = (center + corner).to_array();
            }
            quad_colors.fill([color[0], color[1], color[2], 1.0]);
        });

    let mut indices = Vec::with_capacity(cloud.len() * INDICES_PER_POINT);
    for point in 0..cloud.len() as u32 {
        let base = point * VERTICES_PER_POINT as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_POSITION,
        VertexAttributeValues::Float32x3(positions),
    )
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_COLOR,
        VertexAttributeValues::Float32x4(colors),
    )
    .with_inserted_indices(Indices::U32(indices))
}
