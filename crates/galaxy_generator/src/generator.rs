use crate::error::GeneratorResult;
use crate::params::ParameterSet;
use crate::point_cloud::PointCloud;
use crate::random::{UniformSource, seeded_rng};
use bevy::log::debug;
use bevy::math::{Vec3, vec3};
use rayon::prelude::*;
use std::f32::consts::TAU;

/// Uniform samples taken per particle: one for the radius, then a magnitude
/// and a sign for each of the three axes.
pub const DRAWS_PER_PARTICLE: usize = 7;

/// Particles per rayon shard in [`generate_seeded`].
const SHARD_SIZE: usize = 8192;

/// Builds a new point cloud from `params`.
///
/// This is the sequential reference: particle `i` takes draws
/// `[7 * i, 7 * i + 7)` from `rng`. Fails without allocating when `params`
/// breaks an invariant.
pub fn generate<R: UniformSource>(
    params: &ParameterSet,
    rng: &mut R,
) -> GeneratorResult<PointCloud> {
    params.validate()?;

    let mut cloud = PointCloud::with_capacity(params.count);
    for index in 0..params.count {
        let (position, color) = sample_particle(params, index, rng);
        cloud.push(position, color);
    }

    debug!("Generated {} particles", cloud.len());
    Ok(cloud)
}

/// Builds a new point cloud from `params` across the rayon pool.
///
/// Output is bit-identical to `generate(params, &mut seeded_rng(seed))`: each
/// shard seeks its own copy of the seeded stream to the first draw of its
/// first particle.
pub fn generate_seeded(params: &ParameterSet, seed: u64) -> GeneratorResult<PointCloud> {
    params.validate()?;

    let stream = seeded_rng(seed);
    let mut positions = vec![[0.0f32; 3]; params.count];
    let mut colors = vec![[0.0f32; 3]; params.count];

    positions
        .par_chunks_mut(SHARD_SIZE)
        .zip(colors.par_chunks_mut(SHARD_SIZE))
        .enumerate()
        .for_each(|(shard, (positions, colors))| {
            let first = shard * SHARD_SIZE;
            let mut rng = stream.clone();
            rng.set_word_pos((first * DRAWS_PER_PARTICLE) as u128);

            for (offset, (position, color)) in
                positions.iter_mut().zip(colors.iter_mut()).enumerate()
            {
                let (p, c) = sample_particle(params, first + offset, &mut rng);
                *position = p.to_array();
                *color = c.to_array();
            }
        });

    debug!("Generated {} particles with seed {seed}", params.count);
    Ok(PointCloud::from_buffers(positions, colors))
}

/// Position and color of particle `index`.
fn sample_particle<R: UniformSource>(
    params: &ParameterSet,
    index: usize,
    rng: &mut R,
) -> (Vec3, Vec3) {
    let radius = rng.uniform() * params.radius;
    let spin_angle = radius * params.spin;
    let branch_angle = (index % params.branches as usize) as f32 / params.branches as f32 * TAU;

    let offset = vec3(
        jitter(params, radius, rng),
        jitter(params, radius, rng),
        jitter(params, radius, rng),
    );

    let angle = branch_angle + spin_angle;
    let position = vec3(angle.cos() * radius, 0.0, angle.sin() * radius) + offset;

    (position, params.color_at(radius))
}

/// Random offset along one axis, at most `randomness * radius` in magnitude.
fn jitter<R: UniformSource>(params: &ParameterSet, radius: f32, rng: &mut R) -> f32 {
    let magnitude = rng.uniform().powf(params.randomness_power);
    let sign = if rng.uniform() < 0.5 { 1.0 } else { -1.0 };
    sign * magnitude * params.randomness * radius
}
