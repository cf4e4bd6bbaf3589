//! Procedural spiral galaxy point clouds.
//!
//! [`generate`] turns a [`ParameterSet`] into a [`PointCloud`] of positions and
//! colors, [`orientation`] gives the rotation angle of the whole cloud for a
//! point in time, and [`Regenerator`] decides when a new cloud has to be built.
mod error;
mod generator;
mod params;
mod point_cloud;
mod random;
mod regenerate;
mod rotation;
pub mod prelude;

pub use error::{GeneratorError, GeneratorResult};
pub use generator::{DRAWS_PER_PARTICLE, generate, generate_seeded};
pub use params::ParameterSet;
pub use point_cloud::PointCloud;
pub use random::{UniformSource, process_rng, seeded_rng};
pub use regenerate::{GenerationTicket, Regenerator};
pub use rotation::{ROTATION_SPEED, orientation};
