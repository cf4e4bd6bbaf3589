pub use crate::{
    GenerationTicket, GeneratorError, GeneratorResult, ParameterSet, PointCloud, Regenerator,
    UniformSource, generate, generate_seeded, orientation,
};
