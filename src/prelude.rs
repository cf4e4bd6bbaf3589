pub use crate::galaxy::{CloudReady, GalaxyConfig, GalaxyRoot, GenerationStatus};
pub use galaxy_generator::prelude::*;
