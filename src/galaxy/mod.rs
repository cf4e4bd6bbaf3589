use bevy::prelude::*;

mod galaxy_config;
mod regenerate;
mod rotation;

pub use galaxy_config::{GalaxyConfig, GalaxyConfigPlugin};
pub use regenerate::{CloudReady, GenerationStatus, RegeneratePlugin};
pub use rotation::{GalaxyRoot, RotationPlugin};

pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((GalaxyConfigPlugin, RegeneratePlugin, RotationPlugin));
    }
}
