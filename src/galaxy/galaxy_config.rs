use bevy::prelude::*;
use galaxy_generator::{process_rng, ParameterSet};
use rand::Rng;
use std::num::ParseIntError;

/// Environment variable holding a fixed seed for every generation pass.
pub const SEED_VAR: &str = "GALAXY_SEED";

/// Editable galaxy parameters, owned by the UI.
///
/// Generation only ever sees copies of `params`; this resource is the single
/// mutable version.
#[derive(Resource, Clone, PartialEq, Debug, Default)]
pub struct GalaxyConfig {
    pub params: ParameterSet,
    /// When set, every pass uses this seed and identical parameters give
    /// identical clouds.
    pub seed: Option<u64>,
}

impl GalaxyConfig {
    pub fn from_env() -> Self {
        let seed = match parse_seed(std::env::var(SEED_VAR).ok().as_deref()) {
            Ok(seed) => seed,
            Err(err) => {
                warn!("Ignoring {SEED_VAR}: {err}");
                None
            }
        };
        if let Some(seed) = seed {
            info!("Using fixed galaxy seed {seed}");
        }
        Self {
            params: ParameterSet::default(),
            seed,
        }
    }

    /// Seed for the next pass: the fixed one, or a fresh one from the OS.
    pub fn seed_for_pass(&self) -> u64 {
        self.seed.unwrap_or_else(|| process_rng().random())
    }

    /// Stores an edited copy of the parameters, clamped into their documented
    /// ranges. Returns whether anything changed.
    pub fn commit(&mut self, edited: ParameterSet) -> bool {
        let edited = edited.clamped();
        if edited == self.params {
            return false;
        }
        self.params = edited;
        true
    }
}

fn parse_seed(value: Option<&str>) -> Result<Option<u64>, ParseIntError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GalaxyConfig::from_env());
    }
}
