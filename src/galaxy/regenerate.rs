use super::GalaxyConfig;
use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, AsyncComputeTaskPool, Task};
use galaxy_generator::{
    generate_seeded, GenerationTicket, GeneratorResult, ParameterSet, PointCloud, Regenerator,
};

pub struct RegeneratePlugin;

impl Plugin for RegeneratePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalaxyRegenerator>()
            .init_resource::<GenerationStatus>()
            .add_event::<CloudReady>()
            .add_systems(Update, (start_generation, finish_generation).chain());
    }
}

/// A freshly generated cloud together with the parameters that produced it.
#[derive(Event)]
pub struct CloudReady {
    pub cloud: PointCloud,
    pub params: ParameterSet,
}

/// What the UI shows about generation.
#[derive(Resource, Default, Debug)]
pub struct GenerationStatus {
    pub generation: u64,
    pub particles: usize,
    pub in_flight: bool,
    pub last_error: Option<String>,
}

#[derive(Resource, Default)]
struct GalaxyRegenerator {
    policy: Regenerator,
    pending: Option<PendingPass>,
}

struct PendingPass {
    ticket: GenerationTicket,
    task: Task<GeneratorResult<PointCloud>>,
}

/// Starts a pass whenever the parameters change.
///
/// A pass that is still running is dropped, which cancels its task; only the
/// newest request is ever worked on.
fn start_generation(
    config: Res<GalaxyConfig>,
    mut regenerator: ResMut<GalaxyRegenerator>,
    mut status: ResMut<GenerationStatus>,
) {
    let Some(ticket) = regenerator.policy.propose(&config.params) else {
        return;
    };
    if let Some(abandoned) = regenerator.pending.take() {
        debug!("Abandoning generation {}", abandoned.ticket.id);
    }

    let seed = config.seed_for_pass();
    info!(
        "Galaxy parameters updated, regenerating {} particles",
        ticket.params.count
    );
    let params = ticket.params;
    let task = AsyncComputeTaskPool::get().spawn(async move { generate_seeded(&params, seed) });

    regenerator.pending = Some(PendingPass { ticket, task });
    status.generation = ticket.id;
    status.in_flight = true;
}

/// Hands the finished cloud to the renderer, or records why it failed.
fn finish_generation(
    mut regenerator: ResMut<GalaxyRegenerator>,
    mut status: ResMut<GenerationStatus>,
    mut ready: EventWriter<CloudReady>,
) {
    let regenerator = &mut *regenerator;
    let Some(pass) = regenerator.pending.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut pass.task)) else {
        return;
    };
    let ticket = pass.ticket;
    regenerator.pending = None;
    status.in_flight = false;

    match regenerator.policy.complete(&ticket, result) {
        Ok(Some(cloud)) => {
            status.particles = cloud.len();
            status.last_error = None;
            ready.write(CloudReady {
                cloud,
                params: ticket.params,
            });
        }
        Ok(None) => {}
        Err(err) => {
            warn!("Galaxy generation {} failed: {err}", ticket.id);
            status.last_error = Some(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::TaskPoolPlugin;
    use bevy::ecs::event::Events;
    use std::time::Duration;

    fn app_with(params: ParameterSet) -> App {
        let mut app = App::new();
        app.add_plugins(TaskPoolPlugin::default())
            .insert_resource(GalaxyConfig {
                params,
                seed: Some(1),
            })
            .add_plugins(RegeneratePlugin);
        app
    }

    fn run_until_idle(app: &mut App) {
        for _ in 0..500 {
            app.update();
            if !app.world().resource::<GenerationStatus>().in_flight {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("generation did not finish");
    }

    #[test]
    fn first_frame_generates_cloud() {
        let params = ParameterSet {
            count: 1_000,
            ..default()
        };
        let mut app = app_with(params);
        run_until_idle(&mut app);

        let status = app.world().resource::<GenerationStatus>();
        assert_eq!(status.particles, 1_000);
        assert_eq!(status.generation, 1);
        assert!(status.last_error.is_none());

        let events = app.world().resource::<Events<CloudReady>>();
        let ready = events.iter_current_update_events().last().unwrap();
        assert_eq!(ready.cloud, generate_seeded(&params, 1).unwrap());
    }

    #[test]
    fn invalid_params_are_reported() {
        let mut app = app_with(ParameterSet {
            count: 0,
            ..default()
        });
        run_until_idle(&mut app);

        let status = app.world().resource::<GenerationStatus>();
        assert_eq!(status.particles, 0);
        assert!(status.last_error.as_deref().unwrap().contains("count"));
    }

    #[test]
    fn newer_change_supersedes_pending_pass() {
        let mut app = app_with(ParameterSet {
            count: 500,
            ..default()
        });
        app.update();
        app.world_mut().resource_mut::<GalaxyConfig>().params.count = 700;
        run_until_idle(&mut app);

        let status = app.world().resource::<GenerationStatus>();
        assert_eq!(status.generation, 2);
        assert_eq!(status.particles, 700);
    }
}
