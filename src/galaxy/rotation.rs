use bevy::prelude::*;
use galaxy_generator::orientation;

pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, rotate_galaxy);
    }
}

/// Entity carrying the galaxy mesh; the whole cloud turns with its transform.
#[derive(Component, Default)]
pub struct GalaxyRoot;

fn rotate_galaxy(time: Res<Time>, mut query: Query<&mut Transform, With<GalaxyRoot>>) {
    let rotation = Quat::from_rotation_y(orientation(time.elapsed_secs()));
    for mut transform in &mut query {
        transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn root_turns_with_elapsed_time() {
        let mut app = App::new();
        app.init_resource::<Time>().add_plugins(RotationPlugin);
        let root = app.world_mut().spawn((GalaxyRoot, Transform::default())).id();
        let bystander = app.world_mut().spawn(Transform::default()).id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(20));
        app.update();

        let rotation = app.world().get::<Transform>(root).unwrap().rotation;
        let expected = Quat::from_rotation_y(1.0);
        assert!(rotation.angle_between(expected) < 1e-4);
        assert_eq!(
            app.world().get::<Transform>(bystander).unwrap().rotation,
            Quat::IDENTITY
        );
    }
}
