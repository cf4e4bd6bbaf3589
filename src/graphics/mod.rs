use crate::prelude::*;
use bevy::prelude::*;

mod point_mesh;

use point_mesh::build_point_mesh;

pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_galaxy_root)
            .add_systems(Update, upload_cloud);
    }
}

fn spawn_galaxy_root(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    // particles only add light, overlapping ones get brighter
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        GalaxyRoot,
        Transform::default(),
        Visibility::default(),
        MeshMaterial3d(material),
    ));
}

/// Swaps the galaxy mesh for the newest generated cloud.
fn upload_cloud(
    mut commands: Commands,
    mut ready: EventReader<CloudReady>,
    mut meshes: ResMut<Assets<Mesh>>,
    root: Query<Entity, With<GalaxyRoot>>,
) {
    let Some(cloud_ready) = ready.read().last() else {
        return;
    };
    let Ok(entity) = root.single() else {
        return;
    };

    let cloud = &cloud_ready.cloud;
    debug!(
        "Uploading {} particles ({} bytes)",
        cloud.len(),
        std::mem::size_of_val(cloud.positions()) + std::mem::size_of_val(cloud.colors())
    );
    // the previous mesh is freed once its handle is replaced
    let mesh = meshes.add(build_point_mesh(cloud, cloud_ready.params.size));
    commands.entity(entity).insert(Mesh3d(mesh));
}
