use crate::prelude::*;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, camera_control_system);
    }
}

/// Fraction of the remaining scroll applied per frame.
const SMOOTH_ZOOM_FACTOR: f32 = 0.2;
/// Smallest zoom step, so the buffer always drains.
const SMOOTH_ZOOM_MIN: f32 = 0.001;
/// How far the camera sits back relative to its height.
const ANTITILT: f32 = 0.6;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, -8.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraMain::default(),
    ));
}

#[derive(Component, Clone, Debug)]
pub struct CameraMain {
    target_pos: Vec3,
    /// 0 is closest, 1 is furthest.
    zoom: f32,
    smooth_zoom_buffer: f32,
    drag_origin: Option<Vec3>,
}

impl Default for CameraMain {
    fn default() -> Self {
        Self {
            target_pos: Vec3::ZERO,
            zoom: 1.0,
            smooth_zoom_buffer: 0.0,
            drag_origin: None,
        }
    }
}

impl CameraMain {
    fn distance_scale(&self) -> f32 {
        self.zoom * 0.85 + 0.15
    }

    fn translation(&self, galaxy_scale: f32) -> Vec3 {
        let height = galaxy_scale * self.distance_scale();
        self.target_pos + Vec3::new(0., height, -height * ANTITILT)
    }

    /// Moves part of the buffered scroll into the zoom level.
    fn apply_smooth_zoom(&mut self) {
        let buffer = self.smooth_zoom_buffer;
        let step = if buffer < 0.0 {
            f32::min(buffer * SMOOTH_ZOOM_FACTOR, (-SMOOTH_ZOOM_MIN).max(buffer))
        } else {
            f32::max(buffer * SMOOTH_ZOOM_FACTOR, SMOOTH_ZOOM_MIN.min(buffer))
        };
        self.zoom = (self.zoom - step).clamp(0., 1.);
        self.smooth_zoom_buffer -= step;
    }

    /// Keeps the look target over the galaxy disc.
    fn clamp_target(&mut self, radius: f32) {
        let d = self.target_pos.xz().length();
        if d > radius {
            self.target_pos *= radius / d;
        }
    }
}

fn plane_point(camera: &Camera, transform: &Transform, cursor: Option<Vec2>) -> Option<Vec3> {
    let ray = camera
        .viewport_to_world(&GlobalTransform::from(*transform), cursor?)
        .ok()?;
    ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))
        .map(|distance| ray.get_point(distance))
}

pub fn camera_control_system(
    mut query: Query<(&Camera, &mut Transform, &mut CameraMain)>,
    windows: Query<&Window>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    galaxy_config: Res<GalaxyConfig>,
    mut scroll_evr: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
) {
    let Ok((cam, mut transform, mut camera_main)) = query.single_mut() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let (pointer_taken, keyboard_taken) = contexts
        .try_ctx_mut()
        .map(|ctx| {
            (
                ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
                ctx.wants_keyboard_input(),
            )
        })
        .unwrap_or((false, false));

    let radius = galaxy_config.params.radius;
    let galaxy_scale = radius * 2.5;
    let cursor = if pointer_taken {
        None
    } else {
        window.cursor_position()
    };
    let mouse_world_pos = plane_point(cam, &transform, cursor);

    if mouse_buttons.pressed(MouseButton::Middle) || mouse_buttons.pressed(MouseButton::Right) {
        if camera_main.drag_origin.is_none() {
            camera_main.drag_origin = mouse_world_pos;
        }
    } else {
        camera_main.drag_origin = None;
    }

    let mut key_delta = Vec3::ZERO;
    if !keyboard_taken {
        for (key, delta) in [
            (KeyCode::KeyW, Vec3::Z),
            (KeyCode::KeyA, Vec3::X),
            (KeyCode::KeyS, Vec3::NEG_Z),
            (KeyCode::KeyD, Vec3::NEG_X),
        ] {
            if keys.pressed(key) {
                key_delta += delta;
            }
        }
    }

    let old_zoom = camera_main.zoom;
    for ev in scroll_evr.read() {
        if !pointer_taken {
            camera_main.smooth_zoom_buffer += ev.y * 0.05;
        }
    }
    camera_main.apply_smooth_zoom();

    let speed = camera_main.distance_scale() * galaxy_scale * 0.5 * time.delta_secs();
    camera_main.target_pos += key_delta * speed;

    // zoom toward the cursor by dragging while the zoom changes
    if camera_main.zoom != old_zoom && camera_main.drag_origin.is_none() {
        camera_main.drag_origin = mouse_world_pos;
    }
    if let Some(drag) = camera_main.drag_origin {
        camera_main.drag_origin = Some(drag + key_delta * speed);
    }

    camera_main.clamp_target(radius);

    transform.translation = camera_main.translation(galaxy_scale);
    transform.look_at(camera_main.target_pos, Vec3::Y);

    if let (Some(drag_origin), Some(mouse_pos)) = (
        camera_main.drag_origin,
        plane_point(cam, &transform, cursor),
    ) {
        camera_main.target_pos += drag_origin - mouse_pos;
        camera_main.clamp_target(radius);
        transform.translation = camera_main.translation(galaxy_scale);
        transform.look_at(camera_main.target_pos, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_zoom_drains_buffer() {
        let mut camera = CameraMain {
            smooth_zoom_buffer: 0.5,
            ..default()
        };
        for _ in 0..200 {
            camera.apply_smooth_zoom();
        }
        assert!(camera.smooth_zoom_buffer.abs() < 1e-3);
        assert!((camera.zoom - 0.5).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = CameraMain {
            smooth_zoom_buffer: -10.0,
            ..default()
        };
        for _ in 0..100 {
            camera.apply_smooth_zoom();
        }
        assert_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn target_stays_over_disc() {
        let mut camera = CameraMain {
            target_pos: Vec3::new(30.0, 0.0, 40.0),
            ..default()
        };
        camera.clamp_target(5.0);
        assert!((camera.target_pos.xz().length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn camera_height_follows_galaxy_scale() {
        let camera = CameraMain::default();
        let near = camera.translation(5.0);
        let far = camera.translation(50.0);
        assert!(far.y > near.y);
        assert!(near.z < 0.0);
    }
}
