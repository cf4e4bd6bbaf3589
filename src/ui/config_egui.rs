use crate::prelude::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ui_system);
    }
}

fn color_ui(label: &str, color: &mut Vec3, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let mut rgb = color.to_array();
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Vec3::from_array(rgb);
        }
        ui.label(label);
    });
}

fn shape_ui(params: &mut ParameterSet, ui: &mut egui::Ui) {
    let (minval, maxval) = (ParameterSet::MIN, ParameterSet::MAX);

    egui::CollapsingHeader::new("Shape")
        .default_open(true)
        .show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut params.count, minval.count..=maxval.count)
                    .logarithmic(true)
                    .text("Count"),
            );
            ui.add(
                egui::Slider::new(&mut params.size, minval.size..=maxval.size)
                    .logarithmic(true)
                    .text("Size"),
            );
            ui.add(egui::Slider::new(&mut params.radius, minval.radius..=maxval.radius).text("Radius"));
            ui.add(
                egui::Slider::new(&mut params.branches, minval.branches..=maxval.branches)
                    .text("Branches"),
            );
            ui.add(egui::Slider::new(&mut params.spin, minval.spin..=maxval.spin).text("Spin"));
        });

    egui::CollapsingHeader::new("Randomness")
        .default_open(true)
        .show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut params.randomness, minval.randomness..=maxval.randomness)
                    .text("Randomness"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.randomness_power,
                    minval.randomness_power..=maxval.randomness_power,
                )
                .text("Randomness Power"),
            );
        });

    egui::CollapsingHeader::new("Colors")
        .default_open(true)
        .show(ui, |ui| {
            color_ui("Inside", &mut params.color_inside, ui);
            color_ui("Outside", &mut params.color_outside, ui);
        });
}

fn status_ui(status: &GenerationStatus, seed: Option<u64>, ui: &mut egui::Ui) {
    ui.label(format!(
        "Generation {}: {} particles",
        status.generation, status.particles
    ));
    match seed {
        Some(seed) => ui.label(format!("Seed: {seed}")),
        None => ui.label("Seed: random"),
    };
    if status.in_flight {
        ui.label("Generating…");
    }
    if let Some(err) = &status.last_error {
        ui.colored_label(egui::Color32::LIGHT_RED, err);
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    mut galaxy_config: ResMut<GalaxyConfig>,
    status: Res<GenerationStatus>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    // edit a copy so the resource only changes when a widget did
    let mut params = galaxy_config.params;
    let seed = galaxy_config.seed;

    egui::SidePanel::left("side_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Galaxy");
            shape_ui(&mut params, ui);
            if ui.button("Reset").clicked() {
                params = ParameterSet::default();
            }
            ui.separator();
            status_ui(&status, seed, ui);
        });

    if params != galaxy_config.params {
        galaxy_config.commit(params);
    }
}
