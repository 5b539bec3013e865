use anyhow::{Context, Result};
use bevy::log::{info, warn};
use bevy_egui::egui;
use glyphfield_engine::{FrameTicker, RenderParams};
use std::fs;

use crate::ViewerState;

pub fn load_preset(path: &str) -> Result<RenderParams> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let params: RenderParams =
        ron::from_str(&text).with_context(|| format!("parsing {path}"))?;
    params.validate()?;
    Ok(params)
}

pub fn save_preset(path: &str, params: &RenderParams) -> Result<()> {
    let text = ron::ser::to_string_pretty(params, ron::ser::PrettyConfig::default())
        .context("serializing preset")?;
    fs::write(path, text).with_context(|| format!("writing {path}"))?;
    Ok(())
}

pub fn controls_window(ctx: &egui::Context, state: &mut ViewerState) {
    if !state.show_controls {
        return;
    }
    let mut open = true;
    egui::Window::new("Field parameters")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            let fps_before = state.params.fps;
            {
                let p = &mut state.params;
                ui.add(egui::Slider::new(&mut p.threshold, 0.0..=1.0).text("threshold"));
                ui.add(egui::Slider::new(&mut p.exponent, 0.1..=4.0).text("exponent"));
                ui.add(egui::Slider::new(&mut p.frequency, 0.001..=0.2).text("frequency"));
                ui.add(egui::Slider::new(&mut p.speed, 0.0..=1.0).text("speed"));
                ui.add(egui::Slider::new(&mut p.alpha, 0.0..=1.0).text("alpha"));
                ui.add(egui::Slider::new(&mut p.cell_size, 4.0..=48.0).text("cell size"));
                ui.add(egui::Slider::new(&mut p.fps, 1.0..=120.0).text("target fps"));
            }
            if state.params.fps != fps_before {
                state.ticker = FrameTicker::new(state.params.fps);
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    state.apply(RenderParams::default());
                }
                if ui.button("Save preset").clicked() {
                    let path = state
                        .preset_path
                        .clone()
                        .unwrap_or_else(|| "glyphfield.ron".to_string());
                    match save_preset(&path, &state.params) {
                        Ok(()) => info!("Saved preset to {path}"),
                        Err(e) => warn!("Failed to save preset {path}: {e:#}"),
                    }
                }
            });
            ui.label("Press H to hide this panel.");
        });
    if !open {
        state.show_controls = false;
    }
}
