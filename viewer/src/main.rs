use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use glyphfield_engine::{FrameTicker, RenderParams, Viewport};

mod controls;
mod surface;

use surface::PainterSurface;

#[derive(Resource)]
pub struct ViewerState {
    pub params: RenderParams,
    pub ticker: FrameTicker,
    /// Host time of the last accepted frame; the field animates only when
    /// the ticker lets a frame through.
    pub field_time: f64,
    pub show_controls: bool,
    pub preset_path: Option<String>,
}

impl ViewerState {
    fn new(params: RenderParams) -> Self {
        Self {
            ticker: FrameTicker::new(params.fps),
            params,
            field_time: 0.0,
            show_controls: true,
            preset_path: None,
        }
    }

    /// Swaps in a new parameter bundle, restarting the cadence.
    pub fn apply(&mut self, params: RenderParams) {
        self.params = params;
        self.ticker = FrameTicker::new(params.fps);
    }
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn load_preset_args(mut state: ResMut<ViewerState>) {
    let Some(path) = std::env::args().nth(1) else {
        return;
    };
    match controls::load_preset(&path) {
        Ok(params) => {
            info!("Loaded preset from {path}");
            state.apply(params);
            state.preset_path = Some(path);
        }
        Err(e) => {
            warn!("Failed to load preset {path}: {e:#}");
        }
    }
}

fn ui_system(mut contexts: EguiContexts, time: Res<Time>, mut state: ResMut<ViewerState>) {
    let ctx = contexts.ctx_mut();

    let now = time.elapsed_seconds_f64();
    if state.ticker.tick(now) {
        state.field_time = now;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::H)) {
        state.show_controls = !state.show_controls;
    }

    let params = state.params;
    let field_time = state.field_time;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let viewport = Viewport {
                width: rect.width() as f64,
                height: rect.height() as f64,
            };
            let mut surface = PainterSurface::new(ui.painter(), rect, params.cell_size);
            glyphfield_engine::render_frame(&params, viewport, field_time, &mut surface);
        });

    controls::controls_window(ctx, &mut state);
}

fn main() {
    App::new()
        .insert_resource(ViewerState::new(RenderParams::default()))
        .add_plugins((DefaultPlugins, EguiPlugin))
        .add_systems(Startup, (setup, load_preset_args))
        .add_systems(Update, ui_system)
        .run();
}
