//! Frame mapping: bias curve, glyph ramp and the per-frame grid pass.

use crate::api::{CellGlyph, RenderParams, Surface, Viewport};
use crate::sampling::sample;

/// Sparse-to-dense glyph ramp. Index 0 is the designated blank entry and
/// never draws.
pub const GLYPH_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Power-curve bias; exponent > 1 pushes the distribution toward low values
/// and thins out the rendered field.
pub fn bias(noise: f64, exponent: f64) -> f64 {
    noise.powf(exponent)
}

/// Index into [`GLYPH_RAMP`] for a biased noise value in `[0, 1)`.
pub fn glyph_index(biased: f64) -> usize {
    let idx = (biased * GLYPH_RAMP.len() as f64) as usize;
    idx.min(GLYPH_RAMP.len() - 1)
}

/// Maps one raw noise value to a glyph, or `None` when the cell stays empty
/// (sub-threshold, or the blank ramp entry).
pub fn map_cell(noise: f64, params: &RenderParams) -> Option<char> {
    let biased = bias(noise, params.exponent);
    if biased < params.threshold {
        return None;
    }
    let idx = glyph_index(biased);
    if idx == 0 {
        return None;
    }
    Some(GLYPH_RAMP[idx])
}

/// Samples every visible grid cell for one frame and emits draw decisions to
/// the surface. Pure single pass; nothing is retained between frames.
///
/// Cell `(col, row)` samples the field at
/// `(col * frequency, row * frequency, elapsed * speed)`.
pub fn render_frame(
    params: &RenderParams,
    viewport: Viewport,
    elapsed: f64,
    surface: &mut dyn Surface,
) {
    let (cols, rows) = viewport.grid(params.cell_size);
    let zt = elapsed * params.speed;
    for row in 0..rows {
        for col in 0..cols {
            let n = sample(
                col as f64 * params.frequency,
                row as f64 * params.frequency,
                zt,
            );
            if let Some(glyph) = map_cell(n, params) {
                surface.draw_glyph(CellGlyph {
                    col,
                    row,
                    glyph,
                    alpha: params.alpha,
                });
            }
        }
    }
}

impl Surface for Vec<CellGlyph> {
    fn draw_glyph(&mut self, cell: CellGlyph) {
        self.push(cell);
    }
}

/// Same pass as [`render_frame`], returned as a draw list for hosts that
/// consume frames as data rather than through a [`Surface`].
pub fn plan_frame(params: &RenderParams, viewport: Viewport, elapsed: f64) -> Vec<CellGlyph> {
    let mut plan = Vec::new();
    render_frame(params, viewport, elapsed, &mut plan);
    plan
}
