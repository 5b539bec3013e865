use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Invalid render parameters: {0}")]
    InvalidParams(String),
}

/// Configuration bundle for one animation session. Treated as immutable while
/// a session runs; changing it restarts the effect with new constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Opacity passed through to the drawing surface for every glyph.
    pub alpha: f32,
    /// Biased noise values below this never draw.
    pub threshold: f64,
    /// Bias exponent applied to raw noise; >1 skews the field sparser.
    pub exponent: f64,
    /// Spatial frequency: lattice units per grid cell.
    pub frequency: f64,
    /// Time scale: lattice units per second along the z axis.
    pub speed: f64,
    /// Edge length of one grid cell, in surface units.
    pub cell_size: f64,
    /// Target frame rate; frames arriving faster than this are skipped.
    pub fps: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            alpha: 0.08,
            threshold: 0.19,
            exponent: 1.25,
            frequency: 0.035,
            speed: 0.115,
            cell_size: 12.0,
            fps: 30.0,
        }
    }
}

impl RenderParams {
    /// Checks the caller contract. The sampling pipeline itself is total and
    /// never re-validates; degenerate values are caught here or not at all.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(FieldError::InvalidParams(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(FieldError::InvalidParams(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(FieldError::InvalidParams(format!(
                "exponent must be positive, got {}",
                self.exponent
            )));
        }
        for (name, v) in [
            ("alpha", self.alpha as f64),
            ("threshold", self.threshold),
            ("frequency", self.frequency),
            ("speed", self.speed),
        ] {
            if !v.is_finite() {
                return Err(FieldError::InvalidParams(format!("{name} is not finite")));
            }
        }
        Ok(())
    }
}

/// Visible drawing area, in the same surface units as `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Grid dimensions covering the viewport. Partially visible edge cells
    /// count, so both axes round up.
    pub fn grid(&self, cell_size: f64) -> (u32, u32) {
        let cols = (self.width / cell_size).ceil().max(0.0) as u32;
        let rows = (self.height / cell_size).ceil().max(0.0) as u32;
        (cols, rows)
    }
}

/// One per-cell draw decision emitted by the frame pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGlyph {
    pub col: u32,
    pub row: u32,
    pub glyph: char,
    pub alpha: f32,
}

/// Drawing collaborator. The engine never reads the surface back; one frame's
/// draws complete before the next frame is sampled.
pub trait Surface {
    fn draw_glyph(&mut self, cell: CellGlyph);
}
