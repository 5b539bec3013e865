pub mod api;
pub mod frame;
pub mod hash;
pub mod sampling;
pub mod ticker;

pub use api::{CellGlyph, FieldError, RenderParams, Surface, Viewport};
pub use frame::{map_cell, plan_frame, render_frame, GLYPH_RAMP};
pub use hash::lattice_hash;
pub use sampling::sample;
pub use ticker::FrameTicker;
