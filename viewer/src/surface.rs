use bevy_egui::egui::{Align2, Color32, FontId, Painter, Pos2, Rect};
use glyphfield_engine::{CellGlyph, Surface};

/// Draws engine cells as monospace glyphs onto an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    cell_size: f32,
    font: FontId,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, cell_size: f64) -> Self {
        Self {
            painter,
            origin: rect.min,
            cell_size: cell_size as f32,
            font: FontId::monospace(cell_size as f32),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn draw_glyph(&mut self, cell: CellGlyph) {
        let pos = Pos2::new(
            self.origin.x + (cell.col as f32 + 0.5) * self.cell_size,
            self.origin.y + (cell.row as f32 + 0.5) * self.cell_size,
        );
        let a = (cell.alpha.clamp(0.0, 1.0) * 255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(0x9c, 0xdc, 0xc5, a);
        self.painter.text(
            pos,
            Align2::CENTER_CENTER,
            cell.glyph,
            self.font.clone(),
            color,
        );
    }
}
