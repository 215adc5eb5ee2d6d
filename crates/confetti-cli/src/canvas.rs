//! ASCII rendering of packed particle instances

use confetti_core::Rect;
use confetti_particles::{ParticleInstance, ShapeKind, TEXTURED_VARIANT};

/// Below this opacity a particle is drawn faintly
const FAINT_OPACITY: f32 = 0.5;

/// Character grid mapped onto a surface rectangle
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    surface: Rect,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize, surface: Rect) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            surface,
        }
    }

    /// Draw every visible instance by the cell under its center
    pub fn render(&self, instances: &[ParticleInstance]) -> String {
        let mut grid = vec![vec![' '; self.cols]; self.rows];

        for instance in instances {
            if instance.rotation_opacity[2] == 0.0 || instance.opacity() <= 0.0 {
                continue;
            }
            let [x, y, w, h] = instance.pos_size;
            let Some((col, row)) = self.cell(x + w / 2.0, y + h / 2.0) else {
                continue;
            };
            grid[row][col] = glyph(instance);
        }

        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        out.push_str(&border);
        out.push('\n');
        for row in grid {
            out.push('|');
            out.extend(row);
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let s = &self.surface;
        if !s.contains(confetti_core::Point::new(x, y)) {
            return None;
        }
        let col = ((x - s.left) / s.width() * self.cols as f32) as usize;
        let row = ((y - s.top) / s.height() * self.rows as f32) as usize;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }
}

fn glyph(instance: &ParticleInstance) -> char {
    if instance.opacity() < FAINT_OPACITY {
        return '.';
    }
    match instance.variant() {
        TEXTURED_VARIANT => '*',
        code => ShapeKind::from_code(code).map_or('@', |kind| kind.glyph()),
    }
}
