use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in layout units, origin at the grid's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A full-height column slice starting at `x`.
    pub fn column(x: f32, width: f32, grid_height: f32) -> Self {
        Self::new(x, 0.0, width, grid_height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Place this rect on an egui canvas whose grid starts at `origin`.
    pub fn to_egui(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::Pos2::new(origin.x + self.x, origin.y + self.y),
            egui::Vec2::new(self.width, self.height),
        )
    }
}

impl From<Rect> for egui::Rect {
    fn from(rect: Rect) -> Self {
        rect.to_egui(egui::Pos2::ZERO)
    }
}

/// A straight line segment in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn horizontal(y: f32, width: f32) -> Self {
        Self::new(0.0, y, width, y)
    }

    pub fn vertical(x: f32, height: f32) -> Self {
        Self::new(x, 0.0, x, height)
    }

    /// Endpoints for `egui::Painter::line_segment`, offset by `origin`.
    pub fn to_egui(&self, origin: egui::Pos2) -> [egui::Pos2; 2] {
        [
            egui::Pos2::new(origin.x + self.x1, origin.y + self.y1),
            egui::Pos2::new(origin.x + self.x2, origin.y + self.y2),
        ]
    }
}
