//! The color toolbar: five fixed 60x60 swatches in the top-left of the
//! camera view, one of them the eraser.

use crate::types::{Point, Rgb};

pub const REGION_SIZE: f32 = 60.0;

/// Currently selected paint color. Written only by toolbar hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveColor {
    pub color: Rgb,
    pub eraser: bool,
}

impl Default for ActiveColor {
    fn default() -> Self {
        Self { color: 0x00_FF_00_00, eraser: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolbarRegion {
    pub name: &'static str,
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub eraser: bool,
}

impl ToolbarRegion {
    const fn swatch(name: &'static str, x: f32, color: Rgb) -> Self {
        Self { name, x, y: 20.0, color, eraser: false }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + REGION_SIZE && p.y >= self.y && p.y <= self.y + REGION_SIZE
    }

    pub fn active_color(&self) -> ActiveColor {
        ActiveColor { color: self.color, eraser: self.eraser }
    }
}

pub const REGIONS: [ToolbarRegion; 5] = [
    ToolbarRegion::swatch("RED", 20.0, 0x00_FF_00_00),
    ToolbarRegion::swatch("BLUE", 90.0, 0x00_00_00_FF),
    ToolbarRegion::swatch("GREEN", 160.0, 0x00_00_FF_00),
    ToolbarRegion::swatch("YELLOW", 230.0, 0x00_FF_FF_00),
    ToolbarRegion { name: "ERASER", x: 300.0, y: 20.0, color: 0x00_FF_FF_FF, eraser: true },
];

/// Immutable for the session. Regions never overlap, so at most one hits.
#[derive(Clone, Debug)]
pub struct Toolbar {
    regions: Vec<ToolbarRegion>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self { regions: REGIONS.to_vec() }
    }
}

impl Toolbar {
    pub fn regions(&self) -> &[ToolbarRegion] {
        &self.regions
    }

    /// Index of the region under `p`, if any.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(p))
    }

    /// Display name for the active tool (the region it came from).
    pub fn name_of(&self, active: ActiveColor) -> Option<&'static str> {
        self.regions.iter().find(|r| r.active_color() == active).map(|r| r.name)
    }
}
