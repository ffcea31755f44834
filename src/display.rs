//! Display input and the chrome-stable available area.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Layout orientation of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Scale factors from density-independent units to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayDensity {
    pub density: f32,
    pub scaled_density: f32,
}

impl DisplayDensity {
    pub const fn new(density: f32, scaled_density: f32) -> Self {
        Self {
            density,
            scaled_density,
        }
    }

    pub fn px_from_dp(&self, dp: f32) -> i32 {
        (dp * self.density).round() as i32
    }

    pub fn px_from_sp(&self, sp: f32) -> i32 {
        (sp * self.scaled_density).round() as i32
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Everything the solver needs to know about the display at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub orientation: Orientation,
    /// Full window width in pixels.
    pub width_px: i32,
    /// Full window height in pixels.
    pub height_px: i32,
    /// Current display size excluding system decorations.
    pub current_size: Size,
    pub smallest_size: Size,
    pub largest_size: Size,
    #[serde(default)]
    pub density: DisplayDensity,
}

impl DisplaySnapshot {
    /// Snapshot for a display with no system chrome: every size equals the
    /// full window.
    pub fn uniform(orientation: Orientation, width_px: i32, height_px: i32) -> Self {
        let size = Size::new(width_px, height_px);
        Self {
            orientation,
            width_px,
            height_px,
            current_size: size,
            smallest_size: size,
            largest_size: size,
            density: DisplayDensity::default(),
        }
    }

    pub fn with_size_range(mut self, smallest: Size, largest: Size) -> Self {
        self.smallest_size = smallest;
        self.largest_size = largest;
        self
    }

    pub fn with_density(mut self, density: DisplayDensity) -> Self {
        self.density = density;
        self
    }

    pub fn available_area(&self) -> Size {
        resolve_available_area(
            self.orientation,
            self.current_size,
            self.smallest_size,
            self.largest_size,
        )
    }
}

/// Host hook returning the current display state.
pub trait DisplayProvider {
    fn snapshot(&self) -> DisplaySnapshot;
}

impl DisplayProvider for DisplaySnapshot {
    fn snapshot(&self) -> DisplaySnapshot {
        *self
    }
}

/// Area the grid may draw into.
///
/// Landscape takes the smallest height of the size range and portrait the
/// largest, so the result does not change when the navigation bar moves
/// between the bottom and the side.
pub fn resolve_available_area(
    orientation: Orientation,
    full_size: Size,
    smallest_size: Size,
    largest_size: Size,
) -> Size {
    let height = match orientation {
        Orientation::Landscape => smallest_size.height,
        Orientation::Portrait => largest_size.height,
    };
    Size::new(full_size.width, height.max(0))
}
