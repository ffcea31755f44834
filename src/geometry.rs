/// Integer size measured in device pixels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Longest edge of the size.
    pub fn long_edge(&self) -> i32 {
        self.width.max(self.height)
    }

    /// Shortest edge of the size.
    pub fn short_edge(&self) -> i32 {
        self.width.min(self.height)
    }
}

/// Edge-anchored rectangle in device pixels.
///
/// Edges are stored directly so zones can extend to [`Rect::UNBOUNDED`] on
/// the side the host is expected to clip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Edge value for zones that run off the screen.
    pub const UNBOUNDED: i32 = i32::MAX;

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Shrink the rectangle by the given insets.
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.left.saturating_add(insets.left),
            self.top.saturating_add(insets.top),
            self.right.saturating_sub(insets.right),
            self.bottom.saturating_sub(insets.bottom),
        )
    }
}

/// Per-edge spacing, used for paddings and margins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
