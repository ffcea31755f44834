//! Zone geometry derived from a resolved profile.
//!
//! Every method returns a fresh value; nothing here mutates the profile.
//! Three modes are covered: portrait, landscape, and landscape with the
//! bars transposed into side columns (vertical-bar mode).

use std::collections::HashMap;

use crate::display::Orientation;
use crate::geometry::{Insets, Rect, Size};
use crate::profile::ResolvedProfile;
use crate::registry::ZoneKind;

impl ResolvedProfile {
    fn is_vertical_bar(&self, orientation: Orientation) -> bool {
        orientation.is_landscape() && self.transpose_layout_with_orientation
    }

    /// Gap that spaces the grid columns evenly across the screen width the
    /// given orientation would have.
    pub fn grid_gap_px(&self, orientation: Orientation) -> i32 {
        let screen = Size::new(self.width_px, self.height_px);
        let width = match orientation {
            Orientation::Landscape => screen.long_edge(),
            Orientation::Portrait => screen.short_edge(),
        };
        self.column_gap_px(width)
    }

    pub(crate) fn column_gap_px(&self, width: i32) -> i32 {
        let columns = self.grid.num_columns as f32;
        let edge = self.config().edge_margin_px;
        let free = (width - 2 * edge) as f32 - columns * self.metrics.cell_width_px as f32;
        (free / (2.0 * (columns + 1.0))) as i32
    }

    /// Phone left/right margin after the widget host's padding.
    fn phone_margins(&self) -> (i32, i32) {
        let config = self.config();
        let margin = config.desired_workspace_margin_px();
        let widget = config.default_widget_padding;
        (margin - widget.left, margin - widget.right)
    }

    pub fn search_bar_bounds(&self) -> Rect {
        self.search_bar_bounds_for(self.orientation())
    }

    pub fn search_bar_bounds_for(&self, orientation: Orientation) -> Rect {
        let edge = self.config().edge_margin_px;
        let space_height = self.metrics.search_bar_space_height_px;

        if self.is_vertical_bar(orientation) {
            return Rect::new(0, edge, space_height, self.available_height_px - edge);
        }

        if self.is_tablet() {
            let inset = edge + self.grid_gap_px(orientation);
            Rect::new(inset, 0, self.available_width_px - inset, space_height)
        } else {
            let (left, right) = self.phone_margins();
            Rect::new(left, 0, self.available_width_px - right, space_height)
        }
    }

    pub fn workspace_padding(&self) -> Insets {
        self.workspace_padding_for(self.orientation())
    }

    pub fn workspace_padding_for(&self, orientation: Orientation) -> Insets {
        let search_bar = self.search_bar_bounds_for(orientation);
        let edge = self.config().edge_margin_px;
        let hotseat = self.metrics.hotseat_bar_height_px;

        if self.is_vertical_bar(orientation) {
            return Insets::new(search_bar.right, edge, hotseat, edge);
        }

        let bottom = hotseat + self.config().page_indicator_height_px;
        if self.is_tablet() {
            let side = edge + self.grid_gap_px(orientation);
            Insets::new(side, search_bar.bottom, side, bottom)
        } else {
            let (left, right) = self.phone_margins();
            Insets::new(left, search_bar.bottom, right, bottom)
        }
    }

    /// Spacing between workspace pages. Outside vertical-bar mode adjacent
    /// pages sit a full padding away so none overhang the viewport.
    pub fn workspace_page_spacing(&self, orientation: Orientation) -> i32 {
        if self.is_vertical_bar(orientation) {
            self.config().default_page_spacing_px
        } else {
            2 * self.workspace_padding_for(orientation).left
        }
    }

    pub fn overview_zone_height_px(&self) -> i32 {
        let config = self.config();
        let zone = (config.overview_zone_ratio() * self.available_height_px as f32) as i32;
        config
            .overview_max_icon_zone_height_px
            .min(config.overview_min_icon_zone_height_px.max(zone))
    }

    /// Width of the overview button bar, centred in the available width.
    pub fn overview_bar_width_px(&self) -> i32 {
        self.available_width_px
            .min(self.config().overview_max_bar_width_px)
    }

    pub fn overview_mode_button_bar_rect(&self) -> Rect {
        let height = self.overview_zone_height_px();
        let width = self.overview_bar_width_px();
        let left = (self.available_width_px - width) / 2;
        Rect::new(
            left,
            self.available_height_px - height,
            left + width,
            self.available_height_px,
        )
    }

    pub fn overview_mode_scale(&self) -> f32 {
        let padding = self.workspace_padding();
        let bar = self.overview_mode_button_bar_rect();
        let page_space = (self.available_height_px - padding.vertical()).max(1);
        self.config().overview_scale_factor() * (page_space - bar.height()) as f32
            / page_space as f32
    }

    /// Hotseat zone. It runs off the right or bottom edge so system insets
    /// can extend it; callers clip.
    pub fn hotseat_rect(&self) -> Rect {
        let bar = self.metrics.hotseat_bar_height_px;
        if self.is_vertical_bar_layout() {
            Rect::new(
                self.available_width_px - bar,
                0,
                Rect::UNBOUNDED,
                self.available_height_px,
            )
        } else {
            Rect::new(
                0,
                self.available_height_px - bar,
                self.available_width_px,
                Rect::UNBOUNDED,
            )
        }
    }

    /// Workspace area left once the bars are carved out.
    pub fn workspace_rect(&self) -> Rect {
        Rect::new(0, 0, self.available_width_px, self.available_height_px)
            .inset(self.workspace_padding())
    }

    /// Every named zone in the current orientation.
    pub fn zones(&self) -> HashMap<ZoneKind, Rect> {
        HashMap::from([
            (ZoneKind::Search, self.search_bar_bounds()),
            (ZoneKind::Workspace, self.workspace_rect()),
            (ZoneKind::Hotseat, self.hotseat_rect()),
            (ZoneKind::OverviewBar, self.overview_mode_button_bar_rect()),
        ])
    }
}
