//! Injected grid configuration.
//!
//! Every constant the solver reads from the host lives here, already
//! converted to pixels. Documents deserialize with `#[serde(default)]`, so a
//! partial JSON object only overrides the keys it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Insets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub edge_margin_px: i32,
    pub page_indicator_height_px: i32,
    pub default_page_spacing_px: i32,
    pub all_apps_cell_padding_px: i32,
    pub overview_min_icon_zone_height_px: i32,
    pub overview_max_icon_zone_height_px: i32,
    pub overview_max_bar_width_px: i32,
    pub overview_icon_zone_percentage: u32,
    pub overview_scale_percentage: u32,
    pub search_bar_max_width_px: i32,
    pub search_bar_height_px: i32,
    pub all_apps_max_long_edge_cells: i32,
    pub all_apps_max_short_edge_cells: i32,
    pub all_apps_min_edge_cells: i32,
    pub icon_drawable_padding_px: i32,
    pub apps_page_indicator_offset_px: i32,
    /// Padding the widget host adds around every widget.
    pub default_widget_padding: Insets,
    /// Reference icon size the all-apps page indicator is scaled against.
    pub default_icon_size_dp: f32,
    pub is_tablet: bool,
    pub is_large_tablet: bool,
    /// Rotate the search and hotseat bars to the sides in landscape.
    pub transpose_layout_with_orientation: bool,
    pub all_apps_enabled: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            edge_margin_px: 8,
            page_indicator_height_px: 8,
            default_page_spacing_px: 16,
            all_apps_cell_padding_px: 8,
            overview_min_icon_zone_height_px: 64,
            overview_max_icon_zone_height_px: 96,
            overview_max_bar_width_px: 540,
            overview_icon_zone_percentage: 12,
            overview_scale_percentage: 80,
            search_bar_max_width_px: 500,
            search_bar_height_px: 48,
            all_apps_max_long_edge_cells: 6,
            all_apps_max_short_edge_cells: 5,
            all_apps_min_edge_cells: 3,
            icon_drawable_padding_px: 4,
            apps_page_indicator_offset_px: -14,
            default_widget_padding: Insets::new(8, 8, 8, 8),
            default_icon_size_dp: 60.0,
            is_tablet: false,
            is_large_tablet: false,
            transpose_layout_with_orientation: true,
            all_apps_enabled: true,
        }
    }
}

impl GridConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Share of the available height given to the overview button bar.
    pub fn overview_zone_ratio(&self) -> f32 {
        self.overview_icon_zone_percentage as f32 / 100.0
    }

    /// Base scale applied to workspace pages in overview mode.
    pub fn overview_scale_factor(&self) -> f32 {
        self.overview_scale_percentage as f32 / 100.0
    }

    /// Left/right workspace margin wanted on phones, before widget padding.
    pub fn desired_workspace_margin_px(&self) -> i32 {
        2 * self.edge_margin_px
    }
}
