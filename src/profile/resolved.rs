use std::sync::Arc;

use serde::Serialize;

use crate::config::GridConfig;
use crate::display::{DisplayDensity, DisplaySnapshot, Orientation};
use crate::error::{ProfileError, Result};

use super::grid::GridSpec;
use super::scale::{FitRequest, IconFit, IconMetrics, IconScaleSolver, MetricsInput, TextMeasure};

/// Complete layout metrics for one display configuration.
///
/// Built in one go by [`ResolvedProfile::compute`] and never patched
/// afterwards; a configuration change produces a new value.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub grid: GridSpec,
    pub is_landscape: bool,
    pub is_tablet: bool,
    pub is_large_tablet: bool,
    pub transpose_layout_with_orientation: bool,
    pub width_px: i32,
    pub height_px: i32,
    pub available_width_px: i32,
    pub available_height_px: i32,
    pub density: DisplayDensity,
    pub fit: IconFit,
    pub metrics: IconMetrics,
    pub fingerprint: blake3::Hash,
    config: Arc<GridConfig>,
}

#[derive(Serialize)]
struct FingerprintView<'a> {
    grid: &'a GridSpec,
    is_landscape: bool,
    width_px: i32,
    height_px: i32,
    available_width_px: i32,
    available_height_px: i32,
    scale: f32,
    metrics: &'a IconMetrics,
    config: &'a GridConfig,
}

impl ResolvedProfile {
    /// Resolve `grid` against the display, fitting icons into the
    /// chrome-stable available height.
    pub fn compute(
        grid: &GridSpec,
        config: Arc<GridConfig>,
        display: &DisplaySnapshot,
        measure: &dyn TextMeasure,
    ) -> Result<Self> {
        let available = display.available_area();
        let is_landscape = display.orientation.is_landscape();
        let solver = IconScaleSolver::new(display.density, measure);
        let input = MetricsInput {
            grid,
            config: &config,
            width_px: display.width_px,
            available,
            is_landscape,
        };

        let unscaled = IconFit::unscaled(config.icon_drawable_padding_px);
        let mut profile = Self {
            grid: grid.clone(),
            is_landscape,
            is_tablet: config.is_tablet,
            is_large_tablet: config.is_large_tablet,
            transpose_layout_with_orientation: config.transpose_layout_with_orientation,
            width_px: display.width_px,
            height_px: display.height_px,
            available_width_px: available.width,
            available_height_px: available.height,
            density: display.density,
            fit: unscaled,
            metrics: solver.metrics(&input, unscaled),
            fingerprint: blake3::Hash::from([0; 32]),
            config: Arc::clone(&config),
        };

        let padding = profile.workspace_padding();
        let fit = solver.fit(&FitRequest {
            icon_size_dp: grid.icon_size_dp,
            icon_text_size_sp: grid.icon_text_size_sp,
            drawable_padding_px: config.icon_drawable_padding_px,
            rows: grid.num_rows,
            available_height_px: available.height,
            vertical_padding_px: padding.vertical(),
        });
        profile.fit = fit;
        profile.metrics = solver.metrics(&input, fit);
        profile.fingerprint = profile.compute_fingerprint()?;
        Ok(profile)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_landscape(self.is_landscape)
    }

    pub fn scale(&self) -> f32 {
        self.fit.scale
    }

    pub fn num_rows(&self) -> i32 {
        self.grid.num_rows
    }

    pub fn num_columns(&self) -> i32 {
        self.grid.num_columns
    }

    pub fn num_hotseat_icons(&self) -> i32 {
        self.grid.num_hotseat_icons
    }

    pub fn is_phone(&self) -> bool {
        !self.is_tablet && !self.is_large_tablet
    }

    pub fn is_tablet(&self) -> bool {
        self.is_tablet
    }

    pub fn is_large_tablet(&self) -> bool {
        self.is_large_tablet
    }

    /// Landscape with the search and hotseat bars rotated to the sides.
    pub fn is_vertical_bar_layout(&self) -> bool {
        self.is_landscape && self.transpose_layout_with_orientation
    }

    pub fn should_fade_adjacent_workspace_screens(&self) -> bool {
        self.is_vertical_bar_layout() || self.is_large_tablet()
    }

    fn compute_fingerprint(&self) -> Result<blake3::Hash> {
        let view = FingerprintView {
            grid: &self.grid,
            is_landscape: self.is_landscape,
            width_px: self.width_px,
            height_px: self.height_px,
            available_width_px: self.available_width_px,
            available_height_px: self.available_height_px,
            scale: self.fit.scale,
            metrics: &self.metrics,
            config: &self.config,
        };
        let bytes = serde_json::to_vec(&view).map_err(ProfileError::Fingerprint)?;
        Ok(blake3::hash(&bytes))
    }
}
