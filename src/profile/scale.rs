//! Icon shrink-to-fit and pixel metric derivation.
//!
//! The fit is a single correction: measure the grid at scale 1, and if the
//! rows overflow the usable height, scale everything by `max / used` with the
//! drawable padding dropped to zero. No second pass is made.

use serde::Serialize;

use crate::config::GridConfig;
use crate::display::DisplayDensity;
use crate::geometry::Size;

use super::grid::GridSpec;

/// Measures rendered label height for a text size.
pub trait TextMeasure {
    /// Distance from the font's top to bottom metric, in pixels.
    fn line_height_px(&self, text_size_px: f32) -> f32;
}

/// Line height as a fixed multiple of the text size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalTextMeasure {
    pub ratio: f32,
}

impl ProportionalTextMeasure {
    pub const fn new(ratio: f32) -> Self {
        Self { ratio }
    }
}

impl Default for ProportionalTextMeasure {
    fn default() -> Self {
        // Top-to-bottom extent of a typical sans-serif UI face.
        Self::new(1.328)
    }
}

impl TextMeasure for ProportionalTextMeasure {
    fn line_height_px(&self, text_size_px: f32) -> f32 {
        text_size_px * self.ratio
    }
}

/// Input to [`IconScaleSolver::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub icon_size_dp: f32,
    pub icon_text_size_sp: f32,
    pub drawable_padding_px: i32,
    pub rows: i32,
    pub available_height_px: i32,
    /// Workspace top plus bottom padding.
    pub vertical_padding_px: i32,
}

/// Outcome of the fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconFit {
    pub scale: f32,
    pub drawable_padding_px: i32,
    pub used_height_px: f32,
    pub max_height_px: i32,
}

impl IconFit {
    pub fn unscaled(drawable_padding_px: i32) -> Self {
        Self {
            scale: 1.0,
            drawable_padding_px,
            used_height_px: 0.0,
            max_height_px: 0,
        }
    }

    pub fn is_corrected(&self) -> bool {
        self.scale < 1.0
    }
}

/// Pixel metrics derived from one `(scale, drawable padding)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IconMetrics {
    pub icon_size_px: i32,
    pub icon_text_size_px: i32,
    pub icon_drawable_padding_px: i32,
    pub cell_width_px: i32,
    pub cell_height_px: i32,
    pub hotseat_icon_size_px: i32,
    pub hotseat_cell_width_px: i32,
    pub hotseat_cell_height_px: i32,
    pub hotseat_bar_height_px: i32,
    pub folder_cell_width_px: i32,
    pub folder_cell_height_px: i32,
    pub folder_background_offset_px: i32,
    pub folder_icon_size_px: i32,
    pub all_apps_icon_size_px: i32,
    pub all_apps_icon_text_size_px: i32,
    pub all_apps_cell_width_px: i32,
    pub all_apps_cell_height_px: i32,
    pub all_apps_num_rows: i32,
    pub all_apps_num_cols: i32,
    pub search_bar_space_width_px: i32,
    pub search_bar_space_max_width_px: i32,
    pub search_bar_space_height_px: i32,
    pub search_bar_height_px: i32,
}

/// Screen facts the metric derivation reads.
#[derive(Debug, Clone, Copy)]
pub struct MetricsInput<'a> {
    pub grid: &'a GridSpec,
    pub config: &'a GridConfig,
    pub width_px: i32,
    pub available: Size,
    pub is_landscape: bool,
}

pub struct IconScaleSolver<'a> {
    density: DisplayDensity,
    measure: &'a dyn TextMeasure,
}

impl<'a> IconScaleSolver<'a> {
    pub fn new(density: DisplayDensity, measure: &'a dyn TextMeasure) -> Self {
        Self { density, measure }
    }

    pub fn text_height_px(&self, text_size_px: i32) -> i32 {
        self.measure.line_height_px(text_size_px as f32).ceil() as i32
    }

    pub fn cell_height_px(
        &self,
        icon_size_dp: f32,
        icon_text_size_sp: f32,
        drawable_padding_px: i32,
        scale: f32,
    ) -> i32 {
        let icon = scaled(self.density.px_from_dp(icon_size_dp), scale);
        let text = scaled(self.density.px_from_sp(icon_text_size_sp), scale);
        icon + drawable_padding_px + self.text_height_px(text)
    }

    /// Pick the scale and drawable padding that fit `rows` cells into the
    /// available height less the workspace padding.
    pub fn fit(&self, request: &FitRequest) -> IconFit {
        let cell_height = self.cell_height_px(
            request.icon_size_dp,
            request.icon_text_size_sp,
            request.drawable_padding_px,
            1.0,
        );
        let used_height = cell_height as f32 * request.rows as f32;
        let max_height = request.available_height_px - request.vertical_padding_px;

        if used_height <= 0.0 || used_height <= max_height as f32 {
            return IconFit {
                scale: 1.0,
                drawable_padding_px: request.drawable_padding_px,
                used_height_px: used_height,
                max_height_px: max_height,
            };
        }

        IconFit {
            scale: max_height.max(0) as f32 / used_height,
            drawable_padding_px: 0,
            used_height_px: used_height,
            max_height_px: max_height,
        }
    }

    /// Derive every icon-dependent pixel metric at the fitted scale.
    pub fn metrics(&self, input: &MetricsInput<'_>, fit: IconFit) -> IconMetrics {
        let MetricsInput {
            grid,
            config,
            width_px,
            available,
            is_landscape,
        } = *input;
        let scale = fit.scale;
        let drawable_padding = fit.drawable_padding_px;
        let edge = config.edge_margin_px;

        let icon_size_px = scaled(self.density.px_from_dp(grid.icon_size_dp), scale);
        let icon_text_size_px = scaled(self.density.px_from_sp(grid.icon_text_size_sp), scale);
        let hotseat_icon_size_px =
            scaled(self.density.px_from_dp(grid.hotseat_icon_size_dp), scale);

        let search_bar_space_max_width_px = config.search_bar_max_width_px;
        let search_bar_height_px = config.search_bar_height_px;

        let cell_width_px = icon_size_px;
        let cell_height_px =
            icon_size_px + drawable_padding + self.text_height_px(icon_text_size_px);

        let folder_background_offset_px = -edge;

        // All apps keeps the interpolated icon size; only its label scales.
        let all_apps_icon_size_px = self.density.px_from_dp(grid.icon_size_dp);
        let all_apps_icon_text_size_px = self.density.px_from_sp(grid.icon_text_size_sp);
        let all_apps_cell_width_px = all_apps_icon_size_px;
        let all_apps_cell_height_px = all_apps_icon_size_px + drawable_padding + icon_text_size_px;

        let (max_rows, max_cols) = if is_landscape {
            (
                config.all_apps_max_short_edge_cells,
                config.all_apps_max_long_edge_cells,
            )
        } else {
            (
                config.all_apps_max_long_edge_cells,
                config.all_apps_max_short_edge_cells,
            )
        };
        let padding = config.all_apps_cell_padding_px;
        let fitting_rows = (available.height - config.page_indicator_height_px)
            / (all_apps_cell_height_px + padding).max(1);
        let fitting_cols = available.width / (all_apps_cell_width_px + padding).max(1);

        IconMetrics {
            icon_size_px,
            icon_text_size_px,
            icon_drawable_padding_px: drawable_padding,
            cell_width_px,
            cell_height_px,
            hotseat_icon_size_px,
            hotseat_cell_width_px: icon_size_px,
            hotseat_cell_height_px: icon_size_px,
            hotseat_bar_height_px: icon_size_px + 4 * edge,
            folder_cell_width_px: cell_width_px + 3 * edge,
            folder_cell_height_px: cell_height_px + edge,
            folder_background_offset_px,
            folder_icon_size_px: icon_size_px + 2 * -folder_background_offset_px,
            all_apps_icon_size_px,
            all_apps_icon_text_size_px,
            all_apps_cell_width_px,
            all_apps_cell_height_px,
            all_apps_num_rows: clamp_cells(fitting_rows, config.all_apps_min_edge_cells, max_rows),
            all_apps_num_cols: clamp_cells(fitting_cols, config.all_apps_min_edge_cells, max_cols),
            search_bar_space_width_px: search_bar_space_max_width_px.min(width_px),
            search_bar_space_max_width_px,
            search_bar_space_height_px: search_bar_height_px + 2 * edge,
            search_bar_height_px,
        }
    }
}

fn scaled(px: i32, scale: f32) -> i32 {
    (px as f32 * scale) as i32
}

/// Clamp to `[min, max]`; `min` wins if the bounds cross.
fn clamp_cells(count: i32, min: i32, max: i32) -> i32 {
    min.max(max.min(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLineHeight(f32);

    impl TextMeasure for FixedLineHeight {
        fn line_height_px(&self, _text_size_px: f32) -> f32 {
            self.0
        }
    }

    fn request(rows: i32) -> FitRequest {
        FitRequest {
            icon_size_dp: 150.0,
            icon_text_size_sp: 12.0,
            drawable_padding_px: 20,
            rows,
            available_height_px: 1600,
            vertical_padding_px: 200,
        }
    }

    fn grid() -> GridSpec {
        GridSpec {
            min_width_dp: 400.0,
            min_height_dp: 700.0,
            num_rows: 9,
            num_columns: 4,
            num_hotseat_icons: 5,
            hotseat_all_apps_rank: 2,
            icon_size_dp: 150.0,
            icon_text_size_sp: 12.0,
            hotseat_icon_size_dp: 120.0,
        }
    }

    #[test]
    fn unscaled_cell_height_sums_icon_padding_and_text() {
        let measure = FixedLineHeight(30.0);
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        assert_eq!(solver.cell_height_px(150.0, 12.0, 20, 1.0), 200);
    }

    #[test]
    fn grid_that_fits_keeps_scale_and_padding() {
        let measure = FixedLineHeight(30.0);
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        let fit = solver.fit(&request(5));
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.drawable_padding_px, 20);
        assert_eq!(fit.used_height_px, 1000.0);
        assert_eq!(fit.max_height_px, 1400);
        assert!(!fit.is_corrected());
    }

    #[test]
    fn overflowing_grid_shrinks_and_drops_padding() {
        let measure = FixedLineHeight(30.0);
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        let fit = solver.fit(&request(9));
        assert_eq!(fit.scale, 1400.0 / 1800.0);
        assert!((fit.scale - 0.7778).abs() < 1e-4);
        assert_eq!(fit.drawable_padding_px, 0);
        assert!(fit.is_corrected());

        let grid = grid();
        let config = GridConfig::default();
        let input = MetricsInput {
            grid: &grid,
            config: &config,
            width_px: 1080,
            available: Size::new(1080, 1600),
            is_landscape: false,
        };
        let metrics = solver.metrics(&input, fit);
        assert_eq!(metrics.icon_size_px, (150.0_f32 * fit.scale).floor() as i32);
        assert_eq!(metrics.icon_size_px, 116);
        assert_eq!(metrics.icon_drawable_padding_px, 0);
        assert_eq!(metrics.cell_height_px, 116 + 30);
    }

    #[test]
    fn derived_sizes_track_icon_and_edge_margin() {
        let measure = FixedLineHeight(16.0);
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        let grid = grid();
        let config = GridConfig {
            edge_margin_px: 10,
            ..GridConfig::default()
        };
        let input = MetricsInput {
            grid: &grid,
            config: &config,
            width_px: 400,
            available: Size::new(1080, 1600),
            is_landscape: false,
        };
        let metrics = solver.metrics(&input, IconFit::unscaled(4));

        assert_eq!(metrics.hotseat_bar_height_px, 150 + 40);
        assert_eq!(metrics.hotseat_icon_size_px, 120);
        assert_eq!(metrics.folder_cell_width_px, 150 + 30);
        assert_eq!(metrics.folder_cell_height_px, metrics.cell_height_px + 10);
        assert_eq!(metrics.folder_icon_size_px, 150 + 20);
        assert_eq!(metrics.search_bar_space_width_px, 400);
        assert_eq!(metrics.search_bar_space_height_px, config.search_bar_height_px + 20);
    }

    #[test]
    fn all_apps_counts_respect_orientation_bounds() {
        let measure = FixedLineHeight(16.0);
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        let mut grid = grid();
        grid.icon_size_dp = 40.0;
        let config = GridConfig {
            all_apps_max_long_edge_cells: 7,
            all_apps_max_short_edge_cells: 4,
            all_apps_min_edge_cells: 2,
            ..GridConfig::default()
        };

        let portrait = MetricsInput {
            grid: &grid,
            config: &config,
            width_px: 1080,
            available: Size::new(1080, 1920),
            is_landscape: false,
        };
        let metrics = solver.metrics(&portrait, IconFit::unscaled(4));
        assert_eq!(metrics.all_apps_num_rows, 7);
        assert_eq!(metrics.all_apps_num_cols, 4);

        let landscape = MetricsInput {
            available: Size::new(1920, 1080),
            is_landscape: true,
            ..portrait
        };
        let metrics = solver.metrics(&landscape, IconFit::unscaled(4));
        assert_eq!(metrics.all_apps_num_rows, 4);
        assert_eq!(metrics.all_apps_num_cols, 7);

        let cramped = MetricsInput {
            available: Size::new(60, 60),
            ..portrait
        };
        let metrics = solver.metrics(&cramped, IconFit::unscaled(4));
        assert_eq!(metrics.all_apps_num_rows, 2);
        assert_eq!(metrics.all_apps_num_cols, 2);
    }
}
