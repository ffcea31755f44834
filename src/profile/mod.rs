//! Device profile resolution.
//!
//! Reference profiles are interpolated into a [`GridSpec`], which is then
//! resolved against a display into a [`ResolvedProfile`].

mod grid;
pub mod interpolate;
pub mod reference;
mod resolved;
pub mod scale;

use std::sync::Arc;

pub use grid::GridSpec;
pub use interpolate::{ProfileInterpolator, interpolate};
pub use reference::{ProfileAttribute, ReferenceProfile, builtin_profiles};
pub use resolved::ResolvedProfile;
pub use scale::{
    FitRequest, IconFit, IconMetrics, IconScaleSolver, MetricsInput, ProportionalTextMeasure,
    TextMeasure,
};

use crate::config::GridConfig;
use crate::display::DisplaySnapshot;
use crate::error::Result;

/// Build a profile for a target screen size in one call.
pub fn resolve(
    min_width_dp: f32,
    min_height_dp: f32,
    table: &[ReferenceProfile],
    config: GridConfig,
    display: &DisplaySnapshot,
    measure: &dyn TextMeasure,
) -> Result<ResolvedProfile> {
    let grid = GridSpec::interpolate(min_width_dp, min_height_dp, table, &config)?;
    ResolvedProfile::compute(&grid, Arc::new(config), display, measure)
}
