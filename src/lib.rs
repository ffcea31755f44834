//! Dynamic launcher grid.
//!
//! Resolves the home screen layout of a device from a table of reference
//! profiles: rows, columns, hotseat size and icon sizes are interpolated for
//! the target screen, icons are scaled to fit the available height, and the
//! zone rectangles (search bar, workspace, hotseat, overview bar) are derived
//! for the current orientation. A [`ProfileController`] owns the current
//! profile and notifies observers whenever a configuration change replaces
//! it.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod profile;
pub mod registry;

pub use config::GridConfig;
pub use controller::{
    ControllerSettings, NotifyReason, ObserverId, ProfileContext, ProfileController,
    ProfileObserver, ProfileState,
};
pub use display::{DisplayDensity, DisplayProvider, DisplaySnapshot, Orientation};
pub use error::{ProfileError, Result};
pub use geometry::{Insets, Rect, Size};
pub use layout::LayoutPlan;
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, ProfileMetrics};
pub use profile::{
    GridSpec, IconFit, IconMetrics, ProfileAttribute, ProfileInterpolator, ReferenceProfile,
    ResolvedProfile, TextMeasure, builtin_profiles, interpolate,
};
pub use registry::{ZoneKind, ZoneRegistry};
