//! Layout module orchestrator.
//!
//! Zone geometry is implemented directly on [`ResolvedProfile`] in `zones`;
//! the host-facing [`LayoutPlan`] lives in `plan`.
//!
//! [`ResolvedProfile`]: crate::profile::ResolvedProfile

pub mod plan;
mod zones;

pub use plan::{
    AllAppsPlan, Extent, HotseatPlan, LayoutPlan, OverviewPanelPlan, PageIndicatorPlan,
    SearchBarPlan, VoiceButtonPlan, WorkspacePlan, calculate_cell_height, calculate_cell_width,
    hotseat_inset_px,
};
