//! Host-facing layout plan.
//!
//! Converts a resolved profile into the sizes, paddings and visibility the
//! host view glue applies. Pure values only; nothing here touches views.

use crate::geometry::Insets;
use crate::profile::ResolvedProfile;

/// Requested extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Px(i32),
    MatchParent,
    WrapContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarPlan {
    pub vertical: bool,
    pub width: Extent,
    pub height: Extent,
    pub padding: Insets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceButtonPlan {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspacePlan {
    pub padding: Insets,
    pub page_spacing: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotseatPlan {
    /// Right-hand column in vertical-bar mode.
    Vertical { width: i32, content_padding: Insets },
    /// Bottom row aligned with the tablet grid gap.
    Tablet { height: i32, padding: Insets },
    /// Bottom row without a bottom margin, leaving room for folders.
    Phone { height: i32, content_padding: Insets },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicatorPlan {
    Hidden,
    AboveHotseat { bottom_margin: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllAppsPlan {
    pub page_indicator_height: i32,
    pub page_indicator_offset: i32,
    pub padding: Insets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewPanelPlan {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub search_bar: SearchBarPlan,
    pub voice_button: Option<VoiceButtonPlan>,
    pub workspace: WorkspacePlan,
    pub hotseat: HotseatPlan,
    pub page_indicator: PageIndicatorPlan,
    pub all_apps: AllAppsPlan,
    pub overview_panel: OverviewPanelPlan,
}

impl LayoutPlan {
    pub fn for_profile(profile: &ResolvedProfile) -> Self {
        let vertical = profile.is_vertical_bar_layout();
        let orientation = profile.orientation();

        Self {
            search_bar: search_bar_plan(profile, vertical),
            voice_button: (!vertical).then(|| voice_button_plan(profile)),
            workspace: WorkspacePlan {
                padding: profile.workspace_padding_for(orientation),
                page_spacing: profile.workspace_page_spacing(orientation),
            },
            hotseat: hotseat_plan(profile, vertical),
            page_indicator: if vertical {
                PageIndicatorPlan::Hidden
            } else {
                PageIndicatorPlan::AboveHotseat {
                    bottom_margin: profile.metrics.hotseat_bar_height_px,
                }
            },
            all_apps: all_apps_plan(profile),
            overview_panel: OverviewPanelPlan {
                width: profile.overview_bar_width_px(),
                height: profile.overview_mode_button_bar_rect().height(),
            },
        }
    }
}

fn search_bar_plan(profile: &ResolvedProfile, vertical: bool) -> SearchBarPlan {
    let edge2 = 2 * profile.config().edge_margin_px;
    let space_height = profile.metrics.search_bar_space_height_px;
    if vertical {
        SearchBarPlan {
            vertical,
            width: Extent::Px(space_height),
            height: Extent::MatchParent,
            padding: Insets::new(0, edge2, 0, edge2),
        }
    } else {
        SearchBarPlan {
            vertical,
            width: Extent::Px(profile.metrics.search_bar_space_width_px),
            height: Extent::Px(space_height),
            padding: Insets::new(edge2, edge2, edge2, 0),
        }
    }
}

fn voice_button_plan(profile: &ResolvedProfile) -> VoiceButtonPlan {
    let metrics = &profile.metrics;
    VoiceButtonPlan {
        width: (profile.width_px - metrics.search_bar_space_width_px) / 2
            + 2 * metrics.icon_size_px,
        height: metrics.search_bar_space_height_px,
    }
}

fn hotseat_plan(profile: &ResolvedProfile, vertical: bool) -> HotseatPlan {
    let edge2 = 2 * profile.config().edge_margin_px;
    let bar = profile.metrics.hotseat_bar_height_px;

    if vertical {
        return HotseatPlan::Vertical {
            width: bar,
            content_padding: Insets::new(0, edge2, 0, edge2),
        };
    }

    if profile.is_tablet() {
        let side = edge2 + hotseat_inset_px(profile);
        return HotseatPlan::Tablet {
            height: bar,
            padding: Insets::new(side, 0, side, edge2),
        };
    }

    HotseatPlan::Phone {
        height: bar,
        content_padding: Insets::new(edge2, 0, edge2, 0),
    }
}

/// Grid gap plus the spacing that spreads hotseat icons across the grid
/// width.
pub fn hotseat_inset_px(profile: &ResolvedProfile) -> i32 {
    let columns = profile.grid.num_columns as f32;
    let icons = profile.grid.num_hotseat_icons;
    let grid_gap = profile.column_gap_px(profile.width_px);
    let grid_width =
        (columns * profile.metrics.cell_width_px as f32 + (columns - 1.0) * grid_gap as f32) as i32;
    let hotseat_gap = if icons > 1 {
        ((grid_width - icons * profile.metrics.hotseat_cell_width_px) / (icons - 1)).max(0)
    } else {
        0
    };
    grid_gap + hotseat_gap
}

fn all_apps_plan(profile: &ResolvedProfile) -> AllAppsPlan {
    let config = profile.config();
    let metrics = &profile.metrics;

    let default_icon_px = profile.density.px_from_dp(config.default_icon_size_dp).max(1);
    let icon_ratio = (metrics.all_apps_icon_size_px as f32 / default_icon_px as f32).min(1.0);
    let page_indicator_height = (config.page_indicator_height_px as f32 * icon_ratio) as i32;

    let cols = metrics.all_apps_num_cols;
    let rows = metrics.all_apps_num_rows;
    let free_width = profile.available_width_px - metrics.all_apps_cell_width_px * cols;
    let free_height = profile.available_height_px - metrics.all_apps_cell_height_px * rows;
    let mut padding_lr = free_width / (2 * (cols + 1)).max(1);
    let mut padding_tb = free_height / (2 * (rows + 1)).max(1);
    padding_lr = padding_lr.min(((padding_lr + padding_tb) as f32 * 0.75) as i32);
    padding_tb = padding_tb.min(((padding_lr + padding_tb) as f32 * 0.75) as i32);

    let max_width = cols * (metrics.all_apps_cell_width_px + 2 * padding_lr);
    let grid_padding = (profile.available_width_px - max_width) / 2;

    let mut padding = Insets::default();
    if grid_padding > metrics.all_apps_cell_width_px / 4 {
        padding.left = grid_padding;
        padding.right = grid_padding;
    }
    // Icons are centred, so the indicator only needs the space paddingTB
    // does not already provide.
    padding.bottom = (page_indicator_height - padding_tb).max(0);

    AllAppsPlan {
        page_indicator_height,
        page_indicator_offset: config.apps_page_indicator_offset_px,
        padding,
    }
}

/// Width of one cell when `width` is split into `count` columns.
pub fn calculate_cell_width(width: i32, count: i32) -> i32 {
    width / count.max(1)
}

/// Height of one cell when `height` is split into `count` rows.
pub fn calculate_cell_height(height: i32, count: i32) -> i32 {
    height / count.max(1)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::GridConfig;
    use crate::display::{DisplaySnapshot, Orientation};
    use crate::profile::{GridSpec, ProportionalTextMeasure};

    fn grid() -> GridSpec {
        GridSpec {
            min_width_dp: 600.0,
            min_height_dp: 960.0,
            num_rows: 5,
            num_columns: 6,
            num_hotseat_icons: 7,
            hotseat_all_apps_rank: 3,
            icon_size_dp: 64.0,
            icon_text_size_sp: 14.0,
            hotseat_icon_size_dp: 60.0,
        }
    }

    fn profile(config: GridConfig, display: DisplaySnapshot) -> ResolvedProfile {
        ResolvedProfile::compute(
            &grid(),
            Arc::new(config),
            &display,
            &ProportionalTextMeasure::default(),
        )
        .unwrap()
    }

    #[test]
    fn phone_portrait_plan() {
        let profile = profile(
            GridConfig::default(),
            DisplaySnapshot::uniform(Orientation::Portrait, 1080, 1920),
        );
        let plan = LayoutPlan::for_profile(&profile);
        let edge2 = 2 * profile.config().edge_margin_px;

        assert!(!plan.search_bar.vertical);
        assert_eq!(
            plan.search_bar.width,
            Extent::Px(profile.metrics.search_bar_space_width_px)
        );
        let voice = plan.voice_button.unwrap();
        assert_eq!(
            voice.width,
            (1080 - profile.metrics.search_bar_space_width_px) / 2
                + 2 * profile.metrics.icon_size_px
        );
        assert_eq!(
            plan.hotseat,
            HotseatPlan::Phone {
                height: profile.metrics.hotseat_bar_height_px,
                content_padding: Insets::new(edge2, 0, edge2, 0),
            }
        );
        assert_eq!(
            plan.page_indicator,
            PageIndicatorPlan::AboveHotseat {
                bottom_margin: profile.metrics.hotseat_bar_height_px
            }
        );
        assert_eq!(plan.workspace.padding, profile.workspace_padding());
        assert_eq!(plan.overview_panel.width, 540);
    }

    #[test]
    fn vertical_bar_plan_hides_indicator() {
        let profile = profile(
            GridConfig::default(),
            DisplaySnapshot::uniform(Orientation::Landscape, 1920, 1080),
        );
        let plan = LayoutPlan::for_profile(&profile);
        assert!(plan.search_bar.vertical);
        assert_eq!(plan.search_bar.height, Extent::MatchParent);
        assert!(plan.voice_button.is_none());
        assert_eq!(plan.page_indicator, PageIndicatorPlan::Hidden);
        assert!(matches!(plan.hotseat, HotseatPlan::Vertical { width, .. }
            if width == profile.metrics.hotseat_bar_height_px));
    }

    #[test]
    fn tablet_hotseat_aligns_with_grid() {
        let config = GridConfig {
            is_tablet: true,
            ..GridConfig::default()
        };
        let profile = profile(config, DisplaySnapshot::uniform(Orientation::Portrait, 1600, 2560));
        let plan = LayoutPlan::for_profile(&profile);
        let edge2 = 2 * profile.config().edge_margin_px;
        let inset = hotseat_inset_px(&profile);
        assert!(inset >= profile.grid_gap_px(Orientation::Portrait));
        assert_eq!(
            plan.hotseat,
            HotseatPlan::Tablet {
                height: profile.metrics.hotseat_bar_height_px,
                padding: Insets::new(edge2 + inset, 0, edge2 + inset, edge2),
            }
        );
    }

    #[test]
    fn all_apps_indicator_scales_with_small_icons() {
        let config = GridConfig {
            page_indicator_height_px: 40,
            default_icon_size_dp: 128.0,
            ..GridConfig::default()
        };
        let profile = profile(config, DisplaySnapshot::uniform(Orientation::Portrait, 1080, 1920));
        let plan = LayoutPlan::for_profile(&profile);
        assert_eq!(plan.all_apps.page_indicator_height, 20);
        assert!(plan.all_apps.padding.bottom >= 0);
        assert_eq!(
            plan.all_apps.page_indicator_offset,
            profile.config().apps_page_indicator_offset_px
        );
    }

    #[test]
    fn cell_helpers_divide_evenly() {
        assert_eq!(calculate_cell_width(1000, 4), 250);
        assert_eq!(calculate_cell_height(999, 5), 199);
    }
}
