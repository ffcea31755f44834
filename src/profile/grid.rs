use serde::Serialize;

use crate::config::GridConfig;
use crate::error::{ProfileError, Result};

use super::interpolate::ProfileInterpolator;
use super::reference::{ProfileAttribute, ReferenceProfile};

/// Base grid values interpolated once for a target screen size.
///
/// These stay fixed for the life of a controller; configuration changes only
/// recompute the pixel metrics derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSpec {
    pub min_width_dp: f32,
    pub min_height_dp: f32,
    pub num_rows: i32,
    pub num_columns: i32,
    pub num_hotseat_icons: i32,
    /// Hotseat slot holding the all-apps button.
    pub hotseat_all_apps_rank: i32,
    pub icon_size_dp: f32,
    pub icon_text_size_sp: f32,
    pub hotseat_icon_size_dp: f32,
}

impl GridSpec {
    pub fn interpolate(
        min_width_dp: f32,
        min_height_dp: f32,
        table: &[ReferenceProfile],
        config: &GridConfig,
    ) -> Result<Self> {
        Self::interpolate_with(
            &ProfileInterpolator::default(),
            min_width_dp,
            min_height_dp,
            table,
            config,
        )
    }

    pub fn interpolate_with(
        interpolator: &ProfileInterpolator,
        min_width_dp: f32,
        min_height_dp: f32,
        table: &[ReferenceProfile],
        config: &GridConfig,
    ) -> Result<Self> {
        if table.is_empty() {
            return Err(ProfileError::EmptyReferenceTable);
        }
        if config.all_apps_enabled {
            for profile in table {
                let count = profile.hotseat_count().ok_or_else(|| {
                    ProfileError::FractionalHotseatCount {
                        name: profile.name.clone(),
                        count: profile.num_hotseat_icons,
                    }
                })?;
                ensure_odd_hotseat(&profile.name, count)?;
            }
        }

        let estimate = |attribute| {
            interpolator
                .interpolate(min_width_dp, min_height_dp, attribute, table)
                .ok_or(ProfileError::EmptyReferenceTable)
        };

        let num_rows = estimate(ProfileAttribute::Rows)?.round() as i32;
        let num_columns = estimate(ProfileAttribute::Columns)?.round() as i32;
        let num_hotseat_icons = estimate(ProfileAttribute::HotseatIcons)?.round() as i32;
        if config.all_apps_enabled {
            ensure_odd_hotseat("interpolated", num_hotseat_icons)?;
        }

        Ok(Self {
            min_width_dp,
            min_height_dp,
            num_rows,
            num_columns,
            num_hotseat_icons,
            hotseat_all_apps_rank: num_hotseat_icons / 2,
            icon_size_dp: estimate(ProfileAttribute::IconSize)?,
            icon_text_size_sp: estimate(ProfileAttribute::IconTextSize)?,
            hotseat_icon_size_dp: estimate(ProfileAttribute::HotseatIconSize)?,
        })
    }
}

fn ensure_odd_hotseat(name: &str, count: i32) -> Result<()> {
    if count % 2 == 0 {
        return Err(ProfileError::EvenHotseatCount {
            name: name.to_string(),
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::reference::builtin_profiles;

    #[test]
    fn exact_reference_is_copied() {
        let table = builtin_profiles();
        let spec = GridSpec::interpolate(406.0, 694.0, &table, &GridConfig::default()).unwrap();
        assert_eq!(spec.num_rows, 5);
        assert_eq!(spec.num_columns, 5);
        assert_eq!(spec.num_hotseat_icons, 5);
        assert_eq!(spec.hotseat_all_apps_rank, 2);
        assert_eq!(spec.icon_size_dp, 64.0);
    }

    #[test]
    fn even_reference_hotseat_is_rejected() {
        let table = vec![ReferenceProfile::new("even", 320.0, 480.0).with_hotseat(4.0, 48.0)];
        let err = GridSpec::interpolate(320.0, 480.0, &table, &GridConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::EvenHotseatCount { count: 4, .. }));
    }

    #[test]
    fn even_interpolated_hotseat_is_rejected() {
        let table = vec![
            ReferenceProfile::new("three", 300.0, 500.0).with_hotseat(3.0, 48.0),
            ReferenceProfile::new("five", 400.0, 500.0).with_hotseat(5.0, 48.0),
        ];
        let err = GridSpec::interpolate(350.0, 500.0, &table, &GridConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::EvenHotseatCount { count: 4, .. }));
    }

    #[test]
    fn fractional_reference_hotseat_is_rejected() {
        let table = vec![
            ReferenceProfile::new("whole", 300.0, 500.0).with_hotseat(5.0, 48.0),
            ReferenceProfile::new("half", 400.0, 500.0).with_hotseat(4.5, 48.0),
        ];
        let err = GridSpec::interpolate(300.0, 500.0, &table, &GridConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::FractionalHotseatCount { ref name, count } if name == "half" && count == 4.5
        ));
    }

    #[test]
    fn parity_is_ignored_without_all_apps() {
        let config = GridConfig {
            all_apps_enabled: false,
            ..GridConfig::default()
        };
        let table = vec![ReferenceProfile::new("even", 320.0, 480.0).with_hotseat(4.0, 48.0)];
        let spec = GridSpec::interpolate(320.0, 480.0, &table, &config).unwrap();
        assert_eq!(spec.num_hotseat_icons, 4);
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = GridSpec::interpolate(320.0, 480.0, &[], &GridConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyReferenceTable));
    }
}
