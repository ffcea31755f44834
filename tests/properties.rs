//! Property-based tests for interpolation, icon fitting and zone geometry.

use dynamic_grid::display::{DisplaySnapshot, Orientation};
use dynamic_grid::profile::{
    self, FitRequest, IconScaleSolver, ProfileAttribute, ProfileInterpolator,
    ProportionalTextMeasure, ReferenceProfile, builtin_profiles, interpolate,
};
use dynamic_grid::{DisplayDensity, GridConfig};
use proptest::prelude::*;

fn attribute() -> impl Strategy<Value = ProfileAttribute> {
    prop::sample::select(ProfileAttribute::ALL.to_vec())
}

fn value_range<'a>(
    neighbors: impl IntoIterator<Item = &'a ReferenceProfile>,
    attribute: ProfileAttribute,
) -> (f32, f32) {
    neighbors
        .into_iter()
        .map(|profile| profile.value(attribute))
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A target sitting exactly on a reference profile returns its value.
    #[test]
    fn exact_match_returns_reference_value(index in 0usize..11, attribute in attribute()) {
        let table = builtin_profiles();
        let probe = &table[index % table.len()];
        let value = interpolate(probe.width_dp, probe.height_dp, attribute, &table);
        prop_assert_eq!(value, Some(probe.value(attribute)));
    }

    /// A one-entry table yields that entry everywhere.
    #[test]
    fn single_reference_is_constant(
        w in 200.0f32..2000.0,
        h in 300.0f32..3000.0,
        rows in 3.0f32..8.0,
    ) {
        let table = vec![ReferenceProfile::new("only", 400.0, 700.0).with_grid(rows, 5.0)];
        let value = interpolate(w, h, ProfileAttribute::Rows, &table).unwrap();
        prop_assert!((value - rows).abs() < 1e-4, "{} != {}", value, rows);
    }

    /// Weighted averages never leave the range of the nearest neighbours.
    #[test]
    fn interpolation_stays_within_neighbour_bounds(
        w in 100.0f32..2500.0,
        h in 100.0f32..3500.0,
        attribute in attribute(),
    ) {
        let table = builtin_profiles();
        let nearest = ProfileInterpolator::default().nearest(w, h, &table);
        let (lo, hi) = value_range(nearest.iter().map(|&(_, profile)| profile), attribute);
        let value = interpolate(w, h, attribute, &table).unwrap();
        prop_assert!(value >= lo - 1e-3 && value <= hi + 1e-3, "{} outside [{}, {}]", value, lo, hi);
    }

    /// Less room never produces a larger icon scale.
    #[test]
    fn icon_scale_is_monotonic_in_available_height(
        icon in 40.0f32..110.0,
        rows in 3i32..10,
        a in 0i32..2500,
        b in 0i32..2500,
    ) {
        let measure = ProportionalTextMeasure::default();
        let solver = IconScaleSolver::new(DisplayDensity::default(), &measure);
        let fit = |height: i32| solver.fit(&FitRequest {
            icon_size_dp: icon,
            icon_text_size_sp: 14.0,
            drawable_padding_px: 4,
            rows,
            available_height_px: height,
            vertical_padding_px: 100,
        });
        let (small, large) = (fit(a.min(b)), fit(a.max(b)));
        prop_assert!(small.scale <= large.scale);
        prop_assert!(large.scale <= 1.0 && small.scale >= 0.0);
        for fit in [small, large] {
            if fit.used_height_px > fit.max_height_px as f32 {
                prop_assert_eq!(fit.drawable_padding_px, 0);
                prop_assert_eq!(fit.scale, fit.max_height_px.max(0) as f32 / fit.used_height_px);
            } else {
                prop_assert_eq!(fit.scale, 1.0);
                prop_assert_eq!(fit.drawable_padding_px, 4);
            }
        }
    }

    /// Portrait workspace padding is mirrored left to right.
    #[test]
    fn portrait_padding_is_symmetric(
        width in 480i32..2000,
        extra in 0i32..1500,
        tablet in any::<bool>(),
    ) {
        let config = GridConfig { is_tablet: tablet, ..GridConfig::default() };
        let display = DisplaySnapshot::uniform(Orientation::Portrait, width, width + extra);
        let resolved = profile::resolve(
            360.0,
            640.0,
            &builtin_profiles(),
            config,
            &display,
            &ProportionalTextMeasure::default(),
        )
        .unwrap();
        let padding = resolved.workspace_padding();
        prop_assert_eq!(padding.left, padding.right);
        if !tablet {
            prop_assert_eq!(
                resolved.workspace_page_spacing(Orientation::Portrait),
                2 * padding.left
            );
        }
        prop_assert!(resolved.scale() > 0.0 && resolved.scale() <= 1.0);
    }
}
