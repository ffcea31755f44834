//! Inverse-distance-weighted estimation of grid attributes.
//!
//! Each attribute is estimated on its own from the `k` reference profiles
//! nearest to the target screen size, weighted by `1 / distance^p`.

use super::reference::{ProfileAttribute, ReferenceProfile};

pub const DEFAULT_NEIGHBORS: usize = 3;
pub const DEFAULT_POWER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileInterpolator {
    neighbors: usize,
    power: f64,
}

impl Default for ProfileInterpolator {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            power: DEFAULT_POWER,
        }
    }
}

impl ProfileInterpolator {
    pub fn new(neighbors: usize, power: f64) -> Self {
        Self {
            neighbors: neighbors.max(1),
            power,
        }
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Estimate `attribute` at `(width_dp, height_dp)`.
    ///
    /// Returns `None` only for an empty table. An exact coordinate match
    /// returns that profile's value unchanged.
    pub fn interpolate(
        &self,
        width_dp: f32,
        height_dp: f32,
        attribute: ProfileAttribute,
        table: &[ReferenceProfile],
    ) -> Option<f32> {
        self.interpolate_with(width_dp, height_dp, table, |profile| {
            profile.value(attribute)
        })
    }

    pub fn interpolate_with<F>(
        &self,
        width_dp: f32,
        height_dp: f32,
        table: &[ReferenceProfile],
        value: F,
    ) -> Option<f32>
    where
        F: Fn(&ReferenceProfile) -> f32,
    {
        let nearest = self.nearest(width_dp, height_dp, table);
        let &(closest, first) = nearest.first()?;
        if closest == 0.0 {
            return Some(value(first));
        }

        let mut weights = 0.0_f64;
        let mut sum = 0.0_f64;
        for &(distance, profile) in &nearest {
            let weight = 1.0 / distance.powf(self.power);
            weights += weight;
            sum += weight * f64::from(value(profile));
        }

        Some((sum / weights) as f32)
    }

    /// Up to `k` profiles ordered by ascending distance from the target.
    /// Ties keep table order.
    pub fn nearest<'a>(
        &self,
        width_dp: f32,
        height_dp: f32,
        table: &'a [ReferenceProfile],
    ) -> Vec<(f64, &'a ReferenceProfile)> {
        let mut by_distance: Vec<_> = table
            .iter()
            .map(|profile| (distance(width_dp, height_dp, profile), profile))
            .collect();
        by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
        by_distance.truncate(self.neighbors);
        by_distance
    }
}

/// Estimate one attribute with the default neighbourhood (k = 3, p = 5).
pub fn interpolate(
    width_dp: f32,
    height_dp: f32,
    attribute: ProfileAttribute,
    table: &[ReferenceProfile],
) -> Option<f32> {
    ProfileInterpolator::default().interpolate(width_dp, height_dp, attribute, table)
}

fn distance(width_dp: f32, height_dp: f32, profile: &ReferenceProfile) -> f64 {
    let dx = f64::from(profile.width_dp) - f64::from(width_dp);
    let dy = f64::from(profile.height_dp) - f64::from(height_dp);
    (dx * dx + dy * dy).sqrt()
}
