//! Owner of the current resolved profile.
//!
//! The controller starts uninitialized and becomes resolved on the first
//! [`ProfileController::apply_configuration`]. Every later configuration
//! replaces the whole profile, then notifies observers synchronously in
//! registration order, once each.
//!
//! Observers cannot reach the controller while being notified. To react to a
//! profile with another configuration change they queue it on their
//! [`ProfileContext`]; queued changes run first-in first-out, each as a full
//! resolve-and-notify cycle, after the current round completes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::config::GridConfig;
use crate::display::{DisplayProvider, DisplaySnapshot};
use crate::error::{ProfileError, Result};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{MetricSnapshot, ProfileMetrics};
use crate::profile::{
    GridSpec, ProportionalTextMeasure, ReferenceProfile, ResolvedProfile, TextMeasure,
};
use crate::registry::{ZoneKind, ZoneRegistry};

const LOG_TARGET: &str = "grid::controller";

/// Controller knobs.
#[derive(Clone)]
pub struct ControllerSettings {
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Metrics accumulator, shared with whoever wants to read it.
    pub metrics: Option<Arc<Mutex<ProfileMetrics>>>,
    /// Longest chain of observer-queued reconfigurations allowed after the
    /// caller's own.
    pub max_cascade_depth: usize,
    /// Target used when logging metrics snapshots.
    pub metrics_target: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            max_cascade_depth: 8,
            metrics_target: "grid::controller.metrics".to_string(),
        }
    }
}

impl ControllerSettings {
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(ProfileMetrics::new())));
        }
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<ProfileMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Handle returned by [`ProfileController::register_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Why an observer is being called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyReason {
    /// Immediate call made on registration.
    Registered,
    /// A configuration change produced a new profile.
    Reconfigured,
}

/// View handed to an observer during notification.
pub struct ProfileContext<'a> {
    profile: &'a Arc<ResolvedProfile>,
    reason: NotifyReason,
    changed_zones: &'a [ZoneKind],
    requests: Vec<DisplaySnapshot>,
}

impl<'a> ProfileContext<'a> {
    fn new(
        profile: &'a Arc<ResolvedProfile>,
        reason: NotifyReason,
        changed_zones: &'a [ZoneKind],
    ) -> Self {
        Self {
            profile,
            reason,
            changed_zones,
            requests: Vec::new(),
        }
    }

    pub fn profile(&self) -> &Arc<ResolvedProfile> {
        self.profile
    }

    pub fn reason(&self) -> NotifyReason {
        self.reason
    }

    /// Zones whose rectangle changed in the transition that produced the
    /// profile.
    pub fn changed_zones(&self) -> &[ZoneKind] {
        self.changed_zones
    }

    /// Queue a configuration change to run after this notification round.
    pub fn request_configuration(&mut self, display: DisplaySnapshot) {
        self.requests.push(display);
    }

    fn into_requests(self) -> Vec<DisplaySnapshot> {
        self.requests
    }
}

/// Receives every new profile.
pub trait ProfileObserver {
    fn name(&self) -> &str {
        "profile_observer"
    }

    fn on_profile_changed(&mut self, ctx: &mut ProfileContext<'_>);
}

impl<F> ProfileObserver for F
where
    F: FnMut(&mut ProfileContext<'_>),
{
    fn on_profile_changed(&mut self, ctx: &mut ProfileContext<'_>) {
        self(ctx)
    }
}

/// Controller lifecycle state.
#[derive(Debug, Clone)]
pub enum ProfileState {
    Uninitialized,
    Resolved(Arc<ResolvedProfile>),
}

struct ObserverEntry {
    id: ObserverId,
    observer: Box<dyn ProfileObserver>,
}

pub struct ProfileController {
    grid: GridSpec,
    config: Arc<GridConfig>,
    measure: Box<dyn TextMeasure>,
    state: ProfileState,
    observers: Vec<ObserverEntry>,
    next_observer: u64,
    zones: ZoneRegistry,
    changed_zones: Vec<ZoneKind>,
    settings: ControllerSettings,
}

impl ProfileController {
    /// Interpolate the base grid for the target size. The controller stays
    /// uninitialized until the first configuration is applied.
    pub fn new(
        min_width_dp: f32,
        min_height_dp: f32,
        table: &[ReferenceProfile],
        config: GridConfig,
    ) -> Result<Self> {
        let grid = GridSpec::interpolate(min_width_dp, min_height_dp, table, &config)?;
        Ok(Self {
            grid,
            config: Arc::new(config),
            measure: Box::new(ProportionalTextMeasure::default()),
            state: ProfileState::Uninitialized,
            observers: Vec::new(),
            next_observer: 0,
            zones: ZoneRegistry::new(),
            changed_zones: Vec::new(),
            settings: ControllerSettings::default(),
        })
    }

    /// Construct and resolve against `display` in one step.
    pub fn resolve<D>(
        min_width_dp: f32,
        min_height_dp: f32,
        table: &[ReferenceProfile],
        config: GridConfig,
        display: &D,
    ) -> Result<Self>
    where
        D: DisplayProvider + ?Sized,
    {
        let mut controller = Self::new(min_width_dp, min_height_dp, table, config)?;
        controller.apply_configuration(display)?;
        Ok(controller)
    }

    /// Replace the label measurement used from the next resolution on.
    pub fn with_text_measure<M>(mut self, measure: M) -> Self
    where
        M: TextMeasure + 'static,
    {
        self.measure = Box::new(measure);
        self
    }

    pub fn with_settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings_mut(&mut self) -> &mut ControllerSettings {
        &mut self.settings
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ProfileState::Resolved(_))
    }

    /// Current profile. Re-fetch after every configuration change.
    pub fn current(&self) -> Option<Arc<ResolvedProfile>> {
        match &self.state {
            ProfileState::Resolved(profile) => Some(Arc::clone(profile)),
            ProfileState::Uninitialized => None,
        }
    }

    /// Zones moved by the most recent resolution.
    pub fn changed_zones(&self) -> &[ZoneKind] {
        &self.changed_zones
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Resolve a new profile for `display`, replace the current one and
    /// notify observers, then run any reconfigurations they queued.
    pub fn apply_configuration<D>(&mut self, display: &D) -> Result<Arc<ResolvedProfile>>
    where
        D: DisplayProvider + ?Sized,
    {
        let mut pending = VecDeque::new();
        let profile = self.run_cycle(display.snapshot(), 0, &mut pending)?;
        let profile = self.drain_queue(pending, profile)?;
        self.emit_metrics_snapshot();
        Ok(profile)
    }

    /// Add an observer. If a profile is already resolved the observer is
    /// called once right away with [`NotifyReason::Registered`].
    pub fn register_observer<O>(&mut self, observer: O) -> Result<ObserverId>
    where
        O: ProfileObserver + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        let mut entry = ObserverEntry {
            id,
            observer: Box::new(observer),
        };

        let mut requests = Vec::new();
        let current = self.current();
        if let Some(profile) = &current {
            let mut ctx =
                ProfileContext::new(profile, NotifyReason::Registered, &self.changed_zones);
            entry.observer.on_profile_changed(&mut ctx);
            requests = ctx.into_requests();
            self.record_metrics(|metrics| metrics.record_notifications(1));
        }

        self.log_event(
            LogLevel::Debug,
            "observer_registered",
            [
                json_str("observer", entry.observer.name()),
                json_kv("observers", json!(self.observers.len() + 1)),
            ],
        );
        self.observers.push(entry);

        if let Some(profile) = current {
            if !requests.is_empty() {
                self.queue_requests(requests.len());
                let pending = requests.into_iter().map(|request| (request, 1)).collect();
                self.drain_queue(pending, profile)?;
                self.emit_metrics_snapshot();
            }
        }
        Ok(id)
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        let Some(index) = self.observers.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let entry = self.observers.remove(index);
        self.log_event(
            LogLevel::Debug,
            "observer_unregistered",
            [
                json_str("observer", entry.observer.name()),
                json_kv("observers", json!(self.observers.len())),
            ],
        );
        true
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.settings.metrics.as_ref()?;
        metrics.lock().ok().map(|guard| guard.snapshot())
    }

    /// Run queued requests in order until none are left. Each entry carries
    /// its chain depth; the caller's own configuration is depth 0.
    fn drain_queue(
        &mut self,
        mut pending: VecDeque<(DisplaySnapshot, usize)>,
        mut latest: Arc<ResolvedProfile>,
    ) -> Result<Arc<ResolvedProfile>> {
        while let Some((snapshot, depth)) = pending.pop_front() {
            latest = self.run_cycle(snapshot, depth, &mut pending)?;
        }
        Ok(latest)
    }

    /// One resolve and notify round. Requests made by observers are queued
    /// one level deeper than the request that produced the profile.
    fn run_cycle(
        &mut self,
        snapshot: DisplaySnapshot,
        depth: usize,
        pending: &mut VecDeque<(DisplaySnapshot, usize)>,
    ) -> Result<Arc<ResolvedProfile>> {
        let limit = self.settings.max_cascade_depth;
        if depth > limit {
            self.log_event(
                LogLevel::Error,
                "reconfiguration_cascade",
                [json_kv("limit", json!(limit)), json_kv("depth", json!(depth))],
            );
            return Err(ProfileError::ReconfigurationCascade { limit });
        }

        let profile = self.resolve_snapshot(&snapshot)?;
        let requests = self.notify_all(&profile);
        if !requests.is_empty() {
            self.queue_requests(requests.len());
            pending.extend(requests.into_iter().map(|request| (request, depth + 1)));
        }
        Ok(profile)
    }

    fn resolve_snapshot(&mut self, snapshot: &DisplaySnapshot) -> Result<Arc<ResolvedProfile>> {
        let profile = Arc::new(ResolvedProfile::compute(
            &self.grid,
            Arc::clone(&self.config),
            snapshot,
            self.measure.as_ref(),
        )?);

        let unchanged = match &self.state {
            ProfileState::Resolved(previous) => previous.fingerprint == profile.fingerprint,
            ProfileState::Uninitialized => false,
        };

        self.zones.sync_layout(&profile.zones());
        self.changed_zones = self
            .zones
            .take_dirty()
            .into_iter()
            .map(|(zone, _)| zone)
            .collect();
        self.state = ProfileState::Resolved(Arc::clone(&profile));

        let corrected = profile.fit.is_corrected();
        self.record_metrics(|metrics| metrics.record_resolution(corrected));

        let changed: Vec<&str> = self.changed_zones.iter().map(|zone| zone.as_str()).collect();
        self.log_event(
            LogLevel::Info,
            "profile_resolved",
            [
                json_str("orientation", format!("{:?}", profile.orientation())),
                json_kv("rows", json!(profile.num_rows())),
                json_kv("columns", json!(profile.num_columns())),
                json_kv("available_width_px", json!(profile.available_width_px)),
                json_kv("available_height_px", json!(profile.available_height_px)),
                json_kv("scale", json!(profile.scale())),
                json_str("fingerprint", profile.fingerprint.to_hex().as_str()),
                json_kv("unchanged", json!(unchanged)),
                json_kv("changed_zones", json!(changed)),
            ],
        );
        if corrected {
            self.log_event(
                LogLevel::Debug,
                "scale_corrected",
                [
                    json_kv("used_height_px", json!(profile.fit.used_height_px)),
                    json_kv("max_height_px", json!(profile.fit.max_height_px)),
                    json_kv("scale", json!(profile.scale())),
                ],
            );
        }

        Ok(profile)
    }

    fn notify_all(&mut self, profile: &Arc<ResolvedProfile>) -> Vec<DisplaySnapshot> {
        let changed_zones = &self.changed_zones;
        let mut requests = Vec::new();
        for entry in self.observers.iter_mut() {
            let mut ctx = ProfileContext::new(profile, NotifyReason::Reconfigured, changed_zones);
            entry.observer.on_profile_changed(&mut ctx);
            requests.extend(ctx.into_requests());
        }
        let notified = self.observers.len();
        self.record_metrics(|metrics| metrics.record_notifications(notified));
        requests
    }

    fn queue_requests(&mut self, count: usize) {
        self.record_metrics(|metrics| metrics.record_queued(count));
        self.log_event(
            LogLevel::Debug,
            "reconfiguration_queued",
            [json_kv("count", json!(count))],
        );
    }

    fn record_metrics(&self, update: impl FnOnce(&mut ProfileMetrics)) {
        if let Some(metrics) = self.settings.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }

    fn emit_metrics_snapshot(&self) {
        if let (Some(logger), Some(snapshot)) =
            (self.settings.logger.as_ref(), self.metrics_snapshot())
        {
            let _ = logger.log_event(snapshot.to_log_event(&self.settings.metrics_target));
        }
    }

    fn log_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.settings.logger.as_ref() {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::display::Orientation;
    use crate::logging::MemorySink;
    use crate::profile::builtin_profiles;

    fn portrait() -> DisplaySnapshot {
        DisplaySnapshot::uniform(Orientation::Portrait, 1080, 1920)
    }

    fn landscape() -> DisplaySnapshot {
        DisplaySnapshot::uniform(Orientation::Landscape, 1920, 1080)
    }

    fn controller() -> ProfileController {
        ProfileController::new(360.0, 640.0, &builtin_profiles(), GridConfig::default()).unwrap()
    }

    #[test]
    fn starts_uninitialized() {
        let controller = controller();
        assert!(!controller.is_resolved());
        assert!(controller.current().is_none());
    }

    #[test]
    fn registration_before_resolution_waits_for_first_profile() {
        let mut controller = controller();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        controller
            .register_observer(move |ctx: &mut ProfileContext<'_>| {
                seen.borrow_mut().push(ctx.reason());
            })
            .unwrap();
        assert!(calls.borrow().is_empty());

        controller.apply_configuration(&portrait()).unwrap();
        assert_eq!(*calls.borrow(), vec![NotifyReason::Reconfigured]);
    }

    #[test]
    fn late_registration_fires_immediately() {
        let mut controller = controller();
        controller.apply_configuration(&portrait()).unwrap();

        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        controller
            .register_observer(move |ctx: &mut ProfileContext<'_>| {
                seen.borrow_mut().push((ctx.reason(), ctx.profile().is_landscape));
            })
            .unwrap();
        assert_eq!(*calls.borrow(), vec![(NotifyReason::Registered, false)]);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut controller = controller();
        let id = controller
            .register_observer(|_: &mut ProfileContext<'_>| {})
            .unwrap();
        assert!(controller.unregister_observer(id));
        assert!(!controller.unregister_observer(id));
        assert_eq!(controller.observer_count(), 0);
    }

    #[test]
    fn changed_zones_track_rotation() {
        let mut controller = controller();
        controller.apply_configuration(&portrait()).unwrap();
        assert_eq!(controller.changed_zones().len(), 4);

        controller.apply_configuration(&portrait()).unwrap();
        assert!(controller.changed_zones().is_empty());

        controller.apply_configuration(&landscape()).unwrap();
        assert!(controller.changed_zones().contains(&ZoneKind::Hotseat));
    }

    #[test]
    fn logs_and_metrics_follow_resolutions() {
        let sink = MemorySink::new();
        let mut settings = ControllerSettings {
            logger: Some(Logger::new(sink.clone())),
            ..ControllerSettings::default()
        };
        settings.enable_metrics();
        let mut controller = controller().with_settings(settings);

        controller.apply_configuration(&portrait()).unwrap();
        controller.apply_configuration(&landscape()).unwrap();

        let messages = sink.messages();
        assert_eq!(
            messages.iter().filter(|m| *m == "profile_resolved").count(),
            2
        );
        assert!(messages.iter().any(|m| m == "profile_metrics"));
        assert_eq!(controller.metrics_snapshot().unwrap().resolutions, 2);
    }
}
