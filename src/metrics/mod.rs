use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters describing how often the controller recomputed its profile.
#[derive(Debug, Default, Clone)]
pub struct ProfileMetrics {
    resolutions: u64,
    scale_corrections: u64,
    notifications: u64,
    queued_reconfigurations: u64,
}

impl ProfileMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolution(&mut self, scale_corrected: bool) {
        self.resolutions = self.resolutions.saturating_add(1);
        if scale_corrected {
            self.scale_corrections = self.scale_corrections.saturating_add(1);
        }
    }

    pub fn record_notifications(&mut self, count: usize) {
        if count > 0 {
            self.notifications = self.notifications.saturating_add(count as u64);
        }
    }

    pub fn record_queued(&mut self, count: usize) {
        if count > 0 {
            self.queued_reconfigurations = self.queued_reconfigurations.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            resolutions: self.resolutions,
            scale_corrections: self.scale_corrections,
            notifications: self.notifications,
            queued_reconfigurations: self.queued_reconfigurations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub resolutions: u64,
    pub scale_corrections: u64,
    pub notifications: u64,
    pub queued_reconfigurations: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("resolutions".to_string(), json!(self.resolutions));
        map.insert("scale_corrections".to_string(), json!(self.scale_corrections));
        map.insert("notifications".to_string(), json!(self.notifications));
        map.insert(
            "queued_reconfigurations".to_string(),
            json!(self.queued_reconfigurations),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "profile_metrics", self.as_fields())
    }
}
