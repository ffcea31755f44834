use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::geometry::Rect;

/// Named rectangular regions of the available screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Search,
    Workspace,
    Hotseat,
    OverviewBar,
}

impl ZoneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Search => "search",
            ZoneKind::Workspace => "workspace",
            ZoneKind::Hotseat => "hotseat",
            ZoneKind::OverviewBar => "overview_bar",
        }
    }
}

/// Last known rectangle per zone, with change tracking across resolutions.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    entries: HashMap<ZoneKind, Rect>,
    dirty: HashSet<ZoneKind>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record freshly solved zones. New or moved zones become dirty; zones
    /// missing from `solved` are forgotten.
    pub fn sync_layout(&mut self, solved: &HashMap<ZoneKind, Rect>) {
        use std::collections::hash_map::Entry;

        for (&zone, &rect) in solved {
            match self.entries.entry(zone) {
                Entry::Occupied(mut entry) => {
                    if *entry.get() != rect {
                        entry.insert(rect);
                        self.dirty.insert(zone);
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(rect);
                    self.dirty.insert(zone);
                }
            }
        }

        self.entries.retain(|zone, _| solved.contains_key(zone));
        self.dirty.retain(|zone| solved.contains_key(zone));
    }

    /// Drain dirty zones in a stable order.
    pub fn take_dirty(&mut self) -> Vec<(ZoneKind, Rect)> {
        let mut zones: Vec<_> = self.dirty.drain().collect();
        zones.sort();
        zones
            .into_iter()
            .filter_map(|zone| self.entries.get(&zone).map(|rect| (zone, *rect)))
            .collect()
    }

    pub fn rect_of(&self, zone: ZoneKind) -> Option<Rect> {
        self.entries.get(&zone).copied()
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}
