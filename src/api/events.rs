use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Granularity;

/// Event emitted on every granularity change, repeated values included.
pub const BIN_EVENT: &str = "bin";

/// Opaque handle returned by `EventRegistry::on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

/// Read-only chart snapshot handed to bin listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinChartContext {
    pub chart_id: String,
    pub previous_granularity: Granularity,
    pub selected_granularity: Granularity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinEvent {
    pub chart: BinChartContext,
    pub granularity: Granularity,
}

type Listener<P> = Box<dyn FnMut(&P)>;

/// Named synchronous observer registry.
///
/// Listeners of one event run in registration order. `IndexMap` keeps event
/// names in first-registration order for stable introspection.
pub struct EventRegistry<P> {
    listeners: IndexMap<String, SmallVec<[(ListenerId, Listener<P>); 2]>>,
    next_id: u64,
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self {
            listeners: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<P> std::fmt::Debug for EventRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.listeners
                    .iter()
                    .map(|(event, entries)| (event, entries.len())),
            )
            .finish()
    }
}

impl<P> EventRegistry<P> {
    pub fn on(&mut self, event: &str, listener: impl FnMut(&P) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event.to_owned())
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` when it was registered for `event`.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(entries) = self.listeners.get_mut(event) else {
            return false;
        };
        let Some(position) = entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            return false;
        };
        entries.remove(position);
        true
    }

    /// Invokes every listener of `event` and returns how many ran.
    pub fn emit(&mut self, event: &str, payload: &P) -> usize {
        let Some(entries) = self.listeners.get_mut(event) else {
            return 0;
        };
        for (_, listener) in entries.iter_mut() {
            listener(payload);
        }
        entries.len()
    }

    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, |entries| entries.len())
    }

    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.listeners.keys().map(String::as_str)
    }
}
