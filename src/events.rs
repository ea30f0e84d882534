//! Generic event system for the explorer.
//!
//! Callers can subscribe to UI and data events via [`EventController`]. Each
//! event carries a set of [`EventKind`] flags (bitflags-style) so a single
//! occurrence can match multiple categories (e.g. a click that replaces a
//! sweep selection is both `SELECTION_CHANGED` and `CLICK`).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use crate::data::selection::SelectionEvent;
use crate::data::series::DisplayMode;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    /// A single (primary) click on the scatter plot.
    pub const CLICK: Self = Self(1 << 0);
    /// A sweep (box) selection finished on the scatter plot.
    pub const SWEEP: Self = Self(1 << 1);

    /// The active selection changed (click or sweep, including programmatic).
    pub const SELECTION_CHANGED: Self = Self(1 << 2);
    /// The active selection was cleared.
    pub const SELECTION_CLEARED: Self = Self(1 << 3);

    /// A fresh snapshot replaced the dataset / latent-point pair.
    pub const REGENERATED: Self = Self(1 << 4);

    /// The display mode (raw/mean/sigma) changed.
    pub const MODE_CHANGED: Self = Self(1 << 5);
    /// The projection inputs (grouping or filter) changed.
    pub const PROJECTION_CHANGED: Self = Self(1 << 6);

    /// All event kinds.
    pub const ALL: Self = Self(u64::MAX);

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::CLICK, "CLICK"),
            (EventKind::SWEEP, "SWEEP"),
            (EventKind::SELECTION_CHANGED, "SELECTION_CHANGED"),
            (EventKind::SELECTION_CLEARED, "SELECTION_CLEARED"),
            (EventKind::REGENERATED, "REGENERATED"),
            (EventKind::MODE_CHANGED, "MODE_CHANGED"),
            (EventKind::PROJECTION_CHANGED, "PROJECTION_CHANGED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ExplorerEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the explorer UI.
///
/// `kinds` is a bitflag set of [`EventKind`] categories; the optional fields
/// carry metadata relevant to the kinds that are set.
#[derive(Debug, Clone)]
pub struct ExplorerEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,

    /// The selection after the change, for selection events.
    pub selection: Option<SelectionEvent>,
    /// The display mode after the change, for mode events.
    pub mode: Option<DisplayMode>,
    /// Snapshot size (rows / points), for regeneration events.
    pub snapshot_len: Option<usize>,
}

impl ExplorerEvent {
    /// Create a new event with the given kinds; the controller stamps the
    /// timestamp on emission.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            selection: None,
            mode: None,
            snapshot_len: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &ExplorerEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ExplorerEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Controller that distributes explorer events to subscribers.
///
/// Attach it to [`ExplorerConfig`](crate::config::ExplorerConfig) before
/// launching the UI, then call [`subscribe`](Self::subscribe) to receive
/// events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ExplorerEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<ExplorerEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Called internally by the UI; public so embedding code can inject
    /// synthetic events. Subscribers whose channel has closed are dropped.
    pub fn emit(&self, mut event: ExplorerEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let click = EventKind::CLICK;
        let sweep = EventKind::SWEEP;
        let combined = click | sweep;
        assert!(combined.contains(click));
        assert!(combined.contains(sweep));
        assert!(combined.intersects(click));
        assert!(!EventKind::REGENERATED.intersects(click));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::SELECTION_CHANGED | EventKind::SELECTION_CLEARED);
        let evt = ExplorerEvent::new(EventKind::CLICK | EventKind::SELECTION_CHANGED);
        assert!(filter.matches(&evt));

        let evt2 = ExplorerEvent::new(EventKind::REGENERATED);
        assert!(!filter.matches(&evt2));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_regen = ctrl.subscribe(EventFilter::only(EventKind::REGENERATED));

        ctrl.emit(ExplorerEvent::new(EventKind::CLICK | EventKind::SELECTION_CHANGED));

        let got = rx_all.try_recv().expect("all-subscriber should see the click");
        assert!(got.kinds.contains(EventKind::CLICK));
        assert!(rx_regen.try_recv().is_err(), "regen filter must not see clicks");

        ctrl.emit(ExplorerEvent::new(EventKind::REGENERATED));
        assert!(rx_regen.try_recv().is_ok());
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", EventKind::CLICK), "CLICK");
        assert_eq!(
            format!("{}", EventKind::CLICK | EventKind::SWEEP),
            "CLICK|SWEEP"
        );
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
    }
}
