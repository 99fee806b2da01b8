//! The per-session shared state and its handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use dental_model::{ChartError, ChartMode, StatusPalette};

// ============================================================================
// Session Configuration
// ============================================================================

/// What to do with statuses that appear in records or visibility toggles but
/// are missing from the palette.
///
/// Unknown statuses are never an error: they participate in counting and
/// cycling, and rendering falls back to a neutral style. The policy only
/// controls whether they are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownStatusPolicy {
    /// Accept silently.
    #[default]
    Accept,
    /// Accept, but log a warning naming the unknown statuses.
    Warn,
}

/// Configuration for a chart session.
///
/// The palette is the one immutable input: its definition order fixes the
/// default status (first entry) and the click cycle order for the whole
/// session.
#[derive(Debug, Clone)]
pub struct ChartConfig<T> {
    pub palette: StatusPalette<T>,
    pub default_mode: ChartMode,
    pub default_zoom: f32,
    pub default_hidden: HashMap<T, bool>,
    pub unknown_status_policy: UnknownStatusPolicy,
}

impl<T: Clone + Eq + Hash> ChartConfig<T> {
    pub fn new(palette: StatusPalette<T>) -> Self {
        Self {
            palette,
            default_mode: ChartMode::default(),
            default_zoom: 1.0,
            default_hidden: HashMap::new(),
            unknown_status_policy: UnknownStatusPolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: ChartMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.default_zoom = zoom;
        self
    }

    pub fn with_hidden(mut self, hidden: HashMap<T, bool>) -> Self {
        self.default_hidden = hidden;
        self
    }

    pub fn with_unknown_status_policy(mut self, policy: UnknownStatusPolicy) -> Self {
        self.unknown_status_policy = policy;
        self
    }
}

// ============================================================================
// Shared State
// ============================================================================

/// Cross-widget chart state: mode, zoom, visibility flags and the latest
/// computed counts.
///
/// Counts are derived data; they are replaced wholesale by whichever widget
/// last ran the aggregator, never edited in place.
#[derive(Debug)]
pub struct ChartState<T> {
    mode: ChartMode,
    zoom: f32,
    hidden_statuses: HashMap<T, bool>,
    counts: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> ChartState<T> {
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Store a zoom factor as-is.
    ///
    /// Bounds are the calling control's responsibility; see
    /// [`ZoomControls`](crate::views::ZoomControls).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    pub fn is_hidden(&self, status: &T) -> bool {
        self.hidden_statuses.get(status).copied().unwrap_or(false)
    }

    pub fn hidden_statuses(&self) -> &HashMap<T, bool> {
        &self.hidden_statuses
    }

    /// Replace all visibility flags at once.
    pub fn set_hidden_statuses(&mut self, hidden: HashMap<T, bool>) {
        self.hidden_statuses = hidden;
    }

    /// Flip the visibility flag of one status.
    ///
    /// The status is not checked against the palette; toggling an unknown
    /// status is accepted and simply never displays.
    pub fn toggle_status_visibility(&mut self, status: &T) {
        let flag = self.hidden_statuses.entry(status.clone()).or_insert(false);
        *flag = !*flag;
    }

    /// Count for one status, 0 when absent.
    pub fn count(&self, status: &T) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<T, usize> {
        &self.counts
    }

    /// Replace the counts wholesale.
    pub fn set_counts(&mut self, counts: HashMap<T, usize>) {
        self.counts = counts;
    }
}

// ============================================================================
// Session Handle
// ============================================================================

/// Shared handle to one chart session.
///
/// Clone the handle into each sibling widget; clones share the same
/// underlying state. The palette and the unknown-status policy are fixed at
/// creation, everything else mutates through the methods below. All access
/// is single-threaded (egui's update loop), so mutations are serialized by
/// construction.
pub struct ChartSession<T> {
    palette: Rc<StatusPalette<T>>,
    default_status: T,
    unknown_status_policy: UnknownStatusPolicy,
    state: Rc<RefCell<ChartState<T>>>,
}

impl<T> Clone for ChartSession<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            palette: Rc::clone(&self.palette),
            default_status: self.default_status.clone(),
            unknown_status_policy: self.unknown_status_policy,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone + Eq + Hash> ChartSession<T> {
    /// Create a session from a config.
    ///
    /// Fails with [`ChartError::EmptyPalette`] when the palette has no
    /// entries - without a first entry there is no default status, so the
    /// session cannot exist.
    pub fn new(config: ChartConfig<T>) -> Result<Self, ChartError> {
        let Some(default_status) = config.palette.default_status().cloned() else {
            return Err(ChartError::EmptyPalette);
        };
        let state = ChartState {
            mode: config.default_mode,
            zoom: config.default_zoom,
            hidden_statuses: config.default_hidden,
            counts: HashMap::new(),
        };
        Ok(Self {
            palette: Rc::new(config.palette),
            default_status,
            unknown_status_policy: config.unknown_status_policy,
            state: Rc::new(RefCell::new(state)),
        })
    }

    pub fn palette(&self) -> &StatusPalette<T> {
        &self.palette
    }

    /// The default status: the palette's first entry.
    pub fn default_status(&self) -> &T {
        &self.default_status
    }

    /// Cycle order: the palette's definition order.
    pub fn status_order(&self) -> Vec<T> {
        self.palette.status_order()
    }

    pub fn unknown_status_policy(&self) -> UnknownStatusPolicy {
        self.unknown_status_policy
    }

    pub fn mode(&self) -> ChartMode {
        self.state.borrow().mode()
    }

    pub fn set_mode(&self, mode: ChartMode) {
        self.state.borrow_mut().set_mode(mode);
    }

    pub fn zoom(&self) -> f32 {
        self.state.borrow().zoom()
    }

    /// Store a zoom factor as-is (unclamped, see [`ChartState::set_zoom`]).
    pub fn set_zoom(&self, zoom: f32) {
        self.state.borrow_mut().set_zoom(zoom);
    }

    pub fn is_hidden(&self, status: &T) -> bool {
        self.state.borrow().is_hidden(status)
    }

    /// Snapshot of all visibility flags.
    pub fn hidden_statuses(&self) -> HashMap<T, bool> {
        self.state.borrow().hidden_statuses().clone()
    }

    pub fn set_hidden_statuses(&self, hidden: HashMap<T, bool>) {
        self.state.borrow_mut().set_hidden_statuses(hidden);
    }

    pub fn toggle_status_visibility(&self, status: &T) {
        self.state.borrow_mut().toggle_status_visibility(status);
    }

    /// Count for one status, 0 when absent.
    pub fn count(&self, status: &T) -> usize {
        self.state.borrow().count(status)
    }

    /// Snapshot of the current counts.
    pub fn counts(&self) -> HashMap<T, usize> {
        self.state.borrow().counts().clone()
    }

    pub fn set_counts(&self, counts: HashMap<T, usize>) {
        self.state.borrow_mut().set_counts(counts);
    }
}
