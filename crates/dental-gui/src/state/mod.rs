//! Shared chart state
//!
//! One [`ChartSession`] per chart instance, cloned into every sibling
//! widget (chart, legend, zoom controls) so they read and write the same
//! state without prop threading.

mod chart_state;

pub use chart_state::{ChartConfig, ChartSession, ChartState, UnknownStatusPolicy};
