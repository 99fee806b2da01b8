//! Zoom controls: in, out, reset.
//!
//! Clamping to `[min_zoom, max_zoom]` happens here; the shared state itself
//! stores whatever it is given.

use std::hash::Hash;

use egui::Ui;

use crate::state::ChartSession;

/// Zoom control widget.
#[derive(Debug, Clone, Copy)]
pub struct ZoomControls {
    step: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Default for ZoomControls {
    fn default() -> Self {
        Self {
            step: 0.1,
            min_zoom: 0.5,
            max_zoom: 2.0,
        }
    }
}

impl ZoomControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_range(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Increase zoom by one step, clamped to the maximum.
    pub fn zoom_in<T: Clone + Eq + Hash>(&self, session: &ChartSession<T>) -> f32 {
        let zoom = (session.zoom() + self.step).min(self.max_zoom);
        session.set_zoom(zoom);
        zoom
    }

    /// Decrease zoom by one step, clamped to the minimum.
    pub fn zoom_out<T: Clone + Eq + Hash>(&self, session: &ChartSession<T>) -> f32 {
        let zoom = (session.zoom() - self.step).max(self.min_zoom);
        session.set_zoom(zoom);
        zoom
    }

    /// Reset zoom to 100%.
    pub fn reset<T: Clone + Eq + Hash>(&self, session: &ChartSession<T>) -> f32 {
        session.set_zoom(1.0);
        1.0
    }

    /// Render the three buttons; returns the new zoom when one was clicked.
    pub fn show<T: Clone + Eq + Hash>(
        &self,
        ui: &mut Ui,
        session: &ChartSession<T>,
    ) -> Option<f32> {
        let mut changed = None;
        ui.horizontal(|ui| {
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                changed = Some(self.zoom_in(session));
            }
            if ui.button("−").on_hover_text("Zoom out").clicked() {
                changed = Some(self.zoom_out(session));
            }
            if ui.button("⟳").on_hover_text("Reset zoom").clicked() {
                changed = Some(self.reset(session));
            }
        });
        changed
    }
}
