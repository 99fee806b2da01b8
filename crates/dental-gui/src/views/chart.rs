//! The dental chart surface.
//!
//! Owns the external record sequence and the resolved status mapping for
//! one chart instance. Mode, zoom, visibility flags and counts live in the
//! shared session.

use std::fmt;
use std::hash::Hash;

use egui::emath::RectTransform;
use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use dental_model::{
    ChartMode, SparseRecord, StatusMap, ToothPosition, aggregate_counts, next_status,
};

use crate::geometry::{self, CHART_SIZE};
use crate::state::{ChartSession, UnknownStatusPolicy};
use crate::theme;

/// What happened on the chart this frame.
#[derive(Debug, Clone)]
pub struct ChartResponse<T> {
    /// Tooth clicked this frame, with its status after the click.
    pub clicked: Option<(ToothPosition, T)>,
    /// Tooth under the pointer, with its current status.
    pub hovered: Option<(ToothPosition, T)>,
    /// Full resolved mapping after a click edit - the embedding
    /// application's hook for persisting changes.
    pub changed: Option<StatusMap<T>>,
}

impl<T> Default for ChartResponse<T> {
    fn default() -> Self {
        Self {
            clicked: None,
            hovered: None,
            changed: None,
        }
    }
}

/// Interactive dental chart widget.
pub struct DentalChart<T> {
    records: Vec<SparseRecord<T>>,
    statuses: StatusMap<T>,
    last_counted_mode: Option<ChartMode>,
}

impl<T: Clone + Eq + Hash + fmt::Debug> DentalChart<T> {
    /// Resolve the initial mapping from the record sequence and publish the
    /// first counts into the session.
    pub fn new(session: &ChartSession<T>, records: Vec<SparseRecord<T>>) -> Self {
        let statuses = StatusMap::resolve(&records, session.default_status());
        let mut chart = Self {
            records,
            statuses,
            last_counted_mode: None,
        };
        chart.report_unknown(session);
        chart.refresh_counts(session);
        chart
    }

    /// Replace the external record sequence.
    ///
    /// Compared by content; an identical sequence is a no-op. On change the
    /// mapping is reconciled, so local edits on positions the new records
    /// leave unspecified survive the refresh.
    pub fn set_records(&mut self, session: &ChartSession<T>, records: Vec<SparseRecord<T>>) {
        if records == self.records {
            return;
        }
        self.statuses = self.statuses.reconcile(&records, session.default_status());
        self.records = records;
        self.report_unknown(session);
        self.refresh_counts(session);
    }

    pub fn records(&self) -> &[SparseRecord<T>] {
        &self.records
    }

    /// The resolved mapping; total over all 52 positions.
    pub fn statuses(&self) -> &StatusMap<T> {
        &self.statuses
    }

    /// Advance one tooth to the next visible status.
    ///
    /// Returns the tooth's new status; with every status hidden this is the
    /// current status and nothing changes. Click handling in
    /// [`show`](Self::show) goes through here, and headless callers can use
    /// it directly.
    pub fn click(&mut self, session: &ChartSession<T>, position: ToothPosition) -> T {
        let current = self
            .statuses
            .status_or(position, session.default_status())
            .clone();
        let next = next_status(&current, &session.status_order(), &session.hidden_statuses());
        self.statuses.set(position, next.clone());
        self.refresh_counts(session);
        next
    }

    /// Render the chart and handle clicks and hovers.
    pub fn show(&mut self, ui: &mut Ui, session: &ChartSession<T>) -> ChartResponse<T> {
        let mut response = ChartResponse::default();
        let mode = session.mode();

        // The mode selector lives in the legend; notice a change here so
        // the published counts always match the active subset.
        if self.last_counted_mode != Some(mode) {
            self.refresh_counts(session);
        }

        let zoom = session.zoom();
        let (canvas, _) = ui.allocate_exact_size(CHART_SIZE * zoom, Sense::hover());
        let to_screen = RectTransform::from_to(Rect::from_min_size(Pos2::ZERO, CHART_SIZE), canvas);

        let default_status = session.default_status().clone();
        let mut clicked_position = None;

        for shape in geometry::chart_shapes() {
            if !mode.contains(shape.position) {
                continue;
            }
            let status = self
                .statuses
                .status_or(shape.position, &default_status)
                .clone();
            if session.is_hidden(&status) {
                continue;
            }

            let points: Vec<Pos2> = shape.outline.iter().map(|point| to_screen * *point).collect();
            let bounds = Rect::from_points(&points);
            let id = ui.id().with(("tooth", shape.position.number()));
            let tooth = ui
                .interact(bounds, id, Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand);

            let style = session.palette().style(&status);
            let stroke_color = style
                .and_then(|style| theme::css_color(&style.stroke))
                .unwrap_or(theme::colors::FALLBACK_STROKE);
            let fill = style.and_then(|style| theme::css_color(&style.fill));
            let width = if tooth.hovered() { 2.0 } else { 1.2 } * zoom;
            let stroke = Stroke::new(width, stroke_color);

            match fill {
                Some(fill) => ui.painter().add(Shape::convex_polygon(points, fill, stroke)),
                None => ui.painter().add(Shape::closed_line(points, stroke)),
            };

            ui.painter().text(
                to_screen * shape.center,
                Align2::CENTER_CENTER,
                shape.position.to_string(),
                FontId::proportional(6.5 * zoom),
                theme::colors::TOOTH_LABEL,
            );

            if tooth.hovered() {
                response.hovered = Some((shape.position, status.clone()));
            }
            if tooth.clicked() {
                clicked_position = Some(shape.position);
            }
        }

        if let Some(position) = clicked_position {
            let next = self.click(session, position);
            response.clicked = Some((position, next));
            response.changed = Some(self.statuses.clone());
        }

        response
    }

    fn refresh_counts(&mut self, session: &ChartSession<T>) {
        let mode = session.mode();
        session.set_counts(aggregate_counts(&self.statuses, mode));
        self.last_counted_mode = Some(mode);
    }

    fn report_unknown(&self, session: &ChartSession<T>) {
        if session.unknown_status_policy() != UnknownStatusPolicy::Warn {
            return;
        }
        let mut unknown: Vec<&T> = Vec::new();
        for (_, status) in self.statuses.iter() {
            if !session.palette().contains(status) && !unknown.contains(&status) {
                unknown.push(status);
            }
        }
        if !unknown.is_empty() {
            tracing::warn!(
                "records reference statuses missing from the palette: {unknown:?}"
            );
        }
    }
}
