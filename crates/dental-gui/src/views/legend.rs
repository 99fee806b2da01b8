//! Legend: the palette in definition order, with visibility toggles,
//! per-status counts and the dentition mode selector.

use std::hash::Hash;

use egui::{CornerRadius, CursorIcon, RichText, Sense, Stroke, StrokeKind, Ui, Vec2};

use dental_model::ChartMode;

use crate::state::ChartSession;
use crate::theme::{self, spacing};

/// What the legend changed this frame.
#[derive(Debug, Clone)]
pub struct LegendResponse<T> {
    /// Status whose visibility flag was flipped.
    pub toggled: Option<T>,
    /// New dentition mode if the selector changed it.
    pub mode_changed: Option<ChartMode>,
}

impl<T> Default for LegendResponse<T> {
    fn default() -> Self {
        Self {
            toggled: None,
            mode_changed: None,
        }
    }
}

/// Legend widget.
pub struct Legend {
    title: String,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            title: "Legend".to_string(),
        }
    }
}

impl Legend {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the legend; toggles and mode changes are applied to the
    /// session directly and reported in the response.
    pub fn show<T: Clone + Eq + Hash>(
        &self,
        ui: &mut Ui,
        session: &ChartSession<T>,
    ) -> LegendResponse<T> {
        let mut response = LegendResponse::default();

        ui.horizontal(|ui| {
            ui.strong(&self.title);
            ui.add_space(spacing::SM);

            let previous = session.mode();
            let mut mode = previous;
            egui::ComboBox::from_id_salt("dental_chart_mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for candidate in ChartMode::all() {
                        ui.selectable_value(&mut mode, *candidate, candidate.label());
                    }
                });
            if mode != previous {
                session.set_mode(mode);
                response.mode_changed = Some(mode);
            }
        });

        ui.add_space(spacing::XS);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = spacing::MD;

            for entry in session.palette().entries() {
                let hidden = session.is_hidden(&entry.status);
                let count = session.count(&entry.status);

                let item = ui
                    .horizontal(|ui| {
                        let (swatch, swatch_response) =
                            ui.allocate_exact_size(Vec2::splat(12.0), Sense::click());
                        let fill = theme::css_color(&entry.style.fill)
                            .unwrap_or(theme::colors::UNFILLED);
                        let stroke_color = theme::css_color(&entry.style.stroke)
                            .unwrap_or(theme::colors::FALLBACK_STROKE);
                        ui.painter().rect_filled(swatch, CornerRadius::same(3), fill);
                        ui.painter().rect_stroke(
                            swatch,
                            CornerRadius::same(3),
                            Stroke::new(1.5, stroke_color),
                            StrokeKind::Inside,
                        );

                        // Missing counts display as 0.
                        let mut text =
                            RichText::new(format!("{} ({count})", entry.label)).size(13.0);
                        if hidden {
                            text = text.strikethrough().weak();
                        }
                        let label_response = ui.add(egui::Label::new(text).sense(Sense::click()));
                        swatch_response.union(label_response)
                    })
                    .inner
                    .on_hover_cursor(CursorIcon::PointingHand);

                if item.clicked() {
                    session.toggle_status_visibility(&entry.status);
                    response.toggled = Some(entry.status.clone());
                }
            }
        });

        response
    }
}
