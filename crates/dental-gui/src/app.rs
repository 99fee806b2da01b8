//! Demo application: a chart, legend and zoom controls sharing one session.

use dental_model::{SparseRecord, StatusPalette, StatusStyle, ToothPosition};

use crate::state::{ChartConfig, ChartSession, UnknownStatusPolicy};
use crate::theme::spacing;
use crate::views::{DentalChart, Legend, ZoomControls};

/// Main application struct
pub struct DentalApp {
    session: ChartSession<String>,
    chart: DentalChart<String>,
    legend: Legend,
    zoom_controls: ZoomControls,
}

impl DentalApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ChartConfig::new(demo_palette())
            .with_unknown_status_policy(UnknownStatusPolicy::Warn);
        let session = ChartSession::new(config).expect("demo palette is non-empty");
        let chart = DentalChart::new(&session, demo_records());

        Self {
            session,
            chart,
            legend: Legend::new("Dental Chart Studio"),
            zoom_controls: ZoomControls::new(),
        }
    }
}

impl eframe::App for DentalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                ui.add_space(spacing::MD);

                let response = self.chart.show(ui, &self.session);

                ui.add_space(spacing::LG);
                ui.vertical(|ui| {
                    ui.add_space(spacing::XL);
                    self.legend.show(ui, &self.session);
                    ui.add_space(spacing::MD);
                    self.zoom_controls.show(ui, &self.session);
                });

                if let Some((position, status)) = &response.clicked {
                    tracing::info!("tooth {position} set to {status}");
                }
                if let Some(mapping) = &response.changed {
                    // The embedding application would persist this mapping.
                    tracing::debug!("chart data changed, {} entries", mapping.len());
                }
            });
        });
    }
}

fn demo_palette() -> StatusPalette<String> {
    StatusPalette::new()
        .with_status("healthy".to_string(), StatusStyle::outline("#4CAF50"), "Healthy")
        .with_status("decayed".to_string(), StatusStyle::outline("#B71C1C"), "Decayed")
        .with_status("extracted".to_string(), StatusStyle::outline("#9E9E9E"), "Extracted")
        .with_status("denture".to_string(), StatusStyle::outline("#1976D2"), "Denture")
        .with_status("filled".to_string(), StatusStyle::outline("#FFC107"), "Filled")
}

fn demo_records() -> Vec<SparseRecord<String>> {
    [
        (ToothPosition::T11, "decayed"),
        (ToothPosition::T21, "decayed"),
        (ToothPosition::T32, "denture"),
        (ToothPosition::T15, "filled"),
        (ToothPosition::T16, "extracted"),
        (ToothPosition::T22, "denture"),
        (ToothPosition::T85, "healthy"),
    ]
    .into_iter()
    .map(|(position, status)| [(position, status.to_string())].into_iter().collect())
    .collect()
}
