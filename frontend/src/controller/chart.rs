use log::{debug, error, info};

use super::{FollowUp, TrackerController};
use crate::charts::{ChartData, ChartError, ChartFactory};
use crate::services::{Notifier, TrackerApi};

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Show or hide the chart modal
    ///
    /// Opening asks the caller to redraw once the modal's canvas exists;
    /// closing disposes the current chart.
    pub fn set_chart_modal(&mut self, visible: bool) -> FollowUp {
        self.ui.chart_modal = visible;
        if visible {
            FollowUp::RedrawChartAfter(self.config.chart_redraw_delay())
        } else {
            self.chart.dispose();
            FollowUp::None
        }
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::from_summary(&self.data.summary.rows)
    }

    pub fn is_chart_active(&self) -> bool {
        self.chart.is_active()
    }

    /// Replace the current chart with one drawn from the latest summary
    ///
    /// A missing canvas (modal not rendered yet) is not an error worth
    /// reporting to the user; nothing is drawn.
    pub fn redraw_chart(&mut self) {
        let data = self.chart_data();
        let factory = &self.chart_factory;
        let canvas_id = self.config.chart_canvas_id.as_str();

        match self.chart.replace(|| factory.create(canvas_id, &data)) {
            Ok(()) => info!("📊 Chart drawn with {} categories", data.len()),
            Err(ChartError::CanvasNotFound(id)) => debug!("Chart canvas #{} not in the page", id),
            Err(e) => error!("❌ {}", e),
        }
    }

    /// Redraw only while the modal is shown; a deferred redraw that lands
    /// after the modal closed draws nothing
    pub fn redraw_chart_if_open(&mut self) {
        if self.ui.chart_modal {
            self.redraw_chart();
        }
    }
}
