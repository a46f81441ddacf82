//! Plotters renderer for the budget chart, drawing into an HTML canvas.

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::colors::{parse_css_color, Rgba, DEFAULT_COLOR};
use super::{BarSeries, ChartData, ChartError, ChartFactory, ChartWidget};
use crate::services::currency::format_axis_amount;

/// Half of each category slot is taken by a bar
const BAR_WIDTH: f64 = 0.4;

fn to_plotters(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

fn css(color: &str) -> RGBAColor {
    to_plotters(parse_css_color(color).unwrap_or(DEFAULT_COLOR))
}

fn draw_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}

fn find_canvas(canvas_id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Draws into the page's canvas elements
#[derive(Clone, Copy, Default)]
pub struct CanvasChartFactory;

/// A budget chart drawn on a canvas; disposing clears the canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl ChartWidget for CanvasChart {
    fn dispose(&mut self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if let Some(ctx) = context {
            ctx.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
        }
    }
}

impl ChartFactory for CanvasChartFactory {
    type Widget = CanvasChart;

    fn create(&self, canvas_id: &str, data: &ChartData) -> Result<CanvasChart, ChartError> {
        let canvas =
            find_canvas(canvas_id).ok_or_else(|| ChartError::CanvasNotFound(canvas_id.to_string()))?;
        let backend = CanvasBackend::with_canvas_object(canvas.clone())
            .ok_or_else(|| ChartError::Draw("canvas has no 2d context".to_string()))?;
        let root = backend.into_drawing_area();
        draw_budget_chart(&root, data)?;
        root.present().map_err(draw_error)?;
        Ok(CanvasChart { canvas })
    }
}

/// Grouped bars per category: spent on the left half, budget on the right
pub fn draw_budget_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(draw_error)?;

    let slots = data.len().max(1);
    let y_max = data
        .spent
        .iter()
        .chain(data.budget.iter())
        .copied()
        .fold(0.0_f64, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5_f64..(slots as f64 - 0.5), 0.0_f64..y_top)
        .map_err(draw_error)?;

    let labels = &data.labels;
    let category_label = |x: &f64| {
        let index = x.round();
        if (x - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        labels.get(index as usize).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots * 2 + 1)
        .x_label_formatter(&category_label)
        .y_label_formatter(&|v| format_axis_amount(*v))
        .label_style(("sans-serif", 12, &RGBColor(55, 65, 81)))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(240, 240, 240))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()
        .map_err(draw_error)?;

    let [spent, budget] = data.series();
    draw_bars(&mut chart, &spent, -BAR_WIDTH)?;
    draw_bars(&mut chart, &budget, 0.0)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(&WHITE.mix(0.8))
        .border_style(&RGBColor(230, 230, 230))
        .draw()
        .map_err(draw_error)?;

    Ok(())
}

/// One bar per category, offset from the slot centre by `offset`
fn draw_bars<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &BarSeries,
    offset: f64,
) -> Result<(), ChartError> {
    let legend_fill = series.fills.first().map(|c| css(c)).unwrap_or(to_plotters(DEFAULT_COLOR));

    chart
        .draw_series(series.values.iter().enumerate().map(|(i, value)| {
            let left = i as f64 + offset;
            let fill = series.fills.get(i).map(|c| css(c)).unwrap_or(legend_fill);
            Rectangle::new([(left, 0.0), (left + BAR_WIDTH, *value)], fill.filled())
        }))
        .map_err(draw_error)?
        .label(series.label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], legend_fill.filled()));

    for (i, value) in series.values.iter().enumerate() {
        let left = i as f64 + offset;
        let right = left + BAR_WIDTH;
        let border = series.borders.get(i).map(|c| css(c)).unwrap_or(legend_fill);
        let outline = vec![(left, 0.0), (left, *value), (right, *value), (right, 0.0)];
        match series.dash {
            Some((size, spacing)) => {
                chart
                    .draw_series(DashedLineSeries::new(outline, size, spacing, border.stroke_width(1)))
                    .map_err(draw_error)?;
            }
            None => {
                chart
                    .draw_series(std::iter::once(PathElement::new(outline, border.stroke_width(1))))
                    .map_err(draw_error)?;
            }
        }
    }

    Ok(())
}
