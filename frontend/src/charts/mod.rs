//! # Budget Chart
//!
//! Grouped bar chart of spent vs. budget per category, built from the
//! summary rows.
//!
//! The drawn chart is an owned resource: [`ChartSlot`] holds at most one
//! live widget and disposes the previous one before creating the next, so
//! redrawing never stacks charts on the same canvas.

pub mod colors;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use shared::SummaryRow;

pub const SPENT_LABEL: &str = "Gastado";
pub const BUDGET_LABEL: &str = "Presupuesto";
pub const BUDGET_FILL: &str = "rgba(209, 213, 219, 0.5)";
pub const BUDGET_BORDER: &str = "rgba(156, 163, 175, 1)";
/// Dash pattern (on, off) of the budget bar outline, in pixels
pub const BUDGET_DASH: (u32, u32) = (5, 5);
/// Alpha suffix appended to a category's `#RRGGBB` colour for its bar fill
pub const SPENT_FILL_ALPHA: &str = "CC";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Canvas element #{0} not found")]
    CanvasNotFound(String),

    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

/// Parallel per-category arrays the chart is drawn from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub spent: Vec<f64>,
    pub budget: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn from_summary(rows: &[SummaryRow]) -> Self {
        Self {
            labels: rows.iter().map(|r| r.category_name.clone()).collect(),
            spent: rows.iter().map(|r| r.total_spent).collect(),
            budget: rows.iter().map(|r| r.monthly_budget).collect(),
            colors: rows.iter().map(|r| r.color.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The two bar series: spent in each category's colour, budget in dashed grey
    pub fn series(&self) -> [BarSeries; 2] {
        [
            BarSeries {
                label: SPENT_LABEL,
                values: self.spent.clone(),
                fills: self
                    .colors
                    .iter()
                    .map(|c| format!("{}{}", c, SPENT_FILL_ALPHA))
                    .collect(),
                borders: self.colors.clone(),
                dash: None,
            },
            BarSeries {
                label: BUDGET_LABEL,
                values: self.budget.clone(),
                fills: vec![BUDGET_FILL.to_string(); self.len()],
                borders: vec![BUDGET_BORDER.to_string(); self.len()],
                dash: Some(BUDGET_DASH),
            },
        ]
    }
}

/// One dataset of the grouped bar chart, colours given as CSS strings
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub fills: Vec<String>,
    pub borders: Vec<String>,
    pub dash: Option<(u32, u32)>,
}

/// A chart currently drawn on some surface
pub trait ChartWidget {
    /// Release the surface; called exactly once per widget
    fn dispose(&mut self);
}

/// Draws a new chart widget into the canvas with the given id
pub trait ChartFactory {
    type Widget: ChartWidget;

    fn create(&self, canvas_id: &str, data: &ChartData) -> Result<Self::Widget, ChartError>;
}

/// Holder for at most one live chart widget
pub struct ChartSlot<W: ChartWidget> {
    current: Option<W>,
}

impl<W: ChartWidget> ChartSlot<W> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Dispose the current widget (if any), then store the newly created one
    ///
    /// When creation fails the slot stays empty.
    pub fn replace<F>(&mut self, create: F) -> Result<(), ChartError>
    where
        F: FnOnce() -> Result<W, ChartError>,
    {
        self.dispose();
        self.current = Some(create()?);
        Ok(())
    }

    pub fn dispose(&mut self) {
        if let Some(mut widget) = self.current.take() {
            widget.dispose();
        }
    }
}

impl<W: ChartWidget> Default for ChartSlot<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ChartWidget> Drop for ChartSlot<W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn row(name: &str, budget: f64, spent: f64, color: &str) -> SummaryRow {
        SummaryRow {
            category_name: name.to_string(),
            monthly_budget: budget,
            total_spent: spent,
            difference: budget - spent,
            percent_used: 0.0,
            color: color.to_string(),
        }
    }

    struct Probe {
        id: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChartWidget for Probe {
        fn dispose(&mut self) {
            self.log.borrow_mut().push(format!("dispose {}", self.id));
        }
    }

    #[test]
    fn test_chart_data_from_summary() {
        let data = ChartData::from_summary(&[
            row("Alimentación", 4000.0, 1000.0, "#10B981"),
            row("Transporte", 1500.0, 1800.0, "#F59E0B"),
        ]);
        assert_eq!(data.labels, vec!["Alimentación", "Transporte"]);
        assert_eq!(data.spent, vec![1000.0, 1800.0]);
        assert_eq!(data.budget, vec![4000.0, 1500.0]);

        let [spent, budget] = data.series();
        assert_eq!(spent.label, "Gastado");
        assert_eq!(spent.fills, vec!["#10B981CC", "#F59E0BCC"]);
        assert_eq!(spent.borders, vec!["#10B981", "#F59E0B"]);
        assert_eq!(spent.dash, None);
        assert_eq!(budget.fills, vec![BUDGET_FILL, BUDGET_FILL]);
        assert_eq!(budget.dash, Some((5, 5)));
    }

    #[test]
    fn test_empty_summary_gives_empty_chart() {
        let data = ChartData::from_summary(&[]);
        assert!(data.is_empty());
        assert!(data.series()[1].fills.is_empty());
    }

    #[test]
    fn test_slot_disposes_before_creating() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();

        for id in 1..=2 {
            let log = log.clone();
            slot.replace(move || {
                log.borrow_mut().push(format!("create {}", id));
                Ok(Probe { id, log: log.clone() })
            })
            .unwrap();
        }
        assert!(slot.is_active());
        assert_eq!(*log.borrow(), vec!["create 1", "dispose 1", "create 2"]);

        slot.dispose();
        slot.dispose();
        assert!(!slot.is_active());
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_failed_creation_leaves_slot_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();
        let first = log.clone();
        slot.replace(move || Ok(Probe { id: 1, log: first })).unwrap();

        let result = slot.replace(|| Err(ChartError::CanvasNotFound("categoryChart".to_string())));
        assert!(matches!(result, Err(ChartError::CanvasNotFound(_))));
        assert!(!slot.is_active());
        assert_eq!(*log.borrow(), vec!["dispose 1"]);
    }

    #[test]
    fn test_dropping_slot_disposes_widget() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = ChartSlot::new();
            let widget_log = log.clone();
            slot.replace(move || Ok(Probe { id: 7, log: widget_log })).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["dispose 7"]);
    }
}
