//! # Tracker Controller
//!
//! Owns all client-side state of the expense tracker and runs every user
//! operation against the REST API.
//!
//! ## Responsibilities:
//! - Fetching collections and replacing them on success
//! - Validating form buffers and submitting create/update/delete requests
//! - Reloading exactly the collections each mutation affects
//! - Reporting every outcome through the [`Notifier`]
//! - Owning the budget chart widget
//!
//! The implementation is split by entity across the submodules, each adding
//! an `impl TrackerController` block.
//!
//! ## Error policy:
//! A failed load logs the error, notifies the user and leaves the previously
//! loaded collection in place. A failed mutation logs, notifies, and leaves
//! the form buffers and modal flags untouched so the user can retry.

mod accounts;
mod actions;
mod banks;
mod categories;
mod chart;
mod expenses;
mod incomes;
mod loading;


pub use actions::{FollowUp, TrackerAction};

use chrono::NaiveDate;
use log::error;
use shared::Period;

use crate::charts::{ChartFactory, ChartSlot};
use crate::config::TrackerConfig;
use crate::services::date_utils;
use crate::services::{ApiError, Notifier, TrackerApi};
use crate::state::derived::{self, TrackerView};
use crate::state::{BudgetDrafts, BudgetEdit, FormBuffers, TrackerData, UiFlags};

/// Fallback shown when the server rejects a request without a `detail`
pub const UNKNOWN_ERROR: &str = "Error desconocido";

pub struct TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    api: A,
    notifier: N,
    chart_factory: F,
    config: TrackerConfig,
    clock: fn() -> NaiveDate,

    period: Period,
    data: TrackerData,
    forms: FormBuffers,
    ui: UiFlags,
    budget_edit: Option<BudgetEdit>,
    budget_drafts: BudgetDrafts,
    chart: ChartSlot<F::Widget>,
}

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    pub fn new(api: A, notifier: N, chart_factory: F, config: TrackerConfig) -> Self {
        Self::with_clock(api, notifier, chart_factory, config, date_utils::today)
    }

    /// Same as [`new`](Self::new) with an explicit source for "today"
    pub fn with_clock(
        api: A,
        notifier: N,
        chart_factory: F,
        config: TrackerConfig,
        clock: fn() -> NaiveDate,
    ) -> Self {
        let today = clock();
        Self {
            api,
            notifier,
            chart_factory,
            config,
            clock,
            period: Period::containing(today),
            data: TrackerData::default(),
            forms: FormBuffers::new(today),
            ui: UiFlags::default(),
            budget_edit: None,
            budget_drafts: BudgetDrafts::default(),
            chart: ChartSlot::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn data(&self) -> &TrackerData {
        &self.data
    }

    pub fn forms(&self) -> &FormBuffers {
        &self.forms
    }

    /// Form buffers are written directly by input bindings
    pub fn forms_mut(&mut self) -> &mut FormBuffers {
        &mut self.forms
    }

    pub fn ui(&self) -> &UiFlags {
        &self.ui
    }

    pub fn budget_edit(&self) -> Option<&BudgetEdit> {
        self.budget_edit.as_ref()
    }

    pub fn budget_drafts(&self) -> &BudgetDrafts {
        &self.budget_drafts
    }

    /// Sum of the bulk budget buffers, unparseable entries counting as 0
    pub fn budget_total(&self) -> f64 {
        self.budget_drafts.total()
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Snapshot of everything the view renders
    pub fn view(&self) -> TrackerView {
        let limit = self.config.preview_rows;
        let visible_expenses =
            derived::visible_rows(&self.data.expenses, self.ui.show_all_expenses, limit).to_vec();
        let visible_incomes =
            derived::visible_rows(&self.data.incomes, self.ui.show_all_incomes, limit).to_vec();

        TrackerView {
            period: self.period,
            period_label: date_utils::period_label(self.period),
            has_more_expenses: self.data.expenses.len() > limit,
            expenses: self.data.expenses.clone(),
            visible_expenses,
            has_more_incomes: self.data.incomes.len() > limit,
            incomes: self.data.incomes.clone(),
            visible_incomes,
            incomes_total: derived::incomes_total(&self.data.incomes),
            categories: self.data.categories.clone(),
            subcategories: self.data.subcategories.clone(),
            summary: self.data.summary.clone(),
            banks: self.data.banks.clone(),
            payment_methods: self.data.payment_methods.clone(),
            bank_accounts: self.data.bank_accounts.clone(),
            accounts_summary: derived::accounts_summary(&self.data.bank_accounts),
            transfers: self.data.transfers.clone(),
            budget_edit: self.budget_edit.clone(),
            budget_drafts: self.budget_drafts.entries().clone(),
            budget_total: self.budget_drafts.total(),
            forms: self.forms.clone(),
            ui: self.ui.clone(),
        }
    }

    /// Log a failed operation and tell the user
    fn report_failure(&self, operation: &str, err: &ApiError, message: &str) {
        error!("❌ Failed to {}: {}", operation, err);
        self.notifier.error(message);
    }
}

/// User message for a rejected create request
///
/// Application failures carry the server's `detail` (or a generic fallback)
/// after `prefix`; transport failures get `transport_message` alone.
fn create_failure_message(err: &ApiError, prefix: &str, transport_message: &str) -> String {
    if err.is_application() {
        format!("{}: {}", prefix, err.detail().unwrap_or(UNKNOWN_ERROR))
    } else {
        transport_message.to_string()
    }
}

/// Controller wired to the browser: HTTP client, `alert`/`confirm`, canvas charts
#[cfg(target_arch = "wasm32")]
pub type BrowserTracker = TrackerController<
    crate::services::ApiClient,
    crate::services::BrowserDialogs,
    crate::charts::canvas::CanvasChartFactory,
>;

#[cfg(target_arch = "wasm32")]
impl BrowserTracker {
    pub fn for_browser(config: TrackerConfig) -> Self {
        let api = crate::services::ApiClient::from_config(&config);
        Self::new(
            api,
            crate::services::BrowserDialogs,
            crate::charts::canvas::CanvasChartFactory,
            config,
        )
    }
}
