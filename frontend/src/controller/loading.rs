//! # Data Loading
//!
//! Fetches each server collection and stores it on success.
//!
//! ## Key Functions:
//! - `init()` - startup load of every collection
//! - `load_period_data()` - expenses and summary for the selected month
//! - `set_period()` - switch month and refetch everything period-scoped
//!
//! Loads that are independent of each other are awaited together with
//! `futures::join!`; results are applied once all of them have resolved.

use log::{info, warn};
use shared::{Bank, BankAccount, Category, EntityId, Expense, Income, PaymentMethod, Period, Summary};

use super::TrackerController;
use crate::charts::ChartFactory;
use crate::services::{ApiResult, Notifier, TrackerApi};

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Load every collection the page shows
    pub async fn init(&mut self) {
        info!("📊 Loading initial data for {}/{}", self.period.month, self.period.year);
        let period = self.period;
        let limit = self.config.list_limit;

        let (categories, banks, payment_methods, bank_accounts, incomes) = futures::join!(
            self.api.list_categories(),
            self.api.list_banks(),
            self.api.list_payment_methods(),
            self.api.list_bank_accounts(),
            self.api.list_incomes(period, limit),
        );
        self.store_categories(categories);
        self.store_banks(banks);
        self.store_payment_methods(payment_methods);
        self.store_bank_accounts(bank_accounts);
        self.store_incomes(incomes);

        self.load_period_data().await;
    }

    /// Switch to another month and refetch expenses, summary and incomes
    ///
    /// An invalid month/year is rejected without touching the current period.
    pub async fn set_period(&mut self, month: u32, year: i32) {
        let period = match Period::new(month, year) {
            Ok(period) => period,
            Err(e) => {
                warn!("⚠️ Rejected period change: {}", e);
                self.notifier.error("Periodo inválido");
                return;
            }
        };
        info!("📅 Switching period to {}/{}", period.month, period.year);
        self.period = period;

        let limit = self.config.list_limit;
        let (expenses, summary, incomes) = futures::join!(
            self.api.list_expenses(period, limit),
            self.api.get_summary(period),
            self.api.list_incomes(period, limit),
        );
        self.store_expenses(expenses);
        self.store_summary(summary);
        self.store_incomes(incomes);
        self.redraw_chart_if_open();
    }

    /// Expenses and summary always travel together so totals never disagree
    /// with the list
    pub async fn load_period_data(&mut self) {
        let period = self.period;
        let limit = self.config.list_limit;
        let (expenses, summary) = futures::join!(
            self.api.list_expenses(period, limit),
            self.api.get_summary(period),
        );
        self.store_expenses(expenses);
        self.store_summary(summary);
        self.redraw_chart_if_open();
    }

    pub async fn load_categories(&mut self) {
        let result = self.api.list_categories().await;
        self.store_categories(result);
    }

    /// Categories plus the summary, which embeds each category's budget
    pub async fn load_categories_and_summary(&mut self) {
        let period = self.period;
        let (categories, summary) =
            futures::join!(self.api.list_categories(), self.api.get_summary(period));
        self.store_categories(categories);
        self.store_summary(summary);
        self.redraw_chart_if_open();
    }

    pub async fn load_subcategories(&mut self, category_id: EntityId) {
        match self.api.list_subcategories(category_id).await {
            Ok(subcategories) => {
                info!("📂 Loaded {} subcategories for category {}", subcategories.len(), category_id);
                self.data.subcategories = subcategories;
            }
            Err(e) => self.report_failure("load subcategories", &e, "Error al cargar las subcategorías"),
        }
    }

    pub async fn load_banks(&mut self) {
        let result = self.api.list_banks().await;
        self.store_banks(result);
    }

    pub async fn load_payment_methods(&mut self) {
        let result = self.api.list_payment_methods().await;
        self.store_payment_methods(result);
    }

    /// Banks and payment methods; deleting a bank cascades to its methods
    pub async fn load_banks_and_payment_methods(&mut self) {
        let (banks, payment_methods) =
            futures::join!(self.api.list_banks(), self.api.list_payment_methods());
        self.store_banks(banks);
        self.store_payment_methods(payment_methods);
    }

    pub async fn load_bank_accounts(&mut self) {
        let result = self.api.list_bank_accounts().await;
        self.store_bank_accounts(result);
    }

    pub async fn load_incomes(&mut self) {
        let result = self.api.list_incomes(self.period, self.config.list_limit).await;
        self.store_incomes(result);
    }

    pub async fn load_transfers(&mut self) {
        match self.api.list_transfers().await {
            Ok(transfers) => {
                info!("🔁 Loaded {} transfers", transfers.len());
                self.data.transfers = transfers;
            }
            Err(e) => self.report_failure("load transfers", &e, "Error al cargar las transferencias"),
        }
    }

    fn store_categories(&mut self, result: ApiResult<Vec<Category>>) {
        match result {
            Ok(categories) => {
                info!("🏷️ Loaded {} categories", categories.len());
                self.data.categories = categories;
            }
            Err(e) => self.report_failure("load categories", &e, "Error al cargar las categorías"),
        }
    }

    fn store_expenses(&mut self, result: ApiResult<Vec<Expense>>) {
        match result {
            Ok(expenses) => {
                info!("💸 Loaded {} expenses", expenses.len());
                self.data.expenses = expenses;
            }
            Err(e) => self.report_failure("load expenses", &e, "Error al cargar los gastos"),
        }
    }

    fn store_summary(&mut self, result: ApiResult<Summary>) {
        match result {
            Ok(summary) => {
                info!("📈 Loaded summary with {} categories", summary.rows.len());
                self.data.summary = summary;
            }
            Err(e) => self.report_failure("load summary", &e, "Error al cargar el resumen"),
        }
    }

    fn store_banks(&mut self, result: ApiResult<Vec<Bank>>) {
        match result {
            Ok(banks) => {
                info!("🏦 Loaded {} banks", banks.len());
                self.data.banks = banks;
            }
            Err(e) => self.report_failure("load banks", &e, "Error al cargar los bancos"),
        }
    }

    fn store_payment_methods(&mut self, result: ApiResult<Vec<PaymentMethod>>) {
        match result {
            Ok(methods) => {
                info!("💳 Loaded {} payment methods", methods.len());
                self.data.payment_methods = methods;
            }
            Err(e) => self.report_failure("load payment methods", &e, "Error al cargar los medios de pago"),
        }
    }

    fn store_bank_accounts(&mut self, result: ApiResult<Vec<BankAccount>>) {
        match result {
            Ok(accounts) => {
                info!("🏦 Loaded {} bank accounts", accounts.len());
                self.data.bank_accounts = accounts;
            }
            Err(e) => self.report_failure("load bank accounts", &e, "Error al cargar las cuentas bancarias"),
        }
    }

    fn store_incomes(&mut self, result: ApiResult<Vec<Income>>) {
        match result {
            Ok(incomes) => {
                info!("💰 Loaded {} incomes", incomes.len());
                self.data.incomes = incomes;
            }
            Err(e) => self.report_failure("load incomes", &e, "Error al cargar los ingresos"),
        }
    }
}
