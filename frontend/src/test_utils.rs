//! Test doubles for the controller's three seams: the REST API, the user
//! dialogs and the chart surface.
//!
//! `MockApi` keeps an in-memory copy of the server collections, records every
//! call in order and can be told to fail selected calls.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    Bank, BankAccount, BankAccountUpdate, Category, CategoryUpdate, EntityId, Expense, Income,
    NewBank, NewBankAccount, NewCategory, NewExpense, NewIncome, NewPaymentMethod, NewTransfer,
    PaymentMethod, Period, Subcategory, Summary, SummaryRow, Transfer,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::charts::{ChartData, ChartError, ChartFactory, ChartWidget};
use crate::config::TrackerConfig;
use crate::controller::TrackerController;
use crate::services::{ApiError, ApiResult, Notifier, TrackerApi};

/// One recorded API call with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListCategories,
    CreateCategory(NewCategory),
    UpdateCategory(EntityId, CategoryUpdate),
    DeleteCategory(EntityId),
    ListSubcategories(EntityId),
    ListExpenses(Period, u32),
    CreateExpense(NewExpense),
    DeleteExpense(EntityId),
    GetSummary(Period),
    ListBanks,
    CreateBank(NewBank),
    DeleteBank(EntityId),
    ListPaymentMethods,
    CreatePaymentMethod(NewPaymentMethod),
    DeletePaymentMethod(EntityId),
    ListBankAccounts,
    CreateBankAccount(NewBankAccount),
    UpdateBankAccount(EntityId, BankAccountUpdate),
    DeleteBankAccount(EntityId),
    ListIncomes(Period, u32),
    CreateIncome(NewIncome),
    DeleteIncome(EntityId),
    ListTransfers,
    CreateTransfer(NewTransfer),
}

type FailureRule = (Box<dyn Fn(&ApiCall) -> bool>, ApiError);

/// In-memory stand-in for the tracker server
#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<ApiCall>>,
    failures: RefCell<Vec<FailureRule>>,

    pub categories: RefCell<Vec<Category>>,
    pub subcategories: RefCell<Vec<Subcategory>>,
    pub expenses: RefCell<Vec<Expense>>,
    pub summary: RefCell<Summary>,
    pub banks: RefCell<Vec<Bank>>,
    pub payment_methods: RefCell<Vec<PaymentMethod>>,
    pub bank_accounts: RefCell<Vec<BankAccount>>,
    pub incomes: RefCell<Vec<Income>>,
    pub transfers: RefCell<Vec<Transfer>>,
}

impl MockApi {
    /// Make every call matching `predicate` fail with `error`
    pub fn fail_when(&self, predicate: impl Fn(&ApiCall) -> bool + 'static, error: ApiError) {
        self.failures.borrow_mut().push((Box::new(predicate), error));
    }

    pub fn clear_failures(&self) {
        self.failures.borrow_mut().clear();
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// How many recorded calls match `predicate`
    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(*call)).count()
    }

    fn record(&self, call: ApiCall) -> ApiResult<()> {
        let failure = self
            .failures
            .borrow()
            .iter()
            .find(|(predicate, _)| predicate(&call))
            .map(|(_, error)| error.clone());
        self.calls.borrow_mut().push(call);
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TrackerApi for MockApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.record(ApiCall::ListCategories)?;
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, payload: &NewCategory) -> ApiResult<()> {
        self.record(ApiCall::CreateCategory(payload.clone()))
    }

    async fn update_category(&self, id: EntityId, update: &CategoryUpdate) -> ApiResult<()> {
        self.record(ApiCall::UpdateCategory(id, update.clone()))?;
        if let Some(category) = self.categories.borrow_mut().iter_mut().find(|c| c.id == id) {
            if let Some(name) = &update.name {
                category.name = name.clone();
            }
            if let Some(budget) = update.monthly_budget {
                category.monthly_budget = budget;
            }
        }
        Ok(())
    }

    async fn delete_category(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeleteCategory(id))?;
        self.categories.borrow_mut().retain(|c| c.id != id);
        self.expenses.borrow_mut().retain(|e| e.category_id != id);
        Ok(())
    }

    async fn list_subcategories(&self, category_id: EntityId) -> ApiResult<Vec<Subcategory>> {
        self.record(ApiCall::ListSubcategories(category_id))?;
        Ok(self
            .subcategories
            .borrow()
            .iter()
            .filter(|s| s.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn list_expenses(&self, period: Period, limit: u32) -> ApiResult<Vec<Expense>> {
        self.record(ApiCall::ListExpenses(period, limit))?;
        Ok(self.expenses.borrow().clone())
    }

    async fn create_expense(&self, payload: &NewExpense) -> ApiResult<()> {
        self.record(ApiCall::CreateExpense(payload.clone()))
    }

    async fn delete_expense(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeleteExpense(id))?;
        self.expenses.borrow_mut().retain(|e| e.id != id);
        Ok(())
    }

    async fn get_summary(&self, period: Period) -> ApiResult<Summary> {
        self.record(ApiCall::GetSummary(period))?;
        Ok(self.summary.borrow().clone())
    }

    async fn list_banks(&self) -> ApiResult<Vec<Bank>> {
        self.record(ApiCall::ListBanks)?;
        Ok(self.banks.borrow().clone())
    }

    async fn create_bank(&self, payload: &NewBank) -> ApiResult<()> {
        self.record(ApiCall::CreateBank(payload.clone()))
    }

    async fn delete_bank(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeleteBank(id))?;
        self.banks.borrow_mut().retain(|b| b.id != id);
        self.payment_methods.borrow_mut().retain(|m| m.bank_id != id);
        Ok(())
    }

    async fn list_payment_methods(&self) -> ApiResult<Vec<PaymentMethod>> {
        self.record(ApiCall::ListPaymentMethods)?;
        Ok(self.payment_methods.borrow().clone())
    }

    async fn create_payment_method(&self, payload: &NewPaymentMethod) -> ApiResult<()> {
        self.record(ApiCall::CreatePaymentMethod(payload.clone()))
    }

    async fn delete_payment_method(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeletePaymentMethod(id))?;
        self.payment_methods.borrow_mut().retain(|m| m.id != id);
        Ok(())
    }

    async fn list_bank_accounts(&self) -> ApiResult<Vec<BankAccount>> {
        self.record(ApiCall::ListBankAccounts)?;
        Ok(self.bank_accounts.borrow().clone())
    }

    async fn create_bank_account(&self, payload: &NewBankAccount) -> ApiResult<()> {
        self.record(ApiCall::CreateBankAccount(payload.clone()))
    }

    async fn update_bank_account(&self, id: EntityId, update: &BankAccountUpdate) -> ApiResult<()> {
        self.record(ApiCall::UpdateBankAccount(id, update.clone()))?;
        if let Some(account) = self.bank_accounts.borrow_mut().iter_mut().find(|a| a.id == id) {
            if update.transactional_balance.is_some() {
                account.transactional_balance = update.transactional_balance;
            }
            if update.savings_balance.is_some() {
                account.savings_balance = update.savings_balance;
            }
        }
        Ok(())
    }

    async fn delete_bank_account(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeleteBankAccount(id))?;
        self.bank_accounts.borrow_mut().retain(|a| a.id != id);
        self.incomes.borrow_mut().retain(|i| i.bank_account_id != id);
        Ok(())
    }

    async fn list_incomes(&self, period: Period, limit: u32) -> ApiResult<Vec<Income>> {
        self.record(ApiCall::ListIncomes(period, limit))?;
        Ok(self.incomes.borrow().clone())
    }

    async fn create_income(&self, payload: &NewIncome) -> ApiResult<()> {
        self.record(ApiCall::CreateIncome(payload.clone()))
    }

    async fn delete_income(&self, id: EntityId) -> ApiResult<()> {
        self.record(ApiCall::DeleteIncome(id))?;
        self.incomes.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }

    async fn list_transfers(&self) -> ApiResult<Vec<Transfer>> {
        self.record(ApiCall::ListTransfers)?;
        Ok(self.transfers.borrow().clone())
    }

    async fn create_transfer(&self, payload: &NewTransfer) -> ApiResult<()> {
        self.record(ApiCall::CreateTransfer(payload.clone()))
    }
}

/// Collects notifications and answers confirmations with a fixed reply
pub struct RecordingNotifier {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    pub confirmations: RefCell<Vec<String>>,
    pub confirm_answer: Cell<bool>,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self {
            successes: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
            confirmations: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }
}

impl RecordingNotifier {
    pub fn last_error(&self) -> Option<String> {
        self.errors.borrow().last().cloned()
    }

    pub fn last_success(&self) -> Option<String> {
        self.successes.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

/// Counts chart creations and disposals; `live` is what is currently drawn
#[derive(Default)]
pub struct MockChartFactory {
    pub created: Rc<Cell<usize>>,
    pub disposed: Rc<Cell<usize>>,
    pub last_data: RefCell<Option<ChartData>>,
    pub canvas_missing: Cell<bool>,
}

impl MockChartFactory {
    pub fn live(&self) -> usize {
        self.created.get() - self.disposed.get()
    }
}

pub struct MockChart {
    disposed: Rc<Cell<usize>>,
}

impl ChartWidget for MockChart {
    fn dispose(&mut self) {
        self.disposed.set(self.disposed.get() + 1);
    }
}

impl ChartFactory for MockChartFactory {
    type Widget = MockChart;

    fn create(&self, canvas_id: &str, data: &ChartData) -> Result<MockChart, ChartError> {
        if self.canvas_missing.get() {
            return Err(ChartError::CanvasNotFound(canvas_id.to_string()));
        }
        self.created.set(self.created.get() + 1);
        *self.last_data.borrow_mut() = Some(data.clone());
        Ok(MockChart {
            disposed: self.disposed.clone(),
        })
    }
}

pub type TestController = TrackerController<MockApi, RecordingNotifier, MockChartFactory>;

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

pub fn test_period() -> Period {
    Period::new(3, 2025).unwrap()
}

/// Controller over empty doubles, "today" pinned to 2025-03-15
pub fn controller() -> TestController {
    TrackerController::with_clock(
        MockApi::default(),
        RecordingNotifier::default(),
        MockChartFactory::default(),
        TrackerConfig::default(),
        fixed_today,
    )
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn category(id: EntityId, name: &str, budget: f64) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon: "💰".to_string(),
        color: "#3B82F6".to_string(),
        monthly_budget: budget,
        subcategories: Vec::new(),
    }
}

pub fn subcategory(id: EntityId, name: &str, category_id: EntityId) -> Subcategory {
    Subcategory {
        id,
        name: name.to_string(),
        category_id,
    }
}

pub fn expense(id: EntityId, description: &str, amount: f64, category_id: EntityId) -> Expense {
    Expense {
        id,
        date: date(2025, 3, 10),
        amount,
        description: description.to_string(),
        category_id,
        subcategory_id: None,
        bank_id: None,
        payment_method_id: None,
        created_at: None,
        category: None,
        subcategory: None,
    }
}

pub fn income(id: EntityId, description: &str, amount: f64, account_id: EntityId) -> Income {
    Income {
        id,
        date: date(2025, 3, 1),
        amount: Some(amount),
        description: description.to_string(),
        income_category: "Salario".to_string(),
        bank_account_id: account_id,
        created_at: None,
    }
}

pub fn bank(id: EntityId, name: &str) -> Bank {
    Bank {
        id,
        name: name.to_string(),
        activo: 1,
    }
}

pub fn payment_method(id: EntityId, name: &str, bank_id: EntityId) -> PaymentMethod {
    PaymentMethod {
        id,
        kind: "tarjeta_credito".to_string(),
        name: name.to_string(),
        bank_id,
        activo: 1,
    }
}

pub fn bank_account(id: EntityId, name: &str, transactional: f64, savings: f64) -> BankAccount {
    BankAccount {
        id,
        name: name.to_string(),
        bank_id: 1,
        transactional_balance: Some(transactional),
        savings_balance: Some(savings),
        account_type: Some("Ahorro".to_string()),
        activa: 1,
    }
}

pub fn summary_row(name: &str, budget: f64, spent: f64, color: &str) -> SummaryRow {
    SummaryRow {
        category_name: name.to_string(),
        monthly_budget: budget,
        total_spent: spent,
        difference: budget - spent,
        percent_used: if budget > 0.0 { spent / budget * 100.0 } else { 0.0 },
        color: color.to_string(),
    }
}
