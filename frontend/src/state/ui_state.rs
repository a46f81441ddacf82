//! # UI State Module
//!
//! Modal visibility and list display toggles.
//!
//! ## Responsibilities:
//! - One flag per modal dialog of the tracker
//! - "Show all" toggles for the expense and income tables
//! - Collapsed/expanded state of the budget table

/// Every modal dialog the tracker can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Single-category budget editor
    Budget,
    /// Bulk budget editor
    Budgets,
    Chart,
    Categories,
    NewCategory,
    Banks,
    PaymentMethods,
    BankAccounts,
    NewBankAccount,
    Incomes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiFlags {
    pub budget_modal: bool,
    pub budgets_modal: bool,
    pub chart_modal: bool,
    pub categories_modal: bool,
    pub new_category_modal: bool,
    pub banks_modal: bool,
    pub payment_methods_modal: bool,
    pub bank_accounts_modal: bool,
    pub new_account_modal: bool,
    pub incomes_modal: bool,

    pub budget_table_expanded: bool,
    pub show_all_expenses: bool,
    pub show_all_incomes: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            budget_modal: false,
            budgets_modal: false,
            chart_modal: false,
            categories_modal: false,
            new_category_modal: false,
            banks_modal: false,
            payment_methods_modal: false,
            bank_accounts_modal: false,
            new_account_modal: false,
            incomes_modal: false,
            budget_table_expanded: true,
            show_all_expenses: false,
            show_all_incomes: false,
        }
    }
}

impl UiFlags {
    fn flag_mut(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::Budget => &mut self.budget_modal,
            Modal::Budgets => &mut self.budgets_modal,
            Modal::Chart => &mut self.chart_modal,
            Modal::Categories => &mut self.categories_modal,
            Modal::NewCategory => &mut self.new_category_modal,
            Modal::Banks => &mut self.banks_modal,
            Modal::PaymentMethods => &mut self.payment_methods_modal,
            Modal::BankAccounts => &mut self.bank_accounts_modal,
            Modal::NewBankAccount => &mut self.new_account_modal,
            Modal::Incomes => &mut self.incomes_modal,
        }
    }

    pub fn set_modal(&mut self, modal: Modal, visible: bool) {
        *self.flag_mut(modal) = visible;
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Budget => self.budget_modal,
            Modal::Budgets => self.budgets_modal,
            Modal::Chart => self.chart_modal,
            Modal::Categories => self.categories_modal,
            Modal::NewCategory => self.new_category_modal,
            Modal::Banks => self.banks_modal,
            Modal::PaymentMethods => self.payment_methods_modal,
            Modal::BankAccounts => self.bank_accounts_modal,
            Modal::NewBankAccount => self.new_account_modal,
            Modal::Incomes => self.incomes_modal,
        }
    }

    pub fn toggle_show_all_expenses(&mut self) {
        self.show_all_expenses = !self.show_all_expenses;
    }

    pub fn toggle_show_all_incomes(&mut self) {
        self.show_all_incomes = !self.show_all_incomes;
    }

    pub fn toggle_budget_table(&mut self) {
        self.budget_table_expanded = !self.budget_table_expanded;
    }
}
