//! # Tracker Actions
//!
//! Every user intent the view can send, as a closed enum, and the single
//! entry point that runs it.

use shared::{BankAccountUpdate, CategoryUpdate, EntityId, SummaryRow};
use std::time::Duration;

use super::TrackerController;
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::{
    BankAccountForm, BankForm, CategoryForm, ExpenseForm, IncomeForm, Modal, PaymentMethodForm,
    TransferForm,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    Init,
    SetPeriod { month: u32, year: i32 },

    ToggleShowAllExpenses,
    ToggleShowAllIncomes,
    ToggleBudgetTable,
    SetModal(Modal, bool),

    EditExpenseForm(ExpenseForm),
    EditIncomeForm(IncomeForm),
    EditCategoryForm(CategoryForm),
    EditBankForm(BankForm),
    EditPaymentMethodForm(PaymentMethodForm),
    EditBankAccountForm(BankAccountForm),
    EditTransferForm(TransferForm),

    SelectExpenseCategory(String),
    CreateExpense,
    DeleteExpense(EntityId),

    CreateIncome,
    DeleteIncome(EntityId),

    OpenNewCategory,
    CreateCategory,
    UpdateCategory(EntityId, CategoryUpdate),
    DeleteCategory(EntityId),

    BeginBudgetEdit(SummaryRow),
    SetBudgetEditValue(String),
    CancelBudgetEdit,
    SaveBudgetEdit,
    OpenBudgetDrafts,
    SetBudgetDraft(EntityId, String),
    SaveAllBudgets,

    CreateBank,
    DeleteBank(EntityId),
    CreatePaymentMethod,
    DeletePaymentMethod(EntityId),

    OpenNewBankAccount,
    CreateBankAccount,
    UpdateBankAccount(EntityId, BankAccountUpdate),
    DeleteBankAccount(EntityId),

    LoadTransfers,
    CreateTransfer,

    RedrawChart,
}

/// Work the caller must schedule after an action returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    /// Wait for the chart canvas to be rendered, then send `RedrawChart`
    RedrawChartAfter(Duration),
}

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    pub async fn apply(&mut self, action: TrackerAction) -> FollowUp {
        match action {
            TrackerAction::Init => self.init().await,
            TrackerAction::SetPeriod { month, year } => self.set_period(month, year).await,

            TrackerAction::ToggleShowAllExpenses => self.ui.toggle_show_all_expenses(),
            TrackerAction::ToggleShowAllIncomes => self.ui.toggle_show_all_incomes(),
            TrackerAction::ToggleBudgetTable => self.ui.toggle_budget_table(),
            TrackerAction::SetModal(Modal::Chart, visible) => return self.set_chart_modal(visible),
            TrackerAction::SetModal(Modal::Budget, false) => self.cancel_budget_edit(),
            TrackerAction::SetModal(modal, visible) => self.ui.set_modal(modal, visible),

            TrackerAction::EditExpenseForm(form) => self.forms.expense = form,
            TrackerAction::EditIncomeForm(form) => self.forms.income = form,
            TrackerAction::EditCategoryForm(form) => self.forms.category = form,
            TrackerAction::EditBankForm(form) => self.forms.bank = form,
            TrackerAction::EditPaymentMethodForm(form) => self.forms.payment_method = form,
            TrackerAction::EditBankAccountForm(form) => self.forms.bank_account = form,
            TrackerAction::EditTransferForm(form) => self.forms.transfer = form,

            TrackerAction::SelectExpenseCategory(raw) => self.select_expense_category(raw).await,
            TrackerAction::CreateExpense => self.create_expense().await,
            TrackerAction::DeleteExpense(id) => self.delete_expense(id).await,

            TrackerAction::CreateIncome => self.create_income().await,
            TrackerAction::DeleteIncome(id) => self.delete_income(id).await,

            TrackerAction::OpenNewCategory => self.open_new_category_form(),
            TrackerAction::CreateCategory => self.create_category().await,
            TrackerAction::UpdateCategory(id, update) => self.update_category(id, update).await,
            TrackerAction::DeleteCategory(id) => self.delete_category(id).await,

            TrackerAction::BeginBudgetEdit(row) => self.begin_budget_edit(&row),
            TrackerAction::SetBudgetEditValue(raw) => self.set_budget_edit_value(raw),
            TrackerAction::CancelBudgetEdit => self.cancel_budget_edit(),
            TrackerAction::SaveBudgetEdit => self.save_budget_edit().await,
            TrackerAction::OpenBudgetDrafts => self.open_budget_drafts(),
            TrackerAction::SetBudgetDraft(id, raw) => self.set_budget_draft(id, raw),
            TrackerAction::SaveAllBudgets => self.save_all_budgets().await,

            TrackerAction::CreateBank => self.create_bank().await,
            TrackerAction::DeleteBank(id) => self.delete_bank(id).await,
            TrackerAction::CreatePaymentMethod => self.create_payment_method().await,
            TrackerAction::DeletePaymentMethod(id) => self.delete_payment_method(id).await,

            TrackerAction::OpenNewBankAccount => self.open_new_account_form(),
            TrackerAction::CreateBankAccount => self.create_bank_account().await,
            TrackerAction::UpdateBankAccount(id, update) => self.update_bank_account(id, update).await,
            TrackerAction::DeleteBankAccount(id) => self.delete_bank_account(id).await,

            TrackerAction::LoadTransfers => self.load_transfers().await,
            TrackerAction::CreateTransfer => self.create_transfer().await,

            TrackerAction::RedrawChart => self.redraw_chart_if_open(),
        }
        FollowUp::None
    }
}
