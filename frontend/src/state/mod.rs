//! # State Module
//!
//! Plain data owned by the controller: fetched collections, form buffers,
//! modal flags and budget editors, plus the pure functions deriving view
//! values from them.

pub mod budget;
pub mod collections;
pub mod derived;
pub mod forms;
pub mod ui_state;

pub use budget::{BudgetDrafts, BudgetEdit};
pub use collections::TrackerData;
pub use derived::{AccountsSummary, TrackerView};
pub use forms::{
    BankAccountForm, BankForm, CategoryForm, ExpenseForm, FormBuffers, FormError, IncomeForm,
    PaymentMethodForm, TransferForm,
};
pub use ui_state::{Modal, UiFlags};
