use shared::{Bank, BankAccount, Category, Expense, Income, PaymentMethod, Subcategory, Summary, Transfer};

/// Server collections as last fetched
///
/// Each field is replaced wholesale by a successful reload and left untouched
/// by a failed one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerData {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    /// Subcategories of the category selected in the expense form
    pub subcategories: Vec<Subcategory>,
    pub summary: Summary,
    pub banks: Vec<Bank>,
    pub payment_methods: Vec<PaymentMethod>,
    pub bank_accounts: Vec<BankAccount>,
    pub incomes: Vec<Income>,
    pub transfers: Vec<Transfer>,
}
