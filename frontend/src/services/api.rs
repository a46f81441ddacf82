//! # Tracker API
//!
//! The REST surface the controller talks to, expressed as a trait so the
//! controller can run against the browser client or an in-memory double.
//!
//! Every mutation only reports whether the server answered 2xx; the body of a
//! successful create/update/delete is not needed because the controller always
//! reloads the affected collections afterwards.

use async_trait::async_trait;
use shared::{
    Bank, BankAccount, BankAccountUpdate, Category, CategoryUpdate, EntityId, Expense, Income,
    NewBank, NewBankAccount, NewCategory, NewExpense, NewIncome, NewPaymentMethod, NewTransfer,
    PaymentMethod, Period, Subcategory, Summary, Transfer,
};

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// Non-2xx response, with the server's `detail` message when it sent one
    #[error("Server error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-provided explanation, only available for application failures
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered with a non-2xx status
    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Endpoint paths, relative to the API base URL
pub mod paths {
    use shared::{EntityId, Period};

    pub const CATEGORIES: &str = "/categorias";
    pub const EXPENSES: &str = "/gastos";
    pub const BANKS: &str = "/bancos";
    pub const PAYMENT_METHODS: &str = "/medios-pago";
    pub const BANK_ACCOUNTS: &str = "/cuentas-bancarias";
    pub const INCOMES: &str = "/ingresos";
    pub const TRANSFERS: &str = "/transferencias";

    /// `{collection}/{id}`
    pub fn item(collection: &str, id: EntityId) -> String {
        format!("{}/{}", collection, id)
    }

    pub fn subcategories(category_id: EntityId) -> String {
        format!("/subcategorias?categoria_id={}", category_id)
    }

    pub fn expenses(period: Period, limit: u32) -> String {
        format!("{}?{}", EXPENSES, period.query(Some(limit)))
    }

    pub fn incomes(period: Period, limit: u32) -> String {
        format!("{}?{}", INCOMES, period.query(Some(limit)))
    }

    pub fn summary(period: Period) -> String {
        format!("/resumen?{}", period.query(None))
    }
}

/// One method per endpoint consumed by the tracker
///
/// Futures are not `Send`: the browser client holds JS handles and the
/// controller runs on the single UI thread.
#[async_trait(?Send)]
pub trait TrackerApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
    async fn create_category(&self, payload: &NewCategory) -> ApiResult<()>;
    async fn update_category(&self, id: EntityId, update: &CategoryUpdate) -> ApiResult<()>;
    /// Server cascades the delete to the category's expenses
    async fn delete_category(&self, id: EntityId) -> ApiResult<()>;

    async fn list_subcategories(&self, category_id: EntityId) -> ApiResult<Vec<Subcategory>>;

    async fn list_expenses(&self, period: Period, limit: u32) -> ApiResult<Vec<Expense>>;
    async fn create_expense(&self, payload: &NewExpense) -> ApiResult<()>;
    async fn delete_expense(&self, id: EntityId) -> ApiResult<()>;

    async fn get_summary(&self, period: Period) -> ApiResult<Summary>;

    async fn list_banks(&self) -> ApiResult<Vec<Bank>>;
    async fn create_bank(&self, payload: &NewBank) -> ApiResult<()>;
    /// Server cascades the delete to the bank's payment methods
    async fn delete_bank(&self, id: EntityId) -> ApiResult<()>;

    async fn list_payment_methods(&self) -> ApiResult<Vec<PaymentMethod>>;
    async fn create_payment_method(&self, payload: &NewPaymentMethod) -> ApiResult<()>;
    async fn delete_payment_method(&self, id: EntityId) -> ApiResult<()>;

    async fn list_bank_accounts(&self) -> ApiResult<Vec<BankAccount>>;
    async fn create_bank_account(&self, payload: &NewBankAccount) -> ApiResult<()>;
    async fn update_bank_account(&self, id: EntityId, update: &BankAccountUpdate) -> ApiResult<()>;
    /// Server cascades the delete to the account's incomes
    async fn delete_bank_account(&self, id: EntityId) -> ApiResult<()>;

    async fn list_incomes(&self, period: Period, limit: u32) -> ApiResult<Vec<Income>>;
    async fn create_income(&self, payload: &NewIncome) -> ApiResult<()>;
    async fn delete_income(&self, id: EntityId) -> ApiResult<()>;

    async fn list_transfers(&self) -> ApiResult<Vec<Transfer>>;
    async fn create_transfer(&self, payload: &NewTransfer) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_server_routes() {
        let period = Period::new(2, 2025).unwrap();
        assert_eq!(paths::expenses(period, 100), "/gastos?mes=2&anio=2025&limit=100");
        assert_eq!(paths::incomes(period, 100), "/ingresos?mes=2&anio=2025&limit=100");
        assert_eq!(paths::summary(period), "/resumen?mes=2&anio=2025");
        assert_eq!(paths::subcategories(4), "/subcategorias?categoria_id=4");
        assert_eq!(paths::item(paths::BANK_ACCOUNTS, 9), "/cuentas-bancarias/9");
        assert_eq!(paths::item(paths::PAYMENT_METHODS, 3), "/medios-pago/3");
    }

    #[test]
    fn test_error_detail_only_for_application_failures() {
        let err = ApiError::Status { status: 400, detail: Some("La categoría ya existe".to_string()) };
        assert_eq!(err.detail(), Some("La categoría ya existe"));
        assert!(err.is_application());
        assert_eq!(err.to_string(), "Server error 400: La categoría ya existe");

        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(err.to_string(), "Server error 500: no detail");

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.detail(), None);
        assert!(!err.is_application());
    }
}
