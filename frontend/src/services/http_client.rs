use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    Bank, BankAccount, BankAccountUpdate, Category, CategoryUpdate, EntityId, ErrorBody, Expense,
    Income, NewBank, NewBankAccount, NewCategory, NewExpense, NewIncome, NewPaymentMethod,
    NewTransfer, PaymentMethod, Period, Subcategory, Summary, Transfer,
};

use crate::config::TrackerConfig;
use crate::services::api::{paths, ApiError, ApiResult, TrackerApi};

/// API client for communicating with the backend server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for the configured base URL, falling back to the page's own origin
    pub fn from_config(config: &TrackerConfig) -> Self {
        match &config.base_url {
            Some(url) => Self::with_base_url(url.clone()),
            None => Self::with_base_url(page_origin()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> ApiResult<()> {
        let response = builder
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_json(Request::post(&self.url(path)), body).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_json(Request::put(&self.url(path)), body).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the server's `detail`
async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
        .and_then(|body| body.message());
    Err(ApiError::Status { status, detail })
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[async_trait(?Send)]
impl TrackerApi for ApiClient {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_json(paths::CATEGORIES).await
    }

    async fn create_category(&self, payload: &NewCategory) -> ApiResult<()> {
        self.post(paths::CATEGORIES, payload).await
    }

    async fn update_category(&self, id: EntityId, update: &CategoryUpdate) -> ApiResult<()> {
        self.put(&paths::item(paths::CATEGORIES, id), update).await
    }

    async fn delete_category(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::CATEGORIES, id)).await
    }

    async fn list_subcategories(&self, category_id: EntityId) -> ApiResult<Vec<Subcategory>> {
        self.get_json(&paths::subcategories(category_id)).await
    }

    async fn list_expenses(&self, period: Period, limit: u32) -> ApiResult<Vec<Expense>> {
        self.get_json(&paths::expenses(period, limit)).await
    }

    async fn create_expense(&self, payload: &NewExpense) -> ApiResult<()> {
        self.post(paths::EXPENSES, payload).await
    }

    async fn delete_expense(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::EXPENSES, id)).await
    }

    async fn get_summary(&self, period: Period) -> ApiResult<Summary> {
        self.get_json(&paths::summary(period)).await
    }

    async fn list_banks(&self) -> ApiResult<Vec<Bank>> {
        self.get_json(paths::BANKS).await
    }

    async fn create_bank(&self, payload: &NewBank) -> ApiResult<()> {
        self.post(paths::BANKS, payload).await
    }

    async fn delete_bank(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::BANKS, id)).await
    }

    async fn list_payment_methods(&self) -> ApiResult<Vec<PaymentMethod>> {
        self.get_json(paths::PAYMENT_METHODS).await
    }

    async fn create_payment_method(&self, payload: &NewPaymentMethod) -> ApiResult<()> {
        self.post(paths::PAYMENT_METHODS, payload).await
    }

    async fn delete_payment_method(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::PAYMENT_METHODS, id)).await
    }

    async fn list_bank_accounts(&self) -> ApiResult<Vec<BankAccount>> {
        self.get_json(paths::BANK_ACCOUNTS).await
    }

    async fn create_bank_account(&self, payload: &NewBankAccount) -> ApiResult<()> {
        self.post(paths::BANK_ACCOUNTS, payload).await
    }

    async fn update_bank_account(&self, id: EntityId, update: &BankAccountUpdate) -> ApiResult<()> {
        self.put(&paths::item(paths::BANK_ACCOUNTS, id), update).await
    }

    async fn delete_bank_account(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::BANK_ACCOUNTS, id)).await
    }

    async fn list_incomes(&self, period: Period, limit: u32) -> ApiResult<Vec<Income>> {
        self.get_json(&paths::incomes(period, limit)).await
    }

    async fn create_income(&self, payload: &NewIncome) -> ApiResult<()> {
        self.post(paths::INCOMES, payload).await
    }

    async fn delete_income(&self, id: EntityId) -> ApiResult<()> {
        self.delete(&paths::item(paths::INCOMES, id)).await
    }

    async fn list_transfers(&self) -> ApiResult<Vec<Transfer>> {
        self.get_json(paths::TRANSFERS).await
    }

    async fn create_transfer(&self, payload: &NewTransfer) -> ApiResult<()> {
        self.post(paths::TRANSFERS, payload).await
    }
}
