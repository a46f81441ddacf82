use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, NaiveDate};

/// Identifier assigned by the server to every record
pub type EntityId = i64;

fn default_icon() -> String {
    "💰".to_string()
}

fn default_color() -> String {
    "#3B82F6".to_string()
}

fn active_flag() -> i64 {
    1
}

/// Expense category with its monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "icono", default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(rename = "presupuesto_mensual", default)]
    pub monthly_budget: f64,
    /// Present on list responses only
    #[serde(rename = "subcategorias", default)]
    pub subcategories: Vec<Subcategory>,
}

/// Subcategory scoped to a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria_id")]
    pub category_id: EntityId,
}

/// Expense record (`gasto`) as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "categoria_id")]
    pub category_id: EntityId,
    #[serde(rename = "subcategoria_id", default)]
    pub subcategory_id: Option<EntityId>,
    #[serde(rename = "banco_id", default)]
    pub bank_id: Option<EntityId>,
    #[serde(rename = "medio_pago_id", default)]
    pub payment_method_id: Option<EntityId>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
    #[serde(rename = "subcategoria", default)]
    pub subcategory: Option<Subcategory>,
}

/// Income record (`ingreso`)
///
/// The server schema names the description `nombre` and the category `tipo`;
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: EntityId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "monto", default)]
    pub amount: Option<f64>,
    #[serde(rename = "descripcion", alias = "nombre", default)]
    pub description: String,
    #[serde(rename = "categoria_ingreso", alias = "tipo", default)]
    pub income_category: String,
    #[serde(rename = "cuenta_bancaria_id")]
    pub bank_account_id: EntityId,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default = "active_flag")]
    pub activo: i64,
}

/// Card, cash or transfer method tied to a bank (`medio de pago`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: EntityId,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "banco_id")]
    pub bank_id: EntityId,
    #[serde(default = "active_flag")]
    pub activo: i64,
}

/// Bank account with separate transactional and savings balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "banco_id")]
    pub bank_id: EntityId,
    #[serde(rename = "saldo_transaccional", default)]
    pub transactional_balance: Option<f64>,
    #[serde(rename = "saldo_ahorros", alias = "saldo_ahorro", default)]
    pub savings_balance: Option<f64>,
    #[serde(rename = "tipo_cuenta", default)]
    pub account_type: Option<String>,
    #[serde(default = "active_flag")]
    pub activa: i64,
}

impl BankAccount {
    /// Transactional plus savings balance, missing balances counting as zero
    pub fn total_balance(&self) -> f64 {
        self.transactional_balance.unwrap_or(0.0) + self.savings_balance.unwrap_or(0.0)
    }
}

/// Money moved between two bank accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: EntityId,
    #[serde(rename = "cuenta_origen_id")]
    pub from_account_id: EntityId,
    #[serde(rename = "cuenta_destino_id")]
    pub to_account_id: EntityId,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Spend-vs-budget line for one category (`resumen.categorias[]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "categoria")]
    pub category_name: String,
    #[serde(rename = "presupuesto_mensual", default)]
    pub monthly_budget: f64,
    #[serde(rename = "total_gastado", default)]
    pub total_spent: f64,
    #[serde(rename = "diferencia", default)]
    pub difference: f64,
    #[serde(rename = "porcentaje_usado", default)]
    pub percent_used: f64,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    #[serde(rename = "presupuesto_total", default)]
    pub budget_total: f64,
    #[serde(rename = "gastado_total", default)]
    pub spent_total: f64,
    #[serde(rename = "diferencia_total", default)]
    pub difference_total: f64,
}

/// Server-computed summary (`resumen`) for one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
    #[serde(rename = "categorias", default)]
    pub rows: Vec<SummaryRow>,
    #[serde(rename = "totales", default)]
    pub totals: SummaryTotals,
}

// ---------------------------------------------------------------------------
// Create payloads
// ---------------------------------------------------------------------------

/// Body of `POST /gastos`. Blank optional references travel as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub fecha: NaiveDate,
    pub monto: f64,
    pub descripcion: String,
    pub categoria_id: EntityId,
    pub subcategoria_id: Option<EntityId>,
    pub banco_id: Option<EntityId>,
    pub medio_pago_id: Option<EntityId>,
}

/// Body of `POST /ingresos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncome {
    pub fecha: NaiveDate,
    pub monto: f64,
    pub descripcion: String,
    pub categoria_ingreso: String,
    pub cuenta_bancaria_id: EntityId,
}

/// Body of `POST /categorias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub nombre: String,
    pub icono: String,
    pub color: String,
    pub presupuesto_mensual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBank {
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPaymentMethod {
    pub tipo: String,
    pub nombre: String,
    pub banco_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBankAccount {
    pub nombre: String,
    pub banco_id: EntityId,
    pub saldo_transaccional: f64,
    pub saldo_ahorros: f64,
    pub tipo_cuenta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransfer {
    pub cuenta_origen_id: EntityId,
    pub cuenta_destino_id: EntityId,
    pub monto: f64,
    pub fecha: NaiveDate,
    pub descripcion: Option<String>,
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

/// A single updatable category field
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryField {
    Name(String),
    Icon(String),
    Color(String),
    MonthlyBudget(f64),
}

/// Body of `PUT /categorias/{id}`; unset fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "icono", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "presupuesto_mensual", skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
}

impl CategoryUpdate {
    pub fn with(mut self, field: CategoryField) -> Self {
        match field {
            CategoryField::Name(name) => self.name = Some(name),
            CategoryField::Icon(icon) => self.icon = Some(icon),
            CategoryField::Color(color) => self.color = Some(color),
            CategoryField::MonthlyBudget(budget) => self.monthly_budget = Some(budget),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon.is_none() && self.color.is_none() && self.monthly_budget.is_none()
    }
}

impl From<CategoryField> for CategoryUpdate {
    fn from(field: CategoryField) -> Self {
        Self::default().with(field)
    }
}

impl FromIterator<CategoryField> for CategoryUpdate {
    fn from_iter<I: IntoIterator<Item = CategoryField>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

/// Which of the two account balances a typed-in value targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceKind {
    Transactional,
    Savings,
}

/// A single updatable bank account field
#[derive(Debug, Clone, PartialEq)]
pub enum BankAccountField {
    Name(String),
    BankId(EntityId),
    TransactionalBalance(f64),
    SavingsBalance(f64),
    AccountType(String),
}

impl BankAccountField {
    /// Parse a balance typed into an inline editor; `None` when it is not a number
    pub fn balance(kind: BalanceKind, raw: &str) -> Option<Self> {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(match kind {
            BalanceKind::Transactional => BankAccountField::TransactionalBalance(value),
            BalanceKind::Savings => BankAccountField::SavingsBalance(value),
        })
    }
}

/// Body of `PUT /cuentas-bancarias/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "banco_id", skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<EntityId>,
    #[serde(rename = "saldo_transaccional", skip_serializing_if = "Option::is_none")]
    pub transactional_balance: Option<f64>,
    #[serde(rename = "saldo_ahorros", skip_serializing_if = "Option::is_none")]
    pub savings_balance: Option<f64>,
    #[serde(rename = "tipo_cuenta", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl BankAccountUpdate {
    pub fn with(mut self, field: BankAccountField) -> Self {
        match field {
            BankAccountField::Name(name) => self.name = Some(name),
            BankAccountField::BankId(id) => self.bank_id = Some(id),
            BankAccountField::TransactionalBalance(v) => self.transactional_balance = Some(v),
            BankAccountField::SavingsBalance(v) => self.savings_balance = Some(v),
            BankAccountField::AccountType(t) => self.account_type = Some(t),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bank_id.is_none()
            && self.transactional_balance.is_none()
            && self.savings_balance.is_none()
            && self.account_type.is_none()
    }
}

impl From<BankAccountField> for BankAccountUpdate {
    fn from(field: BankAccountField) -> Self {
        Self::default().with(field)
    }
}

impl FromIterator<BankAccountField> for BankAccountUpdate {
    fn from_iter<I: IntoIterator<Item = BankAccountField>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

// ---------------------------------------------------------------------------
// Period filter and error bodies
// ---------------------------------------------------------------------------

/// Month/year pair selecting which expenses, incomes and summary are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidMonth(u32),
    YearTooEarly(i32),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::InvalidMonth(m) => write!(f, "Month must be between 1 and 12, got {}", m),
            PeriodError::YearTooEarly(y) => write!(f, "Year must be 2000 or later, got {}", y),
        }
    }
}

impl std::error::Error for PeriodError {}

impl Period {
    pub const MIN_YEAR: i32 = 2000;

    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if year < Self::MIN_YEAR {
            return Err(PeriodError::YearTooEarly(year));
        }
        Ok(Self { month, year })
    }

    /// Period containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Query string for the period filter, e.g. `mes=3&anio=2025&limit=100`
    pub fn query(&self, limit: Option<u32>) -> String {
        match limit {
            Some(limit) => format!("mes={}&anio={}&limit={}", self.month, self.year, limit),
            None => format!("mes={}&anio={}", self.month, self.year),
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }
}

/// Optional body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` text, when the server sent it as a plain string
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}
