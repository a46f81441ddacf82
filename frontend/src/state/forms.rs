//! # Form Buffers
//!
//! Raw text as typed by the user for every create form, plus the conversion
//! from that text to the typed payload sent to the server.
//!
//! Conversion rules:
//! - required amounts and ids must parse, otherwise the form is rejected
//!   before any request is made
//! - optional ids that are blank or unparseable become `None` (JSON `null`)
//! - budgets and opening balances fall back to 0 when unparseable

use chrono::NaiveDate;
use shared::{
    EntityId, NewBank, NewBankAccount, NewCategory, NewExpense, NewIncome, NewPaymentMethod,
    NewTransfer,
};

use crate::services::date_utils;

pub const DEFAULT_CATEGORY_ICON: &str = "💰";
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";
pub const DEFAULT_INCOME_CATEGORY: &str = "Salario";
pub const DEFAULT_ACCOUNT_TYPE: &str = "Ahorro";

/// Why a form could not be turned into a payload (shown to the user as-is)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("el campo \"{field}\" debe ser un número válido")]
    InvalidNumber { field: &'static str },

    #[error("el campo \"{field}\" es obligatorio")]
    Missing { field: &'static str },

    #[error("la fecha \"{0}\" no es válida")]
    InvalidDate(String),

    #[error("la cuenta de origen y la de destino deben ser distintas")]
    SameAccount,
}

fn parse_amount(raw: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing { field });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormError::InvalidNumber { field })
}

/// Lenient number used for budgets and balances: anything unparseable is 0
pub fn parse_amount_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn parse_id(raw: &str, field: &'static str) -> Result<EntityId, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing { field });
    }
    trimmed
        .parse::<EntityId>()
        .map_err(|_| FormError::InvalidNumber { field })
}

/// Blank or unparseable references become `None`
pub fn parse_optional_id(raw: &str) -> Option<EntityId> {
    raw.trim().parse::<EntityId>().ok()
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    date_utils::parse_iso_date(raw).ok_or_else(|| FormError::InvalidDate(raw.to_string()))
}

fn required_text(raw: &str, field: &'static str) -> Result<String, FormError> {
    if raw.trim().is_empty() {
        Err(FormError::Missing { field })
    } else {
        Ok(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub date: String,
    pub amount: String,
    pub description: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub bank_id: String,
    pub payment_method_id: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: date_utils::to_iso(today),
            amount: String::new(),
            description: String::new(),
            category_id: String::new(),
            subcategory_id: String::new(),
            bank_id: String::new(),
            payment_method_id: String::new(),
        }
    }

    pub fn to_payload(&self) -> Result<NewExpense, FormError> {
        Ok(NewExpense {
            fecha: parse_date(&self.date)?,
            monto: parse_amount(&self.amount, "monto")?,
            descripcion: self.description.clone(),
            categoria_id: parse_id(&self.category_id, "categoría")?,
            subcategoria_id: parse_optional_id(&self.subcategory_id),
            banco_id: parse_optional_id(&self.bank_id),
            medio_pago_id: parse_optional_id(&self.payment_method_id),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeForm {
    pub date: String,
    pub amount: String,
    pub description: String,
    pub income_category: String,
    pub bank_account_id: String,
}

impl IncomeForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: date_utils::to_iso(today),
            amount: String::new(),
            description: String::new(),
            income_category: DEFAULT_INCOME_CATEGORY.to_string(),
            bank_account_id: String::new(),
        }
    }

    pub fn to_payload(&self) -> Result<NewIncome, FormError> {
        Ok(NewIncome {
            fecha: parse_date(&self.date)?,
            monto: parse_amount(&self.amount, "monto")?,
            descripcion: self.description.clone(),
            categoria_ingreso: self.income_category.clone(),
            cuenta_bancaria_id: parse_id(&self.bank_account_id, "cuenta bancaria")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub monthly_budget: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            monthly_budget: "0".to_string(),
        }
    }
}

impl CategoryForm {
    pub fn to_payload(&self) -> Result<NewCategory, FormError> {
        let icon = if self.icon.trim().is_empty() {
            DEFAULT_CATEGORY_ICON.to_string()
        } else {
            self.icon.clone()
        };
        Ok(NewCategory {
            nombre: required_text(&self.name, "nombre")?,
            icono: icon,
            color: self.color.clone(),
            presupuesto_mensual: parse_amount_or_zero(&self.monthly_budget),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankForm {
    pub name: String,
}

impl BankForm {
    pub fn to_payload(&self) -> Result<NewBank, FormError> {
        Ok(NewBank {
            nombre: required_text(&self.name, "nombre")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodForm {
    pub kind: String,
    pub name: String,
    pub bank_id: String,
}

impl PaymentMethodForm {
    pub fn to_payload(&self) -> Result<NewPaymentMethod, FormError> {
        Ok(NewPaymentMethod {
            tipo: self.kind.clone(),
            nombre: self.name.clone(),
            banco_id: parse_id(&self.bank_id, "banco")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccountForm {
    pub name: String,
    pub bank_id: String,
    pub transactional_balance: String,
    pub savings_balance: String,
    pub account_type: String,
}

impl Default for BankAccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            bank_id: String::new(),
            transactional_balance: "0".to_string(),
            savings_balance: "0".to_string(),
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
        }
    }
}

impl BankAccountForm {
    pub fn to_payload(&self) -> Result<NewBankAccount, FormError> {
        Ok(NewBankAccount {
            nombre: self.name.clone(),
            banco_id: parse_id(&self.bank_id, "banco")?,
            saldo_transaccional: parse_amount_or_zero(&self.transactional_balance),
            saldo_ahorros: parse_amount_or_zero(&self.savings_balance),
            tipo_cuenta: self.account_type.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferForm {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl TransferForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            from_account_id: String::new(),
            to_account_id: String::new(),
            amount: String::new(),
            date: date_utils::to_iso(today),
            description: String::new(),
        }
    }

    pub fn to_payload(&self) -> Result<NewTransfer, FormError> {
        let from = parse_id(&self.from_account_id, "cuenta de origen")?;
        let to = parse_id(&self.to_account_id, "cuenta de destino")?;
        if from == to {
            return Err(FormError::SameAccount);
        }
        let description = self.description.trim();
        Ok(NewTransfer {
            cuenta_origen_id: from,
            cuenta_destino_id: to,
            monto: parse_amount(&self.amount, "monto")?,
            fecha: parse_date(&self.date)?,
            descripcion: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Every create form the tracker shows
#[derive(Debug, Clone, PartialEq)]
pub struct FormBuffers {
    pub expense: ExpenseForm,
    pub income: IncomeForm,
    pub category: CategoryForm,
    pub bank: BankForm,
    pub payment_method: PaymentMethodForm,
    pub bank_account: BankAccountForm,
    pub transfer: TransferForm,
}

impl FormBuffers {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            expense: ExpenseForm::new(today),
            income: IncomeForm::new(today),
            category: CategoryForm::default(),
            bank: BankForm::default(),
            payment_method: PaymentMethodForm::default(),
            bank_account: BankAccountForm::default(),
            transfer: TransferForm::new(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn test_expense_defaults() {
        let form = ExpenseForm::new(today());
        assert_eq!(form.date, "2025-03-15");
        assert_eq!(form.amount, "");
        assert_eq!(form.category_id, "");
        assert_eq!(form.subcategory_id, "");
    }

    #[test]
    fn test_expense_blank_references_become_none() {
        let form = ExpenseForm {
            amount: "120.50".to_string(),
            description: "Gasolina".to_string(),
            category_id: "3".to_string(),
            subcategory_id: "   ".to_string(),
            bank_id: "abc".to_string(),
            ..ExpenseForm::new(today())
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.monto, 120.5);
        assert_eq!(payload.categoria_id, 3);
        assert_eq!(payload.subcategoria_id, None);
        assert_eq!(payload.banco_id, None);
        assert_eq!(payload.medio_pago_id, None);
    }

    #[test]
    fn test_expense_rejects_bad_required_fields() {
        let mut form = ExpenseForm::new(today());
        form.category_id = "1".to_string();
        assert_eq!(form.to_payload(), Err(FormError::Missing { field: "monto" }));

        form.amount = "doce".to_string();
        assert_eq!(form.to_payload(), Err(FormError::InvalidNumber { field: "monto" }));

        form.amount = "12".to_string();
        form.category_id = String::new();
        assert_eq!(form.to_payload(), Err(FormError::Missing { field: "categoría" }));

        form.category_id = "1".to_string();
        form.date = "15/03/2025".to_string();
        assert_eq!(form.to_payload(), Err(FormError::InvalidDate("15/03/2025".to_string())));
    }

    #[test]
    fn test_category_payload_fallbacks() {
        let form = CategoryForm {
            name: "Mascotas".to_string(),
            icon: "".to_string(),
            monthly_budget: "mucho".to_string(),
            ..CategoryForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.icono, "💰");
        assert_eq!(payload.color, "#3B82F6");
        assert_eq!(payload.presupuesto_mensual, 0.0);

        assert_eq!(
            CategoryForm::default().to_payload(),
            Err(FormError::Missing { field: "nombre" })
        );
    }

    #[test]
    fn test_bank_account_payload() {
        let form = BankAccountForm {
            name: "Nómina".to_string(),
            bank_id: "2".to_string(),
            transactional_balance: "1500.25".to_string(),
            savings_balance: "".to_string(),
            ..BankAccountForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.banco_id, 2);
        assert_eq!(payload.saldo_transaccional, 1500.25);
        assert_eq!(payload.saldo_ahorros, 0.0);
        assert_eq!(payload.tipo_cuenta, "Ahorro");
    }

    #[test]
    fn test_income_requires_account() {
        let form = IncomeForm {
            amount: "8000".to_string(),
            ..IncomeForm::new(today())
        };
        assert_eq!(form.income_category, "Salario");
        assert_eq!(form.to_payload(), Err(FormError::Missing { field: "cuenta bancaria" }));
    }

    #[test]
    fn test_transfer_rejects_same_account() {
        let form = TransferForm {
            from_account_id: "4".to_string(),
            to_account_id: "4".to_string(),
            amount: "100".to_string(),
            ..TransferForm::new(today())
        };
        assert_eq!(form.to_payload(), Err(FormError::SameAccount));

        let form = TransferForm {
            to_account_id: "5".to_string(),
            ..form
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.cuenta_destino_id, 5);
        assert_eq!(payload.descripcion, None);
    }

    #[test]
    fn test_lenient_amounts() {
        assert_eq!(parse_amount_or_zero(" 12.5 "), 12.5);
        assert_eq!(parse_amount_or_zero(""), 0.0);
        assert_eq!(parse_amount_or_zero("NaN"), 0.0);
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(parse_optional_id("7"), Some(7));
    }
}
