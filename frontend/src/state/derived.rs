//! # Derived Values
//!
//! Everything the view shows that is computed from fetched data rather than
//! fetched itself. All functions here are pure.

use serde::Serialize;
use shared::{
    Bank, BankAccount, Category, EntityId, Expense, Income, PaymentMethod, Period, Subcategory,
    Summary, Transfer,
};
use std::collections::BTreeMap;

use crate::state::{BudgetEdit, FormBuffers, UiFlags};

/// Placeholder shown when a referenced bank or account is not loaded
pub const MISSING_NAME: &str = "N/A";

/// First `limit` rows unless `show_all` is set
pub fn visible_rows<T>(items: &[T], show_all: bool, limit: usize) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}

/// Totals across all bank accounts; missing balances count as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AccountsSummary {
    #[serde(rename = "totalTransaccional")]
    pub total_transactional: f64,
    #[serde(rename = "totalAhorros")]
    pub total_savings: f64,
    #[serde(rename = "totalGeneral")]
    pub total_general: f64,
}

pub fn accounts_summary(accounts: &[BankAccount]) -> AccountsSummary {
    let total_transactional: f64 = accounts
        .iter()
        .map(|a| a.transactional_balance.unwrap_or(0.0))
        .sum();
    let total_savings: f64 = accounts.iter().map(|a| a.savings_balance.unwrap_or(0.0)).sum();
    AccountsSummary {
        total_transactional,
        total_savings,
        total_general: total_transactional + total_savings,
    }
}

/// Sum of income amounts, missing amounts counting as 0
pub fn incomes_total(incomes: &[Income]) -> f64 {
    incomes.iter().map(|i| i.amount.unwrap_or(0.0)).sum()
}

pub fn bank_name(banks: &[Bank], id: EntityId) -> String {
    banks
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.name.clone())
        .unwrap_or_else(|| MISSING_NAME.to_string())
}

pub fn account_name(accounts: &[BankAccount], id: EntityId) -> String {
    accounts
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| MISSING_NAME.to_string())
}

/// Snapshot of everything a view renders, rebuilt after each action
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerView {
    pub period: Period,
    pub period_label: String,

    pub expenses: Vec<Expense>,
    pub visible_expenses: Vec<Expense>,
    pub has_more_expenses: bool,

    pub incomes: Vec<Income>,
    pub visible_incomes: Vec<Income>,
    pub has_more_incomes: bool,
    pub incomes_total: f64,

    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub summary: Summary,

    pub banks: Vec<Bank>,
    pub payment_methods: Vec<PaymentMethod>,
    pub bank_accounts: Vec<BankAccount>,
    pub accounts_summary: AccountsSummary,
    pub transfers: Vec<Transfer>,

    pub budget_edit: Option<BudgetEdit>,
    pub budget_drafts: BTreeMap<EntityId, String>,
    pub budget_total: f64,

    pub forms: FormBuffers,
    pub ui: UiFlags,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn account(id: EntityId, transactional: Option<f64>, savings: Option<f64>) -> BankAccount {
        BankAccount {
            id,
            name: format!("Cuenta {}", id),
            bank_id: 1,
            transactional_balance: transactional,
            savings_balance: savings,
            account_type: None,
            activa: 1,
        }
    }

    fn income(amount: Option<f64>) -> Income {
        Income {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount,
            description: "Quincena".to_string(),
            income_category: "Salario".to_string(),
            bank_account_id: 1,
            created_at: None,
        }
    }

    #[test]
    fn test_visible_rows_respects_limit() {
        let rows: Vec<u32> = (0..12).collect();
        assert_eq!(visible_rows(&rows, false, 10).len(), 10);
        assert_eq!(visible_rows(&rows, true, 10).len(), 12);
        assert_eq!(visible_rows(&rows[..3], false, 10).len(), 3);
        assert!(visible_rows::<u32>(&[], false, 10).is_empty());
    }

    #[test]
    fn test_accounts_summary() {
        let summary = accounts_summary(&[
            account(1, Some(100.0), Some(50.0)),
            account(2, None, Some(25.0)),
        ]);
        assert_eq!(summary.total_transactional, 100.0);
        assert_eq!(summary.total_savings, 75.0);
        assert_eq!(summary.total_general, 175.0);

        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["totalGeneral"], 175.0);

        assert_eq!(accounts_summary(&[]), AccountsSummary::default());
    }

    #[test]
    fn test_incomes_total_skips_missing_amounts() {
        assert_eq!(incomes_total(&[income(Some(1000.0)), income(None), income(Some(250.5))]), 1250.5);
        assert_eq!(incomes_total(&[]), 0.0);
    }

    #[test]
    fn test_name_lookups_fall_back() {
        let banks = vec![Bank { id: 3, name: "BBVA".to_string(), activo: 1 }];
        assert_eq!(bank_name(&banks, 3), "BBVA");
        assert_eq!(bank_name(&banks, 4), "N/A");

        let accounts = vec![account(9, None, None)];
        assert_eq!(account_name(&accounts, 9), "Cuenta 9");
        assert_eq!(account_name(&[], 9), "N/A");
    }
}
