//! # Budget Editing State
//!
//! Two ways to change category budgets:
//! - [`BudgetEdit`]: one category at a time, opened from a summary row
//! - [`BudgetDrafts`]: every category at once, with a live total

use shared::{Category, EntityId};
use std::collections::BTreeMap;

use crate::state::forms::parse_amount_or_zero;

/// Single-category budget editor
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEdit {
    pub category_id: EntityId,
    pub category_name: String,
    /// Text typed into the editor, seeded with the current budget
    pub pending: String,
}

/// Text buffer per category id for the bulk budget editor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetDrafts {
    values: BTreeMap<EntityId, String>,
}

impl BudgetDrafts {
    /// Seed one buffer per category with its current budget
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            values: categories
                .iter()
                .map(|c| (c.id, c.monthly_budget.to_string()))
                .collect(),
        }
    }

    pub fn set(&mut self, category_id: EntityId, raw: impl Into<String>) {
        self.values.insert(category_id, raw.into());
    }

    pub fn get(&self, category_id: EntityId) -> &str {
        self.values.get(&category_id).map(String::as_str).unwrap_or("")
    }

    /// Numeric value of a buffer; missing or unparseable buffers count as 0
    pub fn value_for(&self, category_id: EntityId) -> f64 {
        parse_amount_or_zero(self.get(category_id))
    }

    /// Sum of every buffer, coercing unparseable text to 0
    pub fn total(&self) -> f64 {
        self.values.values().map(|raw| parse_amount_or_zero(raw)).sum()
    }

    pub fn entries(&self) -> &BTreeMap<EntityId, String> {
        &self.values
    }
}
