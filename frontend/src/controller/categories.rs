//! # Categories and Budgets
//!
//! Category CRUD plus the two budget editors:
//! - single edit, opened from a summary row and matched to its category by name
//! - bulk edit, one buffer per category, saved with concurrent PUTs
//!
//! Any category change also changes the summary, so both are reloaded.

use futures::future::join_all;
use log::{error, info, warn};
use shared::{CategoryField, CategoryUpdate, EntityId, SummaryRow};

use super::{create_failure_message, TrackerController};
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::forms::parse_amount_or_zero;
use crate::state::{BudgetDrafts, BudgetEdit, CategoryForm};

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Reset the category form and show the "new category" modal
    pub fn open_new_category_form(&mut self) {
        self.forms.category = CategoryForm::default();
        self.ui.new_category_modal = true;
    }

    pub async fn create_category(&mut self) {
        let payload = match self.forms.category.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Category form rejected: {}", e);
                self.notifier.error(&format!("Error al crear categoría: {}", e));
                return;
            }
        };

        match self.api.create_category(&payload).await {
            Ok(()) => {
                info!("✅ Category created: {}", payload.nombre);
                self.ui.new_category_modal = false;
                self.forms.category = CategoryForm::default();
                self.load_categories_and_summary().await;
                self.notifier.success("Categoría creada exitosamente");
            }
            Err(e) => {
                let message =
                    create_failure_message(&e, "Error al crear categoría", "Error al crear la categoría");
                self.report_failure("create category", &e, &message);
            }
        }
    }

    /// Send only the changed fields of a category
    pub async fn update_category(&mut self, id: EntityId, update: CategoryUpdate) {
        if update.is_empty() {
            return;
        }
        match self.api.update_category(id, &update).await {
            Ok(()) => {
                info!("✏️ Category {} updated", id);
                self.load_categories_and_summary().await;
            }
            Err(e) => self.report_failure("update category", &e, "Error al actualizar la categoría"),
        }
    }

    /// Delete a category after confirmation; the server drops its expenses too,
    /// so the period expenses reload along with categories and summary
    pub async fn delete_category(&mut self, id: EntityId) {
        let name = self
            .data
            .categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let prompt = format!(
            "¿Estás seguro de eliminar la categoría \"{}\"?\n\nEsto también eliminará todos los gastos asociados.",
            name
        );
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_category(id).await {
            Ok(()) => {
                info!("🗑️ Category {} ({}) deleted", id, name);
                // its expenses are gone server-side too
                self.load_categories().await;
                self.load_period_data().await;
                self.notifier.success("Categoría eliminada exitosamente");
            }
            Err(e) => self.report_failure("delete category", &e, "Error al eliminar la categoría"),
        }
    }

    /// Open the single budget editor for a summary row
    ///
    /// Rows carry only the category name; a row whose name matches no loaded
    /// category opens nothing.
    pub fn begin_budget_edit(&mut self, row: &SummaryRow) {
        match self.data.categories.iter().find(|c| c.name == row.category_name) {
            Some(category) => {
                self.budget_edit = Some(BudgetEdit {
                    category_id: category.id,
                    category_name: category.name.clone(),
                    pending: row.monthly_budget.to_string(),
                });
                self.ui.budget_modal = true;
            }
            None => warn!("⚠️ No category named {:?} to edit", row.category_name),
        }
    }

    pub fn set_budget_edit_value(&mut self, raw: String) {
        if let Some(edit) = self.budget_edit.as_mut() {
            edit.pending = raw;
        }
    }

    pub fn cancel_budget_edit(&mut self) {
        self.budget_edit = None;
        self.ui.budget_modal = false;
    }

    pub async fn save_budget_edit(&mut self) {
        let Some(edit) = self.budget_edit.clone() else {
            return;
        };
        let budget = match edit.pending.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                warn!("⚠️ Budget {:?} for {} is not a number", edit.pending, edit.category_name);
                self.notifier.error("El presupuesto debe ser un número válido");
                return;
            }
        };

        let update = CategoryUpdate::from(CategoryField::MonthlyBudget(budget));
        match self.api.update_category(edit.category_id, &update).await {
            Ok(()) => {
                info!("💵 Budget for {} set to {:.2}", edit.category_name, budget);
                self.ui.budget_modal = false;
                self.budget_edit = None;
                self.load_categories_and_summary().await;
                self.notifier.success("Presupuesto actualizado exitosamente");
            }
            Err(e) => self.report_failure("update budget", &e, "Error al actualizar el presupuesto"),
        }
    }

    /// Seed one buffer per category and show the bulk budget editor
    pub fn open_budget_drafts(&mut self) {
        self.budget_drafts = BudgetDrafts::from_categories(&self.data.categories);
        self.ui.budgets_modal = true;
    }

    pub fn set_budget_draft(&mut self, category_id: EntityId, raw: String) {
        self.budget_drafts.set(category_id, raw);
    }

    /// PUT every category's budget concurrently
    ///
    /// Updates that succeed are not rolled back when others fail. Categories
    /// and summary are reloaded either way so the page shows what the server
    /// actually stored; the modal only closes when every update succeeded.
    pub async fn save_all_budgets(&mut self) {
        let updates: Vec<(EntityId, CategoryUpdate)> = self
            .data
            .categories
            .iter()
            .map(|c| {
                let budget = parse_amount_or_zero(self.budget_drafts.get(c.id));
                (c.id, CategoryUpdate::from(CategoryField::MonthlyBudget(budget)))
            })
            .collect();
        info!("💵 Saving {} budgets", updates.len());

        let results = join_all(
            updates
                .iter()
                .map(|(id, update)| self.api.update_category(*id, update)),
        )
        .await;

        let mut failed = 0;
        let mut transport_failure = false;
        for ((id, _), result) in updates.iter().zip(&results) {
            if let Err(e) = result {
                error!("❌ Failed to update budget for category {}: {}", id, e);
                failed += 1;
                transport_failure |= !e.is_application();
            }
        }

        self.load_categories_and_summary().await;

        if failed == 0 {
            self.ui.budgets_modal = false;
            self.notifier.success("Presupuestos actualizados exitosamente");
        } else if transport_failure {
            warn!("⚠️ {} of {} budget updates failed", failed, updates.len());
            self.notifier.error("Error al guardar los presupuestos");
        } else {
            warn!("⚠️ {} of {} budget updates failed", failed, updates.len());
            self.notifier.error("Error al actualizar algunos presupuestos");
        }
    }
}
