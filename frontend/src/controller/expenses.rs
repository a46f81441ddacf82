use log::{info, warn};
use shared::EntityId;

use super::{create_failure_message, TrackerController};
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::forms::parse_optional_id;
use crate::state::ExpenseForm;

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Submit the expense form
    ///
    /// On success the form goes back to its defaults (date = today) and the
    /// period's expenses and summary are reloaded.
    pub async fn create_expense(&mut self) {
        let payload = match self.forms.expense.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Expense form rejected: {}", e);
                self.notifier.error(&format!("Error al registrar gasto: {}", e));
                return;
            }
        };

        match self.api.create_expense(&payload).await {
            Ok(()) => {
                info!("✅ Expense created: {} ${:.2}", payload.descripcion, payload.monto);
                self.forms.expense = ExpenseForm::new(self.today());
                self.data.subcategories.clear();
                self.load_period_data().await;
                self.notifier.success("Gasto registrado exitosamente");
            }
            Err(e) => {
                let message =
                    create_failure_message(&e, "Error al registrar gasto", "Error al registrar el gasto");
                self.report_failure("create expense", &e, &message);
            }
        }
    }

    pub async fn delete_expense(&mut self, id: EntityId) {
        let prompt = match self.data.expenses.iter().find(|e| e.id == id) {
            Some(expense) if !expense.description.is_empty() => {
                format!("¿Estás seguro de eliminar el gasto \"{}\"?", expense.description)
            }
            _ => "¿Estás seguro de eliminar este gasto?".to_string(),
        };
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_expense(id).await {
            Ok(()) => {
                info!("🗑️ Expense {} deleted", id);
                self.load_period_data().await;
                self.notifier.success("Gasto eliminado exitosamente");
            }
            Err(e) => self.report_failure("delete expense", &e, "Error al eliminar el gasto"),
        }
    }

    /// Pick the expense form's category and load its subcategories
    ///
    /// Clearing the selection empties the subcategory list without a request.
    pub async fn select_expense_category(&mut self, raw_category_id: String) {
        self.forms.expense.category_id = raw_category_id;
        self.forms.expense.subcategory_id.clear();

        match parse_optional_id(&self.forms.expense.category_id) {
            Some(category_id) => self.load_subcategories(category_id).await,
            None => self.data.subcategories.clear(),
        }
    }
}
