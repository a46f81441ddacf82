use log::{info, warn};
use shared::EntityId;

use super::{create_failure_message, TrackerController};
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::IncomeForm;

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Submit the income form; the credited account's balance changes too,
    /// so bank accounts are reloaded after the incomes
    pub async fn create_income(&mut self) {
        let payload = match self.forms.income.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Income form rejected: {}", e);
                self.notifier.error(&format!("Error al registrar ingreso: {}", e));
                return;
            }
        };

        match self.api.create_income(&payload).await {
            Ok(()) => {
                info!("✅ Income created: {} ${:.2}", payload.descripcion, payload.monto);
                self.forms.income = IncomeForm::new(self.today());
                self.load_incomes().await;
                self.load_bank_accounts().await;
                self.notifier.success("Ingreso registrado exitosamente");
            }
            Err(e) => {
                let message =
                    create_failure_message(&e, "Error al registrar ingreso", "Error al registrar el ingreso");
                self.report_failure("create income", &e, &message);
            }
        }
    }

    pub async fn delete_income(&mut self, id: EntityId) {
        let prompt = match self.data.incomes.iter().find(|i| i.id == id) {
            Some(income) if !income.description.is_empty() => {
                format!("¿Estás seguro de eliminar el ingreso \"{}\"?", income.description)
            }
            _ => "¿Estás seguro de eliminar este ingreso?".to_string(),
        };
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_income(id).await {
            Ok(()) => {
                info!("🗑️ Income {} deleted", id);
                self.load_incomes().await;
                self.load_bank_accounts().await;
                self.notifier.success("Ingreso eliminado exitosamente");
            }
            Err(e) => self.report_failure("delete income", &e, "Error al eliminar el ingreso"),
        }
    }
}
