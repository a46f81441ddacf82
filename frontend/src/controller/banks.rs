use log::{info, warn};
use shared::EntityId;

use super::{create_failure_message, TrackerController};
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::derived;
use crate::state::{BankForm, PaymentMethodForm};

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Name of a loaded bank, or "N/A"
    pub fn bank_name(&self, id: EntityId) -> String {
        derived::bank_name(&self.data.banks, id)
    }

    pub async fn create_bank(&mut self) {
        let payload = match self.forms.bank.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Bank form rejected: {}", e);
                self.notifier.error(&format!("Error al crear banco: {}", e));
                return;
            }
        };

        match self.api.create_bank(&payload).await {
            Ok(()) => {
                info!("✅ Bank created: {}", payload.nombre);
                self.forms.bank = BankForm::default();
                self.load_banks().await;
                self.notifier.success("Banco creado exitosamente");
            }
            Err(e) => {
                let message = create_failure_message(&e, "Error al crear banco", "Error al crear el banco");
                self.report_failure("create bank", &e, &message);
            }
        }
    }

    /// Delete a bank; its payment methods go with it, so both lists reload
    pub async fn delete_bank(&mut self, id: EntityId) {
        let prompt = format!(
            "¿Eliminar el banco \"{}\"?\n\nEsto también eliminará sus medios de pago.",
            self.bank_name(id)
        );
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_bank(id).await {
            Ok(()) => {
                info!("🗑️ Bank {} deleted", id);
                self.load_banks_and_payment_methods().await;
                self.notifier.success("Banco eliminado exitosamente");
            }
            Err(e) => self.report_failure("delete bank", &e, "Error al eliminar el banco"),
        }
    }

    pub async fn create_payment_method(&mut self) {
        let payload = match self.forms.payment_method.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Payment method form rejected: {}", e);
                self.notifier.error(&format!("Error al crear medio de pago: {}", e));
                return;
            }
        };

        match self.api.create_payment_method(&payload).await {
            Ok(()) => {
                info!("✅ Payment method created: {} ({})", payload.nombre, payload.tipo);
                self.forms.payment_method = PaymentMethodForm::default();
                self.load_payment_methods().await;
                self.notifier.success("Medio de pago creado exitosamente");
            }
            Err(e) => {
                let message = create_failure_message(
                    &e,
                    "Error al crear medio de pago",
                    "Error al crear el medio de pago",
                );
                self.report_failure("create payment method", &e, &message);
            }
        }
    }

    pub async fn delete_payment_method(&mut self, id: EntityId) {
        let prompt = match self.data.payment_methods.iter().find(|m| m.id == id) {
            Some(method) => format!("¿Eliminar el medio de pago \"{}\"?", method.name),
            None => "¿Eliminar este medio de pago?".to_string(),
        };
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_payment_method(id).await {
            Ok(()) => {
                info!("🗑️ Payment method {} deleted", id);
                self.load_payment_methods().await;
                self.notifier.success("Medio de pago eliminado exitosamente");
            }
            Err(e) => self.report_failure("delete payment method", &e, "Error al eliminar el medio de pago"),
        }
    }
}
