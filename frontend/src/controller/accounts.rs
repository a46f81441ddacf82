//! Bank accounts and transfers between them.

use log::{info, warn};
use shared::{BankAccountUpdate, EntityId};

use super::{create_failure_message, TrackerController};
use crate::charts::ChartFactory;
use crate::services::{Notifier, TrackerApi};
use crate::state::derived;
use crate::state::{BankAccountForm, TransferForm};

impl<A, N, F> TrackerController<A, N, F>
where
    A: TrackerApi,
    N: Notifier,
    F: ChartFactory,
{
    /// Name of a loaded bank account, or "N/A"
    pub fn account_name(&self, id: EntityId) -> String {
        derived::account_name(&self.data.bank_accounts, id)
    }

    /// Reset the account form and show the "new account" modal
    pub fn open_new_account_form(&mut self) {
        self.forms.bank_account = BankAccountForm::default();
        self.ui.new_account_modal = true;
    }

    pub async fn create_bank_account(&mut self) {
        let payload = match self.forms.bank_account.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Bank account form rejected: {}", e);
                self.notifier.error(&format!("Error al crear cuenta: {}", e));
                return;
            }
        };

        match self.api.create_bank_account(&payload).await {
            Ok(()) => {
                info!("✅ Bank account created: {}", payload.nombre);
                self.ui.new_account_modal = false;
                self.forms.bank_account = BankAccountForm::default();
                self.load_bank_accounts().await;
                self.notifier.success("Cuenta bancaria creada exitosamente");
            }
            Err(e) => {
                let message =
                    create_failure_message(&e, "Error al crear cuenta", "Error al crear la cuenta bancaria");
                self.report_failure("create bank account", &e, &message);
            }
        }
    }

    /// Send only the changed fields of an account
    pub async fn update_bank_account(&mut self, id: EntityId, update: BankAccountUpdate) {
        if update.is_empty() {
            return;
        }
        match self.api.update_bank_account(id, &update).await {
            Ok(()) => {
                info!("✏️ Bank account {} updated", id);
                self.load_bank_accounts().await;
            }
            Err(e) => self.report_failure("update bank account", &e, "Error al actualizar la cuenta"),
        }
    }

    /// Delete an account; the server drops its incomes too
    pub async fn delete_bank_account(&mut self, id: EntityId) {
        let prompt = format!(
            "¿Eliminar la cuenta \"{}\"?\n\nEsto también eliminará todos los ingresos asociados.",
            self.account_name(id)
        );
        if !self.notifier.confirm(&prompt) {
            return;
        }

        match self.api.delete_bank_account(id).await {
            Ok(()) => {
                info!("🗑️ Bank account {} deleted", id);
                self.load_bank_accounts().await;
                self.notifier.success("Cuenta eliminada exitosamente");
            }
            Err(e) => self.report_failure("delete bank account", &e, "Error al eliminar la cuenta"),
        }
    }

    /// Move money between two accounts; both balances change, so accounts reload too
    pub async fn create_transfer(&mut self) {
        let payload = match self.forms.transfer.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Transfer form rejected: {}", e);
                self.notifier.error(&format!("Error al registrar transferencia: {}", e));
                return;
            }
        };

        match self.api.create_transfer(&payload).await {
            Ok(()) => {
                info!(
                    "✅ Transfer of ${:.2} from account {} to {}",
                    payload.monto, payload.cuenta_origen_id, payload.cuenta_destino_id
                );
                self.forms.transfer = TransferForm::new(self.today());
                self.load_transfers().await;
                self.load_bank_accounts().await;
                self.notifier.success("Transferencia registrada exitosamente");
            }
            Err(e) => {
                let message = create_failure_message(
                    &e,
                    "Error al registrar transferencia",
                    "Error al registrar la transferencia",
                );
                self.report_failure("create transfer", &e, &message);
            }
        }
    }
}
