/// General "get in touch" section
///
/// Same phases as the contact overlay but it never closes: after a send
/// the confirmation (or error) stays until the next submit.
use crate::api::types::{ContactResponse, InquiryRequest};

use super::forms::{ContactField, InquiryForm};
use super::modal::{ModalPhase, CONTACT_FAILED, CONTACT_INCOMPLETE, CONTACT_REJECTED};

#[derive(Debug, Clone)]
pub struct InquirySection {
    form: InquiryForm,
    phase: ModalPhase,
}

impl Default for InquirySection {
    fn default() -> Self {
        Self {
            form: InquiryForm::default(),
            phase: ModalPhase::Open,
        }
    }
}

impl InquirySection {
    pub fn set(&mut self, field: ContactField, value: String) {
        if self.phase.is_submitting() {
            return;
        }
        self.form.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Option<InquiryRequest> {
        if self.phase.is_submitting() {
            return None;
        }
        if !self.form.is_complete() {
            self.phase = ModalPhase::Error(CONTACT_INCOMPLETE.to_string());
            return None;
        }
        self.phase = ModalPhase::Submitting;
        Some(self.form.to_request())
    }

    pub fn finish_submit(&mut self, result: Result<ContactResponse, String>) {
        if !self.phase.is_submitting() {
            return;
        }
        self.phase = match result {
            Ok(response) if response.success => {
                tracing::info!("📨 inquiry sent");
                self.form.reset();
                ModalPhase::Success(response.message)
            }
            Ok(response) => {
                tracing::warn!(message = %response.message, "inquiry rejected");
                ModalPhase::Error(CONTACT_REJECTED.to_string())
            }
            Err(error) => {
                tracing::error!(%error, "error submitting inquiry");
                ModalPhase::Error(CONTACT_FAILED.to_string())
            }
        };
    }

    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    /// Confirmation or error text, if any
    pub fn notice(&self) -> Option<(&str, bool)> {
        match &self.phase {
            ModalPhase::Success(message) => Some((message.as_str(), true)),
            ModalPhase::Error(message) => Some((message.as_str(), false)),
            _ => None,
        }
    }
}
