//! Confirmation gate implementations

use dialoguer::Confirm;

use crate::domain::ports::ConfirmationGate;

/// Interactive yes/no prompt on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGate;

impl ConfirmationGate for PromptGate {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
