use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::listing::{categories, countries, LocationValue};

use super::commands::{CommandError, Interaction};

/// Pickers backed by dialoguer selects.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CommandError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Leave the shell? Unsaved listing details are lost.")
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for TerminalInteraction {
    fn pick_category(&mut self, current: &str) -> Result<Option<String>, CommandError> {
        let items: Vec<String> = categories()
            .iter()
            .map(|category| format!("{:<12} {}", category.label, category.description))
            .collect();
        let default = categories()
            .iter()
            .position(|category| category.label == current)
            .unwrap_or(0);
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Which of these best describes your place?")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(CommandError::from)?;
        Ok(selection.map(|index| categories()[index].label.to_string()))
    }

    fn pick_location(
        &mut self,
        current: Option<&LocationValue>,
    ) -> Result<Option<LocationValue>, CommandError> {
        let items: Vec<String> = countries().iter().map(LocationValue::display).collect();
        let default = current
            .and_then(|location| {
                countries()
                    .iter()
                    .position(|country| country.value == location.value)
            })
            .unwrap_or(0);
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Where is your place located?")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(CommandError::from)?;
        Ok(selection.map(|index| countries()[index].clone()))
    }
}
