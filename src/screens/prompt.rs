//! Input seam for the terminal screens.

use dialoguer::{Input, Password, Select};

use super::ScreenError;

pub trait Prompter {
    /// Free-form visible input. Empty answers are allowed.
    fn text(&mut self, label: &str) -> Result<String, ScreenError>;
    /// Hidden input. Empty answers are allowed.
    fn secret(&mut self, label: &str) -> Result<String, ScreenError>;
    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, ScreenError>;
    /// Print a line of screen text.
    fn say(&mut self, line: &str);
}

/// Interactive prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn text(&mut self, label: &str) -> Result<String, ScreenError> {
        let value = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn secret(&mut self, label: &str) -> Result<String, ScreenError> {
        let value = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, ScreenError> {
        let index = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}
