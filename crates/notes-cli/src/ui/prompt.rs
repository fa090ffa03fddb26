//! Interactive prompts.
//!
//! Required values are re-asked until the input is acceptable, so callers
//! never see an empty title or an unparseable date.

use chrono::NaiveDate;
use dialoguer::{Input, Password, Select};

use notes_core::date::parse_date;

/// Ask for hidden password input until something non-empty is entered.
pub fn password(prompt: &str) -> anyhow::Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Ask for a non-empty line of text.
pub fn required_text(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(format!("{} (required)", prompt))
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", prompt.to_lowercase(), e))
}

/// Ask for a `dd.mm.yyyy` date.
pub fn date(prompt: &str) -> anyhow::Result<NaiveDate> {
    let raw = Input::<String>::new()
        .with_prompt(format!("{} (dd.mm.yyyy)", prompt))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read date: {}", e))?;
    Ok(parse_date(&raw)?)
}

/// Ask for a one-based note number.
pub fn note_number(prompt: &str) -> anyhow::Result<usize> {
    Input::<usize>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read note number: {}", e))
}

/// Pick one of `items`, returning its index.
pub fn select(prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
