use dialoguer::Input;

use crate::error::{ChefError, Result};

/// Word that ends the interactive session.
pub const EXIT_WORD: &str = "exit";

/// Parse a servings answer: must be a positive whole number.
pub fn parse_servings(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ChefError::InvalidServings(format!("'{}' is not a number", trimmed)))?;

    if value <= 0 {
        return Err(ChefError::InvalidServings(format!(
            "{} is not a positive number",
            value
        )));
    }

    u32::try_from(value).map_err(|_| ChefError::InvalidServings(format!("{} is too large", value)))
}

/// Trim preference text, rejecting blank input.
pub fn validate_preferences(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChefError::InvalidPreferences);
    }
    Ok(trimmed.to_string())
}

/// Ask what the user wants to eat. `None` means they typed the exit word.
pub fn prompt_preferences() -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter what you want to eat")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().eq_ignore_ascii_case(EXIT_WORD) {
            return Ok(None);
        }

        match validate_preferences(&input) {
            Ok(prefs) => return Ok(Some(prefs)),
            Err(e) => println!("{}", e),
        }
    }
}

/// Ask for the number of servings.
pub fn prompt_servings() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many servings?")
        .interact_text()?;

    parse_servings(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_servings_valid() {
        assert_eq!(parse_servings("2").unwrap(), 2);
        assert_eq!(parse_servings("  12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_servings_rejects_bad_input() {
        for bad in ["", "two", "1.5", "0", "-3", "99999999999"] {
            let err = parse_servings(bad).unwrap_err();
            assert!(matches!(err, ChefError::InvalidServings(_)), "{bad}");
        }
    }

    #[test]
    fn test_validate_preferences() {
        assert_eq!(validate_preferences("  chicken rice ").unwrap(), "chicken rice");
        assert!(matches!(
            validate_preferences("   "),
            Err(ChefError::InvalidPreferences)
        ));
    }
}
