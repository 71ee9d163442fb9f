//! Input validation
//!
//! Pure checks over raw user input. Nothing here touches the ledger or the
//! filesystem; the front end calls these before handing values to the
//! session, and the session calls them again so that no path can skip them.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, TransactionKind};

/// True when the amount can be recorded
pub fn is_positive_amount(amount: Money) -> bool {
    amount.is_positive()
}

/// True when the trimmed text is non-empty and made only of ASCII digits
pub fn is_all_digits(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check a transaction description and return it trimmed
pub fn validate_description(description: &str) -> FinanceResult<String> {
    let trimmed = description.trim();

    if trimmed.is_empty() || is_all_digits(trimmed) {
        return Err(FinanceError::Validation(
            "Description cannot be empty or only numbers".into(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Check that an amount is strictly positive
pub fn validate_amount(amount: Money) -> FinanceResult<Money> {
    if !is_positive_amount(amount) {
        return Err(FinanceError::Validation(format!(
            "Amount must be greater than zero (got {})",
            amount
        )));
    }
    Ok(amount)
}

/// Check a budget ceiling
pub fn validate_budget(value: Money) -> FinanceResult<Money> {
    if !is_positive_amount(value) {
        return Err(FinanceError::Validation(format!(
            "Budget must be greater than zero (got {})",
            value
        )));
    }
    Ok(value)
}

/// Parse and check a positive amount typed by the user
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| FinanceError::Validation(format!("Invalid amount: {}", e)))?;
    validate_amount(amount)
}

/// Parse a menu choice within an inclusive range
pub fn parse_menu_choice(input: &str, min: usize, max: usize) -> FinanceResult<usize> {
    let choice: usize = input.trim().parse().map_err(|_| {
        FinanceError::Validation(format!("'{}' is not a valid number", input.trim()))
    })?;

    if choice < min || choice > max {
        return Err(FinanceError::Validation(format!(
            "Please enter a number between {} and {}",
            min, max
        )));
    }

    Ok(choice)
}

/// Parse a transaction kind ("income", "expense", "1" or "2")
pub fn parse_kind(input: &str) -> FinanceResult<TransactionKind> {
    input.parse().map_err(FinanceError::Validation)
}

/// Check a new category name and return it trimmed
pub fn validate_category_name(name: &str) -> FinanceResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(
            "Category name cannot be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}
