//! Category registry
//!
//! Keeps one ordered list of category labels per transaction kind. Lists only
//! grow: new names are appended at the end, and the same name may appear
//! more than once.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;
use crate::error::{FinanceError, FinanceResult};
use crate::validation;

/// Income categories every new registry starts with
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Investments"];

/// Expense categories every new registry starts with
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] =
    &["Food", "Rent", "Entertainment", "Bills", "Shopping"];

/// How the caller picked a category during transaction entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// 1-based position in the list shown for the kind
    Existing(usize),
    /// "Other": create a new category with this name
    New(String),
}

/// Known categories for income and expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    income: Vec<String>,
    expense: Vec<String>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            expense: DEFAULT_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryRegistry {
    /// Create a registry seeded with the default categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from stored lists, exactly as given
    pub fn from_parts(income: Vec<String>, expense: Vec<String>) -> Self {
        Self { income, expense }
    }

    /// Ordered categories for a kind
    pub fn list(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Append a new category and return the stored name
    pub fn add(&mut self, kind: TransactionKind, name: &str) -> FinanceResult<String> {
        let name = validation::validate_category_name(name)?;
        self.list_mut(kind).push(name.clone());
        Ok(name)
    }

    /// Turn a menu selection into a category name
    ///
    /// An existing entry is returned unchanged. A new name is appended to the
    /// kind's list first, even if an identical entry already exists.
    pub fn resolve_or_create(
        &mut self,
        kind: TransactionKind,
        selection: CategorySelection,
    ) -> FinanceResult<String> {
        match selection {
            CategorySelection::Existing(position) => {
                let list = self.list(kind);
                if position == 0 || position > list.len() {
                    return Err(FinanceError::Validation(format!(
                        "Please choose a {} category between 1 and {}",
                        kind.label().to_lowercase(),
                        list.len()
                    )));
                }
                Ok(list[position - 1].clone())
            }
            CategorySelection::New(name) => self.add(kind, &name),
        }
    }

    /// Check whether a name is already listed for a kind
    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        self.list(kind).iter().any(|c| c == name)
    }

    pub fn income(&self) -> &[String] {
        &self.income
    }

    pub fn expense(&self) -> &[String] {
        &self.expense
    }

    fn list_mut(&mut self, kind: TransactionKind) -> &mut Vec<String> {
        match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds() {
        let registry = CategoryRegistry::new();
        assert_eq!(
            registry.list(TransactionKind::Income),
            ["Salary", "Bonus", "Investments"]
        );
        assert_eq!(
            registry.list(TransactionKind::Expense),
            ["Food", "Rent", "Entertainment", "Bills", "Shopping"]
        );
    }

    #[test]
    fn test_select_existing() {
        let mut registry = CategoryRegistry::new();
        let name = registry
            .resolve_or_create(TransactionKind::Expense, CategorySelection::Existing(2))
            .unwrap();
        assert_eq!(name, "Rent");
        assert_eq!(registry.list(TransactionKind::Expense).len(), 5);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut registry = CategoryRegistry::new();
        for position in [0, 4] {
            let err = registry
                .resolve_or_create(TransactionKind::Income, CategorySelection::Existing(position))
                .unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_create_new_appends_trimmed() {
        let mut registry = CategoryRegistry::new();
        let name = registry
            .resolve_or_create(
                TransactionKind::Expense,
                CategorySelection::New("  Travel ".into()),
            )
            .unwrap();
        assert_eq!(name, "Travel");
        assert_eq!(
            registry.list(TransactionKind::Expense).last().map(String::as_str),
            Some("Travel")
        );
        // Income list is untouched
        assert_eq!(registry.list(TransactionKind::Income).len(), 3);
    }

    #[test]
    fn test_create_empty_name_rejected() {
        let mut registry = CategoryRegistry::new();
        let err = registry
            .resolve_or_create(TransactionKind::Income, CategorySelection::New("  ".into()))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(registry.list(TransactionKind::Income).len(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut registry = CategoryRegistry::new();
        registry.add(TransactionKind::Expense, "Food").unwrap();
        registry.add(TransactionKind::Expense, "Food").unwrap();

        let food_count = registry
            .list(TransactionKind::Expense)
            .iter()
            .filter(|c| c.as_str() == "Food")
            .count();
        assert_eq!(food_count, 3);
    }
}
