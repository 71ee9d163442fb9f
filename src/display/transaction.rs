//! Transaction display formatting

use crate::models::Transaction;

/// Format a single transaction as a numbered register row
pub fn format_transaction_row(position: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:>3}. {} {:7} {:24} {:>12}  {}",
        position,
        txn.timestamp().format("%Y-%m-%d"),
        txn.kind().label(),
        truncate(txn.description(), 24),
        txn.amount().format_with_symbol(symbol),
        txn.category()
    )
}

/// Format the ledger as a numbered register
///
/// Positions start at 1 and are the ones `transaction delete` expects.
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("=== Transaction History ===\n");
    output.push_str(&format!(
        "{:>3}  {:10} {:7} {:24} {:>12}  {}\n",
        "#", "Date", "Type", "Description", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(index + 1, txn, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn sample(description: &str) -> Transaction {
        Transaction::with_timestamp(
            TransactionKind::Expense,
            description,
            Money::from_cents(1999),
            "Shopping",
            Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "$"),
            "No transactions recorded.\n"
        );
    }

    #[test]
    fn test_register_is_numbered_from_one() {
        let output = format_transaction_register(&[sample("Shirt"), sample("Socks")], "$");
        assert!(output.contains("  1. 2025-03-02 Expense Shirt"));
        assert!(output.contains("  2. 2025-03-02 Expense Socks"));
        assert!(output.contains("$19.99"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
        assert_eq!(truncate("ééééééééééé", 5), "éé...");
    }
}
