//! Category display formatting

use crate::models::{CategoryRegistry, TransactionKind};

/// Format one kind's categories as a numbered menu
///
/// The trailing "Other" entry is what the entry flow offers for creating a
/// new category; its number is one past the last existing category.
pub fn format_category_menu(registry: &CategoryRegistry, kind: TransactionKind) -> String {
    let categories = registry.list(kind);
    let mut output = format!("{} categories:\n", kind.label());

    for (index, name) in categories.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", index + 1, name));
    }
    output.push_str(&format!(
        "  {}. Other (Create New Category)\n",
        categories.len() + 1
    ));

    output
}

/// Format the categories of the requested kinds (both when `None`)
pub fn format_category_lists(registry: &CategoryRegistry, kind: Option<TransactionKind>) -> String {
    let kinds: Vec<TransactionKind> = match kind {
        Some(kind) => vec![kind],
        None => TransactionKind::ALL.to_vec(),
    };

    kinds
        .into_iter()
        .map(|kind| {
            let categories = registry.list(kind);
            let mut block = format!("{} categories:\n", kind.label());
            for (index, name) in categories.iter().enumerate() {
                block.push_str(&format!("  {}. {}\n", index + 1, name));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
