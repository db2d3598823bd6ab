//! Expense categories and income sources
//!
//! Records carry their category (expenses) or source (incomes) as free text.
//! Both are classified into closed enumerations here, each with an explicit
//! `Other` arm and an `Unrecognized` arm that keeps text no variant matches,
//! so an unknown value is a visible case rather than a silent lookup miss.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical comparison key: lowercase, trimmed, `&` spelled as "and",
/// runs of whitespace collapsed.
pub fn normalize_label(text: &str) -> String {
    text.to_lowercase()
        .replace('&', " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Macro to generate a closed classification enum over free-text labels
macro_rules! define_classification {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:ident {
            $( $variant:ident => $label:literal, [$($alias:literal),*]; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
            /// Text that matches no known variant, kept as entered (trimmed)
            Unrecognized(String),
        }

        impl $name {
            /// Classify free text; empty text falls back to the default arm
            pub fn parse(text: &str) -> Self {
                let key = normalize_label(text);
                if key.is_empty() {
                    return Self::$fallback;
                }
                $(
                    if key == normalize_label($label) $(|| key == $alias)* {
                        return Self::$variant;
                    }
                )*
                Self::Unrecognized(text.trim().to_string())
            }

            /// The display label; unrecognized text is shown as entered
            pub fn label(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )*
                    Self::Unrecognized(text) => text.as_str(),
                }
            }

            /// Comparison key shared by every spelling of the same label
            pub fn key(&self) -> String {
                normalize_label(self.label())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self::parse(text)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text: Option<String> = Option::deserialize(deserializer)?;
                Ok(Self::parse(text.as_deref().unwrap_or_default()))
            }
        }
    };
}

define_classification! {
    /// What an expense was spent on
    ExpenseCategory, fallback = Other {
        Food => "Food", ["food and dining", "dining", "groceries", "restaurants"];
        Transportation => "Transportation", ["transport", "gas", "fuel"];
        Housing => "Housing", ["rent", "mortgage", "home"];
        Utilities => "Utilities", ["bills", "bills and utilities", "utility"];
        Entertainment => "Entertainment", ["fun", "leisure"];
        Healthcare => "Healthcare", ["health", "medical", "health and fitness"];
        Shopping => "Shopping", ["clothing"];
        Education => "Education", ["school", "tuition"];
        PersonalCare => "Personal Care", ["personal"];
        Travel => "Travel", ["vacation"];
        Insurance => "Insurance", [];
        Savings => "Savings", [];
        Other => "Other", ["misc", "miscellaneous", "general"];
    }
}

define_classification! {
    /// Where an income came from
    IncomeSource, fallback = Other {
        Salary => "Salary", ["wages", "paycheck"];
        Freelance => "Freelance", ["contract", "consulting"];
        Business => "Business", [];
        Investment => "Investment", ["investments", "dividends", "interest"];
        Rental => "Rental", ["rent", "rental income"];
        Gift => "Gift", ["gifts"];
        Refund => "Refund", ["refunds", "reimbursement"];
        Other => "Other", ["misc", "miscellaneous"];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(ExpenseCategory::parse("Food"), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::parse("  food "), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::parse("Food & Dining"), ExpenseCategory::Food);
        assert_eq!(
            ExpenseCategory::parse("personal care"),
            ExpenseCategory::PersonalCare
        );
        assert_eq!(IncomeSource::parse("Wages"), IncomeSource::Salary);
    }

    #[test]
    fn test_unrecognized_keeps_text() {
        let category = ExpenseCategory::parse(" Pet Supplies ");
        assert_eq!(
            category,
            ExpenseCategory::Unrecognized("Pet Supplies".to_string())
        );
        assert_eq!(category.label(), "Pet Supplies");
        assert_ne!(category.key(), ExpenseCategory::Other.key());
    }

    #[test]
    fn test_empty_falls_back_to_other() {
        assert_eq!(ExpenseCategory::parse(""), ExpenseCategory::Other);
        assert_eq!(IncomeSource::parse("   "), IncomeSource::Other);
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Other);
    }

    #[test]
    fn test_key_ignores_spelling() {
        assert_eq!(
            ExpenseCategory::parse("Pet  Supplies").key(),
            ExpenseCategory::parse("pet supplies").key()
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ExpenseCategory::PersonalCare).unwrap();
        assert_eq!(json, "\"Personal Care\"");

        let parsed: Vec<IncomeSource> =
            serde_json::from_str(r#"["Salary", "lottery", null]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                IncomeSource::Salary,
                IncomeSource::Unrecognized("lottery".to_string()),
                IncomeSource::Other
            ]
        );
    }
}
