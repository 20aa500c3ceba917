//! The closed set of item categories.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use curio_core::{DomainError, ValueObject};

/// Item category.
///
/// A fixed enumeration; the order of [`Category::ALL`] is the display order
/// used when populating selection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Watch,
    Bag,
    Jewelry,
    Shoes,
    Other,
}

impl Category {
    /// Every valid category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Watch,
        Category::Bag,
        Category::Jewelry,
        Category::Shoes,
        Category::Other,
    ];

    /// Canonical label stored on item records.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Watch => "WATCH",
            Category::Bag => "BAG",
            Category::Jewelry => "JEWELRY",
            Category::Shoes => "SHOES",
            Category::Other => "OTHER",
        }
    }

    /// Labels of every valid category, in display order.
    ///
    /// Returned by value; the canonical set cannot be mutated through it.
    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(Category::label)
    }

    /// Exact-match lookup. Labels are case-sensitive: `"watch"` is not a
    /// category.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| DomainError::validation(membership_message()))
    }
}

/// The violation reported when a value is not a member of the category set.
pub(crate) fn membership_message() -> String {
    format!("category must be one of: {}", Category::labels().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_the_five_members_in_display_order() {
        assert_eq!(
            Category::labels(),
            ["WATCH", "BAG", "JEWELRY", "SHOES", "OTHER"]
        );
    }

    #[test]
    fn from_label_accepts_every_label() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn from_label_is_case_sensitive() {
        assert_eq!(Category::from_label("watch"), None);
        assert_eq!(Category::from_label("Bag"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn from_str_reports_the_valid_members() {
        let err = "HANDBAG".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert_eq!(
                    msg,
                    "category must be one of: WATCH, BAG, JEWELRY, SHOES, OTHER"
                );
            }
            _ => panic!("Expected Validation error for unknown category"),
        }
    }

    #[test]
    fn display_matches_the_stored_label() {
        assert_eq!(Category::Jewelry.to_string(), "JEWELRY");
    }

    #[test]
    fn serializes_as_the_label() {
        let json = serde_json::to_string(&Category::Shoes).unwrap();
        assert_eq!(json, "\"SHOES\"");

        let parsed: Category = serde_json::from_str("\"OTHER\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }
}
