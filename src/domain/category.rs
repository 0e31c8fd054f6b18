// SPDX-License-Identifier: MPL-2.0
//! Try-on categories.
//!
//! The set is fixed: the generation prompt, the category picker and the
//! wire format all enumerate exactly these four values.

use std::fmt;
use std::str::FromStr;

/// What kind of item the second photo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Shirt,
    Pants,
    Shoes,
    Hair,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 4] = [
        Category::Shirt,
        Category::Pants,
        Category::Shoes,
        Category::Hair,
    ];

    /// Lowercase identifier used on the wire (`"shirt"`, `"pants"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Shirt => "shirt",
            Category::Pants => "pants",
            Category::Shoes => "shoes",
            Category::Hair => "hair",
        }
    }

    /// Returns the i18n message key for the category label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Category::Shirt => "category-shirt",
            Category::Pants => "category-pants",
            Category::Shoes => "category-shoes",
            Category::Hair => "category-hair",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shirt" => Ok(Category::Shirt),
            "pants" => Ok(Category::Pants),
            "shoes" => Ok(Category::Shoes),
            "hair" => Ok(Category::Hair),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
