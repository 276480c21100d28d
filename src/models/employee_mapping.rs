//! Employee name to ID mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps employee display names to employee IDs.
///
/// Names that are not in the mapping resolve to themselves, so an unavailable
/// lookup sheet never blocks a conversion.
///
/// # Example
///
/// ```
/// use shift_converter::models::EmployeeMapping;
///
/// let mut mapping = EmployeeMapping::default();
/// mapping.insert("Alice", "E001");
///
/// assert_eq!(mapping.id_for("Alice"), "E001");
/// assert_eq!(mapping.id_for("Bob"), "Bob");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMapping {
    ids: HashMap<String, String>,
}

impl EmployeeMapping {
    /// Inserts a mapping, returning the ID it replaced if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) -> Option<String> {
        self.ids.insert(name.into(), id.into())
    }

    /// Returns the mapped ID for a name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    /// Returns the mapped ID for a name, or the name itself when unmapped.
    pub fn id_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Number of mapped names.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no names are mapped.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
