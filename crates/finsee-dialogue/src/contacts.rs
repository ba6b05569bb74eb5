//! The demo contact book for pay-by-contact.

/// Known payees. Fixed demo data, matching is case-insensitive.
pub const CONTACTS: &[&str] = &[
    "John Doe",
    "Jane Smith",
    "Alice Johnson",
    "bob",
    "charlie",
    "karan",
];

/// Case-insensitive lookup over the fixed contact list.
#[derive(Debug, Clone, Default)]
pub struct ContactBook;

impl ContactBook {
    pub fn new() -> Self {
        Self
    }

    /// All contacts whose name contains the query.
    pub fn search(&self, query: &str) -> Vec<&'static str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        CONTACTS
            .iter()
            .copied()
            .filter(|name| name.to_lowercase().contains(&query))
            .collect()
    }

    /// Resolve a spoken name to a single contact.
    ///
    /// An exact (case-insensitive) name always wins; otherwise a substring
    /// query resolves only when it is unambiguous.
    pub fn find(&self, name: &str) -> Option<&'static str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(exact) = CONTACTS.iter().find(|c| c.to_lowercase() == needle) {
            return Some(exact);
        }
        let matches = self.search(&needle);
        if matches.len() == 1 {
            Some(matches[0])
        } else {
            None
        }
    }
}
