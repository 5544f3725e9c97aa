//! User record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record from the fixed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> (id {})", self.name, self.email, self.id)
    }
}
