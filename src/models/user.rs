use serde::{Deserialize, Serialize};

/// A user record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// Email address (expected to match a simple pattern, not enforced here)
    pub email: String,
    /// Whether the account is active
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(id: u32, name: &str, email: &str, active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            active,
        }
    }
}
