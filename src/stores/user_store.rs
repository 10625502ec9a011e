use crate::models::user::User;

/// In-memory store of user records
///
/// Seeded once at startup and never mutated afterwards, which makes it safe
/// to share across request handlers without locking. Records keep their
/// insertion order.
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create a store with the hand-authored demo records
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new(1, "Alice Dupont", "alice@example.com", true),
            User::new(2, "Bob Martin", "bob@example.com", true),
            User::new(3, "Charlie Durand", "charlie@example.com", false),
        ])
    }

    /// Create a store from an explicit record list
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// List records in insertion order, optionally restricted to active ones
    pub fn list(&self, active_only: bool) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| !active_only || user.active)
            .collect()
    }

    /// Look up a record by ID
    ///
    /// Linear search, first match wins.
    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }


    pub fn len(&self) -> usize {
        self.users.len()
    }


    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}
