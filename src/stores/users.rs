use std::collections::HashMap;

use crate::dto::User;

#[derive(Default)]
pub struct UsersStore {
    users: HashMap<String, User>,
}

impl UsersStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Inserts a user keyed by email, replacing any existing entry.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.email.clone(), user);
    }
}
