use parking_lot::RwLock;

use crate::dto::{Payment, User};

use super::{PaymentsStore, UsersStore};

#[derive(Default)]
struct Tables {
    users: UsersStore,
    payments: PaymentsStore,
}

/// Shared in-memory store for users and payments.
///
/// One reader/writer lock covers both tables. Reads run in parallel; a write
/// holds the exclusive lock only for the map mutation. Callers get clones, so
/// no lock outlives a method call.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store. See [`MemoryStore::seeded`] for the demo data set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.tables.read().users.get(email).cloned()
    }

    pub fn insert_user(&self, user: User) {
        self.tables.write().users.insert(user);
    }

    /// Returns every payment in unspecified order.
    pub fn payment_list(&self) -> Vec<Payment> {
        self.tables.read().payments.iter().cloned().collect()
    }

    pub fn get_payment_by_id(&self, id: &str) -> Option<Payment> {
        self.tables.read().payments.get(id).cloned()
    }

    /// Upserts by payment id.
    pub fn update_payment(&self, payment: Payment) {
        self.tables.write().payments.upsert(payment);
    }

    pub fn clear_payments(&self) {
        self.tables.write().payments.clear();
    }

    pub fn payment_count(&self) -> usize {
        self.tables.read().payments.len()
    }

    /// Runs `f` over the payments under a single read lock, without cloning them.
    pub(crate) fn with_payments<R>(&self, f: impl FnOnce(&PaymentsStore) -> R) -> R {
        f(&self.tables.read().payments)
    }
}
