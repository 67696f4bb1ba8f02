//! Payment ledger storage keyed by payment id.
//!
//! Ids are unique: writing a payment whose id already exists replaces the
//! stored record. There is no per-record delete, only [`PaymentsStore::clear`].

use std::collections::HashMap;

use crate::dto::Payment;

#[derive(Default)]
pub struct PaymentsStore {
    payments: HashMap<String, Payment>,
}

impl PaymentsStore {
    pub fn new() -> Self {
        Self {
            payments: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.payments.get(id)
    }

    /// Inserts the payment if its id is absent, overwrites it otherwise.
    pub fn upsert(&mut self, payment: Payment) {
        self.payments.insert(payment.id.clone(), payment);
    }

    pub fn clear(&mut self) {
        self.payments.clear();
    }

    /// Iterates in map order, which is unspecified and may change between calls.
    pub fn iter(&self) -> impl Iterator<Item = &Payment> {
        self.payments.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.payments.len()
    }
}
